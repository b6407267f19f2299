pub mod operations;

pub const SMALL_SCHEMA: &str = r#"
"A single user account."
type User {
  id: ID!
  name: String!
  email: String
}

type Query {
  user(id: ID!): User
}
"#;

pub const MEDIUM_SCHEMA: &str = r#"
schema {
  query: Query
  mutation: Mutation
}

"A blog post authored by a User."
type Post {
  id: ID!
  title: String!
  body: String!
  author: User!
  tags: [String!]!
  comments(first: Int, after: String): [Comment!]!
}

type Comment {
  id: ID!
  post: Post!
  author: User!
  body: String!
  createdAt: String!
}

type User {
  id: ID!
  name: String!
  email: String
  posts(first: Int): [Post!]!
}

enum Role {
  ADMIN
  EDITOR
  VIEWER
}

input CreatePostInput {
  title: String!
  body: String!
  tags: [String!] = []
}

type Query {
  user(id: ID!): User
  post(id: ID!): Post
  posts(first: Int = 10, after: String): [Post!]!
}

type Mutation {
  createPost(input: CreatePostInput!): Post!
  deletePost(id: ID!): Boolean!
}
"#;

pub const LARGE_SCHEMA: &str = r#"
schema {
  query: Query
  mutation: Mutation
  subscription: Subscription
}

directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION | ENUM_VALUE
directive @auth(requires: Role = ADMIN) repeatable on FIELD_DEFINITION | OBJECT

interface Node {
  id: ID!
}

interface Timestamped {
  createdAt: String!
  updatedAt: String!
}

enum Role {
  ADMIN
  EDITOR
  VIEWER
}

type User implements Node Timestamped {
  id: ID!
  name: String!
  email: String
  role: Role!
  posts(first: Int, after: String): PostConnection!
  createdAt: String!
  updatedAt: String!
}

type Post implements Node Timestamped {
  id: ID!
  title: String!
  body: String!
  author: User!
  tags: [String!]!
  comments(first: Int, after: String): CommentConnection!
  createdAt: String!
  updatedAt: String!
}

type Comment implements Node Timestamped {
  id: ID!
  post: Post!
  author: User!
  body: String!
  createdAt: String!
  updatedAt: String!
}

type PostConnection {
  edges: [PostEdge!]!
  pageInfo: PageInfo!
}

type PostEdge {
  cursor: String!
  node: Post!
}

type CommentConnection {
  edges: [CommentEdge!]!
  pageInfo: PageInfo!
}

type CommentEdge {
  cursor: String!
  node: Comment!
}

type PageInfo {
  hasNextPage: Boolean!
  hasPreviousPage: Boolean!
  startCursor: String
  endCursor: String
}

union SearchResult = User | Post | Comment

input CreatePostInput {
  title: String!
  body: String!
  tags: [String!] = []
}

input UpdatePostInput {
  title: String
  body: String
  tags: [String!]
}

input PostFilter {
  authorId: ID
  tag: String
  createdAfter: String
}

type Query {
  node(id: ID!): Node
  user(id: ID!): User
  post(id: ID!): Post
  posts(filter: PostFilter, first: Int = 10, after: String): PostConnection!
  search(term: String!): [SearchResult!]!
}

type Mutation {
  createPost(input: CreatePostInput!): Post! @auth(requires: EDITOR)
  updatePost(id: ID!, input: UpdatePostInput!): Post! @auth(requires: EDITOR)
  deletePost(id: ID!): Boolean! @auth(requires: ADMIN)
}

type Subscription {
  postCreated: Post!
  commentAdded(postId: ID!): Comment!
}

extend type Query {
  viewer: User
}
"#;

pub const SIMPLE_QUERY: &str = r#"
query GetUser($id: ID!) {
  user(id: $id) {
    id
    name
    email
  }
}
"#;

pub const COMPLEX_QUERY: &str = r#"
query Dashboard($userId: ID!, $first: Int = 10, $includeDrafts: Boolean = false) {
  user(id: $userId) {
    id
    name
    ...UserDetails
    posts(first: $first) {
      edges {
        cursor
        node @include(if: $includeDrafts) @skip(if: false) {
          id
          title
          ... on Post {
            tags
            comments(first: 5) {
              edges {
                node {
                  id
                  body
                  author {
                    name
                  }
                }
              }
            }
          }
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}

fragment UserDetails on User {
  email
  role
  createdAt
}
"#;
