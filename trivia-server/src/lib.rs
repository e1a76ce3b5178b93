//! trivia-server: HTTP API for a trivia quiz backend
//!
//! Exposes trivia questions and categories over HTTP/JSON: paginated
//! listing, substring search, create/delete, category-scoped listing, and
//! random quiz draws with seen-question exclusion. Backed by PostgreSQL
//! through an sqlx connection pool.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, migrations, DbError};
pub use http::{run_server, ApiError, AppState, ServerConfig, ServerError};
