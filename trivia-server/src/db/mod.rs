//! Database layer - connection pool, migrations, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Totals ride along with list queries (COUNT(*) OVER()) - no N+1
//! - Transactions for multi-step writes
//! - Referential checks at write time, schema constraints as backstop

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
