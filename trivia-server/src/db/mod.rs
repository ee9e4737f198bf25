//! Database layer - connection pool, schema bootstrap and stores
//!
//! # Design Principles
//!
//! - Handlers only see `dyn TriviaStore`, never a pool
//! - Connection pool with a small explicit cap
//! - Rely on DB constraints, handle violations - no check-then-insert

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use store::{StoreError, TriviaStore};
