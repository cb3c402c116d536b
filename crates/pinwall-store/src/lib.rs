//! # pinwall-store
//!
//! Entity model and local persistence for Pinwall.
//!
//! The whole board collection is persisted as one JSON snapshot under a
//! single key: there are no partial updates. The crate exposes the
//! [`SnapshotStore`] contract, a SQLite-backed [`Database`] implementing it
//! as a key/value table, and an in-process [`MemoryStore`].

pub mod backup;
pub mod database;
pub mod kv;
pub mod memory;
pub mod migrations;
pub mod models;
pub mod seed;
pub mod snapshot;

mod error;

pub use database::Database;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use models::*;
pub use snapshot::SnapshotStore;
