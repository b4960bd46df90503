//! Database-backed implementations of the storage contracts in [`crate::core::store`].

/// `EntryStore` over a `SeaORM` connection
pub mod entries;
