//! In-memory scenario tree and its mutation operations.

pub mod tree_store;

pub use tree_store::TreeStore;
