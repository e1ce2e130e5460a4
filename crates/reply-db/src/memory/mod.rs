//! In-memory repository backend for tests and local runs

mod store;

pub use store::InMemoryStore;
