//! In-memory adapters - process-local implementations of the repository ports.

mod store;

pub use store::InMemoryStore;
