//! Append-only sent-message log persisted as a single JSON file.
//!
//! The backing file holds one JSON array of [`MessageRecord`]s that is read
//! and rewritten wholesale on every append. [`Store`] selects between the
//! persistent [`JsonFileStore`] and an in-memory backend for tests.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{JsonFileStore, MemoryStore, Store};
pub use types::MessageRecord;
