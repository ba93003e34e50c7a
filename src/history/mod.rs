//! Analysis History
//!
//! Server-side log of past analyses, persisted as a JSON array.
//!
//! - **entry**: The `HistoryEntry` record returned by `GET /history`
//! - **store**: File-backed store with a bounded length
//! - **error**: Error types
//!
//! Entries are kept in append order (oldest first). Once the store holds
//! `max_entries` records, each append drops the oldest one.

pub mod entry;
pub mod error;
pub mod store;

pub use entry::HistoryEntry;
pub use error::{HistoryError, HistoryResult};
pub use store::HistoryStore;
