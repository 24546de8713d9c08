//! Sled-based Journal Store

mod journal_store;

pub use journal_store::{SledJournalStore, SledJournalStoreConfig};
