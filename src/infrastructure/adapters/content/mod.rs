//! Content Adapters - 经文提供器实现

mod placeholder_provider;

pub use placeholder_provider::{PlaceholderProvider, PlaceholderProviderConfig, VERSES_PER_CHAPTER};
