//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod codec;
pub mod content;
pub mod oracle;
pub mod speaker;

pub use codec::{decode_base64_pcm16, PcmError};
pub use content::{PlaceholderProvider, PlaceholderProviderConfig, VERSES_PER_CHAPTER};
pub use oracle::{FixedOracle, GeminiClient, GeminiClientConfig};
pub use speaker::{RodioSpeaker, SilentSpeaker};
