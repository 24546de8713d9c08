//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod journal_store;
mod oracle;
mod scripture;
mod speaker;

pub use journal_store::{JournalStorePort, StoreError};
pub use oracle::{GeoHint, GroundedAnswer, GroundingCitation, OracleError, OraclePort};
pub use scripture::{ScriptureError, ScriptureProviderPort};
pub use speaker::{SpeakerError, SpeakerPort};
