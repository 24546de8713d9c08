//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ScriptureProvider、JournalStore、Oracle、Speaker）
//! - session: 会话状态机与编排
//! - narration: 单飞朗读服务
//! - error: 应用层错误定义

pub mod error;
pub mod narration;
pub mod ports;
pub mod session;

pub use error::ApplicationError;
pub use narration::{NarrationError, NarrationOutcome, Narrator, NARRATION_SAMPLE_RATE};
pub use ports::{
    GeoHint, GroundedAnswer, GroundingCitation, JournalStorePort, OracleError, OraclePort,
    ScriptureError, ScriptureProviderPort, SpeakerError, SpeakerPort, StoreError,
};
pub use session::{SessionController, SessionEvent, SessionState, Tab, INSIGHT_FALLBACK_TEXT};
