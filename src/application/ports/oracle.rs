//! Oracle Port - 生成式 AI 网关抽象
//!
//! 五个操作，每个都是对外部托管模型的单次往返：
//! 三个纯文本生成、一个音频合成、一个地理接地查询。
//! 不重试、不排队、不缓存；失败以类型化错误抛给调用方。

use async_trait::async_trait;
use thiserror::Error;

/// Oracle 错误
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing API credential")]
    MissingApiKey,
}

/// 地理提示（可选的检索线索，不是过滤条件）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoHint {
    pub latitude: f64,
    pub longitude: f64,
}

/// 接地引文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingCitation {
    pub title: Option<String>,
    pub uri: Option<String>,
}

/// 接地回答：正文 + 引文列表（引文缺失是合法空态）
#[derive(Debug, Clone)]
pub struct GroundedAnswer {
    pub text: String,
    pub citations: Vec<GroundingCitation>,
}

/// Oracle Port
#[async_trait]
pub trait OraclePort: Send + Sync {
    /// 书卷/主题深度洞见（temperature 0.7）
    async fn deep_insight(&self, topic: &str) -> Result<String, OracleError>;

    /// 每日灵修短文（temperature 0.8）
    async fn daily_devotional(&self) -> Result<String, OracleError>;

    /// 单节经文注释（temperature 0.4）
    async fn verse_commentary(&self, verse_text: &str) -> Result<String, OracleError>;

    /// 朗读合成
    ///
    /// 返回 base64 编码的 PCM16 载荷；响应链上任何一环缺失都视为
    /// "无音频可用"（Ok(None)），不是错误
    async fn synthesize_speech(&self, text: &str) -> Result<Option<String>, OracleError>;

    /// 圣经地名接地查询
    async fn locate(
        &self,
        place: &str,
        hint: Option<GeoHint>,
    ) -> Result<GroundedAnswer, OracleError>;
}
