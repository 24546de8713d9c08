//! Fixed Oracle - 用于测试的固定应答网关
//!
//! 始终返回配置的固定内容，不实际调用外部模型

use async_trait::async_trait;

use crate::application::ports::{
    GeoHint, GroundedAnswer, GroundingCitation, OracleError, OraclePort,
};

/// 固定应答网关
pub struct FixedOracle {
    insight: String,
    devotional: String,
    commentary: String,
    /// 固定返回的音频载荷（None 模拟"无音频可用"）
    audio: Option<String>,
    answer: String,
    citations: Vec<GroundingCitation>,
}

impl FixedOracle {
    pub fn new() -> Self {
        Self {
            insight: "A fixed insight for testing.".to_string(),
            devotional: "A fixed devotional for testing.".to_string(),
            commentary: "A fixed commentary for testing.".to_string(),
            audio: None,
            answer: "A fixed grounded answer for testing.".to_string(),
            citations: Vec::new(),
        }
    }

    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insight = insight.into();
        self
    }

    pub fn with_audio(mut self, audio: Option<String>) -> Self {
        self.audio = audio;
        self
    }

    pub fn with_citations(mut self, citations: Vec<GroundingCitation>) -> Self {
        self.citations = citations;
        self
    }
}

impl Default for FixedOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OraclePort for FixedOracle {
    async fn deep_insight(&self, topic: &str) -> Result<String, OracleError> {
        tracing::debug!(topic = %topic, "FixedOracle: returning fixed insight");
        Ok(self.insight.clone())
    }

    async fn daily_devotional(&self) -> Result<String, OracleError> {
        Ok(self.devotional.clone())
    }

    async fn verse_commentary(&self, _verse_text: &str) -> Result<String, OracleError> {
        Ok(self.commentary.clone())
    }

    async fn synthesize_speech(&self, _text: &str) -> Result<Option<String>, OracleError> {
        Ok(self.audio.clone())
    }

    async fn locate(
        &self,
        _place: &str,
        _hint: Option<GeoHint>,
    ) -> Result<GroundedAnswer, OracleError> {
        Ok(GroundedAnswer {
            text: self.answer.clone(),
            citations: self.citations.clone(),
        })
    }
}
