//! Narration - 单飞朗读服务
//!
//! 同一时刻最多一次朗读在途：原子标志在合成发起前置位，
//! 在每条完成/失败路径上清除。在途期间的新请求被丢弃（不排队）。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::application::ports::{OracleError, OraclePort, SpeakerError, SpeakerPort};

/// 朗读载荷的采样率（Hz），由合成端固定
pub const NARRATION_SAMPLE_RATE: u32 = 24_000;

/// 朗读错误
#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("Synthesis failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("Playback failed: {0}")]
    Speaker(#[from] SpeakerError),
}

/// 单次朗读的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationOutcome {
    /// 合成并完整播放
    Played,
    /// 网关未返回音频载荷（合法空态）
    NoAudio,
}

/// 朗读服务
pub struct Narrator {
    oracle: Arc<dyn OraclePort>,
    speaker: Arc<dyn SpeakerPort>,
    playing: AtomicBool,
}

impl Narrator {
    pub fn new(oracle: Arc<dyn OraclePort>, speaker: Arc<dyn SpeakerPort>) -> Self {
        Self {
            oracle,
            speaker,
            playing: AtomicBool::new(false),
        }
    }

    /// 是否有朗读在途
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    /// 尝试获取朗读租约
    ///
    /// 返回 false 表示已有朗读在途，本次请求应被丢弃。
    /// 成功后必须调用 [`Narrator::perform`]，由它在所有路径上释放租约。
    pub fn try_begin(&self) -> bool {
        self.playing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// 执行已获租约的朗读：合成 → 解码播放
    pub async fn perform(&self, text: &str) -> Result<NarrationOutcome, NarrationError> {
        let result = self.narrate(text).await;
        self.playing.store(false, Ordering::Release);
        result
    }

    async fn narrate(&self, text: &str) -> Result<NarrationOutcome, NarrationError> {
        let payload = match self.oracle.synthesize_speech(text).await? {
            Some(payload) => payload,
            None => {
                tracing::info!(text_len = text.len(), "No audio payload in response");
                return Ok(NarrationOutcome::NoAudio);
            }
        };

        tracing::debug!(
            text_len = text.len(),
            payload_len = payload.len(),
            "Narration synthesized, starting playback"
        );

        self.speaker
            .play_pcm16(&payload, NARRATION_SAMPLE_RATE)
            .await?;

        Ok(NarrationOutcome::Played)
    }
}
