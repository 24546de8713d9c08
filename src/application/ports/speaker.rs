//! Speaker Port - 音频回放抽象
//!
//! 回放适配器接收 base64 编码的 PCM16LE 单声道载荷，解码并完整播放一次。
//! 并发互斥由上层 Narrator 负责，端口本身不做排队。

use async_trait::async_trait;
use thiserror::Error;

/// 回放错误
#[derive(Debug, Error)]
pub enum SpeakerError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Playback error: {0}")]
    Playback(String),
}

/// Speaker Port
#[async_trait]
pub trait SpeakerPort: Send + Sync {
    /// 播放一段 base64 编码的 PCM16LE 单声道音频，播完后返回
    async fn play_pcm16(&self, payload: &str, sample_rate: u32) -> Result<(), SpeakerError>;
}
