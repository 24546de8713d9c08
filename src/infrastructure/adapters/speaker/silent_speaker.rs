//! Silent Speaker - 无声回放实现
//!
//! 解码载荷后只按音频时长休眠，不接触音频设备。
//! 用于测试与无声卡环境。

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{SpeakerError, SpeakerPort};
use crate::infrastructure::adapters::codec::decode_base64_pcm16;

/// 无声扬声器
pub struct SilentSpeaker;

impl SilentSpeaker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SilentSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeakerPort for SilentSpeaker {
    async fn play_pcm16(&self, payload: &str, sample_rate: u32) -> Result<(), SpeakerError> {
        let samples = decode_base64_pcm16(payload).map_err(|e| SpeakerError::Decode(e.to_string()))?;

        let duration = Duration::from_secs_f64(samples.len() as f64 / sample_rate as f64);
        tracing::debug!(
            samples = samples.len(),
            duration_ms = duration.as_millis() as u64,
            "Silent playback"
        );

        tokio::time::sleep(duration).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;

    #[tokio::test]
    async fn test_sleeps_for_clip_duration() {
        let speaker = SilentSpeaker::new();
        // 2400 采样 @ 24kHz = 100ms
        let payload = BASE64.encode(vec![0u8; 4800]);

        let start = std::time::Instant::now();
        speaker.play_pcm16(&payload, 24_000).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(90));
    }

    #[tokio::test]
    async fn test_rejects_bad_payload() {
        let speaker = SilentSpeaker::new();
        let err = speaker.play_pcm16("@@@", 24_000).await.unwrap_err();
        assert!(matches!(err, SpeakerError::Decode(_)));
    }
}
