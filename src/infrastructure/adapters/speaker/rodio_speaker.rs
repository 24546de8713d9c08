//! Rodio Speaker - 本机音频设备回放
//!
//! 解码 base64 PCM16 载荷后经 rodio 输出到默认音频设备。
//! rodio 的输出流不是 Send，每次播放在独立的阻塞任务里
//! 打开设备、播完即关。

use async_trait::async_trait;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};

use crate::application::ports::{SpeakerError, SpeakerPort};
use crate::infrastructure::adapters::codec::decode_base64_pcm16;

/// Rodio 扬声器
pub struct RodioSpeaker;

impl RodioSpeaker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeakerPort for RodioSpeaker {
    async fn play_pcm16(&self, payload: &str, sample_rate: u32) -> Result<(), SpeakerError> {
        let samples = decode_base64_pcm16(payload).map_err(|e| SpeakerError::Decode(e.to_string()))?;

        tracing::debug!(
            samples = samples.len(),
            sample_rate = sample_rate,
            "Starting device playback"
        );

        tokio::task::spawn_blocking(move || {
            let (_stream, handle) = OutputStream::try_default()
                .map_err(|e| SpeakerError::Device(e.to_string()))?;
            let sink = Sink::try_new(&handle).map_err(|e| SpeakerError::Device(e.to_string()))?;

            sink.append(SamplesBuffer::new(1, sample_rate, samples));
            sink.sleep_until_end();
            Ok(())
        })
        .await
        .map_err(|e| SpeakerError::Playback(e.to_string()))?
    }
}
