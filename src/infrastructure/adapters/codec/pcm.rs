//! PCM Decoder - base64 PCM16LE 载荷解码
//!
//! 合成端返回的音频是 base64 编码的有符号 16 位小端 PCM 单声道采样。
//! 解码流程: base64 → 字节 → i16 → 除以 32768 归一化到 [-1, 1]。

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

/// PCM 解码错误
#[derive(Debug, Error)]
pub enum PcmError {
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),

    #[error("PCM payload has odd byte length: {0}")]
    OddLength(usize),
}

/// 解码 base64 编码的 PCM16LE 载荷为归一化浮点采样
pub fn decode_base64_pcm16(payload: &str) -> Result<Vec<f32>, PcmError> {
    let bytes = BASE64
        .decode(payload)
        .map_err(|e| PcmError::InvalidBase64(e.to_string()))?;

    if bytes.len() % 2 != 0 {
        return Err(PcmError::OddLength(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect())
}
