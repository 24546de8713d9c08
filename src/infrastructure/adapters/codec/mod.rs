//! Codec Adapters - 音频载荷解码

mod pcm;

pub use pcm::{decode_base64_pcm16, PcmError};
