//! Speaker Adapters - 音频回放实现

mod rodio_speaker;
mod silent_speaker;

pub use rodio_speaker::RodioSpeaker;
pub use silent_speaker::SilentSpeaker;
