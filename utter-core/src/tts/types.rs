use serde::{Deserialize, Serialize};

/// Audio data returned from TTS synthesis (16-bit little-endian PCM)
#[derive(Debug, Clone)]
pub struct AudioData {
    pub pcm_data: Vec<u8>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioData {
    /// Duration of the audio in whole milliseconds
    pub fn duration_ms(&self) -> u64 {
        let frames = self.pcm_data.len() as u64 / (2 * self.channels as u64);
        frames * 1000 / self.sample_rate as u64
    }
}

/// A voice offered by a synthesis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Service identifier, e.g. "en-US-AriaNeural"
    pub short_name: String,
    /// Human-readable name, e.g. "Aria"
    pub display_name: String,
    /// BCP-47 locale, e.g. "en-US"
    pub locale: String,
    pub gender: Option<String>,
}
