pub mod artifact;
pub mod audio;
pub mod settings;
pub mod tts;

// Public library API - the CLI consumes these; anything deeper is fair
// game but less stable.
pub use artifact::Artifact;
pub use audio::playback::{AudioPlayback, AudioPlayer};
pub use settings::{Settings, SettingsManager};
pub use tts::provider::TextToSpeech;
pub use tts::types::{AudioData, Voice};
