//! Local audio transport: playback of synthesized PCM and WAV artifact I/O

pub mod playback;
pub mod wav;
