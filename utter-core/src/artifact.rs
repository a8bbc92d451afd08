//! The single working audio file produced by synthesis.
//!
//! Exactly one artifact exists at a time: each successful synthesis
//! overwrites it, and exporting it moves it away so the working location is
//! empty until the next generation.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::wav;
use crate::tts::types::AudioData;

pub const ARTIFACT_EXTENSION: &str = "wav";

pub struct Artifact {
    path: PathBuf,
}

impl Artifact {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default working location (~/.utter/output.wav)
    pub fn default_path() -> Result<Self> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        let dir = home.join(".utter");
        fs::create_dir_all(&dir).with_context(|| format!("Failed to create directory: {dir:?}"))?;
        Ok(Self::new(dir.join("output.wav")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Overwrite the working file with freshly synthesized audio
    pub fn write(&self, audio: &AudioData) -> Result<()> {
        wav::write(&self.path, audio)
    }

    /// Load the working file for playback
    pub fn read(&self) -> Result<AudioData> {
        wav::read(&self.path)
    }

    /// Move the working file to a user-chosen destination. Rename first;
    /// when that fails (e.g. destination on another filesystem), fall back
    /// to copy + remove.
    pub fn export(&self, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {parent:?}"))?;
            }
        }

        if fs::rename(&self.path, dest).is_err() {
            fs::copy(&self.path, dest)
                .with_context(|| format!("Failed to copy audio to {dest:?}"))?;
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {:?}", self.path))?;
        }

        Ok(())
    }
}

/// Ensure a user-supplied destination carries the artifact extension
pub fn with_artifact_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(ARTIFACT_EXTENSION) => path.to_path_buf(),
        _ => path.with_extension(ARTIFACT_EXTENSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_audio() -> AudioData {
        AudioData {
            pcm_data: vec![0u8; 64],
            sample_rate: 16000,
            channels: 1,
        }
    }

    #[test]
    fn export_moves_the_working_file() {
        let temp_dir = TempDir::new().unwrap();
        let artifact = Artifact::new(temp_dir.path().join("output.wav"));
        artifact.write(&sample_audio()).unwrap();
        assert!(artifact.exists());

        let dest = temp_dir.path().join("saved").join("speech.wav");
        artifact.export(&dest).unwrap();

        assert!(dest.exists());
        assert!(!artifact.exists());
    }

    #[test]
    fn export_replaces_existing_destination() {
        let temp_dir = TempDir::new().unwrap();
        let artifact = Artifact::new(temp_dir.path().join("output.wav"));
        artifact.write(&sample_audio()).unwrap();

        let dest = temp_dir.path().join("speech.wav");
        std::fs::write(&dest, b"stale").unwrap();
        artifact.export(&dest).unwrap();

        assert!(dest.metadata().unwrap().len() > 5);
        assert!(!artifact.exists());
    }

    #[test]
    fn extension_is_enforced() {
        assert_eq!(
            with_artifact_extension(Path::new("/tmp/speech")),
            PathBuf::from("/tmp/speech.wav")
        );
        assert_eq!(
            with_artifact_extension(Path::new("/tmp/speech.mp3")),
            PathBuf::from("/tmp/speech.wav")
        );
        assert_eq!(
            with_artifact_extension(Path::new("/tmp/speech.WAV")),
            PathBuf::from("/tmp/speech.WAV")
        );
    }
}
