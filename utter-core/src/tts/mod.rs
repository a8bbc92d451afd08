//! Speech synthesis: provider trait, service implementations, and the
//! input rules the UI enforces before dispatching a request.

pub mod azure;
pub mod elevenlabs;
pub mod provider;
pub mod types;

use anyhow::{bail, Context, Result};
use thiserror::Error;

use crate::settings::{Settings, TtsProviderConfig};
use azure::{AzureConfig, AzureSpeech};
use elevenlabs::{ElevenLabs, ElevenLabsConfig};
use provider::TextToSpeech;
use types::Voice;

/// Maximum request length accepted by the synthesis services we target
pub const MAX_TEXT_LEN: usize = 5000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TextError {
    #[error("Please enter some text")]
    Empty,

    #[error("Text too long (max 5000 chars)")]
    TooLong { len: usize },
}

/// Validate request text before any network dispatch
pub fn validate_text(text: &str) -> Result<(), TextError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TextError::Empty);
    }
    let len = trimmed.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(TextError::TooLong { len });
    }
    Ok(())
}

/// Keep only voices matching the configured locale
pub fn filter_voices(voices: Vec<Voice>, locale: &str) -> Vec<Voice> {
    voices
        .into_iter()
        .filter(|v| v.locale.eq_ignore_ascii_case(locale))
        .collect()
}

/// Build the active provider from settings
pub fn provider_from_settings(settings: &Settings) -> Result<Box<dyn TextToSpeech>> {
    let name = settings
        .active_provider
        .as_deref()
        .context("No active TTS provider configured; set active_provider in settings")?;
    let config = settings
        .providers
        .get(name)
        .with_context(|| format!("TTS provider {name:?} is not defined in settings"))?;

    match config {
        TtsProviderConfig::Azure { region, api_key } => {
            if api_key.is_empty() {
                bail!("TTS provider {name:?} has an empty api_key");
            }
            Ok(Box::new(AzureSpeech::new(AzureConfig {
                region: region.clone(),
                api_key: api_key.clone(),
            })))
        }
        TtsProviderConfig::ElevenLabs { api_key, model_id } => {
            if api_key.is_empty() {
                bail!("TTS provider {name:?} has an empty api_key");
            }
            Ok(Box::new(ElevenLabs::new(ElevenLabsConfig::new(
                api_key.clone(),
                model_id.clone(),
            ))))
        }
    }
}
