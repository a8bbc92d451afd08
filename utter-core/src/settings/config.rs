use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TtsProviderConfig {
    #[serde(rename = "azure")]
    Azure {
        #[serde(default = "default_region")]
        region: String,
        api_key: String,
    },
    #[serde(rename = "elevenlabs")]
    ElevenLabs {
        api_key: String,
        #[serde(default)]
        model_id: Option<String>,
    },
}

fn default_region() -> String {
    "eastus".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

/// Core application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// The name of the currently active provider
    #[serde(default)]
    pub active_provider: Option<String>,

    /// Map of provider name to configuration
    #[serde(default)]
    pub providers: HashMap<String, TtsProviderConfig>,

    /// Voice list is restricted to this locale at startup
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_provider: None,
            providers: HashMap::new(),
            locale: default_locale(),
        }
    }
}
