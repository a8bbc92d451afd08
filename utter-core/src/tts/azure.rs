//! Microsoft Speech REST text-to-speech implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::provider::TextToSpeech;
use super::types::{AudioData, Voice};

const OUTPUT_FORMAT: &str = "raw-16khz-16bit-mono-pcm";

#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub region: String,
    pub api_key: String,
}

#[derive(Debug)]
pub struct AzureSpeech {
    config: AzureConfig,
    client: Client,
}

impl AzureSpeech {
    pub fn new(config: AzureConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn synthesis_url(&self) -> String {
        format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            self.config.region
        )
    }

    fn voices_url(&self) -> String {
        format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/voices/list",
            self.config.region
        )
    }
}

#[derive(Deserialize)]
struct VoiceData {
    #[serde(rename = "ShortName")]
    short_name: String,
    #[serde(rename = "DisplayName")]
    display_name: String,
    #[serde(rename = "Locale")]
    locale: String,
    #[serde(rename = "Gender")]
    gender: Option<String>,
}

#[async_trait]
impl TextToSpeech for AzureSpeech {
    async fn synthesize(&self, text: &str, voice: &Voice) -> Result<AudioData> {
        let body = ssml_body(text, voice);

        let response = self
            .client
            .post(self.synthesis_url())
            .header("Ocp-Apim-Subscription-Key", &self.config.api_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .body(body)
            .send()
            .await
            .context("Failed to send request to speech service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Speech service error {status}: {body}");
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read audio bytes")?
            .to_vec();

        Ok(AudioData {
            pcm_data: bytes,
            sample_rate: 16000,
            channels: 1,
        })
    }

    async fn list_voices(&self) -> Result<Vec<Voice>> {
        let response = self
            .client
            .get(self.voices_url())
            .header("Ocp-Apim-Subscription-Key", &self.config.api_key)
            .send()
            .await
            .context("Failed to list voices from speech service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Speech service error {status}: {body}");
        }

        let voices: Vec<VoiceData> = response
            .json()
            .await
            .context("Failed to parse voices response")?;

        Ok(voices
            .into_iter()
            .map(|v| Voice {
                short_name: v.short_name,
                display_name: v.display_name,
                locale: v.locale,
                gender: v.gender,
            })
            .collect())
    }
}

fn ssml_body(text: &str, voice: &Voice) -> String {
    format!(
        "<speak version='1.0' xml:lang='{}'><voice name='{}'>{}</voice></speak>",
        voice.locale,
        voice.short_name,
        escape_xml(text)
    )
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aria() -> Voice {
        Voice {
            short_name: "en-US-AriaNeural".to_string(),
            display_name: "Aria".to_string(),
            locale: "en-US".to_string(),
            gender: Some("Female".to_string()),
        }
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_xml("a < b & b > c \"quoted\" 'single'"),
            "a &lt; b &amp; b &gt; c &quot;quoted&quot; &apos;single&apos;"
        );
    }

    #[test]
    fn ssml_embeds_voice_and_locale() {
        let body = ssml_body("hello", &aria());
        assert!(body.contains("xml:lang='en-US'"));
        assert!(body.contains("<voice name='en-US-AriaNeural'>hello</voice>"));
    }

    #[test]
    fn parses_voice_list_payload() {
        let payload = r#"[
            {
                "Name": "Microsoft Server Speech Text to Speech Voice (en-US, AriaNeural)",
                "DisplayName": "Aria",
                "ShortName": "en-US-AriaNeural",
                "Gender": "Female",
                "Locale": "en-US",
                "SampleRateHertz": "24000",
                "VoiceType": "Neural",
                "Status": "GA"
            },
            {
                "Name": "Microsoft Server Speech Text to Speech Voice (de-DE, KatjaNeural)",
                "DisplayName": "Katja",
                "ShortName": "de-DE-KatjaNeural",
                "Gender": "Female",
                "Locale": "de-DE",
                "SampleRateHertz": "24000",
                "VoiceType": "Neural",
                "Status": "GA"
            }
        ]"#;

        let voices: Vec<VoiceData> = serde_json::from_str(payload).unwrap();
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0].short_name, "en-US-AriaNeural");
        assert_eq!(voices[1].locale, "de-DE");
    }
}
