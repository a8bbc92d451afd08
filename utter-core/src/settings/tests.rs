use crate::settings::config::TtsProviderConfig;
use crate::settings::manager::SettingsManager;
use crate::settings::Settings;
use tempfile::TempDir;

#[test]
fn test_missing_file_creates_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    assert!(settings_path.exists());
    assert_eq!(manager.settings(), Settings::default());
    assert_eq!(manager.settings().locale, "en-US");
}

#[test]
fn test_roundtrip_provider_config() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();
    manager.update_setting(|settings| {
        settings.active_provider = Some("speech".to_string());
        settings.providers.insert(
            "speech".to_string(),
            TtsProviderConfig::Azure {
                region: "westus".to_string(),
                api_key: "secret".to_string(),
            },
        );
    });
    manager.save().unwrap();

    let reloaded = SettingsManager::from_path(settings_path).unwrap();
    assert_eq!(reloaded.settings(), manager.settings());
}

#[test]
fn test_corrupt_file_backed_up_and_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");

    std::fs::write(&settings_path, "this is { not toml").unwrap();

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    assert_eq!(manager.settings(), Settings::default());
    assert!(settings_path.with_extension("toml.backup").exists());
    // The replacement file must parse cleanly next time around
    let reloaded = SettingsManager::from_path(settings_path).unwrap();
    assert_eq!(reloaded.settings(), Settings::default());
}

#[test]
fn test_tagged_provider_parsing() {
    let toml_text = r#"
        active_provider = "eleven"
        locale = "en-GB"

        [providers.eleven]
        type = "elevenlabs"
        api_key = "k"
    "#;

    let settings: Settings = toml::from_str(toml_text).unwrap();
    assert_eq!(settings.locale, "en-GB");
    assert_eq!(
        settings.providers.get("eleven"),
        Some(&TtsProviderConfig::ElevenLabs {
            api_key: "k".to_string(),
            model_id: None,
        })
    );
}

#[test]
fn test_azure_region_defaults() {
    let toml_text = r#"
        [providers.speech]
        type = "azure"
        api_key = "k"
    "#;

    let settings: Settings = toml::from_str(toml_text).unwrap();
    assert_eq!(
        settings.providers.get("speech"),
        Some(&TtsProviderConfig::Azure {
            region: "eastus".to_string(),
            api_key: "k".to_string(),
        })
    );
}
