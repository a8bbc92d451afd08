use anyhow::{Context, Result};
use crossterm::{
    event::{Event as CrosstermEvent, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};
use tui_textarea::TextArea;
use utter_core::artifact::{self, Artifact};
use utter_core::tts;
use utter_core::{AudioPlayback, AudioPlayer, SettingsManager, TextToSpeech, Voice};

use super::event_handler::handle_app_event;
use super::events::AppEvent;
use super::input_handler::{configure_textarea, handle_key_event, TuiAction};
use super::state::{InputMode, StatusTone, TuiState};
use super::ui::draw_ui;

pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    provider: Arc<dyn TextToSpeech>,
    artifact: Artifact,
    /// Lazily initialized on first Play, torn down on playback faults.
    player: Option<AudioPlayer>,
    /// The live playback session; dropping it stops and unloads the stream.
    playback: Option<AudioPlayback>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    state: TuiState,
}

impl TuiApp {
    pub async fn new(
        settings_path: Option<PathBuf>,
        initial_voice: Option<String>,
        locale_override: Option<String>,
    ) -> Result<Self> {
        let settings_manager = match settings_path {
            Some(path) => SettingsManager::from_path(path)?,
            None => SettingsManager::new()?,
        };
        let settings = settings_manager.settings();
        let locale = locale_override.unwrap_or_else(|| settings.locale.clone());

        let provider: Arc<dyn TextToSpeech> = Arc::from(tts::provider_from_settings(&settings)?);

        // Fetch the voice list before the terminal becomes interactive; a
        // fault here aborts startup with a real error, not a broken UI.
        let voices = provider
            .list_voices()
            .await
            .context("Failed to fetch voice list")?;
        let voices = tts::filter_voices(voices, &locale);
        if voices.is_empty() {
            anyhow::bail!("No voices available for locale {locale:?}");
        }
        info!(count = voices.len(), locale = %locale, "voice list loaded");

        let mut state = TuiState::new(voices);
        if let Some(name) = initial_voice {
            let index = state
                .voices
                .iter()
                .position(|v| v.short_name == name)
                .with_context(|| format!("Unknown voice {name:?} for locale {locale:?}"))?;
            state.voice_index = index;
        }

        let artifact = Artifact::default_path()?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            provider,
            artifact,
            player: None,
            playback: None,
            event_tx,
            event_rx,
            state,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let mut textarea = TextArea::default();
        configure_textarea(&mut textarea);

        let tick_rate = Duration::from_millis(100);
        let mut crossterm_reader = EventStream::new();

        loop {
            let state = &self.state;
            let ta = &textarea;
            self.terminal.draw(|frame| {
                draw_ui(frame, state, ta);
            })?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                // Completion events marshalled from synthesis workers
                Some(app_event) = self.event_rx.recv() => {
                    handle_app_event(&mut self.state, app_event);
                }

                // Poll crossterm events (async)
                Some(Ok(crossterm_event)) = crossterm_reader.next() => {
                    if let CrosstermEvent::Key(key) = crossterm_event {
                        match handle_key_event(key, &mut textarea, &mut self.state) {
                            TuiAction::Generate(text) => self.generate_audio(text),
                            TuiAction::Play => self.play_audio(),
                            TuiAction::TogglePause => self.toggle_pause(),
                            TuiAction::Stop => self.stop_audio(),
                            TuiAction::BeginSave => self.begin_save(),
                            TuiAction::ConfirmSave(dest) => self.save_audio(&dest),
                            TuiAction::CancelSave => {
                                self.state.input_mode = InputMode::Text;
                                self.state.save_input.clear();
                            }
                            TuiAction::Quit => {
                                self.state.should_quit = true;
                            }
                            TuiAction::None => {}
                        }
                    }
                    // Resize re-renders on the next loop iteration
                }

                // Tick: spinner animation and the playback completion poll
                _ = tokio::time::sleep(tick_rate) => {
                    self.on_tick();
                }
            }
        }

        self.restore_terminal()?;

        Ok(())
    }

    /// Validate, darken the controls, and hand the request to a background
    /// worker. The worker writes the artifact itself and reports back over
    /// the event channel; nothing here blocks the UI loop.
    fn generate_audio(&mut self, text: String) {
        if let Err(e) = tts::validate_text(&text) {
            self.state.set_status(e.to_string(), StatusTone::Error);
            return;
        }
        let Some(voice) = self.state.selected_voice().cloned() else {
            self.state
                .set_status("No voice selected", StatusTone::Error);
            return;
        };

        self.state.begin_generate();

        let provider = self.provider.clone();
        let path = self.artifact.path().to_path_buf();
        let text = text.trim().to_string();
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let result = synthesize_to_artifact(provider, &text, &voice, &path).await;
            if let Err(ref e) = result {
                error!(error = ?e, "synthesis failed");
            }
            // The receiver disappears only on shutdown; nothing to do then
            let _ = tx.send(AppEvent::SynthesisFinished(
                result.map_err(|e| format!("{e:#}")),
            ));
        });
    }

    fn play_audio(&mut self) {
        if !self.artifact.exists() {
            self.state.set_status("No audio to play", StatusTone::Error);
            return;
        }

        if self.player.is_none() {
            match AudioPlayer::new() {
                Ok(player) => self.player = Some(player),
                Err(e) => {
                    self.state
                        .set_status(format!("Playback error: {e:#}"), StatusTone::Error);
                    self.state.disable_playback_controls();
                    return;
                }
            }
        }
        let Some(player) = self.player.as_ref() else {
            return;
        };

        // Unload any prior session before loading the next
        self.playback = None;

        match self.artifact.read().and_then(|audio| player.play(audio)) {
            Ok(handle) => {
                self.playback = Some(handle);
                self.state.playing = true;
                self.state.paused = false;
                self.state.controls.pause = true;
                self.state.controls.stop = true;
                self.state.set_status("Playing audio...", StatusTone::Success);
            }
            Err(e) => {
                self.state
                    .set_status(format!("Playback error: {e:#}"), StatusTone::Error);
                // Tear the transport down; it re-initializes on the next Play
                self.player = None;
                self.state.disable_playback_controls();
            }
        }
    }

    fn toggle_pause(&mut self) {
        let Some(playback) = self.playback.as_mut() else {
            return;
        };

        if playback.is_paused() {
            match playback.resume() {
                Ok(()) => {
                    self.state.paused = false;
                    self.state.set_status("Playback resumed", StatusTone::Info);
                }
                Err(e) => {
                    self.state
                        .set_status(format!("Resume error: {e:#}"), StatusTone::Error);
                }
            }
        } else {
            match playback.pause() {
                Ok(()) => {
                    self.state.paused = true;
                    self.state.set_status("Playback paused", StatusTone::Info);
                }
                Err(e) => {
                    self.state
                        .set_status(format!("Pause error: {e:#}"), StatusTone::Error);
                }
            }
        }
    }

    fn stop_audio(&mut self) {
        if self.playback.take().is_some() {
            self.state.disable_playback_controls();
            self.state.set_status("Playback stopped", StatusTone::Info);
        }
    }

    fn begin_save(&mut self) {
        if !self.artifact.exists() {
            self.state.set_status("No audio to save", StatusTone::Error);
            return;
        }
        self.state.save_input.clear();
        self.state.input_mode = InputMode::SavePrompt;
    }

    fn save_audio(&mut self, dest: &str) {
        self.state.input_mode = InputMode::Text;
        self.state.save_input.clear();

        let dest = artifact::with_artifact_extension(Path::new(dest));
        match self.artifact.export(&dest) {
            Ok(()) => {
                info!(dest = %dest.display(), "artifact exported");
                self.state.set_status(
                    format!("Audio saved to {}", dest.display()),
                    StatusTone::Success,
                );
                // The working file is gone until the next generation
                self.state.on_artifact_exported();
            }
            Err(e) => {
                self.state
                    .set_status(format!("Save error: {e:#}"), StatusTone::Error);
            }
        }
    }

    fn on_tick(&mut self) {
        if self.state.generating {
            self.state.spinner_frame += 1;
        }

        // Completion poll: when the transport drains naturally, unload it
        // and put the form back in a re-triggerable state
        let finished = self.playback.as_ref().is_some_and(|p| !p.is_busy());
        if finished {
            self.playback = None;
            self.state.disable_playback_controls();
            self.state
                .set_status("Playback complete", StatusTone::Success);
        }
    }

    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

async fn synthesize_to_artifact(
    provider: Arc<dyn TextToSpeech>,
    text: &str,
    voice: &Voice,
    path: &Path,
) -> Result<()> {
    let audio = provider.synthesize(text, voice).await?;
    info!(
        voice = %voice.short_name,
        duration_ms = audio.duration_ms(),
        "synthesis complete"
    );
    Artifact::new(path.to_path_buf()).write(&audio)?;
    Ok(())
}
