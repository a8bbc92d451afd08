use utter_core::Voice;

/// Rendering tone for the one-line status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

/// Which input surface currently receives keystrokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// The main text entry area.
    Text,
    /// The save-destination prompt.
    SavePrompt,
}

/// Availability of the action controls. Mirrors the enabled/disabled state
/// of the transport bar exactly; a control that is false here renders
/// dimmed and ignores its key binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub generate: bool,
    pub pause: bool,
    pub stop: bool,
    pub save: bool,
    pub play: bool,
}

pub struct TuiState {
    /// Voices fetched once at startup, already filtered to one locale.
    pub voices: Vec<Voice>,

    /// Index into `voices` for the current selection.
    pub voice_index: usize,

    pub status: StatusLine,

    pub controls: Controls,

    /// Pause control shows "Resume" while true.
    pub paused: bool,

    /// A synthesis request is in flight.
    pub generating: bool,

    /// A playback session is loaded in the transport.
    pub playing: bool,

    /// Spinner animation frame counter.
    pub spinner_frame: usize,

    pub input_mode: InputMode,

    /// Destination path being typed in the save prompt.
    pub save_input: String,

    pub should_quit: bool,
}

impl TuiState {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            voice_index: 0,
            status: StatusLine {
                text: String::new(),
                tone: StatusTone::Info,
            },
            controls: Controls {
                generate: true,
                pause: false,
                stop: false,
                save: false,
                play: false,
            },
            paused: false,
            generating: false,
            playing: false,
            spinner_frame: 0,
            input_mode: InputMode::Text,
            save_input: String::new(),
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status = StatusLine {
            text: text.into(),
            tone,
        };
    }

    pub fn selected_voice(&self) -> Option<&Voice> {
        self.voices.get(self.voice_index)
    }

    pub fn next_voice(&mut self) {
        if !self.voices.is_empty() {
            self.voice_index = (self.voice_index + 1) % self.voices.len();
        }
    }

    pub fn prev_voice(&mut self) {
        if !self.voices.is_empty() {
            self.voice_index = (self.voice_index + self.voices.len() - 1) % self.voices.len();
        }
    }

    /// Entering the Generating state: every action control goes dark until
    /// the worker reports back.
    pub fn begin_generate(&mut self) {
        self.generating = true;
        self.controls = Controls {
            generate: false,
            play: false,
            pause: false,
            stop: false,
            save: false,
        };
        self.set_status("Generating audio...", StatusTone::Info);
    }

    /// The artifact left its working location; Play and Save go dark until
    /// the next successful generation.
    pub fn on_artifact_exported(&mut self) {
        self.controls.play = false;
        self.controls.save = false;
    }

    /// Playback ended (naturally or via Stop): pause/stop go dark and the
    /// pause control reads "Pause" again. Play and Save stay available.
    pub fn disable_playback_controls(&mut self) {
        self.controls.pause = false;
        self.controls.stop = false;
        self.paused = false;
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_voices(n: usize) -> TuiState {
        let voices = (0..n)
            .map(|i| Voice {
                short_name: format!("en-US-Voice{i}"),
                display_name: format!("Voice{i}"),
                locale: "en-US".to_string(),
                gender: None,
            })
            .collect();
        TuiState::new(voices)
    }

    #[test]
    fn defaults_to_first_voice() {
        let state = state_with_voices(3);
        assert_eq!(state.selected_voice().unwrap().short_name, "en-US-Voice0");
    }

    #[test]
    fn voice_selection_wraps_both_directions() {
        let mut state = state_with_voices(3);
        state.prev_voice();
        assert_eq!(state.voice_index, 2);
        state.next_voice();
        assert_eq!(state.voice_index, 0);
    }

    #[test]
    fn voice_selection_tolerates_empty_list() {
        let mut state = state_with_voices(0);
        state.next_voice();
        state.prev_voice();
        assert!(state.selected_voice().is_none());
    }

    #[test]
    fn begin_generate_disables_every_control() {
        let mut state = state_with_voices(1);
        state.controls.play = true;
        state.controls.save = true;

        state.begin_generate();

        assert!(state.generating);
        assert!(!state.controls.generate);
        assert!(!state.controls.play);
        assert!(!state.controls.pause);
        assert!(!state.controls.stop);
        assert!(!state.controls.save);
        assert_eq!(state.status.text, "Generating audio...");
    }

    #[test]
    fn export_disables_play_and_save() {
        let mut state = state_with_voices(1);
        state.controls.play = true;
        state.controls.pause = true;
        state.controls.stop = true;
        state.controls.save = true;

        state.on_artifact_exported();

        assert!(!state.controls.play);
        assert!(!state.controls.save);
        // Generate remains available for the next run
        assert!(state.controls.generate);
    }

    #[test]
    fn disabling_playback_controls_resets_pause_label() {
        let mut state = state_with_voices(1);
        state.playing = true;
        state.paused = true;
        state.controls.pause = true;
        state.controls.stop = true;
        state.controls.play = true;

        state.disable_playback_controls();

        assert!(!state.paused);
        assert!(!state.playing);
        assert!(!state.controls.pause);
        assert!(!state.controls.stop);
        // Play stays available for a re-run
        assert!(state.controls.play);
    }
}
