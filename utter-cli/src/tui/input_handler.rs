use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

use super::state::{InputMode, TuiState};

pub enum TuiAction {
    /// Dispatch a synthesis request for the current input text.
    Generate(String),
    /// Start (or restart) playback of the working artifact.
    Play,
    /// Pause a playing session or resume a paused one.
    TogglePause,
    /// Halt and unload the current playback session.
    Stop,
    /// Open the save-destination prompt.
    BeginSave,
    /// Confirm the save prompt with the typed destination.
    ConfirmSave(String),
    /// Dismiss the save prompt.
    CancelSave,
    /// Quit the application.
    Quit,
    /// No action needed.
    None,
}

pub fn handle_key_event(
    key: KeyEvent,
    textarea: &mut TextArea,
    state: &mut TuiState,
) -> TuiAction {
    // The save prompt captures everything except the global quit keys
    if state.input_mode == InputMode::SavePrompt {
        return handle_save_prompt_key(key, state);
    }

    match (key.code, key.modifiers) {
        // Ctrl+C / Ctrl+D: quit
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => TuiAction::Quit,
        (KeyCode::Char('d'), m) if m.contains(KeyModifiers::CONTROL) => TuiAction::Quit,

        // Enter without modifier: generate
        (KeyCode::Enter, KeyModifiers::NONE) => {
            if state.generating || !state.controls.generate {
                return TuiAction::None;
            }
            // Empty text still dispatches; validation owns the error message
            TuiAction::Generate(textarea.lines().join("\n"))
        }

        // Shift+Enter or Alt+Enter: insert newline
        (KeyCode::Enter, m)
            if m.contains(KeyModifiers::SHIFT) || m.contains(KeyModifiers::ALT) =>
        {
            textarea.insert_newline();
            TuiAction::None
        }

        // Ctrl+P: play. Deliberately not gated on control availability so
        // a missing artifact reports "No audio to play" like the original
        (KeyCode::Char('p'), m) if m.contains(KeyModifiers::CONTROL) => {
            if state.generating {
                TuiAction::None
            } else {
                TuiAction::Play
            }
        }

        // Ctrl+A: pause/resume toggle
        (KeyCode::Char('a'), m) if m.contains(KeyModifiers::CONTROL) => {
            if state.controls.pause {
                TuiAction::TogglePause
            } else {
                TuiAction::None
            }
        }

        // Ctrl+X: stop
        (KeyCode::Char('x'), m) if m.contains(KeyModifiers::CONTROL) => {
            if state.controls.stop {
                TuiAction::Stop
            } else {
                TuiAction::None
            }
        }

        // Ctrl+S: save
        (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => {
            if state.controls.save {
                TuiAction::BeginSave
            } else {
                TuiAction::None
            }
        }

        // Ctrl+Up/Down: cycle the voice selection
        (KeyCode::Up, m) if m.contains(KeyModifiers::CONTROL) => {
            state.prev_voice();
            TuiAction::None
        }
        (KeyCode::Down, m) if m.contains(KeyModifiers::CONTROL) => {
            state.next_voice();
            TuiAction::None
        }

        // Escape: clear input
        (KeyCode::Esc, _) => {
            *textarea = TextArea::default();
            configure_textarea(textarea);
            TuiAction::None
        }

        // All other keys: forward to textarea
        _ => {
            textarea.input(key);
            TuiAction::None
        }
    }
}

fn handle_save_prompt_key(key: KeyEvent, state: &mut TuiState) -> TuiAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => TuiAction::Quit,

        (KeyCode::Enter, _) => {
            let dest = state.save_input.trim().to_string();
            if dest.is_empty() {
                return TuiAction::None;
            }
            TuiAction::ConfirmSave(dest)
        }

        (KeyCode::Esc, _) => TuiAction::CancelSave,

        (KeyCode::Backspace, _) => {
            state.save_input.pop();
            TuiAction::None
        }

        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
            state.save_input.push(c);
            TuiAction::None
        }

        _ => TuiAction::None,
    }
}

pub fn configure_textarea(textarea: &mut TextArea) {
    textarea.set_placeholder_text(
        "Enter text to speak... (Enter to generate, Shift+Enter for new line)",
    );
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea.set_style(ratatui::style::Style::default().fg(ratatui::style::Color::White));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn fixture() -> (TextArea<'static>, TuiState) {
        let mut textarea = TextArea::default();
        configure_textarea(&mut textarea);
        (textarea, TuiState::new(Vec::new()))
    }

    #[test]
    fn enter_generates_current_text() {
        let (mut textarea, mut state) = fixture();
        textarea.insert_str("hello world");

        let action = handle_key_event(key(KeyCode::Enter, KeyModifiers::NONE), &mut textarea, &mut state);
        match action {
            TuiAction::Generate(text) => assert_eq!(text, "hello world"),
            _ => panic!("expected Generate"),
        }
    }

    #[test]
    fn enter_is_ignored_while_generating() {
        let (mut textarea, mut state) = fixture();
        textarea.insert_str("hello");
        state.begin_generate();

        let action = handle_key_event(key(KeyCode::Enter, KeyModifiers::NONE), &mut textarea, &mut state);
        assert!(matches!(action, TuiAction::None));
    }

    #[test]
    fn disabled_transport_keys_are_ignored() {
        let (mut textarea, mut state) = fixture();

        let pause = handle_key_event(key(KeyCode::Char('a'), KeyModifiers::CONTROL), &mut textarea, &mut state);
        let stop = handle_key_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL), &mut textarea, &mut state);
        let save = handle_key_event(key(KeyCode::Char('s'), KeyModifiers::CONTROL), &mut textarea, &mut state);

        assert!(matches!(pause, TuiAction::None));
        assert!(matches!(stop, TuiAction::None));
        assert!(matches!(save, TuiAction::None));
    }

    #[test]
    fn play_is_allowed_without_artifact_controls() {
        // Play goes through even when the control is dark; the app answers
        // with "No audio to play" if the artifact is missing
        let (mut textarea, mut state) = fixture();
        let action = handle_key_event(key(KeyCode::Char('p'), KeyModifiers::CONTROL), &mut textarea, &mut state);
        assert!(matches!(action, TuiAction::Play));
    }

    #[test]
    fn save_prompt_collects_path_and_confirms() {
        let (mut textarea, mut state) = fixture();
        state.input_mode = InputMode::SavePrompt;

        for c in "out".chars() {
            handle_key_event(key(KeyCode::Char(c), KeyModifiers::NONE), &mut textarea, &mut state);
        }
        handle_key_event(key(KeyCode::Backspace, KeyModifiers::NONE), &mut textarea, &mut state);
        assert_eq!(state.save_input, "ou");

        let action = handle_key_event(key(KeyCode::Enter, KeyModifiers::NONE), &mut textarea, &mut state);
        match action {
            TuiAction::ConfirmSave(dest) => assert_eq!(dest, "ou"),
            _ => panic!("expected ConfirmSave"),
        }
    }

    #[test]
    fn save_prompt_escape_cancels() {
        let (mut textarea, mut state) = fixture();
        state.input_mode = InputMode::SavePrompt;

        let action = handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE), &mut textarea, &mut state);
        assert!(matches!(action, TuiAction::CancelSave));
    }

    #[test]
    fn ctrl_down_cycles_voice() {
        let mut textarea = TextArea::default();
        let voices = vec![
            utter_core::Voice {
                short_name: "a".into(),
                display_name: "a".into(),
                locale: "en-US".into(),
                gender: None,
            },
            utter_core::Voice {
                short_name: "b".into(),
                display_name: "b".into(),
                locale: "en-US".into(),
                gender: None,
            },
        ];
        let mut state = TuiState::new(voices);

        handle_key_event(key(KeyCode::Down, KeyModifiers::CONTROL), &mut textarea, &mut state);
        assert_eq!(state.voice_index, 1);
    }
}
