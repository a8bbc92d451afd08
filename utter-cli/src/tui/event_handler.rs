use super::events::AppEvent;
use super::state::{StatusTone, TuiState};

pub fn handle_app_event(state: &mut TuiState, event: AppEvent) {
    match event {
        AppEvent::SynthesisFinished(result) => {
            state.generating = false;
            // Generate always comes back; playback controls only on success
            state.controls.generate = true;

            match result {
                Ok(()) => {
                    state.controls.play = true;
                    state.controls.pause = true;
                    state.controls.stop = true;
                    state.controls.save = true;
                    state.set_status("Audio generated", StatusTone::Success);
                }
                Err(message) => {
                    state.set_status(
                        format!("Generation error: {message}"),
                        StatusTone::Error,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_enables_playback_controls() {
        let mut state = TuiState::new(Vec::new());
        state.begin_generate();

        handle_app_event(&mut state, AppEvent::SynthesisFinished(Ok(())));

        assert!(!state.generating);
        assert!(state.controls.generate);
        assert!(state.controls.play);
        assert!(state.controls.pause);
        assert!(state.controls.stop);
        assert!(state.controls.save);
        assert_eq!(state.status.text, "Audio generated");
        assert_eq!(state.status.tone, StatusTone::Success);
    }

    #[test]
    fn failure_reenables_only_generate() {
        let mut state = TuiState::new(Vec::new());
        state.begin_generate();

        handle_app_event(
            &mut state,
            AppEvent::SynthesisFinished(Err("service unavailable".to_string())),
        );

        assert!(!state.generating);
        assert!(state.controls.generate);
        assert!(!state.controls.play);
        assert!(!state.controls.pause);
        assert!(!state.controls.stop);
        assert!(!state.controls.save);
        assert_eq!(state.status.text, "Generation error: service unavailable");
        assert_eq!(state.status.tone, StatusTone::Error);
    }
}
