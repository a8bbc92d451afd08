use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::state::{InputMode, TuiState};

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    if state.input_mode == InputMode::SavePrompt {
        render_save_prompt(frame, area, state);
        return;
    }

    let pause_label = if state.paused { "Resume" } else { "Pause" };

    let mut parts: Vec<Span<'static>> = vec![Span::raw(" ")];
    push_control(&mut parts, "Generate", "Enter", state.controls.generate);
    push_control(&mut parts, "Play", "^P", state.controls.play);
    push_control(&mut parts, pause_label, "^A", state.controls.pause);
    push_control(&mut parts, "Stop", "^X", state.controls.stop);
    push_control(&mut parts, "Save", "^S", state.controls.save);

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn push_control(parts: &mut Vec<Span<'static>>, label: &str, binding: &str, enabled: bool) {
    let label_style = if enabled {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let binding_style = if enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    parts.push(Span::styled(format!("{label} "), label_style));
    parts.push(Span::styled(format!("[{binding}]"), binding_style));
    parts.push(Span::raw("  "));
}

fn render_save_prompt(frame: &mut Frame, area: Rect, state: &TuiState) {
    let line = Line::from(vec![
        Span::styled(" Save to: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{}▏", state.save_input),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            "  (Enter to save, Esc to cancel)",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
