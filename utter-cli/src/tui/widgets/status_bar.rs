use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::state::{StatusTone, TuiState};

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let color = match state.status.tone {
        StatusTone::Info => Color::Blue,
        StatusTone::Success => Color::Green,
        StatusTone::Error => Color::Red,
    };

    let text = if state.generating {
        let spinner = SPINNER_CHARS[state.spinner_frame % SPINNER_CHARS.len()];
        format!(" {spinner} {}", state.status.text)
    } else if state.status.text.is_empty() {
        " Ready".to_string()
    } else {
        format!(" {}", state.status.text)
    };

    let bar = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
        .style(Style::default().bg(Color::Rgb(30, 30, 30)));

    frame.render_widget(bar, area);
}
