use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::state::TuiState;

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let sep = Span::styled(" | ", Style::default().fg(Color::DarkGray));

    let voice = match state.selected_voice() {
        Some(v) => format!("◂ {} ▸", v.short_name),
        None => "no voices".to_string(),
    };

    let parts: Vec<Span<'static>> = vec![
        Span::raw(" "),
        Span::styled("Voice: ", Style::default().fg(Color::DarkGray)),
        Span::styled(voice, Style::default().fg(Color::Cyan)),
        sep,
        Span::styled(
            format!("{}/{}", state.voice_index + 1, state.voices.len()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            "  Ctrl+↑/↓ to change",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
