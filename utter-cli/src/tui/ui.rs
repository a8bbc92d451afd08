use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use tui_textarea::TextArea;

use super::state::TuiState;
use super::widgets::{input_area, status_bar, transport_bar, voice_bar};

pub fn draw_ui(frame: &mut Frame, state: &TuiState, textarea: &TextArea) {
    // Input height: textarea lines + 2 for top/bottom borders, min 3, max 12
    let textarea_lines = textarea.lines().len().clamp(1, 10) as u16;
    let input_height = textarea_lines + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Voice selection
            Constraint::Length(input_height), // Text input (dynamic, with borders)
            Constraint::Length(1),            // Transport controls / save prompt
            Constraint::Min(0),               // Filler
            Constraint::Length(1),            // Status bar
        ])
        .split(frame.area());

    voice_bar::render(frame, chunks[0], state);
    input_area::render(frame, chunks[1], textarea);
    transport_bar::render(frame, chunks[2], state);
    // chunks[3] is empty filler
    status_bar::render(frame, chunks[4], state);
}
