pub mod ansi;
pub mod canvas;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;

/// Rows reserved under the canvas for the status line.
pub const STATUS_ROWS: u16 = 1;
const MIN_COLUMNS: u16 = 20;
const MIN_ROWS: u16 = 6;

/// Framebuffer size in pixels for a terminal of `columns` x `rows` cells. Each canvas cell shows
/// two vertically stacked pixels.
#[must_use]
pub fn framebuffer_size(columns: u16, rows: u16) -> (usize, usize) {
    let canvas_rows = rows.saturating_sub(STATUS_ROWS);
    (usize::from(columns), usize::from(canvas_rows) * 2)
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_COLUMNS || area.height < MIN_ROWS {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_COLUMNS}x{MIN_ROWS}."
        ))
        .block(Block::default().borders(Borders::ALL).title("ridgeline"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_ROWS)])
        .split(area);

    frame.render_widget(canvas::FramebufferView::new(state.framebuffer()), chunks[0]);
    frame.render_widget(
        Paragraph::new(status_line(state)).style(Style::default().fg(Color::Gray).bg(Color::Black)),
        chunks[1],
    );
}

#[must_use]
pub fn status_line(state: &AppState) -> Line<'static> {
    let clouds = if state.show_clouds { "on" } else { "off" };
    let ridges = if state.mountain_count == 1 {
        "ridge"
    } else {
        "ridges"
    };
    Line::from(vec![
        Span::styled(
            " ridgeline ",
            Style::default().fg(Color::Black).bg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {} · {} {ridges} · clouds {clouds} ",
            state.palette.label(),
            state.mountain_count
        )),
        Span::styled(
            "│ space regen · n/e/d/r palette · 1-0 count · c clouds · q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
