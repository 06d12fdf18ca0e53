#![allow(dead_code)]

use clap::Parser;
use ratatui::{Terminal, backend::TestBackend};
use ridgeline::{app::state::AppState, cli::Cli, render::frame::Framebuffer, ui};

/// Seeded, frozen CLI so every test sees the same scene.
pub fn seeded_cli(extra: &[&str]) -> Cli {
    let mut args = vec!["ridgeline", "--seed", "2024", "--no-animation"];
    args.extend_from_slice(extra);
    Cli::parse_from(args)
}

pub fn seeded_state(cli: &Cli, columns: u16, rows: u16) -> AppState {
    let (width, height) = ui::framebuffer_size(columns, rows);
    AppState::new(cli, None, width, height).expect("state")
}

/// One character per pixel: the legend char for known colors, `.` for anything else.
pub fn char_map(fb: &Framebuffer, legend: &[(u32, char)]) -> String {
    (0..fb.height())
        .map(|y| {
            (0..fb.width())
                .map(|x| {
                    let px = fb.pixel(x, y).expect("in bounds");
                    legend
                        .iter()
                        .find(|(color, _)| *color == px)
                        .map_or('.', |(_, ch)| *ch)
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_to_lines(state: &AppState, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| {
            let mut line = String::new();
            for x in 0..width {
                line.push_str(buffer[(x, y)].symbol());
            }
            line.trim_end().to_string()
        })
        .collect()
}
