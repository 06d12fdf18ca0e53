mod common;

use common::{seeded_cli, seeded_state};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ridgeline::{
    app::{
        events::AppEvent,
        state::{AppMode, AppState},
    },
    domain::palette::Palette,
    ui,
};
use tokio::sync::mpsc;

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn seeds(state: &AppState) -> Vec<u32> {
    state
        .scene()
        .mountains()
        .iter()
        .map(|m| m.spec().seed)
        .collect()
}

#[tokio::test]
async fn keyboard_session_walks_through_every_intent() {
    let cli = seeded_cli(&[]);
    let mut state = seeded_state(&cli, 80, 24);
    let (tx, _rx) = mpsc::channel(16);

    state
        .handle_event(key(KeyCode::Char('2')), &tx, &cli)
        .expect("count");
    assert_eq!(state.scene().mountains().len(), 2);

    let layout = seeds(&state);
    state
        .handle_event(key(KeyCode::Char('e')), &tx, &cli)
        .expect("palette");
    assert_eq!(state.palette, Palette::Everforest);
    assert_eq!(seeds(&state), layout);

    state
        .handle_event(key(KeyCode::Char(' ')), &tx, &cli)
        .expect("regen");
    assert_ne!(seeds(&state), layout);
    assert_eq!(state.scene().mountains().len(), 2);

    state
        .handle_event(key(KeyCode::Char('c')), &tx, &cli)
        .expect("clouds");
    assert!(!state.show_clouds);

    state
        .handle_event(key(KeyCode::Char('0')), &tx, &cli)
        .expect("count");
    assert_eq!(state.scene().mountains().len(), 10);

    state.handle_event(key(KeyCode::Esc), &tx, &cli).expect("quit");
    assert_eq!(state.mode, AppMode::Quit);
}

#[tokio::test]
async fn ticks_keep_arriving_until_quit() {
    let cli = seeded_cli(&["--fps", "60"]);
    let mut state = seeded_state(&cli, 40, 12);
    let (tx, mut rx) = mpsc::channel(16);

    state
        .handle_event(AppEvent::Bootstrap, &tx, &cli)
        .expect("bootstrap");
    for _ in 0..3 {
        let event = rx.recv().await.expect("tick");
        state.handle_event(event, &tx, &cli).expect("tick");
    }
    assert_eq!(state.frame_tick, 3);

    state.handle_event(AppEvent::Quit, &tx, &cli).expect("quit");
    assert_eq!(state.mode, AppMode::Quit);
}

#[test]
fn animated_clouds_drift_over_time() {
    let mut cli = seeded_cli(&["--clouds", "8"]);
    cli.no_animation = false;
    let mut state = seeded_state(&cli, 80, 24);
    let before = state.framebuffer().clone();

    for _ in 0..40 {
        state.advance(0.25);
    }
    assert_ne!(*state.framebuffer(), before);
}

#[test]
fn same_seed_replays_the_same_frame() {
    let cli = seeded_cli(&["--palette", "classic"]);
    let a = seeded_state(&cli, 50, 16);
    let b = seeded_state(&cli, 50, 16);
    assert_eq!(a.framebuffer(), b.framebuffer());

    let mut reseeded = cli.clone();
    reseeded.seed = Some(7);
    let other = seeded_state(&reseeded, 50, 16);
    assert_ne!(a.framebuffer(), other.framebuffer());
}

#[test]
fn one_shot_output_has_a_line_per_cell_row() {
    let cli = seeded_cli(&["--one-shot", "--width", "30", "--height", "8"]);
    let state = AppState::new(&cli, None, 30, 16).expect("state");
    let mut out = Vec::new();
    ui::ansi::write_frame(&mut out, state.framebuffer()).expect("write");
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.lines().count(), 8);
    assert_eq!(text.matches(ui::canvas::HALF_BLOCK).count(), 30 * 8);
}
