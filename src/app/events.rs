use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::interval;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Wraps the next terminal event. A finished input stream means the terminal is gone, so it
/// becomes a quit request.
#[must_use]
pub fn input_event(input: Option<Event>) -> AppEvent {
    input.map_or(AppEvent::Quit, AppEvent::Input)
}

pub fn start_frame_task(tx: tokio::sync::mpsc::Sender<AppEvent>, fps: u8) {
    let fps = fps.max(5);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}
