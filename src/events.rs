//! Terminal event plumbing
//!
//! A background task polls crossterm and forwards events into an mpsc
//! channel the main `select!` loop consumes.

use std::time::Duration;

use crossterm::event::{self, KeyEvent};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Event payloads the application reacts to.
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Map a raw crossterm event to an application event.
pub fn map_crossterm_event(event: event::Event) -> Option<EventKind> {
    match event {
        event::Event::Key(key) => Some(EventKind::Key(key)),
        event::Event::Resize(width, height) => Some(EventKind::Resize(width, height)),
        _ => None,
    }
}

/// Spawn the event polling task with cancellation support.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    // Drain the crossterm buffer before exiting so stray
                    // keypresses don't land on the shell.
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        if let Ok(evt) = event::read() {
                            if let Some(kind) = map_crossterm_event(evt) {
                                if tx.send(kind).is_err() {
                                    debug!("event channel closed, stopping poller");
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
