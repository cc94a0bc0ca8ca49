use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::shutdown::ShutdownHandle;
use crate::tasks::{Operation, TaskId};

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// A scheduled operation finished its round-trip.
    TaskCompleted { task: TaskId, operation: Operation },
    /// The input thread stopped; no more keys or ticks will arrive.
    InputClosed,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Start the input thread reading from the terminal.
    ///
    /// Terminal events and ticks arrive on the same channel as task
    /// completions, so the UI loop handles one event at a time.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        Self::with_source(read_terminal, tick_rate, shutdown)
    }

    fn with_source<S>(source: S, tick_rate: Duration, shutdown: ShutdownHandle) -> Self
    where
        S: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        thread::spawn(move || pump_input(source, tick_rate, shutdown, event_tx));
        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Wait up to `timeout` for one terminal event.
fn read_terminal(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

fn pump_input<S>(mut source: S, tick_rate: Duration, shutdown: ShutdownHandle, tx: Sender<AppEvent>)
where
    S: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    while !shutdown.is_shutting_down() {
        // Short poll timeout so the shutdown flag is checked often.
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match source(timeout) {
            Ok(Some(Event::Key(key))) => tx.send(AppEvent::Key(key)),
            Ok(Some(Event::Resize(cols, rows))) => tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "Failed to read terminal events");
                let _ = tx.send(AppEvent::InputClosed);
                return;
            }
        };
        if forwarded.is_err() {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shutdown::ShutdownCoordinator;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn read_failure_reports_input_closed() {
        let coordinator = ShutdownCoordinator::new();
        let handler = EventHandler::with_source(
            |_| Err(io::Error::other("no tty")),
            Duration::from_millis(20),
            coordinator.handle(),
        );
        assert!(matches!(
            handler.next(Duration::from_secs(2)),
            Ok(AppEvent::InputClosed)
        ));
    }

    #[test]
    fn keys_and_ticks_are_forwarded() {
        let coordinator = ShutdownCoordinator::new();
        let mut sent = false;
        let handler = EventHandler::with_source(
            move |timeout| {
                if sent {
                    thread::sleep(timeout);
                    return Ok(None);
                }
                sent = true;
                Ok(Some(Event::Key(KeyEvent::new(
                    KeyCode::Char('a'),
                    KeyModifiers::NONE,
                ))))
            },
            Duration::from_millis(20),
            coordinator.handle(),
        );

        assert!(matches!(
            handler.next(Duration::from_secs(2)),
            Ok(AppEvent::Key(key)) if key.code == KeyCode::Char('a')
        ));
        assert!(matches!(
            handler.next(Duration::from_secs(2)),
            Ok(AppEvent::Tick)
        ));
        coordinator.signal();
    }
}
