use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::config::ConfigStore;
use crate::error::AppError;
use crate::shutdown::ShutdownCoordinator;
use crate::tasks::{SimulatedTransport, TaskScheduler};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the interface until the user quits.
///
/// Timers run on `runtime`; everything else happens on the calling thread.
pub fn run(config: ConfigStore, runtime: Handle) -> Result<(), AppError> {
    let tick_rate = config.get().ui.tick_rate();
    let shutdown = ShutdownCoordinator::new();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.handle());

    let transport = Arc::new(SimulatedTransport::new(config.clone()));
    let scheduler = TaskScheduler::new(runtime, transport, events.sender(), shutdown.handle());
    let mut app = App::new(config, scheduler);
    tracing::info!(view = app.view().title(), "Interface started");

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(AppError::Terminal(err));
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next(tick_rate) {
            Ok(event) => {
                if let Err(err) = handle_event(&mut app, event) {
                    break Err(err);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Err(AppError::EventsClosed),
        }
    };

    app.shutdown();
    shutdown.signal();
    drop(guard);
    tracing::info!("Interface stopped");
    result
}

/// Apply one event to the app.
///
/// Fails when the loop cannot continue because input is gone.
pub fn handle_event(app: &mut App, event: AppEvent) -> Result<(), AppError> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        // The next draw picks up the new size.
        AppEvent::Resize(..) => {}
        AppEvent::TaskCompleted { task, operation } => app.on_task_completed(task, operation),
        AppEvent::InputClosed => return Err(AppError::EventsClosed),
    }
    Ok(())
}
