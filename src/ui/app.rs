use std::collections::HashMap;

use crate::config::{ConfigStore, StartView};
use crate::tasks::{Operation, OperationKind, TaskHandle, TaskId, TaskScheduler};
use crate::ui::mvi::Reducer;
use crate::ui::registration::{RegistrationIntent, RegistrationReducer, RegistrationState};
use crate::ui::todos::{TodoIdGenerator, TodoIntent, TodoListState, TodoReducer};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum View {
    Registration,
    Todos,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Registration => "Registration",
            View::Todos => "Todo List",
        }
    }

    pub fn other(self) -> View {
        match self {
            View::Registration => View::Todos,
            View::Todos => View::Registration,
        }
    }
}

impl From<StartView> for View {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Registration => View::Registration,
            StartView::Todos => View::Todos,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    view: View,
    /// Registration form state (MVI pattern).
    registration: RegistrationState,
    /// Todo list state (MVI pattern).
    todos: TodoListState,
    ids: TodoIdGenerator,
    scheduler: TaskScheduler,
    /// Running tasks, at most one per kind (resources, managed outside MVI).
    in_flight: HashMap<OperationKind, TaskHandle>,
    config: ConfigStore,
    /// App-level message shown over either view.
    alert: Option<String>,
    animation_tick: u8,
}

impl App {
    pub fn new(config: ConfigStore, scheduler: TaskScheduler) -> Self {
        let view = View::from(config.get().ui.start_view);
        Self {
            should_quit: false,
            view,
            registration: RegistrationState::default(),
            todos: TodoListState::default(),
            ids: TodoIdGenerator::new(),
            scheduler,
            in_flight: HashMap::new(),
            config,
            alert: None,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            tracing::debug!(view = view.title(), "View switched");
            self.view = view;
        }
    }

    pub fn toggle_view(&mut self) {
        self.set_view(self.view.other());
    }

    pub fn registration(&self) -> &RegistrationState {
        &self.registration
    }

    pub fn todos(&self) -> &TodoListState {
        &self.todos
    }

    /// True while any simulated round-trip is pending.
    pub fn is_busy(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Message to show in the popup, if any.
    ///
    /// Shown whichever view is active: app alerts first, then the
    /// registration acknowledgment, then the todo notice.
    pub fn popup_message(&self) -> Option<&str> {
        self.alert
            .as_deref()
            .or(self.registration.acknowledgment.as_deref())
            .or(self.todos.notice.as_deref())
    }

    /// Close the message currently shown by [`App::popup_message`].
    pub fn dismiss_popup(&mut self) {
        if self.alert.take().is_some() {
            return;
        }
        if self.registration.acknowledgment.is_some() {
            self.dispatch_registration(RegistrationIntent::DismissAcknowledgment);
        } else if self.todos.notice.is_some() {
            self.dispatch_todos(TodoIntent::DismissNotice);
        }
    }

    pub fn on_tick(&mut self) {
        if self.is_busy() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn dispatch_registration(&mut self, intent: RegistrationIntent) {
        tracing::trace!(?intent, "Registration intent");
        dispatch_mvi!(self, registration, RegistrationReducer, intent);
        self.sync_tasks();
    }

    pub fn dispatch_todos(&mut self, intent: TodoIntent) {
        tracing::trace!(?intent, "Todo intent");
        dispatch_mvi!(self, todos, TodoReducer, intent);
        self.sync_tasks();
    }

    /// Feed a finished task back into the state it belongs to.
    ///
    /// Completions from tasks that are no longer tracked (cancelled or
    /// superseded) are dropped.
    pub fn on_task_completed(&mut self, task: TaskId, operation: Operation) {
        let kind = operation.kind();
        let current = self.in_flight.get(&kind).map(TaskHandle::id);
        if current != Some(task) {
            tracing::debug!(task = %task, ?kind, "Ignoring stale completion");
            return;
        }
        self.in_flight.remove(&kind);

        match operation {
            Operation::Register(payload) => {
                tracing::info!(username = %payload.username, "Registration submitted");
                self.dispatch_registration(RegistrationIntent::SubmitCompleted);
            }
            Operation::AddTodo { text } => {
                let id = self.ids.next_id();
                tracing::info!(id, "Todo added");
                self.dispatch_todos(TodoIntent::AddCompleted { id, text });
            }
            Operation::SaveEdit { id, text } => {
                tracing::info!(id, "Todo updated");
                self.dispatch_todos(TodoIntent::EditCompleted { id, text });
            }
        }
    }

    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(()) => self.alert = Some("Configuration reloaded".to_string()),
            Err(err) => {
                tracing::warn!(error = %err, "Config reload failed");
                self.alert = Some(format!("Config reload failed: {}", err));
            }
        }
    }

    /// Cancel everything still in flight.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.in_flight.drain() {
            handle.cancel();
        }
    }

    /// Start tasks the states now want and cancel the ones they no longer
    /// want.
    fn sync_tasks(&mut self) {
        let wanted: Vec<Operation> = self
            .registration
            .pending_operation()
            .into_iter()
            .chain(self.todos.pending_operations())
            .collect();

        self.in_flight.retain(|_, handle| {
            let keep = wanted.iter().any(|operation| operation == handle.operation());
            if !keep {
                handle.cancel();
            }
            keep
        });

        for operation in wanted {
            if !self.in_flight.contains_key(&operation.kind()) {
                let handle = self.scheduler.schedule(operation);
                self.in_flight.insert(handle.kind(), handle);
            }
        }
    }
}
