use crate::tasks::Operation;
use crate::ui::field::{FieldState, InputKind};
use crate::ui::mvi::UiState;
use crate::validation::{self, FieldId, FieldLookup, RuleBook};

pub const SUCCESS_MESSAGE: &str = "Registration successful!";

/// Values of the four inputs. The form is their only owner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormData {
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        let slot = match field {
            FieldId::Username => &mut self.username,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }
}

impl FieldLookup for FormData {
    fn value_of(&self, field: FieldId) -> &str {
        self.value(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Waiting on the simulated round-trip for this snapshot.
    Submitting { payload: FormData },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationState {
    pub data: FormData,
    /// One entry per field, in [`FieldId::ALL`] order.
    pub fields: Vec<FieldState>,
    pub rules: RuleBook,
    pub focus: Option<FieldId>,
    /// Set by the first submit; forces every field's errors visible.
    pub submit_attempted: bool,
    pub phase: SubmitPhase,
    pub acknowledgment: Option<String>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        let mut state = Self {
            data: FormData::default(),
            fields: vec![
                FieldState::new(
                    FieldId::Username,
                    "Username",
                    InputKind::Text,
                    "Enter a username",
                ),
                FieldState::new(FieldId::Email, "Email", InputKind::Email, "Enter your email"),
                FieldState::new(
                    FieldId::Password,
                    "Password",
                    InputKind::Password,
                    "Enter a password",
                ),
                FieldState::new(
                    FieldId::ConfirmPassword,
                    "Confirm password",
                    InputKind::Password,
                    "Repeat the password",
                ),
            ],
            rules: RuleBook::registration(),
            focus: Some(FieldId::Username),
            submit_attempted: false,
            phase: SubmitPhase::Idle,
            acknowledgment: None,
        };
        state.fields[FieldId::Username.index()].focus();
        state
    }
}

impl UiState for RegistrationState {}

impl RegistrationState {
    pub fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[id.index()]
    }

    /// Whether errors are being forced visible on every field.
    pub fn forced(&self) -> bool {
        self.submit_attempted
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting { .. })
    }

    /// Every rule of every field passes on the current values.
    ///
    /// Computed fresh on each call.
    pub fn all_valid(&self) -> bool {
        FieldId::ALL.iter().all(|field| {
            validation::passes(
                self.rules.rules_for(*field),
                self.data.value(*field),
                &self.data,
            )
        })
    }

    /// The operation that should be in flight for this state, if any.
    pub fn pending_operation(&self) -> Option<Operation> {
        match &self.phase {
            SubmitPhase::Submitting { payload } => Some(Operation::Register(payload.clone())),
            SubmitPhase::Idle => None,
        }
    }

    /// Errors the user currently sees on `id`.
    pub fn visible_errors(&self, id: FieldId) -> &[String] {
        self.field(id).visible_errors(self.forced())
    }

    pub(super) fn revalidate(&mut self, id: FieldId) {
        let forced = self.forced();
        let rules = self.rules.rules_for(id);
        let value = self.data.value(id);
        self.fields[id.index()].revalidate(rules, value, &self.data, forced);
    }

    /// Revalidate `id` and every field whose rules read it.
    pub(super) fn revalidate_with_dependents(&mut self, id: FieldId) {
        let dependents: Vec<FieldId> = self.rules.dependents_of(id).collect();
        self.revalidate(id);
        for dependent in dependents {
            self.revalidate(dependent);
        }
    }

    pub(super) fn revalidate_all(&mut self) {
        for field in FieldId::ALL {
            self.revalidate(field);
        }
    }

    /// Blur the current field (touching it) and focus `target`.
    pub(super) fn move_focus(&mut self, target: Option<FieldId>) {
        if self.focus == target {
            return;
        }
        if let Some(previous) = self.focus {
            if self.fields[previous.index()].blur() {
                self.revalidate(previous);
            }
        }
        if let Some(next) = target {
            self.fields[next.index()].focus();
        }
        self.focus = target;
    }
}
