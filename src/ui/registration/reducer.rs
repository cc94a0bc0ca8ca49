use crate::ui::mvi::Reducer;
use crate::ui::registration::intent::RegistrationIntent;
use crate::ui::registration::state::{RegistrationState, SubmitPhase, SUCCESS_MESSAGE};
use crate::validation::FieldId;

pub struct RegistrationReducer;

impl Reducer for RegistrationReducer {
    type State = RegistrationState;
    type Intent = RegistrationIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RegistrationIntent::Change { field, value } => {
                if state.data.value(field) != value {
                    state.data.set(field, value);
                    state.revalidate_with_dependents(field);
                }
                state
            }
            RegistrationIntent::Focus(field) => {
                state.move_focus(Some(field));
                state
            }
            RegistrationIntent::Blur => {
                state.move_focus(None);
                state
            }
            RegistrationIntent::FocusNext => {
                let next = state.focus.map_or(FieldId::Username, FieldId::next);
                state.move_focus(Some(next));
                state
            }
            RegistrationIntent::FocusPrev => {
                let prev = state.focus.map_or(FieldId::ConfirmPassword, FieldId::prev);
                state.move_focus(Some(prev));
                state
            }
            RegistrationIntent::ReplaceRules { field, rules } => {
                if state.rules.rules_for(field) != rules.as_slice() {
                    state.rules.set_rules(field, rules);
                    state.revalidate_with_dependents(field);
                }
                state
            }
            RegistrationIntent::Submit => {
                // The submit control is disabled while a submission is pending.
                if state.is_submitting() {
                    return state;
                }
                state.submit_attempted = true;
                state.revalidate_all();
                if state.all_valid() {
                    state.acknowledgment = None;
                    state.phase = SubmitPhase::Submitting {
                        payload: state.data.clone(),
                    };
                }
                state
            }
            RegistrationIntent::SubmitCompleted => {
                if state.is_submitting() {
                    state.phase = SubmitPhase::Idle;
                    state.acknowledgment = Some(SUCCESS_MESSAGE.to_string());
                }
                state
            }
            RegistrationIntent::DismissAcknowledgment => {
                state.acknowledgment = None;
                state
            }
        }
    }
}
