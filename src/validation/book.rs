//! Per-field rule sets for the registration form.

use super::field::FieldId;
use super::rule::ValidationRule;

pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
pub const USERNAME_CHARSET: &str = "Username may only contain letters, digits and underscores";
pub const EMAIL_EMPTY: &str = "Email must not be empty";
pub const EMAIL_INVALID: &str = "Email is not valid";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORD_WEAK: &str =
    "Password must contain an uppercase letter, a lowercase letter and a digit";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Ordered rules for every field. Order decides message display order.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBook {
    rules: [Vec<ValidationRule>; 4],
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::registration()
    }
}

impl RuleBook {
    /// A book with no rules at all.
    pub fn empty() -> Self {
        Self {
            rules: Default::default(),
        }
    }

    /// The rules used by the registration form.
    pub fn registration() -> Self {
        Self::empty()
            .with_rules(
                FieldId::Username,
                vec![
                    ValidationRule::min_length(3, USERNAME_TOO_SHORT),
                    ValidationRule::identifier(USERNAME_CHARSET),
                ],
            )
            .with_rules(
                FieldId::Email,
                vec![
                    ValidationRule::non_empty(EMAIL_EMPTY),
                    ValidationRule::email(EMAIL_INVALID),
                ],
            )
            .with_rules(
                FieldId::Password,
                vec![
                    ValidationRule::min_length(6, PASSWORD_TOO_SHORT),
                    ValidationRule::strong_password(PASSWORD_WEAK),
                ],
            )
            .with_rules(
                FieldId::ConfirmPassword,
                vec![ValidationRule::equals_field(
                    FieldId::Password,
                    PASSWORD_MISMATCH,
                )],
            )
    }

    pub fn with_rules(mut self, field: FieldId, rules: Vec<ValidationRule>) -> Self {
        self.set_rules(field, rules);
        self
    }

    pub fn set_rules(&mut self, field: FieldId, rules: Vec<ValidationRule>) {
        self.rules[field.index()] = rules;
    }

    pub fn rules_for(&self, field: FieldId) -> &[ValidationRule] {
        &self.rules[field.index()]
    }

    /// Fields whose rules read `field`'s value.
    pub fn dependents_of(&self, field: FieldId) -> impl Iterator<Item = FieldId> + '_ {
        FieldId::ALL.into_iter().filter(move |candidate| {
            *candidate != field
                && self
                    .rules_for(*candidate)
                    .iter()
                    .any(|rule| rule.dependency() == Some(field))
        })
    }
}
