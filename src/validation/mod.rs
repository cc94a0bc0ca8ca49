//! Field validation engine.
//!
//! A field's error list is always the ordered projection
//! `rules.filter(|r| !r.test(value)).map(message)`; nothing here keeps
//! state of its own.

mod book;
mod field;
mod rule;

pub use book::{
    RuleBook, EMAIL_EMPTY, EMAIL_INVALID, PASSWORD_MISMATCH, PASSWORD_TOO_SHORT, PASSWORD_WEAK,
    USERNAME_CHARSET, USERNAME_TOO_SHORT,
};
pub use field::{FieldId, FieldLookup, NoSiblings};
pub use rule::{RuleCheck, ValidationRule};

/// Messages of every failing rule, in rule order.
pub fn evaluate(rules: &[ValidationRule], value: &str, lookup: &impl FieldLookup) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| !rule.test(value, lookup))
        .map(|rule| rule.message().to_string())
        .collect()
}

/// True when every rule passes.
pub fn passes(rules: &[ValidationRule], value: &str, lookup: &impl FieldLookup) -> bool {
    rules.iter().all(|rule| rule.test(value, lookup))
}
