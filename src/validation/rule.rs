//! Validation rules: a predicate over a string paired with a failure message.

use std::sync::LazyLock;

use regex::Regex;

use super::field::{FieldId, FieldLookup};

/// Letters, digits and underscore only.
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid identifier regex"));

/// `local@domain.tld` with no whitespace and a single `@` per segment.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// The predicate half of a rule.
///
/// Kept as data rather than a closure so a rule set can be compared for
/// changes and so cross-field checks declare the sibling they read.
#[derive(Debug, Clone)]
pub enum RuleCheck {
    /// At least one character.
    NonEmpty,
    /// At least `n` characters.
    MinLength(usize),
    /// Arbitrary regex; anchors are the caller's responsibility.
    Pattern(Regex),
    /// Letters, digits and underscore only.
    Identifier,
    /// `local@domain.tld` shape.
    Email,
    /// At least one lowercase letter, one uppercase letter and one digit.
    StrongPassword,
    /// Equal to the current value of another field.
    EqualsField(FieldId),
}

impl PartialEq for RuleCheck {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NonEmpty, Self::NonEmpty)
            | (Self::Identifier, Self::Identifier)
            | (Self::Email, Self::Email)
            | (Self::StrongPassword, Self::StrongPassword) => true,
            (Self::MinLength(a), Self::MinLength(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::EqualsField(a), Self::EqualsField(b)) => a == b,
            _ => false,
        }
    }
}

impl RuleCheck {
    pub fn holds(&self, value: &str, lookup: &impl FieldLookup) -> bool {
        match self {
            RuleCheck::NonEmpty => !value.is_empty(),
            RuleCheck::MinLength(min) => value.chars().count() >= *min,
            RuleCheck::Pattern(regex) => regex.is_match(value),
            RuleCheck::Identifier => IDENTIFIER_REGEX.is_match(value),
            RuleCheck::Email => EMAIL_REGEX.is_match(value),
            RuleCheck::StrongPassword => {
                value.chars().any(|c| c.is_ascii_lowercase())
                    && value.chars().any(|c| c.is_ascii_uppercase())
                    && value.chars().any(|c| c.is_ascii_digit())
            }
            RuleCheck::EqualsField(other) => value == lookup.value_of(*other),
        }
    }
}

/// A predicate plus the message shown when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    check: RuleCheck,
    message: String,
}

impl ValidationRule {
    pub fn new(check: RuleCheck, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    pub fn non_empty(message: impl Into<String>) -> Self {
        Self::new(RuleCheck::NonEmpty, message)
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(RuleCheck::MinLength(min), message)
    }

    pub fn pattern(regex: Regex, message: impl Into<String>) -> Self {
        Self::new(RuleCheck::Pattern(regex), message)
    }

    pub fn identifier(message: impl Into<String>) -> Self {
        Self::new(RuleCheck::Identifier, message)
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::new(RuleCheck::Email, message)
    }

    pub fn strong_password(message: impl Into<String>) -> Self {
        Self::new(RuleCheck::StrongPassword, message)
    }

    pub fn equals_field(field: FieldId, message: impl Into<String>) -> Self {
        Self::new(RuleCheck::EqualsField(field), message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when `value` satisfies the rule.
    pub fn test(&self, value: &str, lookup: &impl FieldLookup) -> bool {
        self.check.holds(value, lookup)
    }

    /// The sibling field this rule reads, if any.
    pub fn dependency(&self) -> Option<FieldId> {
        match self.check {
            RuleCheck::EqualsField(field) => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::field::NoSiblings;

    struct Password(&'static str);

    impl FieldLookup for Password {
        fn value_of(&self, field: FieldId) -> &str {
            match field {
                FieldId::Password => self.0,
                _ => "",
            }
        }
    }

    #[test]
    fn min_length_counts_chars_not_bytes() {
        let rule = ValidationRule::min_length(3, "short");
        assert!(rule.test("äöü", &NoSiblings));
        assert!(!rule.test("ab", &NoSiblings));
    }

    #[test]
    fn identifier_rejects_punctuation_and_empty() {
        let rule = ValidationRule::identifier("bad");
        assert!(rule.test("user_1", &NoSiblings));
        assert!(!rule.test("user-1", &NoSiblings));
        assert!(!rule.test("", &NoSiblings));
    }

    #[test]
    fn email_shape() {
        let rule = ValidationRule::email("bad");
        assert!(rule.test("a@b.com", &NoSiblings));
        assert!(!rule.test("a@b", &NoSiblings));
        assert!(!rule.test("a b@c.com", &NoSiblings));
        assert!(!rule.test("a@@b.com", &NoSiblings));
    }

    #[test]
    fn strong_password_needs_all_three_classes() {
        let rule = ValidationRule::strong_password("weak");
        assert!(rule.test("Abcdef1", &NoSiblings));
        assert!(!rule.test("abcdef1", &NoSiblings));
        assert!(!rule.test("ABCDEF1", &NoSiblings));
        assert!(!rule.test("Abcdefg", &NoSiblings));
    }

    #[test]
    fn equals_field_reads_sibling_at_evaluation_time() {
        let rule = ValidationRule::equals_field(FieldId::Password, "mismatch");
        assert!(rule.test("secret", &Password("secret")));
        assert!(!rule.test("secret", &Password("other")));
        assert_eq!(rule.dependency(), Some(FieldId::Password));
    }

    #[test]
    fn pattern_rules_compare_by_source() {
        let a = ValidationRule::pattern(Regex::new("^a+$").unwrap(), "m");
        let b = ValidationRule::pattern(Regex::new("^a+$").unwrap(), "m");
        let c = ValidationRule::pattern(Regex::new("^b+$").unwrap(), "m");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.dependency(), None);
    }
}
