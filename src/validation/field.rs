//! Field identities and sibling-value lookup for cross-field rules.

/// The four inputs of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::Username,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Position in [`FieldId::ALL`].
    pub fn index(self) -> usize {
        match self {
            FieldId::Username => 0,
            FieldId::Email => 1,
            FieldId::Password => 2,
            FieldId::ConfirmPassword => 3,
        }
    }

    /// Next field in display order, wrapping around.
    pub fn next(self) -> FieldId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in display order, wrapping around.
    pub fn prev(self) -> FieldId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Read access to the live values of every field.
///
/// Rules that compare against a sibling get the sibling's current value
/// through this trait at evaluation time instead of capturing it.
pub trait FieldLookup {
    fn value_of(&self, field: FieldId) -> &str;
}

/// Lookup for rules evaluated in isolation; every sibling reads as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSiblings;

impl FieldLookup for NoSiblings {
    fn value_of(&self, _field: FieldId) -> &str {
        ""
    }
}
