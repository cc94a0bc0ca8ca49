use crate::ui::registration::FormData;

/// Work that completes asynchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Submit a registration snapshot.
    Register(FormData),
    /// Create a todo with the given (already trimmed) text.
    AddTodo { text: String },
    /// Store new text for an existing todo.
    SaveEdit { id: u64, text: String },
}

/// One slot per kind: at most one operation of each kind is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Register,
    AddTodo,
    SaveEdit,
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Register(_) => OperationKind::Register,
            Operation::AddTodo { .. } => OperationKind::AddTodo,
            Operation::SaveEdit { .. } => OperationKind::SaveEdit,
        }
    }
}
