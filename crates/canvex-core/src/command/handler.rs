use canvex_core_types::TransactionId;

use crate::bus::Outcome;
use crate::editor::Editor;
use crate::errors::{CanvexError, Result};
use crate::model::{Context, ElementId};
use crate::ops::Store;

/// Primary handler of a named command
///
/// `pre_execute` and `post_execute` receive the editor so they can run
/// nested commands; `execute` is the core apply step and only touches the
/// store.
pub trait CommandHandler {
    /// Check preconditions; returning false rejects the command
    fn can_execute(&self, _store: &Store, _context: &Context) -> bool {
        true
    }

    fn pre_execute(&self, _editor: &mut Editor, _context: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Apply the command, returning the ids of changed elements
    fn execute(&self, store: &mut Store, context: &mut Context) -> Result<Vec<ElementId>>;

    fn post_execute(&self, _editor: &mut Editor, _context: &mut Context) -> Result<()> {
        Ok(())
    }
}

/// Result of [`Editor::execute`]
#[derive(Debug, Clone)]
pub struct Execution {
    pub command: String,
    pub outcome: Outcome,
    /// Context after all hooks and handler phases ran
    pub context: Context,
    /// Ids changed by this command and the commands nested in it
    pub changed: Vec<ElementId>,
    pub transaction_id: TransactionId,
}

impl Execution {
    pub fn is_committed(&self) -> bool {
        self.outcome == Outcome::Committed
    }

    /// Id of the element a create command produced
    pub fn shape(&self) -> Option<&str> {
        self.context.shape.as_deref()
    }
}

/// Read a required context field or fail with `MissingContextField`
pub(crate) fn require<T: Clone>(command: &str, field: &str, value: &Option<T>) -> Result<T> {
    value.clone().ok_or_else(|| CanvexError::MissingContextField {
        command: command.to_string(),
        field: field.to_string(),
    })
}
