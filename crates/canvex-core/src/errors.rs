use canvex_core_types::TransactionId;
use thiserror::Error;

/// Result type alias using CanvexError
pub type Result<T> = std::result::Result<T, CanvexError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling
/// and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    Configuration,
    UnknownCommand,
    DuplicateRegistration,

    // Lookup
    NotFound,

    // Structural
    CycleDetected,
    TraversalBroken,
    InvalidBounds,
    InvariantViolation,

    // Command execution
    HandlerFailed,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::DuplicateRegistration => "ERR_DUPLICATE_REGISTRATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::TraversalBroken => "ERR_TRAVERSAL_BROKEN",
            ExErrorKind::InvalidBounds => "ERR_INVALID_BOUNDS",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::HandlerFailed => "ERR_HANDLER_FAILED",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the context needed to locate the
/// failure: the command or operation, the element involved and the
/// transaction it happened in.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    element_id: Option<String>,
    transaction_id: Option<TransactionId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            element_id: None,
            transaction_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add element ID context
    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Add transaction ID context
    pub fn with_transaction_id(mut self, transaction_id: TransactionId) -> Self {
        self.transaction_id = Some(transaction_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the element ID context, if any
    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// Get the transaction ID context, if any
    pub fn transaction_id(&self) -> Option<&TransactionId> {
        self.transaction_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(element_id) = &self.element_id {
            write!(f, " (element_id: {})", element_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for canvex operations
///
/// Configuration errors surface synchronously at registration or setup
/// time. Lookup and structural errors surface from the element arena and
/// traversal. Command handlers may wrap their own failures in
/// `HandlerFailed`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvexError {
    // ===== Configuration Errors =====
    /// No handler registered for the command
    #[error("No handler registered for command: {command}")]
    UnknownCommand { command: String },

    /// A handler is already registered for the command
    #[error("A handler is already registered for command: {command}")]
    HandlerAlreadyRegistered { command: String },

    /// Tool registered without its lifecycle events
    #[error("A tool has to be registered with its \"events\": {tool}")]
    ToolEventsMissing { tool: String },

    /// Tool name registered twice
    #[error("Tool already registered: {tool}")]
    ToolAlreadyRegistered { tool: String },

    /// Unrecognized resize direction
    #[error("Unrecognized direction: {direction}")]
    UnknownDirection { direction: String },

    /// Invalid editor configuration
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ===== Lookup Errors =====
    /// Element not found in the store
    #[error("Element not found: {element_id}")]
    ElementNotFound { element_id: String },

    /// Requested parent not found in the store
    #[error("Parent element not found: {element_id}")]
    ParentNotFound { element_id: String },

    /// A command required a context field that was not set
    #[error("Command {command} requires context field '{field}'")]
    MissingContextField { command: String, field: String },

    // ===== Structural Errors =====
    /// Parent chain loops back onto itself
    #[error("Cycle detected in parent chain of element {element_id}")]
    CycleDetected { element_id: String },

    /// Parent link points at an element that is not in the store
    #[error("Parent chain broken at element {element_id}")]
    ParentChainBroken { element_id: String },

    /// Bounds with negative extent
    #[error("Invalid bounds for element {element_id}: {reason}")]
    InvalidBounds { element_id: String, reason: String },

    /// Label and target disagree about their link
    #[error("Label invariant broken between {element_id} and {label_id}")]
    LabelInvariantBroken {
        element_id: String,
        label_id: String,
    },

    /// Parent/children lists disagree
    #[error("Child list of {parent_id} is inconsistent for child {child_id}")]
    ChildListInconsistent { parent_id: String, child_id: String },

    // ===== Command Errors =====
    /// A command handler or hook failed
    #[error("Command {command} failed: {reason}")]
    HandlerFailed { command: String, reason: String },

    // ===== Generic Errors =====
    /// Serialization error (YAML/JSON decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from CanvexError to the canonical ExError facility
impl From<CanvexError> for ExError {
    fn from(err: CanvexError) -> Self {
        match err {
            CanvexError::UnknownCommand { command } => ExError::new(ExErrorKind::UnknownCommand)
                .with_op(command)
                .with_message("No handler registered"),

            CanvexError::HandlerAlreadyRegistered { command } => {
                ExError::new(ExErrorKind::DuplicateRegistration)
                    .with_op(command)
                    .with_message("Handler already registered")
            }

            CanvexError::ToolEventsMissing { tool } => ExError::new(ExErrorKind::Configuration)
                .with_op("register_tool")
                .with_message(format!("Tool {} registered without events", tool)),

            CanvexError::ToolAlreadyRegistered { tool } => {
                ExError::new(ExErrorKind::DuplicateRegistration)
                    .with_op("register_tool")
                    .with_message(format!("Tool {} already registered", tool))
            }

            CanvexError::UnknownDirection { direction } => {
                ExError::new(ExErrorKind::Configuration)
                    .with_message(format!("Unrecognized direction: {}", direction))
            }

            CanvexError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::Configuration).with_message(reason)
            }

            CanvexError::ElementNotFound { element_id } => ExError::new(ExErrorKind::NotFound)
                .with_element_id(element_id)
                .with_message("Element not found"),

            CanvexError::ParentNotFound { element_id } => ExError::new(ExErrorKind::NotFound)
                .with_element_id(element_id)
                .with_op("find_parent")
                .with_message("Parent element not found"),

            CanvexError::MissingContextField { command, field } => {
                ExError::new(ExErrorKind::HandlerFailed)
                    .with_op(command)
                    .with_message(format!("Missing context field '{}'", field))
            }

            CanvexError::CycleDetected { element_id } => ExError::new(ExErrorKind::CycleDetected)
                .with_element_id(element_id)
                .with_message("Parent chain contains a cycle"),

            CanvexError::ParentChainBroken { element_id } => {
                ExError::new(ExErrorKind::TraversalBroken)
                    .with_element_id(element_id)
                    .with_message("Parent chain broken")
            }

            CanvexError::InvalidBounds { element_id, reason } => {
                ExError::new(ExErrorKind::InvalidBounds)
                    .with_element_id(element_id)
                    .with_message(reason)
            }

            CanvexError::LabelInvariantBroken {
                element_id,
                label_id,
            } => ExError::new(ExErrorKind::InvariantViolation)
                .with_element_id(element_id)
                .with_message(format!("Label link to {} is one-sided", label_id)),

            CanvexError::ChildListInconsistent {
                parent_id,
                child_id,
            } => ExError::new(ExErrorKind::InvariantViolation)
                .with_element_id(child_id)
                .with_message(format!("Inconsistent child list in {}", parent_id)),

            CanvexError::HandlerFailed { command, reason } => {
                ExError::new(ExErrorKind::HandlerFailed)
                    .with_op(command)
                    .with_message(reason)
            }

            CanvexError::Serialization { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
