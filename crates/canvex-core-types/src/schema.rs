//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names stable across the kernel so that
//! captured output can be asserted on in tests and aggregated in production.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_TRANSACTION_ID: &str = "transaction_id";
pub const FIELD_SESSION_ID: &str = "session_id";

// Diagram identifiers
pub const FIELD_ELEMENT_ID: &str = "element_id";
pub const FIELD_COMMAND: &str = "command";
pub const FIELD_PHASE: &str = "phase";
pub const FIELD_TOOL: &str = "tool";

// Collection sizes
pub const FIELD_CHANGED_LEN: &str = "changed_len";
pub const FIELD_CLOSURE_LEN: &str = "closure_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_REJECTED: &str = "rejected";
