//! Command boundary macros
//!
//! The command stack brackets every top-level command with one `start`
//! record and exactly one `end` or `end_error` record. All three share
//! `component`, `op` and `event`; callers append their own fields, usually
//! `transaction_id`.

/// Emit one boundary record at `$level`
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_boundary {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $crate::canvex_core_types::schema::$event,
            $($($field)*)?
        )
    };
}

/// Log the start of a command
///
/// # Example
///
/// ```
/// # use canvex_core::log_op_start;
/// log_op_start!("shape.move");
/// log_op_start!("shape.move", transaction_id = "tx_1", element_id = "shape_12");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_boundary!(info, $op, EVENT_START $(, $($field)*)?)
    };
}

/// Log a command that committed or was rejected
///
/// `duration_ms` is required.
///
/// # Example
///
/// ```
/// # use canvex_core::log_op_end;
/// log_op_end!("elements.move", duration_ms = 3, changed_len = 4);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_boundary!(
            info,
            $op,
            EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log a command that failed
///
/// `$err` is anything convertible into `ExError`; its kind and stable code
/// are recorded as `err.kind` and `err.code`.
///
/// # Example
///
/// ```
/// # use canvex_core::{log_op_error, errors::CanvexError};
/// let err = CanvexError::CycleDetected { element_id: "frame_3".to_string() };
/// log_op_error!("shape.move", err, duration_ms = 1, transaction_id = "tx_2");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_boundary!(
            error,
            $op,
            EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
