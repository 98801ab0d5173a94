//! Command stack
//!
//! Executes named commands through their registered handler, wrapped in
//! the interceptor phases. Every command is all-or-nothing: it runs in its
//! own store journal frame, which is rolled back on rejection or error and
//! folded into the enclosing frame on commit. Commands run from inside
//! hooks or handlers join the enclosing transaction.

use std::rc::Rc;
use std::time::Instant;

use canvex_core_types::TransactionId;
use tracing::debug;

use crate::bus::{Event, Outcome};
use crate::editor::Editor;
use crate::errors::{CanvexError, Result};
use crate::model::{Context, ElementId};
use crate::{log_op_end, log_op_error, log_op_start};

use super::handler::{CommandHandler, Execution};
use super::interceptor::HookPhase;

/// Event fired after each committed top-level command
pub const ELEMENTS_CHANGED: &str = "elements.changed";

/// Bookkeeping of the running transaction
#[derive(Debug, Default)]
pub(crate) struct StackState {
    depth: usize,
    transaction: Option<TransactionId>,
    changed: Vec<ElementId>,
}

struct Applied {
    outcome: Outcome,
    context: Context,
}

impl Editor {
    /// Register the primary handler of `command`
    ///
    /// # Errors
    ///
    /// Returns `HandlerAlreadyRegistered` if `command` already has one.
    pub fn register_handler<H>(&mut self, command: &str, handler: H) -> Result<()>
    where
        H: CommandHandler + 'static,
    {
        if self.handlers.contains_key(command) {
            return Err(CanvexError::HandlerAlreadyRegistered {
                command: command.to_string(),
            });
        }
        self.handlers.insert(command.to_string(), Rc::new(handler));
        Ok(())
    }

    pub fn has_handler(&self, command: &str) -> bool {
        self.handlers.contains_key(command)
    }

    /// True while a command is running
    pub fn is_executing(&self) -> bool {
        self.stack.depth > 0
    }

    /// Execute `command` with `context`
    ///
    /// Phases, in order: `canExecute` hooks and the handler's precondition,
    /// `preExecute` hooks, the handler's pre-execute/execute/post-execute,
    /// `postExecute` hooks (on commit and rejection), `postExecuted` hooks
    /// (on commit only). A committed top-level command then fires
    /// `elements.changed`.
    ///
    /// # Errors
    ///
    /// * `UnknownCommand` - no handler registered for `command`
    /// * any error raised by a hook or the handler; the store is restored to
    ///   its state before the top-level command
    pub fn execute(&mut self, command: &str, context: Context) -> Result<Execution> {
        let handler = self
            .handlers
            .get(command)
            .cloned()
            .ok_or_else(|| CanvexError::UnknownCommand {
                command: command.to_string(),
            })?;

        let top_level = self.stack.depth == 0;
        let transaction_id = match (&self.stack.transaction, top_level) {
            (Some(tx), false) => tx.clone(),
            _ => TransactionId::new(),
        };
        let start = Instant::now();

        if top_level {
            self.stack.transaction = Some(transaction_id.clone());
            self.stack.changed.clear();
            log_op_start!(
                command,
                transaction_id = %transaction_id,
                session_id = %self.session_id()
            );
        } else {
            debug!(command = command, depth = self.stack.depth, "nested command");
        }

        self.store.begin_frame();
        let mark = self.stack.changed.len();

        self.stack.depth += 1;
        let result = self.apply_command(command, handler.as_ref(), context);
        self.stack.depth -= 1;

        let result = match result {
            Ok(applied) if applied.outcome == Outcome::Committed && top_level => {
                let changed = dedup(std::mem::take(&mut self.stack.changed));
                self.notify_changed(&changed).map(|_| (applied, changed))
            }
            Ok(applied) if applied.outcome == Outcome::Committed => {
                let changed = self.stack.changed[mark..].to_vec();
                Ok((applied, dedup(changed)))
            }
            other => other.map(|applied| (applied, Vec::new())),
        };

        match &result {
            Ok((applied, _)) if applied.outcome == Outcome::Committed => self.store.commit_frame(),
            _ => {
                self.store.rollback_frame();
                self.stack.changed.truncate(mark);
            }
        }

        match result {
            Ok((applied, changed)) => {
                if top_level {
                    self.stack.transaction = None;
                    log_op_end!(
                        command,
                        duration_ms = start.elapsed().as_millis() as u64,
                        transaction_id = %transaction_id,
                        outcome = ?applied.outcome,
                        changed_len = changed.len()
                    );
                }
                Ok(Execution {
                    command: command.to_string(),
                    outcome: applied.outcome,
                    context: applied.context,
                    changed,
                    transaction_id,
                })
            }
            Err(e) => {
                if top_level {
                    self.stack.transaction = None;
                    self.stack.changed.clear();
                    log_op_error!(
                        command,
                        e.clone(),
                        duration_ms = start.elapsed().as_millis() as u64,
                        transaction_id = %transaction_id
                    );
                }
                Err(e)
            }
        }
    }

    fn apply_command(
        &mut self,
        command: &str,
        handler: &dyn CommandHandler,
        context: Context,
    ) -> Result<Applied> {
        let mut event = Event::new(context);

        self.fire(&HookPhase::CanExecute.event_name(command), &mut event)?;
        let mut accepted = !event.is_rejected() && handler.can_execute(&self.store, &event.context);

        if accepted {
            self.fire(&HookPhase::PreExecute.event_name(command), &mut event)?;
            accepted = !event.is_rejected();
        }

        if accepted {
            handler.pre_execute(self, &mut event.context)?;
            let changed = handler.execute(&mut self.store, &mut event.context)?;
            self.stack.changed.extend(changed);
            handler.post_execute(self, &mut event.context)?;
        } else {
            debug!(command = command, "command rejected");
        }

        let outcome = if accepted {
            Outcome::Committed
        } else {
            Outcome::Rejected
        };
        event.outcome = Some(outcome);

        self.fire(&HookPhase::PostExecute.event_name(command), &mut event)?;
        if accepted {
            self.fire(&HookPhase::PostExecuted.event_name(command), &mut event)?;
        }

        Ok(Applied {
            outcome,
            context: event.context,
        })
    }

    fn notify_changed(&mut self, changed: &[ElementId]) -> Result<()> {
        if changed.is_empty() {
            return Ok(());
        }
        let mut event = Event::new(Context::new());
        event.elements = changed.to_vec();
        self.fire(ELEMENTS_CHANGED, &mut event)
    }
}

fn dedup(ids: Vec<ElementId>) -> Vec<ElementId> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
