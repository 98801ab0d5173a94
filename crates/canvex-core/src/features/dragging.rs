//! Drag session protocol
//!
//! At most one drag session exists at a time. A session is identified by
//! its event prefix (`shape.move`, `spaceTool`, ...) and owns the gesture
//! context. Lifecycle events fired under the prefix:
//!
//! | call            | events                       |
//! |-----------------|------------------------------|
//! | `init_drag`     | `<prefix>.init`              |
//! | `start_drag`    | `<prefix>.start`             |
//! | `update_drag`   | `<prefix>.move`              |
//! | `end_drag`      | `<prefix>.end`, `.ended`     |
//! | `cancel_drag`   | `<prefix>.cancel`, `.canceled` |
//!
//! Listeners may cancel the session they are notified about; context
//! changes made by a listener are kept only while the session is alive.

use tracing::{debug, warn};

use crate::bus::{Event, UiEvent};
use crate::editor::Editor;
use crate::errors::Result;
use crate::model::{Context, Delta};

#[derive(Debug, Clone)]
pub(crate) struct DragSession {
    generation: u64,
    prefix: String,
    context: Context,
    original: Option<UiEvent>,
}

/// Drag state owned by the editor
#[derive(Debug, Default)]
pub(crate) struct DragState {
    session: Option<DragSession>,
    next_generation: u64,
}

impl Editor {
    /// Begin a drag session under `prefix`, canceling any running one
    pub fn init_drag(
        &mut self,
        prefix: &str,
        context: Context,
        original: Option<UiEvent>,
    ) -> Result<()> {
        if self.dragging.session.is_some() {
            self.cancel_drag()?;
        }

        let generation = self.dragging.next_generation;
        self.dragging.next_generation += 1;
        self.dragging.session = Some(DragSession {
            generation,
            prefix: prefix.to_string(),
            context,
            original,
        });
        debug!(prefix = prefix, generation = generation, "drag init");

        self.fire_drag("init").map(|_| ())
    }

    /// Fire `<prefix>.start`
    pub fn start_drag(&mut self) -> Result<bool> {
        self.fire_drag("start")
    }

    /// Record the accumulated displacement and fire `<prefix>.move`
    pub fn update_drag(&mut self, delta: Delta) -> Result<bool> {
        match self.dragging.session.as_mut() {
            Some(session) => session.context.delta = Some(delta),
            None => return Ok(false),
        }
        self.fire_drag("move")
    }

    /// Finish the session: fire `<prefix>.end`, close it, fire `<prefix>.ended`
    ///
    /// `original` replaces the session's originating UI event when given.
    /// Returns false if no session was running. If an `end` listener fails
    /// the session is closed as canceled and the error is returned.
    pub fn end_drag(&mut self, original: Option<UiEvent>) -> Result<bool> {
        let Some(session) = self.dragging.session.as_mut() else {
            return Ok(false);
        };
        if original.is_some() {
            session.original = original;
        }
        let generation = session.generation;

        let survived = match self.fire_drag("end") {
            Ok(survived) => survived,
            Err(e) => {
                if let Some(session) = self.take_session(generation) {
                    if let Err(close_err) = self.fire_closed(session, "canceled") {
                        warn!(error = %close_err, "canceled listener failed after end error");
                    }
                }
                return Err(e);
            }
        };
        if !survived {
            return Ok(true);
        }
        match self.take_session(generation) {
            Some(session) => self.fire_closed(session, "ended")?,
            None => debug!("drag session closed by end listener"),
        }
        Ok(true)
    }

    /// Abort the session: fire `<prefix>.cancel`, discard it, fire
    /// `<prefix>.canceled`
    ///
    /// Returns false if no session was running.
    pub fn cancel_drag(&mut self) -> Result<bool> {
        let Some(generation) = self.dragging.session.as_ref().map(|s| s.generation) else {
            return Ok(false);
        };

        self.fire_drag("cancel")?;
        if let Some(session) = self.take_session(generation) {
            self.fire_closed(session, "canceled")?;
        }
        Ok(true)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.session.is_some()
    }

    /// Prefix of the running session
    pub fn drag_prefix(&self) -> Option<&str> {
        self.dragging.session.as_ref().map(|s| s.prefix.as_str())
    }

    /// Context of the running session
    pub fn drag_context(&self) -> Option<&Context> {
        self.dragging.session.as_ref().map(|s| &s.context)
    }

    pub(crate) fn drag_context_mut(&mut self) -> Option<&mut Context> {
        self.dragging.session.as_mut().map(|s| &mut s.context)
    }

    /// Fire `<prefix>.<suffix>` for the running session and keep the
    /// listeners' context changes; returns whether the session survived
    fn fire_drag(&mut self, suffix: &str) -> Result<bool> {
        let Some(session) = self.dragging.session.as_ref() else {
            return Ok(false);
        };
        let generation = session.generation;
        let name = format!("{}.{}", session.prefix, suffix);
        let mut event = Event::new(session.context.clone()).with_original(session.original.clone());

        self.fire(&name, &mut event)?;

        match self.dragging.session.as_mut() {
            Some(session) if session.generation == generation => {
                session.context = event.context;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn take_session(&mut self, generation: u64) -> Option<DragSession> {
        match self.dragging.session.as_ref() {
            Some(session) if session.generation == generation => self.dragging.session.take(),
            _ => None,
        }
    }

    fn fire_closed(&mut self, session: DragSession, suffix: &str) -> Result<()> {
        let name = format!("{}.{}", session.prefix, suffix);
        let mut event = Event::new(session.context).with_original(session.original);
        self.fire(&name, &mut event)
    }
}
