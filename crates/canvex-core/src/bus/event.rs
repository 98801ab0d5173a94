use crate::model::{Context, ElementId};

/// Originating UI input of a gesture
///
/// The rendering layer fills in whatever it knows about the input target;
/// the kernel only reads `target_group`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiEvent {
    /// Group attribute of the container around the input target
    pub target_group: Option<String>,
}

impl UiEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_group(group: impl Into<String>) -> Self {
        Self {
            target_group: Some(group.into()),
        }
    }
}

/// Result of a command as seen by its post-execute hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    Rejected,
}

/// Payload handed to every listener of one dispatch
#[derive(Debug, Clone, Default)]
pub struct Event {
    /// Name the event was fired under
    pub name: String,
    pub context: Context,
    pub original: Option<UiEvent>,
    /// Set for post-execute hooks
    pub outcome: Option<Outcome>,
    /// Changed element ids (`elements.changed`)
    pub elements: Vec<ElementId>,
    stopped: bool,
    rejected: bool,
}

impl Event {
    pub fn new(context: Context) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    pub fn with_original(mut self, original: Option<UiEvent>) -> Self {
        self.original = original;
        self
    }

    /// Skip the remaining listeners of the current dispatch
    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Veto the command; only honored from `canExecute` and `preExecute`
    pub fn reject(&mut self) {
        self.rejected = true;
        self.stopped = true;
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected
    }

    pub(crate) fn begin_dispatch(&mut self, name: &str) {
        self.name = name.to_string();
        self.stopped = false;
    }
}
