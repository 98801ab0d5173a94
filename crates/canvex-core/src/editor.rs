//! Editor: owner of the element store and everything acting on it

use std::collections::HashMap;
use std::rc::Rc;

use canvex_core_types::SessionId;
use tracing::debug;

use crate::bus::{Event, EventBus};
use crate::command::handlers::{
    CreateLabelHandler, CreateShapeHandler, MoveElementsHandler, MoveShapeHandler,
    ResizeShapeHandler, SpaceToolHandler, ELEMENTS_MOVE, LABEL_CREATE, SHAPE_CREATE, SHAPE_MOVE,
    SHAPE_RESIZE, SPACE_TOOL,
};
use crate::command::{CommandHandler, StackState};
use crate::config::{EditorConfig, OrderingMode};
use crate::errors::Result;
use crate::logging_facility;
use crate::features::dragging::DragState;
use crate::features::{
    install_label_support, install_move_gesture, install_space_tool, GroupProbe,
    InteractionProbe, ToolManager,
};
use crate::ops::{ElementFactory, Store};
use crate::ordering::{install_ordering, LevelOrderingProvider};

/// Single-threaded editing session
///
/// Owns the element store, the event bus, the registered command handlers
/// and the interaction state (drag session, active tool). Listeners and
/// handlers receive `&mut Editor`, so every mutation goes through one
/// owner.
pub struct Editor {
    pub(crate) store: Store,
    pub(crate) bus: EventBus,
    pub(crate) handlers: HashMap<String, Rc<dyn CommandHandler>>,
    pub(crate) stack: StackState,
    pub(crate) dragging: DragState,
    pub(crate) tool_manager: ToolManager,
    factory: ElementFactory,
    probe: Rc<dyn InteractionProbe>,
    config: EditorConfig,
    session_id: SessionId,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("session_id", &self.session_id)
            .field("elements", &self.store.len())
            .field("active_tool", &self.tool_manager.active())
            .finish_non_exhaustive()
    }
}

impl Editor {
    /// Create an editor with the built-in commands and features
    ///
    /// Installs, per `config`: the ordering policy, label support, the move
    /// gesture and the space tool. A configured `log_profile` is handed to
    /// [`crate::logging_facility::init`] first.
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` - unknown log profile
    /// * Registration errors of the built-in handlers and tools
    pub fn new(config: EditorConfig) -> Result<Self> {
        let probe = Rc::new(GroupProbe::new(config.toolbar_group.clone()));
        Self::with_probe(config, probe)
    }

    /// Like [`Editor::new`] with a custom toolbar interaction probe
    pub fn with_probe(config: EditorConfig, probe: Rc<dyn InteractionProbe>) -> Result<Self> {
        if let Some(profile) = config.profile()? {
            logging_facility::init(profile);
        }
        let mut editor = Self::bare(config, probe);

        editor.register_handler(SHAPE_CREATE, CreateShapeHandler)?;
        editor.register_handler(LABEL_CREATE, CreateLabelHandler)?;
        editor.register_handler(SHAPE_MOVE, MoveShapeHandler)?;
        editor.register_handler(SHAPE_RESIZE, ResizeShapeHandler)?;
        editor.register_handler(ELEMENTS_MOVE, MoveElementsHandler)?;
        editor.register_handler(SPACE_TOOL, SpaceToolHandler)?;

        if editor.config.ordering == OrderingMode::Level {
            install_ordering(&mut editor.bus, LevelOrderingProvider);
        }
        if editor.config.label_support {
            install_label_support(&mut editor.bus);
        }
        install_move_gesture(&mut editor.bus);
        install_space_tool(&mut editor)?;

        debug!(session_id = %editor.session_id, "editor ready");
        Ok(editor)
    }

    /// Editor without handlers or features
    pub fn bare(config: EditorConfig, probe: Rc<dyn InteractionProbe>) -> Self {
        Self {
            store: Store::new(),
            bus: EventBus::new(),
            handlers: HashMap::new(),
            stack: StackState::default(),
            dragging: DragState::default(),
            tool_manager: ToolManager::default(),
            factory: ElementFactory::new(config.first_uid),
            probe,
            config,
            session_id: SessionId::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Direct store access, bypassing commands and hooks
    ///
    /// Meant for seeding a diagram; edits made here are not intercepted.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn factory(&mut self) -> &mut ElementFactory {
        &mut self.factory
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn interaction_probe(&self) -> &dyn InteractionProbe {
        self.probe.as_ref()
    }

    /// Dispatch `event` to the listeners of `name`
    ///
    /// Listeners run on a snapshot of the registrations, so they may add or
    /// remove listeners and fire nested events. Dispatch ends early when a
    /// listener stops propagation.
    ///
    /// # Errors
    ///
    /// The first listener error; remaining listeners are skipped.
    pub fn fire(&mut self, name: &str, event: &mut Event) -> Result<()> {
        let listeners = self.bus.listeners(name);
        event.begin_dispatch(name);
        if listeners.is_empty() {
            return Ok(());
        }

        debug!(event = name, listeners = listeners.len(), "dispatch");
        for listener in listeners {
            listener(self, event)?;
            if event.is_stopped() {
                debug!(event = name, "propagation stopped");
                break;
            }
        }
        Ok(())
    }
}
