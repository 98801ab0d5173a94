//! Tool activation
//!
//! Keeps track of the single active tool. A tool is activated by its
//! `<tool>.init` event and deactivated when any of its drag prefixes ends
//! or is canceled. Initializing the active tool again toggles it off unless
//! the context asks to `reactivate`.

use std::collections::BTreeMap;

use tracing::debug;

use crate::bus::{Event, UiEvent, DEFAULT_PRIORITY, LOW_PRIORITY};
use crate::editor::Editor;
use crate::errors::{CanvexError, Result};
use crate::model::Context;

/// Fired whenever the active tool changes; `extras["tool"]` holds the new
/// tool name or null
pub const TOOL_MANAGER_UPDATE: &str = "tool-manager.update";

/// Key of the event prefix whose `init` activates the tool
pub const TOOL_KEY: &str = "tool";

/// Tells whether a UI event comes from the tool selection affordance
pub trait InteractionProbe {
    fn is_toolbar_interaction(&self, event: &UiEvent) -> bool;
}

/// Probe matching the group attribute of the event target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupProbe {
    group: String,
}

impl GroupProbe {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
        }
    }
}

impl InteractionProbe for GroupProbe {
    fn is_toolbar_interaction(&self, event: &UiEvent) -> bool {
        event.target_group.as_deref() == Some(self.group.as_str())
    }
}

/// Lifecycle events of a tool: key to event prefix
///
/// The `tool` key is required; every prefix contributes its `ended` and
/// `canceled` events to deactivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolEvents {
    prefixes: BTreeMap<String, String>,
}

impl ToolEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.prefixes.insert(key.into(), prefix.into());
        self
    }

    /// Prefix of the activating event
    pub fn tool(&self) -> Option<&str> {
        self.prefixes.get(TOOL_KEY).map(String::as_str)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.values().map(String::as_str)
    }
}

/// Registered tools and the active one
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    tools: Vec<String>,
    active: Option<String>,
}

impl ToolManager {
    pub fn is_active(&self, tool: &str) -> bool {
        self.active.as_deref() == Some(tool)
    }

    /// Name of the active tool
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_registered(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Editor {
    pub fn tool_manager(&self) -> &ToolManager {
        &self.tool_manager
    }

    /// Register tool `name` with its lifecycle events
    ///
    /// # Errors
    ///
    /// * `ToolEventsMissing` - `events` is absent or lacks the `tool` key
    /// * `ToolAlreadyRegistered` - `name` was registered before
    pub fn register_tool(&mut self, name: &str, events: Option<ToolEvents>) -> Result<()> {
        let missing = || CanvexError::ToolEventsMissing {
            tool: name.to_string(),
        };
        let events = events.ok_or_else(missing)?;
        let tool_prefix = events.tool().ok_or_else(missing)?.to_string();

        if self.tool_manager.is_registered(name) {
            return Err(CanvexError::ToolAlreadyRegistered {
                tool: name.to_string(),
            });
        }
        self.tool_manager.tools.push(name.to_string());

        let init = format!("{tool_prefix}.init");
        let tool = name.to_string();
        self.bus_mut()
            .on(&[init.as_str()], DEFAULT_PRIORITY, move |editor: &mut Editor, event: &mut Event| {
                // active tools reactivate only when asked to
                if !event.context.reactivate && editor.tool_manager.is_active(&tool) {
                    debug!(tool = %tool, "toggling tool off");
                    editor.set_active_tool(None)?;
                    editor.cancel_drag()?;
                    return Ok(());
                }
                editor.set_active_tool(Some(&tool))
            });

        let closing: Vec<String> = events
            .prefixes()
            .flat_map(|prefix| [format!("{prefix}.ended"), format!("{prefix}.canceled")])
            .collect();
        let closing: Vec<&str> = closing.iter().map(String::as_str).collect();
        self.bus_mut()
            .on(&closing, LOW_PRIORITY, |editor: &mut Editor, event: &mut Event| {
                if editor.tool_manager.active.is_none() {
                    return Ok(());
                }
                // switching tools through the toolbar deactivates on the next init
                if let Some(original) = &event.original {
                    if editor.interaction_probe().is_toolbar_interaction(original) {
                        return Ok(());
                    }
                }
                editor.set_active_tool(None)
            });

        debug!(tool = name, prefix = %tool_prefix, "tool registered");
        Ok(())
    }

    /// Set the active tool, notifying `tool-manager.update` on change only
    pub fn set_active_tool(&mut self, tool: Option<&str>) -> Result<()> {
        if self.tool_manager.active.as_deref() == tool {
            return Ok(());
        }
        self.tool_manager.active = tool.map(str::to_string);
        debug!(tool = ?tool, "active tool changed");

        let mut context = Context::new();
        context.extras.set(
            TOOL_KEY,
            tool.map_or(serde_json::Value::Null, serde_json::Value::from),
        );
        self.fire(TOOL_MANAGER_UPDATE, &mut Event::new(context))
    }
}
