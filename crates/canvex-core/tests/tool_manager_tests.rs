//! Tool Manager Tests
//!
//! ## Scenarios Covered
//!
//! 1. Registration errors
//! 2. Activation, toggle-off and explicit reactivation
//! 3. Deactivation on ended/canceled, deferred for toolbar interactions
//! 4. Exclusive activation across tools
//! 5. Change notifications

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::rc::Rc;

use canvex_core::features::tool_manager::TOOL_MANAGER_UPDATE;
use canvex_core::features::{InteractionProbe, ToolEvents};
use canvex_core::{CanvexError, Context, Editor, EditorConfig, UiEvent, DEFAULT_PRIORITY};
use common::{new_editor, Recorder};

fn toolbar() -> Option<UiEvent> {
    Some(UiEvent::in_group("tools"))
}

fn editor_with_tools(names: &[&str]) -> Editor {
    let mut editor = new_editor();
    for name in names {
        editor
            .register_tool(name, Some(ToolEvents::new().with("tool", *name)))
            .unwrap();
    }
    editor
}

#[test]
fn test_register_without_events_fails() {
    let mut editor = new_editor();

    let result = editor.register_tool("lasso", None);

    assert_eq!(
        result.unwrap_err(),
        CanvexError::ToolEventsMissing {
            tool: "lasso".to_string()
        }
    );
    assert_eq!(editor.tool_manager().len(), 1);
}

#[test]
fn test_register_without_tool_key_fails() {
    let mut editor = new_editor();

    let result = editor.register_tool("lasso", Some(ToolEvents::new().with("dragging", "lasso")));

    assert!(matches!(result, Err(CanvexError::ToolEventsMissing { .. })));
}

#[test]
fn test_register_twice_fails() {
    let mut editor = new_editor();

    let result = editor.register_tool("space", Some(ToolEvents::new().with("tool", "other")));

    assert!(matches!(
        result,
        Err(CanvexError::ToolAlreadyRegistered { .. })
    ));
}

#[test]
fn test_init_activates_tool() {
    let mut editor = new_editor();

    editor.activate_space_selection(false, toolbar()).unwrap();

    assert!(editor.tool_manager().is_active("space"));
    assert_eq!(editor.tool_manager().active(), Some("space"));
    assert!(editor.is_dragging());
}

#[test]
fn test_second_init_toggles_off() {
    // GIVEN the space tool activated from the toolbar
    let mut editor = new_editor();
    editor.activate_space_selection(false, toolbar()).unwrap();

    // WHEN the toolbar entry is clicked again
    editor.activate_space_selection(false, toolbar()).unwrap();

    // THEN the tool is off and its gesture canceled
    assert_eq!(editor.tool_manager().active(), None);
    assert!(!editor.is_dragging());
}

#[test]
fn test_reactivate_keeps_tool_active() {
    let mut editor = new_editor();
    editor.activate_space_selection(false, toolbar()).unwrap();

    editor.activate_space_selection(true, toolbar()).unwrap();

    assert!(editor.tool_manager().is_active("space"));
    assert!(editor.is_dragging());
}

#[test]
fn test_ended_deactivates() {
    let mut editor = new_editor();
    editor.activate_space_selection(false, None).unwrap();

    editor.end_drag(None).unwrap();

    assert_eq!(editor.tool_manager().active(), None);
}

#[test]
fn test_canceled_deactivates() {
    let mut editor = new_editor();
    editor.activate_space_selection(false, None).unwrap();

    editor.cancel_drag().unwrap();

    assert_eq!(editor.tool_manager().active(), None);
}

#[test]
fn test_toolbar_interaction_defers_deactivation() {
    // GIVEN an active tool
    let mut editor = new_editor();
    editor.activate_space_selection(false, None).unwrap();

    // WHEN its gesture ends on the toolbar
    editor.end_drag(toolbar()).unwrap();

    // THEN the tool stays active
    assert!(editor.tool_manager().is_active("space"));
}

#[test]
fn test_activation_is_exclusive() {
    // GIVEN tools A and B
    let mut editor = editor_with_tools(&["A", "B"]);

    // WHEN A is initialized, then B
    editor.init_drag("A", Context::new(), toolbar()).unwrap();
    assert_eq!(editor.tool_manager().active(), Some("A"));
    editor.init_drag("B", Context::new(), toolbar()).unwrap();

    // THEN only B is active
    assert_eq!(editor.tool_manager().active(), Some("B"));
    assert!(!editor.tool_manager().is_active("A"));
}

#[test]
fn test_switch_without_toolbar_still_ends_on_new_tool() {
    let mut editor = editor_with_tools(&["A", "B"]);

    editor.init_drag("A", Context::new(), None).unwrap();
    editor.init_drag("B", Context::new(), None).unwrap();

    assert_eq!(editor.tool_manager().active(), Some("B"));
}

#[test]
fn test_update_notified_only_on_change() {
    // GIVEN a listener on tool-manager.update
    let mut editor = new_editor();
    let recorder = Recorder::new();
    let r = recorder.clone();
    editor
        .bus_mut()
        .on(&[TOOL_MANAGER_UPDATE], DEFAULT_PRIORITY, move |_, event| {
            r.push(event.context.extras.get("tool").unwrap().to_string());
            Ok(())
        });

    // WHEN the same tool is set twice and then cleared twice
    editor.set_active_tool(Some("space")).unwrap();
    editor.set_active_tool(Some("space")).unwrap();
    editor.set_active_tool(None).unwrap();
    editor.set_active_tool(None).unwrap();

    // THEN exactly the two transitions were notified
    assert_eq!(recorder.entries(), vec!["\"space\"", "null"]);
}

struct NeverToolbar;

impl InteractionProbe for NeverToolbar {
    fn is_toolbar_interaction(&self, _event: &UiEvent) -> bool {
        false
    }
}

#[test]
fn test_custom_probe_is_consulted() {
    // GIVEN a probe that never recognizes the toolbar
    let mut editor = Editor::with_probe(EditorConfig::default(), Rc::new(NeverToolbar)).unwrap();
    editor.activate_space_selection(false, None).unwrap();

    // WHEN the gesture ends on what the default probe would call the toolbar
    editor.end_drag(toolbar()).unwrap();

    // THEN the tool is deactivated
    assert_eq!(editor.tool_manager().active(), None);
}

#[test]
fn test_configured_toolbar_group() {
    let mut editor = Editor::new(EditorConfig {
        toolbar_group: "palette".to_string(),
        ..EditorConfig::default()
    })
    .unwrap();
    editor.activate_space_selection(false, None).unwrap();

    editor.end_drag(Some(UiEvent::in_group("palette"))).unwrap();

    assert!(editor.tool_manager().is_active("space"));
}
