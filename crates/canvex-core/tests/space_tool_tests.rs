//! Space Tool Tests
//!
//! ## Scenarios Covered
//!
//! 1. Shapes past the line move, shapes crossing it resize
//! 2. Resizing happens before moving, in one transaction
//! 3. Labels follow moved shapes
//! 4. Zero offsets do nothing
//! 5. Tool activation around a space drag

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use canvex_core::command::ELEMENTS_CHANGED;
use canvex_core::model::Axis;
use canvex_core::rules::validate_graph;
use canvex_core::{Bounds, Point, UiEvent, DEFAULT_PRIORITY};
use common::{position, seeded_editor, Recorder};

fn bounds(editor: &canvex_core::Editor, id: &str) -> Bounds {
    editor.store().get(id).unwrap().bounds
}

#[test]
fn test_make_space_moves_shapes_past_line() {
    // GIVEN s1 left of the line, s2 and the container p right of it
    let mut editor = seeded_editor();

    // WHEN space is made at x=250
    editor.make_space(250.0, Axis::X, Point::new(50.0, 0.0)).unwrap();

    // THEN everything right of the line moved, children once
    assert_eq!(position(&editor, "s1"), Point::new(100.0, 100.0));
    assert_eq!(position(&editor, "s2"), Point::new(350.0, 100.0));
    assert_eq!(position(&editor, "p"), Point::new(550.0, 0.0));
    assert_eq!(position(&editor, "c1"), Point::new(600.0, 50.0));
    validate_graph(editor.store()).unwrap();
}

#[test]
fn test_make_space_ignores_off_axis_delta() {
    let mut editor = seeded_editor();

    editor.make_space(250.0, Axis::X, Point::new(50.0, 99.0)).unwrap();

    assert_eq!(position(&editor, "s2"), Point::new(350.0, 100.0));
}

#[test]
fn test_make_space_resizes_crossing_shapes() {
    // GIVEN a line crossing s1
    let mut editor = seeded_editor();

    // WHEN space is made at x=150
    editor.make_space(150.0, Axis::X, Point::new(50.0, 0.0)).unwrap();

    // THEN s1 grew eastwards and the label stayed put
    assert_eq!(bounds(&editor, "s1"), Bounds::new(100.0, 100.0, 150.0, 80.0));
    assert_eq!(position(&editor, "l1"), Point::new(110.0, 190.0));
    assert_eq!(position(&editor, "s2"), Point::new(350.0, 100.0));
}

#[test]
fn test_removing_space_moves_label_with_target() {
    // GIVEN s1 and its label left of the line
    let mut editor = seeded_editor();

    // WHEN space is removed at x=250
    editor.make_space(250.0, Axis::X, Point::new(-50.0, 0.0)).unwrap();

    // THEN s1 moved left and its label followed
    assert_eq!(position(&editor, "s1"), Point::new(50.0, 100.0));
    assert_eq!(position(&editor, "l1"), Point::new(60.0, 190.0));
    assert_eq!(position(&editor, "s2"), Point::new(300.0, 100.0));
}

#[test]
fn test_resize_runs_before_move() {
    // GIVEN a recorder on the committed resize and move commands
    let mut editor = seeded_editor();
    let recorder = Recorder::new();
    let r = recorder.clone();
    editor.bus_mut().on(
        &[
            "commandStack.shape.resize.postExecuted",
            "commandStack.elements.move.postExecuted",
        ],
        DEFAULT_PRIORITY,
        move |_, event| {
            r.push(event.name.clone());
            Ok(())
        },
    );

    // WHEN space is made across s1
    editor.make_space(150.0, Axis::X, Point::new(50.0, 0.0)).unwrap();

    // THEN the resize committed first
    assert_eq!(
        recorder.entries(),
        vec![
            "commandStack.shape.resize.postExecuted",
            "commandStack.elements.move.postExecuted",
        ]
    );
}

#[test]
fn test_make_space_notifies_changes_once() {
    let mut editor = seeded_editor();
    let recorder = Recorder::new();
    let r = recorder.clone();
    editor
        .bus_mut()
        .on(&[ELEMENTS_CHANGED], DEFAULT_PRIORITY, move |_, event| {
            let mut elements = event.elements.clone();
            elements.sort();
            r.push(elements.join(","));
            Ok(())
        });

    editor.make_space(150.0, Axis::X, Point::new(50.0, 0.0)).unwrap();

    let entries = recorder.entries();
    assert_eq!(entries.len(), 1);
    for id in ["s1", "s2", "p", "c1"] {
        assert!(entries[0].split(',').any(|e| e == id), "{id} missing");
    }
}

#[test]
fn test_zero_offset_is_noop() {
    let mut editor = seeded_editor();
    let before = editor.store().clone();
    let recorder = Recorder::new();
    let r = recorder.clone();
    editor
        .bus_mut()
        .on(&[ELEMENTS_CHANGED], DEFAULT_PRIORITY, move |_, _| {
            r.push("changed");
            Ok(())
        });

    editor.make_space(250.0, Axis::X, Point::new(0.0, 40.0)).unwrap();

    assert_eq!(editor.store(), &before);
    assert_eq!(recorder.count("changed"), 0);
    assert!(!editor.is_dragging());
}

#[test]
fn test_vertical_space() {
    let mut editor = seeded_editor();

    editor.make_space(150.0, Axis::Y, Point::new(0.0, 20.0)).unwrap();

    // s1 and s2 cross y=150, the label lies below it
    assert_eq!(bounds(&editor, "s1"), Bounds::new(100.0, 100.0, 100.0, 100.0));
    assert_eq!(bounds(&editor, "s2"), Bounds::new(300.0, 100.0, 100.0, 100.0));
    assert_eq!(position(&editor, "l1"), Point::new(110.0, 190.0));
    assert_eq!(bounds(&editor, "p"), Bounds::new(500.0, 0.0, 300.0, 320.0));
}

#[test]
fn test_tool_deactivates_after_space_drag() {
    // GIVEN the space tool activated from the toolbar
    let mut editor = seeded_editor();
    editor
        .activate_space_selection(false, Some(UiEvent::in_group("tools")))
        .unwrap();
    assert!(editor.tool_manager().is_active("space"));

    // WHEN a space drag completes
    editor.make_space(250.0, Axis::X, Point::new(50.0, 0.0)).unwrap();

    // THEN the tool is released and no session remains
    assert_eq!(editor.tool_manager().active(), None);
    assert!(!editor.is_dragging());
    assert_eq!(position(&editor, "s2"), Point::new(350.0, 100.0));
}
