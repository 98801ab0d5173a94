//! Ordering Tests
//!
//! Placement through the create and move commands with the level ordering
//! policy installed, and without it.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use canvex_core::model::MoveHints;
use canvex_core::ops::ElementAttrs;
use canvex_core::{EditorConfig, Element, ElementKind, OrderingMode, Point};
use common::{editor_with, ids, new_editor};

fn children(editor: &canvex_core::Editor, id: &str) -> Vec<String> {
    editor.store().get(id).unwrap().children.clone()
}

fn leveled_editor(mode: OrderingMode) -> canvex_core::Editor {
    let mut editor = editor_with(EditorConfig {
        ordering: mode,
        ..EditorConfig::default()
    });
    let store = editor.store_mut();
    store.insert(Element::new("root", ElementKind::Root));
    store.insert(Element::new("p", ElementKind::Shape).with_level(0));
    store.attach("p", "root", None).unwrap();
    for (id, level) in [("a", 1), ("b", 2), ("c", 3)] {
        store.insert(Element::new(id, ElementKind::Shape).with_level(level));
        store.attach(id, "p", None).unwrap();
    }
    editor
}

#[test]
fn test_create_inserts_by_level() {
    // GIVEN p with children at levels 1, 2, 3
    let mut editor = leveled_editor(OrderingMode::Level);

    // WHEN a level 1 shape is created in p
    let shape = Element::new("n", ElementKind::Shape).with_level(1);
    editor.create_shape(shape, Point::new(0.0, 0.0), "p").unwrap();

    // THEN it lands after the equal level and before the greater one
    assert_eq!(children(&editor, "p"), ids(&["a", "n", "b", "c"]));
}

#[test]
fn test_create_appends_without_greater_level() {
    let mut editor = leveled_editor(OrderingMode::Level);

    let shape = Element::new("n", ElementKind::Shape).with_level(7);
    editor.create_shape(shape, Point::new(0.0, 0.0), "p").unwrap();

    assert_eq!(children(&editor, "p"), ids(&["a", "b", "c", "n"]));
}

#[test]
fn test_always_top_level_create_goes_to_root() {
    // GIVEN a request to create a top-level element inside nested p
    let mut editor = leveled_editor(OrderingMode::Level);
    let shape = editor
        .factory()
        .create_shape(ElementAttrs::new().always_top_level().level(5));
    let id = shape.id.clone();

    // WHEN it is created
    let execution = editor.create_shape(shape, Point::new(0.0, 0.0), "p").unwrap();

    // THEN the effective parent is the root
    assert_eq!(execution.shape(), Some(id.as_str()));
    assert_eq!(editor.store().get(&id).unwrap().parent.as_deref(), Some("root"));
    assert!(!children(&editor, "p").contains(&id));
}

#[test]
fn test_repeated_in_place_moves_are_stable() {
    // GIVEN ordered children
    let mut editor = leveled_editor(OrderingMode::Level);

    // WHEN the middle child moves in place several times
    for _ in 0..3 {
        editor
            .move_shape("b", Point::new(1.0, 0.0), None, MoveHints::default())
            .unwrap();
    }

    // THEN its position never drifts
    assert_eq!(children(&editor, "p"), ids(&["a", "b", "c"]));
    assert_eq!(editor.store().get("b").unwrap().bounds.x, 3.0);
}

#[test]
fn test_move_into_parent_by_level() {
    let mut editor = leveled_editor(OrderingMode::Level);
    editor
        .store_mut()
        .insert(Element::new("x", ElementKind::Shape).with_level(2));
    editor.store_mut().attach("x", "root", None).unwrap();

    editor
        .move_shape("x", Point::new(0.0, 0.0), Some("p".to_string()), MoveHints::default())
        .unwrap();

    assert_eq!(children(&editor, "p"), ids(&["a", "b", "x", "c"]));
}

#[test]
fn test_without_ordering_requested_placement_is_kept() {
    // GIVEN ordering disabled
    let mut editor = leveled_editor(OrderingMode::None);

    // WHEN a low level shape is created and b moves in place
    let shape = Element::new("n", ElementKind::Shape).with_level(0);
    editor.create_shape(shape, Point::new(0.0, 0.0), "p").unwrap();
    editor
        .move_shape("b", Point::new(1.0, 0.0), None, MoveHints::default())
        .unwrap();

    // THEN creation appended and the move kept b's slot
    assert_eq!(children(&editor, "p"), ids(&["a", "b", "c", "n"]));
}

#[test]
fn test_create_label_attaches_next_to_target() {
    let mut editor = new_editor();
    editor
        .store_mut()
        .insert(Element::new("root", ElementKind::Root));
    let shape = editor.factory().create_shape(ElementAttrs::new());
    let shape_id = shape.id.clone();
    editor.create_shape(shape, Point::new(50.0, 50.0), "root").unwrap();

    let label = editor.factory().create_label(ElementAttrs::new());
    let execution = editor
        .create_label(&shape_id, label, Point::new(50.0, 80.0))
        .unwrap();

    let label_id = execution.shape().unwrap().to_string();
    assert_eq!(label_id, "label_13");
    assert_eq!(shape_id, "shape_12");
    let store = editor.store();
    assert_eq!(store.get(&label_id).unwrap().parent.as_deref(), Some("root"));
    assert_eq!(store.get(&shape_id).unwrap().label.as_deref(), Some(label_id.as_str()));
}
