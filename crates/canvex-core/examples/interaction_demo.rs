//! Interaction kernel walkthrough
//!
//! Builds a small diagram, then drives it the way a canvas would:
//! - Level-ordered creation
//! - A move gesture carrying a label along
//! - The space tool pushing shapes apart
//! - Graph validation after every step

use canvex_core::features::move_gesture::MOVE_PREFIX;
use canvex_core::model::Axis;
use canvex_core::ops::ElementAttrs;
use canvex_core::rules::validate_graph;
use canvex_core::{Bounds, Editor, EditorConfig, Element, ElementKind, Point, UiEvent};

fn describe(editor: &Editor) {
    for element in editor.store().list_elements() {
        println!(
            "  {:<12} parent={:<10} at ({:>5.1}, {:>5.1}) {}x{}",
            element.id,
            element.parent.as_deref().unwrap_or("-"),
            element.bounds.x,
            element.bounds.y,
            element.bounds.width,
            element.bounds.height,
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = Editor::new(EditorConfig {
        log_profile: Some("development".to_string()),
        ..EditorConfig::default()
    })?;
    editor
        .store_mut()
        .insert(Element::new("root", ElementKind::Root));

    println!("== Creating shapes\n");

    let attrs = |level| {
        ElementAttrs::new()
            .bounds(Bounds::new(0.0, 0.0, 100.0, 80.0))
            .level(level)
    };
    let task = editor.factory().create_shape(attrs(5));
    let task = editor
        .create_shape(task, Point::new(150.0, 140.0), "root")?
        .shape()
        .map(str::to_string)
        .ok_or("no shape created")?;

    let lane = editor.factory().create_shape(attrs(1));
    let lane = editor
        .create_shape(lane, Point::new(400.0, 140.0), "root")?
        .shape()
        .map(str::to_string)
        .ok_or("no shape created")?;

    let label = editor
        .factory()
        .create_label(ElementAttrs::new().bounds(Bounds::new(0.0, 0.0, 80.0, 20.0)));
    editor.create_label(&task, label, Point::new(150.0, 200.0))?;

    // the lane has the lower level and is drawn first
    println!("root children: {:?}", editor.store().get("root")?.children);
    describe(&editor);
    validate_graph(editor.store())?;

    println!("\n== Dragging {task} by (40, 20)\n");

    editor.start_move(vec![task.clone()], None)?;
    if let Some(context) = editor.drag_context() {
        println!("visually dragged under {MOVE_PREFIX}: {:?}", context.drag_set);
    }
    editor.update_move(Point::new(40.0, 20.0))?;
    editor.end_move(None, None)?;
    describe(&editor);
    validate_graph(editor.store())?;

    println!("\n== Making 60px of space at x=300\n");

    editor.activate_space_selection(false, Some(UiEvent::in_group("tools")))?;
    println!("active tool: {:?}", editor.tool_manager().active());
    editor.make_space(300.0, Axis::X, Point::new(60.0, 0.0))?;
    println!("active tool: {:?}", editor.tool_manager().active());
    describe(&editor);
    validate_graph(editor.store())?;

    Ok(())
}
