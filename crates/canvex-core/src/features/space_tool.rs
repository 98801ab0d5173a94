//! Space tool
//!
//! Dragging across the canvas along an axis makes (or removes) space:
//! shapes entirely past the drag line move, shapes crossing it grow or
//! shrink. The edit itself is the two-phase `spaceTool` command.

use tracing::debug;

use crate::bus::{UiEvent, DEFAULT_PRIORITY};
use crate::editor::Editor;
use crate::errors::{CanvexError, Result};
use crate::model::{Axis, Bounds, Context, Delta, Direction, Element, ElementId, Point};
use crate::ops::Store;

use super::tool_manager::ToolEvents;

/// Tool name under which the space tool registers
pub const SPACE_TOOL_NAME: &str = "space";

/// Drag prefix of the selection phase
pub const SELECTION_PREFIX: &str = "spaceTool.selection";

/// Drag prefix of the space-making phase
pub const DRAG_PREFIX: &str = "spaceTool";

const AXIS_KEY: &str = "spaceTool.axis";
const LINE_KEY: &str = "spaceTool.line";

/// Shapes touched by a space operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjustments {
    pub moving_shapes: Vec<ElementId>,
    pub resizing_shapes: Vec<ElementId>,
}

/// New bounds after dragging the `direction` edge (or corner) by `delta`
pub fn resize_bounds(bounds: Bounds, direction: Direction, delta: Delta) -> Bounds {
    let Bounds {
        mut x,
        mut y,
        mut width,
        mut height,
    } = bounds;

    let (north, south, east, west) = match direction {
        Direction::N => (true, false, false, false),
        Direction::S => (false, true, false, false),
        Direction::E => (false, false, true, false),
        Direction::W => (false, false, false, true),
        Direction::Ne => (true, false, true, false),
        Direction::Nw => (true, false, false, true),
        Direction::Se => (false, true, true, false),
        Direction::Sw => (false, true, false, true),
    };

    if north {
        y += delta.y;
        height -= delta.y;
    }
    if south {
        height += delta.y;
    }
    if east {
        width += delta.x;
    }
    if west {
        x += delta.x;
        width -= delta.x;
    }

    Bounds::new(x, y, width, height)
}

/// Edge moved by a drag of `offset` along `axis`; none for a zero offset
pub fn direction_for(axis: Axis, offset: f64) -> Option<Direction> {
    match axis {
        Axis::X if offset > 0.0 => Some(Direction::E),
        Axis::X if offset < 0.0 => Some(Direction::W),
        Axis::Y if offset > 0.0 => Some(Direction::S),
        Axis::Y if offset < 0.0 => Some(Direction::N),
        _ => None,
    }
}

/// Partition `elements` around `line` for a drag of `offset` along `axis`
///
/// Roots, connections and labels are skipped: connections follow their
/// shapes and labels follow their targets.
pub fn calculate_adjustments(
    store: &Store,
    elements: &[ElementId],
    axis: Axis,
    offset: f64,
    line: f64,
) -> Adjustments {
    let mut adjustments = Adjustments::default();

    for element in elements.iter().filter_map(|id| store.get(id).ok()) {
        if !takes_part(element) {
            continue;
        }

        let start = element.bounds.start(axis);
        let end = start + element.bounds.extent(axis);

        if (offset > 0.0 && start > line) || (offset < 0.0 && end < line) {
            adjustments.moving_shapes.push(element.id.clone());
        } else if start < line && end > line {
            adjustments.resizing_shapes.push(element.id.clone());
        }
    }

    adjustments
}

fn takes_part(element: &Element) -> bool {
    element.parent.is_some() && !element.is_root() && !element.is_connection() && !element.is_label()
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "x",
        Axis::Y => "y",
    }
}

fn parse_axis(value: Option<&str>) -> Option<Axis> {
    match value {
        Some("x") => Some(Axis::X),
        Some("y") => Some(Axis::Y),
        _ => None,
    }
}

impl Editor {
    /// Start the space tool's selection phase
    ///
    /// `original` is the UI input that triggered the activation, such as a
    /// toolbar click.
    pub fn activate_space_selection(
        &mut self,
        reactivate: bool,
        original: Option<UiEvent>,
    ) -> Result<()> {
        self.init_drag(
            SELECTION_PREFIX,
            Context::new().with_reactivate(reactivate),
            original,
        )
    }

    /// Make space at `line` along `axis` by dragging `delta`
    ///
    /// Runs a complete `spaceTool` drag session; a running selection phase
    /// is ended first. Only the component of `delta` along `axis` is used.
    pub fn make_space(&mut self, line: f64, axis: Axis, delta: Delta) -> Result<()> {
        if self.drag_prefix() == Some(SELECTION_PREFIX) {
            self.end_drag(None)?;
        }

        let delta = match axis {
            Axis::X => Point::new(delta.x, 0.0),
            Axis::Y => Point::new(0.0, delta.y),
        };

        let mut context = Context::new();
        context.extras.set(AXIS_KEY, axis_name(axis).into());
        context.extras.set(LINE_KEY, line.into());

        self.init_drag(DRAG_PREFIX, context, None)?;
        self.start_drag()?;
        self.update_drag(delta)?;
        self.end_drag(None)?;
        Ok(())
    }
}

/// Register the space tool with the tool manager and its drag listener
///
/// # Errors
///
/// Tool registration errors.
pub fn install_space_tool(editor: &mut Editor) -> Result<()> {
    editor.register_tool(
        SPACE_TOOL_NAME,
        Some(
            ToolEvents::new()
                .with("tool", SELECTION_PREFIX)
                .with("dragging", DRAG_PREFIX),
        ),
    )?;

    let end = format!("{DRAG_PREFIX}.end");
    editor
        .bus_mut()
        .on(&[end.as_str()], DEFAULT_PRIORITY, |editor: &mut Editor, event| {
            let context = &event.context;
            let axis = parse_axis(context.extras.get_str(AXIS_KEY)).ok_or_else(|| {
                CanvexError::MissingContextField {
                    command: DRAG_PREFIX.to_string(),
                    field: AXIS_KEY.to_string(),
                }
            })?;
            let line = context
                .extras
                .get(LINE_KEY)
                .and_then(|v| v.as_f64())
                .ok_or_else(|| CanvexError::MissingContextField {
                    command: DRAG_PREFIX.to_string(),
                    field: LINE_KEY.to_string(),
                })?;
            let delta = context.delta_or_zero();
            let offset = match axis {
                Axis::X => delta.x,
                Axis::Y => delta.y,
            };

            let Some(direction) = direction_for(axis, offset) else {
                debug!("zero offset, no space to make");
                return Ok(());
            };

            let ids: Vec<ElementId> = editor
                .store()
                .list_elements()
                .into_iter()
                .map(|e| e.id.clone())
                .collect();
            let adjustments = calculate_adjustments(editor.store(), &ids, axis, offset, line);
            if adjustments.moving_shapes.is_empty() && adjustments.resizing_shapes.is_empty() {
                return Ok(());
            }

            editor.create_space(
                adjustments.moving_shapes,
                adjustments.resizing_shapes,
                delta,
                direction,
            )?;
            Ok(())
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;

    #[test]
    fn test_resize_edges() {
        let b = Bounds::new(100.0, 100.0, 50.0, 50.0);
        let d = Point::new(10.0, 20.0);

        assert_eq!(resize_bounds(b, Direction::N, d), Bounds::new(100.0, 120.0, 50.0, 30.0));
        assert_eq!(resize_bounds(b, Direction::S, d), Bounds::new(100.0, 100.0, 50.0, 70.0));
        assert_eq!(resize_bounds(b, Direction::E, d), Bounds::new(100.0, 100.0, 60.0, 50.0));
        assert_eq!(resize_bounds(b, Direction::W, d), Bounds::new(110.0, 100.0, 40.0, 50.0));
    }

    #[test]
    fn test_resize_corners_combine_edges() {
        let b = Bounds::new(0.0, 0.0, 50.0, 50.0);
        let d = Point::new(10.0, 10.0);

        assert_eq!(resize_bounds(b, Direction::Se, d), Bounds::new(0.0, 0.0, 60.0, 60.0));
        assert_eq!(resize_bounds(b, Direction::Nw, d), Bounds::new(10.0, 10.0, 40.0, 40.0));
        assert_eq!(resize_bounds(b, Direction::Ne, d), Bounds::new(0.0, 10.0, 60.0, 40.0));
        assert_eq!(resize_bounds(b, Direction::Sw, d), Bounds::new(10.0, 0.0, 40.0, 60.0));
    }

    #[test]
    fn test_direction_for() {
        assert_eq!(direction_for(Axis::X, 5.0), Some(Direction::E));
        assert_eq!(direction_for(Axis::X, -5.0), Some(Direction::W));
        assert_eq!(direction_for(Axis::Y, 5.0), Some(Direction::S));
        assert_eq!(direction_for(Axis::Y, -5.0), Some(Direction::N));
        assert_eq!(direction_for(Axis::Y, 0.0), None);
    }

    #[test]
    fn test_calculate_adjustments() {
        let mut store = Store::new();
        store.insert(Element::new("root", ElementKind::Root));
        let shapes = [
            ("left", Bounds::new(0.0, 0.0, 50.0, 50.0)),
            ("crossing", Bounds::new(80.0, 0.0, 50.0, 50.0)),
            ("right", Bounds::new(200.0, 0.0, 50.0, 50.0)),
        ];
        for (id, bounds) in shapes {
            store.insert(Element::new(id, ElementKind::Shape).with_bounds(bounds));
            store.attach(id, "root", None).unwrap();
        }
        store.insert(Element::new("label", ElementKind::Label).with_bounds(Bounds::new(300.0, 0.0, 10.0, 10.0)));
        store.attach("label", "root", None).unwrap();

        let ids: Vec<String> = ["root", "left", "crossing", "right", "label"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let grow = calculate_adjustments(&store, &ids, Axis::X, 30.0, 100.0);
        assert_eq!(grow.moving_shapes, vec!["right"]);
        assert_eq!(grow.resizing_shapes, vec!["crossing"]);

        let shrink = calculate_adjustments(&store, &ids, Axis::X, -30.0, 100.0);
        assert_eq!(shrink.moving_shapes, vec!["left"]);
        assert_eq!(shrink.resizing_shapes, vec!["crossing"]);
    }
}
