use crate::command::handler::{require, CommandHandler};
use crate::errors::{CanvexError, Result};
use crate::model::{Bounds, Context, ElementId};
use crate::ops::Store;

pub const SHAPE_CREATE: &str = "shape.create";
pub const LABEL_CREATE: &str = "label.create";

/// `shape.create`: add `context.element` under `context.parent`
///
/// `context.position` is the center of the new shape. The parent index
/// comes from `context.parent_index` (append when unset).
#[derive(Debug, Default)]
pub struct CreateShapeHandler;

impl CommandHandler for CreateShapeHandler {
    fn execute(&self, store: &mut Store, context: &mut Context) -> Result<Vec<ElementId>> {
        let id = insert_element(SHAPE_CREATE, store, context)?;
        let parent = require(SHAPE_CREATE, "parent", &context.parent)?;
        Ok(vec![id, parent])
    }
}

/// `label.create`: like `shape.create`, then link the label to
/// `context.target`
#[derive(Debug, Default)]
pub struct CreateLabelHandler;

impl CommandHandler for CreateLabelHandler {
    fn can_execute(&self, store: &Store, context: &Context) -> bool {
        context
            .target
            .as_deref()
            .is_some_and(|target| store.contains(target))
    }

    fn execute(&self, store: &mut Store, context: &mut Context) -> Result<Vec<ElementId>> {
        let target = require(LABEL_CREATE, "target", &context.target)?;
        let id = insert_element(LABEL_CREATE, store, context)?;
        store.link_label(&target, &id)?;
        Ok(vec![id, target])
    }
}

fn insert_element(command: &str, store: &mut Store, context: &mut Context) -> Result<ElementId> {
    let parent = require(command, "parent", &context.parent)?;
    let mut element = context
        .element
        .take()
        .ok_or_else(|| CanvexError::MissingContextField {
            command: command.to_string(),
            field: "element".to_string(),
        })?;

    if store.contains(&element.id) {
        return Err(CanvexError::HandlerFailed {
            command: command.to_string(),
            reason: format!("element {} already exists", element.id),
        });
    }
    if !store.contains(&parent) {
        return Err(CanvexError::ParentNotFound { element_id: parent });
    }

    if let Some(position) = context.position {
        let Bounds { width, height, .. } = element.bounds;
        element.bounds = Bounds::new(
            position.x - width / 2.0,
            position.y - height / 2.0,
            width,
            height,
        );
    }

    let id = element.id.clone();
    store.insert(*element);
    store.attach(&id, &parent, context.parent_index)?;
    context.shape = Some(id.clone());
    Ok(id)
}
