//! Labels follow their targets
//!
//! * while a move gesture starts, labels whose target is moved as well are
//!   taken out of the move subjects so they are not displaced twice
//! * the remaining labels join the visual drag set
//! * after a committed `elements.move`, every moved element whose label
//!   stayed behind gets the label moved by the same delta

use std::collections::HashSet;

use tracing::debug;

use crate::bus::{EventBus, HIGH_PRIORITY, LOW_PRIORITY};
use crate::command::handlers::ELEMENTS_MOVE;
use crate::command::CommandInterceptor;
use crate::editor::Editor;
use crate::model::{ElementId, MoveHints};
use crate::ops::Store;

use super::move_gesture::MOVE_PREFIX;

/// Drop elements whose label target is part of `elements`
pub fn remove_labels(store: &Store, elements: &[ElementId]) -> Vec<ElementId> {
    let present: HashSet<&str> = elements.iter().map(String::as_str).collect();

    elements
        .iter()
        .filter(|id| {
            let target = store.get(id).ok().and_then(|e| e.label_target.as_deref());
            !target.is_some_and(|t| present.contains(t))
        })
        .cloned()
        .collect()
}

/// Register the label support hooks
pub fn install_label_support(bus: &mut EventBus) {
    let start = format!("{MOVE_PREFIX}.start");

    bus.on(&[start.as_str()], HIGH_PRIORITY, |editor: &mut Editor, event| {
        let context = &mut event.context;
        context.shapes = remove_labels(editor.store(), &context.shapes);
        context.validated_shapes = remove_labels(editor.store(), &context.validated_shapes);
        Ok(())
    });

    bus.on(&[start.as_str()], LOW_PRIORITY, |editor: &mut Editor, event| {
        let context = &mut event.context;
        let mut labels = Vec::new();

        for id in &context.shapes {
            let Ok(element) = editor.store().get(id) else {
                continue;
            };

            if let Some(label) = element.label.as_deref().and_then(|l| editor.store().get(l).ok()) {
                if !label.hidden && !context.shapes.contains(&label.id) {
                    labels.push(label.id.clone());
                }
            }

            if element.label_target.is_some() {
                labels.push(element.id.clone());
            }
        }

        for label in labels {
            context.make_draggable(&label);
        }
        Ok(())
    });

    bus.post_executed(&[ELEMENTS_MOVE], |editor, event| {
        let context = &event.context;
        let Some(closure) = context.closure.as_ref() else {
            return Ok(());
        };
        let delta = context.delta_or_zero();

        let mut pending = Vec::new();
        for id in closure.enclosed_elements() {
            let Ok(element) = editor.store().get(id) else {
                debug!(element_id = %id, "label target removed, skipping label move");
                continue;
            };
            let Some(label) = element.label.as_deref() else {
                continue;
            };
            if closure.contains(label) {
                continue;
            }
            if !editor.store().contains(label) {
                debug!(element_id = %id, label_id = %label, "label missing, skipping");
                continue;
            }
            pending.push((label.to_string(), element.parent.clone()));
        }

        for (label, parent) in pending {
            debug!(label_id = %label, "moving label with its target");
            editor.move_shape(&label, delta, parent, MoveHints::default())?;
        }
        Ok(())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, ElementKind};

    #[test]
    fn test_remove_labels_drops_labels_of_present_targets() {
        let mut store = Store::new();
        store.insert(Element::new("s1", ElementKind::Shape));
        store.insert(Element::new("s2", ElementKind::Shape));
        store.insert(Element::new("l1", ElementKind::Label));
        store.insert(Element::new("l2", ElementKind::Label));
        store.link_label("s1", "l1").unwrap();
        store.link_label("s2", "l2").unwrap();

        let ids: Vec<String> = ["s1", "l1", "l2"].iter().map(|s| s.to_string()).collect();

        assert_eq!(remove_labels(&store, &ids), vec!["s1", "l2"]);
    }
}
