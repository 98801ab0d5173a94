use std::cell::RefCell;
use std::rc::Rc;

use canvex_core::{Bounds, Editor, EditorConfig, Element, ElementKind, Point};

/// Editor with the default configuration
#[allow(dead_code)]
pub fn new_editor() -> Editor {
    Editor::new(EditorConfig::default()).unwrap()
}

/// Editor with a custom configuration
#[allow(dead_code)]
pub fn editor_with(config: EditorConfig) -> Editor {
    Editor::new(config).unwrap()
}

/// Owned id list from string literals
#[allow(dead_code)]
pub fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

/// Seed a standard diagram, bypassing commands
///
/// ```text
/// root
/// ├── s1 (label l1, sibling under root)
/// ├── l1
/// ├── s2
/// └── p
///     └── c1
/// ```
#[allow(dead_code)]
pub fn seed_diagram(editor: &mut Editor) {
    let store = editor.store_mut();
    store.insert(Element::new("root", ElementKind::Root));

    let shapes = [
        ("s1", Bounds::new(100.0, 100.0, 100.0, 80.0)),
        ("s2", Bounds::new(300.0, 100.0, 100.0, 80.0)),
        ("p", Bounds::new(500.0, 0.0, 300.0, 300.0)),
    ];
    for (id, bounds) in shapes {
        store.insert(Element::new(id, ElementKind::Shape).with_bounds(bounds));
        store.attach(id, "root", None).unwrap();
    }

    store.insert(Element::new("l1", ElementKind::Label).with_bounds(Bounds::new(110.0, 190.0, 80.0, 20.0)));
    store.attach("l1", "root", Some(1)).unwrap();
    store.link_label("s1", "l1").unwrap();

    store.insert(Element::new("c1", ElementKind::Shape).with_bounds(Bounds::new(550.0, 50.0, 50.0, 50.0)));
    store.attach("c1", "p", None).unwrap();
}

/// Editor seeded with [`seed_diagram`]
#[allow(dead_code)]
pub fn seeded_editor() -> Editor {
    let mut editor = new_editor();
    seed_diagram(&mut editor);
    editor
}

/// Top-left corner of an element
#[allow(dead_code)]
pub fn position(editor: &Editor, id: &str) -> Point {
    editor.store().get(id).unwrap().bounds.position()
}

/// Shared log of strings for recording listener calls
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct Recorder(Rc<RefCell<Vec<String>>>);

#[allow(dead_code)]
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }
}
