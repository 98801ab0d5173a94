use crate::model::{Bounds, Element, ElementKind};

/// First sequence number handed out by a fresh factory
pub const DEFAULT_FIRST_UID: u64 = 12;

/// Attributes for a new element
#[derive(Debug, Clone, Default)]
pub struct ElementAttrs {
    pub id: Option<String>,
    pub bounds: Bounds,
    pub level: Option<i64>,
    pub always_top_level: bool,
    pub hidden: bool,
}

impl ElementAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn always_top_level(mut self) -> Self {
        self.always_top_level = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Factory for detached elements with generated ids
///
/// Generated ids look like `shape_12`: the kind prefix plus a counter
/// shared by all kinds. Supplied ids are used verbatim and do not advance
/// the counter.
#[derive(Debug, Clone)]
pub struct ElementFactory {
    uid: u64,
}

impl Default for ElementFactory {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_UID)
    }
}

impl ElementFactory {
    pub fn new(first_uid: u64) -> Self {
        Self { uid: first_uid }
    }

    pub fn create_root(&mut self, attrs: ElementAttrs) -> Element {
        self.create(ElementKind::Root, attrs)
    }

    pub fn create_shape(&mut self, attrs: ElementAttrs) -> Element {
        self.create(ElementKind::Shape, attrs)
    }

    pub fn create_connection(&mut self, attrs: ElementAttrs) -> Element {
        self.create(ElementKind::Connection, attrs)
    }

    pub fn create_label(&mut self, attrs: ElementAttrs) -> Element {
        self.create(ElementKind::Label, attrs)
    }

    /// Create an element of `kind` with the given attributes
    pub fn create(&mut self, kind: ElementKind, attrs: ElementAttrs) -> Element {
        let id = match attrs.id {
            Some(id) => id,
            None => {
                let id = format!("{}_{}", kind.as_str(), self.uid);
                self.uid += 1;
                id
            }
        };

        let mut element = Element::new(id, kind)
            .with_bounds(attrs.bounds)
            .with_always_top_level(attrs.always_top_level)
            .with_hidden(attrs.hidden);
        element.level = attrs.level;
        element
    }
}
