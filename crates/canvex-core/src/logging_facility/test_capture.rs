//! In-memory log capture for tests
//!
//! One process-wide subscriber records every event. Tests run in parallel
//! threads and share it, so look records up by something unique to the
//! test: usually the transaction id of the [`Execution`] under test, or a
//! command name registered only by that test.
//!
//! [`Execution`]: crate::Execution

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use canvex_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMPONENT, FIELD_EVENT, FIELD_OP,
    FIELD_TRANSACTION_ID,
};

/// One recorded log event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// True for the `start`, `end` and `end_error` records of a command
    pub fn is_boundary(&self) -> bool {
        matches!(
            self.event.as_deref(),
            Some(EVENT_START) | Some(EVENT_END) | Some(EVENT_END_ERROR)
        )
    }
}

#[derive(Default)]
struct Fields(HashMap<String, String>);

impl Fields {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}

type Shared = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    events: Shared,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        let Fields(fields) = fields;

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            fields,
        };
        self.events.lock().map(|mut events| events.push(captured)).ok();
    }
}

/// Read access to the captured events
#[derive(Clone)]
pub struct TestCapture {
    events: Shared,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events whose field `name` equals `value`
    pub fn events_with_field(&self, name: &str, value: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.field(name) == Some(value))
            .collect()
    }

    /// Boundary records of one command transaction, in emission order
    pub fn boundaries(&self, transaction_id: &str) -> Vec<CapturedEvent> {
        self.events_with_field(FIELD_TRANSACTION_ID, transaction_id)
            .into_iter()
            .filter(CapturedEvent::is_boundary)
            .collect()
    }

    /// Assert that an `op` record with the given `event` was captured
    ///
    /// # Panics
    ///
    /// Panics if no such record exists
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event));
        assert!(
            found,
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Shared capture, installing the subscriber on first use
///
/// If another subscriber won the race the capture stays empty.
///
/// # Example
///
/// ```
/// use canvex_core::logging_facility::init_test_capture;
/// use canvex_core::{Editor, EditorConfig, Element, ElementKind, Point};
///
/// let capture = init_test_capture();
/// let mut editor = Editor::new(EditorConfig::default()).unwrap();
/// editor.store_mut().insert(Element::new("root", ElementKind::Root));
/// let shape = editor.factory().create_shape(Default::default());
/// let execution = editor.create_shape(shape, Point::new(50.0, 50.0), "root").unwrap();
///
/// let boundaries = capture.boundaries(&execution.transaction_id.to_string());
/// let events: Vec<_> = boundaries.iter().filter_map(|e| e.event.as_deref()).collect();
/// assert_eq!(events, ["start", "end"]);
/// assert_eq!(boundaries[0].op.as_deref(), Some("shape.create"));
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let events = Shared::default();
            let layer = CaptureLayer { events: events.clone() };
            let _ = tracing_subscriber::registry().with(layer).try_init();
            TestCapture { events }
        })
        .clone()
}
