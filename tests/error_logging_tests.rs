//! Integration tests for the debug events emitted alongside `ListError`.

use idealist::{ImmutableList, IndexedFold, ListError};
use rstest::rstest;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

// =============================================================================
// Recording Layer
// =============================================================================

#[derive(Clone, Default)]
struct RecordedEvents(Arc<Mutex<Vec<String>>>);

impl RecordedEvents {
    fn snapshot(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct FieldVisitor(Vec<String>);

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push(format!("{}={:?}", field.name(), value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push(format!("{}={}", field.name(), value));
    }
}

impl<S: Subscriber> Layer<S> for RecordedEvents {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push(visitor.0.join(" "));
    }
}

fn record<F: FnOnce()>(action: F) -> Vec<String> {
    let recorder = RecordedEvents::default();
    let subscriber = Registry::default()
        .with(EnvFilter::new("idealist=debug"))
        .with(recorder.clone());
    tracing::subscriber::with_default(subscriber, action);
    recorder.snapshot()
}

// =============================================================================
// Events per Error Kind
// =============================================================================

#[rstest]
fn test_index_out_of_bounds_is_logged() {
    let events = record(|| {
        let list = ImmutableList::of([1, 2]);
        assert!(list.get(5).is_err());
    });

    assert_eq!(events.len(), 1);
    assert!(events[0].contains("index=5"));
    assert!(events[0].contains("length=2"));
}

#[rstest]
fn test_not_single_is_logged() {
    let events = record(|| {
        assert_eq!(
            ImmutableList::of(['a', 'b', 'c']).single(),
            Err(ListError::NotSingle { length: 3 })
        );
    });

    assert_eq!(events.len(), 1);
    assert!(events[0].contains("length=3"));
}

#[rstest]
fn test_empty_list_names_the_operation() {
    let events = record(|| {
        let empty: ImmutableList<i32> = ImmutableList::new();
        assert!(empty.max_by(|element| *element).is_err());
        assert!(empty.join(",").is_err());
    });

    assert_eq!(events.len(), 2);
    assert!(events[0].contains("operation=max_by"));
    assert!(events[1].contains("operation=join_with"));
}

#[rstest]
fn test_only_contract_violations_are_logged() {
    let events = record(|| {
        let list = ImmutableList::of([3, 1, 2]);
        let _ = list.sorted().first();
        let _ = list.take(10).single();
        let _ = list.reduce_first(|accumulator, element| accumulator + element);
    });

    // `single` on three elements is the only contract violation here
    assert_eq!(events.len(), 1);
}
