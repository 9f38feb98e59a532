use perch_mocks::{MockDocument, NodeId};
use perch_ui::{DropdownContent, DropdownManager, DropdownOptions, OpenOutcome, Rect, Viewport};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// 1000x750 document with two triggers near the top of the page
#[allow(dead_code)]
pub fn setup() -> (DropdownManager<MockDocument>, NodeId, NodeId) {
    tracing_init();
    let mut doc = MockDocument::new(Viewport {
        width: 1000.0,
        height: 750.0,
    });
    let a = doc.create_element("button", None, Rect::from_origin(100.0, 100.0, 100.0, 30.0));
    let b = doc.create_element("button", None, Rect::from_origin(400.0, 100.0, 100.0, 30.0));
    (DropdownManager::new(doc), a, b)
}

#[allow(dead_code)]
pub fn open(
    manager: &mut DropdownManager<MockDocument>,
    trigger: NodeId,
    options: DropdownOptions,
) -> OpenOutcome {
    manager.request_open(trigger, DropdownContent::from("<ul></ul>"), options, None)
}

/// Slot filled iff exactly one overlay is mounted, and the trigger is the
/// only active element
#[allow(dead_code)]
pub fn assert_consistent(manager: &DropdownManager<MockDocument>, triggers: &[NodeId]) {
    let doc = manager.host();
    let overlays = doc.attached_overlays();
    let active: Vec<_> = triggers
        .iter()
        .copied()
        .filter(|&t| doc.has_class(t, "active"))
        .collect();

    match manager.current() {
        Ok(session) => {
            assert_eq!(overlays, vec![*session.element()]);
            assert_eq!(active, vec![*session.trigger()]);
            assert_eq!(doc.listeners(), session.listeners());
        }
        Err(_) => {
            assert!(overlays.is_empty(), "overlays left mounted: {overlays:?}");
            assert!(active.is_empty(), "triggers left active: {active:?}");
            assert!(doc.listeners().is_empty());
        }
    }
}
