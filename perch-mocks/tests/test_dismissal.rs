mod support;

use perch_mocks::{dispatch, MockDocument, NodeId};
use perch_ui::{DropdownEvent, DropdownEventKind, DropdownManager, DropdownOptions, Rect};
use support::{assert_consistent, open, setup};

/// Open a dropdown for `trigger` containing a single list item, returning the item
fn open_with_item(
    manager: &mut DropdownManager<MockDocument>,
    trigger: NodeId,
    options: DropdownOptions,
) -> NodeId {
    let item = manager
        .host_mut()
        .create_element("li", None, Rect::default());
    manager.request_open(trigger, perch_ui::DropdownContent::Element(item), options, None);
    item
}

#[test]
fn test_escape_closes() {
    let (mut manager, a, b) = setup();
    open(&mut manager, a, DropdownOptions::default());

    assert!(dispatch(&mut manager, DropdownEvent::key_down("Escape")));
    assert!(!manager.is_open());
    assert_consistent(&manager, &[a, b]);
}

#[test]
fn test_other_keys_ignored() {
    let (mut manager, a, _) = setup();
    open(&mut manager, a, DropdownOptions::default());

    for key in ["Enter", "ArrowDown", "a", "Esc", "escape"] {
        dispatch(&mut manager, DropdownEvent::key_down(key));
        assert!(manager.is_open(), "{key} closed the dropdown");
    }
}

#[test]
fn test_click_outside_closes() {
    let (mut manager, a, b) = setup();
    open(&mut manager, a, DropdownOptions::default().close_on_click_inside(false));

    dispatch(&mut manager, DropdownEvent::click(b));
    assert!(!manager.is_open());
    assert_consistent(&manager, &[a, b]);
}

#[test]
fn test_click_inside_closes_by_default() {
    let (mut manager, a, _) = setup();
    let item = open_with_item(&mut manager, a, DropdownOptions::default());

    dispatch(&mut manager, DropdownEvent::click(item));
    assert!(!manager.is_open());
}

#[test]
fn test_click_inside_kept_open_when_configured() {
    let (mut manager, a, b) = setup();
    let item = open_with_item(
        &mut manager,
        a,
        DropdownOptions::default().close_on_click_inside(false),
    );

    dispatch(&mut manager, DropdownEvent::click(item));
    assert!(manager.is_open());

    // The overlay itself counts as inside
    let overlay = *manager.element().unwrap();
    dispatch(&mut manager, DropdownEvent::click(overlay));
    assert!(manager.is_open());
    assert_consistent(&manager, &[a, b]);
}

#[test]
fn test_click_without_target_closes() {
    let (mut manager, a, _) = setup();
    open(&mut manager, a, DropdownOptions::default().close_on_click_inside(false));

    manager.dismissal_check(&DropdownEvent {
        kind: DropdownEventKind::Click,
        target: None,
    });
    assert!(!manager.is_open());
}

#[test]
fn test_scroll_inside_ignored() {
    let (mut manager, a, _) = setup();
    let item = open_with_item(&mut manager, a, DropdownOptions::default());

    dispatch(&mut manager, DropdownEvent::scroll(item));
    assert!(manager.is_open());
}

#[test]
fn test_scroll_elsewhere_closes() {
    let (mut manager, a, b) = setup();
    open(&mut manager, a, DropdownOptions::default());

    let root = manager.host().root();
    assert!(dispatch(&mut manager, DropdownEvent::scroll(root)));
    assert!(!manager.is_open());
    assert_consistent(&manager, &[a, b]);
}

#[test]
fn test_scroll_ignored_without_close_on_scroll() {
    let (mut manager, a, _) = setup();
    open(&mut manager, a, DropdownOptions::default().close_on_scroll(false));

    let root = manager.host().root();
    assert!(!dispatch(&mut manager, DropdownEvent::scroll(root)));
    assert!(manager.is_open());
}

#[test]
fn test_unknown_event_closes() {
    let (mut manager, a, _) = setup();
    open(&mut manager, a, DropdownOptions::default());

    manager.dismissal_check(&DropdownEvent {
        kind: DropdownEventKind::Other("blur".to_string()),
        target: None,
    });
    assert!(!manager.is_open());
}

#[test]
fn test_events_ignored_when_closed() {
    let (mut manager, a, b) = setup();

    manager.dismissal_check(&DropdownEvent::key_down("Escape"));
    manager.dismissal_check(&DropdownEvent::click(b));
    assert!(manager.window_resized().is_none());
    assert!(!dispatch(&mut manager, DropdownEvent::click(b)));
    assert_eq!(manager.host().listener_removals(), 0);
    assert_consistent(&manager, &[a, b]);
}

#[test]
fn test_listeners_gone_after_dismissal() {
    let (mut manager, a, _) = setup();
    open(&mut manager, a, DropdownOptions::default());
    dispatch(&mut manager, DropdownEvent::key_down("Escape"));

    // A second Escape reaches no listener
    assert!(!dispatch(&mut manager, DropdownEvent::key_down("Escape")));
}
