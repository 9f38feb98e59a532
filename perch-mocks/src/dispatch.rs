use perch_ui::{DropdownEvent, DropdownEventKind, DropdownManager, ListenerHandler};

use crate::document::{MockDocument, NodeId};

/// Deliver `event` to the manager if a matching global listener is registered.
///
/// Returns whether any listener received it.
pub fn dispatch(manager: &mut DropdownManager<MockDocument>, event: DropdownEvent<NodeId>) -> bool {
    let event_type = match &event.kind {
        DropdownEventKind::Click => "click",
        DropdownEventKind::KeyDown { .. } => "keydown",
        DropdownEventKind::Scroll => "scroll",
        DropdownEventKind::Other(event_type) => event_type.as_str(),
    };
    let Some(spec) = manager
        .host()
        .listeners()
        .iter()
        .find(|spec| spec.event_type == event_type)
        .copied()
    else {
        return false;
    };

    match spec.handler {
        ListenerHandler::Dismissal => manager.dismissal_check(&event),
        ListenerHandler::Reposition => {
            manager.window_resized();
        }
    }
    true
}

/// Fire a window resize.
pub fn resize(manager: &mut DropdownManager<MockDocument>) -> bool {
    dispatch(
        manager,
        DropdownEvent {
            kind: DropdownEventKind::Other("resize".to_string()),
            target: None,
        },
    )
}
