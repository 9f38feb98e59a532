//! Global listeners installed while a dropdown is open
//!
//! Resize, keydown and scroll are captured so the dismissal check sees them
//! before handlers inside the page. Click bubbles, so content handlers (and a
//! trigger's own `stop_propagation`) run first. Removal must use the same
//! `capture` flag as registration or the browser keeps the listener.

use crate::options::DropdownOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Window,
    Document,
}

/// Which manager entry point a listener feeds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerHandler {
    Reposition,
    Dismissal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerSpec {
    pub target: ListenerTarget,
    pub event_type: &'static str,
    pub capture: bool,
    pub handler: ListenerHandler,
}

pub const RESIZE_LISTENER: ListenerSpec = ListenerSpec {
    target: ListenerTarget::Window,
    event_type: "resize",
    capture: true,
    handler: ListenerHandler::Reposition,
};

pub const KEYDOWN_LISTENER: ListenerSpec = ListenerSpec {
    target: ListenerTarget::Document,
    event_type: "keydown",
    capture: true,
    handler: ListenerHandler::Dismissal,
};

pub const CLICK_LISTENER: ListenerSpec = ListenerSpec {
    target: ListenerTarget::Document,
    event_type: "click",
    capture: false,
    handler: ListenerHandler::Dismissal,
};

pub const SCROLL_LISTENER: ListenerSpec = ListenerSpec {
    target: ListenerTarget::Document,
    event_type: "scroll",
    capture: true,
    handler: ListenerHandler::Dismissal,
};

/// Listeners to register for a session, in registration order.
pub fn listeners_for(options: &DropdownOptions) -> Vec<ListenerSpec> {
    let mut specs = vec![RESIZE_LISTENER, KEYDOWN_LISTENER, CLICK_LISTENER];
    if options.close_on_scroll {
        specs.push(SCROLL_LISTENER);
    }
    specs
}
