/// Key that dismisses an open dropdown
pub const DISMISS_KEY: &str = "Escape";

/// Event delivered to the dismissal check by a global listener
#[derive(Clone, Debug, PartialEq)]
pub struct DropdownEvent<N> {
    pub kind: DropdownEventKind,
    /// Node the event was dispatched to, when the host knows it
    pub target: Option<N>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DropdownEventKind {
    Click,
    KeyDown { key: String },
    Scroll,
    Other(String),
}

impl DropdownEventKind {
    /// Map a DOM event type (and the key, for keyboard events).
    pub fn from_type(event_type: &str, key: Option<String>) -> Self {
        match event_type {
            "click" => Self::Click,
            "keydown" => Self::KeyDown {
                key: key.unwrap_or_default(),
            },
            "scroll" => Self::Scroll,
            other => Self::Other(other.to_string()),
        }
    }
}

impl<N> DropdownEvent<N> {
    pub fn click(target: N) -> Self {
        Self {
            kind: DropdownEventKind::Click,
            target: Some(target),
        }
    }

    pub fn key_down(key: &str) -> Self {
        Self {
            kind: DropdownEventKind::KeyDown {
                key: key.to_string(),
            },
            target: None,
        }
    }

    pub fn scroll(target: N) -> Self {
        Self {
            kind: DropdownEventKind::Scroll,
            target: Some(target),
        }
    }
}

/// The user interaction that asked for a dropdown to open.
///
/// Its propagation is stopped before any global listener is installed, so
/// the click that opens a dropdown never reaches the dismissal check.
pub trait OriginatingEvent {
    fn stop_propagation(&self);
}
