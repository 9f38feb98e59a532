use std::cell::Cell;

use perch_ui::OriginatingEvent;

/// Originating event that remembers whether propagation was stopped
#[derive(Debug, Default)]
pub struct MockEvent {
    stopped: Cell<bool>,
}

impl MockEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn propagation_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl OriginatingEvent for MockEvent {
    fn stop_propagation(&self) {
        self.stopped.set(true);
    }
}
