//! Single-dropdown session manager
//!
//! Owns the one slot that says which dropdown (if any) is open, and every
//! transition in and out of it:
//! - `request_open` closes whatever is open first; asking again for the same
//!   trigger just closes it (toggle)
//! - global listeners go in after the overlay is mounted and come out in
//!   `close`, exactly as registered
//! - every method leaves the slot either filled with a mounted overlay or
//!   empty with nothing mounted
//!
//! Hosts feed their global listeners into `dismissal_check` and
//! `window_resized`. Both are safe to call at any time, open or not.

use tracing::{debug, trace};

use crate::content::{mount_content, DropdownContent};
use crate::error::DropdownError;
use crate::events::{DropdownEvent, DropdownEventKind, OriginatingEvent, DISMISS_KEY};
use crate::host::DropdownHost;
use crate::listeners::listeners_for;
use crate::options::DropdownOptions;
use crate::placement::{self, Placement};
use crate::session::Session;

/// Class set on the trigger while its dropdown is open
pub const ACTIVE_CLASS: &str = "active";

/// What `request_open` ended up doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// The trigger's own dropdown was open and is now closed
    Toggled,
}

pub struct DropdownManager<H: DropdownHost> {
    host: H,
    session: Option<Session<H::Node>>,
}

impl<H: DropdownHost> DropdownManager<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            session: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Close any open dropdown and hand back the host.
    pub fn into_host(mut self) -> H {
        self.close();
        self.host
    }

    pub fn request_open(
        &mut self,
        trigger: H::Node,
        content: DropdownContent<H::Node>,
        options: DropdownOptions,
        event: Option<&dyn OriginatingEvent>,
    ) -> OpenOutcome {
        if let Some(event) = event {
            event.stop_propagation();
        }

        if let Some(open_trigger) = self.session.as_ref().map(|s| s.trigger.clone()) {
            self.close();
            if open_trigger == trigger {
                debug!("Dropdown toggled closed by its trigger");
                return OpenOutcome::Toggled;
            }
        }

        self.mount(trigger, &content, options);
        OpenOutcome::Opened
    }

    fn mount(
        &mut self,
        trigger: H::Node,
        content: &DropdownContent<H::Node>,
        options: DropdownOptions,
    ) {
        let host = &mut self.host;
        let overlay = host.create_overlay();
        for class in options.class_tokens() {
            host.add_class(&overlay, class);
        }

        let parent = host
            .closest_modal(&trigger)
            .unwrap_or_else(|| host.document_root());
        host.append_child(&parent, &overlay);

        mount_content(host, &overlay, content);
        placement::position(host, &trigger, &overlay, options.centered);
        host.add_class(&trigger, ACTIVE_CLASS);

        let listeners = listeners_for(&options);
        for spec in &listeners {
            host.add_listener(*spec);
        }

        debug!("Opened dropdown with classes {:?}", options.class_name);
        self.session = Some(Session {
            trigger,
            options,
            overlay,
            listeners,
        });
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn current(&self) -> Result<&Session<H::Node>, DropdownError> {
        self.session.as_ref().ok_or(DropdownError::NotOpen)
    }

    /// Root element of the open overlay
    pub fn element(&self) -> Result<&H::Node, DropdownError> {
        self.current().map(Session::element)
    }

    /// Replace the content of the open dropdown and place it again.
    pub fn set_content(
        &mut self,
        content: DropdownContent<H::Node>,
    ) -> Result<Placement, DropdownError> {
        let session = self.session.as_ref().ok_or(DropdownError::NotOpen)?;
        mount_content(&mut self.host, &session.overlay, &content);
        Ok(placement::position(
            &mut self.host,
            &session.trigger,
            &session.overlay,
            session.options.centered,
        ))
    }

    pub fn close(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        for spec in &session.listeners {
            self.host.remove_listener(*spec);
        }
        self.host.remove_node(&session.overlay);
        self.host.remove_class(&session.trigger, ACTIVE_CLASS);
        debug!("Closed dropdown");
    }

    /// Global listener entry point for dismissal events.
    pub fn dismissal_check(&mut self, event: &DropdownEvent<H::Node>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let inside = event
            .target
            .as_ref()
            .is_some_and(|target| self.host.contains(&session.overlay, target));

        match &event.kind {
            DropdownEventKind::Scroll if inside => {
                trace!("Ignoring scroll inside dropdown");
            }
            DropdownEventKind::KeyDown { key } if key != DISMISS_KEY => {
                trace!("Ignoring key {key}");
            }
            DropdownEventKind::Click => {
                if session.options.close_on_click_inside || !inside {
                    self.close();
                }
            }
            _ => self.close(),
        }
    }

    /// Global listener entry point for viewport resizes.
    pub fn window_resized(&mut self) -> Option<Placement> {
        let session = self.session.as_ref()?;
        Some(placement::position(
            &mut self.host,
            &session.trigger,
            &session.overlay,
            session.options.centered,
        ))
    }
}
