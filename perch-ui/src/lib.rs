//! perch-ui - Anchored dropdown overlays
//!
//! Places a single floating overlay next to the element that opened it and
//! keeps at most one such overlay open per document. The document itself is
//! reached through the [`DropdownHost`] trait, so the same session logic runs
//! against the browser (`web`, wasm32 only) and against in-memory mocks.

pub mod content;
pub mod error;
pub mod events;
pub mod geometry;
pub mod host;
pub mod listeners;
pub mod manager;
pub mod options;
pub mod placement;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use content::DropdownContent;
pub use error::DropdownError;
pub use events::{DropdownEvent, DropdownEventKind, OriginatingEvent, DISMISS_KEY};
pub use geometry::{MarginBox, Rect, SpaceAvailable, Viewport};
pub use host::DropdownHost;
pub use listeners::{ListenerHandler, ListenerSpec, ListenerTarget};
pub use manager::{DropdownManager, OpenOutcome};
pub use options::DropdownOptions;
pub use placement::{HorizontalAnchor, Placement, PlacementInput, Side, VerticalAnchor};
pub use session::Session;
