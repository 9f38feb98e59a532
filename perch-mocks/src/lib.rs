//! perch-mocks - In-memory document for exercising perch-ui
//!
//! `MockDocument` implements `DropdownHost` over a small node tree with
//! fixed geometry, and records the global listeners a session installs.
//! `dispatch` routes events the way a browser would: only to listeners that
//! are currently registered.

pub mod dispatch;
pub mod document;
pub mod event;

pub use dispatch::{dispatch, resize};
pub use document::{MockDocument, NodeId};
pub use event::MockEvent;
