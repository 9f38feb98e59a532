//! Boundary between the dropdown logic and the document it lives in
//!
//! The dropdown never lays anything out itself. It asks the host for
//! geometry and computed margins, and tells it which nodes to create, move,
//! style and remove. Hosts log and swallow their own failures: none of these
//! calls can fail from the caller's point of view, because most of them run
//! inside global event listeners.

use std::fmt::Debug;

use crate::geometry::{MarginBox, Rect, Viewport};
use crate::listeners::ListenerSpec;

pub trait DropdownHost {
    /// Handle to a node of the document. Equality is node identity.
    type Node: Clone + PartialEq + Debug;

    /// Create a detached, empty overlay element (a `div` in the browser).
    fn create_overlay(&mut self) -> Self::Node;

    /// Fallback parent for overlays (`document.body`).
    fn document_root(&self) -> Self::Node;

    /// Nearest modal container (`<dialog>`) enclosing `node`, if any.
    fn closest_modal(&self, node: &Self::Node) -> Option<Self::Node>;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Detach `node` from its parent.
    fn remove_node(&mut self, node: &Self::Node);

    fn add_class(&mut self, node: &Self::Node, class: &str);

    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Set an inline style property (`top`, `max-height`, ...).
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Replace all children of `node` with `child`.
    fn replace_children(&mut self, node: &Self::Node, child: &Self::Node);

    /// Replace all children of `node` with the inner content of a fragment
    /// or template.
    fn replace_children_with_fragment(&mut self, node: &Self::Node, fragment: &Self::Node);

    /// Parse `markup` and make the result the only content of `node`.
    fn set_inner_markup(&mut self, node: &Self::Node, markup: &str);

    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    fn computed_margins(&self, node: &Self::Node) -> MarginBox;

    fn viewport(&self) -> Viewport;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn add_listener(&mut self, spec: ListenerSpec);

    fn remove_listener(&mut self, spec: ListenerSpec);
}
