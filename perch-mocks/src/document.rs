use std::collections::BTreeMap;

use perch_ui::{DropdownHost, ListenerSpec, MarginBox, Rect, Viewport};
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct MockNode {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    inner_markup: Option<String>,
    rect: Rect,
    is_overlay: bool,
}

/// Document with a `body` root, fixed element rects and a fixed viewport
///
/// Overlays created through the host all measure `overlay_size`, which
/// tests change to simulate content of a different size.
#[derive(Debug)]
pub struct MockDocument {
    nodes: Vec<MockNode>,
    root: NodeId,
    viewport: Viewport,
    overlay_size: (f64, f64),
    overlay_margins: MarginBox,
    listeners: Vec<ListenerSpec>,
    listener_removals: usize,
}

impl MockDocument {
    pub fn new(viewport: Viewport) -> Self {
        let body = MockNode {
            tag: "body".to_string(),
            rect: Rect::from_origin(0.0, 0.0, viewport.width, viewport.height),
            ..Default::default()
        };
        Self {
            nodes: vec![body],
            root: NodeId(0),
            viewport,
            overlay_size: (200.0, 100.0),
            overlay_margins: MarginBox::default(),
            listeners: Vec::new(),
            listener_removals: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Add an element under `parent` (the body when `None`).
    pub fn create_element(&mut self, tag: &str, parent: Option<NodeId>, rect: Rect) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(MockNode {
            tag: tag.to_string(),
            rect,
            ..Default::default()
        });
        let parent = parent.unwrap_or(self.root);
        self.attach(parent, id);
        id
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_overlay_size(&mut self, width: f64, height: f64) {
        self.overlay_size = (width, height);
    }

    pub fn set_overlay_margins(&mut self, margins: MarginBox) {
        self.overlay_margins = margins;
    }

    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        self.node_mut(id).rect = rect;
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        &self.node(id).classes
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id).styles.get(property).map(String::as_str)
    }

    pub fn inner_markup(&self, id: NodeId) -> Option<&str> {
        self.node(id).inner_markup.as_deref()
    }

    /// Whether `id` is reachable from the document root
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.ancestors(id).any(|node| node == self.root)
    }

    pub fn listeners(&self) -> &[ListenerSpec] {
        &self.listeners
    }

    pub fn is_listening(&self, spec: &ListenerSpec) -> bool {
        self.listeners.contains(spec)
    }

    /// Number of `remove_listener` calls that matched a registered listener
    pub fn listener_removals(&self) -> usize {
        self.listener_removals
    }

    /// Overlays currently attached to the document
    pub fn attached_overlays(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|&id| self.node(id).is_overlay && self.is_attached(id))
            .collect()
    }

    fn node(&self, id: NodeId) -> &MockNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut MockNode {
        &mut self.nodes[id.0]
    }

    /// `id` itself, then each parent up to the root
    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&node| self.node(node).parent)
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|&child| child != id);
        }
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn clear_children(&mut self, id: NodeId) {
        for child in std::mem::take(&mut self.node_mut(id).children) {
            self.node_mut(child).parent = None;
        }
        self.node_mut(id).inner_markup = None;
    }
}

impl DropdownHost for MockDocument {
    type Node = NodeId;

    fn create_overlay(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(MockNode {
            tag: "div".to_string(),
            is_overlay: true,
            ..Default::default()
        });
        id
    }

    fn document_root(&self) -> NodeId {
        self.root
    }

    fn closest_modal(&self, node: &NodeId) -> Option<NodeId> {
        self.ancestors(*node)
            .find(|&ancestor| self.node(ancestor).tag == "dialog")
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.attach(*parent, *child);
    }

    fn remove_node(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if !self.has_class(*node, class) {
            self.node_mut(*node).classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.node_mut(*node).classes.retain(|c| c != class);
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        self.node_mut(*node)
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn replace_children(&mut self, node: &NodeId, child: &NodeId) {
        self.clear_children(*node);
        self.attach(*node, *child);
    }

    fn replace_children_with_fragment(&mut self, node: &NodeId, fragment: &NodeId) {
        self.clear_children(*node);
        for child in self.node(*fragment).children.clone() {
            self.attach(*node, child);
        }
    }

    fn set_inner_markup(&mut self, node: &NodeId, markup: &str) {
        self.clear_children(*node);
        self.node_mut(*node).inner_markup = Some(markup.to_string());
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        let node = self.node(*node);
        if node.is_overlay {
            let (width, height) = self.overlay_size;
            Rect::from_origin(0.0, 0.0, width, height)
        } else {
            node.rect
        }
    }

    fn computed_margins(&self, _node: &NodeId) -> MarginBox {
        self.overlay_margins
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        self.ancestors(*node).any(|n| n == *ancestor)
    }

    fn add_listener(&mut self, spec: ListenerSpec) {
        // Browsers ignore a second identical registration
        if !self.listeners.contains(&spec) {
            trace!("Listening for {} (capture: {})", spec.event_type, spec.capture);
            self.listeners.push(spec);
        }
    }

    fn remove_listener(&mut self, spec: ListenerSpec) {
        let before = self.listeners.len();
        self.listeners.retain(|registered| *registered != spec);
        if self.listeners.len() != before {
            self.listener_removals += 1;
        }
    }
}
