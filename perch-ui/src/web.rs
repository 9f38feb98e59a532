//! Browser host and the document-wide dropdown registry
//!
//! # Listener lifetime
//!
//! A global listener can close the dropdown, and closing removes the global
//! listeners, so a listener may unregister itself while it runs. Dropping a
//! `Closure` that is currently executing aborts, so the two callbacks are
//! created once per thread and never dropped. Registration and removal always
//! pass the same function and the same `capture` flag, which is what the
//! browser matches on.
//!
//! ```ignore
//! button.set_onclick(|event: web_sys_x::Event| {
//!     perch_ui::web::open(trigger, "<ul>...</ul>".into(), DropdownOptions::default(), Some(&event));
//! });
//! ```

use std::cell::RefCell;

use tracing::warn;
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

use crate::content::DropdownContent;
use crate::error::DropdownError;
use crate::events::{DropdownEvent, DropdownEventKind, OriginatingEvent};
use crate::geometry::{MarginBox, Rect, Viewport};
use crate::host::DropdownHost;
use crate::listeners::{ListenerHandler, ListenerSpec, ListenerTarget};
use crate::manager::{DropdownManager, OpenOutcome};
use crate::options::DropdownOptions;
use crate::placement::Placement;
use crate::session::Session;

type Callback = Closure<dyn FnMut(web_sys_x::Event)>;

thread_local! {
    static MANAGER: RefCell<Option<DropdownManager<WebHost>>> = const { RefCell::new(None) };
    static HANDLERS: GlobalHandlers = GlobalHandlers::new();
}

/// Callbacks shared by every session on this thread
struct GlobalHandlers {
    reposition: Callback,
    dismissal: Callback,
}

impl GlobalHandlers {
    fn new() -> Self {
        let reposition: Callback = Closure::wrap(Box::new(|_event: web_sys_x::Event| {
            with_manager(|manager| {
                manager.window_resized();
            });
        }));
        let dismissal: Callback = Closure::wrap(Box::new(|event: web_sys_x::Event| {
            let event = to_dropdown_event(&event);
            with_manager(|manager| manager.dismissal_check(&event));
        }));
        Self {
            reposition,
            dismissal,
        }
    }

    fn callback(&self, handler: ListenerHandler) -> &Callback {
        match handler {
            ListenerHandler::Reposition => &self.reposition,
            ListenerHandler::Dismissal => &self.dismissal,
        }
    }
}

fn to_dropdown_event(event: &web_sys_x::Event) -> DropdownEvent<web_sys_x::Element> {
    let key = event
        .dyn_ref::<web_sys_x::KeyboardEvent>()
        .map(|keyboard| keyboard.key());
    DropdownEvent {
        kind: DropdownEventKind::from_type(&event.type_(), key),
        target: event
            .target()
            .and_then(|target| target.dyn_into::<web_sys_x::Element>().ok()),
    }
}

impl OriginatingEvent for web_sys_x::Event {
    fn stop_propagation(&self) {
        web_sys_x::Event::stop_propagation(self);
    }
}

/// Run `f` against this thread's registry, creating it on first use.
///
/// Returns `None` when there is no document, or when called from inside
/// another registry call (a listener fired synchronously by a DOM mutation).
fn with_manager<R>(f: impl FnOnce(&mut DropdownManager<WebHost>) -> R) -> Option<R> {
    MANAGER.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            warn!("Dropdown registry re-entered, skipping");
            return None;
        };
        if slot.is_none() {
            *slot = WebHost::new().map(DropdownManager::new);
        }
        slot.as_mut().map(f)
    })
}

/// Open a dropdown for `trigger`, closing any other one first.
///
/// Returns `None` if there is no document to open it in.
pub fn open(
    trigger: web_sys_x::Element,
    content: DropdownContent<web_sys_x::Element>,
    options: DropdownOptions,
    event: Option<&web_sys_x::Event>,
) -> Option<OpenOutcome> {
    let event = event.map(|e| e as &dyn OriginatingEvent);
    with_manager(|manager| manager.request_open(trigger, content, options, event))
}

pub fn is_open() -> bool {
    with_manager(|manager| manager.is_open()).unwrap_or(false)
}

pub fn close() {
    with_manager(|manager| manager.close());
}

pub fn set_content(
    content: DropdownContent<web_sys_x::Element>,
) -> Result<Placement, DropdownError> {
    with_manager(|manager| manager.set_content(content)).unwrap_or(Err(DropdownError::NotOpen))
}

/// Root element of the open overlay
pub fn element() -> Result<web_sys_x::Element, DropdownError> {
    with_manager(|manager| manager.element().cloned()).unwrap_or(Err(DropdownError::NotOpen))
}

/// Inspect the open session.
pub fn with_current<R>(
    f: impl FnOnce(&Session<web_sys_x::Element>) -> R,
) -> Result<R, DropdownError> {
    with_manager(|manager| manager.current().map(f)).unwrap_or(Err(DropdownError::NotOpen))
}

/// [`DropdownHost`] backed by the page's DOM
pub struct WebHost {
    window: web_sys_x::Window,
    document: web_sys_x::Document,
    root: web_sys_x::Element,
}

impl WebHost {
    pub fn new() -> Option<Self> {
        let window = web_sys_x::window()?;
        let document = window.document()?;
        let root = document
            .body()
            .map(web_sys_x::Element::from)
            .or_else(|| document.document_element())?;
        Some(Self {
            window,
            document,
            root,
        })
    }

    fn event_target(&self, target: ListenerTarget) -> &web_sys_x::EventTarget {
        match target {
            ListenerTarget::Window => self.window.as_ref(),
            ListenerTarget::Document => self.document.as_ref(),
        }
    }
}

fn log_err<T>(result: Result<T, JsValue>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Dropdown {what} failed: {e:?}");
            None
        }
    }
}

impl DropdownHost for WebHost {
    type Node = web_sys_x::Element;

    fn create_overlay(&mut self) -> Self::Node {
        // Only fails for invalid tag names
        match self.document.create_element("div") {
            Ok(element) => element,
            Err(e) => wasm_bindgen_x::throw_val(e),
        }
    }

    fn document_root(&self) -> Self::Node {
        self.root.clone()
    }

    fn closest_modal(&self, node: &Self::Node) -> Option<Self::Node> {
        log_err(node.closest("dialog"), "closest").flatten()
    }

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) {
        log_err(parent.append_child(child), "append");
    }

    fn remove_node(&mut self, node: &Self::Node) {
        node.remove();
    }

    fn add_class(&mut self, node: &Self::Node, class: &str) {
        log_err(node.class_list().add_1(class), "add class");
    }

    fn remove_class(&mut self, node: &Self::Node, class: &str) {
        log_err(node.class_list().remove_1(class), "remove class");
    }

    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str) {
        if let Some(element) = node.dyn_ref::<web_sys_x::HtmlElement>() {
            log_err(element.style().set_property(property, value), "set style");
        }
    }

    fn replace_children(&mut self, node: &Self::Node, child: &Self::Node) {
        node.replace_children_with_node_1(child);
    }

    fn replace_children_with_fragment(&mut self, node: &Self::Node, fragment: &Self::Node) {
        match fragment.dyn_ref::<web_sys_x::HtmlTemplateElement>() {
            Some(template) => node.replace_children_with_node_1(&template.content()),
            None => node.replace_children_with_node_1(fragment),
        }
    }

    fn set_inner_markup(&mut self, node: &Self::Node, markup: &str) {
        node.set_inner_html(markup);
    }

    fn bounding_rect(&self, node: &Self::Node) -> Rect {
        let rect = node.get_bounding_client_rect();
        Rect {
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
            left: rect.left(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn computed_margins(&self, node: &Self::Node) -> MarginBox {
        let Some(style) = log_err(self.window.get_computed_style(node), "computed style").flatten()
        else {
            return MarginBox::default();
        };
        let margin = |side: &str| {
            style
                .get_property_value(&format!("margin-{side}"))
                .unwrap_or_default()
        };
        MarginBox::from_computed(
            &margin("top"),
            &margin("right"),
            &margin("bottom"),
            &margin("left"),
        )
    }

    fn viewport(&self) -> Viewport {
        let width = self
            .document
            .document_element()
            .map(|element| element.client_width() as f64)
            .unwrap_or_default();
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or_default();
        Viewport { width, height }
    }

    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool {
        ancestor.contains(Some(node))
    }

    fn add_listener(&mut self, spec: ListenerSpec) {
        HANDLERS.with(|handlers| {
            log_err(
                self.event_target(spec.target)
                    .add_event_listener_with_callback_and_bool(
                        spec.event_type,
                        handlers.callback(spec.handler).as_ref().unchecked_ref(),
                        spec.capture,
                    ),
                "add listener",
            );
        });
    }

    fn remove_listener(&mut self, spec: ListenerSpec) {
        HANDLERS.with(|handlers| {
            log_err(
                self.event_target(spec.target)
                    .remove_event_listener_with_callback_and_bool(
                        spec.event_type,
                        handlers.callback(spec.handler).as_ref().unchecked_ref(),
                        spec.capture,
                    ),
                "remove listener",
            );
        });
    }
}
