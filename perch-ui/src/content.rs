use crate::host::DropdownHost;

/// What fills the overlay body
#[derive(Clone, Debug, PartialEq)]
pub enum DropdownContent<N> {
    /// A template or fragment; its inner content is moved into the overlay
    Fragment(N),
    /// A concrete element, placed into the overlay as-is
    Element(N),
    /// Markup text, parsed by the host
    Markup(String),
}

impl<N> Default for DropdownContent<N> {
    fn default() -> Self {
        Self::Markup(String::new())
    }
}

impl<N> From<&str> for DropdownContent<N> {
    fn from(markup: &str) -> Self {
        Self::Markup(markup.to_string())
    }
}

impl<N> From<String> for DropdownContent<N> {
    fn from(markup: String) -> Self {
        Self::Markup(markup)
    }
}

/// Replace the overlay's children with `content`.
///
/// Does not reposition; callers measure again afterwards since the
/// overlay's size may have changed.
pub(crate) fn mount_content<H: DropdownHost>(
    host: &mut H,
    overlay: &H::Node,
    content: &DropdownContent<H::Node>,
) {
    match content {
        DropdownContent::Fragment(fragment) => {
            host.replace_children_with_fragment(overlay, fragment)
        }
        DropdownContent::Element(element) => host.replace_children(overlay, element),
        DropdownContent::Markup(markup) => host.set_inner_markup(overlay, markup),
    }
}
