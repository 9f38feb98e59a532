use crate::listeners::ListenerSpec;
use crate::options::DropdownOptions;

/// An open dropdown
///
/// Exists only while its overlay is mounted; dropping out of the manager's
/// slot and unmounting happen together in [`DropdownManager::close`].
///
/// [`DropdownManager::close`]: crate::manager::DropdownManager::close
#[derive(Clone, Debug, PartialEq)]
pub struct Session<N> {
    pub(crate) trigger: N,
    pub(crate) options: DropdownOptions,
    pub(crate) overlay: N,
    pub(crate) listeners: Vec<ListenerSpec>,
}

impl<N> Session<N> {
    /// Element that opened the dropdown
    pub fn trigger(&self) -> &N {
        &self.trigger
    }

    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }

    /// Root element of the overlay
    pub fn element(&self) -> &N {
        &self.overlay
    }

    /// Global listeners this session registered
    pub fn listeners(&self) -> &[ListenerSpec] {
        &self.listeners
    }
}
