//! Selection state: at most one instance targeted for editing and highlight.
//!
//! `select` does not check existence. A stale id is tolerated and simply
//! matches nothing in the document, so the renderer highlights nothing and the
//! editor produces no panel. The engine clears the selection whenever the
//! selected instance is removed.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::doc::{Document, InstanceId};

/// The single selected instance, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<InstanceId>,
}

impl Selection {
    /// Select `id`, replacing any previous selection.
    pub fn select(&mut self, id: InstanceId) {
        self.current = Some(id);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The selected id, stale or not.
    #[must_use]
    pub fn current(&self) -> Option<InstanceId> {
        self.current
    }

    /// Whether `id` is the selected instance.
    #[must_use]
    pub fn is_selected(&self, id: &InstanceId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// The selected id only if it still refers to a placed instance.
    #[must_use]
    pub fn resolve(&self, doc: &Document) -> Option<InstanceId> {
        self.current.filter(|id| doc.contains(id))
    }

    /// Clear the selection if it refers to `id`. Returns true if it was cleared.
    pub fn forget(&mut self, id: &InstanceId) -> bool {
        if self.is_selected(id) {
            self.current = None;
            return true;
        }
        false
    }
}
