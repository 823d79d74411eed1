//! Lock-protected widget store.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{RegistryError, Result};
use crate::page::{PageRequest, WidgetPage};
use crate::widget::{Widget, WidgetDescription, WidgetId};
use crate::zstack::{Placement, ZStack};

use super::{StoreBackend, WidgetStore, ZOrderSnapshot};

/// A store guarding the whole stack with one reader/writer lock.
///
/// Mutations take the write lock for the duration of the in-memory shift;
/// reads share the read lock and copy out what they need. Exactly one lock
/// exists and it is never held across calls, so callers cannot deadlock.
#[derive(Debug, Default)]
pub struct LockedWidgetStore {
    inner: RwLock<ZStack>,
}

impl LockedWidgetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with read access to the stack.
    pub fn with_read<R>(&self, f: impl FnOnce(&ZStack) -> R) -> R {
        f(&self.inner.read())
    }
}

impl WidgetStore for LockedWidgetStore {
    #[tracing::instrument(skip(self), target = "tessera_core::store", level = "trace")]
    fn add(&self, description: &WidgetDescription) -> Result<Widget> {
        let widget = Widget::from_description(description);
        let placement = Placement::from_requested(description.z);
        self.inner.write().insert(widget, placement)
    }

    fn get(&self, id: WidgetId) -> Result<Widget> {
        self.inner
            .read()
            .get(id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })
    }

    #[tracing::instrument(skip(self), target = "tessera_core::store", level = "trace")]
    fn edit(&self, id: WidgetId, description: &WidgetDescription) -> Result<Widget> {
        self.inner.write().edit(id, description)
    }

    #[tracing::instrument(skip(self), target = "tessera_core::store", level = "trace")]
    fn delete(&self, id: WidgetId) -> bool {
        self.inner.write().remove(id).is_some()
    }

    fn list_all(&self) -> Vec<Widget> {
        self.inner.read().as_slice().to_vec()
    }

    fn list_page(&self, request: PageRequest) -> WidgetPage {
        WidgetPage::from_slice(self.inner.read().as_slice(), request)
    }

    #[tracing::instrument(skip(self), target = "tessera_core::store", level = "debug")]
    fn clear(&self) {
        self.inner.write().clear();
    }

    fn len(&self) -> usize {
        self.inner.read().len()
    }

    fn snapshot(&self) -> ZOrderSnapshot {
        ZOrderSnapshot::new(Arc::new(self.list_all()))
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_read_sees_committed_state() {
        let store = LockedWidgetStore::new();
        let description = WidgetDescription::new()
            .with_x(0)
            .with_y(0)
            .with_width(2)
            .with_height(2);
        store.add(&description).unwrap();
        store.add(&description.with_z(0)).unwrap();

        store.with_read(|stack| {
            assert_eq!(stack.len(), 2);
            assert!(stack.is_dense());
        });
    }
}
