//! Copy-on-write widget store.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::error::{RegistryError, Result};
use crate::logging::{span_names, targets};
use crate::page::{PageRequest, WidgetPage};
use crate::widget::{Widget, WidgetDescription, WidgetId};
use crate::zstack::{Placement, ZStack};

use super::{StoreBackend, WidgetStore, ZOrderSnapshot};

/// A store that publishes its stack as an immutable snapshot.
///
/// Readers load the current snapshot without taking any lock. Writers are
/// serialized by a single mutex; each one copies the current stack, applies
/// its change and publishes the result atomically, so a reader sees either
/// the whole change or none of it.
#[derive(Debug)]
pub struct SnapshotWidgetStore {
    current: ArcSwap<Vec<Widget>>,
    writer: Mutex<()>,
}

impl SnapshotWidgetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Vec::new()),
            writer: Mutex::new(()),
        }
    }

    /// Copy the current stack, apply `f` and publish the result.
    ///
    /// Nothing is published when `f` fails.
    fn mutate<T>(&self, f: impl FnOnce(&mut ZStack) -> Result<T>) -> Result<T> {
        let _writer = self.writer.lock();
        let current = self.current.load_full();
        let _span =
            tracing::trace_span!(target: targets::STORE, span_names::STORE, widgets = current.len())
                .entered();
        let mut stack = ZStack::from_ordered(Vec::clone(&current));
        let out = f(&mut stack)?;
        self.current.store(Arc::new(stack.into_vec()));
        Ok(out)
    }
}

impl Default for SnapshotWidgetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetStore for SnapshotWidgetStore {
    #[tracing::instrument(skip(self), target = "tessera_core::store", level = "trace")]
    fn add(&self, description: &WidgetDescription) -> Result<Widget> {
        let widget = Widget::from_description(description);
        let placement = Placement::from_requested(description.z);
        self.mutate(|stack| stack.insert(widget, placement))
    }

    fn get(&self, id: WidgetId) -> Result<Widget> {
        self.current
            .load()
            .iter()
            .find(|w| w.id() == id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })
    }

    #[tracing::instrument(skip(self), target = "tessera_core::store", level = "trace")]
    fn edit(&self, id: WidgetId, description: &WidgetDescription) -> Result<Widget> {
        self.mutate(|stack| stack.edit(id, description))
    }

    #[tracing::instrument(skip(self), target = "tessera_core::store", level = "trace")]
    fn delete(&self, id: WidgetId) -> bool {
        self.mutate(|stack| stack.remove(id).ok_or(RegistryError::NotFound { id }))
            .inspect_err(|_| tracing::trace!(target: targets::STORE, %id, "nothing to delete"))
            .is_ok()
    }

    fn list_all(&self) -> Vec<Widget> {
        Vec::clone(&self.current.load())
    }

    fn list_page(&self, request: PageRequest) -> WidgetPage {
        WidgetPage::from_slice(&self.current.load(), request)
    }

    #[tracing::instrument(skip(self), target = "tessera_core::store", level = "debug")]
    fn clear(&self) {
        let _writer = self.writer.lock();
        self.current.store(Arc::new(Vec::new()));
    }

    fn len(&self) -> usize {
        self.current.load().len()
    }

    fn snapshot(&self) -> ZOrderSnapshot {
        ZOrderSnapshot::new(self.current.load_full())
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Snapshot
    }
}
