//! Widget registry backends.
//!
//! A store exclusively owns every widget it holds and keeps them in
//! ascending z order. Callers only ever receive copies.
//!
//! # Key Types
//!
//! - [`WidgetStore`] - The registry contract shared by all backends
//! - [`LockedWidgetStore`] - One reader/writer lock around the whole stack
//! - [`SnapshotWidgetStore`] - Copy-on-write stack with lock-free reads
//! - [`StoreBackend`] - Selects a backend at runtime
//! - [`ZOrderSnapshot`] - An immutable, consistent view of a store
//!
//! # Choosing a Backend
//!
//! Both backends run the same [`ZStack`](crate::zstack::ZStack) algorithm,
//! so their observable behaviour is identical. [`LockedWidgetStore`] mutates
//! in place and suits write-heavy use. [`SnapshotWidgetStore`] copies the
//! stack on every mutation and never blocks readers, which suits read-heavy
//! use.
//!
//! ```
//! use tessera_core::store::{StoreBackend, WidgetStore};
//! use tessera_core::WidgetDescription;
//!
//! let store = StoreBackend::Snapshot.build();
//! let widget = store
//!     .add(&WidgetDescription::new().with_x(0).with_y(0).with_width(5).with_height(5))
//!     .unwrap();
//!
//! assert_eq!(widget.z, 0);
//! assert_eq!(store.get(widget.id()).unwrap(), widget);
//! ```

mod locked;
mod snapshot;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::StackHealth;
use crate::page::{PageRequest, WidgetPage};
use crate::widget::{Widget, WidgetDescription, WidgetId};

pub use locked::LockedWidgetStore;
pub use snapshot::SnapshotWidgetStore;

/// The ordered widget registry contract.
///
/// Mutating operations are serialized against each other and against any
/// multi-widget read, so a listing never observes a half-shifted stack.
pub trait WidgetStore: Send + Sync + fmt::Debug {
    /// Create a widget from `description` and place it in the stack.
    ///
    /// An absent `z` places the widget on top; a present one is clamped to
    /// `0..=len` and shifts every widget at or above it up by one.
    fn add(&self, description: &WidgetDescription) -> Result<Widget>;

    /// Look up a widget by id.
    fn get(&self, id: WidgetId) -> Result<Widget>;

    /// Apply a partial description to an existing widget.
    ///
    /// See [`ZStack::edit`](crate::zstack::ZStack::edit) for the rules.
    fn edit(&self, id: WidgetId, description: &WidgetDescription) -> Result<Widget>;

    /// Remove a widget. Returns whether one was removed.
    ///
    /// Remaining widgets keep their z values, so this may leave a gap.
    fn delete(&self, id: WidgetId) -> bool;

    /// Every widget, ascending by z.
    fn list_all(&self) -> Vec<Widget>;

    /// One page of the ascending-z listing.
    fn list_page(&self, request: PageRequest) -> WidgetPage;

    /// Remove every widget.
    fn clear(&self);

    /// Number of widgets.
    fn len(&self) -> usize;

    /// Whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A consistent view of the whole stack.
    fn snapshot(&self) -> ZOrderSnapshot;

    /// Which backend this is.
    fn backend(&self) -> StoreBackend;
}

/// An immutable, point-in-time copy of a store's stack.
#[derive(Debug, Clone)]
pub struct ZOrderSnapshot {
    widgets: Arc<Vec<Widget>>,
}

impl ZOrderSnapshot {
    pub(crate) fn new(widgets: Arc<Vec<Widget>>) -> Self {
        Self { widgets }
    }

    /// The widgets, ascending by z.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Look up a widget by id.
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    /// Shape of the snapshot's z values.
    pub fn health(&self) -> StackHealth {
        StackHealth::of(&self.widgets)
    }
}

/// Available store backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// [`LockedWidgetStore`].
    #[default]
    Locked,
    /// [`SnapshotWidgetStore`].
    Snapshot,
}

impl StoreBackend {
    /// Create an empty store of this kind.
    pub fn build(self) -> Arc<dyn WidgetStore> {
        tracing::debug!(target: crate::logging::targets::STORE, backend = %self, "building widget store");
        match self {
            Self::Locked => Arc::new(LockedWidgetStore::new()),
            Self::Snapshot => Arc::new(SnapshotWidgetStore::new()),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "locked"),
            Self::Snapshot => write!(f, "snapshot"),
        }
    }
}

static_assertions::assert_impl_all!(LockedWidgetStore: Send, Sync);
static_assertions::assert_impl_all!(SnapshotWidgetStore: Send, Sync);
static_assertions::assert_impl_all!(ZOrderSnapshot: Send, Sync);
