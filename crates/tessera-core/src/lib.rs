//! Core systems for Tessera.
//!
//! This crate provides the foundational components of the Tessera widget
//! registry:
//!
//! - **Widget Model**: Layered boxes with stable ids and modification times
//! - **Validation**: Aggregated checks of create/edit descriptions
//! - **Z-Stack**: The dense, strictly ordered stacking algorithm
//! - **Stores**: Thread-safe registry backends (locked and copy-on-write)
//! - **Paging**: Clamped page requests over the ascending-z listing
//!
//! # Example
//!
//! ```
//! use tessera_core::store::{LockedWidgetStore, WidgetStore};
//! use tessera_core::WidgetDescription;
//!
//! let store = LockedWidgetStore::new();
//! let base = WidgetDescription::new().with_x(0).with_y(0).with_width(10).with_height(10);
//!
//! let a = store.add(&base).unwrap();
//! let b = store.add(&base).unwrap();
//!
//! // Insert below everything else; existing widgets move up.
//! let c = store.add(&base.with_z(0)).unwrap();
//!
//! let order: Vec<_> = store.list_all().iter().map(|w| (w.id(), w.z)).collect();
//! assert_eq!(order, vec![(c.id(), 0), (a.id(), 1), (b.id(), 2)]);
//! ```

mod error;
pub mod logging;
pub mod page;
pub mod store;
pub mod validation;
pub mod widget;
pub mod zstack;

pub use error::{RegistryError, Result};
pub use logging::{PerfSpan, StackDebug, StackFormatOptions, StackHealth, StackStyle};
pub use page::{PageLimits, PageRequest, WidgetPage, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use store::{
    LockedWidgetStore, SnapshotWidgetStore, StoreBackend, WidgetStore, ZOrderSnapshot,
};
pub use validation::{validate_create, validate_edit, Violation, Violations};
pub use widget::{Widget, WidgetDescription, WidgetId};
pub use zstack::{Placement, ZStack};
