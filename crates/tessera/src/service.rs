//! The widget service facade.
//!
//! [`WidgetService`] is the entry point an outer transport talks to. It
//! validates descriptions before they reach the store, applies the configured
//! paging limits and turns the store's "was anything removed" answer into a
//! not-found error where a caller needs the widget to exist.
//!
//! # Example
//!
//! ```
//! use tessera::{RegistryError, ServiceConfig, WidgetDescription, WidgetService};
//!
//! let service = WidgetService::from_config(&ServiceConfig::default());
//!
//! // Creation requires every coordinate and dimension.
//! let err = service.create(&WidgetDescription::new().with_x(1)).unwrap_err();
//! assert!(matches!(err, RegistryError::BadDescription(_)));
//!
//! let widget = service
//!     .create(&WidgetDescription::new().with_x(1).with_y(2).with_width(3).with_height(4))
//!     .unwrap();
//! assert_eq!(service.list_page(None, None).total_length, 1);
//! assert!(service.delete(widget.id()));
//! ```

use std::sync::Arc;

use tessera_core::logging::{span_names, targets, PerfSpan};
use tessera_core::page::{PageLimits, PageRequest, WidgetPage};
use tessera_core::store::{StoreBackend, WidgetStore, ZOrderSnapshot};
use tessera_core::validation::{validate_create, validate_edit};
use tessera_core::widget::{Widget, WidgetDescription, WidgetId};
use tessera_core::{RegistryError, Result};

use crate::config::ServiceConfig;

/// Validating front end over a [`WidgetStore`].
///
/// Cloning a service is cheap; clones share the same store.
#[derive(Debug, Clone)]
pub struct WidgetService {
    store: Arc<dyn WidgetStore>,
    limits: PageLimits,
}

static_assertions::assert_impl_all!(WidgetService: Send, Sync);

impl WidgetService {
    /// Create a service over an existing store.
    pub fn new(store: Arc<dyn WidgetStore>, limits: PageLimits) -> Self {
        Self { store, limits }
    }

    /// Create a service with a fresh store of the configured backend.
    pub fn from_config(config: &ServiceConfig) -> Self {
        tracing::debug!(
            target: targets::SERVICE,
            backend = %config.backend,
            default_page_size = config.paging.default_page_size,
            max_page_size = config.paging.max_page_size,
            "starting widget service"
        );
        Self::new(config.backend.build(), config.paging)
    }

    /// The backend serving this instance.
    pub fn backend(&self) -> StoreBackend {
        self.store.backend()
    }

    /// The paging limits in effect.
    pub fn limits(&self) -> PageLimits {
        self.limits
    }

    /// Validate `description` for creation and register a new widget.
    ///
    /// Every violated rule is reported at once in
    /// [`RegistryError::BadDescription`].
    pub fn create(&self, description: &WidgetDescription) -> Result<Widget> {
        let _span = tracing::trace_span!(target: targets::SERVICE, span_names::SERVICE, op = "create").entered();
        validate_create(description).inspect_err(|violations| {
            tracing::debug!(target: targets::SERVICE, count = violations.len(), "rejected create");
        })?;
        self.store.add(description)
    }

    /// Look up a widget by id.
    pub fn get(&self, id: WidgetId) -> Result<Widget> {
        self.store.get(id)
    }

    /// Validate `description` for editing and apply it to the widget `id`.
    ///
    /// An invalid description is rejected before the widget is looked up.
    pub fn edit(&self, id: WidgetId, description: &WidgetDescription) -> Result<Widget> {
        let _span = tracing::trace_span!(target: targets::SERVICE, span_names::SERVICE, op = "edit", %id).entered();
        validate_edit(description)?;
        self.store.edit(id, description)
    }

    /// Remove a widget. Returns whether one was removed.
    pub fn delete(&self, id: WidgetId) -> bool {
        self.store.delete(id)
    }

    /// Remove a widget that must exist.
    pub fn delete_existing(&self, id: WidgetId) -> Result<()> {
        if self.store.delete(id) {
            Ok(())
        } else {
            Err(RegistryError::not_found(id))
        }
    }

    /// Every widget, ascending by z.
    pub fn list_all(&self) -> Vec<Widget> {
        let _perf = PerfSpan::new("list_all");
        self.store.list_all()
    }

    /// Every widget as a single page.
    pub fn list_all_paged(&self) -> WidgetPage {
        WidgetPage::whole(self.list_all())
    }

    /// One page of the listing, with absent or out-of-range parameters clamped.
    pub fn list_page(&self, page: Option<i64>, size: Option<i64>) -> WidgetPage {
        let request = PageRequest::from_options(page, size, &self.limits);
        self.store.list_page(request)
    }

    /// Remove every widget.
    pub fn clear(&self) {
        tracing::debug!(target: targets::SERVICE, removed = self.store.len(), "clearing widgets");
        self.store.clear();
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no widgets are registered.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// A consistent view of the whole stack.
    pub fn snapshot(&self) -> ZOrderSnapshot {
        self.store.snapshot()
    }
}

impl Default for WidgetService {
    fn default() -> Self {
        Self::from_config(&ServiceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::validation::Violation;

    fn full() -> WidgetDescription {
        WidgetDescription::new()
            .with_x(0)
            .with_y(0)
            .with_width(8)
            .with_height(8)
    }

    #[test]
    fn test_create_reports_every_violation() {
        let service = WidgetService::default();
        let err = service
            .create(&WidgetDescription::new().with_width(-1))
            .unwrap_err();
        let RegistryError::BadDescription(violations) = err else {
            panic!("expected BadDescription, got {err:?}");
        };
        for violation in [
            Violation::MissingX,
            Violation::MissingY,
            Violation::MissingHeight,
            Violation::NegativeWidth,
        ] {
            assert!(violations.contains(violation), "{violation}");
        }
        assert!(service.is_empty());
    }

    #[test]
    fn test_edit_validates_before_lookup() {
        let service = WidgetService::default();
        let err = service
            .edit(WidgetId::new(), &WidgetDescription::new().with_height(-5))
            .unwrap_err();
        assert!(matches!(err, RegistryError::BadDescription(_)));
    }

    #[test]
    fn test_delete_existing_maps_missing_to_not_found() {
        let service = WidgetService::default();
        let widget = service.create(&full()).unwrap();
        assert_eq!(service.delete_existing(widget.id()), Ok(()));
        assert_eq!(
            service.delete_existing(widget.id()),
            Err(RegistryError::not_found(widget.id()))
        );
    }

    #[test]
    fn test_list_page_uses_configured_limits() {
        let config = ServiceConfig {
            backend: StoreBackend::Snapshot,
            paging: PageLimits {
                default_page_size: 2,
                max_page_size: 3,
            },
        };
        let service = WidgetService::from_config(&config);
        for _ in 0..5 {
            service.create(&full()).unwrap();
        }

        let defaulted = service.list_page(None, None);
        assert_eq!(defaulted.page_size, 2);
        assert_eq!(defaulted.total_pages, 3);

        let capped = service.list_page(Some(1), Some(100));
        assert_eq!(capped.page_size, 3);
        assert_eq!(capped.widgets.len(), 2);
        assert_eq!(service.backend(), StoreBackend::Snapshot);
    }

    #[test]
    fn test_list_all_paged_is_single_page() {
        let service = WidgetService::default();
        for _ in 0..12 {
            service.create(&full()).unwrap();
        }
        let page = service.list_all_paged();
        assert_eq!(page.widgets.len(), 12);
        assert_eq!(page.total_length, 12);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.widgets, service.list_all());
    }

    #[test]
    fn test_clones_share_store() {
        let service = WidgetService::default();
        let clone = service.clone();
        clone.create(&full()).unwrap();
        assert_eq!(service.len(), 1);
        service.clear();
        assert!(clone.is_empty());
    }
}
