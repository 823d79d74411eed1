//! Prelude module for Tessera.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use tessera::prelude::*;
//! ```
//!
//! This provides access to:
//! - The service facade and its configuration (`WidgetService`, `ServiceConfig`)
//! - The widget model (`Widget`, `WidgetId`, `WidgetDescription`)
//! - Store backends (`WidgetStore`, `StoreBackend`)
//! - Paging and errors (`WidgetPage`, `RegistryError`)

// ============================================================================
// Service
// ============================================================================

pub use crate::config::{ConfigError, ServiceConfig};
pub use crate::service::WidgetService;

// ============================================================================
// Widget Model
// ============================================================================

pub use tessera_core::widget::{Widget, WidgetDescription, WidgetId};

// ============================================================================
// Stores
// ============================================================================

pub use tessera_core::store::{StoreBackend, WidgetStore, ZOrderSnapshot};

// ============================================================================
// Paging, Validation and Errors
// ============================================================================

pub use tessera_core::page::{PageLimits, WidgetPage};
pub use tessera_core::validation::{Violation, Violations};
pub use tessera_core::{RegistryError, Result};
