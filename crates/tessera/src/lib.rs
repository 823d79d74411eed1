//! Tessera - an ordered registry of rectangular widgets.
//!
//! This is the main umbrella crate. It re-exports every public API of
//! `tessera-core` and adds the [`WidgetService`] facade together with its
//! TOML [configuration](config).
//!
//! # Example
//!
//! ```
//! use tessera::{ServiceConfig, WidgetDescription, WidgetService};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = WidgetService::from_config(&ServiceConfig::default());
//!     let base = WidgetDescription::new().with_x(0).with_y(0).with_width(4).with_height(3);
//!
//!     let back = service.create(&base)?;
//!     let front = service.create(&base)?;
//!     service.edit(back.id(), &WidgetDescription::new().with_z(1))?;
//!
//!     let order: Vec<_> = service.list_all().iter().map(|w| w.id()).collect();
//!     assert_eq!(order, vec![front.id(), back.id()]);
//!     Ok(())
//! }
//! ```

pub use tessera_core::*;

pub mod config;
pub mod prelude;
pub mod service;

pub use config::{ConfigError, ServiceConfig};
pub use service::WidgetService;
