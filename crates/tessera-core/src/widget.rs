//! Widget entity model for Tessera.
//!
//! Provides the record type stored by the registry along with the request
//! payload used to create and edit it:
//! - Stable, never-reused identifiers
//! - Position, stacking order and size attributes
//! - Last-modification timestamps that advance on every change
//!
//! # Key Types
//!
//! - [`Widget`] - An axis-aligned, layered box owned by a registry
//! - [`WidgetId`] - Unique stable identifier for each widget
//! - [`WidgetDescription`] - Partial attribute set for create/edit requests
//!
//! # Related Modules
//!
//! - [`crate::validation`] - Checks a description before it reaches a store
//! - [`crate::store`] - Registry backends that own every [`Widget`]

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for a widget.
///
/// Identifiers are random v4 UUIDs generated when the widget is built, so an
/// id is never handed out twice, even after the widget it named is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Generate a fresh identifier.
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for WidgetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A layered, axis-aligned box.
///
/// `id` is fixed for the widget's lifetime. Every other attribute may be
/// changed by the owning store; callers only ever see copies.
///
/// # Related Types
///
/// - [`WidgetDescription`] - Source of the attributes on creation and edit
/// - [`crate::store::WidgetStore`] - Resolves `z` and owns the instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    id: WidgetId,
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Stacking order. Lower values are further back.
    pub z: i32,
    /// Width, never negative.
    pub width: i32,
    /// Height, never negative.
    pub height: i32,
    modified_date: DateTime<Utc>,
}

impl Widget {
    /// Build a new widget from a description.
    ///
    /// Assigns a fresh id and the current instant as `modified_date`. Absent
    /// coordinates and sizes fall back to zero; a validated create description
    /// always carries them. An absent `z` is left at zero for the store's
    /// default placement rule to overwrite.
    pub fn from_description(description: &WidgetDescription) -> Self {
        Self {
            id: WidgetId::new(),
            x: description.x.unwrap_or_default(),
            y: description.y.unwrap_or_default(),
            z: description.z.unwrap_or_default(),
            width: description.width.unwrap_or_default(),
            height: description.height.unwrap_or_default(),
            modified_date: Utc::now(),
        }
    }

    /// The widget's identifier.
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Time of the last creation or mutation.
    #[inline]
    pub fn modified_date(&self) -> DateTime<Utc> {
        self.modified_date
    }

    /// Copy every present geometry attribute (`x`, `y`, `width`, `height`)
    /// from `description`. `z` is left to the store.
    ///
    /// Returns `true` if at least one attribute was present.
    pub(crate) fn apply_geometry(&mut self, description: &WidgetDescription) -> bool {
        let mut changed = false;
        if let Some(x) = description.x {
            self.x = x;
            changed = true;
        }
        if let Some(y) = description.y {
            self.y = y;
            changed = true;
        }
        if let Some(width) = description.width {
            self.width = width;
            changed = true;
        }
        if let Some(height) = description.height {
            self.height = height;
            changed = true;
        }
        changed
    }

    /// Stamp the widget as modified now.
    ///
    /// The new timestamp is always strictly later than the previous one.
    pub(crate) fn touch(&mut self) {
        let floor = self.modified_date + Duration::nanoseconds(1);
        self.modified_date = Utc::now().max(floor);
    }
}

/// A request payload describing some or all widget attributes.
///
/// Every field is optional; an absent field is distinct from zero. On create
/// the geometry fields are mandatory (see [`crate::validation`]), on edit an
/// absent field leaves the attribute unchanged.
///
/// # Example
///
/// ```
/// use tessera_core::WidgetDescription;
///
/// let description = WidgetDescription::new()
///     .with_x(10)
///     .with_y(20)
///     .with_width(100)
///     .with_height(50);
///
/// assert_eq!(description.z, None);
/// assert!(!description.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetDescription {
    /// X coordinate.
    pub x: Option<i32>,
    /// Y coordinate.
    pub y: Option<i32>,
    /// Requested stacking order.
    pub z: Option<i32>,
    /// Width.
    pub width: Option<i32>,
    /// Height.
    pub height: Option<i32>,
}

impl WidgetDescription {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the X coordinate.
    pub fn with_x(mut self, x: i32) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the Y coordinate.
    pub fn with_y(mut self, y: i32) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the requested stacking order.
    pub fn with_z(mut self, z: i32) -> Self {
        self.z = Some(z);
        self
    }

    /// Set the width.
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height.
    pub fn with_height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    /// Whether no attribute is present at all.
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.z.is_none()
            && self.width.is_none()
            && self.height.is_none()
    }
}
