//! Validation of widget descriptions.
//!
//! Descriptions are checked before they reach a store. Every violated rule is
//! collected so a caller sees all problems in one response:
//!
//! ```
//! use tessera_core::validation::{validate_create, Violation};
//! use tessera_core::WidgetDescription;
//!
//! let description = WidgetDescription::new().with_y(1).with_width(2).with_height(-3);
//! let violations = validate_create(&description).unwrap_err();
//!
//! assert!(violations.contains(Violation::MissingX));
//! assert!(violations.contains(Violation::NegativeHeight));
//! assert_eq!(violations.len(), 2);
//! ```

use std::fmt;

use crate::widget::WidgetDescription;

/// A single violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// `x` is required on create.
    MissingX,
    /// `y` is required on create.
    MissingY,
    /// `width` is required on create.
    MissingWidth,
    /// `height` is required on create.
    MissingHeight,
    /// `width` was present and negative.
    NegativeWidth,
    /// `height` was present and negative.
    NegativeHeight,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingX => write!(f, "x must be specified"),
            Self::MissingY => write!(f, "y must be specified"),
            Self::MissingWidth => write!(f, "width must be specified"),
            Self::MissingHeight => write!(f, "height must be specified"),
            Self::NegativeWidth => write!(f, "width must not be less than 0"),
            Self::NegativeHeight => write!(f, "height must not be less than 0"),
        }
    }
}

/// Every rule a description violated, in check order.
///
/// Displays as a header line followed by one line per violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Whether no rule was violated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of violated rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `violation` was recorded.
    pub fn contains(&self, violation: Violation) -> bool {
        self.0.contains(&violation)
    }

    /// Iterate over the recorded violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Violations> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid widget description:")?;
        for violation in &self.0 {
            write!(f, "\n{violation}")?;
        }
        Ok(())
    }
}

/// Check a description for creating a widget.
///
/// `x`, `y`, `width` and `height` must be present, and the edit rules apply
/// on top.
pub fn validate_create(description: &WidgetDescription) -> Result<(), Violations> {
    let mut violations = Violations::new();
    if description.x.is_none() {
        violations.push(Violation::MissingX);
    }
    if description.y.is_none() {
        violations.push(Violation::MissingY);
    }
    if description.width.is_none() {
        violations.push(Violation::MissingWidth);
    }
    if description.height.is_none() {
        violations.push(Violation::MissingHeight);
    }
    check_sizes(description, &mut violations);
    violations.into_result()
}

/// Check a description for editing a widget. No field is mandatory.
pub fn validate_edit(description: &WidgetDescription) -> Result<(), Violations> {
    let mut violations = Violations::new();
    check_sizes(description, &mut violations);
    violations.into_result()
}

fn check_sizes(description: &WidgetDescription, violations: &mut Violations) {
    if description.height.is_some_and(|h| h < 0) {
        violations.push(Violation::NegativeHeight);
    }
    if description.width.is_some_and(|w| w < 0) {
        violations.push(Violation::NegativeWidth);
    }
}
