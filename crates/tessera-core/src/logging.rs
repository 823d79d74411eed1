//! Logging and debugging facilities for Tessera.
//!
//! This module provides:
//! - Target and span names for filtering the crate's `tracing` output
//! - Debug visualization of a z-ordered widget stack
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Tessera uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("tessera_core::store=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! # Debug Visualization
//!
//! Use [`StackDebug`] to dump the current stacking order:
//!
//! ```
//! use tessera_core::logging::StackDebug;
//! use tessera_core::store::{LockedWidgetStore, WidgetStore};
//!
//! let store = LockedWidgetStore::new();
//! let snapshot = store.snapshot();
//! println!("{}", StackDebug::new().format(snapshot.widgets()));
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::widget::Widget;
use crate::zstack::{is_dense, is_strictly_ordered};

/// Span names used throughout Tessera for tracing.
pub mod span_names {
    /// Copy-and-publish span of the snapshot store.
    pub const STORE: &str = "tessera::store";
    /// Service call span.
    pub const SERVICE: &str = "tessera::service";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Z-stack insertion/relocation target.
    pub const ZSTACK: &str = "tessera_core::zstack";
    /// Store backends target.
    pub const STORE: &str = "tessera_core::store";
    /// Service layer target.
    pub const SERVICE: &str = "tessera::service";
    /// Configuration target.
    pub const CONFIG: &str = "tessera::config";
}

/// Shape of a stack's z values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackHealth {
    /// Exactly `0..len`, ascending.
    Dense,
    /// Strictly ascending with gaps left by deletes.
    Gapped,
    /// Duplicate or descending z values. Never expected.
    Unordered,
}

impl StackHealth {
    /// Classify an ordered widget sequence.
    pub fn of(widgets: &[Widget]) -> Self {
        if !is_strictly_ordered(widgets) {
            Self::Unordered
        } else if is_dense(widgets) {
            Self::Dense
        } else {
            Self::Gapped
        }
    }
}

impl fmt::Display for StackHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense => write!(f, "dense"),
            Self::Gapped => write!(f, "gapped"),
            Self::Unordered => write!(f, "UNORDERED"),
        }
    }
}

/// Style options for stack visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackStyle {
    /// One widget per line with geometry.
    #[default]
    Table,
    /// A single line of `z:id` pairs.
    Compact,
}

/// Configuration for stack debug output.
#[derive(Debug, Clone)]
pub struct StackFormatOptions {
    /// The style of visualization.
    pub style: StackStyle,
    /// Whether to show widget ids.
    pub show_ids: bool,
    /// Whether to show modification timestamps.
    pub show_dates: bool,
    /// Maximum number of widgets to print (None for unlimited).
    pub max_rows: Option<usize>,
}

impl Default for StackFormatOptions {
    fn default() -> Self {
        Self {
            style: StackStyle::default(),
            show_ids: true,
            show_dates: false,
            max_rows: None,
        }
    }
}

impl StackFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_dates: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            style: StackStyle::Compact,
            show_ids: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing a z-ordered widget stack.
#[derive(Debug, Clone, Default)]
pub struct StackDebug {
    options: StackFormatOptions,
}

impl StackDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: StackFormatOptions) -> Self {
        Self { options }
    }

    /// Format `widgets`, back to front.
    pub fn format(&self, widgets: &[Widget]) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_stack(widgets, &mut output);
        output
    }

    fn write_stack(&self, widgets: &[Widget], output: &mut String) -> fmt::Result {
        writeln!(
            output,
            "Widget Stack ({} widgets, {}):",
            widgets.len(),
            StackHealth::of(widgets)
        )?;

        if widgets.is_empty() {
            return writeln!(output, "  (empty)");
        }

        let shown = self.options.max_rows.unwrap_or(widgets.len()).min(widgets.len());
        match self.options.style {
            StackStyle::Table => {
                for widget in &widgets[..shown] {
                    write!(
                        output,
                        "  z={:<4} pos=({}, {}) size={}x{}",
                        widget.z, widget.x, widget.y, widget.width, widget.height
                    )?;
                    if self.options.show_ids {
                        write!(output, " [{}]", widget.id())?;
                    }
                    if self.options.show_dates {
                        write!(output, " @ {}", widget.modified_date().to_rfc3339())?;
                    }
                    output.push('\n');
                }
            }
            StackStyle::Compact => {
                output.push_str("  ");
                for (i, widget) in widgets[..shown].iter().enumerate() {
                    if i > 0 {
                        output.push_str(", ");
                    }
                    if self.options.show_ids {
                        write!(output, "{}:{}", widget.z, widget.id())?;
                    } else {
                        write!(output, "{}", widget.z)?;
                    }
                }
                output.push('\n');
            }
        }

        if shown < widgets.len() {
            writeln!(output, "  ... {} more", widgets.len() - shown)?;
        }
        Ok(())
    }
}

/// A guard that emits a tracing span when dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "tessera::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetDescription;
    use crate::zstack::{Placement, ZStack};

    fn stack(count: usize) -> ZStack {
        let mut stack = ZStack::new();
        for i in 0..count {
            let description = WidgetDescription::new()
                .with_x(i as i32)
                .with_y(0)
                .with_width(10)
                .with_height(5);
            stack
                .insert(crate::widget::Widget::from_description(&description), Placement::Top)
                .unwrap();
        }
        stack
    }

    #[test]
    fn test_stack_format_empty() {
        let output = StackDebug::new().format(&[]);
        assert!(output.contains("Widget Stack (0 widgets, dense)"));
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_stack_format_table() {
        let stack = stack(2);
        let output = StackDebug::new().format(stack.as_slice());
        assert!(output.contains("z=0"));
        assert!(output.contains("z=1"));
        assert!(output.contains(&stack.as_slice()[0].id().to_string()));
    }

    #[test]
    fn test_stack_format_minimal() {
        let stack = stack(3);
        let output = StackDebug::with_options(StackFormatOptions::minimal()).format(stack.as_slice());
        assert!(output.contains("0, 1, 2"));
        assert!(!output.contains('['));
    }

    #[test]
    fn test_stack_format_truncates() {
        let stack = stack(5);
        let options = StackFormatOptions {
            max_rows: Some(2),
            ..Default::default()
        };
        let output = StackDebug::with_options(options).format(stack.as_slice());
        assert!(output.contains("... 3 more"));
    }

    #[test]
    fn test_stack_health() {
        let mut stack = stack(3);
        assert_eq!(StackHealth::of(stack.as_slice()), StackHealth::Dense);

        let middle = stack.as_slice()[1].id();
        stack.remove(middle);
        assert_eq!(StackHealth::of(stack.as_slice()), StackHealth::Gapped);
    }

    #[test]
    fn test_perf_span() {
        // Just ensure it compiles and doesn't panic
        let _span = PerfSpan::new("test_operation");
    }
}
