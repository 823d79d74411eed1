//! The z-ordered widget sequence.
//!
//! [`ZStack`] holds widgets sorted by ascending `z` and implements the
//! insertion, removal and relocation rules shared by every store backend.
//! It performs no locking of its own; stores wrap it in whatever
//! synchronization their read/write strategy calls for.
//!
//! # Insertion
//!
//! A widget is placed either on top (`z = max + 1`, or `0` when empty) or at
//! an explicit slot. Negative slots become `0`, and a slot at or past `len`
//! is the same as placing on top. Otherwise every widget at or above the slot moves up by one
//! and the new widget takes the slot, so a stack built only from inserts always
//! holds exactly the values `0..len`.
//!
//! Relocating a widget (an edit that changes `z`) first closes the hole it
//! leaves by moving every widget above it down by one, then re-inserts it.
//! Plain removal never renumbers the remaining widgets, so deletes may leave
//! gaps. Ordering stays strict either way.

use crate::error::{RegistryError, Result};
use crate::logging::targets;
use crate::widget::{Widget, WidgetDescription, WidgetId};

/// Where an inserted widget should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Above every existing widget.
    Top,
    /// At the requested z, clamped to `0..=len`.
    Slot(i32),
}

impl Placement {
    /// Placement requested by a description's optional `z`.
    pub fn from_requested(z: Option<i32>) -> Self {
        z.map_or(Self::Top, Self::Slot)
    }
}

/// Widgets ordered by strictly ascending `z`.
#[derive(Debug, Clone, Default)]
pub struct ZStack {
    widgets: Vec<Widget>,
}

impl ZStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an already ordered sequence.
    pub(crate) fn from_ordered(widgets: Vec<Widget>) -> Self {
        debug_assert!(is_strictly_ordered(&widgets));
        Self { widgets }
    }

    /// Give up the ordered sequence.
    pub(crate) fn into_vec(self) -> Vec<Widget> {
        self.widgets
    }

    /// The widgets in ascending `z` order.
    pub fn as_slice(&self) -> &[Widget] {
        &self.widgets
    }

    /// Number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the stack holds no widgets.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Look up a widget by id.
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    fn position(&self, id: WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| w.id() == id)
    }

    /// The z just above the current top, or `0` when empty.
    fn above_top(&self) -> Result<i32> {
        match self.widgets.last() {
            None => Ok(0),
            Some(top) => top.z.checked_add(1).ok_or_else(|| self.overflow(top.z)),
        }
    }

    fn overflow(&self, slot: i32) -> RegistryError {
        tracing::error!(target: targets::ZSTACK, slot, len = self.widgets.len(), "z value overflow");
        RegistryError::InvariantViolation {
            slot,
            len: self.widgets.len(),
        }
    }

    /// Resolve a placement to the z the widget will receive.
    ///
    /// A slot at or past the widget count means "on top", which after a
    /// delete may be higher than the count itself.
    fn resolve(&self, placement: Placement) -> Result<i32> {
        match placement {
            Placement::Top => self.above_top(),
            Placement::Slot(requested) => {
                if usize::try_from(requested).is_ok_and(|slot| slot >= self.widgets.len()) {
                    self.above_top()
                } else {
                    Ok(requested.max(0))
                }
            }
        }
    }

    /// Insert `widget` at `placement`, shifting widgets above it.
    ///
    /// Returns a copy of the stored widget with its resolved `z`. On error
    /// the stack is left unchanged.
    pub fn insert(&mut self, mut widget: Widget, placement: Placement) -> Result<Widget> {
        let slot = self.resolve(placement)?;
        widget.z = slot;

        let append = match self.widgets.last() {
            None => true,
            Some(top) => slot > top.z,
        };
        if append {
            tracing::trace!(target: targets::ZSTACK, id = %widget.id(), z = slot, "appended widget");
            self.widgets.push(widget.clone());
            return Ok(widget);
        }

        let Some(index) = self.widgets.iter().position(|w| w.z >= slot) else {
            tracing::error!(target: targets::ZSTACK, slot, len = self.widgets.len(), "no insertion point for non-trailing slot");
            return Err(RegistryError::InvariantViolation {
                slot,
                len: self.widgets.len(),
            });
        };

        // Shifting up only ever overflows at the top widget.
        self.above_top()?;
        self.shift_from(index, 1);
        tracing::trace!(
            target: targets::ZSTACK,
            id = %widget.id(),
            z = slot,
            shifted = self.widgets.len() - index,
            "inserted widget"
        );
        self.widgets.insert(index, widget.clone());
        debug_assert!(is_strictly_ordered(&self.widgets));
        Ok(widget)
    }

    /// Apply `description` to the widget with `id`.
    ///
    /// Present geometry fields are overwritten. A present `z` that differs
    /// from the current one relocates the widget: it is taken out, the hole it
    /// leaves is closed, and it is re-inserted at the new slot. A slot at or
    /// past the remaining count puts it on top. Any present field, including
    /// an unchanged `z`, advances `modified_date`. If re-insertion fails the
    /// stack is restored.
    pub fn edit(&mut self, id: WidgetId, description: &WidgetDescription) -> Result<Widget> {
        let index = self.position(id).ok_or(RegistryError::NotFound { id })?;

        let mut updated = self.widgets[index].clone();
        let changed = updated.apply_geometry(description) | description.z.is_some();
        if changed {
            updated.touch();
        }

        match description.z {
            Some(z) if z != updated.z => {
                tracing::trace!(target: targets::ZSTACK, %id, from = updated.z, to = z, "relocating widget");
                let original = self.widgets.remove(index);
                self.shift_from(index, -1);
                // Closing the hole leaves room for one more widget, so on an
                // ordered stack this re-insert cannot fail.
                match self.insert(updated, Placement::Slot(z)) {
                    Ok(stored) => Ok(stored),
                    Err(err) => {
                        self.shift_from(index, 1);
                        self.widgets.insert(index, original);
                        Err(err)
                    }
                }
            }
            _ => {
                self.widgets[index] = updated.clone();
                Ok(updated)
            }
        }
    }

    /// Add `delta` to the z of every widget from `index` upwards.
    ///
    /// Callers check for overflow first; moving down after a removal cannot
    /// underflow because every shifted z sits above the removed one.
    fn shift_from(&mut self, index: usize, delta: i32) {
        for widget in &mut self.widgets[index..] {
            widget.z += delta;
        }
    }

    /// Remove the widget with `id`. Remaining widgets keep their `z`.
    pub fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        let index = self.position(id)?;
        let removed = self.widgets.remove(index);
        tracing::trace!(target: targets::ZSTACK, %id, z = removed.z, "removed widget");
        Some(removed)
    }

    /// Remove every widget.
    pub fn clear(&mut self) {
        self.widgets.clear();
    }

    /// Whether `z` strictly increases along the stack.
    pub fn is_strictly_ordered(&self) -> bool {
        is_strictly_ordered(&self.widgets)
    }

    /// Whether the stack holds exactly the z values `0..len`.
    pub fn is_dense(&self) -> bool {
        is_dense(&self.widgets)
    }
}

/// Whether `z` strictly increases along `widgets`.
pub fn is_strictly_ordered(widgets: &[Widget]) -> bool {
    widgets.windows(2).all(|pair| pair[0].z < pair[1].z)
}

/// Whether `widgets` hold exactly the z values `0..len`, in order.
pub fn is_dense(widgets: &[Widget]) -> bool {
    widgets
        .iter()
        .enumerate()
        .all(|(index, w)| usize::try_from(w.z).is_ok_and(|z| z == index))
}
