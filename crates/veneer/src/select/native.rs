//! Native control adapter.
//!
//! The native control stays the authoritative holder of the selected value:
//! forms submit it and other page logic listens to it. The widget reads it
//! once at construction and afterwards only ever writes to it through
//! [`NativeControl::commit`].

use veneer_core::logging::targets;
use veneer_core::Signal;

use super::option::{NativeEntry, OptionSet};
use crate::error::Result;

/// Read/write access to the underlying native selection control.
///
/// Implement this for the host's real element. [`NativeSelect`] is an
/// in-memory implementation for hosts that keep the control's state
/// themselves, and for tests.
pub trait NativeControl: Send + Sync {
    /// Whether the native control is disabled.
    fn read_disabled(&self) -> bool;

    /// The control's entries in document order.
    fn entries(&self) -> Vec<NativeEntry>;

    /// The control's current value, or `None` when unset.
    fn value(&self) -> Option<String>;

    /// Write a new selection into the control.
    ///
    /// Implementations must clear every previously marked entry, mark the
    /// entry whose value equals `value`, and set the control's current value
    /// to `value`. When no entry matches, the current value is left unset.
    ///
    /// Only the value is committed, not a position. If several entries carry
    /// `value`, the first of them in document order is marked, which may not
    /// be the entry the widget selected.
    fn commit(&mut self, value: &str);

    /// Build the option model from the control's entries.
    fn read_initial_selection(&self) -> Result<OptionSet> {
        OptionSet::build(self.entries())
    }
}

/// An in-memory native selection control.
///
/// # Signals
///
/// - `value_changed(String)`: Emitted when a commit changes the current value
///
/// # Example
///
/// ```
/// use veneer::{NativeControl, NativeSelect};
///
/// let mut native = NativeSelect::new()
///     .with_entry("a", "Apple")
///     .with_selected_entry("b", "Banana");
///
/// assert_eq!(native.value().as_deref(), Some("b"));
/// native.commit("a");
/// assert_eq!(native.value().as_deref(), Some("a"));
/// ```
#[derive(Debug, Default)]
pub struct NativeSelect {
    entries: Vec<NativeEntry>,
    value: Option<String>,
    disabled: bool,

    /// Signal emitted when a commit changes the current value.
    pub value_changed: Signal<String>,
}

impl NativeSelect {
    /// Create a control with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a control from a list of entries.
    pub fn from_entries(entries: impl IntoIterator<Item = NativeEntry>) -> Self {
        let mut native = Self::new();
        native.entries = entries.into_iter().collect();
        native.value = Self::natural_value(&native.entries);
        native
    }

    /// Add an unselected entry using builder pattern.
    pub fn with_entry(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.push(NativeEntry::new(value, label))
    }

    /// Add a selected entry using builder pattern.
    pub fn with_selected_entry(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.push(NativeEntry::selected(value, label))
    }

    /// Set the disabled flag using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn push(mut self, entry: NativeEntry) -> Self {
        self.entries.push(entry);
        self.value = Self::natural_value(&self.entries);
        self
    }

    /// The value a single-select control reports before anyone commits:
    /// the last marked entry, else the first entry.
    fn natural_value(entries: &[NativeEntry]) -> Option<String> {
        entries
            .iter()
            .rev()
            .find(|entry| entry.selected)
            .or_else(|| entries.first())
            .map(|entry| entry.value.clone())
    }

    /// Set the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Indices of the entries currently marked selected.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.selected)
            .map(|(index, _)| index)
            .collect()
    }
}

impl NativeControl for NativeSelect {
    fn read_disabled(&self) -> bool {
        self.disabled
    }

    fn entries(&self) -> Vec<NativeEntry> {
        self.entries.clone()
    }

    fn value(&self) -> Option<String> {
        self.value.clone()
    }

    fn commit(&mut self, value: &str) {
        for entry in &mut self.entries {
            entry.selected = false;
        }

        let previous = self.value.take();
        match self.entries.iter_mut().find(|entry| entry.value == value) {
            Some(entry) => {
                entry.selected = true;
                self.value = Some(entry.value.clone());
            }
            None => {
                tracing::warn!(
                    target: targets::NATIVE,
                    value,
                    "commit named a value no entry carries; native value left unset"
                );
                return;
            }
        }

        tracing::debug!(target: targets::NATIVE, value, "native control committed");
        if previous.as_deref() != Some(value) {
            self.value_changed.emit(value.to_string());
        }
    }
}

static_assertions::assert_impl_all!(NativeSelect: Send, Sync);
