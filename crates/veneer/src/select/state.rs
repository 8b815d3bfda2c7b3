//! Widget state and the owned state record shared by the select components.

use super::expansion::Expansion;
use super::option::{OptionSet, SelectOption};
use super::sync::SelectTarget;
use crate::error::{Error, Result};

/// Mutable interaction state of one widget instance.
///
/// `selected_index` always points into the instance's [`OptionSet`]; there is
/// no "nothing selected" state. `disabled` only ever goes from `false` to
/// `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetState {
    expansion: Expansion,
    disabled: bool,
    focused: bool,
    selected_index: usize,
}

impl WidgetState {
    pub(crate) fn new(selected_index: usize, disabled: bool) -> Self {
        Self {
            expansion: Expansion::Closed,
            disabled,
            focused: false,
            selected_index,
        }
    }

    /// Current expansion state.
    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// Whether the option list is visible.
    pub fn is_expanded(&self) -> bool {
        self.expansion.is_open()
    }

    /// Whether the widget refuses input.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the widget holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Index of the selected option.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub(crate) fn set_expansion(&mut self, expansion: Expansion) {
        self.expansion = expansion;
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub(crate) fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    /// Latch the disabled flag. Returns `true` if it was not already set.
    pub(crate) fn latch_disabled(&mut self) -> bool {
        !std::mem::replace(&mut self.disabled, true)
    }
}

/// The single owned state record of a widget: its options plus its state.
///
/// Every component that reads or changes selection receives this record
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectModel {
    options: OptionSet,
    state: WidgetState,
}

impl SelectModel {
    /// Create the record, selecting the option set's initial index.
    pub fn new(options: OptionSet, disabled: bool) -> Self {
        let state = WidgetState::new(options.initial_index(), disabled);
        Self { options, state }
    }

    /// The options.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// The interaction state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    /// The selected option.
    pub fn selected_option(&self) -> &SelectOption {
        // selected_index is kept in bounds by every writer.
        &self.options[self.state.selected_index]
    }

    /// Whether the option at `index` is the selected one.
    pub fn is_selected(&self, index: usize) -> bool {
        self.state.selected_index == index
    }

    /// Resolve a selection target to an index into the options.
    pub fn resolve(&self, target: &SelectTarget) -> Result<usize> {
        match target {
            SelectTarget::Index(index) if *index < self.options.len() => Ok(*index),
            SelectTarget::Index(index) => {
                Err(Error::index_out_of_range(*index, self.options.len()))
            }
            SelectTarget::Value(value) => self
                .options
                .position_of_value(value)
                .ok_or_else(|| Error::unknown_value(value.clone())),
        }
    }
}
