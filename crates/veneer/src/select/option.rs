//! Option model built from the native control's entries.

use std::ops::Index;

use veneer_core::OptionListDebug;

use crate::error::{Error, Result};

/// One entry as read from the native control, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeEntry {
    /// The value submitted with the form.
    pub value: String,
    /// The text shown to the user.
    pub label: String,
    /// Whether the native control marks this entry as selected.
    pub selected: bool,
}

impl NativeEntry {
    /// Create an unselected entry.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    /// Create an entry the native control marks as selected.
    pub fn selected(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            selected: true,
            ..Self::new(value, label)
        }
    }
}

/// A selectable option. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    value: String,
    label: String,
}

impl SelectOption {
    /// The value committed to the native control when this option is picked.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The text shown for this option and on the trigger once selected.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered, non-empty list of options.
///
/// Navigation order is document order. The set remembers which index the
/// native control had selected when it was built; the live selection pointer
/// is owned by [`WidgetState`](super::WidgetState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<SelectOption>,
    initial: usize,
}

impl OptionSet {
    /// Build an option set from native entries.
    ///
    /// When several entries are marked selected the last one wins, matching
    /// native single-select semantics. When none is marked, the first option
    /// is selected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyOptions`] if `entries` is empty.
    pub fn build(entries: impl IntoIterator<Item = NativeEntry>) -> Result<Self> {
        let mut options = Vec::new();
        let mut initial = 0;

        for (index, entry) in entries.into_iter().enumerate() {
            if entry.selected {
                initial = index;
            }
            options.push(SelectOption {
                value: entry.value,
                label: entry.label,
            });
        }

        if options.is_empty() {
            return Err(Error::EmptyOptions);
        }

        Ok(Self { options, initial })
    }

    /// Number of options. Always at least one.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always `false`; an option set is never empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index of the option selected when the set was built.
    pub fn initial_index(&self) -> usize {
        self.initial
    }

    /// Get the option at `index`.
    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// Iterate over the options in document order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Index of the first option carrying `value`.
    pub fn position_of_value(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }

    /// Index of the last option.
    pub fn last_index(&self) -> usize {
        self.options.len() - 1
    }

    /// Format the options with `selected` marked, for debug output.
    pub fn debug_list(&self, selected: usize) -> String {
        OptionListDebug::new().format(
            self.options
                .iter()
                .enumerate()
                .map(|(index, option)| (option.value(), option.label(), index == selected)),
        )
    }
}

impl Index<usize> for OptionSet {
    type Output = SelectOption;

    fn index(&self, index: usize) -> &SelectOption {
        &self.options[index]
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits(selected: Option<usize>) -> Vec<NativeEntry> {
        [("a", "Apple"), ("b", "Banana"), ("c", "Cherry")]
            .into_iter()
            .enumerate()
            .map(|(i, (value, label))| {
                if Some(i) == selected {
                    NativeEntry::selected(value, label)
                } else {
                    NativeEntry::new(value, label)
                }
            })
            .collect()
    }

    #[test]
    fn test_build_preserves_order() {
        let set = OptionSet::build(fruits(None)).unwrap();
        let labels: Vec<&str> = set.iter().map(SelectOption::label).collect();
        assert_eq!(labels, ["Apple", "Banana", "Cherry"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.last_index(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_build_defaults_to_first() {
        let set = OptionSet::build(fruits(None)).unwrap();
        assert_eq!(set.initial_index(), 0);
    }

    #[test]
    fn test_build_uses_marked_entry() {
        let set = OptionSet::build(fruits(Some(1))).unwrap();
        assert_eq!(set.initial_index(), 1);
    }

    #[test]
    fn test_build_last_marked_wins() {
        let mut entries = fruits(Some(0));
        entries[2].selected = true;
        let set = OptionSet::build(entries).unwrap();
        assert_eq!(set.initial_index(), 2);
    }

    #[test]
    fn test_build_rejects_empty() {
        let err = OptionSet::build(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyOptions));
    }

    #[test]
    fn test_position_of_value_returns_first_match() {
        let mut entries = fruits(None);
        entries.push(NativeEntry::new("a", "Apricot"));
        let set = OptionSet::build(entries).unwrap();
        assert_eq!(set.position_of_value("a"), Some(0));
        assert_eq!(set.position_of_value("z"), None);
    }

    #[test]
    fn test_debug_list_marks_selection() {
        let set = OptionSet::build(fruits(None)).unwrap();
        assert!(set.debug_list(2).contains("▸ [2] c = Cherry"));
    }
}
