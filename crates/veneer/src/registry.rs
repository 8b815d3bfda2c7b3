//! Registry of independent select widgets.
//!
//! A page usually enhances every native select it contains. Each instance
//! owns its own state record; the registry only maps stable ids to widgets
//! so hosts can route input to the right one.

use slotmap::{new_key_type, SlotMap};
use veneer_core::logging::targets;

use crate::config::SelectConfig;
use crate::error::{Error, Result};
use crate::events::SelectEvent;
use crate::select::{CustomSelect, NativeControl, Renderer};

new_key_type! {
    /// A unique identifier for a widget in a [`SelectRegistry`].
    ///
    /// Ids stay valid until the widget is destroyed and are never reused for
    /// another widget.
    pub struct SelectId;
}

impl SelectId {
    /// Convert the id to a raw u64 value, e.g. to tag a host element.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Recreate an id from [`as_raw`](Self::as_raw).
    ///
    /// Does not check that the id is registered.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// Owns any number of [`CustomSelect`] instances.
///
/// # Example
///
/// ```
/// use veneer::events::SelectEvent;
/// use veneer::{NativeSelect, RecordingRenderer, SelectConfig, SelectRegistry};
///
/// let mut registry = SelectRegistry::new();
/// let fruit = registry.enhance(
///     NativeSelect::new().with_entry("a", "Apple").with_entry("b", "Banana"),
///     RecordingRenderer::new(),
///     SelectConfig::default(),
/// )?;
///
/// assert!(registry.dispatch(fruit, &mut SelectEvent::trigger_press())?);
/// assert!(registry.get(fruit)?.is_expanded());
/// # Ok::<(), veneer::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct SelectRegistry {
    widgets: SlotMap<SelectId, CustomSelect>,
}

impl SelectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
        }
    }

    /// Enhance a native control and register the resulting widget.
    ///
    /// # Errors
    ///
    /// Propagates construction errors from [`CustomSelect::new`].
    pub fn enhance(
        &mut self,
        native: impl NativeControl + 'static,
        renderer: impl Renderer + 'static,
        config: SelectConfig,
    ) -> Result<SelectId> {
        let widget = CustomSelect::new(native, renderer, config)?;
        Ok(self.insert(widget))
    }

    /// Register an already constructed widget.
    pub fn insert(&mut self, widget: CustomSelect) -> SelectId {
        let id = self.widgets.insert(widget);
        tracing::trace!(target: targets::SELECT, ?id, "registered select");
        id
    }

    /// Look up a widget.
    pub fn get(&self, id: SelectId) -> Result<&CustomSelect> {
        self.widgets.get(id).ok_or(Error::UnknownWidget)
    }

    /// Look up a widget mutably.
    pub fn get_mut(&mut self, id: SelectId) -> Result<&mut CustomSelect> {
        self.widgets.get_mut(id).ok_or(Error::UnknownWidget)
    }

    /// Route an event to one widget. Returns whether it was handled.
    pub fn dispatch(&mut self, id: SelectId, event: &mut SelectEvent) -> Result<bool> {
        Ok(self.get_mut(id)?.dispatch(event))
    }

    /// Apply the disable signal to one widget.
    pub fn disable(&mut self, id: SelectId) -> Result<bool> {
        Ok(self.get_mut(id)?.disable())
    }

    /// Tear a widget down, handing it back to the caller.
    pub fn destroy(&mut self, id: SelectId) -> Option<CustomSelect> {
        let widget = self.widgets.remove(id);
        if widget.is_some() {
            tracing::trace!(target: targets::SELECT, ?id, "destroyed select");
        }
        widget
    }

    /// Whether `id` names a live widget.
    pub fn contains(&self, id: SelectId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the registry holds no widgets.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Ids of all live widgets.
    pub fn ids(&self) -> impl Iterator<Item = SelectId> + '_ {
        self.widgets.keys()
    }
}

static_assertions::assert_impl_all!(SelectRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Key;
    use crate::select::{NativeSelect, RecordingRenderer};

    fn enhance(registry: &mut SelectRegistry, values: &[&str]) -> SelectId {
        let native = values
            .iter()
            .fold(NativeSelect::new(), |native, v| native.with_entry(*v, v.to_uppercase()));
        registry
            .enhance(native, RecordingRenderer::new(), SelectConfig::default())
            .unwrap()
    }

    #[test]
    fn test_instances_are_independent() {
        let mut registry = SelectRegistry::new();
        let first = enhance(&mut registry, &["a", "b"]);
        let second = enhance(&mut registry, &["x", "y", "z"]);

        registry
            .dispatch(first, &mut SelectEvent::key_press(Key::ArrowDown))
            .unwrap();
        registry.disable(second).unwrap();

        assert_eq!(registry.get(first).unwrap().selected_index(), 1);
        assert!(!registry.get(first).unwrap().is_disabled());
        assert_eq!(registry.get(second).unwrap().selected_index(), 0);
        assert!(registry.get(second).unwrap().is_disabled());
    }

    #[test]
    fn test_destroy_invalidates_id() {
        let mut registry = SelectRegistry::new();
        let id = enhance(&mut registry, &["a"]);
        assert_eq!(registry.len(), 1);

        let widget = registry.destroy(id).unwrap();
        assert_eq!(widget.current_label(), "A");
        assert!(registry.is_empty());
        assert!(!registry.contains(id));
        assert!(matches!(registry.get(id), Err(Error::UnknownWidget)));
        assert!(matches!(
            registry.dispatch(id, &mut SelectEvent::trigger_press()),
            Err(Error::UnknownWidget)
        ));
        assert!(registry.destroy(id).is_none());
    }

    #[test]
    fn test_enhance_propagates_errors() {
        let mut registry = SelectRegistry::new();
        let result = registry.enhance(
            NativeSelect::new(),
            RecordingRenderer::new(),
            SelectConfig::default(),
        );
        assert!(matches!(result, Err(Error::EmptyOptions)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_raw_id_round_trip() {
        let mut registry = SelectRegistry::new();
        let id = enhance(&mut registry, &["a"]);
        assert_eq!(SelectId::from_raw(id.as_raw()), id);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec![id]);
    }
}
