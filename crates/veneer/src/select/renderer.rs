//! Renderer collaborator interface.
//!
//! The widget never draws anything itself. It tells a [`Renderer`] what
//! changed, in the order the change happened, and never reads anything back.
//! Every notification arrives after the native control already holds the
//! value the notification describes.

use std::sync::Arc;

use parking_lot::Mutex;

use super::state::SelectModel;
use crate::config::SelectConfig;

/// Opaque handle a renderer returns for the presentation it materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(u64);

impl RenderHandle {
    /// Wrap a renderer-defined raw handle.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Presentation side of a select widget.
///
/// All methods are side-effecting notifications. Implementations must not
/// call back into the widget.
pub trait Renderer: Send + Sync {
    /// Materialize the widget for `model`, styled with `config`.
    fn render_initial(&mut self, model: &SelectModel, config: &SelectConfig) -> RenderHandle;

    /// Mark option `index` selected and unmark option `previous`.
    ///
    /// `index` and `previous` are equal when the current option is re-selected.
    fn set_selected_visual(&mut self, index: usize, previous: usize);

    /// Show `text` on the trigger.
    fn set_trigger_label(&mut self, text: &str);

    /// Show or hide the option list.
    fn set_expanded_visual(&mut self, expanded: bool);

    /// Show the disabled look.
    fn set_disabled_visual(&mut self, disabled: bool);

    /// Show or hide the focus indicator.
    fn set_focused_visual(&mut self, focused: bool);
}

/// One notification received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    /// `render_initial` with the labels, selection and flags it saw.
    Initial {
        labels: Vec<String>,
        selected: usize,
        disabled: bool,
    },
    /// `set_selected_visual`.
    Selected { index: usize, previous: usize },
    /// `set_trigger_label`.
    TriggerLabel(String),
    /// `set_expanded_visual`.
    Expanded(bool),
    /// `set_disabled_visual`.
    Disabled(bool),
    /// `set_focused_visual`.
    Focused(bool),
}

/// Shared, cloneable log of renderer notifications.
#[derive(Debug, Clone, Default)]
pub struct RenderLog {
    calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl RenderLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: RenderCall) {
        self.calls.lock().push(call);
    }

    /// Snapshot of every call so far.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    /// Drain the recorded calls.
    pub fn take(&self) -> Vec<RenderCall> {
        std::mem::take(&mut *self.calls.lock())
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

/// A renderer that only records what it is told.
///
/// ```
/// use veneer::{CustomSelect, NativeSelect, RecordingRenderer, RenderCall, SelectConfig};
///
/// let renderer = RecordingRenderer::new();
/// let log = renderer.log();
/// let native = NativeSelect::new().with_entry("a", "Apple").with_entry("b", "Banana");
/// let mut select = CustomSelect::new(native, renderer, SelectConfig::default()).unwrap();
///
/// log.take();
/// select.select(1).unwrap();
/// assert_eq!(log.calls()[1], RenderCall::TriggerLabel("Banana".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    log: RenderLog,
    next_handle: u64,
}

impl RecordingRenderer {
    /// Create a renderer with a fresh log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer appending to an existing log.
    pub fn with_log(log: RenderLog) -> Self {
        Self { log, next_handle: 0 }
    }

    /// The shared log.
    pub fn log(&self) -> RenderLog {
        self.log.clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render_initial(&mut self, model: &SelectModel, _config: &SelectConfig) -> RenderHandle {
        self.log.record(RenderCall::Initial {
            labels: model.options().iter().map(|o| o.label().to_string()).collect(),
            selected: model.state().selected_index(),
            disabled: model.state().is_disabled(),
        });
        self.next_handle += 1;
        RenderHandle::new(self.next_handle)
    }

    fn set_selected_visual(&mut self, index: usize, previous: usize) {
        self.log.record(RenderCall::Selected { index, previous });
    }

    fn set_trigger_label(&mut self, text: &str) {
        self.log.record(RenderCall::TriggerLabel(text.to_string()));
    }

    fn set_expanded_visual(&mut self, expanded: bool) {
        self.log.record(RenderCall::Expanded(expanded));
    }

    fn set_disabled_visual(&mut self, disabled: bool) {
        self.log.record(RenderCall::Disabled(disabled));
    }

    fn set_focused_visual(&mut self, focused: bool) {
        self.log.record(RenderCall::Focused(focused));
    }
}
