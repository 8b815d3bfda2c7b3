//! The custom select widget.
//!
//! [`CustomSelect`] enhances one native selection control. It owns the
//! widget's [`SelectModel`], the native control adapter and a renderer, and
//! routes every change through the selection synchronizer so the native
//! control always holds the truth before anything is drawn.
//!
//! # Example
//!
//! ```
//! use veneer::events::{Key, SelectEvent};
//! use veneer::{CustomSelect, NativeSelect, RecordingRenderer, SelectConfig};
//!
//! let native = NativeSelect::new()
//!     .with_entry("a", "Apple")
//!     .with_selected_entry("b", "Banana")
//!     .with_entry("c", "Cherry");
//! let mut select = CustomSelect::new(native, RecordingRenderer::new(), SelectConfig::default())?;
//!
//! select.selection_changed.connect(|&index| {
//!     println!("Selected index: {}", index);
//! });
//!
//! let mut event = SelectEvent::key_press(Key::ArrowDown);
//! assert!(select.dispatch(&mut event));
//! assert!(event.is_accepted());
//! assert_eq!(select.current_value().as_deref(), Some("c"));
//! assert_eq!(select.current_label(), "Cherry");
//! # Ok::<(), veneer::Error>(())
//! ```

use veneer_core::Signal;
use veneer_core::logging::targets;

use super::expansion::ExpansionRequest;
use super::native::NativeControl;
use super::option::{OptionSet, SelectOption};
use super::renderer::{RenderHandle, Renderer};
use super::router::Router;
use super::state::{SelectModel, WidgetState};
use super::sync::{Direction, SelectTarget, SyncOutcome, Synchronizer};
use crate::config::SelectConfig;
use crate::error::Result;
use crate::events::SelectEvent;

// ============================================================================
// CustomSelect
// ============================================================================

/// A custom-rendered select bound to a native selection control.
///
/// # Signals
///
/// - `selection_changed(usize)`: Emitted when the selected index changes
/// - `expanded_changed(bool)`: Emitted when the option list opens or closes
///
/// Both are emitted after the step that caused them has fully completed.
pub struct CustomSelect {
    /// Options and interaction state.
    model: SelectModel,

    /// The authoritative native control.
    native: Box<dyn NativeControl>,

    /// Presentation collaborator.
    renderer: Box<dyn Renderer>,

    /// Per-instance presentation configuration.
    config: SelectConfig,

    /// Handle returned by the initial render.
    handle: RenderHandle,

    // Signals
    /// Signal emitted when the selected index changes.
    pub selection_changed: Signal<usize>,
    /// Signal emitted when the option list opens or closes.
    pub expanded_changed: Signal<bool>,
}

impl CustomSelect {
    /// Enhance `native`, rendering through `renderer`.
    ///
    /// Reads the native control's entries and disabled flag once, then
    /// materializes the widget. The native control is not written to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyOptions`](crate::Error::EmptyOptions) if the
    /// native control has no entries.
    pub fn new(
        native: impl NativeControl + 'static,
        renderer: impl Renderer + 'static,
        config: SelectConfig,
    ) -> Result<Self> {
        Self::from_boxed(Box::new(native), Box::new(renderer), config)
    }

    /// Like [`new`](Self::new), for already boxed collaborators.
    pub fn from_boxed(
        native: Box<dyn NativeControl>,
        mut renderer: Box<dyn Renderer>,
        config: SelectConfig,
    ) -> Result<Self> {
        let options = native.read_initial_selection()?;
        let model = SelectModel::new(options, native.read_disabled());
        let handle = renderer.render_initial(&model, &config);

        tracing::debug!(
            target: targets::SELECT,
            options = model.options().len(),
            selected = model.state().selected_index(),
            disabled = model.state().is_disabled(),
            handle = handle.raw(),
            "select enhanced"
        );
        tracing::trace!(
            target: targets::SELECT,
            "options:\n{}",
            model.options().debug_list(model.state().selected_index())
        );

        Ok(Self {
            model,
            native,
            renderer,
            config,
            handle,
            selection_changed: Signal::new(),
            expanded_changed: Signal::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The options, in document order.
    pub fn options(&self) -> &OptionSet {
        self.model.options()
    }

    /// The interaction state.
    pub fn state(&self) -> &WidgetState {
        self.model.state()
    }

    /// The owned state record.
    pub fn model(&self) -> &SelectModel {
        &self.model
    }

    /// Index of the selected option.
    pub fn selected_index(&self) -> usize {
        self.model.state().selected_index()
    }

    /// The selected option.
    pub fn selected_option(&self) -> &SelectOption {
        self.model.selected_option()
    }

    /// Label shown on the trigger.
    pub fn current_label(&self) -> &str {
        self.model.selected_option().label()
    }

    /// The native control's current value.
    pub fn current_value(&self) -> Option<String> {
        self.native.value()
    }

    /// Whether the option list is visible.
    pub fn is_expanded(&self) -> bool {
        self.model.state().is_expanded()
    }

    /// Whether the widget refuses input.
    pub fn is_disabled(&self) -> bool {
        self.model.state().is_disabled()
    }

    /// Whether the widget holds focus.
    pub fn is_focused(&self) -> bool {
        self.model.state().is_focused()
    }

    /// The native control.
    pub fn native(&self) -> &dyn NativeControl {
        self.native.as_ref()
    }

    /// The configuration the widget was rendered with.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Handle returned by the initial render.
    pub fn render_handle(&self) -> RenderHandle {
        self.handle
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select `target` and close the option list.
    ///
    /// Returns `Ok(false)` when the widget is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) or
    /// [`Error::UnknownValue`](crate::Error::UnknownValue) when `target`
    /// names no option. Nothing is changed in that case.
    pub fn select(&mut self, target: impl Into<SelectTarget>) -> Result<bool> {
        let target = target.into();
        let before = *self.model.state();
        let outcome = self.sync().select(&target)?;
        self.notify(before);
        Ok(outcome.is_applied())
    }

    /// Move the selection one option towards `direction` without closing
    /// the list.
    ///
    /// Returns `false` at either end of the list or when disabled.
    pub fn select_relative(&mut self, direction: Direction) -> bool {
        let before = *self.model.state();
        let outcome = self.sync().select_relative(direction);
        self.notify(before);
        outcome != SyncOutcome::Ignored
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Show the option list. Returns `true` if it was closed.
    pub fn open(&mut self) -> bool {
        self.expand(ExpansionRequest::Open)
    }

    /// Hide the option list. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        self.expand(ExpansionRequest::Close)
    }

    /// Flip the option list. Returns `false` when disabled.
    pub fn toggle(&mut self) -> bool {
        self.expand(ExpansionRequest::Toggle)
    }

    fn expand(&mut self, request: ExpansionRequest) -> bool {
        let before = *self.model.state();
        let changed = self.sync().request_expansion(request);
        self.notify(before);
        changed
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Apply the external disable signal.
    ///
    /// Closes the list, then latches the disabled flag. There is no way back.
    /// Returns `true` if the widget was not already disabled.
    pub fn disable(&mut self) -> bool {
        let was_disabled = self.is_disabled();
        self.dispatch(&mut SelectEvent::disable());
        !was_disabled
    }

    /// Route one input event.
    ///
    /// Returns `true` if the event was handled. Handled events are marked
    /// accepted; the host must then suppress its default behavior.
    pub fn dispatch(&mut self, event: &mut SelectEvent) -> bool {
        let before = *self.model.state();
        let handled = Router::new(
            &mut self.model,
            self.native.as_mut(),
            self.renderer.as_mut(),
        )
        .route(event);
        self.notify(before);
        handled
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn sync(&mut self) -> Synchronizer<'_> {
        Synchronizer::new(
            &mut self.model,
            self.native.as_mut(),
            self.renderer.as_mut(),
        )
    }

    fn notify(&self, before: WidgetState) {
        let after = *self.model.state();
        if after.selected_index() != before.selected_index() {
            self.selection_changed.emit(after.selected_index());
        }
        if after.is_expanded() != before.is_expanded() {
            self.expanded_changed.emit(after.is_expanded());
        }
    }
}

impl std::fmt::Debug for CustomSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomSelect")
            .field("state", self.model.state())
            .field("value", &self.native.value())
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(CustomSelect: Send, Sync);

// ============================================================================
// Tests
// ============================================================================
