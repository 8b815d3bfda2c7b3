//! Selection synchronizer.
//!
//! This is the only code path that changes which option is selected. One
//! step runs, in order:
//!
//! 1. refuse if the widget is disabled,
//! 2. resolve the target to an index,
//! 3. update the model's selected index,
//! 4. commit the option's value to the native control,
//! 5. update the renderer (selected mark, trigger label),
//! 6. close the option list (pointer selections only).
//!
//! Nothing yields to the host between steps, so no observer can see the
//! rendered widget ahead of the native control.

use veneer_core::logging::{span_names, targets};

use super::expansion::{self, ExpansionRequest};
use super::native::NativeControl;
use super::renderer::Renderer;
use super::state::SelectModel;
use crate::error::Result;

/// What a selection request points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectTarget {
    /// An index into the options, in document order.
    Index(usize),
    /// The option carrying this value (first match in document order).
    Value(String),
}

impl From<usize> for SelectTarget {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for SelectTarget {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for SelectTarget {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

/// Direction for keyboard-driven relative selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the first option.
    Previous,
    /// Towards the last option.
    Next,
}

/// Result of a synchronizer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncOutcome {
    /// The step ran to completion.
    Applied {
        /// The newly selected index.
        index: usize,
        /// The index selected before the step.
        previous: usize,
        /// Whether the step closed the option list.
        closed: bool,
    },
    /// The step was a guarded no-op (disabled widget, list boundary).
    Ignored,
}

impl SyncOutcome {
    /// Whether the step ran.
    pub fn is_applied(&self) -> bool {
        matches!(self, SyncOutcome::Applied { .. })
    }

    /// Whether the step moved the selection to a different option.
    pub fn changed_selection(&self) -> bool {
        matches!(self, SyncOutcome::Applied { index, previous, .. } if index != previous)
    }
}

/// Borrows the three views a selection step keeps consistent.
pub struct Synchronizer<'a> {
    model: &'a mut SelectModel,
    native: &'a mut dyn NativeControl,
    renderer: &'a mut dyn Renderer,
}

impl<'a> Synchronizer<'a> {
    /// Bind a synchronizer to one widget's state, native control and renderer.
    pub fn new(
        model: &'a mut SelectModel,
        native: &'a mut dyn NativeControl,
        renderer: &'a mut dyn Renderer,
    ) -> Self {
        Self {
            model,
            native,
            renderer,
        }
    }

    /// Select `target` and close the option list.
    ///
    /// Re-selecting the current option is valid and leaves the state as it
    /// was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) or
    /// [`Error::UnknownValue`](crate::Error::UnknownValue) when `target`
    /// names no option. Nothing is changed in that case.
    pub fn select(&mut self, target: &SelectTarget) -> Result<SyncOutcome> {
        let span = tracing::trace_span!(target: targets::SYNC, span_names::SYNC, op = "select");
        let _enter = span.enter();

        if self.model.state().is_disabled() {
            tracing::trace!(target: targets::SYNC, "select ignored: widget disabled");
            return Ok(SyncOutcome::Ignored);
        }

        let index = self.model.resolve(target).inspect_err(|err| {
            tracing::warn!(target: targets::SYNC, requested = ?target, %err, "select target names no option");
        })?;

        let previous = self.apply(index);
        let closed = self.close();
        Ok(SyncOutcome::Applied {
            index,
            previous,
            closed,
        })
    }

    /// Move the selection one option towards `direction`.
    ///
    /// Does not wrap: stepping past either end is a no-op. Leaves the
    /// expansion state untouched.
    pub fn select_relative(&mut self, direction: Direction) -> SyncOutcome {
        let span = tracing::trace_span!(
            target: targets::SYNC,
            span_names::SYNC,
            op = "select_relative",
            ?direction
        );
        let _enter = span.enter();

        if self.model.state().is_disabled() {
            tracing::trace!(target: targets::SYNC, "select_relative ignored: widget disabled");
            return SyncOutcome::Ignored;
        }

        let current = self.model.state().selected_index();
        let candidate = match direction {
            Direction::Previous => current.checked_sub(1),
            Direction::Next => Some(current + 1).filter(|&i| i < self.model.options().len()),
        };

        let Some(index) = candidate else {
            tracing::trace!(target: targets::SYNC, current, "select_relative ignored: at list boundary");
            return SyncOutcome::Ignored;
        };

        let previous = self.apply(index);
        SyncOutcome::Applied {
            index,
            previous,
            closed: false,
        }
    }

    /// Close the option list and show it closed. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        self.request_expansion(ExpansionRequest::Close)
    }

    /// Run an expansion transition and mirror it on the renderer.
    ///
    /// Returns `true` if the expansion changed.
    pub fn request_expansion(&mut self, request: ExpansionRequest) -> bool {
        let changed = expansion::transition(self.model.state_mut(), request);
        if changed {
            let expanded = self.model.state().is_expanded();
            self.renderer.set_expanded_visual(expanded);
            tracing::trace!(target: targets::SYNC, ?request, expanded, "expansion changed");
        }
        changed
    }

    /// Steps 3 to 5 for an already resolved, in-bounds index.
    fn apply(&mut self, index: usize) -> usize {
        let previous = self.model.state().selected_index();
        self.model.state_mut().set_selected_index(index);

        let option = &self.model.options()[index];
        self.native.commit(option.value());
        self.renderer.set_selected_visual(index, previous);
        self.renderer.set_trigger_label(option.label());

        tracing::debug!(
            target: targets::SYNC,
            index,
            previous,
            value = option.value(),
            "selection committed"
        );
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::select::renderer::{RecordingRenderer, RenderCall};
    use crate::select::{Expansion, NativeSelect};

    struct Fixture {
        model: SelectModel,
        native: NativeSelect,
        renderer: RecordingRenderer,
    }

    impl Fixture {
        fn fruits() -> Self {
            let native = NativeSelect::new()
                .with_entry("a", "Apple")
                .with_selected_entry("b", "Banana")
                .with_entry("c", "Cherry");
            let options = native.read_initial_selection().unwrap();
            Self {
                model: SelectModel::new(options, false),
                native,
                renderer: RecordingRenderer::new(),
            }
        }

        fn sync(&mut self) -> Synchronizer<'_> {
            Synchronizer::new(&mut self.model, &mut self.native, &mut self.renderer)
        }
    }

    #[test]
    fn test_select_commits_and_renders() {
        let mut fx = Fixture::fruits();
        let log = fx.renderer.log();

        let outcome = fx.sync().select(&SelectTarget::Index(0)).unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Applied {
                index: 0,
                previous: 1,
                closed: false
            }
        );
        assert_eq!(fx.model.state().selected_index(), 0);
        assert_eq!(fx.native.value().as_deref(), Some("a"));
        assert_eq!(
            log.calls(),
            vec![
                RenderCall::Selected {
                    index: 0,
                    previous: 1
                },
                RenderCall::TriggerLabel("Apple".into()),
            ]
        );
    }

    #[test]
    fn test_select_closes_open_list() {
        let mut fx = Fixture::fruits();
        fx.model.state_mut().set_expansion(Expansion::Open);

        let outcome = fx.sync().select(&SelectTarget::Value("c".into())).unwrap();

        assert!(matches!(outcome, SyncOutcome::Applied { closed: true, .. }));
        assert_eq!(fx.model.state().expansion(), Expansion::Closed);
        assert_eq!(fx.renderer.log().calls().last(), Some(&RenderCall::Expanded(false)));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut fx = Fixture::fruits();
        fx.sync().select(&SelectTarget::Index(2)).unwrap();
        let once = (fx.model.clone(), fx.native.value(), fx.native.selected_indices());

        let outcome = fx.sync().select(&SelectTarget::Index(2)).unwrap();
        let twice = (fx.model.clone(), fx.native.value(), fx.native.selected_indices());

        assert!(outcome.is_applied());
        assert!(!outcome.changed_selection());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_bad_target_changes_nothing() {
        let mut fx = Fixture::fruits();
        let before = fx.model.clone();

        let err = fx.sync().select(&SelectTarget::Index(7)).unwrap_err();

        assert!(matches!(err, Error::IndexOutOfRange { index: 7, len: 3 }));
        assert_eq!(fx.model, before);
        assert_eq!(fx.native.value().as_deref(), Some("b"));
        assert!(fx.renderer.log().is_empty());
    }

    #[test]
    fn test_select_relative_next_keeps_expansion() {
        let mut fx = Fixture::fruits();
        fx.model.state_mut().set_expansion(Expansion::Open);

        let outcome = fx.sync().select_relative(Direction::Next);

        assert!(outcome.changed_selection());
        assert_eq!(fx.model.state().selected_index(), 2);
        assert_eq!(fx.native.value().as_deref(), Some("c"));
        assert!(fx.model.state().is_expanded());
    }

    #[test]
    fn test_select_relative_stops_at_boundaries() {
        let mut fx = Fixture::fruits();

        assert!(fx.sync().select_relative(Direction::Next).is_applied());
        let at_end = fx.model.clone();
        assert_eq!(fx.sync().select_relative(Direction::Next), SyncOutcome::Ignored);
        assert_eq!(fx.model, at_end);

        fx.sync().select(&SelectTarget::Index(0)).unwrap();
        let at_start = fx.model.clone();
        assert_eq!(fx.sync().select_relative(Direction::Previous), SyncOutcome::Ignored);
        assert_eq!(fx.model, at_start);
        assert_eq!(fx.native.value().as_deref(), Some("a"));
    }

    #[test]
    fn test_disabled_refuses_everything() {
        let mut fx = Fixture::fruits();
        fx.model.state_mut().latch_disabled();
        let before = fx.model.clone();

        assert_eq!(
            fx.sync().select(&SelectTarget::Index(0)).unwrap(),
            SyncOutcome::Ignored
        );
        assert_eq!(fx.sync().select_relative(Direction::Next), SyncOutcome::Ignored);
        assert_eq!(fx.model, before);
        assert_eq!(fx.native.value().as_deref(), Some("b"));
        assert!(fx.renderer.log().is_empty());
    }
}
