//! Input router.
//!
//! Maps each [`SelectEvent`] to exactly one action on the expansion state
//! machine or the selection synchronizer:
//!
//! | Event                          | Action                          |
//! |--------------------------------|---------------------------------|
//! | Trigger press (primary button) | toggle the option list          |
//! | Option press, list open        | `select(target)`, closes list   |
//! | `ArrowUp` / `ArrowLeft`        | `select_relative(Previous)`     |
//! | `ArrowDown` / `ArrowRight`     | `select_relative(Next)`         |
//! | Focus in                       | set `focused`                   |
//! | Focus out                      | clear `focused`, close list     |
//! | Disable                        | close list, latch `disabled`    |
//!
//! Every entry except Disable is refused while the widget is disabled. Focus
//! out is still refused, but a disabled widget drops its `focused` flag so
//! it never reports focus it has lost. A handled event is accepted so the
//! host suppresses its default behavior.

use veneer_core::logging::{span_names, targets};

use super::expansion::ExpansionRequest;
use super::native::NativeControl;
use super::renderer::Renderer;
use super::state::SelectModel;
use super::sync::{Direction, Synchronizer};
use crate::events::{
    Key, KeyPressEvent, MouseButton, OptionPressEvent, SelectEvent, TriggerPressEvent,
};

pub(crate) struct Router<'a> {
    model: &'a mut SelectModel,
    native: &'a mut dyn NativeControl,
    renderer: &'a mut dyn Renderer,
}

impl<'a> Router<'a> {
    pub(crate) fn new(
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

    fn sync(&mut self) -> Synchronizer<'_> {
        Synchronizer::new(self.model, self.native, self.renderer)
    }

    /// Route one event. Returns `true` (and accepts the event) if it was handled.
    pub(crate) fn route(&mut self, event: &mut SelectEvent) -> bool {
        let span = tracing::trace_span!(target: targets::ROUTER, span_names::ROUTER, kind = event.kind());
        let _enter = span.enter();

        if self.model.state().is_disabled() && !matches!(event, SelectEvent::Disable(_)) {
            if matches!(event, SelectEvent::FocusOut(_)) {
                self.clear_focus();
            }
            tracing::trace!(target: targets::ROUTER, "event ignored: widget disabled");
            event.ignore();
            return false;
        }

        let handled = match event {
            SelectEvent::TriggerPress(e) => self.handle_trigger_press(e),
            SelectEvent::OptionPress(e) => self.handle_option_press(e),
            SelectEvent::KeyPress(e) => self.handle_key_press(e),
            SelectEvent::FocusIn(_) => self.handle_focus_in(),
            SelectEvent::FocusOut(_) => self.handle_focus_out(),
            SelectEvent::Disable(_) => self.handle_disable(),
        };

        if handled {
            event.accept();
        } else {
            event.ignore();
        }
        handled
    }

    fn handle_trigger_press(&mut self, event: &TriggerPressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        self.sync().request_expansion(ExpansionRequest::Toggle);
        true
    }

    fn handle_option_press(&mut self, event: &OptionPressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        // Options are only hit-testable while the list is visible.
        if !self.model.state().is_expanded() {
            tracing::trace!(target: targets::ROUTER, "option press ignored: list closed");
            return false;
        }
        // A target naming no option is already logged by the synchronizer.
        self.sync().select(&event.target).is_ok()
    }

    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        let direction = match event.key {
            Key::ArrowUp | Key::ArrowLeft => Direction::Previous,
            Key::ArrowDown | Key::ArrowRight => Direction::Next,
            _ => return false,
        };
        // Handled even at a list boundary so the host does not scroll.
        self.sync().select_relative(direction);
        true
    }

    fn handle_focus_in(&mut self) -> bool {
        if !self.model.state().is_focused() {
            self.model.state_mut().set_focused(true);
            self.renderer.set_focused_visual(true);
        }
        true
    }

    fn handle_focus_out(&mut self) -> bool {
        self.clear_focus();
        self.sync().close();
        true
    }

    fn clear_focus(&mut self) {
        if self.model.state().is_focused() {
            self.model.state_mut().set_focused(false);
            self.renderer.set_focused_visual(false);
        }
    }

    fn handle_disable(&mut self) -> bool {
        // Close first: once latched, the expansion machine refuses to move.
        self.sync().close();
        if self.model.state_mut().latch_disabled() {
            self.renderer.set_disabled_visual(true);
            tracing::debug!(target: targets::ROUTER, "widget disabled");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

        fn route(&mut self, mut event: SelectEvent) -> (bool, bool) {
            let handled =
                Router::new(&mut self.model, &mut self.native, &mut self.renderer).route(&mut event);
            (handled, event.is_accepted())
        }
    }

    #[test]
    fn test_trigger_toggles() {
        let mut fx = Fixture::fruits();
        assert_eq!(fx.route(SelectEvent::trigger_press()), (true, true));
        assert!(fx.model.state().is_expanded());
        fx.route(SelectEvent::trigger_press());
        assert_eq!(fx.model.state().expansion(), Expansion::Closed);
    }

    #[test]
    fn test_secondary_button_is_not_handled() {
        let mut fx = Fixture::fruits();
        let event = SelectEvent::TriggerPress(TriggerPressEvent::with_button(MouseButton::Right));
        assert_eq!(fx.route(event), (false, false));
        assert!(!fx.model.state().is_expanded());
    }

    #[test]
    fn test_option_press_selects_and_closes() {
        let mut fx = Fixture::fruits();
        fx.route(SelectEvent::trigger_press());

        assert_eq!(fx.route(SelectEvent::option_press(0)), (true, true));
        assert_eq!(fx.model.state().selected_index(), 0);
        assert_eq!(fx.native.value().as_deref(), Some("a"));
        assert!(!fx.model.state().is_expanded());
    }

    #[test]
    fn test_option_press_while_closed_is_ignored() {
        let mut fx = Fixture::fruits();
        assert_eq!(fx.route(SelectEvent::option_press(0)), (false, false));
        assert_eq!(fx.model.state().selected_index(), 1);
    }

    #[test]
    fn test_option_press_unknown_value_is_not_handled() {
        let mut fx = Fixture::fruits();
        fx.route(SelectEvent::trigger_press());
        let event = SelectEvent::OptionPress(OptionPressEvent::new("zzz"));
        assert_eq!(fx.route(event), (false, false));
        assert!(fx.model.state().is_expanded());
    }

    #[test]
    fn test_arrows_move_selection() {
        let mut fx = Fixture::fruits();
        fx.route(SelectEvent::key_press(Key::ArrowLeft));
        assert_eq!(fx.model.state().selected_index(), 0);
        fx.route(SelectEvent::key_press(Key::ArrowRight));
        fx.route(SelectEvent::key_press(Key::ArrowDown));
        assert_eq!(fx.model.state().selected_index(), 2);
        fx.route(SelectEvent::key_press(Key::ArrowUp));
        assert_eq!(fx.model.state().selected_index(), 1);
    }

    #[test]
    fn test_arrow_at_boundary_is_still_accepted() {
        let mut fx = Fixture::fruits();
        fx.route(SelectEvent::key_press(Key::ArrowDown));
        let before = fx.model.clone();
        assert_eq!(fx.route(SelectEvent::key_press(Key::ArrowDown)), (true, true));
        assert_eq!(fx.model, before);
    }

    #[test]
    fn test_other_keys_are_not_handled() {
        let mut fx = Fixture::fruits();
        assert_eq!(fx.route(SelectEvent::key_press(Key::Other)), (false, false));
        assert_eq!(fx.model.state().selected_index(), 1);
    }

    #[test]
    fn test_focus_out_closes() {
        let mut fx = Fixture::fruits();
        fx.route(SelectEvent::focus_in());
        fx.route(SelectEvent::trigger_press());
        assert!(fx.model.state().is_focused());

        fx.route(SelectEvent::focus_out());
        assert!(!fx.model.state().is_focused());
        assert!(!fx.model.state().is_expanded());
        assert_eq!(
            fx.renderer.log().calls()[2..],
            [RenderCall::Focused(false), RenderCall::Expanded(false)]
        );
    }

    #[test]
    fn test_disable_closes_then_refuses_input() {
        let mut fx = Fixture::fruits();
        fx.route(SelectEvent::trigger_press());

        assert_eq!(fx.route(SelectEvent::disable()), (true, true));
        assert!(fx.model.state().is_disabled());
        assert!(!fx.model.state().is_expanded());
        assert_eq!(
            fx.renderer.log().calls()[1..],
            [RenderCall::Expanded(false), RenderCall::Disabled(true)]
        );

        let before = fx.model.clone();
        for event in [
            SelectEvent::trigger_press(),
            SelectEvent::option_press(0),
            SelectEvent::key_press(Key::ArrowUp),
            SelectEvent::focus_in(),
        ] {
            assert_eq!(fx.route(event), (false, false));
        }
        assert_eq!(fx.model, before);
        assert_eq!(fx.native.value().as_deref(), Some("b"));
    }

    #[test]
    fn test_focus_out_while_disabled_drops_focus() {
        let mut fx = Fixture::fruits();
        fx.route(SelectEvent::focus_in());
        fx.route(SelectEvent::disable());
        let log = fx.renderer.log();
        log.take();

        assert_eq!(fx.route(SelectEvent::focus_out()), (false, false));
        assert!(!fx.model.state().is_focused());
        assert!(fx.model.state().is_disabled());
        assert_eq!(log.calls(), vec![RenderCall::Focused(false)]);

        assert_eq!(fx.route(SelectEvent::focus_out()), (false, false));
        assert_eq!(log.calls(), vec![RenderCall::Focused(false)]);
    }

    #[test]
    fn test_repeated_disable_is_accepted_once_rendered() {
        let mut fx = Fixture::fruits();
        fx.route(SelectEvent::disable());
        assert_eq!(fx.route(SelectEvent::disable()), (true, true));
        assert_eq!(fx.renderer.log().calls(), vec![RenderCall::Disabled(true)]);
    }
}
