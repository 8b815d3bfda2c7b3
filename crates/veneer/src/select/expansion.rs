//! Open/closed state machine for the option list.
//!
//! `Closed` is both the initial state and the rest state entered after every
//! pointer commit. While the widget is disabled every transition request is
//! refused.

use super::state::WidgetState;

/// Whether the option list is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Expansion {
    /// The list is hidden. Initial state.
    #[default]
    Closed,
    /// The list is visible.
    Open,
}

impl Expansion {
    /// Returns `true` when the list is visible.
    pub fn is_open(self) -> bool {
        self == Expansion::Open
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Closed => Expansion::Open,
            Expansion::Open => Expansion::Closed,
        }
    }
}

/// A requested expansion transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionRequest {
    /// Trigger activation: flip the state.
    Toggle,
    /// Force the list visible.
    Open,
    /// Force the list hidden (commit, focus loss).
    Close,
}

/// Apply `request` to `state`.
///
/// Returns `true` if the expansion changed. Refused transitions (disabled
/// widget) and requests for the current state return `false`.
pub(crate) fn transition(state: &mut WidgetState, request: ExpansionRequest) -> bool {
    if state.is_disabled() {
        return false;
    }

    let current = state.expansion();
    let next = match request {
        ExpansionRequest::Toggle => current.toggled(),
        ExpansionRequest::Open => Expansion::Open,
        ExpansionRequest::Close => Expansion::Closed,
    };

    if next == current {
        return false;
    }

    state.set_expansion(next);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        let state = WidgetState::new(0, false);
        assert_eq!(state.expansion(), Expansion::Closed);
        assert!(!state.is_expanded());
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let mut state = WidgetState::new(0, false);
        assert!(transition(&mut state, ExpansionRequest::Toggle));
        assert!(state.is_expanded());
        assert!(transition(&mut state, ExpansionRequest::Toggle));
        assert_eq!(state.expansion(), Expansion::Closed);
    }

    #[test]
    fn test_request_for_current_state_is_noop() {
        let mut state = WidgetState::new(0, false);
        assert!(!transition(&mut state, ExpansionRequest::Close));
        assert!(transition(&mut state, ExpansionRequest::Open));
        assert!(!transition(&mut state, ExpansionRequest::Open));
    }

    #[test]
    fn test_disabled_refuses_every_transition() {
        let mut state = WidgetState::new(0, true);
        for request in [
            ExpansionRequest::Toggle,
            ExpansionRequest::Open,
            ExpansionRequest::Close,
        ] {
            assert!(!transition(&mut state, request));
        }
        assert_eq!(state.expansion(), Expansion::Closed);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Expansion::Closed.toggled(), Expansion::Open);
        assert_eq!(Expansion::Open.toggled(), Expansion::Closed);
        assert!(Expansion::Open.is_open());
    }
}
