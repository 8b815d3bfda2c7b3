//! Input event types for the select widget.
//!
//! The host translates its platform input (pointer presses on the trigger or
//! on an option, key presses, focus changes) into [`SelectEvent`]s and hands
//! them to the widget. A handled event is marked accepted; the host must then
//! suppress its own default behavior for it.
//!
//! ```
//! use veneer::events::{Key, KeyPressEvent, SelectEvent};
//!
//! let mut event = SelectEvent::KeyPress(KeyPressEvent::new(Key::ArrowDown));
//! assert!(!event.is_accepted());
//! event.accept();
//! assert!(event.is_accepted());
//! ```

use crate::select::SelectTarget;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    #[default]
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all select events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event; the host must suppress its default behavior.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, letting the host's default behavior proceed.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Keyboard keys the select widget distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Any key the widget does not interpret.
    Other,
}

/// Pointer press on the trigger.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
}

impl TriggerPressEvent {
    /// Create a primary-button press on the trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a press with a specific button.
    pub fn with_button(button: MouseButton) -> Self {
        Self {
            button,
            ..Self::default()
        }
    }
}

/// Pointer press on one option inside the expanded list.
#[derive(Debug, Clone)]
pub struct OptionPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// The option under the pointer.
    pub target: SelectTarget,
}

impl OptionPressEvent {
    /// Create a primary-button press on the given option.
    pub fn new(target: impl Into<SelectTarget>) -> Self {
        Self {
            base: EventBase::new(),
            button: MouseButton::Left,
            target: target.into(),
        }
    }

    /// Set the button using builder pattern.
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }
}

/// Key press event, sent while the widget holds focus.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
}

impl KeyPressEvent {
    /// Create a key press.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
        }
    }
}

/// Focus in event, sent when the widget gains keyboard focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
}

/// Focus out event, sent when the widget loses keyboard focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
}

/// External signal that the native control has been disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisableEvent {
    /// Base event data.
    pub base: EventBase,
}

/// Input delivered to a select widget.
#[derive(Debug, Clone)]
pub enum SelectEvent {
    /// Pointer press on the trigger.
    TriggerPress(TriggerPressEvent),
    /// Pointer press on an option.
    OptionPress(OptionPressEvent),
    /// Key press.
    KeyPress(KeyPressEvent),
    /// Focus gained.
    FocusIn(FocusInEvent),
    /// Focus lost.
    FocusOut(FocusOutEvent),
    /// Disable signal.
    Disable(DisableEvent),
}

impl SelectEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::TriggerPress(e) => &e.base,
            Self::OptionPress(e) => &e.base,
            Self::KeyPress(e) => &e.base,
            Self::FocusIn(e) => &e.base,
            Self::FocusOut(e) => &e.base,
            Self::Disable(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::TriggerPress(e) => &mut e.base,
            Self::OptionPress(e) => &mut e.base,
            Self::KeyPress(e) => &mut e.base,
            Self::FocusIn(e) => &mut e.base,
            Self::FocusOut(e) => &mut e.base,
            Self::Disable(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// Short name of the event kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TriggerPress(_) => "trigger_press",
            Self::OptionPress(_) => "option_press",
            Self::KeyPress(_) => "key_press",
            Self::FocusIn(_) => "focus_in",
            Self::FocusOut(_) => "focus_out",
            Self::Disable(_) => "disable",
        }
    }

    /// Primary-button press on the trigger.
    pub fn trigger_press() -> Self {
        Self::TriggerPress(TriggerPressEvent::new())
    }

    /// Primary-button press on an option.
    pub fn option_press(target: impl Into<SelectTarget>) -> Self {
        Self::OptionPress(OptionPressEvent::new(target))
    }

    /// Key press.
    pub fn key_press(key: Key) -> Self {
        Self::KeyPress(KeyPressEvent::new(key))
    }

    /// Focus gained.
    pub fn focus_in() -> Self {
        Self::FocusIn(FocusInEvent::default())
    }

    /// Focus lost.
    pub fn focus_out() -> Self {
        Self::FocusOut(FocusOutEvent::default())
    }

    /// Disable signal.
    pub fn disable() -> Self {
        Self::Disable(DisableEvent::default())
    }
}
