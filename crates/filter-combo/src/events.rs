//! Input events delivered to the combo box.
//!
//! The host toolkit translates its own input into these events and passes
//! the ones it did not handle itself to
//! [`FilterComboBox::event`](crate::FilterComboBox::event). Literal text
//! entry arrives already applied to the edit field, as
//! [`ComboEvent::TextChanged`].

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Check if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Keys the combo box reacts to.
///
/// Keys the state machine has no rule for arrive as [`Key::Other`] and fall
/// through unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    F4,
    Other,
}

/// A key chord: a key plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: Key,
    #[serde(default)]
    pub modifiers: KeyboardModifiers,
}

impl KeyChord {
    /// Create a chord.
    pub const fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a chord with no modifiers.
    pub const fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }

    /// Check whether a key press matches this chord exactly.
    pub fn matches(&self, event: &KeyPressEvent) -> bool {
        self.key == event.key && self.modifiers == event.modifiers
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Key press event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPressEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }
}

/// Mouse button press event.
#[derive(Debug, Clone, PartialEq)]
pub struct MousePressEvent {
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self { button, local_pos }
    }
}

/// Mouse button release event.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseReleaseEvent {
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self { button, local_pos }
    }
}

/// Everything the host forwards to the combo box.
#[derive(Debug, Clone, PartialEq)]
pub enum ComboEvent {
    /// The control was attached to the display tree.
    Attached,
    /// An unhandled key press.
    KeyPress(KeyPressEvent),
    /// A mouse button press.
    MousePress(MousePressEvent),
    /// A mouse button release.
    MouseRelease(MouseReleaseEvent),
    /// The edit field's text changed through user input.
    TextChanged(String),
    /// The edit field gained keyboard focus.
    TextFocusIn,
    /// The edit field lost keyboard focus.
    TextFocusOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_requires_exact_modifiers() {
        let chord = KeyChord::new(Key::ArrowDown, KeyboardModifiers::ALT);
        assert!(chord.matches(&KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::ALT)));
        assert!(!chord.matches(&KeyPressEvent::plain(Key::ArrowDown)));
        assert!(KeyChord::key(Key::F4).matches(&KeyPressEvent::plain(Key::F4)));
    }

    #[test]
    fn test_modifiers_empty() {
        assert!(KeyboardModifiers::NONE.is_empty());
        assert!(!KeyboardModifiers::ALT.is_empty());
    }
}
