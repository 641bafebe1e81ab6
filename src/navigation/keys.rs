//! Keyboard handling helpers.

/// Keys the view controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}

/// Whether the key activates a link or button the way a click does.
pub fn is_activation_key(key: Key) -> bool {
    matches!(key, Key::Enter | Key::Space)
}

/// Keep Tab focus inside the open menu.
///
/// Given `len` focusable items and the index that currently has focus,
/// returns the index to move focus to when Tab (or Shift+Tab) would leave the
/// menu, or `None` to let the browser move focus normally.
pub fn trap_tab(len: usize, current: Option<usize>, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;

    match (current, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}
