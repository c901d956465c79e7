//! Keyboard mapping.
//!
//! Turns a key press into either an [`Action`] or a form editing command.
//! Shortcuts are fixed: the page has no configurable keybinds.

use winit::keyboard::{Key, ModifiersState, NamedKey};

use folio_common::Action;

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum KeyInput {
    Action(Action),
    Backspace,
    Enter,
    Escape,
    /// Wheel-equivalent scroll, positive is down.
    ScrollLines(f32),
    Text(String),
}

/// Map a pressed key. `text` is the text the key produced, if any.
pub(super) fn classify_key(
    key: &Key,
    text: Option<&str>,
    mods: ModifiersState,
) -> Option<KeyInput> {
    let command = mods.control_key() || mods.super_key();

    if let Key::Named(named) = key {
        let input = match named {
            NamedKey::Tab if mods.shift_key() => KeyInput::Action(Action::FocusPrevField),
            NamedKey::Tab => KeyInput::Action(Action::FocusNextField),
            NamedKey::Backspace => KeyInput::Backspace,
            NamedKey::Enter => KeyInput::Enter,
            NamedKey::Escape => KeyInput::Escape,
            NamedKey::PageUp => KeyInput::Action(Action::PageUp),
            NamedKey::PageDown => KeyInput::Action(Action::PageDown),
            NamedKey::Home => KeyInput::Action(Action::ScrollToTop),
            NamedKey::ArrowUp => KeyInput::ScrollLines(-1.0),
            NamedKey::ArrowDown => KeyInput::ScrollLines(1.0),
            NamedKey::F11 => KeyInput::Action(Action::ToggleFullscreen),
            NamedKey::Space if !command => KeyInput::Text(" ".into()),
            _ => return None,
        };
        return Some(input);
    }

    if command {
        let Key::Character(c) = key else {
            return None;
        };
        return match c.to_ascii_lowercase().as_str() {
            "q" => Some(KeyInput::Action(Action::Quit)),
            "r" => Some(KeyInput::Action(Action::ReloadConfig)),
            _ => None,
        };
    }

    let text = text.filter(|t| !t.is_empty() && !t.chars().any(char::is_control))?;
    Some(KeyInput::Text(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(k: NamedKey) -> Key {
        Key::Named(k)
    }

    fn ch(s: &str) -> Key {
        Key::Character(s.into())
    }

    #[test]
    fn tab_cycles_focus() {
        assert_eq!(
            classify_key(&named(NamedKey::Tab), Some("\t"), ModifiersState::empty()),
            Some(KeyInput::Action(Action::FocusNextField))
        );
        assert_eq!(
            classify_key(&named(NamedKey::Tab), None, ModifiersState::SHIFT),
            Some(KeyInput::Action(Action::FocusPrevField))
        );
    }

    #[test]
    fn editing_keys() {
        let none = ModifiersState::empty();
        assert_eq!(
            classify_key(&named(NamedKey::Backspace), None, none),
            Some(KeyInput::Backspace)
        );
        assert_eq!(
            classify_key(&named(NamedKey::Enter), Some("\r"), none),
            Some(KeyInput::Enter)
        );
        assert_eq!(
            classify_key(&named(NamedKey::Escape), None, none),
            Some(KeyInput::Escape)
        );
    }

    #[test]
    fn typed_characters_become_text() {
        assert_eq!(
            classify_key(&ch("a"), Some("a"), ModifiersState::empty()),
            Some(KeyInput::Text("a".into()))
        );
        assert_eq!(
            classify_key(&ch("A"), Some("A"), ModifiersState::SHIFT),
            Some(KeyInput::Text("A".into()))
        );
        assert_eq!(
            classify_key(&named(NamedKey::Space), Some(" "), ModifiersState::empty()),
            Some(KeyInput::Text(" ".into()))
        );
    }

    #[test]
    fn control_text_is_ignored() {
        assert_eq!(
            classify_key(&ch("\u{7f}"), Some("\u{7f}"), ModifiersState::empty()),
            None
        );
        assert_eq!(classify_key(&ch("a"), None, ModifiersState::empty()), None);
    }

    #[test]
    fn command_shortcuts() {
        assert_eq!(
            classify_key(&ch("q"), Some("\u{11}"), ModifiersState::CONTROL),
            Some(KeyInput::Action(Action::Quit))
        );
        assert_eq!(
            classify_key(&ch("R"), None, ModifiersState::SUPER),
            Some(KeyInput::Action(Action::ReloadConfig))
        );
        assert_eq!(classify_key(&ch("x"), Some("x"), ModifiersState::CONTROL), None);
    }

    #[test]
    fn navigation_keys() {
        let none = ModifiersState::empty();
        assert_eq!(
            classify_key(&named(NamedKey::PageDown), None, none),
            Some(KeyInput::Action(Action::PageDown))
        );
        assert_eq!(
            classify_key(&named(NamedKey::Home), None, none),
            Some(KeyInput::Action(Action::ScrollToTop))
        );
        assert_eq!(
            classify_key(&named(NamedKey::ArrowDown), None, none),
            Some(KeyInput::ScrollLines(1.0))
        );
        assert_eq!(
            classify_key(&named(NamedKey::F11), None, none),
            Some(KeyInput::Action(Action::ToggleFullscreen))
        );
        assert_eq!(classify_key(&named(NamedKey::F1), None, none), None);
    }
}
