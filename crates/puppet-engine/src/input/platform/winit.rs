use winit::event::ElementState;
use winit::keyboard::{Key as WinitKey, NamedKey};

use crate::input::Key;

/// Key press the app should see, if any.
///
/// Releases are dropped, and so are synthetic presses (X11 reports keys
/// already held when the window gains focus).
pub(crate) fn key_press(state: ElementState, is_synthetic: bool, key: &WinitKey) -> Option<Key> {
    if state != ElementState::Pressed || is_synthetic {
        return None;
    }
    Some(map_key(key))
}

/// Maps a winit logical key (ideally `key_without_modifiers()`) to a [`Key`].
pub(crate) fn map_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => match named {
            NamedKey::Escape => Key::Escape,
            NamedKey::Space => Key::Space,

            NamedKey::ArrowUp => Key::ArrowUp,
            NamedKey::ArrowDown => Key::ArrowDown,
            NamedKey::ArrowLeft => Key::ArrowLeft,
            NamedKey::ArrowRight => Key::ArrowRight,

            _ => Key::Unknown,
        },

        WinitKey::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(' '), None) => Key::Space,
                (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                // Dead-key compositions and IME strings.
                _ => Key::Unknown,
            }
        }

        WinitKey::Unidentified(_) | WinitKey::Dead(_) => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::SmolStr;

    use super::*;

    fn ch(s: &str) -> WinitKey {
        WinitKey::Character(SmolStr::new(s))
    }

    #[test]
    fn only_real_presses_are_reported() {
        let left = WinitKey::Named(NamedKey::ArrowLeft);
        assert_eq!(key_press(ElementState::Pressed, false, &left), Some(Key::ArrowLeft));
        assert_eq!(key_press(ElementState::Released, false, &left), None);
        // Held across a focus change.
        assert_eq!(key_press(ElementState::Pressed, true, &left), None);
        assert_eq!(key_press(ElementState::Pressed, true, &ch("-")), None);
    }

    #[test]
    fn arrows_and_escape_are_named() {
        assert_eq!(map_key(&WinitKey::Named(NamedKey::ArrowLeft)), Key::ArrowLeft);
        assert_eq!(map_key(&WinitKey::Named(NamedKey::ArrowDown)), Key::ArrowDown);
        assert_eq!(map_key(&WinitKey::Named(NamedKey::Escape)), Key::Escape);
    }

    #[test]
    fn letters_are_lowercased() {
        assert_eq!(map_key(&ch("W")), Key::Char('w'));
        assert_eq!(map_key(&ch("d")), Key::Char('d'));
    }

    #[test]
    fn symbols_pass_through() {
        assert_eq!(map_key(&ch("=")), Key::Char('='));
        assert_eq!(map_key(&ch("+")), Key::Char('+'));
        assert_eq!(map_key(&ch("-")), Key::Char('-'));
    }

    #[test]
    fn space_character_is_space_key() {
        assert_eq!(map_key(&ch(" ")), Key::Space);
    }

    #[test]
    fn multi_char_input_is_unknown() {
        assert_eq!(map_key(&ch("ab")), Key::Unknown);
        assert_eq!(map_key(&ch("")), Key::Unknown);
    }

    #[test]
    fn unsupported_named_key_is_unknown() {
        assert_eq!(map_key(&WinitKey::Named(NamedKey::F5)), Key::Unknown);
    }
}
