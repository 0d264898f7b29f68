use puppet_engine::input::Key;

/// What a key press asks the app to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Move { dx: i32, dy: i32 },
    SpeedUp,
    SpeedDown,
    Quit,
    None,
}

/// Maps a key to its action. Movement is a unit direction; the caller scales
/// it by the current speed.
pub fn action_for(key: Key) -> Action {
    match key {
        Key::ArrowLeft | Key::Char('a') => Action::Move { dx: -1, dy: 0 },
        Key::ArrowRight | Key::Char('d') => Action::Move { dx: 1, dy: 0 },
        Key::ArrowUp | Key::Char('w') => Action::Move { dx: 0, dy: -1 },
        Key::ArrowDown | Key::Char('s') => Action::Move { dx: 0, dy: 1 },
        Key::Escape => Action::Quit,
        Key::Char('+') | Key::Char('=') => Action::SpeedUp,
        Key::Char('-') => Action::SpeedDown,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_agree() {
        assert_eq!(action_for(Key::ArrowLeft), action_for(Key::Char('a')));
        assert_eq!(action_for(Key::ArrowRight), action_for(Key::Char('d')));
        assert_eq!(action_for(Key::ArrowUp), action_for(Key::Char('w')));
        assert_eq!(action_for(Key::ArrowDown), action_for(Key::Char('s')));
        assert_eq!(action_for(Key::ArrowUp), Action::Move { dx: 0, dy: -1 });
    }

    #[test]
    fn plus_and_equals_both_speed_up() {
        assert_eq!(action_for(Key::Char('+')), Action::SpeedUp);
        assert_eq!(action_for(Key::Char('=')), Action::SpeedUp);
        assert_eq!(action_for(Key::Char('-')), Action::SpeedDown);
    }

    #[test]
    fn everything_else_is_ignored() {
        for key in [Key::Space, Key::Unknown, Key::Char('q')] {
            assert_eq!(action_for(key), Action::None, "{key}");
        }
        assert_eq!(action_for(Key::Escape), Action::Quit);
    }
}
