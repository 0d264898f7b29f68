use std::fmt;

/// Keyboard key identifier, by the key's unshifted logical meaning.
///
/// Printable keys arrive as [`Key::Char`], lowercased for ASCII letters, so
/// `Shift+a` and CapsLock `A` both read as `Char('a')` and `Shift+=` reads
/// as `Char('=')`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Char(char),

    /// Named key or multi-character input this engine does not distinguish.
    Unknown,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "'{c}'"),
            other => write!(f, "{other:?}"),
        }
    }
}
