//! Input and timer events: [`Msg`] and [`Key`].

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    /// A printable character.
    Char(char),
}

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// A message delivered to the application model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Sent once when the application starts.
    Init,
    /// A key was pressed.
    KeyDown(Key),
    /// The terminal was resized.
    Screen { width: i32, height: i32 },
    /// A timer fired. Produced by commands, never by drivers.
    Tick,
    /// The user asked to quit (window close, Ctrl-C).
    Quit,
}

impl Msg {
    /// Whether this is a press of `key`.
    #[inline]
    pub fn is_key(&self, key: Key) -> bool {
        matches!(self, Self::KeyDown(k) if *k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_key_matches_only_that_key() {
        let m = Msg::KeyDown(Key::Char('q'));
        assert!(m.is_key(Key::Char('q')));
        assert!(!m.is_key(Key::Escape));
        assert!(!Msg::Tick.is_key(Key::Char('q')));
    }
}
