/// Keys the sequence matcher distinguishes. Character keys are compared
/// case-insensitively, the way a key event's logical key reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Char(char),
}

const SEQUENCE: [Key; 10] = [
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::Char('b'),
    Key::Char('a'),
];

/// Cursor over the fixed target sequence. Any mismatch resets to zero;
/// the mismatched key is not re-examined against the sequence start.
#[derive(Debug, Default, Clone)]
pub struct KonamiCursor {
    position: usize,
}

impl KonamiCursor {
    /// Feed one key. Returns true exactly when the key completes the
    /// full sequence; the cursor then resets.
    pub fn advance(&mut self, key: Key) -> bool {
        if matches(key, SEQUENCE[self.position]) {
            self.position += 1;
            if self.position == SEQUENCE.len() {
                self.position = 0;
                return true;
            }
        } else {
            self.position = 0;
        }
        false
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

fn matches(pressed: Key, expected: Key) -> bool {
    match (pressed, expected) {
        (Key::Char(a), Key::Char(b)) => a.eq_ignore_ascii_case(&b),
        (a, b) => a == b,
    }
}
