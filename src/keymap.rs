//! Host keyboard layouts. Key code `n` is the `n`th key of the layout.

use std::fmt;
use std::str::FromStr;

#[rustfmt::skip]
const QWERTY: [char; 16] = [
    '1', '2', '3', '4',
    'q', 'w', 'e', 'r',
    'a', 's', 'd', 'f',
    'z', 'x', 'c', 'v',
];

#[rustfmt::skip]
const COLEMAK: [char; 16] = [
    '1', '2', '3', '4',
    'q', 'w', 'f', 'p',
    'a', 'r', 's', 't',
    'z', 'x', 'c', 'd',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keymap {
    Qwerty,
    Colemak,
}

impl Keymap {
    fn keys(self) -> &'static [char; 16] {
        match self {
            Keymap::Qwerty => &QWERTY,
            Keymap::Colemak => &COLEMAK,
        }
    }

    /// The key code a host key maps to, ignoring case.
    pub fn key_code(self, c: char) -> Option<u8> {
        let c = c.to_ascii_lowercase();
        self.keys().iter().position(|k| *k == c).map(|code| code as u8)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Keymap::Qwerty
    }
}

impl FromStr for Keymap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "qwerty" => Ok(Keymap::Qwerty),
            "colemak" => Ok(Keymap::Colemak),
            other => Err(format!("unknown keymap '{}', expected qwerty or colemak", other)),
        }
    }
}

impl fmt::Display for Keymap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keymap::Qwerty => write!(f, "qwerty"),
            Keymap::Colemak => write!(f, "colemak"),
        }
    }
}
