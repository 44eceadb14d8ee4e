use chip_8_interpreter::emulator::input::{KeyLatch, NUM_KEYS};
use chip_8_interpreter::keymap::Keymap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Turns terminal key presses into held keys.
///
/// Terminals report presses but not releases, so a key counts as held
/// until `hold` has passed since its most recent press.
pub struct KeyManager {
    keymap: Keymap,
    hold: Duration,
    pressed_at: [Option<Instant>; NUM_KEYS],
    quit: bool,
}

impl KeyManager {
    pub fn new(keymap: Keymap, hold: Duration) -> KeyManager {
        KeyManager {
            keymap,
            hold,
            pressed_at: [None; NUM_KEYS],
            quit: false,
        }
    }

    /// Record a key press that happened at `now`.
    pub fn press(&mut self, event: KeyEvent, now: Instant) {
        match event.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Char(c) => match self.keymap.key_code(c) {
                Some(key) => self.pressed_at[key as usize] = Some(now),
                None => log::debug!("Key {:?} is not mapped", c),
            },
            _ => {}
        }
    }

    /// Write which keys are still held at `now` into the latch.
    pub fn apply(&self, keys: &mut KeyLatch, now: Instant) {
        for (key, pressed_at) in self.pressed_at.iter().enumerate() {
            let held = pressed_at.map_or(false, |at| now.duration_since(at) < self.hold);
            keys.set(key as u8, held);
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
