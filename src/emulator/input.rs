use std::io;

pub const NUM_KEYS: usize = 16;

/// The pressed state of the 16 keys, indexed by key code 0x0..=0xF.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyLatch {
    keys: [bool; NUM_KEYS],
}

impl KeyLatch {
    pub fn new() -> KeyLatch {
        KeyLatch::default()
    }

    /// Set the state of a key. Codes outside of 0x0..=0xF are ignored.
    pub fn set(&mut self, key: u8, pressed: bool) {
        if let Some(state) = self.keys.get_mut(key as usize) {
            *state = pressed;
        }
    }

    pub fn press(&mut self, key: u8) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: u8) {
        self.set(key, false);
    }

    /// Whether the key is held. Codes outside of 0x0..=0xF are never held.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }

    /// The lowest key code currently held, if any.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|pressed| *pressed).map(|key| key as u8)
    }
}

/// Represents an input device that updates the key latch between steps.
pub trait EmulatorInput {
    /// Apply any pending key events to the latch.
    fn update(&mut self, keys: &mut KeyLatch) -> io::Result<()>;

    /// Whether the user asked to stop the emulator.
    fn quit_requested(&self) -> bool {
        false
    }
}

/// An input device that holds a fixed set of keys.
#[derive(Debug, Default)]
pub struct DummyInput {
    held: Vec<u8>,
}

impl DummyInput {
    pub fn new() -> DummyInput {
        DummyInput::default()
    }

    /// An input device that keeps the given keys pressed.
    pub fn holding(keys: &[u8]) -> DummyInput {
        DummyInput { held: keys.to_vec() }
    }
}

impl EmulatorInput for DummyInput {
    fn update(&mut self, keys: &mut KeyLatch) -> io::Result<()> {
        for key in &self.held {
            keys.press(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pressed_is_lowest_code() {
        let mut keys = KeyLatch::new();
        assert_eq!(keys.first_pressed(), None);
        keys.press(0xC);
        keys.press(0x3);
        assert_eq!(keys.first_pressed(), Some(0x3));
        keys.release(0x3);
        assert_eq!(keys.first_pressed(), Some(0xC));
    }

    #[test]
    fn out_of_range_keys_are_ignored() {
        let mut keys = KeyLatch::new();
        keys.press(0x10);
        assert_eq!(keys, KeyLatch::new());
        assert!(!keys.is_pressed(0xFF));
    }

    #[test]
    fn dummy_input_presses_held_keys() {
        let mut keys = KeyLatch::new();
        DummyInput::holding(&[1, 7]).update(&mut keys).unwrap();
        assert!(keys.is_pressed(1));
        assert!(keys.is_pressed(7));
        assert!(!keys.is_pressed(2));
    }
}
