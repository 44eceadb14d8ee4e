/// The delay and sound timers, counting down once per step.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Timers {
        Timers::default()
    }

    /// Count both timers down towards zero.
    /// Returns true if the sound timer went from 1 to 0 on this tick,
    /// which is the moment the host should beep.
    pub fn tick(&mut self) -> bool {
        if self.delay > 0 {
            self.delay -= 1;
        }

        let mut signal = false;
        if self.sound > 0 {
            signal = self.sound == 1;
            self.sound -= 1;
        }

        if signal {
            log::debug!("Sound timer expired");
        }
        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_never_goes_negative() {
        let mut timers = Timers { delay: 1, sound: 0 };
        timers.tick();
        assert_eq!(timers.delay, 0);
        timers.tick();
        assert_eq!(timers.delay, 0);
    }

    #[test]
    fn sound_fires_once_when_reaching_zero() {
        let mut timers = Timers { delay: 0, sound: 1 };
        assert!(timers.tick());
        assert_eq!(timers.sound, 0);
        assert!(!timers.tick());
    }

    #[test]
    fn sound_is_silent_while_counting() {
        let mut timers = Timers { delay: 0, sound: 3 };
        let signals: Vec<bool> = (0..4).map(|_| timers.tick()).collect();
        assert_eq!(signals, vec![false, false, true, false]);
    }

    #[test]
    fn timers_are_independent() {
        let mut timers = Timers { delay: 5, sound: 2 };
        timers.tick();
        assert_eq!(timers, Timers { delay: 4, sound: 1 });
    }
}
