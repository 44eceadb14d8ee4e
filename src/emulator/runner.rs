//! A fixed-rate loop tying an emulator to an input and an output device.

use crate::emulator::error::Result;
use crate::emulator::input::EmulatorInput;
use crate::emulator::output::EmulatorOutput;
use crate::emulator::Emulator;

use std::thread;
use std::time::{Duration, Instant};

/// How fast and how long to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Steps per second. Timers tick once per step, so 60 gives the usual timer rate.
    pub steps_per_second: u32,
    /// Stop after this many steps.
    pub max_steps: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            steps_per_second: 60,
            max_steps: None,
        }
    }
}

impl RunConfig {
    fn step_duration(&self) -> Duration {
        if self.steps_per_second == 0 {
            Duration::from_secs(0)
        } else {
            Duration::from_secs(1) / self.steps_per_second
        }
    }
}

/// Why a run ended without a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    Quit,
    StepLimit,
}

/// Run until the input asks to quit, the step limit is reached, or a step faults.
///
/// Key events are applied between steps, never during one.
pub fn run<I: EmulatorInput, O: EmulatorOutput>(
    emulator: &mut Emulator,
    input: &mut I,
    output: &mut O,
    config: &RunConfig,
) -> Result<(Stop, u64)> {
    let step_duration = config.step_duration();
    let mut steps = 0;

    loop {
        if config.max_steps.map_or(false, |max| steps >= max) {
            log::info!("Stopping after {} steps", steps);
            return Ok((Stop::StepLimit, steps));
        }

        let started = Instant::now();

        input.update(emulator.keys_mut())?;
        if input.quit_requested() {
            log::info!("Quit requested after {} steps", steps);
            return Ok((Stop::Quit, steps));
        }

        let step = emulator.step()?;
        steps += 1;

        output.draw(emulator.screen())?;
        if step.beep {
            output.beep()?;
        }

        if let Some(remaining) = step_duration.checked_sub(started.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::emulator::error::EmulatorError;
    use crate::emulator::input::{DummyInput, KeyLatch};
    use crate::emulator::output::DummyOutput;
    use std::io;

    fn unthrottled(max_steps: u64) -> RunConfig {
        RunConfig {
            steps_per_second: 0,
            max_steps: Some(max_steps),
        }
    }

    #[test]
    fn runs_until_step_limit() {
        let mut emulator = Emulator::with_seed(0);
        emulator.load(&[0x12, 0x00]).unwrap(); // jump to self
        let mut output = DummyOutput::new();

        let result = run(&mut emulator, &mut DummyInput::new(), &mut output, &unthrottled(10));

        assert_eq!(result.unwrap(), (Stop::StepLimit, 10));
        assert_eq!(output.frames, 10);
        assert_eq!(output.beeps, 0);
    }

    #[test]
    fn beeps_when_sound_timer_expires() {
        let mut emulator = Emulator::with_seed(0);
        emulator
            .load(&[
                0x60, 0x03, // V0 = 3
                0xF0, 0x18, // ST = V0
                0x12, 0x04, // jump to self
            ])
            .unwrap();
        let mut output = DummyOutput::new();

        run(&mut emulator, &mut DummyInput::new(), &mut output, &unthrottled(10)).unwrap();

        assert_eq!(output.beeps, 1);
    }

    #[test]
    fn input_reaches_wait_for_key() {
        let mut emulator = Emulator::with_seed(0);
        emulator.load(&[0xF3, 0x0A, 0x12, 0x02]).unwrap();
        let mut output = DummyOutput::new();

        run(&mut emulator, &mut DummyInput::holding(&[0xE]), &mut output, &unthrottled(2)).unwrap();

        assert_eq!(emulator.state().registers[3], 0xE);
        assert_eq!(emulator.state().program_counter, 0x202);
    }

    #[test]
    fn fault_stops_the_run() {
        let mut emulator = Emulator::with_seed(0);
        emulator.load(&[0x00, 0xEE]).unwrap();

        let result = run(&mut emulator, &mut DummyInput::new(), &mut DummyOutput::new(), &unthrottled(5));

        assert!(matches!(result, Err(EmulatorError::StackUnderflow { .. })));
    }

    struct QuitAfter(u32);

    impl EmulatorInput for QuitAfter {
        fn update(&mut self, _: &mut KeyLatch) -> io::Result<()> {
            self.0 = self.0.saturating_sub(1);
            Ok(())
        }

        fn quit_requested(&self) -> bool {
            self.0 == 0
        }
    }

    #[test]
    fn quit_stops_the_run() {
        let mut emulator = Emulator::with_seed(0);
        emulator.load(&[0x12, 0x00]).unwrap();
        let config = RunConfig {
            steps_per_second: 0,
            max_steps: None,
        };

        let result = run(&mut emulator, &mut QuitAfter(4), &mut DummyOutput::new(), &config);

        assert_eq!(result.unwrap(), (Stop::Quit, 3));
    }
}
