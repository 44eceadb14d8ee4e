//! Command line options shared by the frontends.

use crate::emulator::runner::RunConfig;
use crate::keymap::Keymap;

use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

/// The program options.
#[derive(StructOpt, Debug)]
#[structopt(name = "chip-8")]
pub struct Opt {
    /// Steps per second; timers tick once per step
    #[structopt(long, default_value = "60")]
    pub hz: u32,

    /// Keyboard layout used for the 16 keys (qwerty or colemak)
    #[structopt(long, default_value = "qwerty")]
    pub keymap: Keymap,

    /// Seed for the random number instruction
    #[structopt(long)]
    pub seed: Option<u64>,

    /// Stop after this many steps
    #[structopt(long)]
    pub steps: Option<u64>,

    /// How long a key stays held after a press, in milliseconds
    #[structopt(long, default_value = "250")]
    pub hold_ms: u64,

    /// The program to execute
    #[structopt(parse(from_os_str))]
    pub program: PathBuf,
}

impl Opt {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            steps_per_second: self.hz,
            max_steps: self.steps,
        }
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}
