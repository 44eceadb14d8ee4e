use structopt::StructOpt;

use chip_8_interpreter::cli::Opt;
use chip_8_interpreter::emulator::input::DummyInput;
use chip_8_interpreter::emulator::output::DummyOutput;
use chip_8_interpreter::emulator::runner::{self, RunConfig};
use chip_8_interpreter::emulator::Emulator;

/// Steps to run when `--steps` is not given.
const DEFAULT_STEPS: u64 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    log::info!("Executing {:?}", &opt.program);

    // Load instructions into emulator memory
    let mut emulator = match opt.seed {
        Some(seed) => Emulator::with_seed(seed),
        None => Emulator::new(),
    };
    emulator.load_file(&opt.program)?;

    // Without a terminal there is nothing to wait for, so run as fast as possible
    let config = RunConfig {
        steps_per_second: 0,
        max_steps: Some(opt.steps.unwrap_or(DEFAULT_STEPS)),
    };
    let mut output = DummyOutput::new();
    let (_, steps) = runner::run(&mut emulator, &mut DummyInput::new(), &mut output, &config)?;

    log::info!("Ran {} steps, {} beeps", steps, output.beeps);
    print!("{}", emulator.screen());

    Ok(())
}
