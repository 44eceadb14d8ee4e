use structopt::StructOpt;

use chip_8_interpreter::cli::Opt;
use chip_8_interpreter::emulator::runner::{self, Stop};
use chip_8_interpreter::emulator::Emulator;

mod crossterm_io;
mod key_manager;
use crossterm_io::{CrosstermInput, CrosstermOutput};
use key_manager::KeyManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    log::info!("Executing {:?}", &opt.program);

    // Load instructions into emulator memory before touching the terminal
    let mut emulator = match opt.seed {
        Some(seed) => Emulator::with_seed(seed),
        None => Emulator::new(),
    };
    emulator.load_file(&opt.program)?;

    let mut input = CrosstermInput::new(KeyManager::new(opt.keymap, opt.hold()));
    let result = {
        let mut output = CrosstermOutput::new()?;
        runner::run(&mut emulator, &mut input, &mut output, &opt.run_config())
    };

    // The terminal is restored here, so errors are readable
    match result? {
        (Stop::Quit, steps) => log::info!("Quit after {} steps", steps),
        (Stop::StepLimit, steps) => log::info!("Reached step limit of {}", steps),
    }

    Ok(())
}
