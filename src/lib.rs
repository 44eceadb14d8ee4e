/*!

A CHIP-8 interpreter as specified at https://en.wikipedia.org/wiki/CHIP-8.

# Crossterm Frontend

If you want to try the interpreter on some programs, there is a ready-to-use frontend
you can run by using `cargo run --release --bin crossterm_frontend -- <program>`.
Key codes 0x0-0xF sit on the left of the keyboard (`1234`, `qwer`, `asdf`, `zxcv`),
or pass `--keymap colemak`. Press `Esc` to quit.

To run a program without a terminal, use `cargo run --bin no_frontend -- --steps 600 <program>`,
which prints the final screen.

# Library

The main way of running a program is to load it as bytes, then call `step` repeatedly.
Each step executes one instruction and ticks the timers once.

```rust
use chip_8_interpreter::emulator::{Emulator, Outcome};

let mut emulator = Emulator::new();

// Load a program at address 0x200.
let clear_display = [0x00, 0xE0];
emulator.load(&clear_display).unwrap();

let step = emulator.step().unwrap(); // Will now clear the display
assert!(matches!(step.outcome, Outcome::Executed(_)));
assert!(!step.beep);
```

Alternatively, you can experiment by executing instructions manually.

```rust
use chip_8_interpreter::emulator::Emulator;
use chip_8_interpreter::emulator::instruction::{Instruction, Reg, Const, Addr};

let mut emulator = Emulator::new();

// Execute instructions manually
emulator.execute_single(Instruction::ClearScreen).unwrap();

// Or many sequentially
emulator.execute_many(&[
    Instruction::Goto(Addr(0x250)),
    Instruction::SetRegToConst(Reg(0xA), Const(35)),
    Instruction::SetRegToReg(Reg(0xB), Reg(0xA))
]).unwrap();

assert_eq!(emulator.state().registers[0xB], 35);
assert_eq!(emulator.state().program_counter, 0x254);
```

## Custom input and output

The emulator never talks to devices itself. Between steps, write key presses with
`Emulator::set_key` and read the screen with `Emulator::screen`, or implement
`EmulatorInput` and `EmulatorOutput` and let `runner::run` drive the loop.

```ignore
use chip_8_interpreter::emulator::runner::{run, RunConfig};

run(&mut emulator, &mut MyInput::new(), &mut MyOutput::new(), &RunConfig::default())?;
```
*/

pub mod cli;
pub mod emulator;
pub mod keymap;
