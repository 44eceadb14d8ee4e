//! The CHIP-8 interpreter core, and the traits a frontend implements to drive it.

pub mod display;
pub mod emulator;
pub mod error;
pub mod input;
pub mod instruction;
pub mod opcode;
pub mod output;
pub mod runner;
pub mod state;
pub mod timers;

pub use self::emulator::{Emulator, Outcome, Step};
pub use self::error::EmulatorError;
