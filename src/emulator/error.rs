use std::io;
use std::path::PathBuf;

/// Faults that stop a step, or prevent a program from being loaded.
///
/// Unknown opcodes are not faults; see `Outcome::UnknownOpcode`.
#[derive(Debug, thiserror::Error)]
pub enum EmulatorError {
    #[error("could not load program {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("program is too large ({size} bytes), max size is {max} bytes")]
    ProgramTooLarge { size: usize, max: usize },

    #[error("program counter {pc:#06X} is outside of memory")]
    ProgramCounterOutOfBounds { pc: u16 },

    #[error("memory access of {len} bytes at {addr:#06X} is out of bounds")]
    MemoryOutOfBounds { addr: u16, len: usize },

    #[error("stack overflow: call at {pc:#06X} with a full call stack")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    /// An input or output device failed.
    #[error("device error: {0}")]
    Device(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, EmulatorError>;
