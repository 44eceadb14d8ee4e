//! All mutable machine state, as described at https://en.wikipedia.org/wiki/CHIP-8#Virtual_machine_description.
//!
//! The accessors here are bounds checked and fail without side effects;
//! deciding what counts as a valid access is up to the dispatcher.

use crate::emulator::display::Framebuffer;
use crate::emulator::error::{EmulatorError, Result};
use crate::emulator::input::KeyLatch;
use crate::emulator::opcode::Opcode;
use crate::emulator::timers::Timers;

pub const MEM_SIZE: usize = 4096;
pub const NUM_REGISTERS: usize = 16;
pub const STACK_SIZE: usize = 16;
pub const PC_START: u16 = 0x200;
pub const MAX_PROGRAM_SIZE: usize = MEM_SIZE - PC_START as usize;

/// Register VF, written by arithmetic, shifts and draws.
pub const FLAG_REGISTER: usize = 0xF;

/// Bytes per glyph in the built-in font.
pub const GLYPH_SIZE: u16 = 5;

pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

#[derive(Debug, Clone)]
pub struct State {
    pub memory: [u8; MEM_SIZE],
    pub registers: [u8; NUM_REGISTERS],
    pub i: u16,
    pub program_counter: u16,
    pub stack: [u16; STACK_SIZE],
    pub stack_pointer: usize,
    pub timers: Timers,
    pub keys: KeyLatch,
    pub screen: Framebuffer,
}

impl State {

    /// Zeroed state with the font loaded and the program counter at 0x200.
    pub fn new() -> State {
        let mut memory = [0; MEM_SIZE];
        memory[..FONT.len()].copy_from_slice(&FONT);

        State {
            memory,
            registers: [0; NUM_REGISTERS],
            i: 0,
            program_counter: PC_START,
            stack: [0; STACK_SIZE],
            stack_pointer: 0,
            timers: Timers::new(),
            keys: KeyLatch::new(),
            screen: Framebuffer::new(),
        }
    }

    /// Copy a program into memory at 0x200.
    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(EmulatorError::ProgramTooLarge {
                size: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        let start = PC_START as usize;
        self.memory[start..start + program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Read the big-endian instruction word at the program counter.
    pub fn fetch(&self) -> Result<u16> {
        let pc = self.program_counter;
        match self.memory(pc, 2) {
            Ok(word) => Ok(Opcode::from_bytes(word[0], word[1]).0),
            Err(_) => Err(EmulatorError::ProgramCounterOutOfBounds { pc }),
        }
    }

    /// `len` bytes of memory starting at `addr`.
    pub fn memory(&self, addr: u16, len: usize) -> Result<&[u8]> {
        let start = addr as usize;
        self.memory
            .get(start..start + len)
            .ok_or(EmulatorError::MemoryOutOfBounds { addr, len })
    }

    pub fn memory_mut(&mut self, addr: u16, len: usize) -> Result<&mut [u8]> {
        let start = addr as usize;
        self.memory
            .get_mut(start..start + len)
            .ok_or(EmulatorError::MemoryOutOfBounds { addr, len })
    }

    /// Push a return address onto the call stack.
    pub fn push(&mut self, addr: u16) -> Result<()> {
        if self.stack_pointer >= STACK_SIZE {
            return Err(EmulatorError::StackOverflow { pc: self.program_counter });
        }
        self.stack[self.stack_pointer] = addr;
        self.stack_pointer += 1;
        Ok(())
    }

    /// Pop the most recent return address off the call stack.
    pub fn pop(&mut self) -> Result<u16> {
        if self.stack_pointer == 0 {
            return Err(EmulatorError::StackUnderflow { pc: self.program_counter });
        }
        self.stack_pointer -= 1;
        Ok(self.stack[self.stack_pointer])
    }

    pub fn flag(&self) -> u8 {
        self.registers[FLAG_REGISTER]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
