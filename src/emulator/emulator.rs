//! The fetch-decode-execute cycle.

use crate::emulator::display::Framebuffer;
use crate::emulator::error::{EmulatorError, Result};
use crate::emulator::input::KeyLatch;
use crate::emulator::instruction::*;
use crate::emulator::state::{State, FLAG_REGISTER, GLYPH_SIZE};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The instruction ran to completion.
    Executed(Instruction),
    /// `FX0A` found no key held. The program counter is unchanged,
    /// so the same instruction runs again on the next step.
    WaitingForKey,
    /// The word at the program counter is not an instruction. It was skipped.
    UnknownOpcode(u16),
}

/// The result of one call to `Emulator::step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub outcome: Outcome,
    /// The sound timer ran out during this step.
    pub beep: bool,
}

/// How the program counter moves after an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Next,
    Skip,
    Jump(u16),
    Stall,
}

impl Flow {
    fn skip_if(condition: bool) -> Flow {
        if condition {
            Flow::Skip
        } else {
            Flow::Next
        }
    }
}

pub struct Emulator {
    state: State,
    rng: StdRng,
}

impl Emulator {

    /// Create a new emulator with a randomly seeded random number generator.
    pub fn new() -> Emulator {
        Emulator {
            state: State::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a new emulator whose `CXNN` results are reproducible.
    pub fn with_seed(seed: u64) -> Emulator {
        Emulator {
            state: State::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Copy a program into memory at 0x200.
    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        self.state.load(program)?;
        log::info!("Loaded program of {} bytes", program.len());
        Ok(())
    }

    /// Read a program image from disk and copy it into memory at 0x200.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let program = std::fs::read(path).map_err(|source| EmulatorError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        self.load(&program)
    }

    /// Put the machine back in its power-on state. Loaded programs are lost.
    pub fn reset(&mut self) {
        self.state = State::new();
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn screen(&self) -> &Framebuffer {
        &self.state.screen
    }

    pub fn keys_mut(&mut self) -> &mut KeyLatch {
        &mut self.state.keys
    }

    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.state.keys.set(key, pressed);
    }

    /// Perform a single step: fetch the instruction at the program counter,
    /// execute it, then tick the timers.
    ///
    /// A fault leaves the machine exactly as it was before the step.
    pub fn step(&mut self) -> Result<Step> {
        let word = self.state.fetch()?;

        let outcome = match Instruction::decode(word) {
            Some(instruction) => {
                log::trace!("{:#06x}: {:?}", self.state.program_counter, instruction);
                self.execute_single(instruction)?
            }
            None => {
                log::warn!(
                    "Unknown opcode {:#06x} at {:#06x}, skipping",
                    word,
                    self.state.program_counter
                );
                self.advance(Flow::Next);
                Outcome::UnknownOpcode(word)
            }
        };

        let beep = self.state.timers.tick();
        Ok(Step { outcome, beep })
    }

    /// Execute a single instruction as if it had been fetched at the program counter.
    /// Timers are not ticked.
    pub fn execute_single(&mut self, instruction: Instruction) -> Result<Outcome> {
        let flow = self.execute(instruction).map_err(|err| {
            log::error!("{:?} failed: {}", instruction, err);
            err
        })?;
        self.advance(flow);

        if flow == Flow::Stall {
            Ok(Outcome::WaitingForKey)
        } else {
            Ok(Outcome::Executed(instruction))
        }
    }

    /// Execute instructions in order, stopping at the first fault.
    pub fn execute_many(&mut self, instructions: &[Instruction]) -> Result<()> {
        for instruction in instructions {
            self.execute_single(*instruction)?;
        }
        Ok(())
    }

    fn advance(&mut self, flow: Flow) {
        let pc = &mut self.state.program_counter;
        match flow {
            Flow::Next => *pc = pc.wrapping_add(2),
            Flow::Skip => *pc = pc.wrapping_add(4),
            Flow::Jump(addr) => *pc = addr,
            Flow::Stall => {}
        }
    }

    fn reg(&self, Reg(x): Reg) -> u8 {
        self.state.registers[x as usize]
    }

    fn set_reg(&mut self, Reg(x): Reg, value: u8) {
        self.state.registers[x as usize] = value;
    }

    /// Write a register, then the flag register. When `x` is VF the flag wins.
    fn set_reg_and_flag(&mut self, x: Reg, value: u8, flag: u8) {
        self.set_reg(x, value);
        self.state.registers[FLAG_REGISTER] = flag;
    }

    fn execute(&mut self, instruction: Instruction) -> Result<Flow> {
        let flow = match instruction {

            Instruction::ClearScreen => {
                self.state.screen.clear();
                Flow::Next
            }

            // Return to the address pushed by the matching call
            Instruction::Return => Flow::Jump(self.state.pop()?),

            Instruction::Goto(Addr(addr)) => Flow::Jump(addr),

            // Push the address of the next instruction, then jump
            Instruction::Call(Addr(addr)) => {
                let return_addr = self.state.program_counter.wrapping_add(2);
                self.state.push(return_addr)?;
                Flow::Jump(addr)
            }

            Instruction::IfRegEqConst(x, Const(n)) => Flow::skip_if(self.reg(x) == n),

            Instruction::IfRegNeqConst(x, Const(n)) => Flow::skip_if(self.reg(x) != n),

            Instruction::IfRegEqReg(x, y) => Flow::skip_if(self.reg(x) == self.reg(y)),

            Instruction::SetRegToConst(x, Const(n)) => {
                self.set_reg(x, n);
                Flow::Next
            }

            // No carry flag for the immediate form
            Instruction::IncRegByConst(x, Const(n)) => {
                self.set_reg(x, self.reg(x).wrapping_add(n));
                Flow::Next
            }

            Instruction::SetRegToReg(x, y) => {
                self.set_reg(x, self.reg(y));
                Flow::Next
            }

            Instruction::BitwiseOr(x, y) => {
                self.set_reg(x, self.reg(x) | self.reg(y));
                Flow::Next
            }

            Instruction::BitwiseAnd(x, y) => {
                self.set_reg(x, self.reg(x) & self.reg(y));
                Flow::Next
            }

            Instruction::BitwiseXor(x, y) => {
                self.set_reg(x, self.reg(x) ^ self.reg(y));
                Flow::Next
            }

            // VF = 1 on carry
            Instruction::IncRegByReg(x, y) => {
                let (sum, carry) = self.reg(x).overflowing_add(self.reg(y));
                self.set_reg_and_flag(x, sum, carry as u8);
                Flow::Next
            }

            // VF = 1 only if Vx is strictly greater than Vy
            Instruction::DecRegByReg(x, y) => {
                let (vx, vy) = (self.reg(x), self.reg(y));
                self.set_reg_and_flag(x, vx.wrapping_sub(vy), (vx > vy) as u8);
                Flow::Next
            }

            Instruction::BitshiftRight(x) => {
                let vx = self.reg(x);
                self.set_reg_and_flag(x, vx >> 1, vx & 0x01);
                Flow::Next
            }

            // VF = 1 only if Vy is strictly greater than Vx
            Instruction::SetVxVyMinusVx(x, y) => {
                let (vx, vy) = (self.reg(x), self.reg(y));
                self.set_reg_and_flag(x, vy.wrapping_sub(vx), (vy > vx) as u8);
                Flow::Next
            }

            // VF keeps the masked bit, so it is 0x80 rather than 1
            Instruction::BitshiftLeft(x) => {
                let vx = self.reg(x);
                self.set_reg_and_flag(x, vx << 1, vx & 0x80);
                Flow::Next
            }

            Instruction::IfRegNeqReg(x, y) => Flow::skip_if(self.reg(x) != self.reg(y)),

            Instruction::SetI(Addr(addr)) => {
                self.state.i = addr;
                Flow::Next
            }

            Instruction::SetPcToV0PlusAddr(Addr(addr)) => {
                Flow::Jump(addr + self.state.registers[0] as u16)
            }

            Instruction::SetVxRand(x, Const(n)) => {
                let value: u8 = self.rng.gen();
                self.set_reg(x, value & n);
                Flow::Next
            }

            // VF is cleared before the coordinates are read, so DFYN and DXFN draw at 0
            Instruction::Draw(Reg(x), Reg(y), Const(height)) => {
                let state = &mut self.state;
                let start = state.i as usize;
                let len = height as usize;
                let sprite = state
                    .memory
                    .get(start..start + len)
                    .ok_or(EmulatorError::MemoryOutOfBounds { addr: state.i, len })?;
                state.registers[FLAG_REGISTER] = 0;
                let vx = state.registers[x as usize];
                let vy = state.registers[y as usize];
                let collision = state.screen.draw(sprite, vx, vy);
                state.registers[FLAG_REGISTER] = collision as u8;
                Flow::Next
            }

            Instruction::IfKeyEqVx(x) => Flow::skip_if(self.state.keys.is_pressed(self.reg(x))),

            Instruction::IfKeyNeqVx(x) => Flow::skip_if(!self.state.keys.is_pressed(self.reg(x))),

            Instruction::SetRegToDelayTimer(x) => {
                self.set_reg(x, self.state.timers.delay);
                Flow::Next
            }

            // Poll rather than block; the host keeps calling step until a key is held
            Instruction::SetRegToGetKey(x) => match self.state.keys.first_pressed() {
                Some(key) => {
                    self.set_reg(x, key);
                    Flow::Next
                }
                None => {
                    log::debug!("Waiting for key at {:#06x}", self.state.program_counter);
                    Flow::Stall
                }
            },

            Instruction::SetDelayTimerToReg(x) => {
                self.state.timers.delay = self.reg(x);
                Flow::Next
            }

            Instruction::SetSoundTimerToReg(x) => {
                self.state.timers.sound = self.reg(x);
                Flow::Next
            }

            // VF = 1 if I leaves the 12-bit address space
            Instruction::AddRegToI(x) => {
                let sum = self.state.i as u32 + self.reg(x) as u32;
                self.state.i = sum as u16;
                self.state.registers[FLAG_REGISTER] = (sum > 0xFFF) as u8;
                Flow::Next
            }

            Instruction::SetIToSpriteAddrVx(x) => {
                self.state.i = GLYPH_SIZE * self.reg(x) as u16;
                Flow::Next
            }

            Instruction::SetIToBcdOfReg(x) => {
                let value = self.reg(x);
                let i = self.state.i;
                let digits = self.state.memory_mut(i, 3)?;
                digits[0] = value / 100;
                digits[1] = (value / 10) % 10;
                digits[2] = value % 10;
                Flow::Next
            }

            // Store V0..=Vx at I, leaving I unchanged
            Instruction::RegDump(Reg(x)) => {
                let count = x as usize + 1;
                let i = self.state.i;
                let registers = self.state.registers;
                self.state
                    .memory_mut(i, count)?
                    .copy_from_slice(&registers[..count]);
                Flow::Next
            }

            // Load V0..=Vx from I, leaving I unchanged
            Instruction::RegLoad(Reg(x)) => {
                let count = x as usize + 1;
                let mut values = [0; 16];
                values[..count].copy_from_slice(self.state.memory(self.state.i, count)?);
                self.state.registers[..count].copy_from_slice(&values[..count]);
                Flow::Next
            }
        };

        Ok(flow)
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
