use crate::emulator::display::Framebuffer;
use std::io;

/// Represents an output device that presents the framebuffer and plays the beep.
pub trait EmulatorOutput {
    /// Show the framebuffer. Called once per step.
    fn draw(&mut self, screen: &Framebuffer) -> io::Result<()>;

    /// Play the one-shot sound raised when the sound timer runs out.
    fn beep(&mut self) -> io::Result<()>;
}

/// A simple output device that keeps the last frame and counts beeps.
#[derive(Debug, Default)]
pub struct DummyOutput {
    pub last_frame: Option<Framebuffer>,
    pub frames: usize,
    pub beeps: usize,
}

impl DummyOutput {
    pub fn new() -> DummyOutput {
        DummyOutput::default()
    }
}

impl EmulatorOutput for DummyOutput {
    fn draw(&mut self, screen: &Framebuffer) -> io::Result<()> {
        self.last_frame = Some(screen.clone());
        self.frames += 1;
        Ok(())
    }

    fn beep(&mut self) -> io::Result<()> {
        self.beeps += 1;
        Ok(())
    }
}
