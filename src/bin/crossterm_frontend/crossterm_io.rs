use chip_8_interpreter::emulator::display::{Framebuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
use chip_8_interpreter::emulator::input::{EmulatorInput, KeyLatch};
use chip_8_interpreter::emulator::output::EmulatorOutput;

use super::key_manager::KeyManager;

use crossterm::event::{poll, read, Event};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, stdout, Stdout, Write};
use std::time::{Duration, Instant};

fn io_error(err: crossterm::ErrorKind) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

pub struct CrosstermInput {
    key_manager: KeyManager,
}

impl CrosstermInput {
    pub fn new(key_manager: KeyManager) -> CrosstermInput {
        CrosstermInput { key_manager }
    }
}

impl EmulatorInput for CrosstermInput {
    fn update(&mut self, keys: &mut KeyLatch) -> io::Result<()> {
        // Drain whatever arrived since the last step without blocking
        while poll(Duration::from_millis(0)).map_err(io_error)? {
            match read().map_err(io_error)? {
                Event::Key(key_event) => self.key_manager.press(key_event, Instant::now()),
                event => log::trace!("Ignoring event {:?}", event),
            }
        }
        self.key_manager.apply(keys, Instant::now());
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.key_manager.quit_requested()
    }
}

/// Draws the screen inside a box, two terminal columns per cell.
pub struct CrosstermOutput {
    out: Stdout,
    shown: Option<Framebuffer>,
}

impl CrosstermOutput {
    pub fn new() -> io::Result<CrosstermOutput> {
        let mut out = stdout();
        terminal::enable_raw_mode().map_err(io_error)?;
        execute!(out, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All)).map_err(io_error)?;

        let bottom = SCREEN_HEIGHT as u16 + 1;
        let right = 2 * SCREEN_WIDTH as u16 + 1;
        for y in 0..=bottom {
            for x in 0..=right {
                let c = match (x, y) {
                    (0, 0) => '┏',
                    (x, 0) if x == right => '┓',
                    (0, y) if y == bottom => '┗',
                    (x, y) if x == right && y == bottom => '┛',
                    (_, y) if y == 0 || y == bottom => '━',
                    (x, _) if x == 0 || x == right => '┃',
                    _ => continue,
                };
                queue!(out, cursor::MoveTo(x, y), Print(c)).map_err(io_error)?;
            }
        }
        out.flush()?;

        Ok(CrosstermOutput { out, shown: None })
    }

    fn draw_cell(&mut self, x: usize, y: usize, lit: bool) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(2 * x as u16 + 1, y as u16 + 1),
            Print(if lit { "██" } else { "  " })
        )
        .map_err(io_error)
    }
}

impl Drop for CrosstermOutput {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl EmulatorOutput for CrosstermOutput {
    fn draw(&mut self, screen: &Framebuffer) -> io::Result<()> {
        // Only touch the cells that changed since the last frame
        let previous = self.shown.take();
        for (index, lit) in screen.cells().iter().enumerate() {
            let changed = previous.as_ref().map_or(true, |shown| shown.cells()[index] != *lit);
            if changed {
                self.draw_cell(index % SCREEN_WIDTH, index / SCREEN_WIDTH, *lit)?;
            }
        }
        self.out.flush()?;
        self.shown = Some(screen.clone());
        Ok(())
    }

    fn beep(&mut self) -> io::Result<()> {
        write!(self.out, "\x07")?;
        self.out.flush()
    }
}
