//! The monochrome framebuffer and the sprite compositor that draws into it.

use std::fmt;

pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;
const SCREEN_CELLS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// 64x32 cells stored row-major, `true` meaning lit.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    cells: [bool; SCREEN_CELLS],
}

impl Framebuffer {
    pub fn new() -> Framebuffer {
        Framebuffer {
            cells: [false; SCREEN_CELLS],
        }
    }

    /// Turn every cell off.
    pub fn clear(&mut self) {
        self.cells = [false; SCREEN_CELLS];
    }

    /// XOR a sprite onto the screen with its top left corner at (x, y).
    ///
    /// Each byte of `sprite` is one row, most significant bit leftmost.
    /// Coordinates wrap around both edges of the screen.
    /// Returns true if any lit cell was turned off.
    pub fn draw(&mut self, sprite: &[u8], x: u8, y: u8) -> bool {
        let mut collision = false;
        for (row_offset, row) in sprite.iter().enumerate() {
            let cell_y = (y as usize + row_offset) % SCREEN_HEIGHT;
            for bit in 0..8 {
                if row & (0x80 >> bit) == 0 {
                    continue;
                }
                let cell_x = (x as usize + bit) % SCREEN_WIDTH;
                let cell = &mut self.cells[cell_y * SCREEN_WIDTH + cell_x];
                collision |= *cell;
                *cell = !*cell;
            }
        }
        collision
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.cells[(y % SCREEN_HEIGHT) * SCREEN_WIDTH + x % SCREEN_WIDTH]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(SCREEN_WIDTH)
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lit = self.cells.iter().filter(|c| **c).count();
        f.debug_struct("Framebuffer").field("lit", &lit).finish()
    }
}

impl fmt::Display for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for c in row.iter() {
                write!(f, "{}", if *c { "#" } else { " " })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
