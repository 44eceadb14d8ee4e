/// A fetched two-byte instruction word, with accessors for
/// the fixed operand fields of the CHIP-8 encoding.
///
/// ```text
/// 0xFXYN
///   F    family (bits 12-15)
///    X   register x (bits 8-11)
///     Y  register y (bits 4-7)
///      N nibble (bits 0-3)
///     KK byte (bits 0-7)
///    NNN address (bits 0-11)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    /// Combine two bytes as stored in memory, most significant first.
    pub fn from_bytes(left: u8, right: u8) -> Opcode {
        Opcode(((left as u16) << 8) | right as u16)
    }

    /// All four nibbles, most significant first.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        (self.family(), self.x(), self.y(), self.n())
    }

    pub fn family(self) -> u8 {
        ((self.0 >> 12) & 0xF) as u8
    }

    pub fn x(self) -> u8 {
        ((self.0 >> 8) & 0xF) as u8
    }

    pub fn y(self) -> u8 {
        ((self.0 >> 4) & 0xF) as u8
    }

    pub fn n(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    pub fn kk(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub fn nnn(self) -> u16 {
        self.0 & 0x0FFF
    }
}
