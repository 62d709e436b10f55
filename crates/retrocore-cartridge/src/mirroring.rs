//! Nametable mirroring modes for the NES PPU.
//!
//! The PPU has 2 KiB of internal VRAM but needs 4 KiB to back four logical
//! nametables; mirroring picks which of two physical 1 KiB banks each
//! logical nametable aliases to. Only the two fixed modes an NROM cartridge
//! can select via its iNES header bit are modeled here.

/// Nametable mirroring mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    /// Logical nametables 0,1 map to physical bank 0; 2,3 to bank 1.
    Horizontal,
    /// Logical nametables 0,2 map to physical bank 0; 1,3 to bank 1.
    Vertical,
}

impl Mirroring {
    /// Maps a nametable address (`$2000-$2FFF`, or its `$3000-$3EFF` mirror)
    /// down to its offset in the PPU's 2 KiB of physical VRAM.
    ///
    /// # Examples
    ///
    /// ```
    /// use retrocore_cartridge::Mirroring;
    ///
    /// assert_eq!(Mirroring::Horizontal.map_address(0x2000), 0x0000);
    /// assert_eq!(Mirroring::Horizontal.map_address(0x2800), 0x0400);
    /// assert_eq!(Mirroring::Vertical.map_address(0x2400), 0x0400);
    /// ```
    #[must_use]
    pub fn map_address(self, addr: u16) -> u16 {
        let addr = addr & 0x0FFF;
        let nametable = (addr >> 10) & 0x03;
        let offset = addr & 0x03FF;

        let bank = match self {
            Self::Vertical => match nametable {
                0 | 2 => 0,
                _ => 1,
            },
            Self::Horizontal => match nametable {
                0 | 1 => 0,
                _ => 1,
            },
        };

        (bank << 10) | offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_groups_top_and_bottom_rows() {
        let m = Mirroring::Horizontal;
        assert_eq!(m.map_address(0x2000), 0x0000);
        assert_eq!(m.map_address(0x2400), 0x0000);
        assert_eq!(m.map_address(0x2800), 0x0400);
        assert_eq!(m.map_address(0x2C00), 0x0400);
    }

    #[test]
    fn vertical_groups_left_and_right_columns() {
        let m = Mirroring::Vertical;
        assert_eq!(m.map_address(0x2000), 0x0000);
        assert_eq!(m.map_address(0x2800), 0x0000);
        assert_eq!(m.map_address(0x2400), 0x0400);
        assert_eq!(m.map_address(0x2C00), 0x0400);
    }

    #[test]
    fn addresses_above_2fff_are_masked_identically() {
        let m = Mirroring::Horizontal;
        assert_eq!(m.map_address(0x3000), m.map_address(0x2000));
        assert_eq!(m.map_address(0x3400), m.map_address(0x2400));
    }
}
