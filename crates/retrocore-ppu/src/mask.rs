//! PPU Mask Register ($2001).
//!
//! The PPU mask register controls rendering and color effects:
//!
//! ```text
//! 7  6  5  4  3  2  1  0
//! B  G  R  s  b  M  m  G
//! |  |  |  |  |  |  |  +-- Greyscale (0: normal, 1: greyscale)
//! |  |  |  |  |  |  +----- Show background in leftmost 8 pixels (0: hide, 1: show)
//! |  |  |  |  |  +-------- Show sprites in leftmost 8 pixels (0: hide, 1: show)
//! |  |  |  |  +----------- Show background (0: hide, 1: show)
//! |  |  |  +-------------- Show sprites (0: hide, 1: show)
//! |  |  +----------------- Emphasize red (green on PAL/Dendy)
//! |  +-------------------- Emphasize green (red on PAL/Dendy)
//! +----------------------- Emphasize blue
//! ```

use bitflags::bitflags;

bitflags! {
    /// PPU Mask Register flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mask: u8 {
        /// Greyscale mode.
        const GREYSCALE = 1 << 0;
        /// Show background in leftmost 8 pixels of screen.
        const BG_LEFT = 1 << 1;
        /// Show sprites in leftmost 8 pixels of screen.
        const SPRITES_LEFT = 1 << 2;
        /// Show background.
        const BG_ENABLE = 1 << 3;
        /// Show sprites.
        const SPRITES_ENABLE = 1 << 4;
        /// Emphasize red (NTSC) / green (PAL/Dendy).
        const EMPHASIZE_RED = 1 << 5;
        /// Emphasize green (NTSC) / red (PAL/Dendy).
        const EMPHASIZE_GREEN = 1 << 6;
        /// Emphasize blue.
        const EMPHASIZE_BLUE = 1 << 7;
    }
}

impl Mask {
    /// Check if greyscale mode is enabled.
    #[must_use]
    #[inline]
    pub const fn greyscale(self) -> bool {
        self.contains(Self::GREYSCALE)
    }

    /// Check if background is shown in leftmost 8 pixels.
    #[must_use]
    #[inline]
    pub const fn bg_left_enabled(self) -> bool {
        self.contains(Self::BG_LEFT)
    }

    /// Check if sprites are shown in leftmost 8 pixels.
    #[must_use]
    #[inline]
    pub const fn sprites_left_enabled(self) -> bool {
        self.contains(Self::SPRITES_LEFT)
    }

    /// Check if background rendering is enabled.
    #[must_use]
    #[inline]
    pub const fn bg_enabled(self) -> bool {
        self.contains(Self::BG_ENABLE)
    }

    /// Check if sprite rendering is enabled.
    #[must_use]
    #[inline]
    pub const fn sprites_enabled(self) -> bool {
        self.contains(Self::SPRITES_ENABLE)
    }

    /// Check if any rendering is enabled (background or sprites).
    #[must_use]
    #[inline]
    pub const fn rendering_enabled(self) -> bool {
        self.intersects(Self::BG_ENABLE.union(Self::SPRITES_ENABLE))
    }

    /// Get the emphasis bits (bits 5-7).
    #[must_use]
    #[inline]
    pub const fn emphasis(self) -> u8 {
        (self.bits() >> 5) & 0x07
    }

    /// Apply greyscale mask to a color index if enabled.
    #[must_use]
    #[inline]
    pub const fn apply_greyscale(self, color: u8) -> u8 {
        if self.greyscale() {
            color & 0x30
        } else {
            color
        }
    }
}
