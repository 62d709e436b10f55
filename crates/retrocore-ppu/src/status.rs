//! PPU Status Register ($2002).
//!
//! The PPU status register is read-only and contains:
//!
//! ```text
//! 7  6  5  4  3  2  1  0
//! V  S  O  .  .  .  .  .
//! |  |  |  +--+--+--+--+-- unused
//! |  |  +----------------- Sprite overflow flag
//! |  +-------------------- Sprite 0 hit flag
//! +----------------------- VBlank flag
//! ```
//!
//! Reading $2002 clears the VBlank flag and resets the address latch (`w`);
//! that side effect lives on [`Ppu`](crate::Ppu) since it also touches
//! `nmi_occurred`, which is not part of this register's stored bits.

use bitflags::bitflags;

bitflags! {
    /// PPU Status Register flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Status: u8 {
        /// Sprite overflow - Set when more than 8 sprites on a scanline.
        /// Note: Hardware has a bug causing false positives/negatives.
        const SPRITE_OVERFLOW = 1 << 5;
        /// Sprite 0 hit - Set when a non-transparent pixel of sprite 0
        /// overlaps a non-transparent background pixel.
        const SPRITE_ZERO_HIT = 1 << 6;
        /// VBlank flag - Set at dot 1 of line 241 (post-render line).
        /// Cleared after reading $2002 and at dot 1 of pre-render line.
        const VBLANK = 1 << 7;
    }
}

impl Status {
    /// Check if VBlank flag is set.
    #[must_use]
    #[inline]
    pub const fn in_vblank(self) -> bool {
        self.contains(Self::VBLANK)
    }

    /// Check if sprite 0 hit occurred.
    #[must_use]
    #[inline]
    pub const fn sprite_zero_hit(self) -> bool {
        self.contains(Self::SPRITE_ZERO_HIT)
    }

    /// Check if sprite overflow occurred.
    #[must_use]
    #[inline]
    pub const fn sprite_overflow(self) -> bool {
        self.contains(Self::SPRITE_OVERFLOW)
    }

    /// Set or clear the VBlank flag.
    #[inline]
    pub fn set_vblank(&mut self, value: bool) {
        if value {
            *self |= Self::VBLANK;
        } else {
            *self &= !Self::VBLANK;
        }
    }

    /// Set or clear the sprite 0 hit flag.
    #[inline]
    pub fn set_sprite_zero_hit(&mut self, value: bool) {
        if value {
            *self |= Self::SPRITE_ZERO_HIT;
        } else {
            *self &= !Self::SPRITE_ZERO_HIT;
        }
    }

    /// Set or clear the sprite overflow flag.
    #[inline]
    pub fn set_sprite_overflow(&mut self, value: bool) {
        if value {
            *self |= Self::SPRITE_OVERFLOW;
        } else {
            *self &= !Self::SPRITE_OVERFLOW;
        }
    }
}
