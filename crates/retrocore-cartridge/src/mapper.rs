//! The cartridge capability surface.
//!
//! The PPU and the NES integration bus both hold a handle to the cartridge
//! for the lifetime of the machine; neither owns it, so access goes through
//! a narrow trait rather than a concrete struct, the same way the CPU talks
//! to memory through a `Bus` trait rather than a specific RAM type.

use crate::Mirroring;

/// A cartridge's PRG/CHR memory and mirroring mode, as seen from the CPU and
/// PPU buses.
///
/// Only mapper 0 (NROM) is implemented in this crate; the trait exists so
/// the integration layer is not written against one concrete cartridge
/// type.
pub trait Cartridge {
    /// Reads a byte from CPU address space (`$4020-$FFFF`).
    fn cpu_read(&mut self, addr: u16) -> u8;

    /// Writes a byte to CPU address space. Writes to read-only regions are
    /// silently discarded.
    fn cpu_write(&mut self, addr: u16, value: u8);

    /// Reads a byte of pattern-table data (`$0000-$1FFF` on the PPU bus).
    fn chr_read(&mut self, addr: u16) -> u8;

    /// Writes a byte of pattern-table data. Discarded when CHR is ROM.
    fn chr_write(&mut self, addr: u16, value: u8);

    /// Number of 16 KiB PRG ROM banks.
    fn prg_banks(&self) -> u8;

    /// Number of 8 KiB CHR ROM banks (0 means the cartridge uses CHR RAM).
    fn chr_banks(&self) -> u8;

    /// Nametable mirroring mode selected by the cartridge.
    fn mirror(&self) -> Mirroring;
}
