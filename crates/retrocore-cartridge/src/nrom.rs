//! Mapper 0: NROM.
//!
//! The simplest NES cartridge: no bank switching, 16 or 32 KiB of PRG ROM,
//! and 8 KiB of CHR (ROM or RAM). Used by Super Mario Bros., Donkey Kong,
//! Ice Climber, and most other early launch titles.
//!
//! ```text
//! CPU $6000-$7FFF: unmapped, reads as 0
//! CPU $8000-$BFFF: PRG ROM, addr & 0x3FFF
//! CPU $C000-$FFFF: last 16 KiB bank (mirrors the first when prg_banks == 1)
//! PPU $0000-$1FFF: 8 KiB CHR ROM or RAM, no banking
//! ```

use crate::mapper::Cartridge;
use crate::rom::{CartridgeError, Rom};
use crate::Mirroring;

/// NROM cartridge state.
pub struct Nrom {
    prg_rom: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,
    mirroring: Mirroring,
    prg_banks: u8,
    chr_banks: u8,
}

impl Nrom {
    /// Parses an iNES file and builds the NROM cartridge it describes.
    ///
    /// # Errors
    ///
    /// Returns [`CartridgeError`] if the file is malformed or names a
    /// mapper other than NROM (see [`Rom::from_ines_bytes`]).
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        let rom = Rom::from_ines_bytes(data)?;
        let chr_is_ram = rom.chr_rom.is_empty();
        let chr = if chr_is_ram {
            vec![0; 8192]
        } else {
            rom.chr_rom
        };

        Ok(Self {
            prg_rom: rom.prg_rom,
            chr,
            chr_is_ram,
            mirroring: rom.mirroring,
            prg_banks: rom.prg_banks,
            chr_banks: rom.chr_banks,
        })
    }
}

impl Cartridge for Nrom {
    fn cpu_read(&mut self, addr: u16) -> u8 {
        match addr {
            0x6000..=0x7FFF => 0,
            0x8000..=0xBFFF => self.prg_rom[(addr & 0x3FFF) as usize],
            0xC000..=0xFFFF => {
                let offset = (addr & 0x3FFF) as usize;
                let bank_offset = if self.prg_banks == 1 { 0 } else { 0x4000 };
                self.prg_rom[bank_offset + offset]
            }
            _ => 0,
        }
    }

    fn cpu_write(&mut self, _addr: u16, _value: u8) {
        // NROM has no writable PRG registers or PRG RAM; discarded.
    }

    fn chr_read(&mut self, addr: u16) -> u8 {
        self.chr[(addr & 0x1FFF) as usize]
    }

    fn chr_write(&mut self, addr: u16, value: u8) {
        if self.chr_is_ram {
            self.chr[(addr & 0x1FFF) as usize] = value;
        }
    }

    fn prg_banks(&self) -> u8 {
        self.prg_banks
    }

    fn chr_banks(&self) -> u8 {
        self.chr_banks
    }

    fn mirror(&self) -> Mirroring {
        self.mirroring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ines(prg_banks: u8, chr_banks: u8, flags6: u8, prg_fill: u8, chr_fill: u8) -> Vec<u8> {
        let mut data = vec![0x4E, 0x45, 0x53, 0x1A, prg_banks, chr_banks, flags6, 0];
        data.resize(16, 0);
        data.extend(vec![prg_fill; usize::from(prg_banks) * 16384]);
        data.extend(vec![chr_fill; usize::from(chr_banks) * 8192]);
        data
    }

    #[test]
    fn nrom_256_maps_both_banks_directly() {
        let mut data = ines(2, 1, 0, 0, 0);
        data[16] = 0x11; // first byte of bank 0
        data[16 + 16384] = 0x22; // first byte of bank 1
        let mut cart = Nrom::from_ines_bytes(&data).unwrap();
        assert_eq!(cart.cpu_read(0x8000), 0x11);
        assert_eq!(cart.cpu_read(0xC000), 0x22);
    }

    #[test]
    fn nrom_128_mirrors_the_single_bank() {
        let mut data = ines(1, 1, 0, 0, 0);
        data[16] = 0x33;
        let mut cart = Nrom::from_ines_bytes(&data).unwrap();
        assert_eq!(cart.cpu_read(0x8000), 0x33);
        assert_eq!(cart.cpu_read(0xC000), 0x33);
    }

    #[test]
    fn sram_window_reads_zero() {
        let data = ines(1, 1, 0, 0, 0);
        let mut cart = Nrom::from_ines_bytes(&data).unwrap();
        assert_eq!(cart.cpu_read(0x6000), 0);
        assert_eq!(cart.cpu_read(0x7FFF), 0);
    }

    #[test]
    fn prg_writes_are_silently_discarded() {
        let mut data = ines(1, 1, 0, 0, 0);
        data[16] = 0xAA;
        let mut cart = Nrom::from_ines_bytes(&data).unwrap();
        cart.cpu_write(0x8000, 0xFF);
        assert_eq!(cart.cpu_read(0x8000), 0xAA);
    }

    #[test]
    fn chr_rom_is_read_only() {
        let mut data = ines(1, 1, 0, 0, 0);
        data[16 + 16384] = 0x77;
        let mut cart = Nrom::from_ines_bytes(&data).unwrap();
        assert_eq!(cart.chr_read(0x0000), 0x77);
        cart.chr_write(0x0000, 0x00);
        assert_eq!(cart.chr_read(0x0000), 0x77);
    }

    #[test]
    fn chr_ram_is_writable_when_header_requests_it() {
        let data = ines(1, 0, 0, 0, 0);
        let mut cart = Nrom::from_ines_bytes(&data).unwrap();
        cart.chr_write(0x0000, 0x42);
        assert_eq!(cart.chr_read(0x0000), 0x42);
    }

    #[test]
    fn mirroring_comes_from_the_header() {
        let data = ines(1, 1, 0x01, 0, 0);
        let cart = Nrom::from_ines_bytes(&data).unwrap();
        assert_eq!(cart.mirror(), Mirroring::Vertical);
    }
}
