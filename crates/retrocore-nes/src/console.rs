//! Top-level NES console: owns the CPU and bus, and drives both in lockstep
//! one frame at a time.

use crate::bus::NesBus;
use retrocore_cartridge::{CartridgeError, Nrom};
use retrocore_cpu::Cpu;

/// PPU dots run per CPU cycle on NTSC hardware.
const PPU_DOTS_PER_CPU_CYCLE: u32 = 3;
/// CPU cycles an OAM DMA transfer costs, regardless of alignment.
const OAM_DMA_CYCLES: u64 = 514;
/// PPU dots run while an OAM DMA transfer is in flight (514 CPU cycles worth).
const OAM_DMA_PPU_DOTS: u32 = 1542;

/// Errors that can prevent a console from being constructed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConsoleError {
    /// The ROM image could not be parsed.
    #[error(transparent)]
    Cartridge(#[from] CartridgeError),
}

/// A complete NES console: 6502 CPU, 2C02 PPU, and a cartridge, wired onto
/// one bus and stepped one frame at a time.
pub struct Console {
    cpu: Cpu,
    bus: NesBus,
}

impl Console {
    /// Parses `rom_bytes` as an NROM iNES image and builds a console around it.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] if the image is malformed or names a mapper
    /// other than NROM.
    pub fn new(rom_bytes: &[u8]) -> Result<Self, ConsoleError> {
        let cartridge = Nrom::from_ines_bytes(rom_bytes)?;
        Ok(Self::with_cartridge(Box::new(cartridge)))
    }

    /// Builds a console around a host-supplied cartridge.
    #[must_use]
    pub fn with_cartridge(cartridge: Box<dyn retrocore_cartridge::Cartridge>) -> Self {
        let mut cpu = Cpu::new();
        let mut bus = NesBus::new(cartridge);
        cpu.reset(&mut bus);
        Self { cpu, bus }
    }

    /// Resets the CPU and PPU to their power-on state, keeping the same
    /// cartridge loaded.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.bus.ppu.reset();
    }

    /// Sets the live button state for controller port 0 or 1.
    pub fn set_controller_state(&mut self, port: usize, buttons: u8) {
        self.bus.set_controller_state(port, buttons);
    }

    /// The most recently rendered frame, one ARGB8888 word per pixel,
    /// 256x240 pixels, row-major.
    #[must_use]
    pub fn framebuffer(&self) -> &[u32] {
        self.bus.ppu.framebuffer()
    }

    /// Total CPU cycles elapsed since construction or the last reset.
    #[must_use]
    pub fn total_cycles(&self) -> u64 {
        self.cpu.cycles
    }

    /// Runs the console until the PPU completes one full frame.
    ///
    /// Each iteration either services a pending OAM DMA (514 CPU cycles,
    /// during which the CPU does not execute instructions) or steps the CPU
    /// once and runs the PPU three dots for every CPU cycle elapsed. An NMI
    /// edge from the PPU, however it arises, is delivered to the CPU
    /// immediately.
    pub fn step_frame(&mut self) {
        let start_frame = self.bus.ppu.frame();
        while self.bus.ppu.frame() == start_frame {
            if self.bus.dma_pending {
                self.bus.dma_pending = false;
                let page = self.bus.dma_page;
                self.bus.run_oam_dma(page);
                for _ in 0..OAM_DMA_PPU_DOTS {
                    if self.bus.step_ppu() {
                        self.cpu.nmi(&mut self.bus);
                    }
                }
                self.cpu.cycles += OAM_DMA_CYCLES;
            } else {
                let cycles_before = self.cpu.cycles;
                self.cpu.step(&mut self.bus);
                let elapsed = self.cpu.cycles - cycles_before;
                for _ in 0..(elapsed as u32 * PPU_DOTS_PER_CPU_CYCLE) {
                    if self.bus.step_ppu() {
                        self.cpu.nmi(&mut self.bus);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 16 + 16384 + 8192];
        rom[0..4].copy_from_slice(&[0x4E, 0x45, 0x53, 0x1A]);
        rom[4] = 1; // 16KB PRG
        rom[5] = 1; // 8KB CHR
        // reset vector -> $8000, infinite JMP $8000
        rom[16 + 0x3FFC] = 0x00;
        rom[16 + 0x3FFD] = 0x80;
        rom[16] = 0x4C;
        rom[17] = 0x00;
        rom[18] = 0x80;
        rom
    }

    #[test]
    fn construction_resets_the_cpu_to_the_reset_vector() {
        let console = Console::new(&minimal_rom()).unwrap();
        assert_eq!(console.cpu.pc, 0x8000);
    }

    #[test]
    fn rejects_malformed_roms() {
        assert!(Console::new(&[0u8; 4]).is_err());
    }

    #[test]
    fn step_frame_advances_the_ppu_frame_counter() {
        let mut console = Console::new(&minimal_rom()).unwrap();
        let start = console.bus.ppu.frame();
        console.step_frame();
        assert_eq!(console.bus.ppu.frame(), start + 1);
    }

    #[test]
    fn framebuffer_has_the_expected_pixel_count() {
        let mut console = Console::new(&minimal_rom()).unwrap();
        console.step_frame();
        assert_eq!(
            console.framebuffer().len(),
            retrocore_ppu::FRAME_WIDTH * retrocore_ppu::FRAME_HEIGHT
        );
    }

    #[test]
    fn reset_returns_pc_to_the_reset_vector() {
        let mut console = Console::new(&minimal_rom()).unwrap();
        console.step_frame();
        console.reset();
        assert_eq!(console.cpu.pc, 0x8000);
    }
}
