//! NES system bus: ties the CPU's 64 KiB address space to work RAM, the
//! PPU's register window, the controller ports, and the cartridge.
//!
//! ```text
//! $0000-$1FFF: 2 KiB work RAM, mirrored every $0800
//! $2000-$3FFF: PPU registers, mirrored every 8 bytes
//! $4000-$4013, $4015, $4017-$401F: APU/IO, stubbed (reads 0, writes discarded)
//! $4014: OAM DMA latch
//! $4016-$4017: controller shift registers
//! $4020-$FFFF: cartridge
//! ```

use retrocore_cartridge::{Cartridge, Mirroring};
use retrocore_cpu::Bus;
use retrocore_ppu::{Ppu, PpuBus};

const RAM_SIZE: usize = 0x0800;

/// Adapts a cartridge's CHR memory and mirroring into the PPU's bus
/// capability. Built fresh at each call site rather than stored, since it
/// only needs to live for the duration of a single PPU access.
struct CartridgePpuBus<'a> {
    cartridge: &'a mut dyn Cartridge,
}

impl PpuBus for CartridgePpuBus<'_> {
    fn chr_read(&mut self, addr: u16) -> u8 {
        self.cartridge.chr_read(addr)
    }

    fn chr_write(&mut self, addr: u16, value: u8) {
        self.cartridge.chr_write(addr, value);
    }

    fn mirror(&self) -> Mirroring {
        self.cartridge.mirror()
    }
}

/// The NES address space: work RAM, PPU, controllers, and a cartridge,
/// wired onto one bus the CPU is stepped against.
pub struct NesBus {
    ram: [u8; RAM_SIZE],
    /// The PPU. Public so the integration layer can step it and read its
    /// framebuffer without going through the CPU's 8-byte register window.
    pub ppu: Ppu,
    cartridge: Box<dyn Cartridge>,
    controller_shift: [u8; 2],
    controller_latch: [u8; 2],
    controller_strobe: bool,
    /// Set by a `$4014` write; the integration layer is responsible for
    /// servicing the DMA and clearing this.
    pub dma_pending: bool,
    /// High byte of the page a pending OAM DMA reads from.
    pub dma_page: u8,
}

impl NesBus {
    /// Builds a bus around a cartridge, with RAM, PPU, and controller state
    /// all freshly reset.
    #[must_use]
    pub fn new(cartridge: Box<dyn Cartridge>) -> Self {
        Self {
            ram: [0; RAM_SIZE],
            ppu: Ppu::new(),
            cartridge,
            controller_shift: [0; 2],
            controller_latch: [0; 2],
            controller_strobe: false,
            dma_pending: false,
            dma_page: 0,
        }
    }

    /// Latches the current button state into both controllers' shift
    /// registers. Call this whenever the host writes `$4016` with bit 0 set.
    fn reload_controllers(&mut self) {
        self.controller_shift[0] = self.controller_latch[0];
        self.controller_shift[1] = self.controller_latch[1];
    }

    /// Sets the live button state for a controller port (0 or 1), an
    /// 8-bit mask of A/B/Select/Start/Up/Down/Left/Right from bit 0.
    pub fn set_controller_state(&mut self, port: usize, buttons: u8) {
        self.controller_latch[port] = buttons;
        if self.controller_strobe {
            self.controller_shift[port] = buttons;
        }
    }

    /// Copies 256 bytes from `page << 8` directly into OAM by index,
    /// bypassing `OAMADDR`, as the real DMA unit does.
    pub fn run_oam_dma(&mut self, page: u8) {
        for i in 0..=255u8 {
            let addr = (u16::from(page) << 8) | u16::from(i);
            let value = self.read(addr);
            self.ppu.oam_dma_write(i, value);
        }
    }

    /// Steps the PPU one dot, returning whether it raised an NMI edge.
    /// Splits the borrow between `ppu` and `cartridge` directly so the
    /// caller never needs to re-borrow the whole bus.
    pub fn step_ppu(&mut self) -> bool {
        let mut ppu_bus = CartridgePpuBus {
            cartridge: self.cartridge.as_mut(),
        };
        self.ppu.step(&mut ppu_bus)
    }

    fn read_controller(&mut self, port: usize) -> u8 {
        let bit = self.controller_shift[port] & 0x01;
        self.controller_shift[port] = (self.controller_shift[port] >> 1) | 0x80;
        bit
    }
}

impl Bus for NesBus {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram[usize::from(addr) & (RAM_SIZE - 1)],
            0x2000..=0x3FFF => {
                let mut ppu_bus = CartridgePpuBus {
                    cartridge: self.cartridge.as_mut(),
                };
                self.ppu.read_register(0x2000 | (addr & 0x07), &mut ppu_bus)
            }
            0x4016 => self.read_controller(0),
            0x4017 => self.read_controller(1),
            0x4000..=0x4015 | 0x4018..=0x401F => 0,
            _ => self.cartridge.cpu_read(addr),
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram[usize::from(addr) & (RAM_SIZE - 1)] = value,
            0x2000..=0x3FFF => {
                let mut ppu_bus = CartridgePpuBus {
                    cartridge: self.cartridge.as_mut(),
                };
                self.ppu
                    .write_register(0x2000 | (addr & 0x07), value, &mut ppu_bus);
            }
            0x4014 => {
                self.dma_pending = true;
                self.dma_page = value;
            }
            0x4016 => {
                self.controller_strobe = value & 0x01 != 0;
                if self.controller_strobe {
                    self.reload_controllers();
                }
            }
            0x4000..=0x4013 | 0x4015 | 0x4017..=0x401F => {}
            _ => self.cartridge.cpu_write(addr, value),
        }
    }
}
