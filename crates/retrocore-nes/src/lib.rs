//! NES integration layer: wires the 6502 CPU and 2C02 PPU onto one bus
//! alongside a cartridge, and drives them in lockstep one frame at a time.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │                  Console                   │
//! │  ┌───────────────────────────────────────┐ │
//! │  │                NesBus                  │ │
//! │  │  ┌─────┐ ┌─────┐ ┌───────────┐ ┌─────┐ │ │
//! │  │  │ RAM │ │ PPU │ │ Cartridge │ │ Pad │ │ │
//! │  │  └─────┘ └─────┘ └───────────┘ └─────┘ │ │
//! │  └───────────────────────────────────────┘ │
//! │                     ▲                       │
//! │                ┌────┴────┐                  │
//! │                │   CPU   │                  │
//! │                └─────────┘                  │
//! └───────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use retrocore_nes::Console;
//!
//! let rom_data = std::fs::read("game.nes").expect("failed to read ROM");
//! let mut console = Console::new(&rom_data).expect("failed to parse ROM");
//!
//! loop {
//!     console.set_controller_state(0, 0x01); // A held
//!     console.step_frame();
//!     let _framebuffer = console.framebuffer();
//! }
//! ```

mod bus;
mod console;

pub use bus::NesBus;
pub use console::{Console, ConsoleError};

pub use retrocore_cartridge::{Cartridge, CartridgeError, Mirroring, Nrom};
pub use retrocore_cpu::Cpu;
pub use retrocore_ppu::{Ppu, FRAME_HEIGHT, FRAME_SIZE, FRAME_WIDTH};
