//! NES cartridge loading: iNES parsing and the NROM mapper.
//!
//! Only mapper 0 (NROM) is implemented. The [`Cartridge`](mapper::Cartridge)
//! trait exists so the NES integration bus can hold a cartridge without
//! depending on the concrete [`Nrom`] type, the same way [`retrocore_cpu`]
//! talks to memory through its `Bus` trait.
//!
//! # Example
//!
//! ```no_run
//! use retrocore_cartridge::Nrom;
//!
//! let rom_data = std::fs::read("game.nes").expect("failed to read ROM");
//! let cartridge = Nrom::from_ines_bytes(&rom_data).expect("failed to parse ROM");
//! ```

pub mod mapper;
pub mod mirroring;
mod nrom;
mod rom;

pub use mapper::Cartridge;
pub use mirroring::Mirroring;
pub use nrom::Nrom;
pub use rom::{CartridgeError, Rom};
