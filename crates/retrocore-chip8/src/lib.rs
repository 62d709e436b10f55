//! A CHIP-8 interpreter.
//!
//! CHIP-8 programs target a simple virtual machine: 4 KiB of memory, 16
//! general-purpose registers, a 64x32 monochrome display, and a call stack.
//! Unlike [`retrocore_cpu`] this VM has no documented instruction timing, so
//! there is no cycle counter here — `step` always executes exactly one
//! opcode.
//!
//! # Architecture
//!
//! [`Chip8`] owns its own memory and does not take a bus: the original
//! machines had no expansion bus to speak of, so there's nothing to
//! abstract over. Host responsibilities — reading a ROM file from disk,
//! polling the host keyboard into the hex keypad, pacing the 60 Hz timer
//! tick, and presenting the display buffer — are explicitly left to the
//! caller; this crate only implements the VM itself.
//!
//! # Example
//!
//! ```
//! use retrocore_chip8::Chip8;
//!
//! let mut chip = Chip8::new(0x1234_5678);
//! chip.load_rom(&[0x60, 0x05]); // LD V0, 5
//! chip.step();
//! ```

#![warn(missing_docs)]

mod chip8;

pub use chip8::{
    Chip8, DISPLAY_HEIGHT, DISPLAY_WIDTH, KEYPAD_SIZE, MEMORY_SIZE, PROGRAM_START,
    REGISTER_COUNT, STACK_SIZE,
};
