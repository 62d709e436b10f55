//! Memory bus capability.
//!
//! The CPU never touches storage directly; it is handed a capability that
//! satisfies this trait at construction. Any storage topology — a flat 64
//! KiB array, a memory-mapped NES address space, or anything else — can
//! implement it.

/// A 16-bit addressable byte-oriented memory bus.
///
/// Every address in `0..=0xFFFF` must be a total operation: reads never
/// panic and writes to read-only or unmapped regions are silently
/// discarded (see the error-handling taxonomy for "silent coercions").
///
/// # Examples
///
/// ```
/// use retrocore_cpu::Bus;
///
/// struct FlatRam([u8; 65536]);
///
/// impl Bus for FlatRam {
///     fn read(&mut self, addr: u16) -> u8 {
///         self.0[addr as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.0[addr as usize] = value;
///     }
/// }
/// ```
pub trait Bus {
    /// Reads a byte from the given address.
    fn read(&mut self, addr: u16) -> u8;

    /// Writes a byte to the given address.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit value at `addr`/`addr+1`.
    fn read_u16(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr);
        let hi = self.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }
}

/// Hardware interrupt/reset vector addresses.
pub mod vectors {
    /// Non-maskable interrupt vector.
    pub const NMI: u16 = 0xFFFA;
    /// Reset vector.
    pub const RESET: u16 = 0xFFFC;
    /// IRQ/BRK vector.
    pub const IRQ: u16 = 0xFFFE;
}
