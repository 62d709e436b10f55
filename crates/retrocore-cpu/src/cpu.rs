//! The MOS 6502 register file and instruction-granular interpreter.

use crate::addressing::{AddrMode, ADDR_MODE_TABLE};
use crate::bus::{vectors, Bus};
use crate::opcodes;
use crate::status::Status;

/// A located instruction operand, produced by addressing-mode resolution.
///
/// `Implied` instructions (CLC, INX, ...) carry no operand at all.
/// `Accumulator` operations (ASL A, ROL A, ...) read/write `a` directly.
/// `Address` is the effective address the instruction reads from or writes
/// to — except for [`AddrMode::Ind`], whose only consumer is `JMP`, where it
/// is already the fully dereferenced jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    Implied,
    Accumulator,
    Address(u16),
}

/// The MOS 6502 architectural state and instruction interpreter.
///
/// See the crate-level documentation for the public contract of `reset`,
/// `step`, `irq`, and `nmi`.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// Accumulator.
    pub a: u8,
    /// Index register X.
    pub x: u8,
    /// Index register Y.
    pub y: u8,
    /// Stack pointer (low byte; the stack page is fixed at $0100-$01FF).
    pub sp: u8,
    /// Program counter.
    pub pc: u16,
    /// Processor status flags.
    pub status: Status,
    /// Monotonic cycle counter.
    pub cycles: u64,
    /// Set when an illegal/unimplemented opcode is encountered. Once set,
    /// further `step` calls are no-ops.
    pub halted: bool,
    /// Transient scratch flag set by addressing-mode resolution and
    /// consumed by the page-cross cycle rule in `step`.
    pub page_crossed: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Creates a CPU in its power-on state. Register contents besides
    /// status are architecturally undefined on real hardware; this
    /// initializes them to zero, and callers should follow with [`Cpu::reset`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0,
            pc: 0,
            status: Status::new(),
            cycles: 0,
            halted: false,
            page_crossed: false,
        }
    }

    /// Resets the CPU: loads PC from the reset vector, sets `S := $FD`,
    /// sets the I and U status bits, clears `halted`, and adds 7 cycles.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) {
        self.pc = bus.read_u16(vectors::RESET);
        self.sp = 0xFD;
        self.status.insert(Status::I);
        self.status.insert(Status::U);
        self.halted = false;
        self.cycles = self.cycles.wrapping_add(7);
    }

    /// Executes exactly one instruction. Returns the number of cycles
    /// consumed. A no-op (returns 0) once `halted` is set.
    ///
    /// `step` never checks for pending interrupts itself: delivering `irq`
    /// or `nmi` is entirely the caller's responsibility, at whatever
    /// granularity the host's synchronization loop requires (see the
    /// frame-stepping loop in the integration layer for the NES's 3:1
    /// CPU:PPU convention).
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u8 {
        if self.halted {
            return 0;
        }

        self.page_crossed = false;
        let opcode = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let info = opcodes::opcode_info(opcode);
        if info.illegal {
            log::trace!(
                "halting on illegal opcode {opcode:#04x} at {:#06x}",
                self.pc.wrapping_sub(1)
            );
            self.halted = true;
            return 0;
        }

        let mode = ADDR_MODE_TABLE[opcode as usize];
        let operand = self.resolve(bus, mode);
        let extra = opcodes::execute(self, bus, info.mnemonic, operand);

        let mut total = info.cycles;
        if info.page_penalty && self.page_crossed {
            total += 1;
        }
        total += extra;
        self.cycles = self.cycles.wrapping_add(u64::from(total));
        total
    }

    /// Services a maskable interrupt. No-op if the I flag is set.
    pub fn irq<B: Bus>(&mut self, bus: &mut B) -> u8 {
        if self.status.contains(Status::I) {
            return 0;
        }
        self.push_u16(bus, self.pc);
        let byte = self.status.to_stack_byte(false);
        self.push(bus, byte);
        self.status.insert(Status::I);
        self.pc = bus.read_u16(vectors::IRQ);
        self.cycles = self.cycles.wrapping_add(7);
        7
    }

    /// Services a non-maskable interrupt. Unconditional.
    pub fn nmi<B: Bus>(&mut self, bus: &mut B) -> u8 {
        self.push_u16(bus, self.pc);
        let byte = self.status.to_stack_byte(false);
        self.push(bus, byte);
        self.status.insert(Status::I);
        self.pc = bus.read_u16(vectors::NMI);
        self.cycles = self.cycles.wrapping_add(7);
        7
    }

    fn resolve<B: Bus>(&mut self, bus: &mut B, mode: AddrMode) -> Operand {
        match mode {
            AddrMode::Imp => Operand::Implied,
            AddrMode::Acc => Operand::Accumulator,
            AddrMode::Imm => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::Address(addr)
            }
            AddrMode::Zpg => {
                let addr = u16::from(bus.read(self.pc));
                self.pc = self.pc.wrapping_add(1);
                Operand::Address(addr)
            }
            AddrMode::Zpx => {
                let base = bus.read(self.pc);
                self.pc = self.pc.wrapping_add(1);
                Operand::Address(u16::from(base.wrapping_add(self.x)))
            }
            AddrMode::Zpy => {
                let base = bus.read(self.pc);
                self.pc = self.pc.wrapping_add(1);
                Operand::Address(u16::from(base.wrapping_add(self.y)))
            }
            AddrMode::Rel => {
                let offset = bus.read(self.pc) as i8;
                self.pc = self.pc.wrapping_add(1);
                let target = self.pc.wrapping_add(offset as i16 as u16);
                Operand::Address(target)
            }
            AddrMode::Abs => {
                let addr = bus.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                Operand::Address(addr)
            }
            AddrMode::Abx => {
                let base = bus.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                let addr = base.wrapping_add(u16::from(self.x));
                self.page_crossed = (base & 0xFF00) != (addr & 0xFF00);
                Operand::Address(addr)
            }
            AddrMode::Aby => {
                let base = bus.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                let addr = base.wrapping_add(u16::from(self.y));
                self.page_crossed = (base & 0xFF00) != (addr & 0xFF00);
                Operand::Address(addr)
            }
            AddrMode::Ind => {
                let ptr = bus.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                Operand::Address(self.read_indirect_bugged(bus, ptr))
            }
            AddrMode::Idx => {
                let zp = bus.read(self.pc).wrapping_add(self.x);
                self.pc = self.pc.wrapping_add(1);
                let lo = bus.read(u16::from(zp));
                let hi = bus.read(u16::from(zp.wrapping_add(1)));
                Operand::Address(u16::from_le_bytes([lo, hi]))
            }
            AddrMode::Idy => {
                let zp = bus.read(self.pc);
                self.pc = self.pc.wrapping_add(1);
                let lo = bus.read(u16::from(zp));
                let hi = bus.read(u16::from(zp.wrapping_add(1)));
                let base = u16::from_le_bytes([lo, hi]);
                let addr = base.wrapping_add(u16::from(self.y));
                self.page_crossed = (base & 0xFF00) != (addr & 0xFF00);
                Operand::Address(addr)
            }
        }
    }

    /// Dereferences a 16-bit pointer the way JMP ($xxyy) does, reproducing
    /// the NMOS bug where a pointer ending in $FF wraps its high-byte fetch
    /// within the same page instead of crossing into the next one.
    fn read_indirect_bugged<B: Bus>(&self, bus: &mut B, ptr: u16) -> u16 {
        let lo = bus.read(ptr);
        let hi_addr = if ptr & 0x00FF == 0x00FF {
            ptr & 0xFF00
        } else {
            ptr.wrapping_add(1)
        };
        let hi = bus.read(hi_addr);
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn operand_value<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.a,
            Operand::Address(addr) => bus.read(addr),
            Operand::Implied => 0,
        }
    }

    pub(crate) fn write_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Address(addr) => bus.write(addr, value),
            Operand::Implied => {}
        }
    }

    pub(crate) fn push<B: Bus>(&mut self, bus: &mut B, value: u8) {
        bus.write(0x0100 | u16::from(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pop<B: Bus>(&mut self, bus: &mut B) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(0x0100 | u16::from(self.sp))
    }

    pub(crate) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        self.push(bus, (value >> 8) as u8);
        self.push(bus, (value & 0xFF) as u8);
    }

    pub(crate) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.pop(bus);
        let hi = self.pop(bus);
        u16::from_le_bytes([lo, hi])
    }
}
