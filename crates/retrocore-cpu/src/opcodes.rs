//! The 256-entry opcode table: mnemonic, base cycle count, and whether a
//! page-crossing penalty applies.
//!
//! Split from addressing mode data ([`crate::addressing::ADDR_MODE_TABLE`])
//! because the two vary independently: several mnemonics share an
//! addressing mode but differ on whether a crossed page costs an extra
//! cycle (loads do, stores and read-modify-write instructions never do).

use crate::cpu::{Cpu, Operand};
use crate::status::Status;
use crate::Bus;

/// A 6502 mnemonic, one per legal instruction (illegal opcodes have none).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub(crate) enum Mnemonic {
    Lda, Ldx, Ldy, Sta, Stx, Sty,
    Tax, Tay, Txa, Tya, Tsx, Txs,
    Pha, Php, Pla, Plp,
    And, Ora, Eor, Adc, Sbc, Cmp, Cpx, Cpy,
    Inc, Inx, Iny, Dec, Dex, Dey,
    Asl, Lsr, Rol, Ror,
    Jmp, Jsr, Rts, Brk, Rti,
    Bcc, Bcs, Beq, Bmi, Bne, Bpl, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Sec, Sed, Sei,
    Nop, Bit,
}

/// Static data about one opcode byte.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpcodeInfo {
    pub mnemonic: Mnemonic,
    pub cycles: u8,
    pub page_penalty: bool,
    pub illegal: bool,
}

const fn op(mnemonic: Mnemonic, cycles: u8, page_penalty: bool) -> OpcodeInfo {
    OpcodeInfo { mnemonic, cycles, page_penalty, illegal: false }
}

const ILLEGAL: OpcodeInfo = OpcodeInfo { mnemonic: Mnemonic::Nop, cycles: 0, page_penalty: false, illegal: true };

use Mnemonic::{
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc, Cld, Cli, Clv, Cmp, Cpx,
    Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla,
    Plp, Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
};

/// Looks up the static mnemonic/cycle/penalty data for an opcode byte.
#[allow(clippy::too_many_lines)]
pub(crate) const fn opcode_info(opcode: u8) -> OpcodeInfo {
    match opcode {
        0x00 => op(Brk, 7, false),
        0x01 => op(Ora, 6, false),
        0x05 => op(Ora, 3, false),
        0x06 => op(Asl, 5, false),
        0x08 => op(Php, 3, false),
        0x09 => op(Ora, 2, false),
        0x0A => op(Asl, 2, false),
        0x0D => op(Ora, 4, false),
        0x0E => op(Asl, 6, false),
        0x10 => op(Bpl, 2, false),
        0x11 => op(Ora, 5, true),
        0x15 => op(Ora, 4, false),
        0x16 => op(Asl, 6, false),
        0x18 => op(Clc, 2, false),
        0x19 => op(Ora, 4, true),
        0x1D => op(Ora, 4, true),
        0x1E => op(Asl, 7, false),

        0x20 => op(Jsr, 6, false),
        0x21 => op(And, 6, false),
        0x24 => op(Bit, 3, false),
        0x25 => op(And, 3, false),
        0x26 => op(Rol, 5, false),
        0x28 => op(Plp, 4, false),
        0x29 => op(And, 2, false),
        0x2A => op(Rol, 2, false),
        0x2C => op(Bit, 4, false),
        0x2D => op(And, 4, false),
        0x2E => op(Rol, 6, false),
        0x30 => op(Bmi, 2, false),
        0x31 => op(And, 5, true),
        0x35 => op(And, 4, false),
        0x36 => op(Rol, 6, false),
        0x38 => op(Sec, 2, false),
        0x39 => op(And, 4, true),
        0x3D => op(And, 4, true),
        0x3E => op(Rol, 7, false),

        0x40 => op(Rti, 6, false),
        0x41 => op(Eor, 6, false),
        0x45 => op(Eor, 3, false),
        0x46 => op(Lsr, 5, false),
        0x48 => op(Pha, 3, false),
        0x49 => op(Eor, 2, false),
        0x4A => op(Lsr, 2, false),
        0x4C => op(Jmp, 3, false),
        0x4D => op(Eor, 4, false),
        0x4E => op(Lsr, 6, false),
        0x50 => op(Bvc, 2, false),
        0x51 => op(Eor, 5, true),
        0x55 => op(Eor, 4, false),
        0x56 => op(Lsr, 6, false),
        0x58 => op(Cli, 2, false),
        0x59 => op(Eor, 4, true),
        0x5D => op(Eor, 4, true),
        0x5E => op(Lsr, 7, false),

        0x60 => op(Rts, 6, false),
        0x61 => op(Adc, 6, false),
        0x65 => op(Adc, 3, false),
        0x66 => op(Ror, 5, false),
        0x68 => op(Pla, 4, false),
        0x69 => op(Adc, 2, false),
        0x6A => op(Ror, 2, false),
        0x6C => op(Jmp, 5, false),
        0x6D => op(Adc, 4, false),
        0x6E => op(Ror, 6, false),
        0x70 => op(Bvs, 2, false),
        0x71 => op(Adc, 5, true),
        0x75 => op(Adc, 4, false),
        0x76 => op(Ror, 6, false),
        0x78 => op(Sei, 2, false),
        0x79 => op(Adc, 4, true),
        0x7D => op(Adc, 4, true),
        0x7E => op(Ror, 7, false),

        0x81 => op(Sta, 6, false),
        0x84 => op(Sty, 3, false),
        0x85 => op(Sta, 3, false),
        0x86 => op(Stx, 3, false),
        0x88 => op(Dey, 2, false),
        0x8A => op(Txa, 2, false),
        0x8C => op(Sty, 4, false),
        0x8D => op(Sta, 4, false),
        0x8E => op(Stx, 4, false),
        0x90 => op(Bcc, 2, false),
        0x91 => op(Sta, 6, false),
        0x94 => op(Sty, 4, false),
        0x95 => op(Sta, 4, false),
        0x96 => op(Stx, 4, false),
        0x98 => op(Tya, 2, false),
        0x99 => op(Sta, 5, false),
        0x9A => op(Txs, 2, false),
        0x9D => op(Sta, 5, false),

        0xA0 => op(Ldy, 2, false),
        0xA1 => op(Lda, 6, false),
        0xA2 => op(Ldx, 2, false),
        0xA4 => op(Ldy, 3, false),
        0xA5 => op(Lda, 3, false),
        0xA6 => op(Ldx, 3, false),
        0xA8 => op(Tay, 2, false),
        0xA9 => op(Lda, 2, false),
        0xAA => op(Tax, 2, false),
        0xAC => op(Ldy, 4, false),
        0xAD => op(Lda, 4, false),
        0xAE => op(Ldx, 4, false),
        0xB0 => op(Bcs, 2, false),
        0xB1 => op(Lda, 5, true),
        0xB4 => op(Ldy, 4, false),
        0xB5 => op(Lda, 4, false),
        0xB6 => op(Ldx, 4, false),
        0xB8 => op(Clv, 2, false),
        0xB9 => op(Lda, 4, true),
        0xBA => op(Tsx, 2, false),
        0xBC => op(Ldy, 4, true),
        0xBD => op(Lda, 4, true),
        0xBE => op(Ldx, 4, true),

        0xC0 => op(Cpy, 2, false),
        0xC1 => op(Cmp, 6, false),
        0xC4 => op(Cpy, 3, false),
        0xC5 => op(Cmp, 3, false),
        0xC6 => op(Dec, 5, false),
        0xC8 => op(Iny, 2, false),
        0xC9 => op(Cmp, 2, false),
        0xCA => op(Dex, 2, false),
        0xCC => op(Cpy, 4, false),
        0xCD => op(Cmp, 4, false),
        0xCE => op(Dec, 6, false),
        0xD0 => op(Bne, 2, false),
        0xD1 => op(Cmp, 5, true),
        0xD5 => op(Cmp, 4, false),
        0xD6 => op(Dec, 6, false),
        0xD8 => op(Cld, 2, false),
        0xD9 => op(Cmp, 4, true),
        0xDD => op(Cmp, 4, true),
        0xDE => op(Dec, 7, false),

        0xE0 => op(Cpx, 2, false),
        0xE1 => op(Sbc, 6, false),
        0xE4 => op(Cpx, 3, false),
        0xE5 => op(Sbc, 3, false),
        0xE6 => op(Inc, 5, false),
        0xE8 => op(Inx, 2, false),
        0xE9 => op(Sbc, 2, false),
        0xEA => op(Nop, 2, false),
        0xEC => op(Cpx, 4, false),
        0xED => op(Sbc, 4, false),
        0xEE => op(Inc, 6, false),
        0xF0 => op(Beq, 2, false),
        0xF1 => op(Sbc, 5, true),
        0xF5 => op(Sbc, 4, false),
        0xF6 => op(Inc, 6, false),
        0xF8 => op(Sed, 2, false),
        0xF9 => op(Sbc, 4, true),
        0xFD => op(Sbc, 4, true),
        0xFE => op(Inc, 7, false),

        _ => ILLEGAL,
    }
}

/// Executes the instruction named by `mnemonic` against the already-resolved
/// `operand`. Returns any extra cycles beyond the opcode's base count (only
/// nonzero for taken/page-crossing branches).
pub(crate) fn execute<B: Bus>(cpu: &mut Cpu, bus: &mut B, mnemonic: Mnemonic, operand: Operand) -> u8 {
    use crate::instructions as i;

    match mnemonic {
        Lda => i::lda(cpu, bus, operand),
        Ldx => i::ldx(cpu, bus, operand),
        Ldy => i::ldy(cpu, bus, operand),
        Sta => i::sta(cpu, bus, operand),
        Stx => i::stx(cpu, bus, operand),
        Sty => i::sty(cpu, bus, operand),
        Tax => i::tax(cpu),
        Tay => i::tay(cpu),
        Txa => i::txa(cpu),
        Tya => i::tya(cpu),
        Tsx => i::tsx(cpu),
        Txs => i::txs(cpu),
        Pha => i::pha(cpu, bus),
        Php => i::php(cpu, bus),
        Pla => i::pla(cpu, bus),
        Plp => i::plp(cpu, bus),
        And => i::and(cpu, bus, operand),
        Ora => i::ora(cpu, bus, operand),
        Eor => i::eor(cpu, bus, operand),
        Adc => i::adc(cpu, bus, operand),
        Sbc => i::sbc(cpu, bus, operand),
        Cmp => i::cmp(cpu, bus, operand),
        Cpx => i::cpx(cpu, bus, operand),
        Cpy => i::cpy(cpu, bus, operand),
        Inc => i::inc(cpu, bus, operand),
        Inx => i::inx(cpu),
        Iny => i::iny(cpu),
        Dec => i::dec(cpu, bus, operand),
        Dex => i::dex(cpu),
        Dey => i::dey(cpu),
        Asl => i::asl(cpu, bus, operand),
        Lsr => i::lsr(cpu, bus, operand),
        Rol => i::rol(cpu, bus, operand),
        Ror => i::ror(cpu, bus, operand),
        Jmp => i::jmp(cpu, operand),
        Jsr => i::jsr(cpu, bus, operand),
        Rts => i::rts(cpu, bus),
        Brk => i::brk(cpu, bus),
        Rti => i::rti(cpu, bus),
        Bcc => return i::branch(cpu, operand, !cpu.status.contains(Status::C)),
        Bcs => return i::branch(cpu, operand, cpu.status.contains(Status::C)),
        Beq => return i::branch(cpu, operand, cpu.status.contains(Status::Z)),
        Bmi => return i::branch(cpu, operand, cpu.status.contains(Status::N)),
        Bne => return i::branch(cpu, operand, !cpu.status.contains(Status::Z)),
        Bpl => return i::branch(cpu, operand, !cpu.status.contains(Status::N)),
        Bvc => return i::branch(cpu, operand, !cpu.status.contains(Status::V)),
        Bvs => return i::branch(cpu, operand, cpu.status.contains(Status::V)),
        Clc => cpu.status.remove(Status::C),
        Cld => cpu.status.remove(Status::D),
        Cli => cpu.status.remove(Status::I),
        Clv => cpu.status.remove(Status::V),
        Sec => cpu.status.insert(Status::C),
        Sed => cpu.status.insert(Status::D),
        Sei => cpu.status.insert(Status::I),
        Nop => {}
        Bit => i::bit(cpu, bus, operand),
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_opcodes_have_expected_data() {
        let brk = opcode_info(0x00);
        assert_eq!(brk.mnemonic, Mnemonic::Brk);
        assert_eq!(brk.cycles, 7);
        assert!(!brk.illegal);

        let lda_idy = opcode_info(0xB1);
        assert_eq!(lda_idy.mnemonic, Mnemonic::Lda);
        assert!(lda_idy.page_penalty);

        // Stores never take a page-cross penalty, even in indexed modes.
        let sta_idy = opcode_info(0x91);
        assert_eq!(sta_idy.mnemonic, Mnemonic::Sta);
        assert!(!sta_idy.page_penalty);
        let sta_abx = opcode_info(0x9D);
        assert!(!sta_abx.page_penalty);

        // Read-modify-write opcodes never take a page-cross penalty either.
        let asl_abx = opcode_info(0x1E);
        assert_eq!(asl_abx.mnemonic, Mnemonic::Asl);
        assert!(!asl_abx.page_penalty);
    }

    #[test]
    fn unassigned_opcodes_are_illegal() {
        assert!(opcode_info(0x02).illegal);
        assert!(opcode_info(0xFF).illegal);
    }
}
