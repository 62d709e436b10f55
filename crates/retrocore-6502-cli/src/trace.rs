//! Per-instruction trace-line formatting for `-v`.
//!
//! Format: `PC  OP B1 B2  MNEM  A:xx X:xx Y:xx P:xx SP:xx CYC:n`, registers
//! sampled *before* the instruction executes.

use retrocore_cpu::{AddrMode, Bus, Cpu, ADDR_MODE_TABLE};

/// Display mnemonic per opcode byte; `"???"` marks illegal opcodes.
#[rustfmt::skip]
const MNEMONICS: [&str; 256] = [
    /* 0x00 */ "BRK", "ORA", "???", "???", "???", "ORA", "ASL", "???",
    /* 0x08 */ "PHP", "ORA", "ASL", "???", "???", "ORA", "ASL", "???",
    /* 0x10 */ "BPL", "ORA", "???", "???", "???", "ORA", "ASL", "???",
    /* 0x18 */ "CLC", "ORA", "???", "???", "???", "ORA", "ASL", "???",
    /* 0x20 */ "JSR", "AND", "???", "???", "BIT", "AND", "ROL", "???",
    /* 0x28 */ "PLP", "AND", "ROL", "???", "BIT", "AND", "ROL", "???",
    /* 0x30 */ "BMI", "AND", "???", "???", "???", "AND", "ROL", "???",
    /* 0x38 */ "SEC", "AND", "???", "???", "???", "AND", "ROL", "???",
    /* 0x40 */ "RTI", "EOR", "???", "???", "???", "EOR", "LSR", "???",
    /* 0x48 */ "PHA", "EOR", "LSR", "???", "JMP", "EOR", "LSR", "???",
    /* 0x50 */ "BVC", "EOR", "???", "???", "???", "EOR", "LSR", "???",
    /* 0x58 */ "CLI", "EOR", "???", "???", "???", "EOR", "LSR", "???",
    /* 0x60 */ "RTS", "ADC", "???", "???", "???", "ADC", "ROR", "???",
    /* 0x68 */ "PLA", "ADC", "ROR", "???", "JMP", "ADC", "ROR", "???",
    /* 0x70 */ "BVS", "ADC", "???", "???", "???", "ADC", "ROR", "???",
    /* 0x78 */ "SEI", "ADC", "???", "???", "???", "ADC", "ROR", "???",
    /* 0x80 */ "???", "STA", "???", "???", "STY", "STA", "STX", "???",
    /* 0x88 */ "DEY", "???", "TXA", "???", "STY", "STA", "STX", "???",
    /* 0x90 */ "BCC", "STA", "???", "???", "STY", "STA", "STX", "???",
    /* 0x98 */ "TYA", "STA", "TXS", "???", "???", "STA", "???", "???",
    /* 0xA0 */ "LDY", "LDA", "LDX", "???", "LDY", "LDA", "LDX", "???",
    /* 0xA8 */ "TAY", "LDA", "TAX", "???", "LDY", "LDA", "LDX", "???",
    /* 0xB0 */ "BCS", "LDA", "???", "???", "LDY", "LDA", "LDX", "???",
    /* 0xB8 */ "CLV", "LDA", "TSX", "???", "LDY", "LDA", "LDX", "???",
    /* 0xC0 */ "CPY", "CMP", "???", "???", "CPY", "CMP", "DEC", "???",
    /* 0xC8 */ "INY", "CMP", "DEX", "???", "CPY", "CMP", "DEC", "???",
    /* 0xD0 */ "BNE", "CMP", "???", "???", "???", "CMP", "DEC", "???",
    /* 0xD8 */ "CLD", "CMP", "???", "???", "???", "CMP", "DEC", "???",
    /* 0xE0 */ "CPX", "SBC", "???", "???", "CPX", "SBC", "INC", "???",
    /* 0xE8 */ "INX", "SBC", "NOP", "???", "CPX", "SBC", "INC", "???",
    /* 0xF0 */ "BEQ", "SBC", "???", "???", "???", "SBC", "INC", "???",
    /* 0xF8 */ "SED", "SBC", "???", "???", "???", "SBC", "INC", "???",
];

/// Renders one trace line for the instruction about to execute at `cpu.pc`.
///
/// Unlike the bit-pattern length heuristic this is descended from, operand
/// byte count comes straight from [`AddrMode::operand_size`] via
/// [`ADDR_MODE_TABLE`] — always exact, never approximate.
pub fn format_line<B: Bus>(cpu: &Cpu, bus: &mut B) -> String {
    let opcode = bus.read(cpu.pc);
    let mode: AddrMode = ADDR_MODE_TABLE[usize::from(opcode)];
    let operand_size = mode.operand_size();

    let b1 = bus.read(cpu.pc.wrapping_add(1));
    let b2 = bus.read(cpu.pc.wrapping_add(2));

    let operand_field = match operand_size {
        0 => "      ".to_string(),
        1 => format!("{b1:02X}    "),
        _ => format!("{b1:02X} {b2:02X} "),
    };

    let mnemonic = MNEMONICS[usize::from(opcode)];

    format!(
        "{:04X}  {:02X} {} {:<4}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
        cpu.pc,
        opcode,
        operand_field,
        mnemonic,
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.status.bits(),
        cpu.sp,
        cpu.cycles,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestBus([u8; 0x10000]);

    impl Bus for TestBus {
        fn read(&mut self, addr: u16) -> u8 {
            self.0[usize::from(addr)]
        }
        fn write(&mut self, addr: u16, value: u8) {
            self.0[usize::from(addr)] = value;
        }
    }

    #[test]
    fn immediate_load_shows_one_operand_byte() {
        let mut bus = TestBus([0; 0x10000]);
        bus.write(0x8000, 0xA9);
        bus.write(0x8001, 0x42);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        let line = format_line(&cpu, &mut bus);
        assert!(line.starts_with("8000  A9 42     LDA "));
    }

    #[test]
    fn implied_instruction_shows_no_operand_bytes() {
        let mut bus = TestBus([0; 0x10000]);
        bus.write(0x8000, 0x18); // CLC
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        let line = format_line(&cpu, &mut bus);
        assert!(line.starts_with("8000  18        CLC "));
    }

    #[test]
    fn absolute_jump_shows_two_operand_bytes() {
        let mut bus = TestBus([0; 0x10000]);
        bus.write(0x8000, 0x4C);
        bus.write(0x8001, 0x00);
        bus.write(0x8002, 0x90);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        let line = format_line(&cpu, &mut bus);
        assert!(line.starts_with("8000  4C 00 90  JMP "));
    }

    #[test]
    fn illegal_opcode_falls_back_to_placeholder_mnemonic() {
        let mut bus = TestBus([0; 0x10000]);
        bus.write(0x8000, 0x02);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        let line = format_line(&cpu, &mut bus);
        assert!(line.contains("???"));
    }
}
