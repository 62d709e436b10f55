//! Standalone 6502 binary runner.
//!
//! Loads a flat binary into a 64 KiB bus, resets the CPU against it (or
//! overrides the program counter directly), and runs until the CPU halts,
//! traps on itself, or a generous cycle ceiling is hit.
//!
//! ```text
//! retrocore-6502 [-v] <binary> [base_addr_hex] [start_addr_hex]
//! ```

mod bus;
mod trace;

use std::env;
use std::process::ExitCode;

use bus::FlatBus;
use retrocore_cpu::Cpu;

/// Generous ceiling so a runaway program still terminates.
const CYCLE_LIMIT: u64 = 100_000_000;

fn print_usage(prog: &str) {
    eprintln!("Usage: {prog} [-v] <binary> [base_addr] [start_addr]");
    eprintln!("  binary      Path to 6502 binary file");
    eprintln!("  base_addr   Load address in hex (default: 0000)");
    eprintln!("  start_addr  Override PC in hex (default: read reset vector)");
    eprintln!("  -v          Verbose per-instruction trace");
}

fn parse_hex_u16(text: &str, label: &str) -> Result<u16, String> {
    u16::from_str_radix(text, 16).map_err(|_| format!("{label} '{text}' is not valid hex"))
}

fn print_registers(cpu: &Cpu) {
    println!(
        "A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} PC:{:04X} P:{:02X} CYC:{}",
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.sp,
        cpu.pc,
        cpu.status.bits(),
        cpu.cycles,
    );
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    let prog = args.first().map_or("retrocore-6502", String::as_str).to_string();

    let verbose = args.get(1).is_some_and(|a| a == "-v");
    let rest = &args[if verbose { 2 } else { 1 }..];

    if rest.is_empty() || rest.len() > 3 {
        print_usage(&prog);
        return Err("wrong number of arguments".to_string());
    }

    let binary_path = &rest[0];
    let base_addr = rest.get(1).map_or(Ok(0x0000), |s| parse_hex_u16(s, "base_addr"))?;
    let override_pc = rest.get(2).map(|s| parse_hex_u16(s, "start_addr")).transpose()?;

    let program = std::fs::read(binary_path).map_err(|e| format!("failed to read '{binary_path}': {e}"))?;
    log::debug!("loaded {} bytes from '{binary_path}'", program.len());

    let mut bus = FlatBus::new();
    bus.load(base_addr, &program);

    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);

    if let Some(pc) = override_pc {
        cpu.pc = pc;
    }

    println!("Loaded '{binary_path}' at ${base_addr:04X}, PC=${:04X}", cpu.pc);

    while !cpu.halted && cpu.cycles < CYCLE_LIMIT {
        let prev_pc = cpu.pc;

        if verbose {
            println!("{}", trace::format_line(&cpu, &mut bus));
        }

        cpu.step(&mut bus);

        if cpu.pc == prev_pc {
            println!("Trap detected at ${:04X}", cpu.pc);
            break;
        }
    }

    if cpu.cycles >= CYCLE_LIMIT {
        println!("Cycle limit reached ({CYCLE_LIMIT} cycles)");
    }

    if cpu.halted {
        println!("CPU halted");
    }

    println!();
    println!("Final state:");
    print_registers(&cpu);

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
