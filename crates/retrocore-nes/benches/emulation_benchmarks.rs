//! Performance benchmarks for the NES integration layer.
//!
//! Measures frame-stepping throughput and console construction cost against
//! a synthetic NROM image, since no external test ROMs ship with the repo.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use retrocore_nes::Console;
use std::time::Duration;

/// Builds a minimal valid NROM iNES image: 16 KiB PRG filled with an
/// infinite `JMP $8000` loop, 8 KiB CHR, no CHR RAM fallback needed.
fn create_minimal_rom() -> Vec<u8> {
    let mut rom = vec![0u8; 16 + 16384 + 8192];

    rom[0] = 0x4E; // 'N'
    rom[1] = 0x45; // 'E'
    rom[2] = 0x53; // 'S'
    rom[3] = 0x1A; // EOF
    rom[4] = 1; // 16KB PRG-ROM
    rom[5] = 1; // 8KB CHR-ROM
    rom[6] = 0x00; // Mapper 0, horizontal mirroring

    // Reset vector at $FFFC-$FFFD points to $8000.
    rom[16 + 0x3FFC] = 0x00;
    rom[16 + 0x3FFD] = 0x80;

    // JMP $8000 (infinite loop).
    rom[16] = 0x4C;
    rom[17] = 0x00;
    rom[18] = 0x80;

    rom
}

/// Benchmark PPU/CPU frame stepping.
fn bench_step_frame(c: &mut Criterion) {
    let rom_data = create_minimal_rom();
    let mut console = Console::new(&rom_data).expect("failed to create console");

    let mut group = c.benchmark_group("frame");
    group.throughput(Throughput::Elements(1));
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("single_frame", |b| {
        b.iter(|| {
            console.step_frame();
            black_box(console.framebuffer());
        });
    });

    group.bench_function("60_frames", |b| {
        b.iter(|| {
            for _ in 0..60 {
                console.step_frame();
            }
            black_box(console.framebuffer());
        });
    });

    group.finish();
}

/// Benchmark ROM loading and console construction.
fn bench_console_creation(c: &mut Criterion) {
    let rom_data = create_minimal_rom();

    let mut group = c.benchmark_group("initialization");
    group.throughput(Throughput::Elements(1));
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("console_new", |b| {
        b.iter(|| {
            let console = Console::new(black_box(&rom_data)).expect("failed to create console");
            black_box(console);
        });
    });

    group.bench_function("reset", |b| {
        let mut console = Console::new(&rom_data).expect("failed to create console");
        b.iter(|| {
            console.reset();
            black_box(console.total_cycles());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_step_frame, bench_console_creation);
criterion_main!(benches);
