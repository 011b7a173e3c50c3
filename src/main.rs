//! Small smoke-test harness for the `mos6502` core: loads an iNES ROM,
//! wires it into a `Bus`, and runs the CPU for a bounded number of steps.
//! This is not a NES player: there is no windowing, no rendering, and no
//! real-time pacing — just enough to exercise a ROM's reset/init code path
//! and print where execution ended up.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mos6502::{Bus, Cartridge, Cpu6502};

/// Run a 6502 core against an iNES ROM for a fixed number of steps.
#[derive(Parser, Debug)]
#[command(name = "mos6502", version, about)]
struct Args {
    /// Path to an iNES (.nes) ROM file.
    rom: PathBuf,

    /// Maximum number of `step()` calls to execute.
    #[arg(long, default_value_t = 1_000_000)]
    max_steps: u64,

    /// Log each retired instruction via `log::trace!` (enable with
    /// RUST_LOG=trace to see output).
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let cartridge = match Cartridge::from_ines_file(&args.rom) {
        Ok(cart) => cart,
        Err(err) => {
            eprintln!("failed to load {}: {err}", args.rom.display());
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "loaded {} (mapper {}, {} PRG bytes, {} CHR bytes)",
        args.rom.display(),
        cartridge.mapper_id(),
        cartridge.prg_rom_len(),
        cartridge.chr_len()
    );

    let mut bus = Bus::new();
    bus.attach_cartridge(cartridge);

    let mut cpu = Cpu6502::new();
    cpu.set_trace(args.trace);
    cpu.reset(&mut bus);

    let mut steps = 0u64;
    while steps < args.max_steps {
        cpu.step(&mut bus);
        steps += 1;
    }

    println!(
        "halted after {steps} steps: PC={:04X} A={:02X} X={:02X} Y={:02X} SP={:02X} P={:02X} CYC={}",
        cpu.pc(),
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.status(),
        cpu.cycles()
    );
    ExitCode::SUCCESS
}
