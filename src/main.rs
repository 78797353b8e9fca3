//! NES CPU trace harness entry point.
//!
//! Loads a cartridge, maps its PRG into the bus, and steps the CPU printing
//! one trace line per instruction (nestest log layout) to stdout.
//! Usage: famicore [path/to/game.nes]

use std::env;
use std::process;

use ansi_term::Colour::{Green, Red};

use famicore::bus::NesBus;
use famicore::cartridge::Cartridge;
use famicore::cpu::cpu::Cpu;
use famicore::ppu::NullPpu;
use famicore::trace;

/// Instruction budget for one trace run (covers the nestest official-opcode
/// log with headroom).
const MAX_INSTRUCTIONS: usize = 5000;

fn main() {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "test/nestest.nes".to_string());

    let cart = match Cartridge::load(&path) {
        Ok(cart) => cart,
        Err(err) => {
            eprintln!("{} {}", Red.bold().paint("ERROR"), err);
            process::exit(1);
        }
    };

    let mut bus = NesBus::new(NullPpu);
    bus.load_prg(&cart.prg_rom, cart.prg_load_address());

    let mut cpu = Cpu::new(bus);
    cpu.reset();

    // nestest's automated entry starts at $C000 instead of the reset vector.
    if path.contains("nestest") {
        cpu.pc = 0xC000;
        cpu.cycles = 0;
    }

    eprintln!(
        "{} tracing {} from ${:04X}",
        Green.bold().paint("INFO"),
        path,
        cpu.pc
    );

    for _ in 0..MAX_INSTRUCTIONS {
        if let Some(line) = trace::line(&mut cpu) {
            println!("{line}");
        }
        if let Err(err) = cpu.step() {
            eprintln!("{} {}", Red.bold().paint("ERROR"), err);
            process::exit(1);
        }
    }
}
