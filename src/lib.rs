//! Famicore: an NES (MOS 6502) CPU emulator core written in Rust.
//!
//! Implements the 2A03's 6502 as documented on the
//! [NESdev Wiki](https://www.nesdev.org/wiki/CPU): fetch/decode through an
//! immutable 256-entry opcode table, thirteen+ addressing modes with
//! page-cross timing and the JMP (indirect) page-wrap bug, and a
//! nestest-compatible execution trace.
//!
//! ## Modules (NESdev references)
//!
//! - **bus** – [CPU memory map](https://www.nesdev.org/wiki/CPU_memory_map): flat 64 KiB memory
//!   plus the PPU register window interception
//! - **cartridge** – [iNES](https://www.nesdev.org/wiki/INES) container loading; no mapper logic
//! - **cpu** – [6502](https://www.nesdev.org/wiki/CPU) / 2A03: registers, flags, stack, opcode
//!   table, addressing modes, operation handlers
//! - **ppu** – [PPU registers](https://www.nesdev.org/wiki/PPU_registers) surface only
//!   ($2000–$2007, $4014); rendering is an external collaborator
//! - **trace** – per-instruction execution trace lines (nestest log layout)

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod ppu;
pub mod trace;
