//! Execution trace formatting (nestest log layout).
//!
//! One line per instruction, fixed columns: 4-digit PC, raw instruction
//! bytes, mnemonic, addressing-mode-formatted operand, then the register
//! dump. Uppercase hex throughout. The CYC column is the cycle counter
//! expressed as the PPU dot within the current scanline (3 dots per CPU
//! cycle, wrapping at 341).

use crate::bus::Bus;
use crate::cpu::addressing::Mode;
use crate::cpu::cpu::Cpu;
use crate::cpu::opcodes::OPCODE_TABLE;

/// PPU dots per scanline; the CYC column wraps at this.
pub const DOTS_PER_SCANLINE: usize = 341;

/// Format the trace line for the instruction at the current PC, before it
/// executes. Returns `None` when the opcode byte has no table entry (the
/// next `step` will report the decode error).
pub fn line<B: Bus>(cpu: &mut Cpu<B>) -> Option<String> {
    let pc = cpu.pc;
    let opcode = cpu.bus.read(pc);
    let instr = OPCODE_TABLE[opcode as usize]?;

    let mut bytes = String::new();
    for i in 0..instr.mode.size() {
        if i > 0 {
            bytes.push(' ');
        }
        bytes.push_str(&format!("{:02X}", cpu.bus.read(pc.wrapping_add(i))));
    }

    let operand = format_operand(cpu, instr.mode);
    let dot = cpu.cycles * 3 % DOTS_PER_SCANLINE;

    Some(format!(
        "{:04X}  {:<8}  {} {:<27} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
        pc,
        bytes,
        instr.op.mnemonic(),
        operand,
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.get_status(),
        cpu.sp,
        dot,
    ))
}

fn format_operand<B: Bus>(cpu: &mut Cpu<B>, mode: Mode) -> String {
    let operand = cpu.pc.wrapping_add(1);
    match mode {
        Mode::Implied => String::new(),
        Mode::Accumulator => "A".to_string(),
        Mode::Immediate => format!("#${:02X}", cpu.bus.read(operand)),
        Mode::ZeroPage | Mode::ZeroPageX | Mode::ZeroPageY | Mode::IndirectX | Mode::IndirectY => {
            format!("${:02X}", cpu.bus.read(operand))
        }
        Mode::Absolute | Mode::AbsoluteX | Mode::AbsoluteY | Mode::JumpAbsolute
        | Mode::JumpIndirect => {
            format!("${:04X}", cpu.bus.read16(operand))
        }
        // Branches display the resolved target.
        Mode::Relative => format!("${:04X}", cpu.branch_target()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Memory;

    fn cpu_with(program: &[u8], at: u16) -> Cpu<Memory> {
        let mut cpu = Cpu::new(Memory::new());
        for (i, byte) in program.iter().enumerate() {
            cpu.bus.write(at.wrapping_add(i as u16), *byte);
        }
        cpu.pc = at;
        cpu
    }

    #[test]
    fn immediate_line_matches_fixed_columns() {
        let mut cpu = cpu_with(&[0xA9, 0x10], 0xC000);
        cpu.cycles = 0;

        assert_eq!(
            line(&mut cpu).unwrap(),
            "C000  A9 10     LDA #$10                        A:00 X:00 Y:00 P:24 SP:FD CYC:0"
        );
    }

    #[test]
    fn absolute_line_shows_word_operand() {
        let mut cpu = cpu_with(&[0x8D, 0x00, 0x02], 0xC000);
        cpu.a = 0x33;
        cpu.cycles = 10;

        assert_eq!(
            line(&mut cpu).unwrap(),
            "C000  8D 00 02  STA $0200                       A:33 X:00 Y:00 P:24 SP:FD CYC:30"
        );
    }

    #[test]
    fn branch_line_shows_resolved_target() {
        let mut cpu = cpu_with(&[0xD0, 0xFD], 0x8003);

        let line = line(&mut cpu).unwrap();
        assert!(line.starts_with("8003  D0 FD     BNE $8002"));
    }

    #[test]
    fn cyc_wraps_at_scanline_length() {
        let mut cpu = cpu_with(&[0xEA], 0xC000);
        cpu.cycles = 114; // 342 dots = one full scanline + 1

        let line = line(&mut cpu).unwrap();
        assert!(line.ends_with("CYC:1"));
    }

    #[test]
    fn undefined_opcode_has_no_line() {
        let mut cpu = cpu_with(&[0x02], 0xC000);

        assert!(line(&mut cpu).is_none());
    }
}
