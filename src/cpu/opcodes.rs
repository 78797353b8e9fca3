//! Opcode decode table.
//!
//! 256 slots mapping each opcode byte to (operation, addressing mode, base
//! cycle cost). Only documented opcodes plus the informal multi-size NOPs
//! and LAX are populated; every other slot decodes to `None` and traps, it
//! never executes as a silent NOP.

use crate::cpu::addressing::Mode;

/// Operation tag: one per distinct instruction mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lax,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Operation {
    /// Trace mnemonic, uppercase.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lax => "LAX",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
        }
    }
}

/// One decode-table record.
#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    pub op: Operation,
    pub mode: Mode,
    pub cycles: u8,
}

/// Immutable decode table, built once at compile time.
pub const OPCODE_TABLE: [Option<Instruction>; 256] = build_table();

const fn build_table() -> [Option<Instruction>; 256] {
    let mut table = [None; 256];
    let mut opcode = 0;
    while opcode < 256 {
        table[opcode] = decode(opcode as u8);
        opcode += 1;
    }
    table
}

const fn entry(op: Operation, mode: Mode, cycles: u8) -> Option<Instruction> {
    Some(Instruction { op, mode, cycles })
}

/// Decode one opcode byte. `None` marks an undefined opcode.
pub const fn decode(opcode: u8) -> Option<Instruction> {
    use Mode::*;
    use Operation::*;
    match opcode {
        0x00 => entry(Brk, Implied, 7),
        0x01 => entry(Ora, IndirectX, 6),
        0x04 => entry(Nop, ZeroPage, 3),
        0x05 => entry(Ora, ZeroPage, 3),
        0x06 => entry(Asl, ZeroPage, 5),
        0x08 => entry(Php, Implied, 3),
        0x09 => entry(Ora, Immediate, 2),
        0x0A => entry(Asl, Accumulator, 2),
        0x0C => entry(Nop, Absolute, 4),
        0x0D => entry(Ora, Absolute, 4),
        0x0E => entry(Asl, Absolute, 6),
        0x10 => entry(Bpl, Relative, 2),
        0x11 => entry(Ora, IndirectY, 5),
        0x14 => entry(Nop, ZeroPageX, 4),
        0x15 => entry(Ora, ZeroPageX, 4),
        0x16 => entry(Asl, ZeroPageX, 6),
        0x18 => entry(Clc, Implied, 2),
        0x19 => entry(Ora, AbsoluteY, 4),
        0x1A => entry(Nop, Implied, 2),
        0x1C => entry(Nop, AbsoluteX, 4),
        0x1D => entry(Ora, AbsoluteX, 4),
        0x1E => entry(Asl, AbsoluteX, 7),

        0x20 => entry(Jsr, JumpAbsolute, 6),
        0x21 => entry(And, IndirectX, 6),
        0x24 => entry(Bit, ZeroPage, 3),
        0x25 => entry(And, ZeroPage, 3),
        0x26 => entry(Rol, ZeroPage, 5),
        0x28 => entry(Plp, Implied, 4),
        0x29 => entry(And, Immediate, 2),
        0x2A => entry(Rol, Accumulator, 2),
        0x2C => entry(Bit, Absolute, 4),
        0x2D => entry(And, Absolute, 4),
        0x2E => entry(Rol, Absolute, 6),
        0x30 => entry(Bmi, Relative, 2),
        0x31 => entry(And, IndirectY, 5),
        0x34 => entry(Nop, ZeroPageX, 4),
        0x35 => entry(And, ZeroPageX, 4),
        0x36 => entry(Rol, ZeroPageX, 6),
        0x38 => entry(Sec, Implied, 2),
        0x39 => entry(And, AbsoluteY, 4),
        0x3A => entry(Nop, Implied, 2),
        0x3C => entry(Nop, AbsoluteX, 4),
        0x3D => entry(And, AbsoluteX, 4),
        0x3E => entry(Rol, AbsoluteX, 7),

        0x40 => entry(Rti, Implied, 6),
        0x41 => entry(Eor, IndirectX, 6),
        0x44 => entry(Nop, ZeroPage, 3),
        0x45 => entry(Eor, ZeroPage, 3),
        0x46 => entry(Lsr, ZeroPage, 5),
        0x48 => entry(Pha, Implied, 3),
        0x49 => entry(Eor, Immediate, 2),
        0x4A => entry(Lsr, Accumulator, 2),
        0x4C => entry(Jmp, JumpAbsolute, 3),
        0x4D => entry(Eor, Absolute, 4),
        0x4E => entry(Lsr, Absolute, 6),
        0x50 => entry(Bvc, Relative, 2),
        0x51 => entry(Eor, IndirectY, 5),
        0x54 => entry(Nop, ZeroPageX, 4),
        0x55 => entry(Eor, ZeroPageX, 4),
        0x56 => entry(Lsr, ZeroPageX, 6),
        0x58 => entry(Cli, Implied, 2),
        0x59 => entry(Eor, AbsoluteY, 4),
        0x5A => entry(Nop, Implied, 2),
        0x5C => entry(Nop, AbsoluteX, 4),
        0x5D => entry(Eor, AbsoluteX, 4),
        0x5E => entry(Lsr, AbsoluteX, 7),

        0x60 => entry(Rts, Implied, 6),
        0x61 => entry(Adc, IndirectX, 6),
        0x64 => entry(Nop, ZeroPage, 3),
        0x65 => entry(Adc, ZeroPage, 3),
        0x66 => entry(Ror, ZeroPage, 5),
        0x68 => entry(Pla, Implied, 4),
        0x69 => entry(Adc, Immediate, 2),
        0x6A => entry(Ror, Accumulator, 2),
        0x6C => entry(Jmp, JumpIndirect, 5),
        0x6D => entry(Adc, Absolute, 4),
        0x6E => entry(Ror, Absolute, 6),
        0x70 => entry(Bvs, Relative, 2),
        0x71 => entry(Adc, IndirectY, 5),
        0x74 => entry(Nop, ZeroPageX, 4),
        0x75 => entry(Adc, ZeroPageX, 4),
        0x76 => entry(Ror, ZeroPageX, 6),
        0x78 => entry(Sei, Implied, 2),
        0x79 => entry(Adc, AbsoluteY, 4),
        0x7A => entry(Nop, Implied, 2),
        0x7C => entry(Nop, AbsoluteX, 4),
        0x7D => entry(Adc, AbsoluteX, 4),
        0x7E => entry(Ror, AbsoluteX, 7),

        0x80 => entry(Nop, Immediate, 2),
        0x81 => entry(Sta, IndirectX, 6),
        0x82 => entry(Nop, Immediate, 2),
        0x84 => entry(Sty, ZeroPage, 3),
        0x85 => entry(Sta, ZeroPage, 3),
        0x86 => entry(Stx, ZeroPage, 3),
        0x88 => entry(Dey, Implied, 2),
        0x89 => entry(Nop, Immediate, 2),
        0x8A => entry(Txa, Implied, 2),
        0x8C => entry(Sty, Absolute, 4),
        0x8D => entry(Sta, Absolute, 4),
        0x8E => entry(Stx, Absolute, 4),
        0x90 => entry(Bcc, Relative, 2),
        0x91 => entry(Sta, IndirectY, 6),
        0x94 => entry(Sty, ZeroPageX, 4),
        0x95 => entry(Sta, ZeroPageX, 4),
        0x96 => entry(Stx, ZeroPageY, 4),
        0x98 => entry(Tya, Implied, 2),
        0x99 => entry(Sta, AbsoluteY, 5),
        0x9A => entry(Txs, Implied, 2),
        0x9D => entry(Sta, AbsoluteX, 5),

        0xA0 => entry(Ldy, Immediate, 2),
        0xA1 => entry(Lda, IndirectX, 6),
        0xA2 => entry(Ldx, Immediate, 2),
        0xA3 => entry(Lax, IndirectX, 6),
        0xA4 => entry(Ldy, ZeroPage, 3),
        0xA5 => entry(Lda, ZeroPage, 3),
        0xA6 => entry(Ldx, ZeroPage, 3),
        0xA7 => entry(Lax, ZeroPage, 3),
        0xA8 => entry(Tay, Implied, 2),
        0xA9 => entry(Lda, Immediate, 2),
        0xAA => entry(Tax, Implied, 2),
        0xAC => entry(Ldy, Absolute, 4),
        0xAD => entry(Lda, Absolute, 4),
        0xAE => entry(Ldx, Absolute, 4),
        0xAF => entry(Lax, Absolute, 4),
        0xB0 => entry(Bcs, Relative, 2),
        0xB1 => entry(Lda, IndirectY, 5),
        0xB3 => entry(Lax, IndirectY, 5),
        0xB4 => entry(Ldy, ZeroPageX, 4),
        0xB5 => entry(Lda, ZeroPageX, 4),
        0xB6 => entry(Ldx, ZeroPageY, 4),
        0xB7 => entry(Lax, ZeroPageY, 4),
        0xB8 => entry(Clv, Implied, 2),
        0xB9 => entry(Lda, AbsoluteY, 4),
        0xBA => entry(Tsx, Implied, 2),
        0xBC => entry(Ldy, AbsoluteX, 4),
        0xBD => entry(Lda, AbsoluteX, 4),
        0xBE => entry(Ldx, AbsoluteY, 4),
        0xBF => entry(Lax, AbsoluteY, 4),

        0xC0 => entry(Cpy, Immediate, 2),
        0xC1 => entry(Cmp, IndirectX, 6),
        0xC2 => entry(Nop, Immediate, 2),
        0xC4 => entry(Cpy, ZeroPage, 3),
        0xC5 => entry(Cmp, ZeroPage, 3),
        0xC6 => entry(Dec, ZeroPage, 5),
        0xC8 => entry(Iny, Implied, 2),
        0xC9 => entry(Cmp, Immediate, 2),
        0xCA => entry(Dex, Implied, 2),
        0xCC => entry(Cpy, Absolute, 4),
        0xCD => entry(Cmp, Absolute, 4),
        0xCE => entry(Dec, Absolute, 6),
        0xD0 => entry(Bne, Relative, 2),
        0xD1 => entry(Cmp, IndirectY, 5),
        0xD4 => entry(Nop, ZeroPageX, 4),
        0xD5 => entry(Cmp, ZeroPageX, 4),
        0xD6 => entry(Dec, ZeroPageX, 6),
        0xD8 => entry(Cld, Implied, 2),
        0xD9 => entry(Cmp, AbsoluteY, 4),
        0xDA => entry(Nop, Implied, 2),
        0xDC => entry(Nop, AbsoluteX, 4),
        0xDD => entry(Cmp, AbsoluteX, 4),
        0xDE => entry(Dec, AbsoluteX, 7),

        0xE0 => entry(Cpx, Immediate, 2),
        0xE1 => entry(Sbc, IndirectX, 6),
        0xE2 => entry(Nop, Immediate, 2),
        0xE4 => entry(Cpx, ZeroPage, 3),
        0xE5 => entry(Sbc, ZeroPage, 3),
        0xE6 => entry(Inc, ZeroPage, 5),
        0xE8 => entry(Inx, Implied, 2),
        0xE9 => entry(Sbc, Immediate, 2),
        0xEA => entry(Nop, Implied, 2),
        0xEC => entry(Cpx, Absolute, 4),
        0xED => entry(Sbc, Absolute, 4),
        0xEE => entry(Inc, Absolute, 6),
        0xF0 => entry(Beq, Relative, 2),
        0xF1 => entry(Sbc, IndirectY, 5),
        0xF4 => entry(Nop, ZeroPageX, 4),
        0xF5 => entry(Sbc, ZeroPageX, 4),
        0xF6 => entry(Inc, ZeroPageX, 6),
        0xF8 => entry(Sed, Implied, 2),
        0xF9 => entry(Sbc, AbsoluteY, 4),
        0xFA => entry(Nop, Implied, 2),
        0xFC => entry(Nop, AbsoluteX, 4),
        0xFD => entry(Sbc, AbsoluteX, 4),
        0xFE => entry(Inc, AbsoluteX, 7),

        _ => None,
    }
}
