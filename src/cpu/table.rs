/*!
table.rs - The 256-entry opcode dispatch table.

Each entry pairs a mnemonic (for tracing), the addressing mode the opcode
decodes with, and a plain `fn` pointer that performs the instruction's
semantics. Building the table as a `const fn`-initialized array means
dispatch is a single indexed load plus an indirect call - no per-step
`match` over 256 arms and no dynamic allocation.

Opcodes with no documented 6502 instruction default to
`dispatch::fallback::illegal`, which silently consumes the byte as a
no-op (see the module docs on `dispatch::fallback` for why that, and not
halting, is the contract).
*/

use crate::cpu::addressing::AddressingMode;
use crate::cpu::dispatch::{arithmetic, branches, compare, control_flow, fallback, load_store, logical, misc, rmw};
use crate::cpu::state::Cpu6502;
use crate::cpu::MemoryPort;

pub(crate) type Handler = fn(&mut Cpu6502, &mut dyn MemoryPort);

#[derive(Clone, Copy)]
pub(crate) struct OpEntry {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub handler: Handler,
}

impl OpEntry {
    const fn new(mnemonic: &'static str, mode: AddressingMode, handler: Handler) -> Self {
        Self { mnemonic, mode, handler }
    }

    const fn illegal() -> Self {
        Self::new("ILL", AddressingMode::Implied, fallback::illegal)
    }
}

pub(crate) static OPCODE_TABLE: [OpEntry; 256] = build_table();

const fn build_table() -> [OpEntry; 256] {
    use AddressingMode::*;

    let mut t = [OpEntry::illegal(); 256];

    // ---- LDA ----
    t[0xA9] = OpEntry::new("LDA", Immediate, load_store::lda);
    t[0xA5] = OpEntry::new("LDA", ZeroPage, load_store::lda);
    t[0xB5] = OpEntry::new("LDA", ZeroPageX, load_store::lda);
    t[0xAD] = OpEntry::new("LDA", Absolute, load_store::lda);
    t[0xBD] = OpEntry::new("LDA", AbsoluteX, load_store::lda);
    t[0xB9] = OpEntry::new("LDA", AbsoluteY, load_store::lda);
    t[0xA1] = OpEntry::new("LDA", IndexedIndirect, load_store::lda);
    t[0xB1] = OpEntry::new("LDA", IndirectIndexed, load_store::lda);

    // ---- LDX ----
    t[0xA2] = OpEntry::new("LDX", Immediate, load_store::ldx);
    t[0xA6] = OpEntry::new("LDX", ZeroPage, load_store::ldx);
    t[0xB6] = OpEntry::new("LDX", ZeroPageY, load_store::ldx);
    t[0xAE] = OpEntry::new("LDX", Absolute, load_store::ldx);
    t[0xBE] = OpEntry::new("LDX", AbsoluteY, load_store::ldx);

    // ---- LDY ----
    t[0xA0] = OpEntry::new("LDY", Immediate, load_store::ldy);
    t[0xA4] = OpEntry::new("LDY", ZeroPage, load_store::ldy);
    t[0xB4] = OpEntry::new("LDY", ZeroPageX, load_store::ldy);
    t[0xAC] = OpEntry::new("LDY", Absolute, load_store::ldy);
    t[0xBC] = OpEntry::new("LDY", AbsoluteX, load_store::ldy);

    // ---- STA ----
    t[0x85] = OpEntry::new("STA", ZeroPage, load_store::sta);
    t[0x95] = OpEntry::new("STA", ZeroPageX, load_store::sta);
    t[0x8D] = OpEntry::new("STA", Absolute, load_store::sta);
    t[0x9D] = OpEntry::new("STA", AbsoluteX, load_store::sta);
    t[0x99] = OpEntry::new("STA", AbsoluteY, load_store::sta);
    t[0x81] = OpEntry::new("STA", IndexedIndirect, load_store::sta);
    t[0x91] = OpEntry::new("STA", IndirectIndexed, load_store::sta);

    // ---- STX / STY ----
    t[0x86] = OpEntry::new("STX", ZeroPage, load_store::stx);
    t[0x96] = OpEntry::new("STX", ZeroPageY, load_store::stx);
    t[0x8E] = OpEntry::new("STX", Absolute, load_store::stx);
    t[0x84] = OpEntry::new("STY", ZeroPage, load_store::sty);
    t[0x94] = OpEntry::new("STY", ZeroPageX, load_store::sty);
    t[0x8C] = OpEntry::new("STY", Absolute, load_store::sty);

    // ---- Transfers ----
    t[0xAA] = OpEntry::new("TAX", Implied, misc::tax);
    t[0xA8] = OpEntry::new("TAY", Implied, misc::tay);
    t[0x8A] = OpEntry::new("TXA", Implied, misc::txa);
    t[0x98] = OpEntry::new("TYA", Implied, misc::tya);
    t[0xBA] = OpEntry::new("TSX", Implied, misc::tsx);
    t[0x9A] = OpEntry::new("TXS", Implied, misc::txs);

    // ---- Stack ----
    t[0x48] = OpEntry::new("PHA", Implied, misc::pha);
    t[0x68] = OpEntry::new("PLA", Implied, misc::pla);
    t[0x08] = OpEntry::new("PHP", Implied, misc::php);
    t[0x28] = OpEntry::new("PLP", Implied, misc::plp);

    // ---- Increment / decrement (register) ----
    t[0xE8] = OpEntry::new("INX", Implied, misc::inx);
    t[0xC8] = OpEntry::new("INY", Implied, misc::iny);
    t[0xCA] = OpEntry::new("DEX", Implied, misc::dex);
    t[0x88] = OpEntry::new("DEY", Implied, misc::dey);

    // ---- Flags ----
    t[0x18] = OpEntry::new("CLC", Implied, misc::clc);
    t[0x38] = OpEntry::new("SEC", Implied, misc::sec);
    t[0x58] = OpEntry::new("CLI", Implied, misc::cli);
    t[0x78] = OpEntry::new("SEI", Implied, misc::sei);
    t[0xD8] = OpEntry::new("CLD", Implied, misc::cld);
    t[0xF8] = OpEntry::new("SED", Implied, misc::sed);
    t[0xB8] = OpEntry::new("CLV", Implied, misc::clv);

    // ---- Logical ----
    t[0x29] = OpEntry::new("AND", Immediate, logical::and);
    t[0x25] = OpEntry::new("AND", ZeroPage, logical::and);
    t[0x35] = OpEntry::new("AND", ZeroPageX, logical::and);
    t[0x2D] = OpEntry::new("AND", Absolute, logical::and);
    t[0x3D] = OpEntry::new("AND", AbsoluteX, logical::and);
    t[0x39] = OpEntry::new("AND", AbsoluteY, logical::and);
    t[0x21] = OpEntry::new("AND", IndexedIndirect, logical::and);
    t[0x31] = OpEntry::new("AND", IndirectIndexed, logical::and);

    t[0x09] = OpEntry::new("ORA", Immediate, logical::ora);
    t[0x05] = OpEntry::new("ORA", ZeroPage, logical::ora);
    t[0x15] = OpEntry::new("ORA", ZeroPageX, logical::ora);
    t[0x0D] = OpEntry::new("ORA", Absolute, logical::ora);
    t[0x1D] = OpEntry::new("ORA", AbsoluteX, logical::ora);
    t[0x19] = OpEntry::new("ORA", AbsoluteY, logical::ora);
    t[0x01] = OpEntry::new("ORA", IndexedIndirect, logical::ora);
    t[0x11] = OpEntry::new("ORA", IndirectIndexed, logical::ora);

    t[0x49] = OpEntry::new("EOR", Immediate, logical::eor);
    t[0x45] = OpEntry::new("EOR", ZeroPage, logical::eor);
    t[0x55] = OpEntry::new("EOR", ZeroPageX, logical::eor);
    t[0x4D] = OpEntry::new("EOR", Absolute, logical::eor);
    t[0x5D] = OpEntry::new("EOR", AbsoluteX, logical::eor);
    t[0x59] = OpEntry::new("EOR", AbsoluteY, logical::eor);
    t[0x41] = OpEntry::new("EOR", IndexedIndirect, logical::eor);
    t[0x51] = OpEntry::new("EOR", IndirectIndexed, logical::eor);

    t[0x24] = OpEntry::new("BIT", ZeroPage, logical::bit);
    t[0x2C] = OpEntry::new("BIT", Absolute, logical::bit);

    // ---- Arithmetic ----
    t[0x69] = OpEntry::new("ADC", Immediate, arithmetic::adc);
    t[0x65] = OpEntry::new("ADC", ZeroPage, arithmetic::adc);
    t[0x75] = OpEntry::new("ADC", ZeroPageX, arithmetic::adc);
    t[0x6D] = OpEntry::new("ADC", Absolute, arithmetic::adc);
    t[0x7D] = OpEntry::new("ADC", AbsoluteX, arithmetic::adc);
    t[0x79] = OpEntry::new("ADC", AbsoluteY, arithmetic::adc);
    t[0x61] = OpEntry::new("ADC", IndexedIndirect, arithmetic::adc);
    t[0x71] = OpEntry::new("ADC", IndirectIndexed, arithmetic::adc);

    t[0xE9] = OpEntry::new("SBC", Immediate, arithmetic::sbc);
    t[0xE5] = OpEntry::new("SBC", ZeroPage, arithmetic::sbc);
    t[0xF5] = OpEntry::new("SBC", ZeroPageX, arithmetic::sbc);
    t[0xED] = OpEntry::new("SBC", Absolute, arithmetic::sbc);
    t[0xFD] = OpEntry::new("SBC", AbsoluteX, arithmetic::sbc);
    t[0xF9] = OpEntry::new("SBC", AbsoluteY, arithmetic::sbc);
    t[0xE1] = OpEntry::new("SBC", IndexedIndirect, arithmetic::sbc);
    t[0xF1] = OpEntry::new("SBC", IndirectIndexed, arithmetic::sbc);

    // ---- Compare ----
    t[0xC9] = OpEntry::new("CMP", Immediate, compare::cmp);
    t[0xC5] = OpEntry::new("CMP", ZeroPage, compare::cmp);
    t[0xD5] = OpEntry::new("CMP", ZeroPageX, compare::cmp);
    t[0xCD] = OpEntry::new("CMP", Absolute, compare::cmp);
    t[0xDD] = OpEntry::new("CMP", AbsoluteX, compare::cmp);
    t[0xD9] = OpEntry::new("CMP", AbsoluteY, compare::cmp);
    t[0xC1] = OpEntry::new("CMP", IndexedIndirect, compare::cmp);
    t[0xD1] = OpEntry::new("CMP", IndirectIndexed, compare::cmp);

    t[0xE0] = OpEntry::new("CPX", Immediate, compare::cpx);
    t[0xE4] = OpEntry::new("CPX", ZeroPage, compare::cpx);
    t[0xEC] = OpEntry::new("CPX", Absolute, compare::cpx);

    t[0xC0] = OpEntry::new("CPY", Immediate, compare::cpy);
    t[0xC4] = OpEntry::new("CPY", ZeroPage, compare::cpy);
    t[0xCC] = OpEntry::new("CPY", Absolute, compare::cpy);

    // ---- Shifts / rotates / INC / DEC (memory + accumulator) ----
    t[0x0A] = OpEntry::new("ASL", Accumulator, rmw::asl);
    t[0x06] = OpEntry::new("ASL", ZeroPage, rmw::asl);
    t[0x16] = OpEntry::new("ASL", ZeroPageX, rmw::asl);
    t[0x0E] = OpEntry::new("ASL", Absolute, rmw::asl);
    t[0x1E] = OpEntry::new("ASL", AbsoluteX, rmw::asl);

    t[0x4A] = OpEntry::new("LSR", Accumulator, rmw::lsr);
    t[0x46] = OpEntry::new("LSR", ZeroPage, rmw::lsr);
    t[0x56] = OpEntry::new("LSR", ZeroPageX, rmw::lsr);
    t[0x4E] = OpEntry::new("LSR", Absolute, rmw::lsr);
    t[0x5E] = OpEntry::new("LSR", AbsoluteX, rmw::lsr);

    t[0x2A] = OpEntry::new("ROL", Accumulator, rmw::rol);
    t[0x26] = OpEntry::new("ROL", ZeroPage, rmw::rol);
    t[0x36] = OpEntry::new("ROL", ZeroPageX, rmw::rol);
    t[0x2E] = OpEntry::new("ROL", Absolute, rmw::rol);
    t[0x3E] = OpEntry::new("ROL", AbsoluteX, rmw::rol);

    t[0x6A] = OpEntry::new("ROR", Accumulator, rmw::ror);
    t[0x66] = OpEntry::new("ROR", ZeroPage, rmw::ror);
    t[0x76] = OpEntry::new("ROR", ZeroPageX, rmw::ror);
    t[0x6E] = OpEntry::new("ROR", Absolute, rmw::ror);
    t[0x7E] = OpEntry::new("ROR", AbsoluteX, rmw::ror);

    t[0xE6] = OpEntry::new("INC", ZeroPage, rmw::inc);
    t[0xF6] = OpEntry::new("INC", ZeroPageX, rmw::inc);
    t[0xEE] = OpEntry::new("INC", Absolute, rmw::inc);
    t[0xFE] = OpEntry::new("INC", AbsoluteX, rmw::inc);

    t[0xC6] = OpEntry::new("DEC", ZeroPage, rmw::dec);
    t[0xD6] = OpEntry::new("DEC", ZeroPageX, rmw::dec);
    t[0xCE] = OpEntry::new("DEC", Absolute, rmw::dec);
    t[0xDE] = OpEntry::new("DEC", AbsoluteX, rmw::dec);

    // ---- Branches ----
    t[0x10] = OpEntry::new("BPL", Relative, branches::bpl);
    t[0x30] = OpEntry::new("BMI", Relative, branches::bmi);
    t[0x50] = OpEntry::new("BVC", Relative, branches::bvc);
    t[0x70] = OpEntry::new("BVS", Relative, branches::bvs);
    t[0x90] = OpEntry::new("BCC", Relative, branches::bcc);
    t[0xB0] = OpEntry::new("BCS", Relative, branches::bcs);
    t[0xD0] = OpEntry::new("BNE", Relative, branches::bne);
    t[0xF0] = OpEntry::new("BEQ", Relative, branches::beq);

    // ---- Jumps / subroutines / interrupts ----
    t[0x4C] = OpEntry::new("JMP", Absolute, control_flow::jmp_abs);
    t[0x6C] = OpEntry::new("JMP", Indirect, control_flow::jmp_ind);
    t[0x20] = OpEntry::new("JSR", Absolute, control_flow::jsr);
    t[0x60] = OpEntry::new("RTS", Implied, control_flow::rts);
    t[0x00] = OpEntry::new("BRK", Implied, control_flow::brk);
    t[0x40] = OpEntry::new("RTI", Implied, control_flow::rti);

    // ---- NOP ----
    t[0xEA] = OpEntry::new("NOP", Implied, fallback::nop);

    t
}
