/*!
addressing.rs - Addressing-mode enum and operand/effective-address resolvers.

Every resolver here advances `cpu.pc` past the operand bytes it consumes
and charges cycles through `Cpu6502::read`/`internal_cycle` as it goes, so
the final cycle count for an instruction falls out of which resolver and
handler ran rather than from a separate lookup table. The one exception
is JSR/RTS/RTI/BRK/interrupt entry, which stamp a fixed total in
`dispatch::control_flow` - see the note in `state.rs`.

Indexed absolute and indirect-indexed addressing report whether the
index crossed a page boundary; callers decide whether that costs a cycle
(conditionally for reads, unconditionally for writes and read-modify-write).
*/

use crate::cpu::state::Cpu6502;
use crate::cpu::MemoryPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect, // (zp,X)
    IndirectIndexed, // (zp),Y
    Relative,
}

/// Fetch next byte from the instruction stream, incrementing PC.
pub(crate) fn fetch_byte(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) -> u8 {
    let pc = cpu.pc;
    let v = cpu.read(mem, pc);
    cpu.pc = cpu.pc.wrapping_add(1);
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
pub(crate) fn fetch_word(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) -> u16 {
    let lo = fetch_byte(cpu, mem) as u16;
    let hi = fetch_byte(cpu, mem) as u16;
    (hi << 8) | lo
}

pub(crate) fn addr_zero_page(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) -> u16 {
    fetch_byte(cpu, mem) as u16
}

pub(crate) fn addr_zero_page_indexed(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort, index: u8) -> u16 {
    let base = fetch_byte(cpu, mem);
    cpu.internal_cycle(); // dummy read while the index is added
    base.wrapping_add(index) as u16
}

pub(crate) fn addr_absolute(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) -> u16 {
    fetch_word(cpu, mem)
}

/// Absolute,X / Absolute,Y. `force_penalty` charges the cycle unconditionally
/// (stores and read-modify-write always pay it); otherwise it's only charged
/// when adding the index actually crosses a page.
pub(crate) fn addr_absolute_indexed(
    cpu: &mut Cpu6502,
    mem: &mut dyn MemoryPort,
    index: u8,
    force_penalty: bool,
) -> u16 {
    let base = fetch_word(cpu, mem);
    let addr = base.wrapping_add(index as u16);
    let crossed = (base & 0xFF00) != (addr & 0xFF00);
    if crossed || force_penalty {
        cpu.internal_cycle();
    }
    addr
}

/// Read a 16-bit little-endian pointer from zero page with wraparound on
/// the high byte (standard 6502 zero-page indirect behavior).
pub(crate) fn read_zero_page_word(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort, base: u8) -> u16 {
    let lo = cpu.read(mem, base as u16) as u16;
    let hi = cpu.read(mem, base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

pub(crate) fn addr_indexed_indirect(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) -> u16 {
    let zp = fetch_byte(cpu, mem);
    cpu.internal_cycle(); // dummy read while X is added to the pointer
    read_zero_page_word(cpu, mem, zp.wrapping_add(cpu.x))
}

pub(crate) fn addr_indirect_indexed(
    cpu: &mut Cpu6502,
    mem: &mut dyn MemoryPort,
    force_penalty: bool,
) -> u16 {
    let zp = fetch_byte(cpu, mem);
    let base = read_zero_page_word(cpu, mem, zp);
    let addr = base.wrapping_add(cpu.y as u16);
    let crossed = (base & 0xFF00) != (addr & 0xFF00);
    if crossed || force_penalty {
        cpu.internal_cycle();
    }
    addr
}

/// Emulate the original 6502 JMP (indirect) hardware bug: when the low
/// byte of the indirect vector is 0xFF, the high byte fetch wraps within
/// the same page instead of crossing into the next one.
pub(crate) fn addr_indirect_jmp_target(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) -> u16 {
    let ptr = fetch_word(cpu, mem);
    let lo = cpu.read(mem, ptr) as u16;
    let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
    let hi = cpu.read(mem, hi_addr) as u16;
    (hi << 8) | lo
}

/// Resolve the effective address for the addressing modes shared by the
/// read/store/RMW families (everything except Immediate, Accumulator,
/// Implied, Indirect and Relative, which handlers special-case directly).
pub(crate) fn resolve_operand_addr(
    cpu: &mut Cpu6502,
    mem: &mut dyn MemoryPort,
    mode: AddressingMode,
    force_page_penalty: bool,
) -> u16 {
    use AddressingMode::*;
    match mode {
        ZeroPage => addr_zero_page(cpu, mem),
        ZeroPageX => addr_zero_page_indexed(cpu, mem, cpu.x),
        ZeroPageY => addr_zero_page_indexed(cpu, mem, cpu.y),
        Absolute => addr_absolute(cpu, mem),
        AbsoluteX => addr_absolute_indexed(cpu, mem, cpu.x, force_page_penalty),
        AbsoluteY => addr_absolute_indexed(cpu, mem, cpu.y, force_page_penalty),
        IndexedIndirect => addr_indexed_indirect(cpu, mem),
        IndirectIndexed => addr_indirect_indexed(cpu, mem, force_page_penalty),
        other => panic!("resolve_operand_addr: unsupported addressing mode {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;
    use crate::test_utils::build_nrom_with_prg;
    use crate::Bus;

    fn setup(prg: &[u8]) -> (Cpu6502, Bus) {
        let rom = build_nrom_with_prg(prg, 1, 1, None);
        let cart = Cartridge::from_ines_bytes(&rom).expect("parse");
        let mut bus = Bus::new();
        bus.attach_cartridge(cart);
        let mut cpu = Cpu6502::new();
        cpu.reset(&mut bus);
        (cpu, bus)
    }

    #[test]
    fn abs_x_page_cross_detection() {
        let (mut cpu, mut bus) = setup(&[0xEA, 0xBD, 0xF5, 0x80, 0x00]);
        let _ = fetch_byte(&mut cpu, &mut bus); // consume the leading NOP byte
        cpu.x = 0x10;
        let _opcode = fetch_byte(&mut cpu, &mut bus); // consume 0xBD
        let addr = addr_absolute_indexed(&mut cpu, &mut bus, cpu.x, false);
        assert_eq!(addr, 0x80F5u16.wrapping_add(0x10));
    }

    #[test]
    fn zero_page_word_wraps_high_byte_within_page() {
        let (mut cpu, mut bus) = setup(&[0xEA]);
        bus.write(0x00FF, 0x34);
        bus.write(0x0000, 0x12);
        let word = read_zero_page_word(&mut cpu, &mut bus, 0xFF);
        assert_eq!(word, 0x1234);
    }

    #[test]
    fn indirect_jmp_bug_wraps_within_page() {
        let (mut cpu, mut bus) = setup(&[0xEA]);
        bus.write(0x10FF, 0x34);
        bus.write(0x1000, 0x12); // would be read if the bug didn't wrap
        bus.write(0x1100, 0xFF); // must NOT be read
        cpu.pc = 0x8000;
        bus.write(0x8000, 0xFF);
        bus.write(0x8001, 0x10);
        let target = addr_indirect_jmp_target(&mut cpu, &mut bus);
        assert_eq!(target, 0x1234);
    }
}
