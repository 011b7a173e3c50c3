/*!
rmw - Read-modify-write opcode family: ASL/LSR/ROL/ROR/INC/DEC.

Each memory-addressed variant reads the operand, charges an internal
cycle for the modify step, then writes the result back - three bus-facing
steps in total, matching the extra internal cycle real 6502 hardware
spends holding the old value while it recomputes the new one. The
accumulator variants (ASL/LSR/ROL/ROR only) skip memory entirely and
operate on `cpu.a` in a single cycle.

Indexed-absolute addressing always pays the page-cross cycle here (see
`addressing::resolve_operand_addr`'s `force_page_penalty`), since the
memory write must happen regardless of whether the index carried.
*/

use crate::cpu::addressing::{resolve_operand_addr, AddressingMode};
use crate::cpu::state::{Cpu6502, CARRY};
use crate::cpu::MemoryPort;

fn modify_in_place(
    cpu: &mut Cpu6502,
    mem: &mut dyn MemoryPort,
    f: impl FnOnce(&mut Cpu6502, u8) -> u8,
) {
    if cpu.addr_mode == AddressingMode::Accumulator {
        let old = cpu.a;
        let new = f(cpu, old);
        cpu.a = new;
        cpu.update_zn(new);
        return;
    }

    let addr = resolve_operand_addr(cpu, mem, cpu.addr_mode, true);
    let old = cpu.read(mem, addr);
    cpu.internal_cycle(); // modify step, no bus transaction
    let new = f(cpu, old);
    cpu.write(mem, addr, new);
    cpu.update_zn(new);
}

pub(crate) fn asl(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    modify_in_place(cpu, mem, |cpu, old| {
        cpu.assign_flag(CARRY, (old & 0x80) != 0);
        old << 1
    });
}

pub(crate) fn lsr(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    modify_in_place(cpu, mem, |cpu, old| {
        cpu.assign_flag(CARRY, (old & 0x01) != 0);
        old >> 1
    });
}

pub(crate) fn rol(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    modify_in_place(cpu, mem, |cpu, old| {
        let carry_in = if cpu.is_flag_set(CARRY) { 1 } else { 0 };
        cpu.assign_flag(CARRY, (old & 0x80) != 0);
        (old << 1) | carry_in
    });
}

pub(crate) fn ror(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    modify_in_place(cpu, mem, |cpu, old| {
        let carry_in = if cpu.is_flag_set(CARRY) { 0x80 } else { 0 };
        cpu.assign_flag(CARRY, (old & 0x01) != 0);
        (old >> 1) | carry_in
    });
}

pub(crate) fn inc(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    modify_in_place(cpu, mem, |_cpu, old| old.wrapping_add(1));
}

pub(crate) fn dec(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    modify_in_place(cpu, mem, |_cpu, old| old.wrapping_sub(1));
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
    fn asl_accumulator_shifts_and_sets_carry() {
        let (mut cpu, mut bus) = setup(&[0xA9, 0x81, 0x0A]); // LDA #$81; ASL A
        cpu.step(&mut bus);
        let cycles = cpu.step(&mut bus);
        assert_eq!(cpu.a(), 0x02);
        assert!(cpu.is_flag_set(CARRY));
        assert_eq!(cycles, 2);
    }

    #[test]
    fn asl_zero_page_is_five_cycles() {
        let (mut cpu, mut bus) = setup(&[0x06, 0x10]);
        bus.write(0x0010, 0x01);
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 5);
        assert_eq!(bus.read(0x0010), 0x02);
    }

    #[test]
    fn asl_absolute_x_always_pays_seven_cycles() {
        let (mut cpu, mut bus) = setup(&[0x1E, 0x00, 0x80]);
        cpu.x = 0x01;
        bus.write(0x8001, 0x01);
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 7);
    }

    #[test]
    fn inc_dec_wrap_without_touching_carry() {
        let (mut cpu, mut bus) = setup(&[0xE6, 0x10, 0xC6, 0x10]);
        bus.write(0x0010, 0xFF);
        cpu.assign_flag(CARRY, true);
        cpu.step(&mut bus); // INC $10 -> 0x00
        assert_eq!(bus.read(0x0010), 0x00);
        assert!(cpu.is_flag_set(CARRY)); // INC never touches carry
        cpu.step(&mut bus); // DEC $10 -> 0xFF
        assert_eq!(bus.read(0x0010), 0xFF);
    }

    #[test]
    fn ror_rotates_carry_into_bit_seven() {
        let (mut cpu, mut bus) = setup(&[0x6A]); // ROR A
        cpu.a = 0x01;
        cpu.assign_flag(CARRY, true);
        cpu.step(&mut bus);
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.is_flag_set(CARRY)); // old bit 0 shifted out
    }
}
