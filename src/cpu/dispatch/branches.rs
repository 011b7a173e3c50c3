/*!
branches - BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ.

The displacement byte is always fetched (1 cycle). A taken branch charges
one more internal cycle; if the branch also crosses into a different
page, it charges a second. Comparing the high byte of PC right after the
displacement fetch against the high byte of the new PC gives exactly the
hardware's "PC+2 vs. target" page-cross check.
*/

use crate::cpu::addressing::fetch_byte;
use crate::cpu::state::{Cpu6502, CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::MemoryPort;

fn branch_if(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort, condition: bool) {
    let offset = fetch_byte(cpu, mem) as i8;
    if !condition {
        return;
    }
    let pc_after_operand = cpu.pc;
    let target = (pc_after_operand as i32 + offset as i32) as u16;
    cpu.pc = target;
    cpu.internal_cycle();
    if (pc_after_operand & 0xFF00) != (target & 0xFF00) {
        cpu.internal_cycle();
    }
}

pub(crate) fn bpl(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let cond = !cpu.is_flag_set(NEGATIVE);
    branch_if(cpu, mem, cond);
}

pub(crate) fn bmi(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let cond = cpu.is_flag_set(NEGATIVE);
    branch_if(cpu, mem, cond);
}

pub(crate) fn bvc(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let cond = !cpu.is_flag_set(OVERFLOW);
    branch_if(cpu, mem, cond);
}

pub(crate) fn bvs(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let cond = cpu.is_flag_set(OVERFLOW);
    branch_if(cpu, mem, cond);
}

pub(crate) fn bcc(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let cond = !cpu.is_flag_set(CARRY);
    branch_if(cpu, mem, cond);
}

pub(crate) fn bcs(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let cond = cpu.is_flag_set(CARRY);
    branch_if(cpu, mem, cond);
}

pub(crate) fn bne(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let cond = !cpu.is_flag_set(ZERO);
    branch_if(cpu, mem, cond);
}

pub(crate) fn beq(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let cond = cpu.is_flag_set(ZERO);
    branch_if(cpu, mem, cond);
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
    fn not_taken_is_two_cycles() {
        let (mut cpu, mut bus) = setup(&[0xF0, 0x10]); // BEQ, Z clear after reset
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 2);
        assert_eq!(cpu.pc(), 0x8002);
    }

    #[test]
    fn taken_no_cross_is_three_cycles() {
        let (mut cpu, mut bus) = setup(&[0xD0, 0x10]); // BNE, Z clear -> taken
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 3);
        assert_eq!(cpu.pc(), 0x8012);
    }
}
