/*!
logical - AND/ORA/EOR/BIT.

AND/ORA/EOR share the read-operand shape with the load family; BIT reads
its operand but only uses it to set flags, leaving the accumulator alone.
*/

use crate::cpu::addressing::{fetch_byte, resolve_operand_addr, AddressingMode};
use crate::cpu::state::{Cpu6502, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::MemoryPort;

fn read_operand(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort, mode: AddressingMode) -> u8 {
    if mode == AddressingMode::Immediate {
        fetch_byte(cpu, mem)
    } else {
        let addr = resolve_operand_addr(cpu, mem, mode, false);
        cpu.read(mem, addr)
    }
}

pub(crate) fn and(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let v = read_operand(cpu, mem, cpu.addr_mode);
    cpu.a &= v;
    let a = cpu.a;
    cpu.update_zn(a);
}

pub(crate) fn ora(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let v = read_operand(cpu, mem, cpu.addr_mode);
    cpu.a |= v;
    let a = cpu.a;
    cpu.update_zn(a);
}

pub(crate) fn eor(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let v = read_operand(cpu, mem, cpu.addr_mode);
    cpu.a ^= v;
    let a = cpu.a;
    cpu.update_zn(a);
}

pub(crate) fn bit(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let v = read_operand(cpu, mem, cpu.addr_mode);
    cpu.assign_flag(ZERO, (cpu.a & v) == 0);
    cpu.assign_flag(NEGATIVE, (v & 0x80) != 0);
    cpu.assign_flag(OVERFLOW, (v & 0x40) != 0);
}
