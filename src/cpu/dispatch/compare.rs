/*!
compare - CMP/CPX/CPY.

All three are the same shape: an unsigned subtraction whose result only
feeds the flags (the register is never written back).
*/

use crate::cpu::addressing::{fetch_byte, resolve_operand_addr, AddressingMode};
use crate::cpu::state::{Cpu6502, CARRY};
use crate::cpu::MemoryPort;

fn read_operand(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort, mode: AddressingMode) -> u8 {
    if mode == AddressingMode::Immediate {
        fetch_byte(cpu, mem)
    } else {
        let addr = resolve_operand_addr(cpu, mem, mode, false);
        cpu.read(mem, addr)
    }
}

fn compare(cpu: &mut Cpu6502, register: u8, operand: u8) {
    cpu.assign_flag(CARRY, register >= operand);
    let diff = register.wrapping_sub(operand);
    cpu.update_zn(diff);
}

pub(crate) fn cmp(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let v = read_operand(cpu, mem, cpu.addr_mode);
    compare(cpu, cpu.a, v);
}

pub(crate) fn cpx(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let v = read_operand(cpu, mem, cpu.addr_mode);
    compare(cpu, cpu.x, v);
}

pub(crate) fn cpy(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let v = read_operand(cpu, mem, cpu.addr_mode);
    compare(cpu, cpu.y, v);
}
