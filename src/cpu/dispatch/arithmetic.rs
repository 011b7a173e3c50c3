/*!
arithmetic - ADC/SBC.

SBC is implemented as ADC against the one's complement of the operand,
the standard trick that lets a single formula drive both carry and
overflow for either instruction (the 6502 ALU does the same thing in
hardware).
*/

use crate::cpu::addressing::{fetch_byte, resolve_operand_addr, AddressingMode};
use crate::cpu::state::{Cpu6502, CARRY, OVERFLOW};
use crate::cpu::MemoryPort;

fn read_operand(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort, mode: AddressingMode) -> u8 {
    if mode == AddressingMode::Immediate {
        fetch_byte(cpu, mem)
    } else {
        let addr = resolve_operand_addr(cpu, mem, mode, false);
        cpu.read(mem, addr)
    }
}

fn add_with_carry(cpu: &mut Cpu6502, operand: u8) {
    let a = cpu.a;
    let carry_in = if cpu.is_flag_set(CARRY) { 1u16 } else { 0u16 };
    let sum = a as u16 + operand as u16 + carry_in;
    let result = sum as u8;
    cpu.assign_flag(CARRY, sum > 0xFF);
    let overflow = (!(a ^ operand) & (a ^ result) & 0x80) != 0;
    cpu.assign_flag(OVERFLOW, overflow);
    cpu.a = result;
    cpu.update_zn(result);
}

pub(crate) fn adc(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let v = read_operand(cpu, mem, cpu.addr_mode);
    add_with_carry(cpu, v);
}

pub(crate) fn sbc(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let v = read_operand(cpu, mem, cpu.addr_mode);
    add_with_carry(cpu, v ^ 0xFF);
}
