/*!
misc - Register transfers, stack ops, flag ops, and register increment/decrement.

All of these are Implied-addressing, fixed-shape instructions; none of
them touch the shared operand resolver.
*/

use crate::cpu::state::{Cpu6502, CARRY, DECIMAL, INTERRUPT_DISABLE, OVERFLOW};
use crate::cpu::MemoryPort;

// ---- Transfers ----

pub(crate) fn tax(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.x = cpu.a;
    let x = cpu.x;
    cpu.update_zn(x);
}

pub(crate) fn tay(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.y = cpu.a;
    let y = cpu.y;
    cpu.update_zn(y);
}

pub(crate) fn txa(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.a = cpu.x;
    let a = cpu.a;
    cpu.update_zn(a);
}

pub(crate) fn tya(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.a = cpu.y;
    let a = cpu.a;
    cpu.update_zn(a);
}

pub(crate) fn tsx(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.x = cpu.sp;
    let x = cpu.x;
    cpu.update_zn(x);
}

pub(crate) fn txs(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    // TXS does not touch Z/N - the stack pointer isn't a "result" register.
    cpu.sp = cpu.x;
}

// ---- Stack ----

pub(crate) fn pha(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let a = cpu.a;
    cpu.push_u8(mem, a);
    cpu.internal_cycle(); // PHA totals 3: push + 1 internal
}

pub(crate) fn pla(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    cpu.internal_cycle(); // pre-increment of S before the pull
    let v = cpu.pop_u8(mem);
    cpu.a = v;
    cpu.update_zn(v);
    cpu.internal_cycle(); // PLA totals 4: 2 internal + 1 pull + 1 (fetch already counted)
}

pub(crate) fn php(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    let status = cpu.compose_status_for_push(true);
    cpu.push_u8(mem, status);
    cpu.internal_cycle(); // PHP totals 3
}

pub(crate) fn plp(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) {
    cpu.internal_cycle();
    let v = cpu.pop_u8(mem);
    cpu.adopt_pulled_status(v);
    cpu.internal_cycle(); // PLP totals 4
}

// ---- Register increment / decrement ----

pub(crate) fn inx(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.x = cpu.x.wrapping_add(1);
    let x = cpu.x;
    cpu.update_zn(x);
}

pub(crate) fn iny(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.y = cpu.y.wrapping_add(1);
    let y = cpu.y;
    cpu.update_zn(y);
}

pub(crate) fn dex(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.x = cpu.x.wrapping_sub(1);
    let x = cpu.x;
    cpu.update_zn(x);
}

pub(crate) fn dey(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.y = cpu.y.wrapping_sub(1);
    let y = cpu.y;
    cpu.update_zn(y);
}

// ---- Flags ----

pub(crate) fn clc(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.assign_flag(CARRY, false);
}

pub(crate) fn sec(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.assign_flag(CARRY, true);
}

pub(crate) fn cli(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.assign_flag(INTERRUPT_DISABLE, false);
}

pub(crate) fn sei(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.assign_flag(INTERRUPT_DISABLE, true);
}

pub(crate) fn cld(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.assign_flag(DECIMAL, false);
}

pub(crate) fn sed(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.assign_flag(DECIMAL, true);
}

pub(crate) fn clv(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.assign_flag(OVERFLOW, false);
}
