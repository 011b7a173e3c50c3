/*!
dispatch - Orchestrates a single CPU instruction step.

`step` fetches the next opcode, looks up its table entry, and calls the
entry's handler. Everything about DMA stalls and interrupt-line polling
lives on the host side (`Bus`, `Cpu6502::nmi`/`irq`); this module only
knows how to execute one instruction given whatever `MemoryPort` it's
handed.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod fallback;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use crate::cpu::state::Cpu6502;
use crate::cpu::table::OPCODE_TABLE;
use crate::cpu::MemoryPort;

pub(crate) fn step(cpu: &mut Cpu6502, mem: &mut dyn MemoryPort) -> u32 {
    cpu.cycles = 0;
    let pc_before = cpu.pc;

    let opcode = super::addressing::fetch_byte(cpu, mem);
    let entry = &OPCODE_TABLE[opcode as usize];
    cpu.addr_mode = entry.mode;

    (entry.handler)(cpu, mem);

    cpu.emit_trace(pc_before, opcode, entry.mnemonic);
    cpu.cycles
}
