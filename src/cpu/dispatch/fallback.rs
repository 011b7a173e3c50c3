/*!
fallback - NOP and undocumented/illegal opcodes.

Real 6502s never halt on an undocumented opcode; most either act as a
no-op of some width or have genuinely undefined (but non-fatal) side
effects. This core treats every opcode the table doesn't recognize as a
plain one-byte, two-cycle no-op rather than trying to model the quirks of
any specific illegal opcode - good enough to keep a program counter
moving through ROM that contains stray data bytes without ever faulting
the CPU.
*/

use crate::cpu::state::Cpu6502;
use crate::cpu::MemoryPort;

pub(crate) fn nop(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.internal_cycle();
}

pub(crate) fn illegal(cpu: &mut Cpu6502, _mem: &mut dyn MemoryPort) {
    cpu.internal_cycle();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;
    use crate::test_utils::build_nrom_with_prg;
    use crate::Bus;

    #[test]
    fn illegal_opcode_never_halts_and_consumes_two_cycles() {
        let rom = build_nrom_with_prg(&[0x02, 0xEA], 1, 1, None);
        let cart = Cartridge::from_ines_bytes(&rom).expect("parse");
        let mut bus = Bus::new();
        bus.attach_cartridge(cart);
        let mut cpu = Cpu6502::new();
        cpu.reset(&mut bus);
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 2);
        let cycles2 = cpu.step(&mut bus);
        assert_eq!(cycles2, 2);
    }
}
