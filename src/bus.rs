/*!
Bus: the flat memory map a `Cpu6502` actually runs against.

Address map (CPU-visible):
- `$0000..=$07FF`: 2 KiB internal RAM
- `$0800..=$1FFF`: mirrors of the RAM above (mask with `& 0x07FF`)
- `$2000..=$3FFF`: PPU registers, mirrored every 8 bytes
- `$4000..=$4013`, `$4015`, `$4017`: APU registers
- `$4014`: OAM DMA — writing a page number copies 256 bytes from
  `$XX00..=$XXFF` into PPU OAM
- `$4016..=$4017`: controller 1/2 serial shift registers
- `$4018..=$5FFF`: unmapped, reads as 0 / writes ignored
- `$6000..=$FFFF`: cartridge space (PRG RAM then PRG ROM), delegated to
  the attached `Cartridge`'s mapper

This is the one `MemoryPort` implementation the crate ships; the CPU
core itself has no idea any of these devices exist; see `cpu::MemoryPort`.
*/

use crate::apu::Apu;
use crate::cartridge::Cartridge;
use crate::controller::Controller;
use crate::cpu::MemoryPort;
use crate::ppu::Ppu;

pub struct Bus {
    ram: [u8; 0x0800],
    pub ppu: Ppu,
    pub apu: Apu,
    pub controllers: [Controller; 2],
    pub cartridge: Option<Cartridge>,
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    pub fn new() -> Self {
        Self {
            ram: [0; 0x0800],
            ppu: Ppu::new(),
            apu: Apu::new(),
            controllers: [Controller::new(), Controller::new()],
            cartridge: None,
        }
    }

    pub fn attach_cartridge(&mut self, cartridge: Cartridge) {
        self.cartridge = Some(cartridge);
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
            0x2000..=0x3FFF => self.ppu.read_reg(addr & 0x2007),
            0x4015 => self.apu.read_reg(addr),
            0x4016 => self.controllers[0].read(),
            0x4017 => self.controllers[1].read(),
            0x4000..=0x4013 => self.apu.read_reg(addr),
            0x4014 | 0x4018..=0x401F => 0,
            0x4020..=0x5FFF => 0,
            0x6000..=0xFFFF => match &self.cartridge {
                Some(cart) => cart.cpu_read(addr),
                None => 0xFF,
            },
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize] = value,
            0x2000..=0x3FFF => self.ppu.write_reg(addr & 0x2007, value),
            0x4014 => self.run_oam_dma(value),
            0x4016 => {
                self.controllers[0].write_strobe(value);
                self.controllers[1].write_strobe(value);
            }
            0x4017 => self.apu.write_reg(addr, value),
            0x4000..=0x4013 | 0x4015 => self.apu.write_reg(addr, value),
            0x4018..=0x401F => {}
            0x4020..=0x5FFF => {}
            0x6000..=0xFFFF => {
                if let Some(cart) = &mut self.cartridge {
                    cart.cpu_write(addr, value);
                }
            }
        }
    }

    pub fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// `$4014`: copy the 256-byte page `value << 8 .. (value << 8) + 0xFF`
    /// from CPU address space into PPU OAM. Real hardware stalls the CPU
    /// for 513-514 cycles while this happens; that stall is a host/clock
    /// concern this crate leaves out (see the CPU core's Non-goals).
    fn run_oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        let mut buf = [0u8; 256];
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = self.read(base.wrapping_add(i as u16));
        }
        self.ppu.oam_dma_copy(&buf);
    }
}

impl MemoryPort for Bus {
    fn read(&mut self, addr: u16) -> u8 {
        Bus::read(self, addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        Bus::write(self, addr, value)
    }
}
