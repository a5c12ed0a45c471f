use log::debug;

/// The interrupt-request flag register, `IF`.
pub const IRQ_FLAG_ADDR: u16 = 0xFF0F;
/// The interrupt-enable register, `IE`.
pub const IRQ_ENABLE_ADDR: u16 = 0xFFFF;

/// Anything the CPU can read bytes from and write bytes to.
///
/// The CPU performs at most one bus access per M-cycle, so an implementation
/// can count calls if it wants bus-level timing.
pub trait DataBus {
    fn read(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, byte: u8);
}

/// A minimal DMG memory map: cartridge, WRAM, HRAM and the interrupt
/// registers.
///
/// There's no PPU, APU, timer or joypad behind this bus; their addresses act
/// like open bus (reads return `$FF`, writes vanish). That's enough to run
/// CPU test ROMs that report over `IE`/`IF`-independent channels, and to
/// exercise every instruction.
pub struct SystemBus {
    cart: Box<dyn DataBus>,
    wram: Box<[u8; 0x2000]>,
    hram: [u8; 0x7F],
    irq_flag: u8,
    irq_enable: u8,
}

impl SystemBus {
    pub fn new(cart: Box<dyn DataBus>) -> Self {
        Self {
            cart,
            wram: Box::new([0; 0x2000]),
            hram: [0; 0x7F],
            irq_flag: 0,
            irq_enable: 0,
        }
    }
}

impl DataBus for SystemBus {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => self.cart.read(addr),
            0xC000..=0xDFFF => self.wram[usize::from(addr - 0xC000)],
            // Echo RAM mirrors WRAM.
            0xE000..=0xFDFF => self.wram[usize::from(addr - 0xE000)],
            IRQ_FLAG_ADDR => self.irq_flag | 0xE0,
            0xFF80..=0xFFFE => self.hram[usize::from(addr - 0xFF80)],
            IRQ_ENABLE_ADDR => self.irq_enable,
            _ => 0xFF,
        }
    }

    fn write(&mut self, addr: u16, byte: u8) {
        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => self.cart.write(addr, byte),
            0xC000..=0xDFFF => self.wram[usize::from(addr - 0xC000)] = byte,
            0xE000..=0xFDFF => self.wram[usize::from(addr - 0xE000)] = byte,
            IRQ_FLAG_ADDR => self.irq_flag = byte & 0x1F,
            0xFF80..=0xFFFE => self.hram[usize::from(addr - 0xFF80)] = byte,
            IRQ_ENABLE_ADDR => self.irq_enable = byte,
            _ => debug!("dropped write of ${byte:02X} to unmapped ${addr:04X}"),
        }
    }
}
