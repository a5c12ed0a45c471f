use bitfrob::{u8_get_bit, u8_get_value};
use log::debug;

use super::{CartHeader, CartType, UnsupportedMapper};
use crate::bus::DataBus;

/// Builds the right mapper for a ROM image, based on its header.
pub fn new_cart(rom: Vec<u8>) -> Result<Box<dyn DataBus>, super::CartError> {
    let header = CartHeader::parse(&rom)?;
    match header.cart_type {
        CartType::RomOnly => Ok(RomOnly::new_boxed(rom)),
        CartType::Mbc1 => Ok(Mbc1::new_boxed(rom, 0)),
        CartType::Mbc1Ram | CartType::Mbc1RamBattery => {
            let ram_size = header.ram_size();
            Ok(Mbc1::new_boxed(rom, ram_size))
        }
        CartType::Unknown(code) => Err(UnsupportedMapper { code }.into()),
    }
}

/// Cart type `$00`: 32 KiB of ROM wired straight to the bus.
pub struct RomOnly {
    rom: Vec<u8>,
}

impl RomOnly {
    pub fn new_boxed(rom: Vec<u8>) -> Box<Self> {
        Box::new(Self { rom })
    }
}

impl DataBus for RomOnly {
    fn read(&self, addr: u16) -> u8 {
        match self.rom.get(usize::from(addr)) {
            Some(&byte) if addr <= 0x7FFF => byte,
            _ => 0xFF,
        }
    }

    fn write(&mut self, addr: u16, byte: u8) {
        debug!("ROM-only cart ignored write of ${byte:02X} to ${addr:04X}");
    }
}

/// Cart type `$01..=$03`: the MBC1 banking controller.
///
/// * See also: [Pan Docs: MBC1](https://gbdev.io/pandocs/MBC1.html)
pub struct Mbc1 {
    rom: Vec<u8>,
    ram: Vec<u8>,
    /// The 5-bit primary ROM bank register. Zero reads as one.
    bank1: u8,
    /// The 2-bit secondary register: ROM bank high bits, or the RAM bank in
    /// advanced mode.
    bank2: u8,
    /// `$6000` region: false = simple banking, true = advanced.
    advanced_mode: bool,
    ram_enabled: bool,
}

impl Mbc1 {
    pub fn new_boxed(rom: Vec<u8>, ram_size: usize) -> Box<Self> {
        Box::new(Self {
            rom,
            ram: vec![0; ram_size],
            bank1: 1,
            bank2: 0,
            advanced_mode: false,
            ram_enabled: false,
        })
    }

    /// The ROM bank mapped at `$4000..=$7FFF`.
    fn high_rom_bank(&self) -> usize {
        let bank1 = if self.bank1 == 0 { 1 } else { self.bank1 };
        usize::from((self.bank2 << 5) | bank1)
    }

    /// The ROM bank mapped at `$0000..=$3FFF`.
    fn low_rom_bank(&self) -> usize {
        if self.advanced_mode {
            usize::from(self.bank2) << 5
        } else {
            0
        }
    }

    fn ram_addr(&self, addr: u16) -> usize {
        let bank = if self.advanced_mode { usize::from(self.bank2) } else { 0 };
        (bank * 0x2000 + usize::from(addr - 0xA000)) % self.ram.len().max(1)
    }

    fn rom_byte(&self, bank: usize, offset: u16) -> u8 {
        let index = (bank * 0x4000 + usize::from(offset)) % self.rom.len().max(1);
        self.rom.get(index).copied().unwrap_or(0xFF)
    }
}

impl DataBus for Mbc1 {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3FFF => self.rom_byte(self.low_rom_bank(), addr),
            0x4000..=0x7FFF => self.rom_byte(self.high_rom_bank(), addr - 0x4000),
            0xA000..=0xBFFF if self.ram_enabled && !self.ram.is_empty() => {
                self.ram[self.ram_addr(addr)]
            }
            _ => 0xFF,
        }
    }

    fn write(&mut self, addr: u16, byte: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enabled = u8_get_value(0, 3, byte) == 0x0A,
            0x2000..=0x3FFF => self.bank1 = u8_get_value(0, 4, byte),
            0x4000..=0x5FFF => self.bank2 = u8_get_value(0, 1, byte),
            0x6000..=0x7FFF => self.advanced_mode = u8_get_bit(0, byte),
            0xA000..=0xBFFF if self.ram_enabled && !self.ram.is_empty() => {
                let index = self.ram_addr(addr);
                self.ram[index] = byte;
            }
            _ => debug!("MBC1 ignored write of ${byte:02X} to ${addr:04X}"),
        }
    }
}
