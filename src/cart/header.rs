use super::{HeaderChecksumMismatch, TruncatedRom};

/// The header occupies `$0100..=$014F`, so any real image is at least this
/// long.
pub const HEADER_END: usize = 0x0150;

/// The CGB-support byte at `$0143`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CgbFlag {
    /// No color support declared.
    #[default]
    None,
    /// Runs on both DMG and CGB (`$80`).
    Both,
    /// CGB only (`$C0`).
    CgbOnly,
}

impl CgbFlag {
    pub const fn new(byte: u8) -> Self {
        match byte {
            0x80 => Self::Both,
            0xC0 => Self::CgbOnly,
            _ => Self::None,
        }
    }
}

/// The cart-type byte at `$0147`, as far as this crate knows it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CartType {
    #[default]
    RomOnly,
    Mbc1,
    Mbc1Ram,
    Mbc1RamBattery,
    Unknown(u8),
}

impl CartType {
    pub const fn new(byte: u8) -> Self {
        match byte {
            0x00 => Self::RomOnly,
            0x01 => Self::Mbc1,
            0x02 => Self::Mbc1Ram,
            0x03 => Self::Mbc1RamBattery,
            other => Self::Unknown(other),
        }
    }
}

/// The destination byte at `$014A`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Destination {
    #[default]
    Japan,
    Overseas,
    Unknown(u8),
}

impl Destination {
    pub const fn new(byte: u8) -> Self {
        match byte {
            0x00 => Self::Japan,
            0x01 => Self::Overseas,
            other => Self::Unknown(other),
        }
    }
}

/// A typed view of the cartridge header block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartHeader {
    /// The four bytes jumped through at `$0100`.
    pub entry_point: [u8; 4],
    /// The logo bitmap the boot ROM checks.
    pub logo: [u8; 48],
    /// The title, with trailing NULs stripped.
    pub title: String,
    /// `$013F..=$0142`; overlaps the tail of older titles.
    pub manufacturer_code: [u8; 4],
    pub cgb_flag: CgbFlag,
    pub new_licensee_code: [u8; 2],
    pub sgb_flag: bool,
    pub cart_type: CartType,
    /// The size *code*; see [`CartHeader::rom_size`].
    pub rom_size_code: u8,
    /// The size *code*; see [`CartHeader::ram_size`].
    pub ram_size_code: u8,
    pub destination: Destination,
    pub old_licensee_code: u8,
    pub mask_rom_version: u8,
    pub header_checksum: u8,
    pub global_checksum: u16,
}

impl CartHeader {
    /// Parses and verifies the header out of a ROM image.
    ///
    /// The header checksum is verified; the global checksum is read but not
    /// verified (real hardware doesn't check it either).
    pub fn parse(rom: &[u8]) -> Result<Self, super::CartError> {
        if rom.len() < HEADER_END {
            return Err(TruncatedRom { len: rom.len() }.into());
        }

        let computed = header_checksum(rom);
        let stored = rom[0x014D];
        if computed != stored {
            return Err(HeaderChecksumMismatch { stored, computed }.into());
        }

        let title_bytes = &rom[0x0134..=0x0143];
        let title_len = title_bytes.iter().position(|&b| b == 0).unwrap_or(title_bytes.len());
        let title = String::from_utf8_lossy(&title_bytes[..title_len]).into_owned();

        Ok(Self {
            entry_point: rom[0x0100..=0x0103].try_into().unwrap_or_default(),
            logo: rom[0x0104..=0x0133].try_into().unwrap_or([0; 48]),
            title,
            manufacturer_code: rom[0x013F..=0x0142].try_into().unwrap_or_default(),
            cgb_flag: CgbFlag::new(rom[0x0143]),
            new_licensee_code: [rom[0x0144], rom[0x0145]],
            sgb_flag: rom[0x0146] == 0x03,
            cart_type: CartType::new(rom[0x0147]),
            rom_size_code: rom[0x0148],
            ram_size_code: rom[0x0149],
            destination: Destination::new(rom[0x014A]),
            old_licensee_code: rom[0x014B],
            mask_rom_version: rom[0x014C],
            header_checksum: stored,
            global_checksum: u16::from_be_bytes([rom[0x014E], rom[0x014F]]),
        })
    }

    /// Declared ROM size in bytes: 32 KiB shifted by the size code.
    #[must_use]
    pub const fn rom_size(&self) -> usize {
        (32 * 1024) << self.rom_size_code
    }

    /// Declared cartridge RAM size in bytes.
    #[must_use]
    pub const fn ram_size(&self) -> usize {
        match self.ram_size_code {
            0x01 => 2 * 1024,
            0x02 => 8 * 1024,
            0x03 => 32 * 1024,
            0x04 => 128 * 1024,
            0x05 => 64 * 1024,
            _ => 0,
        }
    }
}

/// The fold over `$0134..=$014C` that the boot ROM performs.
#[must_use]
pub fn header_checksum(rom: &[u8]) -> u8 {
    rom[0x0134..=0x014C]
        .iter()
        .fold(0_u8, |sum, &byte| sum.wrapping_sub(byte).wrapping_sub(1))
}
