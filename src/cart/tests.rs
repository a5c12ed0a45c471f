#![cfg(test)]

use super::*;
use crate::bus::DataBus;

/// A blank image with a valid header and a marker byte at the start of every
/// 16 KiB bank.
fn test_rom(cart_type: u8, rom_size_code: u8, ram_size_code: u8) -> Vec<u8> {
    let mut rom = vec![0_u8; (32 * 1024) << rom_size_code];
    rom[0x0134..0x013F].copy_from_slice(b"KPASIM TEST");
    rom[0x0147] = cart_type;
    rom[0x0148] = rom_size_code;
    rom[0x0149] = ram_size_code;
    for bank in 0..(rom.len() / 0x4000) {
        rom[bank * 0x4000] = bank as u8;
    }
    rom[0x014D] = header_checksum(&rom);
    rom
}

#[test]
fn test_header_parse() {
    let rom = test_rom(0x00, 0, 0);
    let header = CartHeader::parse(&rom).expect("valid header");
    assert_eq!(header.title, "KPASIM TEST");
    assert_eq!(header.cart_type, CartType::RomOnly);
    assert_eq!(header.rom_size(), 32 * 1024);
    assert_eq!(header.ram_size(), 0);
    assert_eq!(header.cgb_flag, CgbFlag::None);
    assert_eq!(header.destination, Destination::Japan);
    assert!(!header.sgb_flag);
}

#[test]
fn test_header_ram_sizes() {
    for (code, bytes) in [(0, 0), (1, 2 << 10), (2, 8 << 10), (3, 32 << 10), (4, 128 << 10), (5, 64 << 10)] {
        let rom = test_rom(0x03, 0, code);
        let header = CartHeader::parse(&rom).expect("valid header");
        assert_eq!(header.ram_size(), bytes, "ram size code {code}");
    }
}

#[test]
fn test_header_checksum_rejected() {
    let mut rom = test_rom(0x00, 0, 0);
    rom[0x0134] = b'X';
    let err = CartHeader::parse(&rom).expect_err("corrupt header");
    assert!(err.is_header_checksum_mismatch(), "got {err}");
}

#[test]
fn test_truncated_rom_rejected() {
    let err = CartHeader::parse(&[0; 0x100]).expect_err("truncated image");
    assert!(err.is_truncated_rom(), "got {err}");
}

#[test]
fn test_new_cart_rejects_unknown_mapper() {
    let rom = test_rom(0x42, 0, 0);
    // `expect_err` would need the boxed cart to be `Debug`.
    let Err(err) = new_cart(rom) else {
        panic!("a $42 cart type shouldn't produce a mapper");
    };
    assert!(err.is_unsupported_mapper(), "got {err}");
    assert_eq!(err.to_string(), "cart type $42 is not a supported mapper!");
}

#[test]
fn test_new_cart_picks_mapper_from_header() {
    let rom = test_rom(0x01, 2, 0);
    let Ok(mut cart) = new_cart(rom) else {
        panic!("an MBC1 image should load");
    };
    cart.write(0x2000, 0x02);
    assert_eq!(cart.read(0x4000), 2, "writes reach the MBC1 bank register");
}

#[test]
fn test_rom_only_reads() {
    let rom = test_rom(0x00, 0, 0);
    let mut cart = RomOnly::new_boxed(rom);
    assert_eq!(cart.read(0x0000), 0);
    assert_eq!(cart.read(0x4000), 1);
    cart.write(0x1000, 0xAA);
    assert_eq!(cart.read(0x1000), 0x00, "ROM-only carts ignore writes");
    assert_eq!(cart.read(0xA000), 0xFF, "no cart RAM reads as open bus");
}

#[test]
fn test_mbc1_rom_banking() {
    // 128 KiB: banks 0..=7.
    let rom = test_rom(0x01, 2, 0);
    let mut cart = Mbc1::new_boxed(rom, 0);

    assert_eq!(cart.read(0x0000), 0, "fixed region is bank 0");
    assert_eq!(cart.read(0x4000), 1, "switchable region starts at bank 1");

    cart.write(0x2000, 0x03);
    assert_eq!(cart.read(0x4000), 3);

    cart.write(0x2000, 0x00);
    assert_eq!(cart.read(0x4000), 1, "bank 0 selects bank 1 in the high region");
}

#[test]
fn test_mbc1_ram_enable_gate() {
    let rom = test_rom(0x03, 0, 2);
    let mut cart = Mbc1::new_boxed(rom, 8 * 1024);

    cart.write(0xA000, 0x12);
    assert_eq!(cart.read(0xA000), 0xFF, "RAM starts disabled");

    cart.write(0x0000, 0x0A);
    cart.write(0xA000, 0x12);
    assert_eq!(cart.read(0xA000), 0x12);

    cart.write(0x0000, 0x00);
    assert_eq!(cart.read(0xA000), 0xFF, "disabling RAM hides the contents");

    cart.write(0x0000, 0x0A);
    assert_eq!(cart.read(0xA000), 0x12, "contents survive a disable");
}
