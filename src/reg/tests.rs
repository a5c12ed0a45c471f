#![cfg(test)]

use super::*;

#[test]
fn test_reg16_byte_halves() {
    let mut r = Reg16::new(0xABCD);
    assert_eq!(r.hi(), 0xAB);
    assert_eq!(r.lo(), 0xCD);

    r.set_hi(0x12);
    assert_eq!(r.get(), 0x12CD);
    r.set_lo(0x34);
    assert_eq!(r.get(), 0x1234);
}

#[test]
fn test_reg16_wrapping() {
    let mut r = Reg16::new(0xFFFF);
    r.inc();
    assert_eq!(r.get(), 0x0000, "inc should wrap at the address space boundary");
    r.dec();
    assert_eq!(r.get(), 0xFFFF, "dec should wrap at the address space boundary");
}

#[test]
fn test_flag_bits() {
    let mut f = RegFlags::default();
    assert!(!f.z() && !f.n() && !f.h() && !f.c());

    f.set_z(true);
    f.set_c(true);
    assert_eq!(f.bits(), 0b1001_0000);
    assert_eq!(format!("{f:?}"), "Z__C");

    f.set_z(false);
    f.set_n(true);
    f.set_h(true);
    assert_eq!(format!("{f:?}"), "_NHC");
}

#[test]
fn test_flag_low_nibble_mask() {
    let mut f = RegFlags::default();
    f.set_bits(0xFF);
    assert_eq!(f.bits(), 0xFF);
    f.set_bits_masked(0xFF);
    assert_eq!(f.bits(), 0xF0, "the masked setter should zero the low nibble");
}

#[test]
fn test_register_formatting() {
    let r = Reg8::new(0x0F);
    assert_eq!(format!("{r:X}"), "$F");
    assert_eq!(format!("{r:#04X}"), "0x0F");
    assert_eq!(format!("{r:b}"), "%1111");
    assert_eq!(format!("{r:?}"), "15");

    let neg = Reg8::new(0xFF);
    assert_eq!(format!("{neg:#?}"), "-1", "alternate Debug should print signed");

    let w = Reg16::new(0xFFFE);
    assert_eq!(format!("{w:04X}"), "$FFFE");
}
