use std::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, Octal, Pointer, UpperHex, Write};

/// A 16-bit CPU register cell.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Reg16(u16);

impl Reg16 {
    pub const fn new(u: u16) -> Self {
        Self(u)
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    pub const fn set(&mut self, u: u16) {
        self.0 = u;
    }

    /// Wrapping increment, as the address unit does it.
    pub const fn inc(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Wrapping decrement.
    pub const fn dec(&mut self) {
        self.0 = self.0.wrapping_sub(1);
    }

    /// The high byte.
    #[must_use]
    pub const fn hi(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The low byte.
    #[must_use]
    pub const fn lo(self) -> u8 {
        self.0 as u8
    }

    pub const fn set_hi(&mut self, byte: u8) {
        self.0 = (self.0 & 0x00FF) | ((byte as u16) << 8);
    }

    pub const fn set_lo(&mut self, byte: u8) {
        self.0 = (self.0 & 0xFF00) | (byte as u16);
    }
}

impl Debug for Reg16 {
    /// Prints the value as an unsigned decimal, or signed with alternate formatting.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            <i16 as Debug>::fmt(&(self.0 as i16), f)
        } else {
            <u16 as Debug>::fmt(&self.0, f)
        }
    }
}

impl Display for Reg16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}

impl Binary for Reg16 {
    /// Prints in binary with a `%` prefix, or `0b` with alternate formatting.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            f.write_char('%')?;
        }
        <u16 as Binary>::fmt(&self.0, f)
    }
}

impl Octal for Reg16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <u16 as Octal>::fmt(&self.0, f)
    }
}

impl LowerHex for Reg16 {
    /// Prints in hex with a `$` prefix, or `0x` with alternate formatting.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            f.write_char('$')?;
        }
        <u16 as LowerHex>::fmt(&self.0, f)
    }
}

impl UpperHex for Reg16 {
    /// Prints in hex with a `$` prefix, or `0x` with alternate formatting.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            f.write_char('$')?;
        }
        <u16 as UpperHex>::fmt(&self.0, f)
    }
}

impl Pointer for Reg16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <Self as UpperHex>::fmt(self, f)
    }
}
