use std::fmt::{self, Debug, Display, Formatter, Write};

use bitfrob::{u8_get_bit, u8_with_bit};

/// The flags register, `F`.
///
/// Bits 7 through 4 are Zero, Negative, Half-carry and Carry. On hardware the
/// low nibble is wired to zero; here it holds whatever was last written, and
/// `pop af` is where the masking happens.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct RegFlags(u8);

impl RegFlags {
    #[inline]
    #[must_use]
    pub const fn z(self) -> bool {
        u8_get_bit(7, self.0)
    }

    #[inline]
    pub const fn set_z(&mut self, val: bool) {
        self.0 = u8_with_bit(7, self.0, val);
    }

    #[inline]
    #[must_use]
    pub const fn n(self) -> bool {
        u8_get_bit(6, self.0)
    }

    #[inline]
    pub const fn set_n(&mut self, val: bool) {
        self.0 = u8_with_bit(6, self.0, val);
    }

    #[inline]
    #[must_use]
    pub const fn h(self) -> bool {
        u8_get_bit(5, self.0)
    }

    #[inline]
    pub const fn set_h(&mut self, val: bool) {
        self.0 = u8_with_bit(5, self.0, val);
    }

    #[inline]
    #[must_use]
    pub const fn c(self) -> bool {
        u8_get_bit(4, self.0)
    }

    #[inline]
    pub const fn set_c(&mut self, val: bool) {
        self.0 = u8_with_bit(4, self.0, val);
    }

    /// The whole byte, low nibble included.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Replaces the whole byte. `pop af` passes the value through
    /// [`RegFlags::set_bits_masked`] instead.
    #[inline]
    pub const fn set_bits(&mut self, bits: u8) {
        self.0 = bits;
    }

    /// Replaces the byte with the low nibble forced to zero.
    #[inline]
    pub const fn set_bits_masked(&mut self, bits: u8) {
        self.0 = bits & 0xF0;
    }
}

impl Debug for RegFlags {
    /// `ZNHC`, with `_` in place of any clear flag.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (set, ch) in [(self.z(), 'Z'), (self.n(), 'N'), (self.h(), 'H'), (self.c(), 'C')] {
            f.write_char(if set { ch } else { '_' })?;
        }
        Ok(())
    }
}

impl Display for RegFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}
