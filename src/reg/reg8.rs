use std::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, Octal, Pointer, UpperHex, Write};

/// An 8-bit CPU register cell.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Reg8(u8);

impl Reg8 {
    pub const fn new(u: u8) -> Self {
        Self(u)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn set(&mut self, u: u8) {
        self.0 = u;
    }
}

impl Debug for Reg8 {
    /// Prints the value as an unsigned decimal, or signed with alternate formatting.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            <i8 as Debug>::fmt(&(self.0 as i8), f)
        } else {
            <u8 as Debug>::fmt(&self.0, f)
        }
    }
}

impl Display for Reg8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}

impl Binary for Reg8 {
    /// Prints in binary with a `%` prefix, or `0b` with alternate formatting.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            f.write_char('%')?;
        }
        <u8 as Binary>::fmt(&self.0, f)
    }
}

impl Octal for Reg8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <u8 as Octal>::fmt(&self.0, f)
    }
}

impl LowerHex for Reg8 {
    /// Prints in hex with a `$` prefix, or `0x` with alternate formatting.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            f.write_char('$')?;
        }
        <u8 as LowerHex>::fmt(&self.0, f)
    }
}

impl UpperHex for Reg8 {
    /// Prints in hex with a `$` prefix, or `0x` with alternate formatting.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            f.write_char('$')?;
        }
        <u8 as UpperHex>::fmt(&self.0, f)
    }
}

impl Pointer for Reg8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <Self as UpperHex>::fmt(self, f)
    }
}
