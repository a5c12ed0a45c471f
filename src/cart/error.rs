use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// The ROM image ends before the cartridge header does.
#[derive(Debug)]
pub struct TruncatedRom {
    pub len: usize,
}

impl Display for TruncatedRom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ROM image is {} bytes, too short for a cartridge header!", self.len)
    }
}

impl Error for TruncatedRom {}

/// The header checksum byte doesn't match the header contents.
#[derive(Debug)]
pub struct HeaderChecksumMismatch {
    pub stored: u8,
    pub computed: u8,
}

impl Display for HeaderChecksumMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "header checksum ${:02X} doesn't match computed ${:02X}!",
            self.stored, self.computed
        )
    }
}

impl Error for HeaderChecksumMismatch {}

/// The cart-type byte names a mapper this crate doesn't implement.
#[derive(Debug)]
pub struct UnsupportedMapper {
    pub code: u8,
}

impl Display for UnsupportedMapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "cart type ${:02X} is not a supported mapper!", self.code)
    }
}

impl Error for UnsupportedMapper {}

/// Anything that can go wrong turning a ROM image into a cartridge.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum CartError {
    TruncatedRom(TruncatedRom),
    HeaderChecksumMismatch(HeaderChecksumMismatch),
    UnsupportedMapper(UnsupportedMapper),
}
