//! Cartridges: header parsing and the memory bank controllers.
//!
//! [`CartHeader`] is the typed view of the header block at `$0100..=$014F`.
//! [`RomOnly`] and [`Mbc1`] implement [`DataBus`](crate::bus::DataBus) for
//! the two mapper types this crate knows, and [`new_cart`] picks the right
//! one from the header.
//!
//! * See also: [Pan Docs: The Cartridge Header](https://gbdev.io/pandocs/The_Cartridge_Header.html)

mod error;
mod header;
mod mbc;

mod tests;

pub use error::*;
pub use header::*;
pub use mbc::*;
