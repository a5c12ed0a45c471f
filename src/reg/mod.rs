//! Register cells: [`Reg8`], [`Reg16`] and the flags register [`RegFlags`].
//!
//! These are thin newtypes rather than bare integers so that register values
//! print the way Game Boy documentation writes them: `$` for hex, `%` for
//! binary, and `ZNHC` for the flags.

mod flags;
mod reg16;
mod reg8;

mod tests;

pub use flags::*;
pub use reg16::*;
pub use reg8::*;
