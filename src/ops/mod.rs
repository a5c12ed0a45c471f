//! Opcode decoding and the per-M-cycle action tables.
//!
//! Two views of the same instruction set live here:
//! - [`Instruction`] is the *structural* decode of an opcode byte, following
//!   the bit-field layout (`x`/`y`/`z`/`p`/`q`) that the hardware's decoder
//!   uses.
//! - [`ACTION_TABLE`] is the *temporal* decode: each opcode's list of
//!   [`CpuAction`] values, one per machine cycle.
//!
//! [`DISASSEMBLY_TABLE`] carries the mnemonic for each opcode so traces stay
//! readable.

mod actions;
mod disassembly;
mod instruction;


pub use actions::*;
pub use disassembly::*;
pub use instruction::*;
