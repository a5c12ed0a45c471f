//! The LR35902 CPU core.

mod cpu;

mod tests;

pub use cpu::*;
