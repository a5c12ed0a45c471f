//! A machine-cycle-stepped simulator of the Game Boy's LR35902 CPU.
//!
//! The simulator models the CPU the way the hardware behaves: time is granted
//! one T-cycle at a time via [`Cpu::t_cycle`](cpu::Cpu::t_cycle), and the CPU
//! acts once every four T-cycles (one M-cycle). Each opcode expands into a
//! short queue of [`CpuAction`](ops::CpuAction) values, one per M-cycle, so an
//! instruction's length in actions *is* its duration in M-cycles.
//!
//! # Memory
//! The CPU talks to the outside world through the [`DataBus`](bus::DataBus)
//! trait. [`SystemBus`](bus::SystemBus) provides a minimal DMG memory map
//! (cartridge, WRAM, HRAM, `IE`/`IF`); the [`cart`] module parses cartridge
//! headers and implements the ROM-only and MBC1 mappers.
//!
//! # Accuracy
//! Cycle counts are correct at M-cycle granularity, including the shorter
//! not-taken timings of conditional jumps, calls and returns, and the 5
//! M-cycle interrupt dispatch. Sub-M-cycle bus timing is out of scope, as are
//! the PPU, APU, timers and serial port - unmapped addresses read as open bus.
//!
//! * See also: [Pan Docs](https://gbdev.io/pandocs/)

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod bus;
pub mod cart;
pub mod cpu;
pub mod ops;
pub mod reg;
