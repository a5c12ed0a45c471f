//! The data bus the CPU reads and writes through.

mod bus;


pub use bus::*;
