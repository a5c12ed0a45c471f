//! Loads a ROM and free-runs the CPU, printing its state after every action.
//!
//! Set `RUST_LOG=trace` to also see each opcode as it's queued. An optional
//! second argument caps how many M-cycles to run before exiting, which is
//! handy for piping the output anywhere.

use std::process::ExitCode;

use kpasim::bus::SystemBus;
use kpasim::cart::new_cart;
use kpasim::cpu::Cpu;

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: run_rom <rom> [<m-cycle limit>]");
        return ExitCode::FAILURE;
    };
    let limit: Option<u64> = match args.get(2).map(|s| s.parse()) {
        None => None,
        Some(Ok(n)) => Some(n),
        Some(Err(e)) => {
            eprintln!("bad m-cycle limit: {e}");
            return ExitCode::FAILURE;
        }
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("couldn't read `{path}`: {e}");
            return ExitCode::FAILURE;
        }
    };
    let cart = match new_cart(bytes) {
        Ok(cart) => cart,
        Err(e) => {
            eprintln!("couldn't load `{path}`: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut bus = SystemBus::new(cart);

    let mut cpu = Cpu::new();
    println!(">> {cpu:?}");

    let mut m_cycles: u64 = 0;
    loop {
        if cpu.t_cycle(&mut bus) {
            println!(">> {cpu:?}");
        }
        if cpu.t_cycles % 4 == 0 {
            m_cycles += 1;
            if cpu.hung {
                eprintln!("cpu hung after {m_cycles} m-cycles");
                return ExitCode::FAILURE;
            }
            if limit.is_some_and(|limit| m_cycles >= limit) {
                return ExitCode::SUCCESS;
            }
        }
    }
}
