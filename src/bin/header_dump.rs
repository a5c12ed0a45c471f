//! Prints the parsed cartridge header of each ROM given on the command line.

use std::path::Path;
use std::process::ExitCode;

use kpasim::cart::CartHeader;

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: header_dump <rom> [<rom> ...]");
        return ExitCode::FAILURE;
    }
    let mut failures = 0;
    for file_arg in &args[1..] {
        if let Err(()) = dump_one(Path::new(file_arg)) {
            failures += 1;
        }
    }
    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn dump_one(path: &Path) -> Result<(), ()> {
    println!("== {}", path.display());
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("couldn't read `{}`: {e}", path.display());
            return Err(());
        }
    };
    let header = match CartHeader::parse(&bytes) {
        Ok(header) => header,
        Err(e) => {
            eprintln!("couldn't parse `{}`: {e}", path.display());
            return Err(());
        }
    };

    println!("title:             {:?}", header.title);
    println!("cgb_flag:          {:?}", header.cgb_flag);
    println!("sgb_flag:          {}", header.sgb_flag);
    println!("cart_type:         {:?}", header.cart_type);
    println!("rom_size:          {} KiB", header.rom_size() / 1024);
    println!("ram_size:          {} KiB", header.ram_size() / 1024);
    println!("destination:       {:?}", header.destination);
    println!("old_licensee_code: ${:02X}", header.old_licensee_code);
    println!("mask_rom_version:  {}", header.mask_rom_version);
    println!("header_checksum:   ${:02X}", header.header_checksum);
    println!("global_checksum:   ${:04X}", header.global_checksum);
    if bytes.len() != header.rom_size() {
        println!("note: file is {} bytes but the header declares {}", bytes.len(), header.rom_size());
    }
    Ok(())
}
