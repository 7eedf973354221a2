//! kosseg binary entry point

use clap::Parser;
use kosseg_cli::SplitArgs;
use std::process;

fn main() {
    let args = SplitArgs::parse();

    if let Err(err) = args.execute() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
