//! The `breakgen` CLI: converts Unicode break-property tables into packed
//! generated Rust sources.

use breakgen::{Breakgen, handler, utils};
use clap::Parser;
use yansi::Paint;

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:?}", "Error:".red());
        std::process::exit(1);
    }
}

fn run() -> eyre::Result<()> {
    handler::install();
    let args = Breakgen::parse();
    utils::subscriber(args.verbose, args.quiet);
    args.run()
}
