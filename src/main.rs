//! `lths`: Linear Time Hamming Search
//!
//! ```bash
//! lths -A ACGT -p ACGT -k 1 -t ACCTACGA
//! RUST_LOG=debug lths -p GATTACA -k 2 -f genome.txt --count
//! ```

use alice_hamming::cli::{self, Args};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdout = std::io::stdout();
    cli::run(&args, stdout.lock())
}
