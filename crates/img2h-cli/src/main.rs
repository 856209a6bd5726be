//! img2h - write an image as a C byte-table header
//!
//! # Usage
//!
//! ```bash
//! # Array name derived from the output file stem ("marker")
//! img2h marker.png include/marker.h
//!
//! # Explicit array name
//! img2h marker.png include/marker.h marker_rgba
//!
//! # Show decoder details
//! img2h -v marker.png include/marker.h
//! ```
//!
//! The generated file holds a single declaration:
//!
//! ```c
//! const unsigned char marker[] = {
//!   255, 255, 255, 255,
//!   ...
//! };
//! ```
//!
//! Rows are written bottom-up so the table can initialize image data whose
//! origin is the lower-left corner.

mod convert;

use anyhow::Result;
use clap::Parser;

use crate::convert::ConvertArgs;

/// img2h - write an image as a C byte-table header
#[derive(Parser)]
#[command(name = "img2h")]
#[command(about = "Create a .h file with the pixel data of an image")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let written = convert::execute(cli.convert)?;
    println!("Wrote {}", written.display());
    Ok(())
}
