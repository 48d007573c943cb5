//! Floating-point multiplier CLI.
//!
//! This binary loads the multiplier overlay, performs one multiplication on
//! the hardware, and prints the decoded product to stdout. It performs:
//! 1. **Argument parsing:** Two operands, the bitstream path, and verbosity.
//! 2. **Logging setup:** Per-step traces to stderr; `-v` adds the binary
//!    representations of operands and product.
//! 3. **One handshake:** Overlay load, `multiply`, print, exit.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use fpm_core::config::Config;
use fpm_core::driver::Multiplier;
use fpm_core::overlay::Overlay;

#[derive(Parser, Debug)]
#[command(
    name = "fpm",
    version,
    about = "Multiply a pair of floating point numbers on the fpm overlay"
)]
struct Cli {
    /// Multiplicand.
    a: f32,

    /// Multiplier.
    b: f32,

    /// Path of the bitstream file (its `.tcl` block design must sit beside it).
    #[arg(long, default_value = "system.bit")]
    bitstream: PathBuf,

    /// Increase output verbosity (per-step binary traces).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Quiet by default; -v turns on the per-step traces including binary
    // representations. RUST_LOG still wins when set.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::default();
    config.overlay.bitstream = cli.bitstream;

    let overlay = match Overlay::load(&config.overlay) {
        Ok(overlay) => overlay,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut driver = Multiplier::new(overlay.into_registers(), config.handshake.poll);
    match driver.multiply(cli.a, cli.b) {
        Ok(product) => println!("{product}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
