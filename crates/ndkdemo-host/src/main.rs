// ndkdemo-host: desktop driver for the NDK demo native library

use anyhow::Result;
use clap::{Parser, Subcommand};

use ndkdemo::{InProcessBridge, NativeBridge};
use ndkdemo_host::{TapArg, init_logging, render_taps};

#[derive(Parser)]
#[command(name = "ndkdemo-host", about = "Desktop driver for the NDK demo native library")]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print helloFromNative()
    Hello,
    /// Print getSystemInfo()
    SystemInfo,
    /// Create the main screen and tap its buttons in order
    Tap {
        /// Buttons to tap
        #[arg(value_enum)]
        taps: Vec<TapArg>,

        /// Print the final screen as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let bridge = InProcessBridge;
    match cli.command {
        Commands::Hello => println!("{}", bridge.hello_from_native()),
        Commands::SystemInfo => println!("{}", bridge.system_info()),
        Commands::Tap { taps, json } => println!("{}", render_taps(bridge, &taps, json)?),
    }

    Ok(())
}
