//! Devsnap CLI - Command-line interface for the device capability snapshot
//! service.
//!
//! This binary routes a named operation to the snapshot core and prints the
//! resulting snapshot as JSON. It is transport only: every decision lives in
//! `devsnap-core`, and because the core is total, the commands cannot fail
//! on degraded hardware - they print sentinels instead.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `device` | Device identity and display metrics |
//! | `battery` | Battery level and charging state |
//! | `network` | Connectivity class and carrier name |
//! | `all` | All three snapshots |

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;

use devsnap_core::prelude::*;

/// Devsnap CLI - Query device capability snapshots
#[derive(Parser)]
#[command(name = "devsnap")]
#[command(about = "Query device capability snapshots", long_about = None)]
struct Cli {
    /// Emit compact JSON instead of pretty-printed
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show device identity and display metrics
    Device,
    /// Show battery level and charging state
    Battery,
    /// Show network connectivity and carrier
    Network,
    /// Show all three snapshots
    All,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let service = SnapshotService::new();

    match cli.command {
        Commands::Device => print_snapshot("Device", &service.device_info(), cli.compact)?,
        Commands::Battery => print_snapshot("Battery", &service.battery_info(), cli.compact)?,
        Commands::Network => print_snapshot("Network", &service.network_info(), cli.compact)?,
        Commands::All => {
            print_snapshot("Device", &service.device_info(), cli.compact)?;
            print_snapshot("Battery", &service.battery_info(), cli.compact)?;
            print_snapshot("Network", &service.network_info(), cli.compact)?;
        }
    }

    Ok(())
}

/// Print one snapshot under a colored heading.
fn print_snapshot<T: Serialize>(title: &str, snapshot: &T, compact: bool) -> Result<()> {
    println!("{}", title.cyan().bold());

    let json = encode(snapshot, compact)
        .with_context(|| format!("failed to encode {title} snapshot"))?;

    println!("{json}");
    Ok(())
}

/// Marshal one snapshot for output. A failure here is a transport fault,
/// never a core one - the core always produces a complete snapshot.
fn encode<T: Serialize>(snapshot: &T, compact: bool) -> SnapshotResult<String> {
    let json = if compact {
        serde_json::to_string(snapshot)
    } else {
        serde_json::to_string_pretty(snapshot)
    }?;
    Ok(json)
}
