pub mod error;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::pointer::PointerPosition;
pub use render::{Format, Replay, format_notifications, format_surface, replay, write_output};

#[derive(Parser)]
#[command(name = "landing")]
#[command(author, version, about = "Render the landing page for simulated pointer moves", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page after replaying pointer moves
    Render {
        /// Pointer move as 'x,y' (repeatable, applied in order)
        #[arg(long = "move", value_name = "X,Y", allow_hyphen_values = true)]
        moves: Vec<PointerPosition>,
        /// Output format (html or json)
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print one JSON line per tracker update
    Replay {
        /// Pointer move as 'x,y' (repeatable, applied in order)
        #[arg(long = "move", value_name = "X,Y", allow_hyphen_values = true)]
        moves: Vec<PointerPosition>,
    },
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "landing=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn run() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            moves,
            format,
            out,
        } => {
            let result = replay(&moves);
            if result.leaked_listeners > 0 {
                warn!(count = result.leaked_listeners, "pointer listeners leaked");
            }
            let contents = format_surface(&result.surface, format)?;
            write_output(&contents, out.as_deref())?;
        }
        Commands::Replay { moves } => {
            let result = replay(&moves);
            write_output(&format_notifications(&result.notifications)?, None)?;
        }
    }

    Ok(())
}
