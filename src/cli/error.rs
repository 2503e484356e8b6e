use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to write output to {}", path.display())]
    #[diagnostic(
        code(landing::cli::write_failed),
        help("Check that the parent directory exists and is writable.")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to stdout")]
    #[diagnostic(code(landing::cli::stdout))]
    Stdout {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode JSON: {0}")]
    #[diagnostic(code(landing::cli::json))]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
