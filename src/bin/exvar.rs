//! Companion tool: lists the variable names defined in a key-value file.
//! Unrelated to the codec beyond sharing the default `.env` location.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use envcodec::config::DEFAULT_PLAINTEXT;
use envcodec::extract::{extract_vars_from_file, ExtractError};

fn main() -> ExitCode {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PLAINTEXT));

    let vars = match extract_vars_from_file(&path) {
        Ok(vars) => vars,
        Err(err @ ExtractError::Missing(_)) => {
            // A missing file is reported but still yields an empty list.
            eprintln!("Error: {err}");
            Vec::new()
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if vars.is_empty() {
        println!("No variables found.");
    } else {
        println!("Variables defined in {}:", path.display());
        for var in vars {
            println!("{var}");
        }
    }
    ExitCode::SUCCESS
}
