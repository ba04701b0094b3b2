//! Entry point for the secret file codec. Takes no flags: each run makes one
//! decision based on which files are present, prints what it did, and exits
//! non-zero on any error.

use std::env;
use std::process::ExitCode;

use envcodec::config::Paths;
use envcodec::crypto::keyfile::KeyStatus;
use envcodec::runner::{self, Action};

fn main() -> ExitCode {
    // ENVCODEC_CONFIG may point at a JSON file overriding the default names.
    let paths = match env::var("ENVCODEC_CONFIG") {
        Ok(config_path) => match Paths::from_file(&config_path) {
            Ok(paths) => paths,
            Err(err) => {
                eprintln!("config load failed: {err}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => Paths::default(),
    };

    match runner::run(&paths) {
        Ok(outcome) => {
            if outcome.key == KeyStatus::Created {
                println!(
                    "New encryption key generated and saved to {}",
                    paths.key.display()
                );
            }
            match outcome.action {
                Action::Encoded => println!(
                    "{} encoded and saved as {}",
                    paths.plaintext.display(),
                    paths.encoded.display()
                ),
                Action::Decoded => println!(
                    "{} decoded and saved as {}",
                    paths.encoded.display(),
                    paths.plaintext.display()
                ),
                Action::NothingToDo => println!(
                    "Neither {} nor {} found. Please add one to proceed.",
                    paths.plaintext.display(),
                    paths.encoded.display()
                ),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("envcodec failed: {err}");
            ExitCode::FAILURE
        }
    }
}
