// src/bin/parking_lot.rs

use clap::Parser;
use parkinglot::{initialize_environment, run_command_file, run_interactive};
use std::path::PathBuf;

/// Parking lot simulator. Reads commands from FILE, or from stdin when no file is given.
#[derive(Parser, Debug)]
#[command(name = "parking_lot", version, about)]
struct Cli {
    /// Command file: one command per line, or a JSON command script (*.json)
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_environment();

    let cli = Cli::parse();
    match cli.file {
        Some(path) => run_command_file(&path, &mut std::io::stdout()).await,
        None => run_interactive().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_argument() {
        let cli = Cli::try_parse_from(["parking_lot", "commands.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("commands.txt")));
    }

    #[test]
    fn test_parse_without_arguments() {
        let cli = Cli::try_parse_from(["parking_lot"]).unwrap();
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["parking_lot", "a.txt", "b.txt"]).is_err());
    }
}
