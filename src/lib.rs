use crate::app_config::AppConfig;
use crate::core::file_system::FileSystem;
use crate::core::parking_service::ParkingService;
use crate::session::Session;
use std::io::Write;
use std::path::Path;
use dotenvy::dotenv;
use log::{debug, error, info};
use tokio::io::BufReader;

pub mod core;
pub mod commands;
pub mod app_config;
pub mod session;

pub fn initialize_environment() {
    pretty_env_logger::init();
    if let Err(e) = dotenv() {
        debug!("No .env file loaded: {}", e);
    }
}

pub fn initialize_session() -> Result<Session<ParkingService>, Box<dyn std::error::Error>> {
    let config = AppConfig::new()?;
    Session::new(ParkingService::new(), config)
}

/// Executes every command in `path` against a fresh parking lot service,
/// writing one result per command to `output`.
pub async fn run_command_file<W: Write>(path: &Path, output: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let path = std::path::absolute(path)?;

    if !FileSystem::is_readable(&path) {
        writeln!(output, "File path: {} must be readable by the current user & process", path.display())?;
        return Ok(());
    }

    let mut session = initialize_session()?;
    info!("Running commands from {}", path.display());

    if FileSystem::is_json_script(&path) {
        match FileSystem::load_script(&path) {
            Ok(script) => session.run_commands(&script, output)?,
            Err(e) => {
                error!("Failed to load script {}: {}", path.display(), e);
                writeln!(output, "Failed to load command script {}: {}", path.display(), e)?;
            }
        }
        return Ok(());
    }

    let file = tokio::fs::File::open(&path).await?;
    session.run_lines(BufReader::new(file), output).await
}

pub async fn run_interactive() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = initialize_session()?;
    let mut stdout = std::io::stdout();
    session.run_interactive(BufReader::new(tokio::io::stdin()), &mut stdout).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn run_file(path: &Path) -> String {
        let mut output = Vec::new();
        run_command_file(path, &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_run_command_file_with_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        assert_eq!(
            run_file(&path).await,
            format!("File path: {} must be readable by the current user & process\n", path.display())
        );
    }

    #[tokio::test]
    async fn test_run_command_file_with_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("commands.txt");
        std::fs::write(&path, "create_parking_lot 2\npark KA-01 White\nstatus\n").unwrap();

        assert_eq!(
            run_file(&path).await,
            "Created a parking lot with 2 slots\n\
             Allocated slot number: 1\n\
             Slot No.    Registration No    Colour\n\
             1           KA-01      White\n"
        );
    }

    #[tokio::test]
    async fn test_run_command_file_with_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("commands.json");
        std::fs::write(
            &path,
            r#"[{"type": "CreateParkingLot", "params": {"capacity": "2"}}, {"type": "Leave", "params": {"slot": "3"}}]"#,
        ).unwrap();

        assert_eq!(run_file(&path).await, "Created a parking lot with 2 slots\nNot found\n");
    }

    #[tokio::test]
    async fn test_run_command_file_with_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let output = run_file(&path).await;
        assert!(output.starts_with(&format!("Failed to load command script {}: ", path.display())));
        assert_eq!(output.lines().count(), 1);
    }
}
