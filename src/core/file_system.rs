// src/core/file_system.rs
use crate::commands::common::Command;

use serde_json;
use std::fs;
use std::path::Path;
use std::error::Error;

pub struct FileSystem;

impl FileSystem {
    /// A `.json` command file holds serde-tagged commands; anything else is
    /// read line by line.
    pub fn is_json_script(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    pub fn load_script(script_file: &Path) -> Result<Vec<Command>, Box<dyn Error>> {
        let script_content = fs::read_to_string(script_file)?;
        let script: Vec<Command> = serde_json::from_str(&script_content)?;
        Ok(script)
    }

    pub fn is_readable(path: &Path) -> bool {
        fs::File::open(path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_json_script() {
        assert!(FileSystem::is_json_script(Path::new("commands.json")));
        assert!(FileSystem::is_json_script(Path::new("dir/COMMANDS.JSON")));
        assert!(!FileSystem::is_json_script(Path::new("commands.txt")));
        assert!(!FileSystem::is_json_script(Path::new("commands")));
    }

    #[test]
    fn test_load_script() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.json");
        fs::write(
            &path,
            r#"[{"type": "CreateParkingLot", "params": {"capacity": "3"}}, {"type": "Reset"}]"#,
        ).unwrap();

        let script = FileSystem::load_script(&path).unwrap();
        assert_eq!(script, vec![
            Command::CreateParkingLot { capacity: "3".to_string() },
            Command::Reset,
        ]);
    }

    #[test]
    fn test_load_script_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.json");
        fs::write(&path, r#"[{"type": "Fly"}]"#).unwrap();

        assert!(FileSystem::load_script(&path).is_err());
        assert!(FileSystem::load_script(&temp_dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_is_readable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("commands.txt");
        assert!(!FileSystem::is_readable(&path));

        fs::write(&path, "status\n").unwrap();
        assert!(FileSystem::is_readable(&path));
    }
}
