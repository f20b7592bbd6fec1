use std::{
    env,
    path::{Path, PathBuf},
};

const CONFIG_FILE: &str = ".lab-report.toml";

/// Load config file content
///
/// Searches, in order:
/// 1. The explicitly given path (e.g. `--config`)
/// 2. `.lab-report.toml` in the current working directory
/// 3. `config.toml` in the platform config directory
/// 4. `.lab-report.toml` in the home directory
///
/// Returns the file content if found, None otherwise. An explicit path that
/// cannot be read is logged and the search continues with the defaults.
pub fn load_config_file(explicit: Option<&Path>) -> Option<String> {
    if let Some(path) = explicit {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                return Some(content);
            }
            Err(e) => log::warn!("Cannot read config {}: {}", path.display(), e),
        }
    }

    candidate_paths()
        .into_iter()
        .find_map(|path| match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                Some(content)
            }
            Err(_) => None,
        })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Ok(path) = crate::app_config_path() {
        paths.push(path);
    }
    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "lab_name = \"LAB12\"").unwrap();

        let content = load_config_file(Some(&path)).unwrap();
        assert!(content.contains("LAB12"));
    }
}
