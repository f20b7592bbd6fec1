//! Application configuration
//!
//! Configuration loaded from `.lab-report.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How status icons are drawn in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    /// Unicode symbols (needs a font with decent symbol coverage)
    #[default]
    Unicode,
    /// Plain ASCII fallbacks
    Ascii,
}

/// Application configuration loaded from `.lab-report.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Name of the lab, used in titles and the footer
    #[serde(default = "default_lab_name")]
    pub lab_name: String,

    /// Directory the exported PDF is written to
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// File name of the exported PDF
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Icon set for status markers
    #[serde(default)]
    pub icon_style: IconStyle,
}

fn default_lab_name() -> String {
    "LAB46".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_export_file_name() -> String {
    "informe-lab46.pdf".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lab_name: default_lab_name(),
            export_dir: default_export_dir(),
            export_file_name: default_export_file_name(),
            icon_style: IconStyle::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the explicit path, CWD, config dir or home directory,
    /// or use defaults
    pub fn load(explicit: Option<&Path>) -> Self {
        if let Some(content) = crate::load_config_file(explicit) {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Full path of the exported report
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(&self.export_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.lab_name, "LAB46");
        assert_eq!(config.export_file_name, "informe-lab46.pdf");
        assert_eq!(config.icon_style, IconStyle::Unicode);
        assert_eq!(config.export_path(), PathBuf::from("./informe-lab46.pdf"));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            export_dir = "/tmp/reports"
            icon_style = "ascii"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.icon_style, IconStyle::Ascii);
        // Other fields should use defaults
        assert_eq!(config.lab_name, "LAB46");
        assert_eq!(
            config.export_path(),
            PathBuf::from("/tmp/reports/informe-lab46.pdf")
        );
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "icon_style = 42").unwrap();

        let config = AppConfig::load(Some(&path));
        assert_eq!(config.icon_style, IconStyle::Unicode);
    }
}
