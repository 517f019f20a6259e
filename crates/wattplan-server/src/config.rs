// SPDX-License-Identifier: PMPL-1.0-or-later
//! Server configuration

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use tracing::debug;
use wattplan_store::TablePaths;

/// Runtime settings for the calculation service
///
/// Defaults reproduce the measurement campaign's deployment: port 5000,
/// the three scenario exports and the device table under `data/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the measurement CSV exports
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Scenario tables, in lookup-precedence order
    #[serde(default = "default_scenario_files")]
    pub scenario_files: Vec<String>,

    /// Device battery/screen table
    #[serde(default = "default_device_file")]
    pub device_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: default_data_dir(),
            scenario_files: default_scenario_files(),
            device_file: default_device_file(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    5000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_scenario_files() -> Vec<String> {
    vec![
        "scenario_summary_df.csv".to_string(),
        "video_streaming_scenario_summary_df.csv".to_string(),
        "visio_scenario_summary_df.csv".to_string(),
    ]
}

fn default_device_file() -> String {
    "batteries_ue.csv".to_string()
}

impl ServerConfig {
    /// Table locations under the configured data directory
    pub fn table_paths(&self) -> TablePaths {
        TablePaths {
            scenarios: self
                .scenario_files
                .iter()
                .map(|file| self.data_dir.join(file))
                .collect(),
            devices: self.data_dir.join(&self.device_file),
        }
    }
}

/// Load configuration from a TOML file, falling back to defaults when
/// the file does not exist
pub fn load_config(path: &Path) -> anyhow::Result<ServerConfig> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(ServerConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: ServerConfig = toml::from_str(&content)?;

    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Default config path next to the binary's working directory
pub fn default_config_path() -> PathBuf {
    PathBuf::from("wattplan.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.scenario_files.len(), 3);
        assert_eq!(config.device_file, "batteries_ue.csv");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ServerConfig = toml::from_str("port = 8080").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.device_file, "batteries_ue.csv");
    }

    #[test]
    fn test_table_paths_join_data_dir() {
        let config = ServerConfig {
            data_dir: PathBuf::from("/srv/tables"),
            ..ServerConfig::default()
        };

        let paths = config.table_paths();
        assert_eq!(paths.scenarios.len(), 3);
        assert_eq!(
            paths.scenarios[0],
            PathBuf::from("/srv/tables/scenario_summary_df.csv")
        );
        assert_eq!(paths.devices, PathBuf::from("/srv/tables/batteries_ue.csv"));
    }
}
