// SPDX-License-Identifier: PMPL-1.0-or-later
//! CSV ingestion for the measurement tables

use crate::records::{DeviceSpec, ScenarioRecord};
use crate::store::MeasurementStore;
use crate::{Result, StoreError};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Locations of the CSV exports making up one store
///
/// Scenario tables are concatenated in the order given here, and lookup
/// precedence follows that order.
#[derive(Debug, Clone)]
pub struct TablePaths {
    pub scenarios: Vec<PathBuf>,
    pub devices: PathBuf,
}

impl TablePaths {
    /// The campaign's standard exports under one directory
    pub fn in_dir(dir: &Path) -> Self {
        TablePaths {
            scenarios: vec![
                dir.join("scenario_summary_df.csv"),
                dir.join("video_streaming_scenario_summary_df.csv"),
                dir.join("visio_scenario_summary_df.csv"),
            ],
            devices: dir.join("batteries_ue.csv"),
        }
    }
}

/// Load every table into one immutable store
///
/// Any unreadable file or malformed row is fatal; callers must never
/// serve requests against a partially loaded store.
pub fn load_store(paths: &TablePaths) -> Result<MeasurementStore> {
    let mut scenarios = Vec::new();
    for path in &paths.scenarios {
        let rows = read_scenarios(path)?;
        debug!("Loaded {} scenarios from {}", rows.len(), path.display());
        scenarios.extend(rows);
    }

    let devices = read_devices(&paths.devices)?;
    debug!(
        "Loaded {} device specs from {}",
        devices.len(),
        paths.devices.display()
    );

    info!(
        scenarios = scenarios.len(),
        devices = devices.len(),
        "measurement store ready"
    );

    Ok(MeasurementStore::new(scenarios, devices))
}

fn read_scenarios(path: &Path) -> Result<Vec<ScenarioRecord>> {
    let file = File::open(path).map_err(|e| StoreError::Open(path.to_path_buf(), e))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut rows = Vec::new();
    for record in reader.deserialize::<ScenarioRecord>() {
        rows.push(record.map_err(|e| StoreError::Malformed(path.to_path_buf(), e))?);
    }
    Ok(rows)
}

// The device export comes out of French-locale tooling and uses `;`
// separators, unlike the scenario tables.
fn read_devices(path: &Path) -> Result<Vec<DeviceSpec>> {
    let file = File::open(path).map_err(|e| StoreError::Open(path.to_path_buf(), e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b';')
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.deserialize::<DeviceSpec>() {
        rows.push(record.map_err(|e| StoreError::Malformed(path.to_path_buf(), e))?);
    }
    Ok(rows)
}
