// SPDX-License-Identifier: PMPL-1.0-or-later
//! # Wattplan Store
//!
//! Typed access to the measurement campaign tables: per-scenario energy
//! rates and per-device battery/screen specifications. Tables are loaded
//! once from the CSV exports and shared immutably afterwards.

mod loader;
mod records;
mod store;

pub use loader::{load_store, TablePaths};
pub use records::{DeviceSpec, ScenarioRecord};
pub use store::MeasurementStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the measurement tables
///
/// Every variant is fatal: a store is either complete or absent.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot open table {}: {}", .0.display(), .1)]
    Open(PathBuf, std::io::Error),

    #[error("malformed row in {}: {}", .0.display(), .1)]
    Malformed(PathBuf, csv::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
