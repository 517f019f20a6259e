// SPDX-License-Identifier: PMPL-1.0-or-later
//! Immutable lookup surface over the loaded tables

use crate::records::{DeviceSpec, ScenarioRecord};
use std::collections::HashMap;

/// All measurement tables, built once and then only read
///
/// Scenario keys keep their original casing; lookups compare
/// case-insensitively and return the first matching row, so precedence
/// follows load order. Device names are trimmed and lowercased when the
/// store is built.
#[derive(Debug, Clone)]
pub struct MeasurementStore {
    scenarios: Vec<ScenarioRecord>,
    devices: HashMap<String, DeviceSpec>,
}

impl MeasurementStore {
    pub fn new(scenarios: Vec<ScenarioRecord>, devices: Vec<DeviceSpec>) -> Self {
        let devices = devices
            .into_iter()
            .map(|mut spec| {
                spec.name = spec.name.trim().to_lowercase();
                (spec.name.clone(), spec)
            })
            .collect();

        MeasurementStore { scenarios, devices }
    }

    /// First scenario whose key equals `key`, ignoring ASCII case
    pub fn find_scenario(&self, key: &str) -> Option<&ScenarioRecord> {
        self.scenarios
            .iter()
            .find(|record| record.key.eq_ignore_ascii_case(key))
    }

    /// Specification for a device model, if the campaign measured one
    pub fn device_spec(&self, name: &str) -> Option<&DeviceSpec> {
        self.devices.get(&name.trim().to_lowercase())
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Scenario keys in table order
    pub fn scenario_keys(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|record| record.key.as_str())
    }

    /// Device specifications, in no particular order
    pub fn devices(&self) -> impl Iterator<Item = &DeviceSpec> {
        self.devices.values()
    }
}
