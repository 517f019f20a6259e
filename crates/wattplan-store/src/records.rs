// SPDX-License-Identifier: PMPL-1.0-or-later
//! Typed rows of the measurement CSV exports

use serde::{Deserialize, Serialize};

/// One measured usage scenario and its per-minute energy rates
///
/// The `scenario_id` column joins device, network, activity, optional
/// quality tier and mobility condition with underscores, e.g.
/// `iphone12_wifi_netflix_eco_stat`. Rates are joules per minute as
/// integrated from the power traces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Scenario key, kept in its original casing
    #[serde(rename = "scenario_id")]
    pub key: String,

    /// Battery drain rate (J/min)
    #[serde(rename = "E_BAT_Jm")]
    pub battery_rate: f64,

    /// Radio front-end drain rate (J/min)
    #[serde(rename = "E_RF_Jm")]
    pub radio_rate: f64,

    /// Baseband drain rate (J/min)
    #[serde(rename = "E_BB_Jm")]
    pub baseband_rate: f64,

    /// Power-amplifier drain rate (J/min)
    #[serde(rename = "E_PA_Jm")]
    pub amplifier_rate: f64,
}

/// Battery capacity and screen diagonal for one device model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSpec {
    /// Device name as it appears in scenario keys
    #[serde(rename = "value")]
    pub name: String,

    /// Battery capacity in watt-hours
    #[serde(rename = "batterie_Wh")]
    pub battery_wh: f64,

    /// Screen diagonal in inches
    #[serde(rename = "taille_ecran (inch)")]
    pub screen_in: f64,
}
