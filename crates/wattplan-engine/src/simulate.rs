// SPDX-License-Identifier: PMPL-1.0-or-later

//! Request resolution and aggregation

use crate::co2::emission_range;
use crate::keys::KeyParts;
use crate::quality::{is_streaming, resolve_quality};
use crate::request::{ActivityRequest, Mobility, SimulationRequest};
use crate::resolver::resolve_scenario;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wattplan_metrics::{Carbon, Energy};
use wattplan_store::MeasurementStore;

/// Device every estimate is normalized against when specs are missing
pub const REFERENCE_DEVICE: &str = "6pro";

/// Capacity of the reference device (Wh)
pub const REFERENCE_BATTERY_WH: f64 = 19.26;

/// Screen diagonal of the reference device (inches)
pub const REFERENCE_SCREEN_IN: f64 = 6.4;

/// One activity after resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedActivity {
    #[serde(flatten)]
    pub activity: ActivityRequest,

    /// Battery energy drawn over the activity's duration
    pub consumption: Energy,

    /// True when no measured scenario covered this activity
    pub fallback: bool,

    /// Request network, echoed on unmatched entries for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// Request mobility, echoed on unmatched entries for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobility: Option<Mobility>,
}

/// Aggregated estimate for a whole plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Total battery energy over the plan (Wh)
    pub total_energy: Energy,

    /// Radio front-end share of the total (Wh)
    pub total_rf_energy: Energy,

    /// Share of the target device's battery, clamped to [0, 100]
    pub battery_percent: f64,

    /// Emissions at the 2024 French grid average (g)
    pub co2_min: Carbon,

    /// Emissions at the lifecycle-inclusive bound (g)
    pub co2_max: Carbon,

    pub activities: Vec<ResolvedActivity>,
}

/// Resolve every activity in the plan and aggregate the totals
///
/// Unmatched activities are soft failures: they contribute zero energy
/// and come back flagged, so the caller can see which rows the tables
/// did not cover. Only contract violations return an error.
pub fn simulate(store: &MeasurementStore, request: &SimulationRequest) -> Result<SimulationReport> {
    request.validate()?;

    let mut total_energy = Energy::ZERO;
    let mut total_rf_energy = Energy::ZERO;
    let mut activities = Vec::with_capacity(request.activities.len());
    let mut unmatched = 0usize;

    for activity in &request.activities {
        let parts = KeyParts::new(
            &request.device,
            &request.network,
            &activity.name,
            request.mobility,
        );
        let quality = if is_streaming(&parts.activity) {
            Some(resolve_quality(&parts.activity, activity.quality.as_deref()))
        } else {
            None
        };

        match resolve_scenario(store, &parts, quality.as_deref()) {
            Some(resolution) => {
                let consumption =
                    Energy::from_joules(resolution.record.battery_rate * activity.duration);
                let rf = Energy::from_joules(resolution.record.radio_rate * activity.duration);
                total_energy = total_energy + consumption;
                total_rf_energy = total_rf_energy + rf;

                debug!(
                    "Resolved {} for {} min via {} ({:.4} Wh)",
                    activity.name, activity.duration, resolution.key, consumption.0
                );

                activities.push(ResolvedActivity {
                    activity: activity.clone(),
                    consumption,
                    fallback: false,
                    network: None,
                    mobility: None,
                });
            }
            None => {
                unmatched += 1;
                activities.push(ResolvedActivity {
                    activity: activity.clone(),
                    consumption: Energy::ZERO,
                    fallback: true,
                    network: Some(request.network.clone()),
                    mobility: Some(request.mobility),
                });
            }
        }
    }

    if unmatched > 0 {
        warn!(
            unmatched,
            total = request.activities.len(),
            "plan contains activities with no measured scenario"
        );
    }

    let battery_percent = battery_percent(store, &request.device, total_energy);
    let (co2_min, co2_max) = emission_range(total_energy);

    Ok(SimulationReport {
        total_energy,
        total_rf_energy,
        battery_percent,
        co2_min,
        co2_max,
        activities,
    })
}

/// Battery share on the target device, scaled by screen area
///
/// Capacity scales with the square of the screen-diagonal ratio, which
/// transfers a rate measured on the reference hardware to larger and
/// smaller handsets. An unknown target inherits the reference spec, so
/// the ratio collapses to one.
fn battery_percent(store: &MeasurementStore, device: &str, total: Energy) -> f64 {
    let (reference_wh, reference_screen) = match store.device_spec(REFERENCE_DEVICE) {
        Some(spec) => (spec.battery_wh, spec.screen_in),
        None => (REFERENCE_BATTERY_WH, REFERENCE_SCREEN_IN),
    };

    let (target_wh, target_screen) = match store.device_spec(device) {
        Some(spec) => (spec.battery_wh, spec.screen_in),
        None => (reference_wh, reference_screen),
    };

    let screen_ratio = (target_screen / reference_screen).powi(2);
    let adjusted_capacity = target_wh * screen_ratio;
    if adjusted_capacity <= 0.0 {
        return 0.0;
    }

    ((total.0 / adjusted_capacity) * 100.0).clamp(0.0, 100.0)
}
