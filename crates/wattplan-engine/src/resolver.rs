// SPDX-License-Identifier: PMPL-1.0-or-later
//! Tiered fallback resolution against the scenario table

use crate::keys::KeyParts;
use tracing::debug;
use wattplan_store::{MeasurementStore, ScenarioRecord};

/// Fallback devices tried for streaming scenarios, after the exact device
const STREAMING_DEVICE_TIERS: [&str; 2] = ["x", "12mini"];

/// Fallback device for every other scenario
const DEFAULT_DEVICE_TIER: &str = "6pro";

/// The request network first, then its synonym when one exists
///
/// The campaign labeled the same radio technology `4g` in some runs and
/// `lte` in others.
pub fn network_variants(network: &str) -> Vec<String> {
    let mut variants = vec![network.to_string()];
    match network {
        "4g" => variants.push("lte".to_string()),
        "lte" => variants.push("4g".to_string()),
        _ => {}
    }
    variants
}

/// Devices to try, most specific first
pub fn device_tiers(device: &str, streaming: bool) -> Vec<&str> {
    let mut tiers = vec![device];
    if streaming {
        tiers.extend(STREAMING_DEVICE_TIERS);
    } else {
        tiers.push(DEFAULT_DEVICE_TIER);
    }
    tiers
}

/// Candidate keys in fallback order: tier-major, network-variant-minor
///
/// Streaming keys carry the quality fragment
/// (`device_network_activity_quality_condition`); all others omit it.
/// Keys are built lazily, so a hit on the first candidate costs one
/// allocation rather than the whole grid.
pub fn candidate_keys<'a>(
    parts: &'a KeyParts,
    quality: Option<&'a str>,
) -> impl Iterator<Item = String> + 'a {
    let networks = network_variants(&parts.network);

    device_tiers(&parts.device, quality.is_some())
        .into_iter()
        .flat_map(move |device| {
            networks.clone().into_iter().map(move |network| {
                compose_key(device, &network, &parts.activity, quality, parts.condition)
            })
        })
}

fn compose_key(
    device: &str,
    network: &str,
    activity: &str,
    quality: Option<&str>,
    condition: &str,
) -> String {
    match quality {
        Some(quality) => format!(
            "{}_{}_{}_{}_{}",
            device, network, activity, quality, condition
        ),
        None => format!("{}_{}_{}_{}", device, network, activity, condition),
    }
}

/// A scenario hit plus the candidate key that found it
#[derive(Debug)]
pub struct Resolution<'a> {
    pub record: &'a ScenarioRecord,
    pub key: String,
}

/// Walk the fallback chain and return the first table hit
///
/// Exhausting every candidate is not an error; `None` means the caller
/// should emit a flagged zero-consumption entry.
pub fn resolve_scenario<'a>(
    store: &'a MeasurementStore,
    parts: &KeyParts,
    quality: Option<&str>,
) -> Option<Resolution<'a>> {
    for key in candidate_keys(parts, quality) {
        if let Some(record) = store.find_scenario(&key) {
            return Some(Resolution { record, key });
        }
    }

    debug!(
        "No scenario for device={} network={} activity={} condition={}",
        parts.device, parts.network, parts.activity, parts.condition
    );
    None
}
