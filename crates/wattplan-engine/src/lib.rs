// SPDX-License-Identifier: PMPL-1.0-or-later

//! # Wattplan Engine
//!
//! Resolves planned device activities against the measured scenario tables
//! and aggregates the matches into battery and CO2 estimates.
//!
//! Resolution walks a fixed fallback chain: the exact device first, then the
//! campaign's placeholder devices, each tried with the request network and
//! its synonym. A matched scenario contributes energy at its measured rate;
//! an unmatched activity contributes zero and comes back flagged.
//!
//! The engine keeps no state between calls. Everything here is a pure
//! function of the store and the request.

mod co2;
mod error;
mod keys;
mod quality;
mod request;
mod resolver;
mod simulate;

pub use co2::{emission_range, GRID_G_PER_KWH_MAX, GRID_G_PER_KWH_MIN};
pub use error::{InvalidRequest, Result};
pub use keys::KeyParts;
pub use quality::{implied_quality, is_streaming, resolve_quality};
pub use request::{ActivityRequest, Mobility, SimulationRequest};
pub use resolver::{candidate_keys, device_tiers, network_variants, resolve_scenario, Resolution};
pub use simulate::{
    simulate, ResolvedActivity, SimulationReport, REFERENCE_BATTERY_WH, REFERENCE_DEVICE,
    REFERENCE_SCREEN_IN,
};
