// SPDX-License-Identifier: PMPL-1.0-or-later
//! Canonical key fragments

use crate::request::Mobility;

/// Lowercased fragments a lookup key is assembled from
///
/// Scenario keys are all lowercase; normalizing once here keeps the
/// resolver free of casing concerns.
#[derive(Debug, Clone)]
pub struct KeyParts {
    pub device: String,
    pub network: String,
    pub activity: String,
    /// `dyna` when the user is on the move, `stat` otherwise
    pub condition: &'static str,
}

impl KeyParts {
    pub fn new(device: &str, network: &str, activity: &str, mobility: Mobility) -> Self {
        KeyParts {
            device: device.to_lowercase(),
            network: network.to_lowercase(),
            activity: activity.to_lowercase(),
            condition: mobility.condition(),
        }
    }
}
