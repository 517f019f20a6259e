// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for the simulation engine

use thiserror::Error;

/// Contract violations detected before any table work happens
///
/// Unmatched scenarios are not errors; they surface as flagged entries
/// in the report instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidRequest {
    #[error("activity list is empty")]
    NoActivities,

    #[error("activity '{0}' has non-positive duration {1}")]
    NonPositiveDuration(String, f64),
}

pub type Result<T> = std::result::Result<T, InvalidRequest>;
