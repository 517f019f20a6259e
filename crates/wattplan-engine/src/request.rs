// SPDX-License-Identifier: PMPL-1.0-or-later
//! Wire types for simulation requests

use crate::error::{InvalidRequest, Result};
use serde::{Deserialize, Serialize};

/// Whether the user is stationary or on the move for the whole plan
///
/// A closed enum: anything but the two known states is rejected at the
/// boundary instead of being coerced to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mobility {
    Static,
    Moving,
}

impl Mobility {
    /// Key fragment the measurement campaign used for this state
    pub fn condition(&self) -> &'static str {
        match self {
            Mobility::Static => "stat",
            Mobility::Moving => "dyna",
        }
    }
}

/// One planned activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRequest {
    /// App or activity name, e.g. `netflix`, `tiktok`, `visio`
    pub name: String,

    /// Free-form grouping from the caller, carried through untouched
    #[serde(default)]
    pub category: String,

    /// Planned duration in minutes
    pub duration: f64,

    /// Explicit quality tier; `None` picks the app's measured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

/// A full simulation request: one device/network/mobility context and the
/// activities planned under it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub device: String,
    pub network: String,
    pub mobility: Mobility,
    pub activities: Vec<ActivityRequest>,
}

impl SimulationRequest {
    /// Reject contract violations before resolution starts
    pub fn validate(&self) -> Result<()> {
        if self.activities.is_empty() {
            return Err(InvalidRequest::NoActivities);
        }
        for activity in &self.activities {
            if !activity.duration.is_finite() || activity.duration <= 0.0 {
                return Err(InvalidRequest::NonPositiveDuration(
                    activity.name.clone(),
                    activity.duration,
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, duration: f64) -> ActivityRequest {
        ActivityRequest {
            name: name.to_string(),
            category: String::new(),
            duration,
            quality: None,
        }
    }

    fn request(activities: Vec<ActivityRequest>) -> SimulationRequest {
        SimulationRequest {
            device: "iphone12".to_string(),
            network: "wifi".to_string(),
            mobility: Mobility::Static,
            activities,
        }
    }

    #[test]
    fn test_empty_plan_rejected() {
        assert_eq!(request(vec![]).validate(), Err(InvalidRequest::NoActivities));
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let err = request(vec![activity("netflix", 0.0)]).validate().unwrap_err();
        assert!(matches!(err, InvalidRequest::NonPositiveDuration(_, _)));

        let err = request(vec![activity("netflix", -3.0)]).validate().unwrap_err();
        assert!(matches!(err, InvalidRequest::NonPositiveDuration(_, _)));

        let err = request(vec![activity("netflix", f64::NAN)]).validate().unwrap_err();
        assert!(matches!(err, InvalidRequest::NonPositiveDuration(_, _)));
    }

    #[test]
    fn test_valid_plan_accepted() {
        assert!(request(vec![activity("netflix", 10.0)]).validate().is_ok());
    }

    #[test]
    fn test_mobility_serde_is_closed() {
        let moving: Mobility = serde_json::from_str("\"moving\"").unwrap();
        assert_eq!(moving, Mobility::Moving);
        assert_eq!(moving.condition(), "dyna");

        assert!(serde_json::from_str::<Mobility>("\"driving\"").is_err());
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let json = r#"{
            "device": "iphone12",
            "network": "wifi",
            "mobility": "static",
            "activities": [{"name": "netflix", "duration": 10}]
        }"#;

        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.activities.len(), 1);
        assert_eq!(request.activities[0].category, "");
        assert!(request.activities[0].quality.is_none());
    }
}
