// SPDX-License-Identifier: PMPL-1.0-or-later

//! # Wattplan Metrics
//!
//! Measurement types shared across the wattplan crates.
//! Energy is carried in watt-hours end to end; the measured tables store
//! joule-per-minute rates, so the joule conversion lives here too.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Energy in watt-hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Energy(pub f64);

impl Energy {
    pub const ZERO: Self = Energy(0.0);

    pub fn watt_hours(wh: f64) -> Self {
        Energy(wh)
    }

    /// 1 Wh = 3600 J
    pub fn from_joules(j: f64) -> Self {
        Energy(j / 3600.0)
    }

    pub fn as_kilowatt_hours(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl Add for Energy {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Energy(self.0 + rhs.0)
    }
}

impl Mul<f64> for Energy {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Energy(self.0 * rhs)
    }
}

/// Carbon emissions in grams of CO2 equivalent
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Carbon(pub f64);

impl Carbon {
    pub const ZERO: Self = Carbon(0.0);

    pub fn grams_co2e(g: f64) -> Self {
        Carbon(g)
    }
}

impl Add for Carbon {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Carbon(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_arithmetic() {
        let e1 = Energy::watt_hours(10.0);
        let e2 = Energy::watt_hours(5.0);
        assert_eq!(e1 + e2, Energy::watt_hours(15.0));
        assert_eq!(e1 * 2.0, Energy::watt_hours(20.0));
    }

    #[test]
    fn test_joule_conversion() {
        // 900 J/min over 10 minutes = 9000 J = 2.5 Wh
        assert_eq!(Energy::from_joules(900.0 * 10.0), Energy::watt_hours(2.5));
    }

    #[test]
    fn test_kilowatt_hours() {
        assert_eq!(Energy::watt_hours(2.5).as_kilowatt_hours(), 0.0025);
    }

    #[test]
    fn test_carbon_arithmetic() {
        let c1 = Carbon::grams_co2e(1.5);
        let c2 = Carbon::grams_co2e(0.5);
        assert_eq!(c1 + c2, Carbon::grams_co2e(2.0));
    }
}
