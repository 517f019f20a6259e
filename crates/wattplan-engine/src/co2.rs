// SPDX-License-Identifier: PMPL-1.0-or-later

//! Carbon range for a quantity of consumed energy

use wattplan_metrics::{Carbon, Energy};

/// French grid average, RTE 2024 (gCO2e/kWh)
pub const GRID_G_PER_KWH_MIN: f64 = 21.7;

/// Lifecycle-inclusive estimate, ADEME (gCO2e/kWh)
pub const GRID_G_PER_KWH_MAX: f64 = 60.0;

/// Bracket the emissions for `energy`
///
/// The grid mix at the time of use is unknown here, so a low/high pair
/// is reported instead of a single point.
pub fn emission_range(energy: Energy) -> (Carbon, Carbon) {
    let kwh = energy.as_kilowatt_hours();
    (
        Carbon::grams_co2e(kwh * GRID_G_PER_KWH_MIN),
        Carbon::grams_co2e(kwh * GRID_G_PER_KWH_MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_range() {
        // 5 Wh = 0.005 kWh: 0.1085 g at the grid average, 0.3 g lifecycle
        let (low, high) = emission_range(Energy::watt_hours(5.0));
        assert!((low.0 - 0.1085).abs() < 1e-9);
        assert!((high.0 - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_range_ordering() {
        let (low, high) = emission_range(Energy::watt_hours(123.4));
        assert!(low.0 <= high.0);

        let (low, high) = emission_range(Energy::ZERO);
        assert_eq!(low.0, 0.0);
        assert_eq!(high.0, 0.0);
    }
}
