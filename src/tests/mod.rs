#![allow(clippy::unwrap_used, clippy::panic)]
extern crate std;

mod field_tests;
mod reference_tests;
mod time_tests;
mod validation_tests;

use crate::{OutputSelection, SpaInput};

/// Golden, Colorado on 2003-10-17, the worked example from the NREL report.
pub(crate) fn nrel_reference_input() -> SpaInput {
    SpaInput {
        year: 2003,
        month: 10,
        day: 17,
        hour: 12,
        minute: 30,
        second: 30.0,
        timezone: -7.0,
        delta_ut1: 0.0,
        delta_t: 67.0,
        longitude: -105.1786,
        latitude: 39.742476,
        elevation: 1830.14,
        pressure: 820.0,
        temperature: 11.0,
        slope: 30.0,
        azm_rotation: -10.0,
        atmos_refract: 0.5667,
        function: OutputSelection::All,
    }
}

pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
