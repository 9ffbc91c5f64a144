//! Earth heliocentric position from the VSOP87-derived periodic tables.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    math::{normalize_degrees_360, polynomial},
    terms::{B_TERMS, L_TERMS, R_TERMS},
};

/// Scaling factor applied to every summed table (10^8).
const EARTH_POSITION_SCALE_FACTOR: f64 = 1.0e8;

/// Earth's heliocentric longitude, latitude and radius vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeliocentricPosition {
    /// Heliocentric longitude L in degrees, [0, 360)
    pub longitude: f64,
    /// Heliocentric latitude B in degrees
    pub latitude: f64,
    /// Earth-Sun distance R in astronomical units
    pub radius: f64,
}

/// Calculates the sum of periodic terms for one group of a table.
///
/// Each term is of the form: A * cos(B + C * JME)
///
/// # Arguments
/// * `terms` - Periodic term coefficients [A, B, C]
/// * `julian_millennium` - Julian ephemeris millennium
pub(crate) fn calculate_earth_periodic_term_sum(terms: &[[f64; 3]], julian_millennium: f64) -> f64 {
    terms.iter().fold(0.0, |accumulator, term| {
        accumulator + term[0] * (term[1] + term[2] * julian_millennium).cos()
    })
}

/// Combines the group sums of one table as a polynomial in JME.
fn calculate_earth_value(groups: &[&[[f64; 3]]], julian_millennium: f64) -> f64 {
    let mut sums = [0.0; 6];
    for (sum, terms) in sums.iter_mut().zip(groups) {
        *sum = calculate_earth_periodic_term_sum(terms, julian_millennium);
    }
    polynomial(&sums[..groups.len()], julian_millennium) / EARTH_POSITION_SCALE_FACTOR
}

/// Calculates Earth's heliocentric longitude.
///
/// # Returns
/// Heliocentric longitude in degrees (0° to 360°)
pub(crate) fn calculate_earth_heliocentric_longitude(julian_millennium: f64) -> f64 {
    normalize_degrees_360(calculate_earth_value(&L_TERMS, julian_millennium).to_degrees())
}

/// Calculates Earth's heliocentric latitude in degrees.
pub(crate) fn calculate_earth_heliocentric_latitude(julian_millennium: f64) -> f64 {
    calculate_earth_value(&B_TERMS, julian_millennium).to_degrees()
}

/// Calculates Earth's radius vector (distance from Sun) in AU.
pub(crate) fn calculate_earth_radius_vector(julian_millennium: f64) -> f64 {
    calculate_earth_value(&R_TERMS, julian_millennium)
}

/// Evaluates L, B and R for the given Julian ephemeris millennium.
pub fn heliocentric_position(julian_millennium: f64) -> HeliocentricPosition {
    HeliocentricPosition {
        longitude: calculate_earth_heliocentric_longitude(julian_millennium),
        latitude: calculate_earth_heliocentric_latitude(julian_millennium),
        radius: calculate_earth_radius_vector(julian_millennium),
    }
}
