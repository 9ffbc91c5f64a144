#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    earth::{heliocentric_position, HeliocentricPosition},
    math::normalize_degrees_360,
    nutation::{nutation, Nutation},
    time::{JulianDate, J2000_EPOCH_JD},
};

// ============================================================================
// Constants
// ============================================================================

/// Constant for aberration correction calculation (in arcseconds)
const ABERRATION_CONSTANT: f64 = 20.4898;

/// Mean rate of increase of Greenwich sidereal time (degrees per day)
const SIDEREAL_TIME_RATE: f64 = 360.985_647_366_29;

/// Base Greenwich mean sidereal time at J2000.0 epoch (degrees)
const GREENWICH_MEAN_SIDEREAL_TIME_BASE: f64 = 280.460_618_37;

/// The sun as seen from the Earth's centre, after nutation and aberration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeocentricSun {
    pub heliocentric: HeliocentricPosition,
    pub nutation: Nutation,
    /// Geocentric longitude Θ, degrees [0, 360)
    pub longitude: f64,
    /// Geocentric latitude β, degrees
    pub latitude: f64,
    /// Aberration correction Δτ, degrees
    pub aberration: f64,
    /// Apparent sun longitude λ, degrees
    pub apparent_longitude: f64,
    /// Greenwich mean sidereal time ν0, degrees [0, 360)
    pub mean_sidereal_time: f64,
    /// Greenwich apparent sidereal time ν, degrees
    pub sidereal_time: f64,
    /// Geocentric right ascension α, degrees [0, 360)
    pub right_ascension: f64,
    /// Geocentric declination δ, degrees
    pub declination: f64,
}

// ============================================================================
// Ecliptic Coordinates
// ============================================================================

/// Converts heliocentric longitude to geocentric longitude.
///
/// Geocentric longitude is heliocentric longitude + 180° (viewed from Earth vs Sun).
pub(crate) fn convert_heliocentric_to_geocentric_longitude(heliocentric_longitude: f64) -> f64 {
    let mut geocentric = heliocentric_longitude + 180.0;
    if geocentric >= 360.0 {
        geocentric -= 360.0;
    }
    geocentric
}

/// Calculates the aberration correction in degrees for an Earth-Sun
/// distance in AU.
pub(crate) fn calculate_aberration_correction(earth_sun_distance: f64) -> f64 {
    -ABERRATION_CONSTANT / (3600.0 * earth_sun_distance)
}

// ============================================================================
// Sidereal Time
// ============================================================================

/// Calculates Greenwich mean sidereal time.
///
/// # Arguments
/// * `julian_day` - Julian day (UT)
/// * `julian_century` - Julian century (UT)
///
/// # Returns
/// Greenwich mean sidereal time in degrees (0° to 360°)
pub(crate) fn calculate_greenwich_mean_sidereal_time(julian_day: f64, julian_century: f64) -> f64 {
    normalize_degrees_360(
        GREENWICH_MEAN_SIDEREAL_TIME_BASE
            + SIDEREAL_TIME_RATE * (julian_day - J2000_EPOCH_JD)
            + julian_century * julian_century * (0.000_387_933 - julian_century / 38_710_000.0),
    )
}

/// Apparent sidereal time = mean sidereal time + equation of the equinoxes
pub(crate) fn calculate_greenwich_apparent_sidereal_time(
    mean_sidereal_time: f64,
    nutation_longitude: f64,
    true_obliquity: f64,
) -> f64 {
    mean_sidereal_time + nutation_longitude * true_obliquity.to_radians().cos()
}

// ============================================================================
// Equatorial Coordinates
// ============================================================================

/// Calculates geocentric right ascension.
///
/// # Arguments
/// * `ecliptic_longitude` - Apparent ecliptic longitude in degrees
/// * `true_obliquity` - True obliquity of the ecliptic in degrees
/// * `ecliptic_latitude` - Ecliptic latitude in degrees
///
/// # Returns
/// Right ascension in degrees (0° to 360°)
pub(crate) fn calculate_geocentric_right_ascension(
    ecliptic_longitude: f64,
    true_obliquity: f64,
    ecliptic_latitude: f64,
) -> f64 {
    let longitude_rad = ecliptic_longitude.to_radians();
    let obliquity_rad = true_obliquity.to_radians();
    let latitude_rad = ecliptic_latitude.to_radians();

    normalize_degrees_360(
        (longitude_rad.sin() * obliquity_rad.cos() - latitude_rad.tan() * obliquity_rad.sin())
            .atan2(longitude_rad.cos())
            .to_degrees(),
    )
}

/// Calculates geocentric declination.
///
/// # Returns
/// Declination in degrees (-90° to +90°)
pub(crate) fn calculate_geocentric_declination(
    ecliptic_latitude: f64,
    true_obliquity: f64,
    ecliptic_longitude: f64,
) -> f64 {
    let latitude_rad = ecliptic_latitude.to_radians();
    let obliquity_rad = true_obliquity.to_radians();
    let longitude_rad = ecliptic_longitude.to_radians();

    (latitude_rad.sin() * obliquity_rad.cos() + latitude_rad.cos() * obliquity_rad.sin() * longitude_rad.sin())
        .asin()
        .to_degrees()
}

/// Runs the Earth position, nutation and geocentric stages for one instant.
pub fn geocentric_sun(date: &JulianDate) -> GeocentricSun {
    let heliocentric = heliocentric_position(date.jme);
    let longitude = convert_heliocentric_to_geocentric_longitude(heliocentric.longitude);
    let latitude = -heliocentric.latitude;

    let nutation = nutation(date.jce, date.jme);

    let aberration = calculate_aberration_correction(heliocentric.radius);
    let apparent_longitude = longitude + nutation.longitude + aberration;

    let mean_sidereal_time = calculate_greenwich_mean_sidereal_time(date.jd, date.jc);
    let sidereal_time =
        calculate_greenwich_apparent_sidereal_time(mean_sidereal_time, nutation.longitude, nutation.true_obliquity);

    GeocentricSun {
        heliocentric,
        nutation,
        longitude,
        latitude,
        aberration,
        apparent_longitude,
        mean_sidereal_time,
        sidereal_time,
        right_ascension: calculate_geocentric_right_ascension(apparent_longitude, nutation.true_obliquity, latitude),
        declination: calculate_geocentric_declination(latitude, nutation.true_obliquity, apparent_longitude),
    }
}
