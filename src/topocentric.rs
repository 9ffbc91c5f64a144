#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{geocentric::GeocentricSun, math::normalize_degrees_360};

// ============================================================================
// Constants
// ============================================================================

/// Angular radius of the Sun in degrees (approximately 16 arcminutes)
pub(crate) const SUN_RADIUS: f64 = 0.26667;

/// Elevation in degrees where `10.3 / (e + 5.11)` divides by zero.
const BENNETT_POLE: f64 = -5.11;

/// Earth's equatorial radius in meters
const EARTH_EQUATORIAL_RADIUS_METERS: f64 = 6_378_140.0;

/// Earth's flattening factor (ratio of polar to equatorial radius)
const EARTH_FLATTENING_FACTOR: f64 = 0.996_647_19;

/// Constant for equatorial horizontal parallax calculation (in arcseconds)
const PARALLAX_CONSTANT: f64 = 8.794;

/// Where the observer stands and the air they look through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Observer {
    /// Degrees, negative west of Greenwich
    pub longitude: f64,
    /// Degrees, negative south of the equator
    pub latitude: f64,
    /// Meters above sea level
    pub elevation: f64,
    /// Annual average local pressure, millibars
    pub pressure: f64,
    /// Annual average local temperature, °C
    pub temperature: f64,
    /// Refraction at sunrise and sunset, degrees (0.5667 is typical)
    pub atmos_refract: f64,
}

/// The sun as seen by the observer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TopocentricSun {
    /// Observer local hour angle H, degrees [0, 360)
    pub hour_angle: f64,
    /// Sun equatorial horizontal parallax ξ, degrees
    pub equatorial_parallax: f64,
    /// Parallax in the sun right ascension Δα, degrees
    pub right_ascension_parallax: f64,
    /// Topocentric declination δ′, degrees
    pub declination: f64,
    /// Topocentric right ascension α′, degrees
    pub right_ascension: f64,
    /// Topocentric local hour angle H′, degrees
    pub hour_angle_prime: f64,
    /// Elevation angle without refraction e0, degrees
    pub elevation_uncorrected: f64,
    /// Refraction correction Δe, degrees
    pub refraction: f64,
    /// Elevation angle with refraction e, degrees
    pub elevation: f64,
    /// Topocentric zenith angle, degrees
    pub zenith: f64,
    /// Azimuth westward from south, degrees [0, 360)
    pub azimuth_astro: f64,
    /// Azimuth eastward from north, degrees [0, 360)
    pub azimuth: f64,
}

// ============================================================================
// Parallax and Topocentric Coordinates
// ============================================================================

/// Calculates the observer's local hour angle.
///
/// # Arguments
/// * `greenwich_sidereal_time` - Greenwich apparent sidereal time in degrees
/// * `longitude` - Observer's longitude in degrees (positive east)
/// * `right_ascension` - Sun's right ascension in degrees
///
/// # Returns
/// Local hour angle in degrees (0° to 360°)
pub(crate) fn calculate_observer_hour_angle(greenwich_sidereal_time: f64, longitude: f64, right_ascension: f64) -> f64 {
    normalize_degrees_360(greenwich_sidereal_time + longitude - right_ascension)
}

/// Calculates the sun's equatorial horizontal parallax in degrees.
pub(crate) fn calculate_sun_equatorial_horizontal_parallax(earth_sun_distance: f64) -> f64 {
    PARALLAX_CONSTANT / (3600.0 * earth_sun_distance)
}

/// Calculates parallax correction and topocentric declination.
///
/// # Arguments
/// * `latitude` - Observer's latitude in degrees
/// * `elevation_meters` - Observer's elevation above sea level in meters
/// * `equatorial_horizontal_parallax` - Sun's equatorial horizontal parallax in degrees
/// * `geocentric_hour_angle` - Geocentric local hour angle in degrees
/// * `geocentric_declination` - Geocentric declination in degrees
///
/// # Returns
/// Tuple of (`parallax_correction_to_right_ascension`, `topocentric_declination`) in degrees
pub(crate) fn calculate_right_ascension_parallax_and_topocentric_declination(
    latitude: f64,
    elevation_meters: f64,
    equatorial_horizontal_parallax: f64,
    geocentric_hour_angle: f64,
    geocentric_declination: f64,
) -> (f64, f64) {
    let latitude_rad = latitude.to_radians();
    let parallax_rad = equatorial_horizontal_parallax.to_radians();
    let hour_angle_rad = geocentric_hour_angle.to_radians();
    let declination_rad = geocentric_declination.to_radians();

    let u = (EARTH_FLATTENING_FACTOR * latitude_rad.tan()).atan();
    let rho_sin_phi_prime =
        EARTH_FLATTENING_FACTOR * u.sin() + elevation_meters * latitude_rad.sin() / EARTH_EQUATORIAL_RADIUS_METERS;
    let rho_cos_phi_prime = u.cos() + elevation_meters * latitude_rad.cos() / EARTH_EQUATORIAL_RADIUS_METERS;

    let denominator = declination_rad.cos() - rho_cos_phi_prime * parallax_rad.sin() * hour_angle_rad.cos();
    let parallax_correction_rad = (-rho_cos_phi_prime * parallax_rad.sin() * hour_angle_rad.sin()).atan2(denominator);
    let topocentric_declination_rad = ((declination_rad.sin() - rho_sin_phi_prime * parallax_rad.sin())
        * parallax_correction_rad.cos())
    .atan2(denominator);

    (
        parallax_correction_rad.to_degrees(),
        topocentric_declination_rad.to_degrees(),
    )
}

/// Calculates topocentric elevation angle in degrees, before refraction.
pub(crate) fn calculate_topocentric_elevation_angle(
    latitude: f64,
    declination_prime: f64,
    hour_angle_prime: f64,
) -> f64 {
    let latitude_rad = latitude.to_radians();
    let declination_rad = declination_prime.to_radians();
    let hour_angle_rad = hour_angle_prime.to_radians();

    (latitude_rad.sin() * declination_rad.sin() + latitude_rad.cos() * declination_rad.cos() * hour_angle_rad.cos())
        .asin()
        .to_degrees()
}

// ============================================================================
// Atmospheric Refraction
// ============================================================================

/// Calculates atmospheric refraction correction.
///
/// The correction is zero once the sun is further below the horizon than
/// its own radius plus `atmos_refract`. It is also zero at or below -5.11°,
/// the pole of the Bennett formula, which only a refraction setting above
/// 4.84° lets through.
///
/// # Arguments
/// * `pressure` - Atmospheric pressure in millibars
/// * `temperature` - Temperature in Celsius
/// * `atmos_refract` - Atmospheric refraction at the horizon in degrees
/// * `elevation_uncorrected` - Uncorrected elevation angle in degrees
///
/// # Returns
/// Refraction correction in degrees
pub(crate) fn calculate_atmospheric_refraction_correction(
    pressure: f64,
    temperature: f64,
    atmos_refract: f64,
    elevation_uncorrected: f64,
) -> f64 {
    if elevation_uncorrected >= -(SUN_RADIUS + atmos_refract) && elevation_uncorrected > BENNETT_POLE {
        // Bennett
        (pressure / 1010.0) * (283.0 / (273.0 + temperature)) * 1.02
            / (60.0
                * (elevation_uncorrected + 10.3 / (elevation_uncorrected + 5.11))
                    .to_radians()
                    .tan())
    } else {
        0.0
    }
}

// ============================================================================
// Horizontal Coordinates
// ============================================================================

/// Calculates topocentric astronomical azimuth angle.
///
/// # Returns
/// Astronomical azimuth in degrees (measured westward from south)
pub(crate) fn calculate_topocentric_azimuth_astronomical(
    hour_angle_prime: f64,
    latitude: f64,
    declination_prime: f64,
) -> f64 {
    let hour_angle_rad = hour_angle_prime.to_radians();
    let latitude_rad = latitude.to_radians();
    let declination_rad = declination_prime.to_radians();

    normalize_degrees_360(
        hour_angle_rad
            .sin()
            .atan2(hour_angle_rad.cos() * latitude_rad.sin() - declination_rad.tan() * latitude_rad.cos())
            .to_degrees(),
    )
}

/// Converts astronomical azimuth (from south) to observer azimuth (from north).
pub(crate) fn convert_astronomical_to_observer_azimuth(azimuth_astro: f64) -> f64 {
    normalize_degrees_360(azimuth_astro + 180.0)
}

/// Calculates the incidence angle on a tilted surface.
///
/// # Arguments
/// * `zenith` - Solar zenith angle in degrees
/// * `azimuth_astro` - Astronomical azimuth (measured from south) in degrees
/// * `surface_azimuth` - Surface azimuth rotation in degrees
/// * `surface_slope` - Surface slope from horizontal in degrees
///
/// # Returns
/// Surface incidence angle in degrees
pub fn surface_incidence_angle(zenith: f64, azimuth_astro: f64, surface_azimuth: f64, surface_slope: f64) -> f64 {
    let zenith_rad = zenith.to_radians();
    let slope_rad = surface_slope.to_radians();
    let azimuth_diff_rad = (azimuth_astro - surface_azimuth).to_radians();

    (zenith_rad.cos() * slope_rad.cos() + slope_rad.sin() * zenith_rad.sin() * azimuth_diff_rad.cos())
        .acos()
        .to_degrees()
}

/// Moves the geocentric sun to the observer's place on the surface.
pub fn topocentric_sun(sun: &GeocentricSun, observer: &Observer) -> TopocentricSun {
    let hour_angle = calculate_observer_hour_angle(sun.sidereal_time, observer.longitude, sun.right_ascension);
    let equatorial_parallax = calculate_sun_equatorial_horizontal_parallax(sun.heliocentric.radius);

    let (right_ascension_parallax, declination) = calculate_right_ascension_parallax_and_topocentric_declination(
        observer.latitude,
        observer.elevation,
        equatorial_parallax,
        hour_angle,
        sun.declination,
    );

    let right_ascension = sun.right_ascension + right_ascension_parallax;
    let hour_angle_prime = hour_angle - right_ascension_parallax;

    let elevation_uncorrected = calculate_topocentric_elevation_angle(observer.latitude, declination, hour_angle_prime);
    let refraction = calculate_atmospheric_refraction_correction(
        observer.pressure,
        observer.temperature,
        observer.atmos_refract,
        elevation_uncorrected,
    );
    let elevation = elevation_uncorrected + refraction;

    let azimuth_astro = calculate_topocentric_azimuth_astronomical(hour_angle_prime, observer.latitude, declination);

    TopocentricSun {
        hour_angle,
        equatorial_parallax,
        right_ascension_parallax,
        declination,
        right_ascension,
        hour_angle_prime,
        elevation_uncorrected,
        refraction,
        elevation,
        zenith: 90.0 - elevation,
        azimuth_astro,
        azimuth: convert_astronomical_to_observer_azimuth(azimuth_astro),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refraction_is_finite_at_the_bennett_pole() {
        assert_eq!(calculate_atmospheric_refraction_correction(1010.0, 10.0, 5.0, -5.11), 0.0);
        assert_eq!(calculate_atmospheric_refraction_correction(1010.0, 10.0, 5.0, -5.2), 0.0);
        let near = calculate_atmospheric_refraction_correction(1010.0, 10.0, 5.0, -5.0);
        assert!(near.is_finite() && near.abs() < 0.01, "{near}");
    }

    #[test]
    fn refraction_below_the_cutoff_is_zero() {
        assert_eq!(calculate_atmospheric_refraction_correction(1010.0, 10.0, 0.5667, -1.0), 0.0);
        let at_horizon = calculate_atmospheric_refraction_correction(1010.0, 10.0, 0.5667, 0.0);
        assert!((at_horizon - 0.48).abs() < 0.02, "{at_horizon}");
    }
}
