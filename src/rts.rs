//! Equation of time and sunrise, sun transit and sunset.
//!
//! Rise and set are found from the sun's geocentric coordinates at 0h UT on
//! the day before, the day of, and the day after the requested date,
//! interpolated to each event and then refined once.

use core::fmt;

#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::debug;

use crate::{
    geocentric::{geocentric_sun, GeocentricSun},
    math::{normalize_degrees_180, normalize_degrees_180_signed, normalize_degrees_360, normalize_unit_interval, polynomial},
    time::{dayfrac_to_local_hr, equation_of_time, format_hours, julian_day, JulianDate},
    topocentric::{Observer, SUN_RADIUS},
};

/// Value written to the hour fields when the sun does not rise or set.
pub const NO_EVENT: f64 = -99_999.0;

/// Sidereal motion of the sun used to advance ν to each event (degrees per day).
const SIDEREAL_DAY_RATE: f64 = 360.985_647;

/// Sun mean longitude coefficients, lowest power of JME first.
const SUN_MEAN_LONGITUDE_COEFFICIENTS: [f64; 6] = [
    280.466_456_7,
    360_007.698_277_9,
    0.030_320_28,
    1.0 / 49_931.0,
    -1.0 / 15_300.0,
    -1.0 / 2_000_000.0,
];

/// Typed outcome of the rise/transit/set solver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SunEvents {
    /// Local fractional hours of each event.
    Occurs { transit: f64, sunrise: f64, sunset: f64 },
    /// The sun stays above the horizon for the whole day (midnight sun).
    AllDay,
    /// The sun stays below the horizon for the whole day (polar night).
    AllNight,
}

impl fmt::Display for SunEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SunEvents::Occurs {
                transit,
                sunrise,
                sunset,
            } => write!(
                f,
                "sunrise {}, transit {}, sunset {}",
                format_hours(*sunrise),
                format_hours(*transit),
                format_hours(*sunset)
            ),
            SunEvents::AllDay => f.write_str("sun above the horizon all day"),
            SunEvents::AllNight => f.write_str("sun below the horizon all day"),
        }
    }
}

/// Everything the rise/transit/set solver produces.
///
/// When the sun does not cross the horizon every hour and angle field holds
/// [`NO_EVENT`] and `events` says which way it failed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SunRiseTransitSet {
    /// Local hour angle at sunrise, degrees
    pub sunrise_hour_angle: f64,
    /// Local hour angle at sunset, degrees
    pub sunset_hour_angle: f64,
    /// Sun altitude at transit, degrees
    pub transit_altitude: f64,
    /// Local sun transit time, fractional hours
    pub suntransit: f64,
    /// Local sunrise time, fractional hours
    pub sunrise: f64,
    /// Local sunset time, fractional hours
    pub sunset: f64,
    pub events: SunEvents,
}

impl SunRiseTransitSet {
    fn without_events(events: SunEvents) -> Self {
        Self {
            sunrise_hour_angle: NO_EVENT,
            sunset_hour_angle: NO_EVENT,
            transit_altitude: NO_EVENT,
            suntransit: NO_EVENT,
            sunrise: NO_EVENT,
            sunset: NO_EVENT,
            events,
        }
    }
}

/// Where the sun's daily circle sits relative to the rise/set altitude.
enum HorizonCrossing {
    /// Hour angle of the crossing, degrees [0, 180)
    Crosses(f64),
    AlwaysAbove,
    AlwaysBelow,
}

/// Calculates the mean longitude of the sun in degrees (0° to 360°).
pub(crate) fn calculate_sun_mean_longitude(julian_millennium: f64) -> f64 {
    normalize_degrees_360(polynomial(&SUN_MEAN_LONGITUDE_COEFFICIENTS, julian_millennium))
}

/// Equation of time in minutes for the instant the sun was computed at.
pub fn equation_of_time_minutes(date: &JulianDate, sun: &GeocentricSun) -> f64 {
    equation_of_time(
        calculate_sun_mean_longitude(date.jme),
        sun.right_ascension,
        sun.nutation.longitude,
        sun.nutation.true_obliquity,
    )
}

fn calculate_sun_hour_angle_at_rise_set(latitude: f64, declination: f64, h0_prime: f64) -> HorizonCrossing {
    let latitude_rad = latitude.to_radians();
    let declination_rad = declination.to_radians();
    let argument = (h0_prime.to_radians().sin() - latitude_rad.sin() * declination_rad.sin())
        / (latitude_rad.cos() * declination_rad.cos());

    if argument.abs() <= 1.0 {
        HorizonCrossing::Crosses(normalize_degrees_180(argument.acos().to_degrees()))
    } else if argument < -1.0 {
        HorizonCrossing::AlwaysAbove
    } else {
        HorizonCrossing::AlwaysBelow
    }
}

/// Interpolates one coordinate across the three daily samples.
///
/// Day-to-day differences of two degrees or more are taken to be a wrap at
/// 0°/360° and reduced to their fractional part.
fn interpolate_three_day(samples: [f64; 3], n: f64) -> f64 {
    let mut a = samples[1] - samples[0];
    let mut b = samples[2] - samples[1];

    if a.abs() >= 2.0 {
        a = normalize_unit_interval(a);
    }
    if b.abs() >= 2.0 {
        b = normalize_unit_interval(b);
    }

    samples[1] + n * (a + b + (b - a) * n) / 2.0
}

fn calculate_rts_sun_altitude(latitude: f64, declination_prime: f64, hour_angle_prime: f64) -> f64 {
    let latitude_rad = latitude.to_radians();
    let declination_rad = declination_prime.to_radians();

    (latitude_rad.sin() * declination_rad.sin()
        + latitude_rad.cos() * declination_rad.cos() * hour_angle_prime.to_radians().cos())
    .asin()
    .to_degrees()
}

/// One event (rise, transit or set) after interpolation.
#[derive(Copy, Clone)]
struct EventSample {
    day_fraction: f64,
    hour_angle: f64,
    declination: f64,
    altitude: f64,
}

fn refine_rise_or_set(event: &EventSample, latitude: f64, h0_prime: f64) -> f64 {
    event.day_fraction
        + (event.altitude - h0_prime)
            / (360.0
                * event.declination.to_radians().cos()
                * latitude.to_radians().cos()
                * event.hour_angle.to_radians().sin())
}

/// Solves sunrise, sun transit and sunset for the observer's calendar day.
///
/// # Arguments
/// * `year`, `month`, `day` - Local calendar date; the clock time is ignored
/// * `delta_t` - TT − UT in seconds
/// * `timezone` - Hours from UTC; also the zone the results are expressed in
/// * `observer` - Location; only longitude, latitude and `atmos_refract` are read
pub fn sun_rise_transit_set(
    year: i32,
    month: i32,
    day: i32,
    delta_t: f64,
    timezone: f64,
    observer: &Observer,
) -> SunRiseTransitSet {
    let h0_prime = -(SUN_RADIUS + observer.atmos_refract);
    let day_start = julian_day(year, month, day, 0, 0, 0.0, 0.0, 0.0);

    let nu = geocentric_sun(&JulianDate::new(day_start, delta_t)).sidereal_time;

    let mut right_ascensions = [0.0; 3];
    let mut declinations = [0.0; 3];
    for (offset, (alpha, delta)) in right_ascensions.iter_mut().zip(declinations.iter_mut()).enumerate() {
        let sample = geocentric_sun(&JulianDate::new(day_start + offset as f64 - 1.0, 0.0));
        *alpha = sample.right_ascension;
        *delta = sample.declination;
    }

    let transit_estimate = (right_ascensions[1] - observer.longitude - nu) / 360.0;
    let h0 = match calculate_sun_hour_angle_at_rise_set(observer.latitude, declinations[1], h0_prime) {
        HorizonCrossing::Crosses(h0) => h0,
        HorizonCrossing::AlwaysAbove => {
            debug!("sun stays above the horizon at latitude {}", observer.latitude);
            return SunRiseTransitSet::without_events(SunEvents::AllDay);
        }
        HorizonCrossing::AlwaysBelow => {
            debug!("sun stays below the horizon at latitude {}", observer.latitude);
            return SunRiseTransitSet::without_events(SunEvents::AllNight);
        }
    };

    // Order: transit, rise, set.
    let day_fractions = [
        normalize_unit_interval(transit_estimate),
        normalize_unit_interval(transit_estimate - h0 / 360.0),
        normalize_unit_interval(transit_estimate + h0 / 360.0),
    ];

    let [transit, rise, set] = day_fractions.map(|day_fraction| {
        let sidereal_time = nu + SIDEREAL_DAY_RATE * day_fraction;
        let n = day_fraction + delta_t / 86_400.0;
        let right_ascension = interpolate_three_day(right_ascensions, n);
        let declination = interpolate_three_day(declinations, n);
        let hour_angle = normalize_degrees_180_signed(sidereal_time + observer.longitude - right_ascension);
        EventSample {
            day_fraction,
            hour_angle,
            declination,
            altitude: calculate_rts_sun_altitude(observer.latitude, declination, hour_angle),
        }
    });

    let suntransit = dayfrac_to_local_hr(transit.day_fraction - transit.hour_angle / 360.0, timezone);
    let sunrise = dayfrac_to_local_hr(refine_rise_or_set(&rise, observer.latitude, h0_prime), timezone);
    let sunset = dayfrac_to_local_hr(refine_rise_or_set(&set, observer.latitude, h0_prime), timezone);

    SunRiseTransitSet {
        sunrise_hour_angle: rise.hour_angle,
        sunset_hour_angle: set.hour_angle,
        transit_altitude: transit.altitude,
        suntransit,
        sunrise,
        sunset,
        events: SunEvents::Occurs {
            transit: suntransit,
            sunrise,
            sunset,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_wraps_across_zero_right_ascension() {
        let wrapped = interpolate_three_day([359.0, 0.0, 1.0], 0.0);
        assert_eq!(wrapped, 0.0);
        let ahead = interpolate_three_day([359.0, 0.0, 1.0], 0.5);
        assert!(ahead > 0.0 && ahead < 1.0, "{ahead}");
    }

    #[test]
    fn equator_always_crosses_horizon() {
        assert!(matches!(
            calculate_sun_hour_angle_at_rise_set(0.0, 10.0, -0.83337),
            HorizonCrossing::Crosses(h0) if h0 > 89.0 && h0 < 92.0
        ));
    }

    #[test]
    fn polar_hour_angle_classification() {
        assert!(matches!(
            calculate_sun_hour_angle_at_rise_set(85.0, -20.0, -0.83337),
            HorizonCrossing::AlwaysBelow
        ));
        assert!(matches!(
            calculate_sun_hour_angle_at_rise_set(85.0, 20.0, -0.83337),
            HorizonCrossing::AlwaysAbove
        ));
    }
}
