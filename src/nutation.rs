#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    math::{eval_cubic, polynomial},
    terms::{PE_TERMS, Y_TERMS},
};

/// Conversion factor from arcseconds to degrees
const ARCSECONDS_TO_DEGREES: f64 = 1.0 / 3600.0;

/// Scaling factor for nutation terms (0.0001 arcseconds to degrees)
const NUTATION_SCALE_FACTOR: f64 = 36_000_000.0;

/// Mean obliquity coefficients in arcseconds, lowest power of U first.
const MEAN_OBLIQUITY_COEFFICIENTS: [f64; 11] = [
    84_381.448, -4_680.93, -1.55, 1_999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// The five fundamental arguments of the nutation series, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FundamentalArguments {
    /// X0: mean elongation of the Moon from the Sun
    pub mean_elongation_moon_sun: f64,
    /// X1: mean anomaly of the Sun
    pub mean_anomaly_sun: f64,
    /// X2: mean anomaly of the Moon
    pub mean_anomaly_moon: f64,
    /// X3: argument of latitude of the Moon
    pub argument_latitude_moon: f64,
    /// X4: longitude of the ascending node of the Moon's mean orbit
    pub ascending_longitude_moon: f64,
}

impl FundamentalArguments {
    /// Evaluates the five cubic polynomials for the Julian ephemeris century.
    pub fn new(julian_century: f64) -> Self {
        Self {
            mean_elongation_moon_sun: eval_cubic(1.0 / 189_474.0, -0.001_914_2, 445_267.111_48, 297.850_36, julian_century),
            mean_anomaly_sun: eval_cubic(-1.0 / 300_000.0, -0.000_160_3, 35_999.050_34, 357.527_72, julian_century),
            mean_anomaly_moon: eval_cubic(1.0 / 56_250.0, 0.008_697_2, 477_198.867_398, 134.962_98, julian_century),
            argument_latitude_moon: eval_cubic(1.0 / 327_270.0, -0.003_682_5, 483_202.017_538, 93.271_91, julian_century),
            ascending_longitude_moon: eval_cubic(1.0 / 450_000.0, 0.002_070_8, -1_934.136_261, 125.044_52, julian_century),
        }
    }

    /// The arguments in table order, X0 to X4, for the term multipliers.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.mean_elongation_moon_sun,
            self.mean_anomaly_sun,
            self.mean_anomaly_moon,
            self.argument_latitude_moon,
            self.ascending_longitude_moon,
        ]
    }
}

/// Nutation and the obliquity of the ecliptic at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nutation {
    pub arguments: FundamentalArguments,
    /// Nutation in longitude Δψ, degrees
    pub longitude: f64,
    /// Nutation in obliquity Δε, degrees
    pub obliquity: f64,
    /// Mean obliquity ε0, arcseconds
    pub mean_obliquity: f64,
    /// True obliquity ε, degrees
    pub true_obliquity: f64,
}

/// Calculates nutation in longitude and obliquity.
///
/// Nutation is the periodic oscillation of Earth's axis of rotation caused by
/// the gravitational pull of the Moon and Sun on Earth's equatorial bulge.
///
/// # Arguments
/// * `julian_century` - Julian ephemeris century
/// * `fundamental_arguments` - [X0, X1, X2, X3, X4] in degrees
///
/// # Returns
/// Tuple of (`nutation_in_longitude`, `nutation_in_obliquity`) in degrees
pub(crate) fn calculate_nutation_longitude_and_obliquity(
    julian_century: f64,
    fundamental_arguments: [f64; 5],
) -> (f64, f64) {
    let mut sum_longitude = 0.0;
    let mut sum_obliquity = 0.0;

    for (multipliers, coefficients) in Y_TERMS.iter().zip(PE_TERMS.iter()) {
        let argument = multipliers
            .iter()
            .zip(fundamental_arguments)
            .fold(0.0, |accumulator, (&multiplier, x)| accumulator + f64::from(multiplier) * x)
            .to_radians();

        sum_longitude += (coefficients[0] + julian_century * coefficients[1]) * argument.sin();
        sum_obliquity += (coefficients[2] + julian_century * coefficients[3]) * argument.cos();
    }

    (
        sum_longitude / NUTATION_SCALE_FACTOR,
        sum_obliquity / NUTATION_SCALE_FACTOR,
    )
}

/// Calculates the mean obliquity of the ecliptic in arcseconds.
///
/// The polynomial runs in U = JME / 10.
pub(crate) fn calculate_ecliptic_mean_obliquity(julian_millennium: f64) -> f64 {
    polynomial(&MEAN_OBLIQUITY_COEFFICIENTS, julian_millennium / 10.0)
}

/// True obliquity in degrees from Δε (degrees) and ε0 (arcseconds).
pub(crate) fn calculate_ecliptic_true_obliquity(nutation_obliquity: f64, mean_obliquity: f64) -> f64 {
    nutation_obliquity + mean_obliquity * ARCSECONDS_TO_DEGREES
}

/// Runs the nutation series and obliquity for one instant.
///
/// # Arguments
/// * `julian_century` - Julian ephemeris century (JCE)
/// * `julian_millennium` - Julian ephemeris millennium (JME)
pub fn nutation(julian_century: f64, julian_millennium: f64) -> Nutation {
    let arguments = FundamentalArguments::new(julian_century);
    let (longitude, obliquity) = calculate_nutation_longitude_and_obliquity(julian_century, arguments.as_array());
    let mean_obliquity = calculate_ecliptic_mean_obliquity(julian_millennium);
    Nutation {
        arguments,
        longitude,
        obliquity,
        mean_obliquity,
        true_obliquity: calculate_ecliptic_true_obliquity(obliquity, mean_obliquity),
    }
}
