//! Instants of the equinoxes and solstices.
//!
//! Meeus, "Astronomical Algorithms", chapter 26: a mean instant from a
//! quartic in the year, corrected by 24 periodic terms. Accurate to about a
//! minute between the years 1000 and 3000, degrading slowly outside it. The
//! result is a Julian Ephemeris Day and is reported as UTC without a ΔT
//! correction.

#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::trace;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::{
    math::polynomial,
    time::{calendar_from_julian_day, julian_century_from_julian_day, CalendarInstant},
};

/// Table 26.A, years -1000 to 1000, in Y = year / 1000.
const MEAN_JDE_BEFORE_1000: [[f64; 5]; Season::COUNT] = [
    [1_721_139.291_89, 365_242.137_40, 0.061_34, 0.001_11, -0.000_71],
    [1_721_233.254_01, 365_241.725_62, -0.053_23, 0.009_07, 0.000_25],
    [1_721_325.704_55, 365_242.495_58, -0.116_77, -0.002_97, 0.000_74],
    [1_721_414.399_87, 365_242.882_57, -0.007_69, -0.009_33, -0.000_06],
];

/// Table 26.B, years 1000 to 3000, in Y = (year - 2000) / 1000.
const MEAN_JDE_AFTER_1000: [[f64; 5]; Season::COUNT] = [
    [2_451_623.809_84, 365_242.374_04, 0.051_69, -0.004_11, -0.000_57],
    [2_451_716.567_67, 365_241.626_03, 0.003_25, 0.008_88, -0.000_30],
    [2_451_810.217_15, 365_242.017_67, -0.115_75, 0.003_37, 0.000_78],
    [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23, 0.000_32],
];

/// Table 26.C: amplitude A, phase B (degrees), frequency C (degrees per century).
const PERIODIC_TERMS: [[f64; 3]; 24] = [
    [485.0, 324.96, 1_934.136],
    [203.0, 337.23, 32_964.467],
    [199.0, 342.08, 20.186],
    [182.0, 27.85, 445_267.112],
    [156.0, 73.14, 45_036.886],
    [136.0, 171.52, 22_518.443],
    [77.0, 222.54, 65_928.934],
    [74.0, 296.72, 3_034.906],
    [70.0, 243.58, 9_037.513],
    [58.0, 119.81, 33_718.147],
    [52.0, 297.17, 150.678],
    [50.0, 21.02, 2_281.226],
    [45.0, 247.54, 29_929.562],
    [44.0, 325.15, 31_555.956],
    [29.0, 60.93, 4_443.417],
    [18.0, 155.12, 67_555.328],
    [17.0, 288.79, 4_562.452],
    [16.0, 198.04, 62_894.029],
    [14.0, 199.76, 31_436.921],
    [12.0, 95.39, 14_577.848],
    [12.0, 287.11, 31_931.756],
    [12.0, 320.81, 34_777.259],
    [9.0, 227.73, 1_222.114],
    [8.0, 15.45, 16_859.074],
];

/// An equinox or solstice, named for the month it falls in.
///
/// The discriminant is the row in the mean-instant tables. `Display` and
/// `FromStr` use the names "March Equinox" through "December Solstice";
/// iterate in calendar order with [`strum::IntoEnumIterator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString, IntoStaticStr)]
pub enum Season {
    #[strum(to_string = "March Equinox")]
    MarchEquinox = 0,
    #[strum(to_string = "June Solstice")]
    JuneSolstice = 1,
    #[strum(to_string = "September Equinox")]
    SeptemberEquinox = 2,
    #[strum(to_string = "December Solstice")]
    DecemberSolstice = 3,
}

/// Mean Julian Ephemeris Day of the season, before the periodic correction.
///
/// Years up to 1000 use table 26.A, later years table 26.B.
pub fn mean_jde(season: Season, year: i32) -> f64 {
    let year = f64::from(year);
    if year <= 1000.0 {
        polynomial(&MEAN_JDE_BEFORE_1000[season as usize], year / 1000.0)
    } else {
        polynomial(&MEAN_JDE_AFTER_1000[season as usize], (year - 2000.0) / 1000.0)
    }
}

pub(crate) fn periodic_term_sum(julian_century: f64) -> f64 {
    PERIODIC_TERMS.iter().fold(0.0, |accumulator, &[a, b, c]| {
        accumulator + a * (b + c * julian_century).to_radians().cos()
    })
}

/// Scale of the periodic correction, from the Sun's mean anomaly W.
///
/// The phase is `+2.47°`; Meeus prints `-2.47°`. The two differ by a few
/// seconds at most in the result.
pub(crate) fn delta_lambda(julian_century: f64) -> f64 {
    let w = (35_999.373 * julian_century + 2.47).to_radians();
    1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos()
}

/// Julian Ephemeris Day of the season in `year`.
pub fn season_jde(season: Season, year: i32) -> f64 {
    let jde0 = mean_jde(season, year);
    let t = julian_century_from_julian_day(jde0);
    let jde = jde0 + 0.000_01 * periodic_term_sum(t) / delta_lambda(t);
    trace!("{season} {year}: mean {jde0}, corrected {jde}");
    jde
}

/// Calendar instant (UTC) of the season in `year`.
///
/// # Example
///
/// ```
/// use sunpath::{season_utc, Season};
///
/// let solstice = season_utc(Season::JuneSolstice, 2021);
/// assert_eq!((solstice.year, solstice.month, solstice.day), (2021, 6, 21));
/// ```
pub fn season_utc(season: Season, year: i32) -> CalendarInstant {
    calendar_from_julian_day(season_jde(season, year))
}
