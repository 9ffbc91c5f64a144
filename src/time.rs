use core::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::normalize_unit_interval;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub(crate) const J2000_EPOCH_JD: f64 = 2_451_545.0;

/// Last Julian Day still counted in the Julian calendar.
pub(crate) const GREGORIAN_SWITCH_JD: f64 = 2_299_160.0;

/// A calendar date and time of day, as plain numbers.
///
/// Dates on or after 1582-10-15 are Gregorian, earlier dates are in the
/// proleptic Julian calendar, matching [`julian_day`]. Years use
/// astronomical numbering (year 0 is 1 BC).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalendarInstant {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    /// Seconds including the fractional part.
    pub second: f64,
}

impl CalendarInstant {
    /// Julian Day of this instant, read as local time at `timezone` hours
    /// east of Greenwich and corrected by `delta_ut1` seconds.
    pub fn julian_day(&self, delta_ut1: f64, timezone: f64) -> f64 {
        julian_day(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            delta_ut1,
            timezone,
        )
    }

    /// Converts to a chrono [`NaiveDateTime`].
    ///
    /// Returns `None` for instants before the Gregorian calendar switch,
    /// since chrono only knows the proleptic Gregorian calendar.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        if (self.year, self.month, self.day) < (1582, 10, 15) {
            return None;
        }
        let whole_seconds = self.second.floor();
        let nanos = ((self.second - whole_seconds) * 1e9) as u32;
        NaiveDate::from_ymd_opt(self.year, u32::try_from(self.month).ok()?, u32::try_from(self.day).ok()?)?
            .and_hms_nano_opt(
                u32::try_from(self.hour).ok()?,
                u32::try_from(self.minute).ok()?,
                whole_seconds as u32,
                nanos.min(999_999_999),
            )
    }
}

/// Compute the astronomical Julian Day for a given local date/time.
///
/// - `timezone`: offset of the local clock from UTC in **hours** (negative
///   west of Greenwich); it is subtracted to get UT.
/// - `delta_ut1`: UT1 − UTC in **seconds**, added to the clock time.
///
/// January and February count as months 13 and 14 of the previous year.
/// The Gregorian correction is only applied past JD 2299160.0, so earlier
/// dates are read in the Julian calendar.
#[allow(clippy::too_many_arguments)]
pub fn julian_day(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
    delta_ut1: f64,
    timezone: f64,
) -> f64 {
    let day_decimal = f64::from(day)
        + (f64::from(hour) - timezone + (f64::from(minute) + (second + delta_ut1) / 60.0) / 60.0) / 24.0;

    let (year, month) = if month < 3 { (year - 1, month + 12) } else { (year, month) };
    let year = f64::from(year);

    let mut julian_day =
        (365.25 * (year + 4716.0)).floor() + (30.6001 * (f64::from(month) + 1.0)).floor() + day_decimal - 1524.5;

    if julian_day > GREGORIAN_SWITCH_JD {
        let a = (year / 100.0).floor();
        julian_day += 2.0 - a + (a / 4.0).floor();
    }
    julian_day
}

/// Milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Recover the calendar date and time of day from a Julian Day.
///
/// Integer days below 2299161 are read in the Julian calendar, later days in
/// the Gregorian calendar. The time of day is rounded to the millisecond,
/// carrying into the next day, so whole-second instants from [`julian_day`]
/// come back with the same hour, minute and second.
pub fn calendar_from_julian_day(julian_day: f64) -> CalendarInstant {
    let whole_day = (julian_day + 0.5).floor();
    let mut millis = (((julian_day + 0.5) - whole_day) * MILLIS_PER_DAY as f64).round() as i64;
    let z = if millis >= MILLIS_PER_DAY {
        millis -= MILLIS_PER_DAY;
        whole_day + 1.0
    } else {
        whole_day
    };

    let a = if z < GREGORIAN_SWITCH_JD + 1.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day = b - d - (30.6001 * e).floor();

    let month = if e < 13.5 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.5 { c - 4716.0 } else { c - 4715.0 };

    CalendarInstant {
        year: year as i32,
        month: month as i32,
        day: day as i32,
        hour: (millis / 3_600_000) as i32,
        minute: (millis / 60_000 % 60) as i32,
        second: (millis % 60_000) as f64 / 1000.0,
    }
}

/// The time scales derived from one Julian Day.
///
/// All values are relative to the J2000.0 epoch (JD 2451545.0).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JulianDate {
    /// Julian Day (UT)
    pub jd: f64,
    /// Julian Century (UT)
    pub jc: f64,
    /// Julian Ephemeris Day (TT)
    pub jde: f64,
    /// Julian Ephemeris Century (TT)
    pub jce: f64,
    /// Julian Ephemeris Millennium (TT)
    pub jme: f64,
}

impl JulianDate {
    /// Derives century and ephemeris scales from `jd` and ΔT (TT − UT, seconds).
    pub fn new(jd: f64, delta_t: f64) -> Self {
        let jde = julian_ephemeris_day_from_julian_day(jd, delta_t);
        let jce = julian_ephemeris_century_from_julian_ephemeris_day(jde);
        Self {
            jd,
            jc: julian_century_from_julian_day(jd),
            jde,
            jce,
            jme: julian_ephemeris_millennium_from_julian_ephemeris_century(jce),
        }
    }
}

/// Julian century (T) from the given Julian Day (JD),
/// measured in Julian centuries since the J2000.0 epoch.
pub(crate) fn julian_century_from_julian_day(julian_day: f64) -> f64 {
    (julian_day - J2000_EPOCH_JD) / 36_525.0
}

/// Julian Ephemeris Day (JDE) from Julian Day (JD) and ΔT `delta_t`.
///
/// - `julian_day`: Julian Day in UT.
/// - `delta_t`: Difference TT − UT in **seconds** (ΔT).
pub(crate) fn julian_ephemeris_day_from_julian_day(julian_day: f64, delta_t: f64) -> f64 {
    julian_day + delta_t / 86_400.0
}

/// Julian Ephemeris Century (JCE) from Julian Ephemeris Day (JDE),
/// measured in Julian centuries since the J2000.0 epoch.
pub(crate) fn julian_ephemeris_century_from_julian_ephemeris_day(ephemeris_day: f64) -> f64 {
    (ephemeris_day - J2000_EPOCH_JD) / 36_525.0
}

/// Julian Ephemeris Millennium (JME) from Julian Ephemeris Century (JCE).
pub(crate) fn julian_ephemeris_millennium_from_julian_ephemeris_century(ephemeris_century: f64) -> f64 {
    ephemeris_century / 10.0
}

/// Normalize a time offset (in minutes) to a small range around zero.
///
/// This function assumes that the input value is effectively an offset that
/// might be off by approximately a whole number of days. It "wraps" values
/// that are more than 20 minutes away from zero by adding or subtracting
/// one full day (1440 minutes), so that the result lies in the range
/// \[-20, 20\] minutes.
pub(crate) fn normalize_time_offset_minutes(minutes: f64) -> f64 {
    let mut limited = minutes;
    if limited < -20.0_f64 {
        limited += 1440.0_f64;
    } else if limited > 20.0_f64 {
        limited -= 1440.0_f64;
    }
    limited
}

/// Compute the equation of time (`EoT`) in minutes, normalized to a small range.
///
/// The equation of time is the difference between apparent solar time
/// (as indicated by a sundial) and mean solar time (clock time), expressed
/// in minutes. This function computes a raw value from the given
/// astronomical parameters and then normalizes it using
/// [`normalize_time_offset_minutes`] so that the final result is near zero.
///
/// # Arguments
///
/// * `mean_longitude_deg`       - Mean longitude of the Sun (degrees).
/// * `apparent_ra_deg`   - Apparent right ascension of the Sun (degrees).
/// * `nutation_longitude_deg` - Nutation in longitude (degrees).
/// * `true_obliquity_deg` - True obliquity of the ecliptic (degrees).
pub(crate) fn equation_of_time(
    mean_longitude_deg: f64,
    apparent_ra_deg: f64,
    nutation_longitude_deg: f64,
    true_obliquity_deg: f64,
) -> f64 {
    normalize_time_offset_minutes(
        4.0 * (mean_longitude_deg - 0.005_718_3 - apparent_ra_deg
            + nutation_longitude_deg * true_obliquity_deg.to_radians().cos()),
    )
}

/// Convert a fractional day value to local hour of the day.
///
/// # Arguments
///
/// * `day_fraction` - A fractional day value in UT, where 0.0 is midnight
///   and 0.5 is noon.
/// * `timezone` - Offset of the local clock from UTC in hours.
///
/// # Returns
///
/// The local hour of the day in the range \[0.0, 24.0).
pub(crate) fn dayfrac_to_local_hr(day_fraction: f64, timezone: f64) -> f64 {
    24.0 * normalize_unit_interval(day_fraction + timezone / 24.0)
}

/// Whole hours, minutes and seconds of a fractional hour value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HourMinuteSecond {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl fmt::Display for HourMinuteSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Splits fractional hours into whole hour, minute and second, truncating
/// each part.
pub fn format_hours(hours: f64) -> HourMinuteSecond {
    let hour = hours.floor();
    let minutes = 60.0 * (hours - hour);
    let minute = minutes.floor();
    let second = (60.0 * (minutes - minute)).floor();
    HourMinuteSecond {
        hour: hour as i32,
        minute: minute as i32,
        second: second as i32,
    }
}

/// Converts fractional hours in [0, 24) to a chrono [`NaiveTime`].
///
/// Returns `None` for values outside that range, which includes the
/// no-sunrise sentinel.
pub fn hours_to_naive_time(hours: f64) -> Option<NaiveTime> {
    if !(0.0..24.0).contains(&hours) {
        return None;
    }
    let seconds = hours * 3600.0;
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(whole as u32, nanos.min(999_999_999))
}
