extern crate std;

use chrono::{Datelike, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use julian_day_converter::unix_millis_to_julian_day;
use proptest::prelude::*;

use super::assert_close;
use crate::{
    calendar_from_julian_day, hours_to_naive_time, julian_day, time::normalize_time_offset_minutes, CalendarInstant,
    SpaInput,
};

#[test]
fn j2000_epoch_is_exact() {
    assert_eq!(julian_day(2000, 1, 1, 12, 0, 0.0, 0.0, 0.0), 2_451_545.0);
}

#[test]
fn timezone_and_delta_ut1_shift_the_instant() {
    let utc = julian_day(2000, 1, 1, 12, 0, 0.0, 0.0, 0.0);
    assert_close(julian_day(2000, 1, 1, 5, 0, 0.0, 0.0, -7.0), utc, 1e-9);
    assert_close(julian_day(2000, 1, 1, 12, 0, 0.0, 0.5, 0.0) - utc, 0.5 / 86_400.0, 1e-9);
}

#[test]
fn gregorian_cutover() {
    // 1582-10-04 (Julian) is followed by 1582-10-15 (Gregorian).
    assert_eq!(julian_day(1582, 10, 4, 0, 0, 0.0, 0.0, 0.0), 2_299_159.5);
    assert_eq!(julian_day(1582, 10, 15, 0, 0, 0.0, 0.0, 0.0), 2_299_160.5);

    let before = calendar_from_julian_day(2_299_159.5);
    assert_eq!((before.year, before.month, before.day), (1582, 10, 4));
    let after = calendar_from_julian_day(2_299_160.5);
    assert_eq!((after.year, after.month, after.day), (1582, 10, 15));
}

#[test]
fn inverse_recovers_time_of_day() {
    let jd = julian_day(2003, 10, 17, 12, 30, 30.0, 0.0, -7.0);
    assert_close(jd, 2_452_930.312_847, 1e-6);
    let instant = calendar_from_julian_day(jd);
    assert_eq!((instant.year, instant.month, instant.day), (2003, 10, 17));
    assert_eq!((instant.hour, instant.minute), (19, 30));
    assert_close(instant.second, 30.0, 1e-3);
}

#[test]
fn whole_minutes_do_not_slip_to_the_previous_second() {
    for year in (-2000..=6000).step_by(250) {
        for (hour, minute) in [(0, 0), (0, 29), (6, 45), (12, 0), (23, 59)] {
            let jd = julian_day(year, 1, 14, hour, minute, 0.0, 0.0, 0.0);
            let instant = calendar_from_julian_day(jd);
            assert_eq!(
                (instant.year, instant.month, instant.day, instant.hour, instant.minute),
                (year, 1, 14, hour, minute),
                "{instant:?}"
            );
            assert_eq!(instant.second, 0.0, "{instant:?}");
        }
    }
}

#[test]
fn time_of_day_rounding_carries_into_the_next_year() {
    let jd = julian_day(2023, 12, 31, 23, 59, 59.9999, 0.0, 0.0);
    let instant = calendar_from_julian_day(jd);
    assert_eq!(
        (instant.year, instant.month, instant.day, instant.hour, instant.minute),
        (2024, 1, 1, 0, 0)
    );
    assert_eq!(instant.second, 0.0);
}

#[test]
fn equation_of_time_wraps_by_one_day() {
    assert_close(normalize_time_offset_minutes(-1430.0), 10.0, 1e-12);
    assert_close(normalize_time_offset_minutes(1430.0), -10.0, 1e-12);
    assert_eq!(normalize_time_offset_minutes(-20.0), -20.0);
    assert_eq!(normalize_time_offset_minutes(15.5), 15.5);
}

#[test]
fn calendar_instant_converts_to_chrono() {
    let instant = CalendarInstant {
        year: 2021,
        month: 6,
        day: 21,
        hour: 3,
        minute: 32,
        second: 7.25,
    };
    let expected = NaiveDate::from_ymd_opt(2021, 6, 21)
        .unwrap()
        .and_hms_milli_opt(3, 32, 7, 250)
        .unwrap();
    assert_eq!(instant.to_naive_datetime(), Some(expected));

    let julian_calendar = CalendarInstant { year: 1500, ..instant };
    assert_eq!(julian_calendar.to_naive_datetime(), None);
}

#[test]
fn fractional_hours_convert_to_naive_time() {
    let time = hours_to_naive_time(6.5).unwrap();
    assert_eq!((time.hour(), time.minute(), time.second()), (6, 30, 0));
    assert_eq!(hours_to_naive_time(crate::NO_EVENT), None);
    assert_eq!(hours_to_naive_time(24.0), None);
}

#[test]
fn set_datetime_takes_offset_as_timezone() {
    let offset = FixedOffset::west_opt(7 * 3600).unwrap();
    let datetime = offset.with_ymd_and_hms(2003, 10, 17, 12, 30, 30).unwrap();
    let mut input = SpaInput::default();
    input.set_datetime(&datetime);

    assert_eq!((input.year, input.month, input.day), (2003, 10, 17));
    assert_eq!((input.hour, input.minute), (12, 30));
    assert_eq!(input.second, 30.0);
    assert_eq!(input.timezone, -7.0);
}

#[test]
fn set_datetime_follows_daylight_saving() {
    let datetime = chrono_tz::America::New_York
        .with_ymd_and_hms(2024, 7, 4, 12, 0, 0)
        .unwrap();
    let mut input = SpaInput::default();
    input.set_datetime(&datetime);
    assert_eq!(input.timezone, -4.0);
}

proptest! {
    #[test]
    fn calendar_round_trip(
        year in -2000i32..=6000,
        month in 1i32..=12,
        day in 1i32..=28,
        hour in 0i32..24,
        minute in 0i32..60,
        millis in 0u32..60_000,
    ) {
        // The days skipped by the Gregorian reform have no Julian Day.
        prop_assume!(!(year == 1582 && month == 10));
        let second = f64::from(millis) / 1000.0;

        let jd = julian_day(year, month, day, hour, minute, second, 0.0, 0.0);
        let instant = calendar_from_julian_day(jd);

        prop_assert_eq!((instant.year, instant.month, instant.day), (year, month, day));
        prop_assert_eq!((instant.hour, instant.minute), (hour, minute));
        prop_assert_eq!(instant.second, second);
        prop_assert!((instant.julian_day(0.0, 0.0) - jd).abs() < 1e-7);
    }

    #[test]
    fn julian_day_matches_unix_conversion(seconds in -2_000_000_000i64..=4_000_000_000i64) {
        let datetime = Utc.timestamp_opt(seconds, 0).single().unwrap();
        let ours = julian_day(
            datetime.year(),
            datetime.month() as i32,
            datetime.day() as i32,
            datetime.hour() as i32,
            datetime.minute() as i32,
            f64::from(datetime.second()),
            0.0,
            0.0,
        );
        let reference = unix_millis_to_julian_day(seconds * 1000);
        prop_assert!((ours - reference).abs() < 1e-6, "{} vs {}", ours, reference);
    }
}
