use thiserror::Error;

use crate::fields::InputField;

/// Input rejected by [`calculate`](crate::calculate).
///
/// Each variant names the first input found outside its valid range and
/// carries the offending value. [`SpaError::code`] gives the numeric status
/// used by the classic C interface.
#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum SpaError {
    /// Year outside -2000..=6000
    #[error("year {0} out of range")]
    Year(i32),
    /// Month outside 1..=12
    #[error("month {0} out of range")]
    Month(i32),
    /// Day outside 1..=31
    #[error("day {0} out of range")]
    Day(i32),
    /// Hour outside 0..=24
    #[error("hour {0} out of range")]
    Hour(i32),
    /// Minute outside 0..=59, or non-zero at hour 24
    #[error("minute {0} out of range")]
    Minute(i32),
    /// Second outside [0, 60), or non-zero at hour 24
    #[error("second {0} out of range")]
    Second(f64),
    /// |ΔT| greater than 8000 seconds
    #[error("delta t {0} out of range")]
    DeltaT(f64),
    /// |timezone| greater than 18 hours
    #[error("timezone {0} out of range")]
    Timezone(f64),
    /// |longitude| greater than 180°
    #[error("longitude {0} out of range")]
    Longitude(f64),
    /// |latitude| greater than 90°
    #[error("latitude {0} out of range")]
    Latitude(f64),
    /// Elevation below -6500000 m
    #[error("elevation {0} out of range")]
    Elevation(f64),
    /// Pressure outside 0..=5000 millibars
    #[error("pressure {0} out of range")]
    Pressure(f64),
    /// Temperature at or below -273 °C or above 6000 °C
    #[error("temperature {0} out of range")]
    Temperature(f64),
    /// |slope| greater than 360°
    #[error("slope {0} out of range")]
    Slope(f64),
    /// |azimuth rotation| greater than 360°
    #[error("azimuth rotation {0} out of range")]
    AzimuthRotation(f64),
    /// |atmospheric refraction| greater than 5°
    #[error("atmospheric refraction {0} out of range")]
    AtmosphericRefraction(f64),
    /// ΔUT1 outside the open interval (-1, 1) seconds
    #[error("delta ut1 {0} out of range")]
    DeltaUt1(f64),
    /// Output selector code outside 0..=3
    #[error("output selector {0} is not a known selection")]
    InvalidFunction(i32),
}

impl SpaError {
    /// Numeric status code, 1 through 18.
    pub fn code(&self) -> i32 {
        match self {
            SpaError::Year(_) => 1,
            SpaError::Month(_) => 2,
            SpaError::Day(_) => 3,
            SpaError::Hour(_) => 4,
            SpaError::Minute(_) => 5,
            SpaError::Second(_) => 6,
            SpaError::DeltaT(_) => 7,
            SpaError::Timezone(_) => 8,
            SpaError::Longitude(_) => 9,
            SpaError::Latitude(_) => 10,
            SpaError::Elevation(_) => 11,
            SpaError::Pressure(_) => 12,
            SpaError::Temperature(_) => 13,
            SpaError::Slope(_) => 14,
            SpaError::AzimuthRotation(_) => 15,
            SpaError::AtmosphericRefraction(_) => 16,
            SpaError::DeltaUt1(_) => 17,
            SpaError::InvalidFunction(_) => 18,
        }
    }
}

/// Status code of a calculation result: 0 on success, otherwise
/// [`SpaError::code`].
pub fn status_code(result: &Result<(), SpaError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => error.code(),
    }
}

/// Failure of the string-keyed input adapter.
#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum FieldError {
    #[error("unknown input field")]
    UnknownField,
    #[error("{field} expects a whole number, got {value}")]
    NotWhole { field: InputField, value: f64 },
    #[error(transparent)]
    Selector(#[from] SpaError),
}
