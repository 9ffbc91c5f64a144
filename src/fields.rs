//! String-keyed access to [`SpaInput`], for form and settings front ends.
//!
//! Only input fields are reachable; intermediate values and outputs are read
//! from the typed record.

#[allow(unused_imports)]
use core_maths::CoreFloat;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::{
    context::{OutputSelection, SpaInput},
    error::FieldError,
};

/// One settable input of [`SpaInput`].
///
/// Keys are the struct field names (`"year"`, `"delta_ut1"`, ...), used by
/// `FromStr`, `Display` and `AsRef<str>`. Iterate with
/// [`strum::IntoEnumIterator`].
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum InputField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    DeltaUt1,
    DeltaT,
    Timezone,
    Longitude,
    Latitude,
    Elevation,
    Pressure,
    Temperature,
    Slope,
    AzmRotation,
    AtmosRefract,
    Function,
}

fn whole_number(field: InputField, value: f64) -> Result<i32, FieldError> {
    if value.fract() != 0.0 || !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value) {
        return Err(FieldError::NotWhole { field, value });
    }
    Ok(value as i32)
}

impl SpaInput {
    /// Reads one input as a number. The output selection reads as its code.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::Year => f64::from(self.year),
            InputField::Month => f64::from(self.month),
            InputField::Day => f64::from(self.day),
            InputField::Hour => f64::from(self.hour),
            InputField::Minute => f64::from(self.minute),
            InputField::Second => self.second,
            InputField::DeltaUt1 => self.delta_ut1,
            InputField::DeltaT => self.delta_t,
            InputField::Timezone => self.timezone,
            InputField::Longitude => self.longitude,
            InputField::Latitude => self.latitude,
            InputField::Elevation => self.elevation,
            InputField::Pressure => self.pressure,
            InputField::Temperature => self.temperature,
            InputField::Slope => self.slope,
            InputField::AzmRotation => self.azm_rotation,
            InputField::AtmosRefract => self.atmos_refract,
            InputField::Function => f64::from(self.function.as_code()),
        }
    }

    /// Writes one input from a number.
    ///
    /// Calendar fields and the output selection need whole numbers; range
    /// checks are left to [`calculate`](crate::calculate), apart from the
    /// output selection which must be a known code.
    pub fn set(&mut self, field: InputField, value: f64) -> Result<(), FieldError> {
        match field {
            InputField::Year => self.year = whole_number(field, value)?,
            InputField::Month => self.month = whole_number(field, value)?,
            InputField::Day => self.day = whole_number(field, value)?,
            InputField::Hour => self.hour = whole_number(field, value)?,
            InputField::Minute => self.minute = whole_number(field, value)?,
            InputField::Second => self.second = value,
            InputField::DeltaUt1 => self.delta_ut1 = value,
            InputField::DeltaT => self.delta_t = value,
            InputField::Timezone => self.timezone = value,
            InputField::Longitude => self.longitude = value,
            InputField::Latitude => self.latitude = value,
            InputField::Elevation => self.elevation = value,
            InputField::Pressure => self.pressure = value,
            InputField::Temperature => self.temperature = value,
            InputField::Slope => self.slope = value,
            InputField::AzmRotation => self.azm_rotation = value,
            InputField::AtmosRefract => self.atmos_refract = value,
            InputField::Function => {
                self.function = OutputSelection::try_from(whole_number(field, value)?)?;
            }
        }
        Ok(())
    }

    /// [`SpaInput::set`] by key.
    pub fn set_by_key(&mut self, key: &str, value: f64) -> Result<(), FieldError> {
        let field = key.parse().map_err(|_: strum::ParseError| FieldError::UnknownField)?;
        self.set(field, value)
    }
}
