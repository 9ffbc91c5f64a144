use crate::{context::SpaInput, error::SpaError};

/// Checks every input against its valid range.
///
/// Checks run in a fixed order and the first failure is returned. Slope and
/// azimuth rotation are only checked when the output selection computes the
/// surface incidence angle. NaN fails whichever check it reaches.
pub fn validate_inputs(input: &SpaInput) -> Result<(), SpaError> {
    if !(-2000..=6000).contains(&input.year) {
        return Err(SpaError::Year(input.year));
    }
    if !(1..=12).contains(&input.month) {
        return Err(SpaError::Month(input.month));
    }
    if !(1..=31).contains(&input.day) {
        return Err(SpaError::Day(input.day));
    }
    if !(0..=24).contains(&input.hour) {
        return Err(SpaError::Hour(input.hour));
    }
    if !(0..=59).contains(&input.minute) {
        return Err(SpaError::Minute(input.minute));
    }
    if !(0.0..60.0).contains(&input.second) {
        return Err(SpaError::Second(input.second));
    }
    if !(0.0..=5000.0).contains(&input.pressure) {
        return Err(SpaError::Pressure(input.pressure));
    }
    if !(input.temperature > -273.0 && input.temperature <= 6000.0) {
        return Err(SpaError::Temperature(input.temperature));
    }
    if !(input.delta_ut1 > -1.0 && input.delta_ut1 < 1.0) {
        return Err(SpaError::DeltaUt1(input.delta_ut1));
    }
    if input.hour == 24 && input.minute > 0 {
        return Err(SpaError::Minute(input.minute));
    }
    if input.hour == 24 && input.second > 0.0 {
        return Err(SpaError::Second(input.second));
    }

    if !(-8000.0..=8000.0).contains(&input.delta_t) {
        return Err(SpaError::DeltaT(input.delta_t));
    }
    if !(-18.0..=18.0).contains(&input.timezone) {
        return Err(SpaError::Timezone(input.timezone));
    }
    if !(-180.0..=180.0).contains(&input.longitude) {
        return Err(SpaError::Longitude(input.longitude));
    }
    if !(-90.0..=90.0).contains(&input.latitude) {
        return Err(SpaError::Latitude(input.latitude));
    }
    if !(-5.0..=5.0).contains(&input.atmos_refract) {
        return Err(SpaError::AtmosphericRefraction(input.atmos_refract));
    }
    if !(-6_500_000.0..).contains(&input.elevation) {
        return Err(SpaError::Elevation(input.elevation));
    }

    if input.function.includes_incidence() {
        if !(-360.0..=360.0).contains(&input.slope) {
            return Err(SpaError::Slope(input.slope));
        }
        if !(-360.0..=360.0).contains(&input.azm_rotation) {
            return Err(SpaError::AzimuthRotation(input.azm_rotation));
        }
    }

    Ok(())
}
