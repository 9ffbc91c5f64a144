extern crate std;

use proptest::prelude::*;

use super::nrel_reference_input;
use crate::{
    calculate, status_code, validate_inputs, OutputSelection, SpaContext, SpaError, SpaInput, SpaIntermediate,
    SpaOutput,
};

fn code_for(edit: impl FnOnce(&mut SpaInput)) -> i32 {
    let mut input = nrel_reference_input();
    edit(&mut input);
    match validate_inputs(&input) {
        Ok(()) => 0,
        Err(error) => error.code(),
    }
}

#[test]
fn reference_input_is_valid() {
    assert_eq!(code_for(|_| {}), 0);
}

#[test]
fn each_field_reports_its_code() {
    assert_eq!(code_for(|i| i.year = 6001), 1);
    assert_eq!(code_for(|i| i.year = -2001), 1);
    assert_eq!(code_for(|i| i.month = 13), 2);
    assert_eq!(code_for(|i| i.month = 0), 2);
    assert_eq!(code_for(|i| i.day = 32), 3);
    assert_eq!(code_for(|i| i.hour = 25), 4);
    assert_eq!(code_for(|i| i.minute = 60), 5);
    assert_eq!(code_for(|i| i.second = 60.0), 6);
    assert_eq!(code_for(|i| i.delta_t = 8000.5), 7);
    assert_eq!(code_for(|i| i.timezone = 19.0), 8);
    assert_eq!(code_for(|i| i.timezone = -19.0), 8);
    assert_eq!(code_for(|i| i.longitude = 180.5), 9);
    assert_eq!(code_for(|i| i.latitude = -90.5), 10);
    assert_eq!(code_for(|i| i.elevation = -6_500_001.0), 11);
    assert_eq!(code_for(|i| i.pressure = 5000.5), 12);
    assert_eq!(code_for(|i| i.temperature = -273.0), 13);
    assert_eq!(code_for(|i| i.slope = 361.0), 14);
    assert_eq!(code_for(|i| i.azm_rotation = -361.0), 15);
    assert_eq!(code_for(|i| i.atmos_refract = 5.5), 16);
    assert_eq!(code_for(|i| i.delta_ut1 = 1.0), 17);
}

#[test]
fn first_violation_wins() {
    assert_eq!(
        code_for(|i| {
            i.month = 13;
            i.timezone = 19.0;
        }),
        2
    );
    // Pressure is checked before the timezone even though its code is higher.
    assert_eq!(
        code_for(|i| {
            i.timezone = 19.0;
            i.pressure = -1.0;
        }),
        12
    );
}

#[test]
fn hour_twenty_four_only_at_the_full_hour() {
    assert_eq!(
        code_for(|i| {
            i.hour = 24;
            i.minute = 0;
            i.second = 0.0;
        }),
        0
    );
    assert_eq!(
        code_for(|i| {
            i.hour = 24;
            i.minute = 1;
            i.second = 0.0;
        }),
        5
    );
    assert_eq!(
        code_for(|i| {
            i.hour = 24;
            i.minute = 0;
            i.second = 0.5;
        }),
        6
    );
}

#[test]
fn surface_bounds_only_checked_when_incidence_is_selected() {
    let out_of_range_slope = |i: &mut SpaInput| i.slope = 400.0;
    assert_eq!(code_for(out_of_range_slope), 14);
    assert_eq!(
        code_for(|i| {
            out_of_range_slope(i);
            i.function = OutputSelection::ZenithAzimuthSun;
        }),
        0
    );
}

#[test]
fn nan_inputs_are_rejected() {
    assert_eq!(code_for(|i| i.second = f64::NAN), 6);
    assert_eq!(code_for(|i| i.pressure = f64::NAN), 12);
    assert_eq!(code_for(|i| i.latitude = f64::NAN), 10);
    assert_eq!(code_for(|i| i.elevation = f64::NAN), 11);
}

#[test]
fn unknown_selector_code_is_eighteen() {
    let error = OutputSelection::try_from(7).unwrap_err();
    assert_eq!(error, SpaError::InvalidFunction(7));
    assert_eq!(error.code(), 18);
    assert_eq!(status_code(&Err(error)), 18);
    for code in 0..4 {
        assert_eq!(OutputSelection::try_from(code).unwrap().as_code(), code);
    }
}

#[test]
fn failed_calculation_clears_previous_results() {
    let mut ctx = SpaContext::new(nrel_reference_input());
    calculate(&mut ctx).unwrap();
    assert!(ctx.output.zenith > 0.0);

    ctx.input.month = 13;
    let result = calculate(&mut ctx);
    assert_eq!(result, Err(SpaError::Month(13)));
    assert_eq!(status_code(&result), 2);
    assert_eq!(ctx.intermediate, SpaIntermediate::default());
    assert_eq!(ctx.output, SpaOutput::default());
    assert_eq!(ctx.input.month, 13);
}

proptest! {
    #[test]
    fn in_range_inputs_always_validate(
        year in -2000i32..=6000,
        month in 1i32..=12,
        day in 1i32..=31,
        hour in 0i32..24,
        minute in 0i32..=59,
        second in 0.0f64..60.0,
        delta_ut1 in -0.99f64..0.99,
        delta_t in -8000.0f64..=8000.0,
        timezone in -18.0f64..=18.0,
        longitude in -180.0f64..=180.0,
        latitude in -90.0f64..=90.0,
        elevation in -6_500_000.0f64..=6_500_000.0,
        pressure in 0.0f64..=5000.0,
        temperature in -272.9f64..=6000.0,
        slope in -360.0f64..=360.0,
        azm_rotation in -360.0f64..=360.0,
        atmos_refract in -5.0f64..=5.0,
    ) {
        let input = SpaInput {
            year, month, day, hour, minute, second,
            delta_ut1, delta_t, timezone, longitude, latitude, elevation,
            pressure, temperature, slope, azm_rotation, atmos_refract,
            function: OutputSelection::All,
        };
        prop_assert_eq!(validate_inputs(&input), Ok(()));
    }
}
