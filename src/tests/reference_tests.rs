//! The NREL report's worked example, checked stage by stage.

extern crate std;

use std::format;
use std::string::ToString;

use super::{assert_close, nrel_reference_input};
use crate::{calculate, format_hours, status_code, OutputSelection, SpaContext, SunEvents};

fn reference_context() -> SpaContext {
    let mut ctx = SpaContext::new(nrel_reference_input());
    calculate(&mut ctx).unwrap();
    ctx
}

#[test]
fn reference_time_scales() {
    let ctx = reference_context();
    assert_close(ctx.intermediate.jd, 2_452_930.312_847, 1e-6);
    assert_close(ctx.intermediate.jde - ctx.intermediate.jd, 67.0 / 86_400.0, 1e-9);
}

#[test]
fn reference_earth_position() {
    let ctx = reference_context();
    assert_close(ctx.intermediate.l, 24.018_261_7, 1e-6);
    assert_close(ctx.intermediate.b, -0.000_101_121_9, 1e-9);
    assert_close(ctx.intermediate.r, 0.996_542_3, 1e-7);
}

#[test]
fn reference_nutation_and_obliquity() {
    let ctx = reference_context();
    assert_close(ctx.intermediate.del_psi, -0.003_998_404, 1e-9);
    assert_close(ctx.intermediate.del_epsilon, 0.001_666_568, 1e-9);
    assert_close(ctx.intermediate.epsilon, 23.440_465, 1e-6);
}

#[test]
fn reference_hour_angle() {
    let ctx = reference_context();
    assert_close(ctx.intermediate.h, 11.105_902, 1e-5);
}

#[test]
fn reference_topocentric_angles() {
    let ctx = reference_context();
    assert_close(ctx.output.zenith, 50.111_62, 1e-5);
    assert_close(ctx.output.azimuth, 194.340_24, 1e-5);
    assert_close(ctx.output.azimuth_astro, 14.340_24, 1e-5);
    assert_close(ctx.output.incidence, 25.187_00, 1e-5);
    assert_close(ctx.output.zenith, 90.0 - ctx.intermediate.e, 1e-12);
}

#[test]
fn reference_sun_events() {
    let ctx = reference_context();
    assert_eq!(format!("{}", format_hours(ctx.output.sunrise)), "06:12:43");
    assert_eq!(format!("{}", format_hours(ctx.output.sunset)), "17:20:19");
    assert_close(ctx.output.suntransit, 11.768, 0.01);
    assert!(ctx.intermediate.eot.abs() <= 20.0);

    match ctx.output.sun_events {
        Some(SunEvents::Occurs {
            transit,
            sunrise,
            sunset,
        }) => {
            assert_eq!(transit, ctx.output.suntransit);
            assert_eq!(sunrise, ctx.output.sunrise);
            assert_eq!(sunset, ctx.output.sunset);
        }
        other => panic!("expected sun events, got {other:?}"),
    }
}

#[test]
fn repeated_calculation_is_bit_identical() {
    let mut ctx = SpaContext::new(nrel_reference_input());
    calculate(&mut ctx).unwrap();
    let first = ctx;
    let result = calculate(&mut ctx);
    assert_eq!(status_code(&result), 0);
    assert_eq!(first, ctx);
}

#[test]
fn selection_gates_optional_outputs() {
    let mut input = nrel_reference_input();
    input.function = OutputSelection::ZenithAzimuth;
    let mut ctx = SpaContext::new(input);
    calculate(&mut ctx).unwrap();

    assert_close(ctx.output.zenith, 50.111_62, 1e-5);
    assert_eq!(ctx.output.incidence, 0.0);
    assert_eq!(ctx.output.sunrise, 0.0);
    assert_eq!(ctx.output.sun_events, None);

    ctx.input.function = OutputSelection::ZenithAzimuthSun;
    calculate(&mut ctx).unwrap();
    assert_eq!(ctx.output.incidence, 0.0);
    assert!(ctx.output.sun_events.is_some());
}

#[test]
fn report_lists_inputs_and_outputs() {
    let report = reference_context().to_string();
    assert!(report.starts_with("Inputs:"));
    assert!(report.contains("  2003/10/17 12:30:30 GMT -7"));
    assert!(report.contains("  Latitude:      39.74"));
    assert!(report.contains("  Zenith:        50.11 degrees"));
    assert!(report.contains("  Azimuth:       194.34 degrees"));
    assert!(report.contains("  Incidence:     25.19 degrees"));
    assert!(report.contains("  Sunrise:       06:12:43 Local"));
    assert!(report.contains("  Sunset:        17:20:19 Local"));
}
