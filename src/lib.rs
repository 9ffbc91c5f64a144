//! # Sunpath
//!
//! Solar position, sunrise/transit/sunset and equinox/solstice instants.
//!
//! The position engine is the NREL Solar Position Algorithm (Reda & Andreas),
//! which gives the sun's topocentric zenith and azimuth to within ±0.0003° for
//! the years -2000 to 6000. The season estimator follows Meeus, "Astronomical
//! Algorithms", chapter 26.
//!
//! ## Basic Usage
//!
//! ```
//! use sunpath::{calculate, SpaContext, SunEvents};
//!
//! let mut ctx = SpaContext::default();
//! ctx.input.year = 2003;
//! ctx.input.month = 10;
//! ctx.input.day = 17;
//! ctx.input.hour = 12;
//! ctx.input.minute = 30;
//! ctx.input.second = 30.0;
//! ctx.input.timezone = -7.0;      // hours east of Greenwich
//! ctx.input.delta_t = 67.0;       // TT - UT in seconds
//! ctx.input.longitude = -105.1786;
//! ctx.input.latitude = 39.742476;
//! ctx.input.elevation = 1830.14;  // meters
//! ctx.input.pressure = 820.0;     // millibars
//! ctx.input.temperature = 11.0;   // °C
//! ctx.input.slope = 30.0;
//! ctx.input.azm_rotation = -10.0;
//! ctx.input.atmos_refract = 0.5667;
//!
//! calculate(&mut ctx).unwrap();
//!
//! println!("Zenith: {:.4}°", ctx.output.zenith);
//! println!("Azimuth: {:.4}°", ctx.output.azimuth);
//! match ctx.output.sun_events {
//!     Some(SunEvents::Occurs { sunrise, sunset, .. }) => {
//!         println!("Sunrise {sunrise:.3} h, sunset {sunset:.3} h local");
//!     }
//!     Some(SunEvents::AllDay) => println!("Sun never sets (midnight sun)"),
//!     Some(SunEvents::AllNight) => println!("Sun never rises (polar night)"),
//!     None => {}
//! }
//! ```
//!
//! ## Seasons
//!
//! ```
//! use strum::IntoEnumIterator;
//! use sunpath::{season_utc, Season};
//!
//! for season in Season::iter() {
//!     let instant = season_utc(season, 2024);
//!     println!("{season}: {}", instant.to_naive_datetime().unwrap());
//! }
//! ```
#![no_std]

mod context;
mod earth;
mod error;
mod fields;
mod geocentric;
mod math;
mod nutation;
mod rts;
mod season;
mod terms;
mod time;
mod topocentric;
mod validate;

#[cfg(test)]
mod tests;

use log::{debug, trace};

pub use crate::context::{OutputSelection, SpaContext, SpaInput, SpaIntermediate, SpaOutput};
pub use crate::earth::{heliocentric_position, HeliocentricPosition};
pub use crate::error::{status_code, FieldError, SpaError};
pub use crate::fields::InputField;
pub use crate::geocentric::{geocentric_sun, GeocentricSun};
pub use crate::nutation::{nutation, FundamentalArguments, Nutation};
pub use crate::rts::{equation_of_time_minutes, sun_rise_transit_set, SunEvents, SunRiseTransitSet, NO_EVENT};
pub use crate::season::{mean_jde, season_jde, season_utc, Season};
pub use crate::time::{
    calendar_from_julian_day, format_hours, hours_to_naive_time, julian_day, CalendarInstant, HourMinuteSecond,
    JulianDate,
};
pub use crate::topocentric::{surface_incidence_angle, topocentric_sun, Observer, TopocentricSun};
pub use crate::validate::validate_inputs;

/// Runs the solar position algorithm on `ctx.input`.
///
/// Always computes zenith and azimuth. The surface incidence angle and the
/// sunrise/transit/sunset block run when `ctx.input.function` selects them;
/// unselected outputs are left at zero.
///
/// On error nothing is computed and both `ctx.intermediate` and
/// `ctx.output` are reset to their defaults, so results from an earlier call
/// cannot be mistaken for current ones.
///
/// A sun that never rises or never sets is not an error: the event hours
/// hold [`NO_EVENT`] and `ctx.output.sun_events` says which case applies.
///
/// # Errors
///
/// Returns the first [`SpaError`] found by [`validate_inputs`].
pub fn calculate(ctx: &mut SpaContext) -> Result<(), SpaError> {
    ctx.reset_results();
    if let Err(error) = validate_inputs(&ctx.input) {
        debug!("rejected input: {error} (code {})", error.code());
        return Err(error);
    }

    let input = ctx.input;

    let jd = input.calendar().julian_day(input.delta_ut1, input.timezone);
    let date = JulianDate::new(jd, input.delta_t);
    trace!("julian day {jd}, ephemeris millennium {}", date.jme);

    let sun = geocentric_sun(&date);
    trace!(
        "geocentric sun: right ascension {}, declination {}",
        sun.right_ascension,
        sun.declination
    );

    let topocentric = topocentric_sun(&sun, &input.observer());
    trace!(
        "topocentric sun: zenith {}, azimuth {}",
        topocentric.zenith,
        topocentric.azimuth
    );

    ctx.intermediate.record_position(&date, &sun, &topocentric);
    ctx.output.zenith = topocentric.zenith;
    ctx.output.azimuth_astro = topocentric.azimuth_astro;
    ctx.output.azimuth = topocentric.azimuth;

    if input.function.includes_incidence() {
        ctx.output.incidence = surface_incidence_angle(
            topocentric.zenith,
            topocentric.azimuth_astro,
            input.azm_rotation,
            input.slope,
        );
    }

    if input.function.includes_sun_events() {
        let equation_of_time = equation_of_time_minutes(&date, &sun);
        let events = sun_rise_transit_set(
            input.year,
            input.month,
            input.day,
            input.delta_t,
            input.timezone,
            &input.observer(),
        );
        trace!("equation of time {equation_of_time} min, {}", events.events);

        ctx.intermediate.record_sun_events(equation_of_time, &events);
        ctx.output.suntransit = events.suntransit;
        ctx.output.sunrise = events.sunrise;
        ctx.output.sunset = events.sunset;
        ctx.output.sun_events = Some(events.events);
    }

    Ok(())
}
