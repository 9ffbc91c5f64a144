//! Prints the NREL reference report, today's sun times for Golden, Colorado,
//! and this year's equinoxes and solstices in local time.
//!
//! Run with `RUST_LOG=trace` to see the pipeline stages.

use chrono::{Datelike, TimeZone, Utc};
use chrono_tz::America::Denver;
use strum::IntoEnumIterator;
use sunpath::{calculate, hours_to_naive_time, season_utc, OutputSelection, Season, SpaContext, SpaInput, SunEvents};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut ctx = SpaContext::new(SpaInput {
        year: 2003,
        month: 10,
        day: 17,
        hour: 12,
        minute: 30,
        second: 30.0,
        timezone: -7.0,
        delta_ut1: 0.0,
        delta_t: 67.0,
        longitude: -105.1786,
        latitude: 39.742476,
        elevation: 1830.14,
        pressure: 820.0,
        temperature: 11.0,
        slope: 30.0,
        azm_rotation: -10.0,
        atmos_refract: 0.5667,
        function: OutputSelection::All,
    });
    calculate(&mut ctx)?;
    println!("{ctx}");
    println!();
    println!("Julian Day:    {:.6}", ctx.intermediate.jd);
    println!("L:             {:e} degrees", ctx.intermediate.l);
    println!("B:             {:e} degrees", ctx.intermediate.b);
    println!("R:             {:.6} AU", ctx.intermediate.r);
    println!("H:             {:.6} degrees", ctx.intermediate.h);
    println!("Delta Psi:     {:e} degrees", ctx.intermediate.del_psi);
    println!("Delta Epsilon: {:e} degrees", ctx.intermediate.del_epsilon);
    println!("Epsilon:       {:.6} degrees", ctx.intermediate.epsilon);
    println!("Zenith:        {:.6} degrees", ctx.output.zenith);
    println!("Azimuth:       {:.6} degrees", ctx.output.azimuth);
    println!("Incidence:     {:.6} degrees", ctx.output.incidence);

    let now = Utc::now().with_timezone(&Denver);
    ctx.input.set_datetime(&now);
    ctx.input.delta_t = 69.0;
    calculate(&mut ctx)?;
    println!();
    println!("Golden, Colorado at {now}");
    println!("  Zenith {:.2}°, azimuth {:.2}°", ctx.output.zenith, ctx.output.azimuth);
    match ctx.output.sun_events {
        Some(SunEvents::Occurs {
            transit,
            sunrise,
            sunset,
        }) => {
            for (label, hours) in [("Sunrise", sunrise), ("Transit", transit), ("Sunset", sunset)] {
                if let Some(time) = hours_to_naive_time(hours) {
                    println!("  {label}: {time}");
                }
            }
        }
        Some(events) => println!("  {events}"),
        None => {}
    }

    println!();
    for season in Season::iter() {
        let instant = season_utc(season, now.year());
        if let Some(utc) = instant.to_naive_datetime() {
            println!("{season}: {}", Denver.from_utc_datetime(&utc));
        }
    }

    Ok(())
}
