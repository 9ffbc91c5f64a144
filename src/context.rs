//! The calculation record: inputs, intermediate values and outputs.

use core::fmt;

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

use crate::{
    error::SpaError,
    geocentric::GeocentricSun,
    rts::{SunEvents, SunRiseTransitSet, NO_EVENT},
    time::{format_hours, CalendarInstant, JulianDate},
    topocentric::{Observer, TopocentricSun},
};

/// Which outputs [`calculate`](crate::calculate) produces.
///
/// Zenith and azimuth are always computed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputSelection {
    ZenithAzimuth,
    /// Adds the surface incidence angle.
    ZenithAzimuthIncidence,
    /// Adds the equation of time and sunrise, transit and sunset.
    ZenithAzimuthSun,
    #[default]
    All,
}

impl OutputSelection {
    /// Numeric code of the selection, 0 through 3.
    pub fn as_code(self) -> i32 {
        match self {
            OutputSelection::ZenithAzimuth => 0,
            OutputSelection::ZenithAzimuthIncidence => 1,
            OutputSelection::ZenithAzimuthSun => 2,
            OutputSelection::All => 3,
        }
    }

    /// Whether the surface incidence angle is computed.
    pub fn includes_incidence(self) -> bool {
        matches!(self, OutputSelection::ZenithAzimuthIncidence | OutputSelection::All)
    }

    /// Whether sunrise, transit and sunset are computed.
    pub fn includes_sun_events(self) -> bool {
        matches!(self, OutputSelection::ZenithAzimuthSun | OutputSelection::All)
    }
}

impl TryFrom<i32> for OutputSelection {
    type Error = SpaError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OutputSelection::ZenithAzimuth),
            1 => Ok(OutputSelection::ZenithAzimuthIncidence),
            2 => Ok(OutputSelection::ZenithAzimuthSun),
            3 => Ok(OutputSelection::All),
            other => Err(SpaError::InvalidFunction(other)),
        }
    }
}

/// Caller supplied values.
///
/// The default is 1 January of year 0 at midnight, everything else zero and
/// all outputs selected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpaInput {
    /// 4-digit year, valid range -2000 to 6000
    pub year: i32,
    /// Valid range 1 to 12
    pub month: i32,
    /// Valid range 1 to 31
    pub day: i32,
    /// Local hour, valid range 0 to 24
    pub hour: i32,
    /// Valid range 0 to 59
    pub minute: i32,
    /// Valid range 0 to less than 60
    pub second: f64,
    /// Fractional second difference between UTC and UT1, seconds in (-1, 1)
    pub delta_ut1: f64,
    /// Difference between earth rotation time and terrestrial time, seconds
    pub delta_t: f64,
    /// Observer time zone in hours, negative west of Greenwich
    pub timezone: f64,
    /// Observer longitude in degrees, negative west of Greenwich
    pub longitude: f64,
    /// Observer latitude in degrees, negative south of the equator
    pub latitude: f64,
    /// Observer elevation in meters
    pub elevation: f64,
    /// Annual average local pressure in millibars
    pub pressure: f64,
    /// Annual average local temperature in °C
    pub temperature: f64,
    /// Surface slope measured from the horizontal plane, degrees
    pub slope: f64,
    /// Surface azimuth rotation measured from south, negative east, degrees
    pub azm_rotation: f64,
    /// Atmospheric refraction at sunrise and sunset, degrees (0.5667 is typical)
    pub atmos_refract: f64,
    pub function: OutputSelection,
}

impl Default for SpaInput {
    fn default() -> Self {
        Self {
            year: 0,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0.0,
            delta_ut1: 0.0,
            delta_t: 0.0,
            timezone: 0.0,
            longitude: 0.0,
            latitude: 0.0,
            elevation: 0.0,
            pressure: 0.0,
            temperature: 0.0,
            slope: 0.0,
            azm_rotation: 0.0,
            atmos_refract: 0.0,
            function: OutputSelection::All,
        }
    }
}

impl SpaInput {
    /// Fills the date, time and timezone fields from a chrono datetime.
    ///
    /// The timezone is the datetime's UTC offset at that instant, so
    /// daylight saving time is taken into account.
    pub fn set_datetime<Tz: TimeZone>(&mut self, datetime: &DateTime<Tz>) {
        self.year = datetime.year();
        self.month = datetime.month() as i32;
        self.day = datetime.day() as i32;
        self.hour = datetime.hour() as i32;
        self.minute = datetime.minute() as i32;
        self.second = f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1e9;
        self.timezone = f64::from(datetime.offset().fix().local_minus_utc()) / 3600.0;
    }

    /// The local date and time fields.
    pub fn calendar(&self) -> CalendarInstant {
        CalendarInstant {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }

    /// The location and atmosphere fields as an [`Observer`].
    pub fn observer(&self) -> Observer {
        Observer {
            longitude: self.longitude,
            latitude: self.latitude,
            elevation: self.elevation,
            pressure: self.pressure,
            temperature: self.temperature,
            atmos_refract: self.atmos_refract,
        }
    }
}

/// Every value computed on the way to the outputs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpaIntermediate {
    /// Julian day
    pub jd: f64,
    /// Julian century
    pub jc: f64,
    /// Julian ephemeris day
    pub jde: f64,
    /// Julian ephemeris century
    pub jce: f64,
    /// Julian ephemeris millennium
    pub jme: f64,

    /// Earth heliocentric longitude, degrees
    pub l: f64,
    /// Earth heliocentric latitude, degrees
    pub b: f64,
    /// Earth radius vector, AU
    pub r: f64,

    /// Geocentric longitude, degrees
    pub theta: f64,
    /// Geocentric latitude, degrees
    pub beta: f64,

    /// Mean elongation (moon-sun), degrees
    pub x0: f64,
    /// Mean anomaly (sun), degrees
    pub x1: f64,
    /// Mean anomaly (moon), degrees
    pub x2: f64,
    /// Argument latitude (moon), degrees
    pub x3: f64,
    /// Ascending longitude (moon), degrees
    pub x4: f64,

    /// Nutation longitude, degrees
    pub del_psi: f64,
    /// Nutation obliquity, degrees
    pub del_epsilon: f64,
    /// Ecliptic mean obliquity, arc seconds
    pub epsilon0: f64,
    /// Ecliptic true obliquity, degrees
    pub epsilon: f64,

    /// Aberration correction, degrees
    pub del_tau: f64,
    /// Apparent sun longitude, degrees
    pub lamda: f64,
    /// Greenwich mean sidereal time, degrees
    pub nu0: f64,
    /// Greenwich sidereal time, degrees
    pub nu: f64,

    /// Geocentric sun right ascension, degrees
    pub alpha: f64,
    /// Geocentric sun declination, degrees
    pub delta: f64,

    /// Observer hour angle, degrees
    pub h: f64,
    /// Sun equatorial horizontal parallax, degrees
    pub xi: f64,
    /// Sun right ascension parallax, degrees
    pub del_alpha: f64,
    /// Topocentric sun declination, degrees
    pub delta_prime: f64,
    /// Topocentric sun right ascension, degrees
    pub alpha_prime: f64,
    /// Topocentric local hour angle, degrees
    pub h_prime: f64,

    /// Topocentric elevation angle (uncorrected), degrees
    pub e0: f64,
    /// Atmospheric refraction correction, degrees
    pub del_e: f64,
    /// Topocentric elevation angle (corrected), degrees
    pub e: f64,

    /// Equation of time, minutes
    pub eot: f64,
    /// Sunrise hour angle, degrees
    pub srha: f64,
    /// Sunset hour angle, degrees
    pub ssha: f64,
    /// Sun transit altitude, degrees
    pub sta: f64,
}

impl SpaIntermediate {
    /// Records the position stages of one instant.
    pub(crate) fn record_position(&mut self, date: &JulianDate, sun: &GeocentricSun, topocentric: &TopocentricSun) {
        self.jd = date.jd;
        self.jc = date.jc;
        self.jde = date.jde;
        self.jce = date.jce;
        self.jme = date.jme;

        self.l = sun.heliocentric.longitude;
        self.b = sun.heliocentric.latitude;
        self.r = sun.heliocentric.radius;
        self.theta = sun.longitude;
        self.beta = sun.latitude;

        [self.x0, self.x1, self.x2, self.x3, self.x4] = sun.nutation.arguments.as_array();
        self.del_psi = sun.nutation.longitude;
        self.del_epsilon = sun.nutation.obliquity;
        self.epsilon0 = sun.nutation.mean_obliquity;
        self.epsilon = sun.nutation.true_obliquity;

        self.del_tau = sun.aberration;
        self.lamda = sun.apparent_longitude;
        self.nu0 = sun.mean_sidereal_time;
        self.nu = sun.sidereal_time;
        self.alpha = sun.right_ascension;
        self.delta = sun.declination;

        self.h = topocentric.hour_angle;
        self.xi = topocentric.equatorial_parallax;
        self.del_alpha = topocentric.right_ascension_parallax;
        self.delta_prime = topocentric.declination;
        self.alpha_prime = topocentric.right_ascension;
        self.h_prime = topocentric.hour_angle_prime;
        self.e0 = topocentric.elevation_uncorrected;
        self.del_e = topocentric.refraction;
        self.e = topocentric.elevation;
    }

    pub(crate) fn record_sun_events(&mut self, equation_of_time: f64, events: &SunRiseTransitSet) {
        self.eot = equation_of_time;
        self.srha = events.sunrise_hour_angle;
        self.ssha = events.sunset_hour_angle;
        self.sta = events.transit_altitude;
    }
}

/// Final results.
///
/// Fields not covered by the input's [`OutputSelection`] stay at zero and
/// `sun_events` stays `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpaOutput {
    /// Topocentric zenith angle, degrees
    pub zenith: f64,
    /// Topocentric azimuth angle westward from south, degrees (astronomers)
    pub azimuth_astro: f64,
    /// Topocentric azimuth angle eastward from north, degrees (navigators and solar radiation)
    pub azimuth: f64,
    /// Surface incidence angle, degrees
    pub incidence: f64,
    /// Local sun transit time, fractional hour
    pub suntransit: f64,
    /// Local sunrise time (+/- 30 seconds), fractional hour
    pub sunrise: f64,
    /// Local sunset time (+/- 30 seconds), fractional hour
    pub sunset: f64,
    /// The rise/transit/set result as a type, when it was computed.
    pub sun_events: Option<SunEvents>,
}

/// One solar position calculation: what goes in, what is computed, what comes out.
///
/// Fill `input`, call [`calculate`](crate::calculate), read `output`. The
/// record is plain data; concurrent calculations each need their own.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpaContext {
    pub input: SpaInput,
    pub intermediate: SpaIntermediate,
    pub output: SpaOutput,
}

impl SpaContext {
    /// A context holding `input`, with empty results.
    pub fn new(input: SpaInput) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    /// Clears intermediate values and outputs, keeping the inputs.
    pub fn reset_results(&mut self) {
        self.intermediate = SpaIntermediate::default();
        self.output = SpaOutput::default();
    }
}

struct LocalHours(f64);

impl fmt::Display for LocalHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == NO_EVENT {
            f.write_str("--:--:--")
        } else {
            write!(f, "{}", format_hours(self.0))
        }
    }
}

/// Multi-line report of the inputs and outputs.
impl fmt::Display for SpaContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = &self.input;
        let output = &self.output;

        writeln!(f, "Inputs:")?;
        writeln!(f)?;
        writeln!(
            f,
            "  {:02}/{:02}/{:02} {:02}:{:02}:{:02} GMT {}",
            input.year,
            input.month,
            input.day,
            input.hour,
            input.minute,
            input.second as i32,
            input.timezone
        )?;
        writeln!(f)?;
        writeln!(f, "  Latitude:      {:.2}", input.latitude)?;
        writeln!(f, "  Longitude:     {:.2}", input.longitude)?;
        writeln!(f, "  Elevation:     {:.2}", input.elevation)?;
        writeln!(f, "  Pressure:      {:.2}", input.pressure)?;
        writeln!(f, "  Temperature:   {:.2}", input.temperature)?;
        writeln!(f)?;
        writeln!(f, "  DeltaUT1:      {:.2}", input.delta_ut1)?;
        writeln!(f, "  DeltaT:        {:.2}", input.delta_t)?;
        writeln!(f, "  Slope:         {:.2}", input.slope)?;
        writeln!(f, "  Azm rotation:  {:.2}", input.azm_rotation)?;
        writeln!(f, "  Atmos refract: {:.2}", input.atmos_refract)?;
        writeln!(f)?;
        writeln!(f, "Outputs:")?;
        writeln!(f)?;
        writeln!(f, "  Zenith:        {:.2} degrees", output.zenith)?;
        writeln!(f, "  Azimuth:       {:.2} degrees", output.azimuth)?;
        writeln!(f, "  Incidence:     {:.2} degrees", output.incidence)?;
        writeln!(f)?;
        writeln!(f, "  Sunrise:       {} Local", LocalHours(output.sunrise))?;
        writeln!(f, "  Sunset:        {} Local", LocalHours(output.sunset))?;
        write!(f, "  Transit:       {} Local", LocalHours(output.suntransit))
    }
}
