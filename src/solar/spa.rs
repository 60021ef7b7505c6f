//! NREL SPA core backed by the `solar-positioning` crate.
//!
//! Reference: Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//! Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>

use core::ops::Bound;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use solar_positioning::{RefractionCorrection, spa};

use super::SolarPositionCore;
use crate::error::{InputField, check_magnitude, check_range};
use crate::math::{acos, cos, degrees_to_radians, floor, normalize_fraction, radians_to_degrees, round, sin};
use crate::time::SECONDS_PER_DAY;
use crate::types::{OutputSelector, SolarPositionInput, SolarPositionOutput, SurfaceOrientation};
use crate::{Error, Result};

/// Apparent radius of the sun in degrees.
const SUN_RADIUS: f64 = 0.26667;

/// The NREL Solar Position Algorithm.
///
/// Validates the input record field by field, then computes the topocentric
/// position with refraction from pressure and temperature. The incidence
/// angle and the day's sunrise, transit and sunset are only computed when the
/// selector asks for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spa;

impl SolarPositionCore for Spa {
    fn calculate(
        &self,
        input: &SolarPositionInput,
        selector: OutputSelector,
    ) -> Result<SolarPositionOutput> {
        validate_input(input, selector)?;

        let date = NaiveDate::from_ymd_opt(input.year, input.month, input.day)
            .ok_or_else(|| Error::invalid_input(InputField::Day, f64::from(input.day)))?;
        let local = local_datetime(input, date)?;
        let location = &input.location;

        let refraction =
            RefractionCorrection::new(input.atmosphere.pressure, input.atmosphere.temperature)?;
        let position = spa::solar_position(
            local,
            location.latitude,
            location.longitude,
            location.elevation,
            input.delta_t,
            Some(refraction),
        )?;

        let mut output =
            SolarPositionOutput::from_zenith_azimuth(position.zenith_angle(), position.azimuth());

        if selector.includes_incidence() {
            output.incidence = incidence_angle(output.zenith, output.azimuth, &input.orientation);
        }

        if selector.includes_rise_transit_set() {
            let (transit, sunrise, sunset) = rise_transit_set(input, date)?;
            output.solar_transit = transit;
            output.sunrise = sunrise;
            output.sunset = sunset;
        }

        Ok(output)
    }
}

/// Checks every field of an input record against the ranges SPA accepts.
///
/// Fields are checked in the order of the NREL reference implementation and
/// the first invalid one is reported. Pressure and temperature are checked
/// right after the calendar fields. Slope and surface rotation are only
/// checked when the selector includes the incidence angle.
///
/// # Errors
/// Returns `InvalidInput` naming the first out-of-range field. NaN is out of
/// range for every field.
pub fn validate_input(input: &SolarPositionInput, selector: OutputSelector) -> Result<()> {
    check_range(InputField::Year, f64::from(input.year), -2000.0..=6000.0)?;
    check_range(InputField::Month, f64::from(input.month), 1.0..=12.0)?;
    check_range(InputField::Day, f64::from(input.day), 1.0..=31.0)?;
    check_range(InputField::Hour, f64::from(input.hour), 0.0..=23.0)?;
    check_range(InputField::Minute, f64::from(input.minute), 0.0..=59.0)?;
    check_range(InputField::Second, input.second, 0.0..60.0)?;
    check_range(
        InputField::Pressure,
        input.atmosphere.pressure,
        (Bound::Excluded(0.0), Bound::Included(2000.0)),
    )?;
    check_range(
        InputField::Temperature,
        input.atmosphere.temperature,
        -273.15..=100.0,
    )?;
    check_magnitude(InputField::DeltaT, input.delta_t, 8000.0)?;
    check_magnitude(InputField::Timezone, input.timezone, 18.0)?;
    check_magnitude(InputField::Longitude, input.location.longitude, 180.0)?;
    check_magnitude(InputField::Latitude, input.location.latitude, 90.0)?;
    check_magnitude(
        InputField::AtmosphericRefraction,
        input.atmosphere.atmospheric_refraction,
        5.0,
    )?;
    check_range(
        InputField::Elevation,
        input.location.elevation,
        -6_500_000.0..=f64::MAX,
    )?;
    if selector.includes_incidence() {
        check_magnitude(InputField::Slope, input.orientation.slope, 360.0)?;
        check_magnitude(InputField::SurfaceRotation, input.orientation.rotation, 360.0)?;
    }
    Ok(())
}

fn local_datetime(input: &SolarPositionInput, date: NaiveDate) -> Result<DateTime<FixedOffset>> {
    let timezone_error = || Error::invalid_input(InputField::Timezone, input.timezone);
    let offset = FixedOffset::east_opt(round(input.timezone * 3600.0) as i32)
        .ok_or_else(timezone_error)?;

    let whole_seconds = floor(input.second);
    let nanoseconds = (((input.second - whole_seconds) * 1e9) as u32).min(999_999_999);
    let naive = date
        .and_hms_nano_opt(input.hour, input.minute, whole_seconds as u32, nanoseconds)
        .ok_or_else(|| Error::invalid_input(InputField::Second, input.second))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(timezone_error)
}

/// Angle between the surface normal and the direction of the sun, in degrees.
fn incidence_angle(zenith: f64, azimuth: f64, orientation: &SurfaceOrientation) -> f64 {
    let zenith_rad = degrees_to_radians(zenith);
    let slope_rad = degrees_to_radians(orientation.slope);
    // Astronomers' azimuth runs westward from south
    let astro_azimuth_rad = degrees_to_radians(azimuth - 180.0);
    let rotation_rad = degrees_to_radians(orientation.rotation);

    let cos_incidence = cos(zenith_rad) * cos(slope_rad)
        + sin(slope_rad) * sin(zenith_rad) * cos(astro_azimuth_rad - rotation_rad);
    radians_to_degrees(acos(cos_incidence.clamp(-1.0, 1.0)))
}

/// Local fractional hours of transit, sunrise and sunset for the input's civil date.
///
/// Sunrise and sunset are NaN on polar days and nights.
fn rise_transit_set(input: &SolarPositionInput, date: NaiveDate) -> Result<(f64, f64, f64)> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let horizon = -(SUN_RADIUS + input.atmosphere.atmospheric_refraction);

    let events = spa::sunrise_sunset(
        midnight,
        input.location.latitude,
        input.location.longitude,
        input.delta_t,
        horizon,
    )?;

    let to_local = |event: &DateTime<Utc>| local_hours(event, &midnight, input.timezone);
    let transit = to_local(events.transit());
    let sunrise = events.sunrise().map_or(f64::NAN, to_local);
    let sunset = events.sunset().map_or(f64::NAN, to_local);

    Ok((transit, sunrise, sunset))
}

/// Converts an event to local hours in [0, 24), wrapping into the local day.
fn local_hours(event: &DateTime<Utc>, midnight: &DateTime<Utc>, timezone: f64) -> f64 {
    let elapsed_ms = event.signed_duration_since(*midnight).num_milliseconds();
    let day_fraction = elapsed_ms as f64 / (SECONDS_PER_DAY * 1000.0);
    24.0 * normalize_fraction(day_fraction + timezone / 24.0)
}
