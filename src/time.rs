//! Julian moment conversion and ΔT estimation.
//!
//! A [`JulianMoment`] is a continuous Julian date anchored on 2001-01-01
//! 00:00 UTC, which is JD 2451910.5. Both the lunar model and the calendar
//! based constructors agree on that anchor.

#![allow(clippy::unreadable_literal)]

use crate::error::{InputField, check_range};
use crate::math::{floor, polynomial, round};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Seconds per day (86,400)
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date of the reference epoch, 2001-01-01 00:00:00 UTC.
pub const REFERENCE_EPOCH_JD: f64 = 2_451_910.5;

/// Seconds between the Unix epoch and the reference epoch.
pub const REFERENCE_EPOCH_UNIX_SECONDS: i64 = 978_307_200;

/// First Julian date of the Gregorian calendar (1582-10-15).
const GREGORIAN_START_JD: f64 = 2_299_161.0;

/// A continuous Julian date (days and fraction of day since the Julian epoch).
///
/// # Example
/// ```
/// # use solar_lunar::time::JulianMoment;
/// let moment = JulianMoment::from_seconds_since_reference(0.0);
/// assert_eq!(moment.value(), 2_451_910.5);
/// assert_eq!(moment.julian_day(), 2_451_911);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianMoment(f64);

impl JulianMoment {
    /// Wraps a raw Julian date.
    #[must_use]
    pub const fn new(julian_date: f64) -> Self {
        Self(julian_date)
    }

    /// Converts seconds relative to 2001-01-01 00:00:00 UTC.
    #[must_use]
    pub fn from_seconds_since_reference(seconds: f64) -> Self {
        Self(seconds / SECONDS_PER_DAY + REFERENCE_EPOCH_JD)
    }

    /// Converts seconds relative to the Unix epoch (1970-01-01 00:00:00 UTC).
    #[must_use]
    pub fn from_unix_seconds(seconds: f64) -> Self {
        Self::from_seconds_since_reference(seconds - REFERENCE_EPOCH_UNIX_SECONDS as f64)
    }

    /// Converts a timezone-aware chrono `DateTime`.
    ///
    /// Whole seconds are subtracted in integer arithmetic before converting to
    /// days, so instants near the reference epoch keep full precision.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let whole = datetime.timestamp() - REFERENCE_EPOCH_UNIX_SECONDS;
        let seconds = whole as f64 + f64::from(datetime.timestamp_subsec_nanos()) / 1e9;
        Self::from_seconds_since_reference(seconds)
    }

    /// Converts civil calendar fields in a zone `timezone` hours east of UTC.
    ///
    /// Dates before 1582-10-15 are interpreted in the Julian calendar, as in
    /// Meeus, "Astronomical Algorithms", chapter 7.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a month outside 1-12, a day outside 1-31,
    /// an hour outside 0-24, a minute outside 0-59, a second outside [0, 60),
    /// or a timezone outside ±18 hours.
    ///
    /// # Example
    /// ```
    /// # use solar_lunar::time::JulianMoment;
    /// let moment = JulianMoment::from_calendar(2001, 1, 1, 0, 0, 0.0, 0.0).unwrap();
    /// assert_eq!(moment.value(), 2_451_910.5);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        timezone: f64,
    ) -> Result<Self> {
        check_range(InputField::Month, f64::from(month), 1.0..=12.0)?;
        check_range(InputField::Day, f64::from(day), 1.0..=31.0)?;
        check_range(InputField::Hour, f64::from(hour), 0.0..=24.0)?;
        check_range(InputField::Minute, f64::from(minute), 0.0..=59.0)?;
        check_range(InputField::Second, second, 0.0..60.0)?;
        check_range(InputField::Timezone, timezone, -18.0..=18.0)?;

        let mut y = f64::from(year);
        let mut m = f64::from(month);
        if month < 3 {
            y -= 1.0;
            m += 12.0;
        }

        let day_fraction =
            (f64::from(hour) - timezone + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;
        let d = f64::from(day) + day_fraction;

        let mut jd = floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + d - 1524.5;
        if jd >= GREGORIAN_START_JD {
            let a = floor(y / 100.0);
            jd += 2.0 - a + floor(a / 4.0);
        }

        Ok(Self(jd))
    }

    /// Gets the Julian date value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Gets the Julian day number, rounded to the nearest integer.
    #[must_use]
    pub fn julian_day(&self) -> i64 {
        round(self.0) as i64
    }

    /// Gets seconds relative to 2001-01-01 00:00:00 UTC.
    #[must_use]
    pub fn seconds_since_reference(&self) -> f64 {
        (self.0 - REFERENCE_EPOCH_JD) * SECONDS_PER_DAY
    }

    /// Returns the moment shifted by a (possibly fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }
}

impl From<JulianMoment> for f64 {
    fn from(moment: JulianMoment) -> Self {
        moment.0
    }
}

/// ΔT (Delta T) estimation.
///
/// ΔT is the difference between Terrestrial Time and Universal Time.
pub struct DeltaT;

impl DeltaT {
    /// Estimates ΔT in seconds for a calendar year.
    ///
    /// `ΔT = 62.92 + 0.32217·(y − 2000) + 0.005589·(y − 2000)²`. The fit is only
    /// good to a few seconds around the 2000s; supply a measured ΔT for
    /// historical or far-future dates.
    ///
    /// # Example
    /// ```
    /// # use solar_lunar::time::DeltaT;
    /// assert!((DeltaT::estimate(2000.0) - 62.92).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn estimate(year: f64) -> f64 {
        polynomial(&[62.92, 0.32217, 0.005589], year - 2000.0)
    }
}
