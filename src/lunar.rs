//! Lunar phase and low-precision lunar position.
//!
//! The model sums a handful of periodic terms for the synodic (phase),
//! anomalistic (distance), nodal (latitude) and sidereal (longitude) cycles of
//! the Moon. Each cycle is located by the fraction of a period elapsed since a
//! reference Julian date. Accuracy is roughly a day in phase, a few degrees in
//! position and a few percent in distance, which is enough for phase display.

#![allow(clippy::unreadable_literal)]

use crate::math::{TWO_PI, cos, floor, normalize_fraction, sin};
use crate::time::JulianMoment;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Mean synodic month in days.
pub const SYNODIC_PERIOD: f64 = 29.530589;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Julian date of a reference new moon.
const NEW_MOON_EPOCH: f64 = 2451550.1;

/// Anomalistic month and the Julian date of a reference perigee.
const ANOMALISTIC_PERIOD: f64 = 27.55454988;
const PERIGEE_EPOCH: f64 = 2451562.2;

/// Draconic month and the Julian date of a reference ascending node.
const NODAL_PERIOD: f64 = 27.212220817;
const NODE_EPOCH: f64 = 2451565.2;

/// Sidereal month and its reference Julian date.
const SIDEREAL_PERIOD: f64 = 27.321582241;
const SIDEREAL_EPOCH: f64 = 2451555.8;

/// Named phase of the Moon, one of eight equal slices of the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoonPhase {
    /// New moon
    New,
    /// Waxing crescent
    WaxingCrescent,
    /// First quarter
    FirstQuarter,
    /// Waxing gibbous
    WaxingGibbous,
    /// Full moon
    Full,
    /// Waning gibbous
    WaningGibbous,
    /// Last quarter
    LastQuarter,
    /// Waning crescent
    WaningCrescent,
}

impl MoonPhase {
    /// Classifies a synodic age in days.
    ///
    /// Each named phase is centred on its eighth of the month, so ages within
    /// 1/16 of a month either side of new moon are [`MoonPhase::New`].
    #[must_use]
    pub fn from_synodic_age(synodic_age: f64) -> Self {
        let fraction = normalize_fraction(synodic_age / SYNODIC_PERIOD);
        match (floor(fraction * 8.0 + 0.5) as u8) & 7 {
            0 => Self::New,
            1 => Self::WaxingCrescent,
            2 => Self::FirstQuarter,
            3 => Self::WaxingGibbous,
            4 => Self::Full,
            5 => Self::WaningGibbous,
            6 => Self::LastQuarter,
            _ => Self::WaningCrescent,
        }
    }

    /// Human readable phase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "new moon",
            Self::WaxingCrescent => "waxing crescent",
            Self::FirstQuarter => "first quarter",
            Self::WaxingGibbous => "waxing gibbous",
            Self::Full => "full moon",
            Self::WaningGibbous => "waning gibbous",
            Self::LastQuarter => "last quarter",
            Self::WaningCrescent => "waning crescent",
        }
    }
}

/// Phase and position of the Moon at one Julian moment.
///
/// All quantities are computed once at construction; the value is immutable
/// and cheap to copy.
///
/// # Example
/// ```
/// # use solar_lunar::{LunarPhase, time::JulianMoment};
/// let phase = LunarPhase::new(JulianMoment::new(2_451_550.1));
/// assert_eq!(phase.synodic_age(), 0.0);
/// assert_eq!(phase.illuminated_ratio(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarPhase {
    julian_moment: JulianMoment,
    synodic_age: f64,
    distance_in_earth_radii: f64,
    ecliptic_latitude: f64,
    ecliptic_longitude: f64,
    phase_angle: f64,
    illuminated_ratio: f64,
}

impl LunarPhase {
    /// Computes the Moon's phase and position at `moment`.
    #[must_use]
    pub fn new(moment: JulianMoment) -> Self {
        let j = moment.value();

        let synodic_age = normalize_fraction((j - NEW_MOON_EPOCH) / SYNODIC_PERIOD) * SYNODIC_PERIOD;

        // The harmonic terms take the age in days times 2π, not the age as a
        // fraction of the month.
        let age_radians = synodic_age * TWO_PI;
        let anomaly = normalize_fraction((j - PERIGEE_EPOCH) / ANOMALISTIC_PERIOD) * TWO_PI;

        let distance_in_earth_radii = 60.4
            - 3.3 * cos(anomaly)
            - 0.6 * cos(2.0 * age_radians - anomaly)
            - 0.5 * cos(2.0 * age_radians);

        let nodal_phase = normalize_fraction((j - NODE_EPOCH) / NODAL_PERIOD) * TWO_PI;
        let ecliptic_latitude = 5.1 * sin(nodal_phase);

        let sidereal_phase = normalize_fraction((j - SIDEREAL_EPOCH) / SIDEREAL_PERIOD);
        let ecliptic_longitude = 360.0 * sidereal_phase
            + 6.3 * sin(anomaly)
            + 1.3 * sin(2.0 * age_radians - anomaly)
            + 0.7 * sin(2.0 * age_radians);

        let mut phase_angle = synodic_age * (TWO_PI / SYNODIC_PERIOD);
        if phase_angle > TWO_PI {
            phase_angle -= TWO_PI;
        }

        let illuminated_ratio = 0.5 * (1.0 - cos(phase_angle));

        Self {
            julian_moment: moment,
            synodic_age,
            distance_in_earth_radii,
            ecliptic_latitude,
            ecliptic_longitude,
            phase_angle,
            illuminated_ratio,
        }
    }

    /// Computes the Moon's phase and position at a chrono instant.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::new(JulianMoment::from_datetime(datetime))
    }

    /// Gets the Julian moment the phase was computed for.
    #[must_use]
    pub const fn julian_moment(&self) -> JulianMoment {
        self.julian_moment
    }

    /// Gets the Moon's age in days since the last new moon (0 to 29.53).
    #[must_use]
    pub const fn synodic_age(&self) -> f64 {
        self.synodic_age
    }

    /// Gets the Earth-Moon distance in Earth radii.
    #[must_use]
    pub const fn distance_in_earth_radii(&self) -> f64 {
        self.distance_in_earth_radii
    }

    /// Gets the Earth-Moon distance in miles.
    #[must_use]
    pub fn distance_in_miles(&self) -> f64 {
        self.distance_in_earth_radii * EARTH_RADIUS_MILES
    }

    /// Gets the ecliptic latitude in degrees (within ±5.1°).
    #[must_use]
    pub const fn ecliptic_latitude(&self) -> f64 {
        self.ecliptic_latitude
    }

    /// Gets the ecliptic longitude in degrees.
    ///
    /// The value is not wrapped and may fall slightly outside [0, 360).
    #[must_use]
    pub const fn ecliptic_longitude(&self) -> f64 {
        self.ecliptic_longitude
    }

    /// Gets the phase angle in radians (0 at new moon, π at full moon).
    #[must_use]
    pub const fn phase_angle(&self) -> f64 {
        self.phase_angle
    }

    /// Gets the illuminated fraction of the disc (0 to 1).
    #[must_use]
    pub const fn illuminated_ratio(&self) -> f64 {
        self.illuminated_ratio
    }

    /// Gets the named phase.
    #[must_use]
    pub fn phase(&self) -> MoonPhase {
        MoonPhase::from_synodic_age(self.synodic_age)
    }

    /// Checks if the lit portion is growing (first half of the synodic month).
    #[must_use]
    pub fn is_waxing(&self) -> bool {
        self.synodic_age < SYNODIC_PERIOD / 2.0
    }
}

impl From<JulianMoment> for LunarPhase {
    fn from(moment: JulianMoment) -> Self {
        Self::new(moment)
    }
}

/// Computes the Moon's phase and position at a chrono instant.
///
/// # Example
/// ```
/// # #[cfg(feature = "chrono")] {
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2024, 4, 23, 23, 49, 0).unwrap();
/// let moon = solar_lunar::lunar_phase(&instant);
/// assert!(moon.illuminated_ratio() > 0.99);
/// # }
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn lunar_phase<Tz: TimeZone>(datetime: &DateTime<Tz>) -> LunarPhase {
    LunarPhase::from_datetime(datetime)
}
