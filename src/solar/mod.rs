//! Solar position adapter.
//!
//! Turns a timezone-aware instant and an observer location into a
//! [`SolarPositionInput`] record, hands it to a [`SolarPositionCore`] and
//! returns the decoded [`SolarPositionOutput`]. The default core, [`Spa`], is
//! the NREL Solar Position Algorithm from the `solar-positioning` crate.
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use solar_lunar::{Location, OutputSelector, solar_position};
//!
//! let datetime = FixedOffset::west_opt(7 * 3600)
//!     .unwrap()
//!     .with_ymd_and_hms(2003, 10, 17, 12, 30, 30)
//!     .unwrap();
//! let golden = Location::new(-105.1786, 39.742476, 1830.14);
//!
//! let output = solar_position(datetime, &golden, OutputSelector::All).unwrap();
//! assert!((output.zenith - 50.1).abs() < 0.1);
//! assert!((output.sunrise - 6.21).abs() < 0.05);
//! ```

mod spa;

pub use spa::{Spa, validate_input};

use crate::time::DeltaT;
use crate::types::{
    AtmosphericParameters, Location, OutputSelector, SolarPositionInput, SolarPositionOutput,
    SurfaceOrientation,
};
use crate::Result;
use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

/// A solar position algorithm with the NREL SPA input/output contract.
///
/// Implementations compute the fields requested by the selector and report
/// an invalid input field as [`crate::Error::InvalidInput`]; they must never
/// return a numeric result for input they consider invalid.
pub trait SolarPositionCore {
    /// Computes the solar position for one fully assembled input record.
    ///
    /// # Errors
    /// Returns `InvalidInput` naming the first field outside the accepted range.
    fn calculate(
        &self,
        input: &SolarPositionInput,
        selector: OutputSelector,
    ) -> Result<SolarPositionOutput>;
}

impl<C: SolarPositionCore + ?Sized> SolarPositionCore for &C {
    fn calculate(
        &self,
        input: &SolarPositionInput,
        selector: OutputSelector,
    ) -> Result<SolarPositionOutput> {
        (**self).calculate(input, selector)
    }
}

/// Optional parameters of a solar position query.
///
/// Defaults to standard atmosphere (1000 mbar, 20 °C, 0.5667° refraction),
/// a horizontal surface and an estimated ΔT.
///
/// # Example
/// ```
/// # use solar_lunar::{AtmosphericParameters, CalculationOptions, SurfaceOrientation};
/// let options = CalculationOptions::default()
///     .with_atmosphere(AtmosphericParameters::new(820.0, 11.0, 0.5667))
///     .with_orientation(SurfaceOrientation::new(30.0, -10.0))
///     .with_delta_t(67.0);
/// assert_eq!(options.delta_t, Some(67.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculationOptions {
    /// Atmospheric conditions
    pub atmosphere: AtmosphericParameters,
    /// Surface orientation for the incidence angle
    pub orientation: SurfaceOrientation,
    /// ΔT in seconds; estimated from the year when `None`
    pub delta_t: Option<f64>,
}

impl CalculationOptions {
    /// Sets the atmospheric conditions.
    #[must_use]
    pub const fn with_atmosphere(mut self, atmosphere: AtmosphericParameters) -> Self {
        self.atmosphere = atmosphere;
        self
    }

    /// Sets the surface orientation.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: SurfaceOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets an explicit ΔT in seconds.
    #[must_use]
    pub const fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = Some(delta_t);
        self
    }
}

impl SolarPositionInput {
    /// Assembles the input record for an instant.
    ///
    /// Calendar fields and the UTC offset come from the datetime's own
    /// timezone. ΔT is taken from `options`, or estimated with
    /// [`DeltaT::estimate`] for the calendar year when absent.
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &DateTime<Tz>,
        location: &Location,
        options: &CalculationOptions,
    ) -> Self {
        let year = datetime.year();
        let timezone = f64::from(datetime.offset().fix().local_minus_utc()) / 3600.0;
        // Leap seconds are folded into the last representable instant of the minute
        let nanosecond = datetime.nanosecond().min(999_999_999);
        let second = f64::from(datetime.second()) + f64::from(nanosecond) / 1e9;

        let delta_t = options.delta_t.unwrap_or_else(|| {
            let estimate = DeltaT::estimate(f64::from(year));
            log::debug!("estimated ΔT {estimate:.3} s for year {year}");
            estimate
        });

        Self {
            year,
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second,
            timezone,
            delta_t,
            location: *location,
            atmosphere: options.atmosphere,
            orientation: options.orientation,
        }
    }
}

/// Computes solar positions through a [`SolarPositionCore`].
///
/// The adapter holds no state besides its core; one adapter can serve any
/// number of queries, from any number of threads if the core allows it.
#[derive(Debug, Clone, Default)]
pub struct SolarPositionAdapter<C = Spa> {
    core: C,
}

impl SolarPositionAdapter<Spa> {
    /// Creates an adapter backed by the NREL SPA core.
    #[must_use]
    pub const fn new() -> Self {
        Self { core: Spa }
    }
}

impl<C: SolarPositionCore> SolarPositionAdapter<C> {
    /// Creates an adapter backed by a custom core.
    #[must_use]
    pub const fn with_core(core: C) -> Self {
        Self { core }
    }

    /// Gets the core.
    #[must_use]
    pub const fn core(&self) -> &C {
        &self.core
    }

    /// Computes the solar position for an instant and location.
    ///
    /// # Errors
    /// Returns `InvalidInput` naming the rejected field when the core refuses
    /// the assembled input, or `Core` if the algorithm itself fails.
    pub fn calculate<Tz: TimeZone>(
        &self,
        datetime: &DateTime<Tz>,
        location: &Location,
        options: &CalculationOptions,
        selector: OutputSelector,
    ) -> Result<SolarPositionOutput> {
        let input = SolarPositionInput::from_datetime(datetime, location, options);
        self.calculate_input(&input, selector)
    }

    /// Computes the solar position for an already assembled input record.
    ///
    /// # Errors
    /// Returns whatever error the core reports for the record.
    pub fn calculate_input(
        &self,
        input: &SolarPositionInput,
        selector: OutputSelector,
    ) -> Result<SolarPositionOutput> {
        log::trace!("solar position query {input:?} ({selector:?})");
        self.core
            .calculate(input, selector)
            .inspect_err(|err| log::debug!("solar position core rejected query: {err}"))
    }
}

/// Computes the solar position with default options and the SPA core.
///
/// # Errors
/// Returns `InvalidInput` for an out-of-range location or date.
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    location: &Location,
    selector: OutputSelector,
) -> Result<SolarPositionOutput> {
    SolarPositionAdapter::new().calculate(
        &datetime,
        location,
        &CalculationOptions::default(),
        selector,
    )
}
