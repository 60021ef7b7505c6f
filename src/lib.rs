//! # Solar and Lunar Positioning Library
//!
//! Sun position, daily solar events and moon phase for an instant and an observer location.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library provides:
//! - **Lunar phase**: A fast analytic model of the moon's synodic age, distance, ecliptic
//!   coordinates and illumination, good to about a day in phase
//! - **Solar position**: An adapter that assembles NREL SPA input records from timezone-aware
//!   instants and decodes zenith, azimuth, incidence, sunrise, transit and sunset
//! - **Tracking angle**: The rotation of a single-axis tracker following the sun
//!
//! The solar position itself is computed by the NREL Solar Position Algorithm from the
//! [`solar_positioning`] crate (±0.0003°, years -2000 to 6000).
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based API and the solar position adapter
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: Serialize and deserialize the value types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-lunar = "0.1"
//!
//! # Lunar phase and tracking angle only, numeric API
//! solar-lunar = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # no_std + chrono
//! solar-lunar = { version = "0.1", default-features = false, features = ["libm", "chrono"] }
//! ```
//!
//! ## References
//!
//! - Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//!   Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.
//!
//! ## Quick Start
//!
//! ### Lunar Phase (numeric API)
//! ```rust
//! use solar_lunar::{JulianMoment, LunarPhase, MoonPhase};
//!
//! // 2024-04-08 18:21 UTC, the new moon of the total solar eclipse
//! let moment = JulianMoment::from_unix_seconds(1_712_600_460.0);
//! let moon = LunarPhase::new(moment);
//!
//! assert_eq!(moon.phase(), MoonPhase::New);
//! assert!(moon.illuminated_ratio() < 0.02);
//! println!("Distance: {:.0} miles", moon.distance_in_miles());
//! ```
//!
//! ### Solar Position (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use solar_lunar::{CalculationOptions, Location, OutputSelector, SolarPositionAdapter};
//!
//! // Vienna at noon
//! let datetime = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let vienna = Location::new(16.37, 48.21, 190.0);
//!
//! let output = SolarPositionAdapter::new()
//!     .calculate(&datetime, &vienna, &CalculationOptions::default(), OutputSelector::All)
//!     .unwrap();
//!
//! println!("Azimuth: {:.3}°", output.azimuth);
//! println!("Elevation: {:.3}°", output.elevation);
//! println!("Sunrise: {:.3} h, sunset: {:.3} h", output.sunrise, output.sunset);
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Azimuth180**: 0° = South, measured westward (-180° to 180°)
//! - **Zenith angle**: 0° = directly overhead (zenith), 90° = horizon (0° to 180°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of decoded values in tests
)]

// Public API exports
pub use crate::error::{Error, InputField, Result};
#[cfg(feature = "chrono")]
pub use crate::lunar::lunar_phase;
pub use crate::lunar::{LunarPhase, MoonPhase};
#[cfg(feature = "chrono")]
pub use crate::solar::{
    CalculationOptions, SolarPositionAdapter, SolarPositionCore, Spa, solar_position,
};
pub use crate::time::{DeltaT, JulianMoment};
pub use crate::tracking::tracking_angle;
pub use crate::types::{
    AtmosphericParameters, Location, OutputSelector, SolarPositionInput, SolarPositionOutput,
    SurfaceOrientation,
};

// Model modules
pub mod lunar;
#[cfg(feature = "chrono")]
pub mod solar;
pub mod tracking;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_same_instant_in_different_zones() {
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();
        let location = Location::at_sea_level(-122.4194, 37.7749);

        let position1 = solar_position(datetime_fixed, &location, OutputSelector::ZenithAzimuth)
            .unwrap();
        let position2 =
            solar_position(datetime_utc, &location, OutputSelector::ZenithAzimuth).unwrap();

        // Both should produce identical positions
        assert!((position1.azimuth - position2.azimuth).abs() < 1e-10);
        assert!((position1.zenith - position2.zenith).abs() < 1e-10);

        assert!((0.0..=360.0).contains(&position1.azimuth));
        assert!((0.0..=180.0).contains(&position1.zenith));

        let moon1 = lunar_phase(&datetime_fixed);
        let moon2 = lunar_phase(&datetime_utc);
        assert_eq!(moon1, moon2);
    }

    #[test]
    fn test_tracking_angle_from_solar_position() {
        let datetime = Utc.with_ymd_and_hms(2023, 6, 21, 20, 0, 0).unwrap();
        let location = Location::at_sea_level(-122.4194, 37.7749);
        let position = solar_position(datetime, &location, OutputSelector::ZenithAzimuth).unwrap();

        let angle = tracking_angle(position.azimuth, position.zenith).unwrap();
        assert!(angle > 0.0 && angle < 90.0);
        assert!(angle <= position.elevation + 1e-9);
    }
}
