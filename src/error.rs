//! Error types for solar and lunar calculations.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// An input field of a solar position query.
///
/// Each field carries the distinct status code an NREL SPA style core reports
/// when that field is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputField {
    /// Calendar year
    Year,
    /// Calendar month
    Month,
    /// Day of month
    Day,
    /// Hour of day
    Hour,
    /// Minute of hour
    Minute,
    /// Second of minute
    Second,
    /// ΔT (TT − UT1) in seconds
    DeltaT,
    /// Offset from UTC in hours
    Timezone,
    /// Observer longitude
    Longitude,
    /// Observer latitude
    Latitude,
    /// Atmospheric refraction at sunrise/sunset
    AtmosphericRefraction,
    /// Observer elevation
    Elevation,
    /// Annual average local pressure
    Pressure,
    /// Surface slope
    Slope,
    /// Surface azimuth rotation
    SurfaceRotation,
    /// Annual average local temperature
    Temperature,
}

impl InputField {
    const ALL: [Self; 16] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::DeltaT,
        Self::Timezone,
        Self::Longitude,
        Self::Latitude,
        Self::AtmosphericRefraction,
        Self::Elevation,
        Self::Pressure,
        Self::Slope,
        Self::SurfaceRotation,
        Self::Temperature,
    ];

    /// Gets the nonzero status code reported for this field.
    #[must_use]
    pub const fn status_code(self) -> i32 {
        match self {
            Self::Year => 1,
            Self::Month => 2,
            Self::Day => 3,
            Self::Hour => 4,
            Self::Minute => 5,
            Self::Second => 6,
            Self::DeltaT => 7,
            Self::Timezone => 8,
            Self::Longitude => 9,
            Self::Latitude => 10,
            Self::AtmosphericRefraction => 11,
            Self::Elevation => 12,
            Self::Pressure => 13,
            Self::Slope => 14,
            Self::SurfaceRotation => 15,
            Self::Temperature => 16,
        }
    }

    /// Looks up the field identified by a nonzero status code.
    #[must_use]
    pub fn from_status_code(code: i32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.status_code() == code)
    }

    /// Human readable field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::DeltaT => "delta T",
            Self::Timezone => "timezone",
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
            Self::AtmosphericRefraction => "atmospheric refraction",
            Self::Elevation => "elevation",
            Self::Pressure => "pressure",
            Self::Slope => "slope",
            Self::SurfaceRotation => "surface rotation",
            Self::Temperature => "temperature",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur during solar position and tracking calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An input field is outside the range the solar position core accepts.
    InvalidInput {
        /// The offending field.
        field: InputField,
        /// The rejected value.
        value: f64,
    },
    /// The tracking angle is undefined for the given sun position.
    DomainSingularity {
        /// Azimuth passed to the tracking calculation (degrees).
        azimuth: f64,
        /// Zenith angle passed to the tracking calculation (degrees).
        zenith: f64,
    },
    /// The solar position core failed after input validation.
    Core(solar_positioning::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, value } => {
                write!(f, "invalid {field} {value} (status code {})", field.status_code())
            }
            Self::DomainSingularity { azimuth, zenith } => {
                write!(
                    f,
                    "tracking angle undefined for azimuth {azimuth}° and zenith {zenith}°"
                )
            }
            Self::Core(err) => write!(f, "solar position core error: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(err) => Some(err),
            _ => None,
        }
    }
}

impl From<solar_positioning::Error> for Error {
    fn from(err: solar_positioning::Error) -> Self {
        Self::Core(err)
    }
}

impl Error {
    /// Creates an invalid input error for the given field.
    #[must_use]
    pub const fn invalid_input(field: InputField, value: f64) -> Self {
        Self::InvalidInput { field, value }
    }

    /// Creates a tracking angle singularity error.
    #[must_use]
    pub const fn domain_singularity(azimuth: f64, zenith: f64) -> Self {
        Self::DomainSingularity { azimuth, zenith }
    }

    /// Decodes a numeric core status into a result.
    ///
    /// Status `0` is success. Any other known code becomes
    /// [`Error::InvalidInput`] for its field; unknown codes are reported as a
    /// computation failure rather than dropped.
    ///
    /// # Errors
    /// Returns the decoded error for every nonzero status.
    pub fn from_status_code(code: i32, value: f64) -> Result<()> {
        if code == 0 {
            return Ok(());
        }
        match InputField::from_status_code(code) {
            Some(field) => Err(Self::invalid_input(field, value)),
            None => Err(Self::Core(solar_positioning::Error::computation_error(
                "unknown status code from solar position core",
            ))),
        }
    }

    /// Gets the invalid field, if this is an input error.
    #[must_use]
    pub const fn field(&self) -> Option<InputField> {
        match self {
            Self::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Checks that `value` lies within `range`, reporting `field` otherwise.
///
/// NaN never lies within a range and is always rejected.
pub(crate) fn check_range<R>(field: InputField, value: f64, range: R) -> Result<()>
where
    R: core::ops::RangeBounds<f64>,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_input(field, value))
    }
}

/// Checks that `|value| <= limit`.
pub(crate) fn check_magnitude(field: InputField, value: f64, limit: f64) -> Result<()> {
    check_range(field, value, -limit..=limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_distinct_and_round_trip() {
        for field in InputField::ALL {
            let code = field.status_code();
            assert_ne!(code, 0);
            assert_eq!(InputField::from_status_code(code), Some(field));
        }
        assert_eq!(InputField::from_status_code(0), None);
        assert_eq!(InputField::from_status_code(99), None);
    }

    #[test]
    fn test_from_status_code() {
        assert!(Error::from_status_code(0, 0.0).is_ok());

        let err = Error::from_status_code(10, 200.0).unwrap_err();
        assert_eq!(err, Error::invalid_input(InputField::Latitude, 200.0));
        assert_eq!(err.field(), Some(InputField::Latitude));

        let unknown = Error::from_status_code(42, 0.0).unwrap_err();
        assert!(matches!(unknown, Error::Core(_)));
        assert_eq!(unknown.field(), None);
    }

    #[test]
    fn test_check_range_rejects_nan() {
        assert!(check_range(InputField::Latitude, 45.0, -90.0..=90.0).is_ok());
        assert!(check_range(InputField::Latitude, 90.5, -90.0..=90.0).is_err());
        assert!(check_range(InputField::Latitude, f64::NAN, -90.0..=90.0).is_err());
        assert!(check_magnitude(InputField::Timezone, -18.0, 18.0).is_ok());
        assert!(check_magnitude(InputField::Timezone, 18.5, 18.0).is_err());
        assert!(check_magnitude(InputField::Timezone, f64::INFINITY, 18.0).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_input(InputField::Latitude, 200.0);
        assert_eq!(err.to_string(), "invalid latitude 200 (status code 10)");

        let err = Error::domain_singularity(180.0, 0.0);
        assert_eq!(
            err.to_string(),
            "tracking angle undefined for azimuth 180° and zenith 0°"
        );

        let err = Error::from(solar_positioning::Error::computation_error("no convergence"));
        assert_eq!(
            err.to_string(),
            "solar position core error: computation error: no convergence"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
