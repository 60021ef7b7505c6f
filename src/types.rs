//! Value types for solar position queries.

use crate::math::normalize_degrees_0_to_360;

/// Observer location on the Earth's surface.
///
/// # Example
/// ```
/// # use solar_lunar::Location;
/// let golden = Location::new(-105.1786, 39.742476, 1830.14);
/// assert_eq!(golden.latitude, 39.742476);
/// assert_eq!(Location::new(16.37, 48.21, 0.0), Location::at_sea_level(16.37, 48.21));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Longitude in degrees, positive east of Greenwich (-180 to +180)
    pub longitude: f64,
    /// Latitude in degrees, positive north of the equator (-90 to +90)
    pub latitude: f64,
    /// Elevation above sea level in meters
    pub elevation: f64,
}

impl Location {
    /// Creates a location from longitude, latitude and elevation.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64, elevation: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation,
        }
    }

    /// Creates a location at zero elevation.
    #[must_use]
    pub const fn at_sea_level(longitude: f64, latitude: f64) -> Self {
        Self::new(longitude, latitude, 0.0)
    }
}

/// Atmospheric conditions used for refraction and sunrise/sunset horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AtmosphericParameters {
    /// Annual average local pressure in millibars
    pub pressure: f64,
    /// Annual average local temperature in degrees Celsius
    pub temperature: f64,
    /// Atmospheric refraction at sunrise and sunset in degrees
    pub atmospheric_refraction: f64,
}

impl AtmosphericParameters {
    /// Refraction at the horizon used when none is given (degrees).
    pub const STANDARD_REFRACTION: f64 = 0.5667;

    /// Creates atmospheric parameters.
    #[must_use]
    pub const fn new(pressure: f64, temperature: f64, atmospheric_refraction: f64) -> Self {
        Self {
            pressure,
            temperature,
            atmospheric_refraction,
        }
    }
}

impl Default for AtmosphericParameters {
    /// 1000 mbar, 20 °C and 0.5667° of horizon refraction.
    fn default() -> Self {
        Self::new(1000.0, 20.0, Self::STANDARD_REFRACTION)
    }
}

/// Orientation of a surface for incidence angle calculations.
///
/// The default is a horizontal surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurfaceOrientation {
    /// Surface slope measured from the horizontal plane, in degrees
    pub slope: f64,
    /// Surface azimuth rotation measured from south to the projection of the
    /// surface normal on the horizontal plane, positive west, in degrees
    pub rotation: f64,
}

impl SurfaceOrientation {
    /// Creates a surface orientation.
    #[must_use]
    pub const fn new(slope: f64, rotation: f64) -> Self {
        Self { slope, rotation }
    }
}

/// Selects which outputs the solar position core computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutputSelector {
    /// Zenith and azimuth only
    ZenithAzimuth,
    /// Zenith, azimuth and surface incidence angle
    ZenithAzimuthIncidence,
    /// Zenith, azimuth, sunrise, transit and sunset
    ZenithAzimuthRiseTransitSet,
    /// Everything
    #[default]
    All,
}

impl OutputSelector {
    /// Checks if the incidence angle is requested.
    #[must_use]
    pub const fn includes_incidence(self) -> bool {
        matches!(self, Self::ZenithAzimuthIncidence | Self::All)
    }

    /// Checks if sunrise, transit and sunset are requested.
    #[must_use]
    pub const fn includes_rise_transit_set(self) -> bool {
        matches!(self, Self::ZenithAzimuthRiseTransitSet | Self::All)
    }
}

/// Fully assembled input record for one solar position query.
///
/// Calendar fields are local civil time in a zone `timezone` hours east of UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPositionInput {
    /// Year (-2000 to 6000)
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
    /// Day of month (1-31)
    pub day: u32,
    /// Hour (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second, including any fraction (0 to < 60)
    pub second: f64,
    /// Offset from UTC in hours, positive east
    pub timezone: f64,
    /// ΔT (TT − UT1) in seconds
    pub delta_t: f64,
    /// Observer location
    pub location: Location,
    /// Atmospheric conditions
    pub atmosphere: AtmosphericParameters,
    /// Surface orientation for the incidence angle
    pub orientation: SurfaceOrientation,
}

/// Solar position and daily solar events.
///
/// Angles are degrees. Event times are local fractional hours (0 to < 24) in
/// the query's timezone. Fields the output selector did not request are NaN,
/// as are sunrise and sunset on days the sun never crosses the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPositionOutput {
    /// Topocentric zenith angle
    pub zenith: f64,
    /// Topocentric azimuth, eastward from north (0 to 360)
    pub azimuth: f64,
    /// Topocentric azimuth, westward from south (-180 to 180)
    pub azimuth180: f64,
    /// Surface incidence angle
    pub incidence: f64,
    /// Topocentric elevation angle, corrected for refraction
    pub elevation: f64,
    /// Local solar transit (solar noon)
    pub solar_transit: f64,
    /// Local sunrise
    pub sunrise: f64,
    /// Local sunset
    pub sunset: f64,
}

impl SolarPositionOutput {
    /// Creates an output holding only a zenith and azimuth.
    ///
    /// Elevation and the south-based azimuth are derived; everything else is NaN.
    #[must_use]
    pub fn from_zenith_azimuth(zenith: f64, azimuth: f64) -> Self {
        let azimuth = normalize_degrees_0_to_360(azimuth);
        Self {
            zenith,
            azimuth,
            azimuth180: azimuth - 180.0,
            incidence: f64::NAN,
            elevation: 90.0 - zenith,
            solar_transit: f64::NAN,
            sunrise: f64::NAN,
            sunset: f64::NAN,
        }
    }

    /// Checks if the sun is above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation > 0.0
    }

    /// Checks if the day has both a sunrise and a sunset.
    #[must_use]
    pub fn has_sunrise_and_sunset(&self) -> bool {
        self.sunrise.is_finite() && self.sunset.is_finite()
    }
}
