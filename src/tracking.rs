//! Single-axis tracker rotation.

use crate::math::{PI, atan, cos, degrees_to_radians, radians_to_degrees, tan};
use crate::{Error, Result};

/// Zenith angles this close to a multiple of 180° are treated as singular.
const SINGULARITY_TOLERANCE_DEGREES: f64 = 1e-9;

/// Computes the rotation angle of a single-axis tracker in degrees.
///
/// `atan(tan(90° − zenith) · |cos(azimuth)|)`, with both angles in degrees.
///
/// # Errors
/// Returns `DomainSingularity` if either angle is not finite, or if the zenith
/// angle is a multiple of 180°, where `tan(90° − zenith)` is undefined.
///
/// # Example
/// ```
/// # use solar_lunar::tracking_angle;
/// let angle = tracking_angle(180.0, 45.0).unwrap();
/// assert!((angle - 45.0).abs() < 1e-9);
/// assert!(tracking_angle(180.0, 0.0).is_err());
/// ```
pub fn tracking_angle(azimuth: f64, zenith: f64) -> Result<f64> {
    if !azimuth.is_finite() || !zenith.is_finite() {
        return Err(Error::domain_singularity(azimuth, zenith));
    }

    let offset = (zenith % 180.0).abs();
    if offset < SINGULARITY_TOLERANCE_DEGREES || 180.0 - offset < SINGULARITY_TOLERANCE_DEGREES {
        return Err(Error::domain_singularity(azimuth, zenith));
    }

    let azimuth_rad = degrees_to_radians(azimuth);
    let zenith_rad = degrees_to_radians(zenith);
    let rotation = atan(tan(PI / 2.0 - zenith_rad) * cos(azimuth_rad).abs());

    Ok(radians_to_degrees(rotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_sun_due_south_gives_elevation() {
        // |cos 180°| = 1, so the rotation equals the solar elevation
        for zenith in [10.0, 30.0, 60.0, 89.0] {
            let angle = tracking_angle(180.0, zenith).unwrap();
            assert!((angle - (90.0 - zenith)).abs() < EPSILON, "zenith {zenith}");
        }
    }

    #[test]
    fn test_azimuth_sign_does_not_matter() {
        let north_east = tracking_angle(45.0, 50.0).unwrap();
        let south_east = tracking_angle(135.0, 50.0).unwrap();
        assert!((north_east - south_east).abs() < EPSILON);
    }

    #[test]
    fn test_sun_due_east_gives_zero() {
        let angle = tracking_angle(90.0, 30.0).unwrap();
        assert!(angle.abs() < EPSILON);
    }

    #[test]
    fn test_below_horizon_is_negative() {
        let angle = tracking_angle(180.0, 100.0).unwrap();
        assert!((angle + 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_singularities() {
        assert_eq!(
            tracking_angle(180.0, 0.0),
            Err(Error::domain_singularity(180.0, 0.0))
        );
        assert!(tracking_angle(10.0, 180.0).is_err());
        assert!(tracking_angle(10.0, -360.0).is_err());
        assert!(tracking_angle(f64::NAN, 45.0).is_err());
        assert!(tracking_angle(180.0, f64::INFINITY).is_err());
    }
}
