//! Serialization of the value types.
#![cfg(all(feature = "serde", feature = "chrono"))]

use solar_lunar::{
    AtmosphericParameters, CalculationOptions, InputField, JulianMoment, Location, LunarPhase,
    MoonPhase, OutputSelector, SurfaceOrientation,
};

#[test]
fn options_round_trip() {
    let options = CalculationOptions::default()
        .with_atmosphere(AtmosphericParameters::new(820.0, 11.0, 0.5667))
        .with_orientation(SurfaceOrientation::new(30.0, -10.0))
        .with_delta_t(67.0);

    let json = serde_json::to_string(&options).unwrap();
    let decoded: CalculationOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, options);
}

#[test]
fn missing_option_fields_take_defaults() {
    let decoded: CalculationOptions =
        serde_json::from_str(r#"{"atmosphere": {"pressure": 850.0}}"#).unwrap();

    assert_eq!(decoded.atmosphere.pressure, 850.0);
    assert_eq!(decoded.atmosphere.temperature, 20.0);
    assert_eq!(decoded.orientation, SurfaceOrientation::default());
    assert_eq!(decoded.delta_t, None);
}

#[test]
fn enums_use_snake_case() {
    assert_eq!(
        serde_json::to_string(&OutputSelector::ZenithAzimuthIncidence).unwrap(),
        r#""zenith_azimuth_incidence""#
    );
    assert_eq!(
        serde_json::to_string(&MoonPhase::WaxingGibbous).unwrap(),
        r#""waxing_gibbous""#
    );
    assert_eq!(
        serde_json::from_str::<InputField>(r#""surface_rotation""#).unwrap(),
        InputField::SurfaceRotation
    );
}

#[test]
fn julian_moment_is_a_plain_number() {
    let moment = JulianMoment::new(2_451_910.5);
    assert_eq!(serde_json::to_string(&moment).unwrap(), "2451910.5");

    let location: Location =
        serde_json::from_str(r#"{"longitude": 16.37, "latitude": 48.21, "elevation": 190.0}"#)
            .unwrap();
    assert_eq!(location, Location::new(16.37, 48.21, 190.0));
}

#[test]
fn lunar_phase_round_trip() {
    let phase = LunarPhase::new(JulianMoment::new(2_460_424.49));
    let json = serde_json::to_string(&phase).unwrap();
    let decoded: LunarPhase = serde_json::from_str(&json).unwrap();

    assert!((decoded.julian_moment().value() - phase.julian_moment().value()).abs() < 1e-9);
    assert_eq!(decoded.phase(), phase.phase());
    assert!((decoded.synodic_age() - phase.synodic_age()).abs() < 1e-12);
    assert!((decoded.illuminated_ratio() - phase.illuminated_ratio()).abs() < 1e-12);
}
