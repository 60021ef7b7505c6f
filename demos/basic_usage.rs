//! Basic solar position and lunar phase example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use solar_lunar::{
    AtmosphericParameters, CalculationOptions, Location, OutputSelector, SolarPositionAdapter,
    SurfaceOrientation, lunar_phase, tracking_angle,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Same instant as FixedOffset and as UTC
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap(); // 19:00 UTC = 12:00 PDT
    let san_francisco = Location::at_sea_level(-122.4194, 37.7749);

    // Standard atmosphere, a 20° south-facing panel, ΔT estimated from the year
    let options = CalculationOptions::default()
        .with_atmosphere(AtmosphericParameters::new(1013.25, 15.0, 0.5667))
        .with_orientation(SurfaceOrientation::new(20.0, 0.0));
    let adapter = SolarPositionAdapter::new();

    let position_fixed =
        adapter.calculate(&datetime_fixed, &san_francisco, &options, OutputSelector::All)?;
    let position_utc =
        adapter.calculate(&datetime_utc, &san_francisco, &options, OutputSelector::All)?;

    println!("Solar position for San Francisco on June 21, 2023 at noon Pacific Time:");
    println!("  Azimuth: {:.3}°", position_fixed.azimuth);
    println!("  Elevation: {:.3}°", position_fixed.elevation);
    println!("  Zenith angle: {:.3}°", position_fixed.zenith);
    println!("  Panel incidence: {:.3}°", position_fixed.incidence);
    println!(
        "  Sunrise {:.3} h, solar noon {:.3} h, sunset {:.3} h (local)",
        position_fixed.sunrise, position_fixed.solar_transit, position_fixed.sunset
    );

    println!("\nUsing UTC timezone (same moment, events in UTC hours):");
    println!("  Azimuth: {:.3}°", position_utc.azimuth);
    println!(
        "  Sunrise {:.3} h, solar noon {:.3} h, sunset {:.3} h (UTC)",
        position_utc.sunrise, position_utc.solar_transit, position_utc.sunset
    );

    if position_fixed.is_sun_up() {
        let rotation = tracking_angle(position_fixed.azimuth, position_fixed.zenith)?;
        println!("  Sun is above the horizon, tracker rotation {rotation:.2}°");
    } else {
        println!("  Sun is below the horizon");
    }

    // Example 2: The moon at the same instant
    let moon = lunar_phase(&datetime_fixed);
    println!("\nMoon:");
    println!("  Phase: {} ({:.1} days old)", moon.phase().name(), moon.synodic_age());
    println!("  Illuminated: {:.1}%", moon.illuminated_ratio() * 100.0);
    println!("  Distance: {:.0} miles", moon.distance_in_miles());
    println!(
        "  Ecliptic latitude {:.2}°, longitude {:.2}°",
        moon.ecliptic_latitude(),
        moon.ecliptic_longitude()
    );

    Ok(())
}
