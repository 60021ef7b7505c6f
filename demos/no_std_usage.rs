//! Example demonstrating usage without chrono.
//!
//! This shows how to use the library in environments where users handle
//! their own time conversions.

use solar_lunar::time::SECONDS_PER_DAY;
use solar_lunar::{DeltaT, JulianMoment, LunarPhase, tracking_angle};

fn main() {
    println!("Lunar phase without chrono\n");

    // 2024-06-21 12:00:00 UTC from calendar fields
    let moment =
        JulianMoment::from_calendar(2024, 6, 21, 12, 0, 0.0, 0.0).expect("Valid calendar date");
    println!("Julian Date: {:.6}", moment.value());
    println!("Estimated ΔT: {:.1} seconds\n", DeltaT::estimate(2024.5));

    // One week of moon phases, one per day
    for day in 0..7 {
        let moon = LunarPhase::new(moment.add_days(f64::from(day)));
        println!(
            "  JD {:.1}: {:<16} {:>5.1}% lit, {:.0} miles",
            moon.julian_moment().value(),
            moon.phase().name(),
            moon.illuminated_ratio() * 100.0,
            moon.distance_in_miles()
        );
    }

    // Seconds since 2001-01-01 00:00:00 UTC, as counted by some embedded clocks
    let seconds = 742_996_800.0;
    let from_clock = JulianMoment::from_seconds_since_reference(seconds);
    println!(
        "\n{seconds} s after the reference epoch is JD {:.6} ({:.1} days)",
        from_clock.value(),
        seconds / SECONDS_PER_DAY
    );

    // Tracker rotation from a known sun position
    match tracking_angle(135.0, 40.0) {
        Ok(angle) => println!("\nTracker rotation for azimuth 135°, zenith 40°: {angle:.2}°"),
        Err(err) => println!("\nNo tracker rotation: {err}"),
    }
}
