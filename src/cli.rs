//! Interactive prompt surface
//!
//! The thin stand-in for the input page: prompts for the six order fields,
//! runs a prediction, and prints the estimate with the out-of-distribution
//! advisory when it applies.

use crate::error::Result;
use crate::inference::EtaEngine;
use crate::order::{
    RawOrderInput, TimeOfDay, TrafficLevel, VehicleType, Weather, DISTANCE_RANGE_KM,
    EXPERIENCE_RANGE_YRS, PREP_TIME_RANGE_MIN,
};
use colored::*;
use std::io::{self, Write as _};
use std::path::Path;
use std::str::FromStr;

fn dim(s: &str) -> ColoredString {
    s.truecolor(120, 120, 120)
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("  {} ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a float within a range; empty input takes the default
fn prompt_f64(label: &str, range: (f64, f64), default: f64) -> io::Result<f64> {
    loop {
        let prompt = format!(
            "{} {} [{}]:",
            label.white(),
            dim(&format!("({}-{})", range.0, range.1)),
            default
        );
        let line = read_line(&prompt)?;
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse::<f64>() {
            Ok(v) if v >= range.0 && v <= range.1 => return Ok(v),
            _ => println!("  {}", format!("enter a number between {} and {}", range.0, range.1).red()),
        }
    }
}

/// Prompt for an integer within a range; empty input takes the default
fn prompt_u32(label: &str, range: (u32, u32), default: u32) -> io::Result<u32> {
    loop {
        let prompt = format!(
            "{} {} [{}]:",
            label.white(),
            dim(&format!("({}-{})", range.0, range.1)),
            default
        );
        let line = read_line(&prompt)?;
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse::<u32>() {
            Ok(v) if v >= range.0 && v <= range.1 => return Ok(v),
            _ => println!("  {}", format!("enter a whole number between {} and {}", range.0, range.1).red()),
        }
    }
}

/// Prompt for one of a fixed set of choices; empty input takes the first
fn prompt_choice<T: FromStr + Copy + std::fmt::Display>(label: &str, options: &[T]) -> io::Result<T> {
    let names: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    loop {
        let prompt = format!("{} {}:", label.white(), dim(&format!("({})", names.join("/"))));
        let line = read_line(&prompt)?;
        if line.is_empty() {
            return Ok(options[0]);
        }
        if let Ok(choice) = line.parse::<T>() {
            return Ok(choice);
        }
        println!("  {}", format!("choose one of: {}", names.join(", ")).red());
    }
}

fn gather_input() -> io::Result<RawOrderInput> {
    println!();
    println!("  {}", "Order Details".white().bold());
    println!("  {}", dim(&"─".repeat(40)));

    let distance_km = prompt_f64("Distance (km)", DISTANCE_RANGE_KM, 5.0)?;
    let preparation_time_min = prompt_u32("Preparation Time (minutes)", PREP_TIME_RANGE_MIN, 15)?;
    let courier_experience_yrs =
        prompt_f64("Courier Experience (years)", EXPERIENCE_RANGE_YRS, 2.0)?;
    let weather = prompt_choice("Weather", &Weather::ALL)?;
    let traffic_level = prompt_choice("Traffic Level", &TrafficLevel::ALL)?;
    let time_of_day = prompt_choice("Time of Day", &TimeOfDay::ALL)?;
    let vehicle_type = prompt_choice("Vehicle Type", &VehicleType::ALL)?;

    Ok(RawOrderInput {
        distance_km,
        weather,
        traffic_level,
        time_of_day,
        vehicle_type,
        preparation_time_min,
        courier_experience_yrs,
    })
}

/// Load the bundle, then prompt-and-predict until the user quits
pub fn run(artifact_dir: &Path) -> Result<()> {
    let engine = EtaEngine::load(artifact_dir)?;

    println!();
    println!("  {}", "Food Delivery ETA Prediction".white().bold());
    println!(
        "  {}",
        dim("estimates delivery time from order and operational conditions")
    );

    loop {
        let input = gather_input()?;

        if input.exceeds_trained_distance() {
            println!(
                "  {}",
                "⚠ Distance exceeds training data range (max ≈ 20 km). Prediction may be less reliable."
                    .yellow()
            );
        }

        let prediction = engine.predict(&input)?;
        println!();
        println!(
            "  {} {}",
            "Estimated Delivery Time:".green(),
            format!("{:.1} minutes", prediction.minutes).green().bold()
        );

        println!();
        let again = read_line(&format!("{}", dim("predict another? (y/N):")))?;
        if !again.eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}
