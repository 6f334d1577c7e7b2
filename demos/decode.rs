// SPDX-License-Identifier: MPL-2.0

//! Response decoding example.
//!
//! Decodes a saved service response and prints the result.
//!
//! # Usage
//!
//! ```bash
//! # Session-authentication response
//! cargo run --example decode -- session <file> [--strict]
//!
//! # Locations-listing response
//! cargo run --example decode -- locations <file> [--strict]
//! ```
//!
//! Set `RUST_LOG=debug` to see the decoder's log output.

use std::env;
use std::fs::File;
use std::io::BufReader;

use tcc_lib::decoder::{
    DecodeOptions, NumericPolicy, decode_locations_from_reader, decode_session_from_reader,
};
use tcc_lib::{Locations, dispatch};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let options = if args.iter().any(|arg| arg == "--strict") {
        DecodeOptions::new().with_numeric_policy(NumericPolicy::Strict)
    } else {
        DecodeOptions::new()
    };
    let reader = BufReader::new(File::open(&args[2])?);

    let code = match args[1].as_str() {
        "session" => dispatch(
            decode_session_from_reader(reader, &options),
            |session| {
                println!("Session: {session}");
                0
            },
            |err| {
                eprintln!("Failed ({}): {err}", err.kind());
                2
            },
        ),
        "locations" => dispatch(
            decode_locations_from_reader(reader, &options),
            |locations| {
                print_locations(&locations);
                0
            },
            |err| {
                eprintln!("Failed ({}): {err}", err.kind());
                2
            },
        ),
        other => {
            eprintln!("Unknown response type: {other}");
            print_usage(&args[0]);
            1
        }
    };

    std::process::exit(code);
}

fn print_locations(locations: &Locations) {
    for location in locations {
        println!("{} (id {})", location.name, location.id);
        for thermostat in &location.thermostats {
            let reading = &thermostat.reading;
            let unit = reading
                .display_units
                .as_ref()
                .and_then(|units| units.symbol())
                .unwrap_or("");
            println!("  {}", thermostat.name);
            println!("    indoor:   {}{unit}", show(reading.indoor_temp));
            println!("    outdoor:  {}{unit}", show(reading.outdoor_temp));
            println!(
                "    setpoints: heat {} / cool {}",
                show(reading.heat_setpoint),
                show(reading.cool_setpoint)
            );
            println!(
                "    humidity: indoor {}% / outdoor {}%",
                show(reading.indoor_humidity),
                show(reading.outdoor_humidity)
            );
        }
    }
}

fn show(value: Option<i32>) -> String {
    value.map_or_else(|| "--".to_string(), |v| v.to_string())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <session|locations> <file> [--strict]");
}
