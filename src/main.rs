// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use plume_csv_render::constants::{
    DEFAULT_CENTER_FRAME, DEFAULT_FILTER_WINDOW, DEFAULT_HALF_WIDTH, ODOR_COLOR_TABLE,
};
use plume_csv_render::data_analysis::channel_derivation::derive_channels;
use plume_csv_render::data_analysis::overlay::match_overlays;
use plume_csv_render::data_analysis::pulse_extraction::extract_pulses;
use plume_csv_render::data_analysis::view_window::{resolve_trailing_window, resolve_view_window};
use plume_csv_render::data_input::trajectory_parser::parse_trajectory_file;
use plume_csv_render::error::PipelineError;
use plume_csv_render::plot_functions::plot_kinematics::plot_kinematics;
use plume_csv_render::plot_functions::plot_trajectory::plot_trajectory;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <input_file.csv> [center_frame] [half_width] [filter_window]",
            args[0]
        );
        eprintln!(
            "Defaults: center_frame={}, half_width={}, filter_window={}",
            DEFAULT_CENTER_FRAME, DEFAULT_HALF_WIDTH, DEFAULT_FILTER_WINDOW
        );
        std::process::exit(1);
    }
    let input_file = &args[1];
    let input_path = Path::new(input_file);
    let root_name = input_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    let parse_arg = |index: usize, name: &str, default: usize| -> Result<usize, Box<dyn Error>> {
        match args.get(index) {
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                PipelineError::Parameter(format!("{} must be a non-negative integer, got '{}'", name, raw))
                    .into()
            }),
            None => Ok(default),
        }
    };
    let center = parse_arg(2, "center_frame", DEFAULT_CENTER_FRAME)?;
    let half_width = parse_arg(3, "half_width", DEFAULT_HALF_WIDTH)?;
    let filter_window = parse_arg(4, "filter_window", DEFAULT_FILTER_WINDOW)?;

    // --- Load Table ---
    let rows = parse_trajectory_file(input_path)?;

    // --- Extract Odor Pulses ---
    println!("\n--- Extracting Odor Pulses ---");
    let pulses = extract_pulses(&rows)?;
    println!("  Found {} closed odor pulse(s).", pulses.len());
    for pulse in &pulses {
        println!(
            "    '{}': frames {}..{}",
            pulse.label, pulse.start_idx, pulse.stop_idx
        );
    }

    // --- Derive Kinematic Channels ---
    println!("\n--- Deriving Kinematic Channels ---");
    let channels = derive_channels(&rows, filter_window)?;
    println!(
        "  Ground speed: {} samples, upwind velocity: {}, angular velocity: {}, integrated heading: {}.",
        channels.ground_speed.len(),
        channels.upwind_velocity.len(),
        channels.angular_velocity.len(),
        channels.integrated_heading.len()
    );

    // --- Resolve View Window and Overlays ---
    let window = resolve_view_window(center, half_width, rows.len())?;
    let trailing_window = resolve_trailing_window(center, rows.len())?;
    println!(
        "\nView window: frames {}..{} (center {}), trailing path from frame {}.",
        window.start, window.stop, center, trailing_window.start
    );

    let overlay_spans = match_overlays(&pulses, &window, &ODOR_COLOR_TABLE);
    println!("  {} odor span(s) overlap the view window.", overlay_spans.len());

    // --- Generate Plots ---
    println!("\n--- Generating Kinematics Plot ---");
    plot_kinematics(&channels, &window, center, &overlay_spans, &root_name)?;

    println!("\n--- Generating Trajectory Plot ---");
    plot_trajectory(&rows, &trailing_window, center, &root_name)?;

    Ok(())
}

// src/main.rs
