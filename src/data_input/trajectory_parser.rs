// src/data_input/trajectory_parser.rs

use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::data_input::trajectory_data::TrajectoryRowData;
use crate::error::PipelineError;

/// The columns the derivation core needs, bound by header name. Source files
/// with extra columns are fine; missing any of these rejects the table before
/// any derivation runs.
const TARGET_HEADERS: [&str; 6] = [
    "x_pos",      // 0
    "y_pos",      // 1
    "heading",    // 2
    "speed",      // 3
    "odor_state", // 4
    "odor_name",  // 5
];

/// Parses the trajectory CSV file and binds the required columns by name.
///
/// Returns all parsed trajectory rows in file order (row order is the frame
/// index). Rows with unparseable numeric cells are skipped with a warning;
/// a table that ends up shorter than 2 frames is a schema error.
pub fn parse_trajectory_file(
    input_file_path: &Path,
) -> Result<Vec<TrajectoryRowData>, Box<dyn Error>> {
    // --- Header Binding ---
    let header_indices: Vec<Option<usize>>;
    {
        let file = File::open(input_file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));
        let header_record = reader.headers()?.clone();
        println!("Headers found in CSV: {:?}", header_record);

        header_indices = TARGET_HEADERS
            .iter()
            .map(|&target_header| header_record.iter().position(|h| h.trim() == target_header))
            .collect();

        println!("Header mapping status:");
        for (i, name) in TARGET_HEADERS.iter().enumerate() {
            let found = header_indices[i].is_some();
            println!("  '{}': {}", name, if found { "Found" } else { "Not Found" });
        }

        let missing: Vec<String> = TARGET_HEADERS
            .iter()
            .enumerate()
            .filter(|(i, _)| header_indices[*i].is_none())
            .map(|(_, name)| format!("'{}'", name))
            .collect();
        if !missing.is_empty() {
            return Err(PipelineError::Schema(format!(
                "missing required columns: {}",
                missing.join(", ")
            ))
            .into());
        }
    }

    // --- Data Reading and Storage ---
    let mut all_rows: Vec<TrajectoryRowData> = Vec::new();
    println!("\nReading data rows...");
    {
        let file = File::open(input_file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        for (row_index, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    let get_by_target_idx = |target_idx: usize| {
                        header_indices[target_idx].and_then(|csv_idx| record.get(csv_idx))
                    };
                    let parse_f64_by_target_idx = |target_idx: usize| -> Option<f64> {
                        get_by_target_idx(target_idx).and_then(|val_str| val_str.parse::<f64>().ok())
                    };

                    let x_pos = parse_f64_by_target_idx(0);
                    let y_pos = parse_f64_by_target_idx(1);
                    let heading = parse_f64_by_target_idx(2);
                    let speed = parse_f64_by_target_idx(3);
                    let odor_state = get_by_target_idx(4).and_then(|s| s.parse::<i64>().ok());

                    match (x_pos, y_pos, heading, speed, odor_state) {
                        (Some(x_pos), Some(y_pos), Some(heading), Some(speed), Some(odor_state)) => {
                            all_rows.push(TrajectoryRowData {
                                x_pos,
                                y_pos,
                                heading,
                                speed,
                                odor_state,
                                odor_name: get_by_target_idx(5).unwrap_or("").to_string(),
                            });
                        }
                        _ => {
                            eprintln!(
                                "Warning: Skipping row {} due to missing or invalid numeric values",
                                row_index + 1
                            );
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Warning: Skipping row {} due to CSV read error: {}", row_index + 1, e);
                }
            }
        }
    }

    println!("Finished reading {} data rows.", all_rows.len());

    if all_rows.len() < 2 {
        return Err(PipelineError::Schema(format!(
            "trajectory table needs at least 2 frames, got {}",
            all_rows.len()
        ))
        .into());
    }

    Ok(all_rows)
}

// src/data_input/trajectory_parser.rs
