// tests/pipeline_integration_test.rs

use std::fs;

use plotters::style::colors::full_palette::RED;

use plume_csv_render::constants::ODOR_COLOR_TABLE;
use plume_csv_render::data_analysis::channel_derivation::derive_channels;
use plume_csv_render::data_analysis::overlay::match_overlays;
use plume_csv_render::data_analysis::pulse_extraction::extract_pulses;
use plume_csv_render::data_analysis::view_window::{resolve_trailing_window, resolve_view_window};
use plume_csv_render::data_input::trajectory_data::TrajectoryRowData;
use plume_csv_render::data_input::trajectory_parser::parse_trajectory_file;
use plume_csv_render::error::PipelineError;

/// Builds a 2000-frame table with one odor pulse of the given label.
fn synthetic_rows(n: usize, pulse_start: usize, pulse_stop: usize, label: &str) -> Vec<TrajectoryRowData> {
    (0..n)
        .map(|i| {
            let in_pulse = i >= pulse_start && i <= pulse_stop;
            TrajectoryRowData {
                x_pos: 0.01 * i as f64,
                y_pos: (i as f64 * 0.005).sin(),
                heading: (i as f64 * 0.01).sin() * 2.0,
                speed: 1.0 + (i as f64 * 0.02).cos() * 0.2,
                odor_state: if in_pulse { 1 } else { 0 },
                odor_name: if in_pulse { label.to_string() } else { String::new() },
            }
        })
        .collect()
}

#[test]
fn end_to_end_single_pulse_scenario() {
    let rows = synthetic_rows(2000, 800, 850, "BEN10% x 0.1");

    let pulses = extract_pulses(&rows).unwrap();
    assert_eq!(pulses.len(), 1);
    assert_eq!(pulses[0].start_idx, 800);
    assert_eq!(pulses[0].stop_idx, 850);
    assert_eq!(pulses[0].label, "BEN10% x 0.1");

    let channels = derive_channels(&rows, 25).unwrap();
    assert_eq!(channels.ground_speed.len(), 2000);
    assert_eq!(channels.upwind_velocity.len(), 1999);
    assert_eq!(channels.angular_velocity.len(), 1999);
    assert_eq!(channels.integrated_heading.len(), 2000);

    let window = resolve_view_window(820, 100, rows.len()).unwrap();
    assert_eq!(window.start, 720);
    assert_eq!(window.stop, 920);

    let spans = match_overlays(&pulses, &window, &ODOR_COLOR_TABLE);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].start_idx, 800);
    assert_eq!(spans[0].stop_idx, 850);
    assert_eq!(spans[0].color, RED);
}

#[test]
fn window_and_overlay_are_pure_reslices() {
    // Changing the view parameters must not require re-deriving anything:
    // the same pulse list and channels serve any window.
    let rows = synthetic_rows(2000, 800, 850, "MO");
    let pulses = extract_pulses(&rows).unwrap();

    let wide = resolve_view_window(820, 500, rows.len()).unwrap();
    let narrow = resolve_view_window(100, 50, rows.len()).unwrap();

    assert_eq!(match_overlays(&pulses, &wide, &ODOR_COLOR_TABLE).len(), 1);
    assert!(match_overlays(&pulses, &narrow, &ODOR_COLOR_TABLE).is_empty());

    let trailing = resolve_trailing_window(820, rows.len()).unwrap();
    assert_eq!(trailing.start, 320);
    assert_eq!(trailing.stop, 820);
}

#[test]
fn parser_binds_columns_by_name() {
    // Column order differs from the semantic order and extra columns are
    // present; named binding must still find the right data.
    let path = std::env::temp_dir().join("plume_csv_render_named_binding.csv");
    let csv = "\
frame,odor_name,speed,heading,extra,x_pos,y_pos,odor_state
0,,1.0,0.1,9,0.0,0.5,0
1,MO,1.5,0.2,9,0.3,0.6,1
2,MO,2.0,0.3,9,0.6,0.7,1
3,,2.5,0.4,9,0.9,0.8,0
";
    fs::write(&path, csv).unwrap();

    let rows = parse_trajectory_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(rows.len(), 4);
    assert!((rows[1].x_pos - 0.3).abs() < 1e-12);
    assert!((rows[2].heading - 0.3).abs() < 1e-12);
    assert_eq!(rows[1].odor_state, 1);
    assert_eq!(rows[1].odor_name, "MO");

    let pulses = extract_pulses(&rows).unwrap();
    assert_eq!(pulses.len(), 1);
    assert_eq!(pulses[0].start_idx, 1);
    assert_eq!(pulses[0].stop_idx, 2);
}

#[test]
fn parser_rejects_missing_columns() {
    let path = std::env::temp_dir().join("plume_csv_render_missing_columns.csv");
    let csv = "\
x_pos,y_pos,speed,odor_state,odor_name
0.0,0.5,1.0,0,
0.3,0.6,1.5,0,
";
    fs::write(&path, csv).unwrap();

    let result = parse_trajectory_file(&path);
    fs::remove_file(&path).ok();

    let err = result.err().expect("missing heading column must be rejected");
    match err.downcast_ref::<PipelineError>() {
        Some(PipelineError::Schema(message)) => {
            assert!(message.contains("heading"), "unexpected message: {}", message);
        }
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn parameter_errors_leave_no_partial_state() {
    let rows = synthetic_rows(100, 10, 20, "MO");

    // Even window rejected, then the same table derives fine: nothing about
    // the failed attempt poisons the next one.
    assert!(matches!(
        derive_channels(&rows, 24),
        Err(PipelineError::Parameter(_))
    ));
    assert!(derive_channels(&rows, 25).is_ok());
}

// tests/pipeline_integration_test.rs
