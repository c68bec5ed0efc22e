// src/plot_functions/plot_trajectory.rs

use std::error::Error;

use crate::constants::{
    BALL_RADIUS, COLOR_CURRENT_POSITION, COLOR_TRAJECTORY_PATH, LINE_WIDTH_PLOT,
};
use crate::data_analysis::view_window::ViewWindow;
use crate::data_input::trajectory_data::TrajectoryRowData;
use crate::plot_framework::{
    calculate_range, draw_single_plot, PlotConfig, PlotSeries, PointMarker,
};
use crate::types::PathPoints;

/// Generates the trajectory path plot: the trailing look-back path in gray
/// with the current (center-frame) position marked in red. Positions are
/// scaled from ball units to centimeters.
pub fn plot_trajectory(
    rows: &[TrajectoryRowData],
    trailing_window: &ViewWindow,
    center: usize,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{}_Trajectory.png", root_name);
    let plot_type_name = "Trajectory";

    if center >= rows.len() {
        return draw_single_plot(&output_file, root_name, plot_type_name, None);
    }

    let path: PathPoints = rows[trailing_window.start..center]
        .iter()
        .map(|row| (row.x_pos * BALL_RADIUS, row.y_pos * BALL_RADIUS))
        .collect();
    let current = (
        rows[center].x_pos * BALL_RADIUS,
        rows[center].y_pos * BALL_RADIUS,
    );

    let mut x_min = current.0;
    let mut x_max = current.0;
    let mut y_min = current.1;
    let mut y_max = current.1;
    for (x, y) in &path {
        x_min = x_min.min(*x);
        x_max = x_max.max(*x);
        y_min = y_min.min(*y);
        y_max = y_max.max(*y);
    }
    let (final_x_min, final_x_max) = calculate_range(x_min, x_max);
    let (final_y_min, final_y_max) = calculate_range(y_min, y_max);

    let plot_config = PlotConfig {
        title: "Trajectory".to_string(),
        x_range: final_x_min..final_x_max,
        y_range: final_y_min..final_y_max,
        series: vec![PlotSeries {
            data: path,
            label: String::new(),
            color: *COLOR_TRAJECTORY_PATH,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "x (cm)".to_string(),
        y_label: "y (cm)".to_string(),
        spans: Vec::new(),
        point_markers: vec![PointMarker {
            x: current.0,
            y: current.1,
            color: *COLOR_CURRENT_POSITION,
            size: 5,
        }],
        marker_x: None,
        zero_line: false,
    };

    draw_single_plot(&output_file, root_name, plot_type_name, Some(plot_config))
}

// src/plot_functions/plot_trajectory.rs
