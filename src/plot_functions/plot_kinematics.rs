// src/plot_functions/plot_kinematics.rs

use ndarray::{s, Array1};
use ndarray_stats::QuantileExt;
use std::error::Error;

use crate::channel_names::CHANNEL_NAMES;
use crate::constants::{COLOR_CHANNEL_LINE, LINE_WIDTH_PLOT, ODOR_SPAN_OPACITY};
use crate::data_analysis::channel_derivation::DerivedChannels;
use crate::data_analysis::overlay::OverlaySpan;
use crate::data_analysis::view_window::ViewWindow;
use crate::plot_framework::{
    calculate_range, draw_stacked_channel_plot, PlotConfig, PlotSeries, ShadedSpan,
};
use crate::types::AllChannelPlotData;

/// Generates the stacked kinematics plot: one row per derived channel, each
/// limited to the view window, with the center-frame marker, a zero reference
/// line, and the colored odor spans.
pub fn plot_kinematics(
    channels: &DerivedChannels,
    window: &ViewWindow,
    center: usize,
    overlay_spans: &[OverlaySpan],
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{}_Kinematics_stacked.png", root_name);
    let plot_type_name = "Kinematics";

    let shaded: Vec<ShadedSpan> = overlay_spans
        .iter()
        .map(|span| ShadedSpan {
            x_min: span.start_idx as f64,
            x_max: span.stop_idx as f64,
            color: span.color,
            opacity: ODOR_SPAN_OPACITY,
        })
        .collect();

    let channel_sources: [(&Array1<f64>, bool, &str); 4] = [
        (&channels.ground_speed, false, "Speed (cm/s)"),
        (&channels.upwind_velocity, true, "Velocity (cm/frame)"),
        (&channels.angular_velocity, true, "Angular Velocity (deg/frame)"),
        (&channels.integrated_heading, false, "Heading (scaled)"),
    ];

    let mut channel_plot_data: AllChannelPlotData = Default::default();
    for (channel_index, (data, is_difference, y_label)) in channel_sources.iter().enumerate() {
        channel_plot_data[channel_index] = build_channel_config(
            data,
            *is_difference,
            window,
            center,
            &shaded,
            CHANNEL_NAMES[channel_index],
            y_label,
        );
    }

    draw_stacked_channel_plot(&output_file, root_name, plot_type_name, move |channel_index| {
        channel_plot_data[channel_index].take()
    })
}

/// Slices one channel to the view window and wraps it in a PlotConfig.
///
/// Difference channels are one frame behind the table: sample j spans frames
/// j..j+1 and is plotted at frame j+1, so their window slice shifts down by
/// one relative to the aligned channels.
fn build_channel_config(
    data: &Array1<f64>,
    is_difference: bool,
    window: &ViewWindow,
    center: usize,
    shaded: &[ShadedSpan],
    title: &str,
    y_label: &str,
) -> Option<PlotConfig> {
    let (slice_start, x_offset) = if is_difference {
        (window.start.saturating_sub(1), 1)
    } else {
        (window.start, 0)
    };
    let slice_stop = if is_difference {
        window.stop.checked_sub(1)?
    } else {
        window.stop
    };
    if slice_stop >= data.len() || slice_start > slice_stop {
        return None;
    }

    let windowed = data.slice(s![slice_start..=slice_stop]);
    let y_min = *windowed.min().ok()?;
    let y_max = *windowed.max().ok()?;
    let (final_y_min, final_y_max) = calculate_range(y_min, y_max);

    let series_data: Vec<(f64, f64)> = windowed
        .iter()
        .enumerate()
        .map(|(i, &value)| ((slice_start + i + x_offset) as f64, value))
        .collect();

    Some(PlotConfig {
        title: title.to_string(),
        x_range: window.start as f64..window.stop as f64,
        y_range: final_y_min..final_y_max,
        series: vec![PlotSeries {
            data: series_data,
            label: String::new(),
            color: *COLOR_CHANNEL_LINE,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "Frame".to_string(),
        y_label: y_label.to_string(),
        spans: shaded.to_vec(),
        point_markers: Vec::new(),
        marker_x: Some(center as f64),
        zero_line: true,
    })
}

// src/plot_functions/plot_kinematics.rs
