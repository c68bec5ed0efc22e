// src/data_analysis/channel_derivation.rs

use ndarray::Array1;

use crate::constants::{AVERAGE_FRAMERATE, BALL_RADIUS};
use crate::data_analysis::circular_diff::circular_diff;
use crate::data_analysis::smoothing::smooth_channel;
use crate::data_input::trajectory_data::TrajectoryRowData;
use crate::error::PipelineError;

/// The four derived kinematic channels, computed eagerly for the whole table.
///
/// `ground_speed` and `integrated_heading` align 1:1 with the frame index.
/// `upwind_velocity` and `angular_velocity` come from first differences and
/// are length N-1, sitting one frame behind the table index; callers slicing
/// by view window own that offset.
#[derive(Debug, Clone)]
pub struct DerivedChannels {
    pub ground_speed: Array1<f64>,      // distance per second, length N
    pub upwind_velocity: Array1<f64>,   // distance per frame, length N-1
    pub angular_velocity: Array1<f64>,  // degrees per frame, length N-1
    pub integrated_heading: Array1<f64>, // scaled raw heading, length N
}

/// Derives all four channels from the raw table.
///
/// `filter_window` is the Savitzky-Golay window (odd, >= 3, no longer than
/// the shortest smoothed sequence). The smoothed channels run through the
/// median+polynomial cascade; integrated heading is deliberately left raw --
/// it visualizes cumulative heading, not a rate.
pub fn derive_channels(
    rows: &[TrajectoryRowData],
    filter_window: usize,
) -> Result<DerivedChannels, PipelineError> {
    if rows.len() < 2 {
        return Err(PipelineError::Schema(format!(
            "channel derivation needs at least 2 frames, got {}",
            rows.len()
        )));
    }
    if filter_window % 2 == 0 || filter_window < 3 {
        return Err(PipelineError::Parameter(format!(
            "filter window must be an odd integer >= 3, got {}",
            filter_window
        )));
    }

    // Ground speed: raw speed scaled to distance/second, then smoothed.
    let scaled_speed = Array1::from(
        rows.iter()
            .map(|row| row.speed * BALL_RADIUS * AVERAGE_FRAMERATE)
            .collect::<Vec<f64>>(),
    );
    let ground_speed = smooth_channel(&scaled_speed, filter_window)?;

    // Upwind velocity: first difference along the upwind (x) axis, scaled.
    let upwind_raw = Array1::from(
        rows.windows(2)
            .map(|pair| (pair[1].x_pos - pair[0].x_pos) * BALL_RADIUS)
            .collect::<Vec<f64>>(),
    );
    let upwind_velocity = smooth_channel(&upwind_raw, filter_window)?;

    // Angular velocity: wrapped heading differences in degrees, smoothed.
    let heading = Array1::from(rows.iter().map(|row| row.heading).collect::<Vec<f64>>());
    let angular_raw = circular_diff(&heading);
    let angular_velocity = smooth_channel(&angular_raw, filter_window)?;

    // Integrated heading: scaled raw signal, no smoothing.
    let integrated_heading = heading.mapv(|h| h * BALL_RADIUS);

    Ok(DerivedChannels {
        ground_speed,
        upwind_velocity,
        angular_velocity,
        integrated_heading,
    })
}


// src/data_analysis/channel_derivation.rs
