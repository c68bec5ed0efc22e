// src/types.rs
// Type aliases to reduce signature noise

use crate::channel_names::CHANNEL_COUNT;
use ndarray::Array1;

// Compile-time assertion: CHANNEL_COUNT must be 4. The stacked kinematics
// layout and the per-channel alias below depend on it.
const _: () = assert!(CHANNEL_COUNT == 4, "CHANNEL_COUNT must be 4");

/// One derived kinematic signal, aligned (or offset by one frame, for the
/// difference channels) with the trajectory table.
pub type ChannelSeries = Array1<f64>;

/// Scaled (x, y) positions for the trajectory path plot.
pub type PathPoints = Vec<(f64, f64)>;

/// Per-channel plot payload handed to the stacked plot framework.
pub type AllChannelPlotData = [Option<crate::plot_framework::PlotConfig>; CHANNEL_COUNT];
