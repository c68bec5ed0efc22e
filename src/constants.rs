// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, GREY, RED};
use plotters::style::RGBColor;

// Physical scale of the trackball rig. Raw position and speed columns are in
// ball-rotation units; multiplying by the ball radius converts to distance.
pub const BALL_DIAMETER: f64 = 6.35;
pub const BALL_RADIUS: f64 = BALL_DIAMETER / 2.0;

// Nominal acquisition rate of the tracking camera, frames per second.
pub const AVERAGE_FRAMERATE: f64 = 100.0;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Defaults for the view parameters (overridable on the command line).
pub const DEFAULT_CENTER_FRAME: usize = 1000;
pub const DEFAULT_HALF_WIDTH: usize = 500;
pub const DEFAULT_FILTER_WINDOW: usize = 25;

// Smoothing cascade: small fixed median kernel to knock out tracking
// glitches, then a Savitzky-Golay pass over the user-sized window.
pub const MEDIAN_PREFILTER_KERNEL: usize = 3;
pub const SAVGOL_POLY_ORDER: usize = 3;

// Fixed look-back (in frames) for the trailing trajectory path. Independent
// of the view half-width.
pub const TRAJECTORY_TAIL_FRAMES: usize = 500;

// --- Plot Color Assignments ---
pub const COLOR_TRAJECTORY_PATH: &RGBColor = &GREY;
pub const COLOR_CURRENT_POSITION: &RGBColor = &RED;
pub const COLOR_CENTER_MARKER: &RGBColor = &RED;
pub const COLOR_CHANNEL_LINE: &RGBColor = &BLUE;

// Translucency for the shaded odor spans.
pub const ODOR_SPAN_OPACITY: f64 = 0.3;

/// Display colors for the known odor labels. Pulses whose label is not in
/// this table are skipped by the overlay matcher, not treated as errors.
pub const ODOR_COLOR_TABLE: [(&str, RGBColor); 3] = [
    ("MO", BLUE),
    ("IAA10% x 0.1", GREEN),
    ("BEN10% x 0.1", RED),
];

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes used by the plot framework.
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_LABEL: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// src/constants.rs
