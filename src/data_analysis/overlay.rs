// src/data_analysis/overlay.rs

use plotters::style::RGBColor;

use crate::data_analysis::pulse_extraction::PulseInterval;
use crate::data_analysis::view_window::ViewWindow;

/// A pulse interval clipped to the current view window, carrying the display
/// color resolved from the label table.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySpan {
    pub start_idx: usize,
    pub stop_idx: usize,
    pub label: String,
    pub color: RGBColor,
}

/// Intersects the pulse list with the view window.
///
/// Keeps intervals satisfying the standard overlap test
/// (`stop_idx >= start && start_idx <= stop`), clips each to the window, and
/// attaches the color configured for its label. Intervals whose label has no
/// configured color are skipped with a warning; that is display policy, not
/// an error.
pub fn match_overlays(
    pulses: &[PulseInterval],
    window: &ViewWindow,
    color_table: &[(&str, RGBColor)],
) -> Vec<OverlaySpan> {
    let mut spans = Vec::new();
    for pulse in pulses {
        if pulse.stop_idx < window.start || pulse.start_idx > window.stop {
            continue;
        }
        match color_table
            .iter()
            .find(|(label, _)| *label == pulse.label.trim())
        {
            Some((_, color)) => {
                spans.push(OverlaySpan {
                    start_idx: pulse.start_idx.max(window.start),
                    stop_idx: pulse.stop_idx.min(window.stop),
                    label: pulse.label.clone(),
                    color: *color,
                });
            }
            None => {
                eprintln!(
                    "Warning: No display color configured for odor label '{}', skipping span",
                    pulse.label
                );
            }
        }
    }
    spans
}


// src/data_analysis/overlay.rs
