// src/data_analysis/view_window.rs

use crate::constants::TRAJECTORY_TAIL_FRAMES;
use crate::error::PipelineError;

/// An inclusive index range into the trajectory table, clamped to the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewWindow {
    pub start: usize,
    pub stop: usize,
}

/// Resolves the view window around `center` with the given half-width,
/// clamped to `[0, data_len - 1]`. Guarantees `start <= center <= stop`.
pub fn resolve_view_window(
    center: usize,
    half_width: usize,
    data_len: usize,
) -> Result<ViewWindow, PipelineError> {
    if data_len == 0 || center > data_len - 1 {
        return Err(PipelineError::Parameter(format!(
            "center frame {} out of bounds for {} frames",
            center, data_len
        )));
    }
    if half_width < 1 {
        return Err(PipelineError::Parameter(
            "window half-width must be at least 1".to_string(),
        ));
    }

    Ok(ViewWindow {
        start: center.saturating_sub(half_width),
        stop: (center + half_width).min(data_len - 1),
    })
}

/// Resolves the fixed look-back window for the trailing trajectory path:
/// the last `TRAJECTORY_TAIL_FRAMES` frames up to and including `center`,
/// clamped the same way as the view window. Independent of the half-width.
pub fn resolve_trailing_window(
    center: usize,
    data_len: usize,
) -> Result<ViewWindow, PipelineError> {
    if data_len == 0 || center > data_len - 1 {
        return Err(PipelineError::Parameter(format!(
            "center frame {} out of bounds for {} frames",
            center, data_len
        )));
    }

    Ok(ViewWindow {
        start: center.saturating_sub(TRAJECTORY_TAIL_FRAMES),
        stop: center,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_at_sequence_start() {
        let window = resolve_view_window(0, 500, 2000).unwrap();
        assert_eq!(window, ViewWindow { start: 0, stop: 500 });
    }

    #[test]
    fn clamps_at_sequence_end() {
        let window = resolve_view_window(1999, 500, 2000).unwrap();
        assert_eq!(window, ViewWindow { start: 1499, stop: 1999 });
    }

    #[test]
    fn center_stays_inside_window() {
        for center in [0usize, 1, 777, 1999] {
            let window = resolve_view_window(center, 250, 2000).unwrap();
            assert!(window.start <= center && center <= window.stop);
        }
    }

    #[test]
    fn rejects_center_out_of_bounds() {
        assert!(matches!(
            resolve_view_window(2000, 500, 2000),
            Err(PipelineError::Parameter(_))
        ));
    }

    #[test]
    fn rejects_zero_half_width() {
        assert!(matches!(
            resolve_view_window(10, 0, 2000),
            Err(PipelineError::Parameter(_))
        ));
    }

    #[test]
    fn trailing_window_uses_fixed_lookback() {
        let window = resolve_trailing_window(800, 2000).unwrap();
        assert_eq!(window, ViewWindow { start: 300, stop: 800 });

        let clamped = resolve_trailing_window(120, 2000).unwrap();
        assert_eq!(clamped, ViewWindow { start: 0, stop: 120 });
    }
}

// src/data_analysis/view_window.rs
