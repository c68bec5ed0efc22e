// src/data_analysis/circular_diff.rs

use ndarray::Array1;

/// Computes frame-to-frame angular differences of a heading sequence.
///
/// Input is radians (any range); output is degrees, length N-1, each value
/// wrapped once into (-180, 180]. Consecutive frames are assumed to differ by
/// less than a full turn at this sampling rate, so multiply-wrapped deltas are
/// not loop-corrected.
pub fn circular_diff(heading: &Array1<f64>) -> Array1<f64> {
    if heading.len() < 2 {
        return Array1::zeros(0);
    }

    let mut diffs = Array1::<f64>::zeros(heading.len() - 1);
    for i in 0..heading.len() - 1 {
        let raw_deg = (heading[i + 1] - heading[i]).to_degrees();
        diffs[i] = if raw_deg > 180.0 {
            raw_deg - 360.0
        } else if raw_deg < -180.0 {
            raw_deg + 360.0
        } else {
            raw_deg
        };
    }
    diffs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff_of_step(step_deg: f64) -> f64 {
        let heading = Array1::from(vec![0.0, step_deg.to_radians()]);
        circular_diff(&heading)[0]
    }

    #[test]
    fn in_range_deltas_pass_through() {
        for d in [-180.0, -90.0, -1.5, 0.0, 42.0, 180.0] {
            assert!((diff_of_step(d) - d).abs() < 1e-9, "delta {} changed", d);
        }
    }

    #[test]
    fn wrapped_deltas_fold_back() {
        assert!((diff_of_step(190.0) - (-170.0)).abs() < 1e-9);
        assert!((diff_of_step(-190.0) - 170.0).abs() < 1e-9);
    }

    #[test]
    fn sign_mirrors_under_reversal() {
        let heading = Array1::from(vec![0.1, 0.5, 2.9, 3.0]);
        let reversed = Array1::from(heading.iter().rev().cloned().collect::<Vec<f64>>());
        let forward = circular_diff(&heading);
        let backward = circular_diff(&reversed);
        for (f, b) in forward.iter().zip(backward.iter().rev()) {
            assert!((f + b).abs() < 1e-9);
        }
    }

    #[test]
    fn output_is_one_shorter_than_input() {
        let heading = Array1::from(vec![0.0; 17]);
        assert_eq!(circular_diff(&heading).len(), 16);
        assert_eq!(circular_diff(&Array1::from(vec![1.0])).len(), 0);
    }
}

// src/data_analysis/circular_diff.rs
