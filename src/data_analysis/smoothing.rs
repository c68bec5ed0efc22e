// src/data_analysis/smoothing.rs

use ndarray::Array1;

use crate::constants::{MEDIAN_PREFILTER_KERNEL, SAVGOL_POLY_ORDER};
use crate::error::PipelineError;

/// Sliding median filter with zero-padded edges.
///
/// The kernel must be odd. Knocks out impulsive tracking glitches without
/// shifting signal phase.
pub fn median_filter(data: &Array1<f64>, kernel_size: usize) -> Result<Array1<f64>, PipelineError> {
    if kernel_size % 2 == 0 || kernel_size == 0 {
        return Err(PipelineError::Parameter(format!(
            "median kernel must be odd, got {}",
            kernel_size
        )));
    }
    if data.is_empty() {
        return Ok(Array1::zeros(0));
    }

    let half = kernel_size / 2;
    let n = data.len();
    let mut filtered = Array1::<f64>::zeros(n);
    let mut window: Vec<f64> = Vec::with_capacity(kernel_size);

    for i in 0..n {
        window.clear();
        for offset in 0..kernel_size {
            let j = i as isize + offset as isize - half as isize;
            if j >= 0 && (j as usize) < n {
                window.push(data[j as usize]);
            } else {
                window.push(0.0); // zero padding outside the sequence
            }
        }
        window.sort_by(|a, b| a.total_cmp(b));
        filtered[i] = window[half];
    }
    Ok(filtered)
}

/// Savitzky-Golay smoothing: least-squares polynomial fit over a sliding
/// window, evaluated at the window center. Preserves peak shape better than a
/// plain moving average.
///
/// `window` must be odd and no longer than the data. The polynomial order is
/// clamped to `window - 1` so the minimum legal window stays well-posed. Edge
/// samples are filled by evaluating the first/last full window's fit at the
/// edge positions instead of padding.
pub fn savgol_filter(
    data: &Array1<f64>,
    window: usize,
    poly_order: usize,
) -> Result<Array1<f64>, PipelineError> {
    if window % 2 == 0 || window == 0 {
        return Err(PipelineError::Parameter(format!(
            "filter window must be odd, got {}",
            window
        )));
    }
    if window > data.len() {
        return Err(PipelineError::Parameter(format!(
            "filter window {} exceeds sequence length {}",
            window,
            data.len()
        )));
    }

    let n = data.len();
    let half = window / 2;
    let order = poly_order.min(window - 1);

    if window == 1 {
        return Ok(data.clone());
    }

    // Weights for the window center: with evenly spaced samples the fitted
    // value at x=0 is a fixed linear combination of the window samples.
    let weights = central_weights(window, order)?;

    let mut smoothed = Array1::<f64>::zeros(n);
    for i in half..n - half {
        let mut acc = 0.0;
        for (j, w) in weights.iter().enumerate() {
            acc += w * data[i - half + j];
        }
        smoothed[i] = acc;
    }

    // Leading edge: fit the first full window once and evaluate its
    // polynomial at the uncovered positions.
    let xs: Vec<f64> = (0..window).map(|j| j as f64 - half as f64).collect();
    let head_ys: Vec<f64> = data.iter().take(window).cloned().collect();
    let head_coeffs = polyfit(&xs, &head_ys, order)?;
    for i in 0..half {
        smoothed[i] = polyval(&head_coeffs, i as f64 - half as f64);
    }

    // Trailing edge: same with the last full window.
    let tail_ys: Vec<f64> = data.iter().skip(n - window).cloned().collect();
    let tail_coeffs = polyfit(&xs, &tail_ys, order)?;
    for i in n - half..n {
        smoothed[i] = polyval(&tail_coeffs, (i + window - n) as f64 - half as f64);
    }

    Ok(smoothed)
}

/// The two-stage cascade applied to every smoothed kinematic channel:
/// fixed small median prefilter, then Savitzky-Golay over `filter_window`.
/// Output length equals input length; pure function of its arguments.
pub fn smooth_channel(
    data: &Array1<f64>,
    filter_window: usize,
) -> Result<Array1<f64>, PipelineError> {
    let prefiltered = median_filter(data, MEDIAN_PREFILTER_KERNEL)?;
    savgol_filter(&prefiltered, filter_window, SAVGOL_POLY_ORDER)
}

/// Coefficients c such that the fitted polynomial value at the window center
/// equals sum(c[j] * y[j]). Derived from the normal equations of the
/// least-squares fit over centered positions -half..=half.
fn central_weights(window: usize, order: usize) -> Result<Vec<f64>, PipelineError> {
    let m = order + 1;
    let half = window / 2;

    let mut gram = vec![vec![0.0f64; m]; m];
    for j in 0..window {
        let x = j as f64 - half as f64;
        let mut powers = vec![1.0f64; 2 * m - 1];
        for k in 1..powers.len() {
            powers[k] = powers[k - 1] * x;
        }
        for r in 0..m {
            for c in 0..m {
                gram[r][c] += powers[r + c];
            }
        }
    }

    let mut rhs = vec![0.0f64; m];
    rhs[0] = 1.0;
    let z = solve_linear_system(gram, rhs).ok_or_else(|| {
        PipelineError::Parameter(format!(
            "degenerate smoothing fit for window {} order {}",
            window, order
        ))
    })?;

    let weights = (0..window)
        .map(|j| {
            let x = j as f64 - half as f64;
            let mut acc = 0.0;
            let mut xp = 1.0;
            for &zk in &z {
                acc += zk * xp;
                xp *= x;
            }
            acc
        })
        .collect();
    Ok(weights)
}

/// Least-squares polynomial fit via the normal equations.
fn polyfit(xs: &[f64], ys: &[f64], order: usize) -> Result<Vec<f64>, PipelineError> {
    let m = order + 1;
    let mut gram = vec![vec![0.0f64; m]; m];
    let mut rhs = vec![0.0f64; m];

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let mut powers = vec![1.0f64; 2 * m - 1];
        for k in 1..powers.len() {
            powers[k] = powers[k - 1] * x;
        }
        for r in 0..m {
            for c in 0..m {
                gram[r][c] += powers[r + c];
            }
            rhs[r] += y * powers[r];
        }
    }

    solve_linear_system(gram, rhs).ok_or_else(|| {
        PipelineError::Parameter(format!(
            "degenerate polynomial fit over {} samples, order {}",
            xs.len(),
            order
        ))
    })
}

fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Gaussian elimination with partial pivoting. Returns None for a singular
/// system.
fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0f64; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in row + 1..n {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_filter_suppresses_impulse() {
        let data = Array1::from(vec![1.0, 1.0, 50.0, 1.0, 1.0]);
        let filtered = median_filter(&data, 3).unwrap();
        assert_eq!(filtered, Array1::from(vec![1.0, 1.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn median_filter_zero_pads_edges() {
        // First window is (0, 5, 2) -> 2; last is (2, 5, 0) -> 2.
        let data = Array1::from(vec![5.0, 2.0, 5.0]);
        let filtered = median_filter(&data, 3).unwrap();
        assert_eq!(filtered, Array1::from(vec![2.0, 5.0, 2.0]));
    }

    #[test]
    fn median_filter_rejects_even_kernel() {
        let data = Array1::from(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            median_filter(&data, 4),
            Err(PipelineError::Parameter(_))
        ));
    }

    #[test]
    fn savgol_preserves_length() {
        for len in [5usize, 25, 100] {
            let data = Array1::from((0..len).map(|i| (i as f64).sin()).collect::<Vec<f64>>());
            let smoothed = savgol_filter(&data, 5, 3).unwrap();
            assert_eq!(smoothed.len(), len);
        }
    }

    #[test]
    fn savgol_rejects_even_window() {
        let data = Array1::from(vec![0.0; 10]);
        assert!(matches!(
            savgol_filter(&data, 4, 3),
            Err(PipelineError::Parameter(_))
        ));
    }

    #[test]
    fn savgol_rejects_window_longer_than_data() {
        let data = Array1::from(vec![0.0; 10]);
        assert!(matches!(
            savgol_filter(&data, 11, 3),
            Err(PipelineError::Parameter(_))
        ));
    }

    #[test]
    fn savgol_reproduces_cubic_exactly() {
        // A degree-3 fit passes through any cubic, edges included.
        let data =
            Array1::from((0..40).map(|i| {
                let x = i as f64 * 0.1;
                0.5 * x * x * x - 2.0 * x * x + x - 3.0
            }).collect::<Vec<f64>>());
        let smoothed = savgol_filter(&data, 9, 3).unwrap();
        for (raw, s) in data.iter().zip(smoothed.iter()) {
            assert!((raw - s).abs() < 1e-8, "cubic distorted: {} vs {}", raw, s);
        }
    }

    #[test]
    fn savgol_window_equal_to_length_is_accepted() {
        let data = Array1::from((0..7).map(|i| i as f64).collect::<Vec<f64>>());
        let smoothed = savgol_filter(&data, 7, 3).unwrap();
        assert_eq!(smoothed.len(), 7);
        for (raw, s) in data.iter().zip(smoothed.iter()) {
            assert!((raw - s).abs() < 1e-8);
        }
    }

    #[test]
    fn minimum_window_clamps_fit_order() {
        // window 3 cannot carry a cubic; the clamped fit must still run.
        let data = Array1::from(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        let smoothed = savgol_filter(&data, 3, 3).unwrap();
        for (raw, s) in data.iter().zip(smoothed.iter()) {
            assert!((raw - s).abs() < 1e-8);
        }
    }

    #[test]
    fn smooth_channel_is_deterministic() {
        let data = Array1::from((0..60).map(|i| ((i as f64) * 0.3).cos()).collect::<Vec<f64>>());
        let a = smooth_channel(&data, 7).unwrap();
        let b = smooth_channel(&data, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), data.len());
    }
}

// src/data_analysis/smoothing.rs
