// src/data_analysis/pulse_extraction.rs

use crate::data_input::trajectory_data::TrajectoryRowData;
use crate::error::PipelineError;

/// One maximal contiguous run of frames with the odor flag high.
/// `start_idx` is the first high frame after a 0->1 transition, `stop_idx`
/// the last high frame before the following 1->0 drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulseInterval {
    pub start_idx: usize,
    pub stop_idx: usize,
    pub label: String,
}

/// Scans the odor-state flag column and yields the ordered list of closed
/// pulse intervals, labeled with the odor name sampled at each pulse start
/// (surrounding whitespace stripped).
///
/// Pulses are non-nested: at most one pulse is open at a time, which follows
/// from the flag being strictly 0/1. A pulse still open when the table ends
/// is dropped with a warning rather than emitted half-formed.
///
/// Fails with a data-integrity error on flag values outside {0, 1} and on a
/// 1->0 drop with no preceding rise (table starting mid-pulse).
pub fn extract_pulses(rows: &[TrajectoryRowData]) -> Result<Vec<PulseInterval>, PipelineError> {
    for (i, row) in rows.iter().enumerate() {
        if row.odor_state != 0 && row.odor_state != 1 {
            return Err(PipelineError::DataIntegrity(format!(
                "odor_state must be 0 or 1, got {} at frame {}",
                row.odor_state, i
            )));
        }
    }

    let mut intervals: Vec<PulseInterval> = Vec::new();
    let mut pending_start: Option<usize> = None;

    for i in 0..rows.len().saturating_sub(1) {
        let delta = rows[i + 1].odor_state - rows[i].odor_state;
        if delta == 1 {
            pending_start = Some(i + 1);
        } else if delta == -1 {
            match pending_start.take() {
                Some(start_idx) => {
                    intervals.push(PulseInterval {
                        start_idx,
                        stop_idx: i,
                        label: rows[start_idx].odor_name.trim().to_string(),
                    });
                }
                None => {
                    return Err(PipelineError::DataIntegrity(format!(
                        "odor pulse stop at frame {} with no preceding start",
                        i
                    )));
                }
            }
        }
    }

    if let Some(start_idx) = pending_start {
        eprintln!(
            "Warning: Dropping odor pulse starting at frame {}: still open at end of table",
            start_idx
        );
    }

    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_from(states: &[i64], names: &[&str]) -> Vec<TrajectoryRowData> {
        states
            .iter()
            .zip(names.iter())
            .map(|(&odor_state, &name)| TrajectoryRowData {
                odor_state,
                odor_name: name.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn extracts_labeled_intervals() {
        let rows = rows_from(&[0, 1, 1, 0, 0, 1, 0], &["", "A", "A", "", "", "B", ""]);
        let intervals = extract_pulses(&rows).unwrap();
        assert_eq!(
            intervals,
            vec![
                PulseInterval { start_idx: 1, stop_idx: 2, label: "A".to_string() },
                PulseInterval { start_idx: 5, stop_idx: 5, label: "B".to_string() },
            ]
        );
    }

    #[test]
    fn labels_are_whitespace_stripped() {
        let rows = rows_from(&[0, 1, 0], &["", "  MO  ", ""]);
        let intervals = extract_pulses(&rows).unwrap();
        assert_eq!(intervals[0].label, "MO");
    }

    #[test]
    fn intervals_are_ordered_and_non_overlapping() {
        let rows = rows_from(
            &[0, 1, 0, 1, 1, 0, 1, 0, 0],
            &["", "A", "", "B", "B", "", "C", "", ""],
        );
        let intervals = extract_pulses(&rows).unwrap();
        assert_eq!(intervals.len(), 3);
        for interval in &intervals {
            assert!(interval.start_idx <= interval.stop_idx);
        }
        for pair in intervals.windows(2) {
            assert!(pair[0].stop_idx < pair[1].start_idx);
        }
    }

    #[test]
    fn unclosed_trailing_pulse_is_dropped() {
        let rows = rows_from(&[0, 0, 1, 1], &["", "", "A", "A"]);
        let intervals = extract_pulses(&rows).unwrap();
        assert!(intervals.is_empty());
    }

    #[test]
    fn stop_before_any_start_is_an_error() {
        let rows = rows_from(&[1, 1, 0], &["A", "A", ""]);
        assert!(matches!(
            extract_pulses(&rows),
            Err(PipelineError::DataIntegrity(_))
        ));
    }

    #[test]
    fn non_binary_state_is_an_error() {
        let rows = rows_from(&[0, 2, 0], &["", "A", ""]);
        assert!(matches!(
            extract_pulses(&rows),
            Err(PipelineError::DataIntegrity(_))
        ));
    }
}

// src/data_analysis/pulse_extraction.rs
