// src/data_input/trajectory_data.rs

/// Structure to hold data parsed from a single row of the trajectory CSV.
/// Row order defines the 0-based frame index; rows that fail to parse are
/// skipped at load time, so the stored frames are always contiguous.
#[derive(Debug, Default, Clone)]
pub struct TrajectoryRowData {
    pub x_pos: f64,        // Ball-frame x position (raw units).
    pub y_pos: f64,        // Ball-frame y position (raw units).
    pub heading: f64,      // Heading direction (radians, any range).
    pub speed: f64,        // Movement speed (raw units per frame).
    pub odor_state: i64,   // Odor-presence flag, expected 0/1.
    pub odor_name: String, // Odor label, meaningful at pulse start.
}

// src/data_input/trajectory_data.rs
