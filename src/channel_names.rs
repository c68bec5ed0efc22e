/// Centralized channel naming utilities
///
/// Provides consistent channel names across the plot functions and data
/// analysis modules.
/// Number of derived kinematic channels.
pub const CHANNEL_COUNT: usize = 4;

/// Get the standard channel name for a given index
///
/// # Arguments
/// * `index` - Channel index (0=Ground Speed, 1=Upwind Velocity,
///   2=Angular Velocity, 3=Integrated Heading)
///
/// # Panics
/// Panics if index is greater than 3
#[allow(dead_code)]
pub fn channel_name(index: usize) -> &'static str {
    match index {
        0 => "Ground Speed",
        1 => "Upwind Velocity",
        2 => "Angular Velocity",
        3 => "Integrated Heading",
        _ => panic!(
            "Invalid channel index: {}. Expected 0 (Ground Speed), 1 (Upwind Velocity), 2 (Angular Velocity), or 3 (Integrated Heading)",
            index
        ),
    }
}

/// Get all channel names as a static array
pub const CHANNEL_NAMES: [&str; CHANNEL_COUNT] = [
    "Ground Speed",
    "Upwind Velocity",
    "Angular Velocity",
    "Integrated Heading",
];
