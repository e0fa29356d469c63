//! Score and speed progression
//!
//! The speed setting is modelled on a slider whose value runs from
//! [`SLIDER_MIN`] to [`SLIDER_MAX`]; the base tick interval is
//! `SLIDER_OFFSET - slider`, so a higher setting means a faster game.

/// Lowest slider value (slowest setting)
pub const SLIDER_MIN: u64 = 50;
/// Highest slider value (fastest setting)
pub const SLIDER_MAX: u64 = 300;
/// Slider value plus base speed always adds up to this
pub const SLIDER_OFFSET: u64 = 350;
/// How far one `+`/`-` press moves the slider
pub const SLIDER_STEP: u64 = 25;

/// Fastest base speed reachable through the speed setting, in ms
pub const MIN_BASE_SPEED_MS: u64 = SLIDER_OFFSET - SLIDER_MAX;
/// Slowest base speed reachable through the speed setting, in ms
pub const MAX_BASE_SPEED_MS: u64 = SLIDER_OFFSET - SLIDER_MIN;

/// Tick interval after eating one food
///
/// Shrinks by `step`, never going below `floor`. A speed already below the
/// floor is raised to it.
pub fn next_speed(current: u64, step: u64, floor: u64) -> u64 {
    current.saturating_sub(step).max(floor)
}

/// Clamp a requested base speed to the range the speed setting can express
pub fn clamp_base_speed(speed_ms: u64) -> u64 {
    speed_ms.clamp(MIN_BASE_SPEED_MS, MAX_BASE_SPEED_MS)
}

/// Slider value for a base speed
pub fn slider_value(base_speed_ms: u64) -> u64 {
    SLIDER_OFFSET.saturating_sub(base_speed_ms)
}

/// Base speed one slider step faster
pub fn faster(base_speed_ms: u64) -> u64 {
    clamp_base_speed(base_speed_ms.saturating_sub(SLIDER_STEP))
}

/// Base speed one slider step slower
pub fn slower(base_speed_ms: u64) -> u64 {
    clamp_base_speed(base_speed_ms + SLIDER_STEP)
}

/// Human readable name for a base speed
pub fn speed_label(base_speed_ms: u64) -> &'static str {
    match slider_value(base_speed_ms) {
        v if v <= 100 => "Very Slow",
        v if v <= 150 => "Slow",
        v if v <= 200 => "Normal",
        v if v <= 250 => "Fast",
        _ => "Very Fast",
    }
}
