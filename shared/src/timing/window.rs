use crate::TimeMs;

/// Scores at or above this fraction of a beat are rejected
pub const DEFAULT_SCORE_LIMIT: f64 = 0.6;

// An offset never moves a window past 90% of a beat, so it cannot reach into
// the center of the neighbouring beat.
pub(crate) const MAX_WINDOW_OFFSET: f64 = 0.9;

/// Inverse of a linear interpolation. A degenerate range yields `0`.
pub fn unlerp(a: f64, b: f64, x: f64) -> f64 {
    if a != b {
        (x - a) / (b - a)
    } else {
        0.0
    }
}

/// Distance, in beats, between `elapsed` and the start of the window of
/// `beat_index`, with `elapsed` measured from `command_start`
pub fn window_score(
    beat_index: i32,
    offset: f64,
    command_start: TimeMs,
    elapsed: TimeMs,
    beat_interval: TimeMs,
) -> f64 {
    let interval = beat_interval as f64;
    let elapsed = (elapsed - command_start) as f64;

    let target_timed = beat_index as f64 * interval;
    let target_start = target_timed + interval * offset.clamp(-MAX_WINDOW_OFFSET, MAX_WINDOW_OFFSET);

    unlerp(target_start, target_start + interval, elapsed).abs()
}

/// Whether `elapsed` lands inside the acceptance window of `beat_index`.
/// The window bound itself is rejected.
pub fn is_valid(
    beat_index: i32,
    offset: f64,
    command_start: TimeMs,
    elapsed: TimeMs,
    beat_interval: TimeMs,
    score_limit: f64,
) -> bool {
    let score = window_score(beat_index, offset, command_start, elapsed, beat_interval);
    score < score_limit.min(1.0)
}
