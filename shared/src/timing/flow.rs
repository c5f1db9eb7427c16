use crate::TimeMs;

/// Beat nearest to `elapsed`. Inputs are labelled with this beat, so a press
/// slightly ahead of a beat still belongs to it.
pub fn flow_beat(elapsed: TimeMs, beat_interval: TimeMs) -> i32 {
    if beat_interval <= 0 {
        return 0;
    }
    saturate(elapsed.saturating_add(beat_interval / 2).div_euclid(beat_interval))
}

/// Beat currently running at `elapsed`
pub fn activation_beat(elapsed: TimeMs, beat_interval: TimeMs) -> i32 {
    if beat_interval <= 0 {
        return 0;
    }
    saturate(elapsed.div_euclid(beat_interval))
}

fn saturate(beat: i64) -> i32 {
    i32::try_from(beat).unwrap_or(if beat < 0 { i32::MIN } else { i32::MAX })
}
