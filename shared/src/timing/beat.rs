use crate::{
    timing::{is_valid, window::MAX_WINDOW_OFFSET, FlowPressure, DEFAULT_SCORE_LIMIT},
    TimeMs,
};

/// A timing target inside a command, relative to the command start.
///
/// `offset` is kept in `[-1, 1]` and `slider_length` is never negative;
/// both are clamped on every write.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Beat {
    target: i32,
    offset: f64,
    slider_length: i32,
}

impl Beat {
    pub fn new(target: i32) -> Self {
        Self {
            target,
            offset: 0.0,
            slider_length: 0,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.set_offset(offset);
        self
    }

    pub fn with_slider_length(mut self, slider_length: i32) -> Self {
        self.set_slider_length(slider_length);
        self
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Additional beats the input must be held for. `0` is a tap.
    pub fn slider_length(&self) -> i32 {
        self.slider_length
    }

    pub fn set_target(&mut self, target: i32) {
        self.target = target;
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(-1.0, 1.0)
        };
    }

    pub fn set_slider_length(&mut self, slider_length: i32) {
        self.slider_length = slider_length.max(0);
    }

    /// Where a perfect input on this beat lands, relative to the command start
    pub fn target_time(&self, beat_interval: TimeMs) -> TimeMs {
        let offset = self.offset.clamp(-MAX_WINDOW_OFFSET, MAX_WINDOW_OFFSET);
        ((self.target as f64 + offset) * beat_interval as f64).round() as TimeMs
    }

    /// Beat at which a held input must be released
    pub fn end_target(&self) -> i32 {
        self.target + self.slider_length
    }

    pub fn is_start_valid(&self, command_start: TimeMs, elapsed: TimeMs, beat_interval: TimeMs) -> bool {
        is_valid(
            self.target,
            self.offset,
            command_start,
            elapsed,
            beat_interval,
            DEFAULT_SCORE_LIMIT,
        )
    }

    pub fn is_slider_valid(&self, command_start: TimeMs, elapsed: TimeMs, beat_interval: TimeMs) -> bool {
        is_valid(
            self.end_target(),
            self.offset,
            command_start,
            elapsed,
            beat_interval,
            DEFAULT_SCORE_LIMIT,
        )
    }

    /// Whether a completed input satisfies this beat. Taps are exempt from
    /// the release check, anything held must also release on time.
    pub fn is_valid(&self, pressure: &FlowPressure, command_start: TimeMs, beat_interval: TimeMs) -> bool {
        if !self.is_start_valid(command_start, pressure.time, beat_interval) {
            return false;
        }

        let is_tap = !pressure.is_slider() && self.slider_length == 0;
        is_tap || self.is_slider_valid(command_start, pressure.end_time(), beat_interval)
    }

    /// Relaxed check used while the sequence is still being played: an input
    /// that is not (yet) held is accepted for any beat, a held input must
    /// target a slider and release inside its window.
    pub fn is_prediction_valid(
        &self,
        pressure: &FlowPressure,
        command_start: TimeMs,
        beat_interval: TimeMs,
    ) -> bool {
        if !self.is_start_valid(command_start, pressure.time, beat_interval) {
            return false;
        }

        !pressure.is_slider()
            || (self.slider_length > 0
                && self.is_slider_valid(command_start, pressure.end_time(), beat_interval))
    }
}
