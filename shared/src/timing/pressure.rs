use crate::{timing::flow_beat, RhythmKey, TimeMs};

/// Release of a held input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressureRelease {
    pub time: TimeMs,
    pub flow_beat: i32,
}

/// A scored input, as appended to a player's progression buffer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlowPressure {
    pub key: RhythmKey,
    /// Press time, relative to the start of the rhythm engine
    pub time: TimeMs,
    pub flow_beat: i32,
    /// Signed deviation from `flow_beat`, in beats
    pub score: f32,
    pub release: Option<PressureRelease>,
}

impl FlowPressure {
    /// Largest absolute deviation still considered perfect
    pub const PERFECT: f32 = 0.2;

    /// Scores a press at `time` against the nearest beat
    pub fn new(key: RhythmKey, time: TimeMs, beat_interval: TimeMs) -> Self {
        let flow_beat = flow_beat(time, beat_interval);
        let score = if beat_interval > 0 {
            (time - flow_beat as TimeMs * beat_interval) as f32 / beat_interval as f32
        } else {
            0.0
        };

        Self {
            key,
            time,
            flow_beat,
            score,
            release: None,
        }
    }

    /// Marks the input as held until `time`
    pub fn with_release(mut self, time: TimeMs, beat_interval: TimeMs) -> Self {
        self.release = Some(PressureRelease {
            time,
            flow_beat: flow_beat(time, beat_interval),
        });
        self
    }

    pub fn absolute_score(&self) -> f32 {
        self.score.abs()
    }

    pub fn is_perfect(&self) -> bool {
        self.absolute_score() <= Self::PERFECT
    }

    /// Whether the input was held across at least one beat boundary
    pub fn is_slider(&self) -> bool {
        match self.release {
            Some(release) => release.flow_beat > self.flow_beat,
            None => false,
        }
    }

    /// Time at which the input ended. A tap ends where it started.
    pub fn end_time(&self) -> TimeMs {
        self.release.map_or(self.time, |release| release.time)
    }
}
