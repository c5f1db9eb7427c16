use std::fmt;

use crate::{timing::Beat, RhythmKey};

/// A single timed key press inside a command
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommandAction {
    beat: Beat,
    key: RhythmKey,
}

impl CommandAction {
    pub fn new(beat: Beat, key: RhythmKey) -> Self {
        Self { beat, key }
    }

    pub fn with(beat_target: i32, key: RhythmKey) -> Self {
        Self::new(Beat::new(beat_target), key)
    }

    pub fn with_offset(beat_target: i32, offset: f64, key: RhythmKey) -> Self {
        Self::new(Beat::new(beat_target).with_offset(offset), key)
    }

    pub fn with_slider(beat_target: i32, slider_length: i32, key: RhythmKey) -> Self {
        Self::new(Beat::new(beat_target).with_slider_length(slider_length), key)
    }

    pub fn with_offset_and_slider(
        beat_target: i32,
        offset: f64,
        slider_length: i32,
        key: RhythmKey,
    ) -> Self {
        Self::new(
            Beat::new(beat_target)
                .with_offset(offset)
                .with_slider_length(slider_length),
            key,
        )
    }

    pub fn beat(&self) -> &Beat {
        &self.beat
    }

    /// The key required for this action to succeed
    pub fn key(&self) -> RhythmKey {
        self.key
    }
}

impl fmt::Display for CommandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(K={} {}.{}-->{}.{})",
            self.key,
            self.beat.target(),
            self.beat.offset(),
            self.beat.end_target(),
            self.beat.offset()
        )
    }
}
