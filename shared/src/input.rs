use cadence_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

use crate::{timing::FlowPressure, RhythmKey, TimeMs};

/// An input as sent by the acting peer. Scores are not sent, the receiver
/// derives them from its own tempo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressureInput {
    pub key: RhythmKey,
    pub time: TimeMs,
    /// Release time of a held input
    pub release_time: Option<TimeMs>,
}

impl PressureInput {
    pub fn new(key: RhythmKey, time: TimeMs) -> Self {
        Self {
            key,
            time,
            release_time: None,
        }
    }

    pub fn with_release(mut self, release_time: TimeMs) -> Self {
        self.release_time = Some(release_time);
        self
    }

    pub fn to_pressure(&self, beat_interval: TimeMs) -> FlowPressure {
        let pressure = FlowPressure::new(self.key, self.time, beat_interval);
        match self.release_time {
            Some(release_time) => pressure.with_release(release_time, beat_interval),
            None => pressure,
        }
    }
}

impl From<&FlowPressure> for PressureInput {
    fn from(pressure: &FlowPressure) -> Self {
        Self {
            key: pressure.key,
            time: pressure.time,
            release_time: pressure.release.map(|release| release.time),
        }
    }
}

impl Serde for PressureInput {
    fn ser(&self, writer: &mut dyn BitWrite) {
        UnsignedVariableInteger::<7>::new(self.key).ser(writer);
        self.time.ser(writer);
        self.release_time.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let key: RhythmKey = UnsignedVariableInteger::<7>::de(reader)?.try_to()?;
        let time = TimeMs::de(reader)?;
        let release_time = Option::<TimeMs>::de(reader)?;
        Ok(Self {
            key,
            time,
            release_time,
        })
    }

    fn bit_length(&self) -> u32 {
        UnsignedVariableInteger::<7>::new(self.key).bit_length()
            + self.time.bit_length()
            + self.release_time.bit_length()
    }
}
