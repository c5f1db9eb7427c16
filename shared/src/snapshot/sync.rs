use std::{
    collections::{HashMap, VecDeque},
    hash::Hash,
};

use cadence_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};
use log::{debug, warn};
use thiserror::Error;

use crate::{
    snapshot::SnapshotData,
    wrapping_number::{sequence_greater_than, sequence_less_than, wrapping_diff},
    Tick,
};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot frame for tick {tick} refers to baseline tick {baseline}, which is no longer held")]
    MissingBaseline { tick: Tick, baseline: Tick },
    #[error(transparent)]
    Serde(#[from] SerdeErr),
}

const DEFAULT_HISTORY: usize = 64;

/// Values of every tracked key at one tick
type Frame<K, S> = HashMap<K, S>;

/// Writes baseline-diffed frames for one remote observer.
///
/// Every written frame is kept until the observer acknowledges it or a newer
/// one, at which point it becomes the baseline of the following frames.
pub struct SnapshotSender<K, S> {
    baseline: Option<(Tick, Frame<K, S>)>,
    history: VecDeque<(Tick, Frame<K, S>)>,
    history_size: usize,
}

impl<K: Serde + Copy + Eq + Hash, S: SnapshotData> SnapshotSender<K, S> {
    pub fn new(history_size: usize) -> Self {
        Self {
            baseline: None,
            history: VecDeque::new(),
            history_size: history_size.max(1),
        }
    }

    /// Tick of the last acknowledged frame
    pub fn baseline_tick(&self) -> Option<Tick> {
        self.baseline.as_ref().map(|(tick, _)| *tick)
    }

    /// Writes the frame for `tick`, diffing each value against the value the
    /// observer acknowledged for the same key. Once the baseline is older than
    /// the history window the observer may have evicted it, so a full frame is
    /// written instead.
    pub fn write(&mut self, tick: Tick, writer: &mut dyn BitWrite, values: &[(K, S)]) {
        if let Some(baseline_tick) = self.baseline_tick() {
            let age = i32::from(wrapping_diff(baseline_tick, tick));
            if age < 0 || age as usize >= self.history_size {
                debug!(
                    "baseline {} too old for tick {}, sending a full frame",
                    baseline_tick, tick
                );
                self.baseline = None;
            }
        }

        tick.ser(writer);
        self.baseline_tick().ser(writer);
        UnsignedVariableInteger::<7>::new(values.len() as u64).ser(writer);

        let empty = S::default();
        let mut frame = HashMap::with_capacity(values.len());
        for (key, value) in values {
            let baseline = self
                .baseline
                .as_ref()
                .and_then(|(_, baseline)| baseline.get(key))
                .unwrap_or(&empty);
            key.ser(writer);
            value.serialize(writer, baseline);
            frame.insert(*key, value.clone());
        }

        if writer.is_counter() {
            return;
        }

        self.history.retain(|(sent_tick, _)| *sent_tick != tick);
        self.history.push_back((tick, frame));
        while self.history.len() > self.history_size {
            self.history.pop_front();
        }
    }

    /// Promotes the frame sent at `tick` to baseline. Stale or unknown
    /// acknowledgements are ignored.
    pub fn ack(&mut self, tick: Tick) {
        if let Some(baseline_tick) = self.baseline_tick() {
            if !sequence_greater_than(tick, baseline_tick) {
                return;
            }
        }

        let Some(index) = self.history.iter().position(|(sent_tick, _)| *sent_tick == tick) else {
            debug!("ack for unknown snapshot tick {}", tick);
            return;
        };

        let acked = self.history.drain(..=index).last();
        self.baseline = acked;
    }
}

impl<K: Serde + Copy + Eq + Hash, S: SnapshotData> Default for SnapshotSender<K, S> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY)
    }
}

/// Reads frames written by a [`SnapshotSender`]
pub struct SnapshotReceiver<K, S> {
    history: VecDeque<(Tick, Frame<K, S>)>,
    history_size: usize,
}

impl<K: Serde + Copy + Eq + Hash, S: SnapshotData> SnapshotReceiver<K, S> {
    pub fn new(history_size: usize) -> Self {
        Self {
            history: VecDeque::new(),
            history_size: history_size.max(1),
        }
    }

    /// Reads one frame. Returns its tick and the decoded values, in the order
    /// they were written.
    pub fn read(&mut self, reader: &mut BitReader) -> Result<(Tick, Vec<(K, S)>), SnapshotError> {
        let tick = Tick::de(reader)?;
        let baseline_tick = Option::<Tick>::de(reader)?;
        let count: usize = UnsignedVariableInteger::<7>::de(reader)?.try_to()?;

        let baseline = match baseline_tick {
            Some(baseline) => Some(self.frame(baseline).ok_or_else(|| {
                warn!("dropping snapshot {}: baseline {} is gone", tick, baseline);
                SnapshotError::MissingBaseline { tick, baseline }
            })?),
            None => None,
        };

        let empty = S::default();
        let mut values = Vec::with_capacity(count.min(reader.bits_remaining()));
        for _ in 0..count {
            let key = K::de(reader)?;
            let previous = baseline.and_then(|frame| frame.get(&key)).unwrap_or(&empty);
            let value = S::deserialize(reader, previous)?;
            values.push((key, value));
        }

        self.store(tick, values.iter().cloned().collect());
        Ok((tick, values))
    }

    fn frame(&self, tick: Tick) -> Option<&Frame<K, S>> {
        self.history
            .iter()
            .find(|(stored_tick, _)| *stored_tick == tick)
            .map(|(_, frame)| frame)
    }

    fn store(&mut self, tick: Tick, frame: Frame<K, S>) {
        self.history.retain(|(stored_tick, _)| *stored_tick != tick);
        let index = self
            .history
            .iter()
            .position(|(stored_tick, _)| sequence_less_than(tick, *stored_tick))
            .unwrap_or(self.history.len());
        self.history.insert(index, (tick, frame));
        while self.history.len() > self.history_size {
            self.history.pop_front();
        }
    }
}

impl<K: Serde + Copy + Eq + Hash, S: SnapshotData> Default for SnapshotReceiver<K, S> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY)
    }
}
