use std::vec::IntoIter;

use crate::{
    command::CommandId,
    engine::{ApplyOutcome, ResetReason, TickOutcome},
    PlayerKey, Tick,
};

/// Something a tick did to a player's command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RhythmEvent {
    Selected { player: PlayerKey, command: CommandId },
    Applied { player: PlayerKey, command: CommandId },
    Reset { player: PlayerKey, reason: ResetReason },
}

pub struct RhythmEvents {
    tick: Tick,
    events: Vec<RhythmEvent>,
}

impl RhythmEvents {
    /// Collects the events of a tick from per-player outcomes. The applied
    /// command is read from `target_of`.
    pub fn from_outcomes(
        tick: Tick,
        outcomes: Vec<(PlayerKey, TickOutcome)>,
        target_of: impl Fn(&PlayerKey) -> Option<CommandId>,
    ) -> Self {
        let mut events = Vec::new();
        for (player, outcome) in outcomes {
            if let Some(command) = outcome.selected {
                events.push(RhythmEvent::Selected { player, command });
            }
            match outcome.applied {
                ApplyOutcome::Applied => {
                    if let Some(command) = target_of(&player) {
                        events.push(RhythmEvent::Applied { player, command });
                    }
                }
                ApplyOutcome::Reset(reason) => {
                    events.push(RhythmEvent::Reset { player, reason });
                }
                ApplyOutcome::Idle | ApplyOutcome::Waiting | ApplyOutcome::Running => {}
            }
        }
        Self { tick, events }
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RhythmEvent> {
        self.events.iter()
    }

    /// Takes every event out, leaving the collection empty
    pub fn read(&mut self) -> IntoIter<RhythmEvent> {
        std::mem::take(&mut self.events).into_iter()
    }
}
