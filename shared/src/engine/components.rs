use crate::{
    command::CommandId,
    timing::{activation_beat, flow_beat, FlowPressure},
    TimeMs,
};

/// Where a player's current command stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandPhase {
    Idle,
    WaitingForApply,
    Applied,
}

/// The command a player is about to run, or is running
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "bevy_support", derive(bevy_ecs::component::Component))]
pub struct ExecutingCommandState {
    /// Last committed command, kept for combo chaining
    pub previous: Option<CommandId>,
    pub command_target: Option<CommandId>,
    pub activation_beat_start: i32,
    pub activation_beat_end: i32,
    /// Selected but not committed to the game command state yet
    pub waiting_for_apply: bool,
    power: f32,
}

impl ExecutingCommandState {
    /// Quality of the inputs behind the current target, in `[0, 1]`
    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn set_power(&mut self, power: f32) {
        self.power = if power.is_nan() {
            0.0
        } else {
            power.clamp(0.0, 1.0)
        };
    }

    pub fn phase(&self) -> CommandPhase {
        match (self.command_target, self.waiting_for_apply) {
            (None, _) => CommandPhase::Idle,
            (Some(_), true) => CommandPhase::WaitingForApply,
            (Some(_), false) => CommandPhase::Applied,
        }
    }

    /// Makes `target` the next command, active over `[start, end)` beats
    pub fn select(&mut self, target: CommandId, activation_beat_start: i32, activation_beat_end: i32, power: f32) {
        if self.command_target.is_some() {
            self.previous = self.command_target;
        }
        self.command_target = Some(target);
        self.activation_beat_start = activation_beat_start;
        self.activation_beat_end = activation_beat_end;
        self.waiting_for_apply = true;
        self.set_power(power);
    }

    /// Drops the current target. An applied target stays available as
    /// `previous`.
    pub fn clear_target(&mut self) {
        if let Some(target) = self.command_target.take() {
            if !self.waiting_for_apply {
                self.previous = Some(target);
            }
        }
        self.waiting_for_apply = false;
    }
}

/// Effect window of the applied command, read by gameplay systems
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_support", derive(bevy_ecs::component::Component))]
pub struct GameCommandState {
    pub start_time_ms: TimeMs,
    pub end_time_ms: TimeMs,
    /// Until this point a new command continues the current chain
    pub chain_end_time_ms: TimeMs,
}

impl GameCommandState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_active(&self, now: TimeMs) -> bool {
        self.start_time_ms <= now && now < self.end_time_ms
    }

    pub fn can_chain(&self, now: TimeMs) -> bool {
        !self.is_empty() && now < self.chain_end_time_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_support", derive(bevy_ecs::component::Component))]
pub struct RhythmEngineSettings {
    /// Length of one beat
    pub beat_interval: TimeMs,
}

impl RhythmEngineSettings {
    pub fn new(beat_interval: TimeMs) -> Self {
        Self { beat_interval }
    }
}

impl Default for RhythmEngineSettings {
    fn default() -> Self {
        Self::new(500)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "bevy_support", derive(bevy_ecs::component::Component))]
pub struct RhythmEngineLocalState {
    /// Cleared while the engine is being set up or recovers
    pub can_run_commands: bool,
    /// Time since the engine started
    pub elapsed: TimeMs,
    pub last_pressure: FlowPressure,
    recovery_activation_beat: Option<i32>,
}

impl RhythmEngineLocalState {
    /// A running engine, ready to take commands
    pub fn new() -> Self {
        Self {
            can_run_commands: true,
            ..Default::default()
        }
    }

    /// Whether the engine is still in a forced-reset window at `flow_beat`
    pub fn is_recovery(&self, flow_beat: i32) -> bool {
        matches!(self.recovery_activation_beat, Some(until) if until > flow_beat)
    }

    /// Keeps the engine in recovery until `until_beat` is reached
    pub fn start_recovery(&mut self, until_beat: i32) {
        self.recovery_activation_beat = Some(until_beat);
    }

    pub fn recovery_activation_beat(&self) -> Option<i32> {
        self.recovery_activation_beat
    }

    pub fn flow_beat(&self, settings: &RhythmEngineSettings) -> i32 {
        flow_beat(self.elapsed, settings.beat_interval)
    }

    pub fn activation_beat(&self, settings: &RhythmEngineSettings) -> i32 {
        activation_beat(self.elapsed, settings.beat_interval)
    }
}
