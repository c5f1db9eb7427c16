use crate::{
    command::CommandId,
    engine::components::{
        ExecutingCommandState, GameCommandState, RhythmEngineLocalState, RhythmEngineSettings,
    },
    snapshot::RhythmCommandResource,
    timing::FlowPressure,
    RhythmKey, Tick, TimeMs,
};

/// Every piece of rhythm state owned by a single player
#[derive(Clone, Debug, Default)]
pub struct RhythmPlayer {
    pub settings: RhythmEngineSettings,
    pub state: RhythmEngineLocalState,
    pub executing: ExecutingCommandState,
    pub command_state: GameCommandState,
    /// Inputs played since the last committed command
    pub progression: Vec<FlowPressure>,
    /// Candidates produced by the last matching pass
    pub predicted: Vec<CommandId>,
    progression_tick: Option<Tick>,
}

impl RhythmPlayer {
    pub fn new(settings: RhythmEngineSettings) -> Self {
        Self {
            settings,
            state: RhythmEngineLocalState::new(),
            ..Default::default()
        }
    }

    /// Scores a press at `time` and appends it to the progression buffer
    pub fn press(&mut self, key: RhythmKey, time: TimeMs) -> FlowPressure {
        let pressure = FlowPressure::new(key, time, self.settings.beat_interval);
        self.push_pressure(pressure);
        pressure
    }

    pub fn push_pressure(&mut self, pressure: FlowPressure) {
        self.state.last_pressure = pressure;
        self.progression.push(pressure);
    }

    pub fn set_elapsed(&mut self, elapsed: TimeMs) {
        self.state.elapsed = elapsed;
    }

    pub fn beat_interval(&self) -> TimeMs {
        self.settings.beat_interval
    }

    pub fn flow_beat(&self) -> i32 {
        self.state.flow_beat(&self.settings)
    }

    pub fn activation_beat(&self) -> i32 {
        self.state.activation_beat(&self.settings)
    }

    /// The command resource currently bound to this player
    pub fn command_resource(&self) -> RhythmCommandResource {
        RhythmCommandResource::new(self.executing.command_target)
    }

    pub(crate) fn progression_tick(&self) -> Option<Tick> {
        self.progression_tick
    }

    pub(crate) fn stamp_progression_tick(&mut self, tick: Tick) {
        self.progression_tick = Some(tick);
    }
}
