mod application;
mod components;
mod events;
mod player;
mod process;
mod progression;
mod world;

pub use application::{apply_command, try_apply_command, ApplyOutcome, ResetReason, SchedulingError};
pub use components::{
    CommandPhase, ExecutingCommandState, GameCommandState, RhythmEngineLocalState,
    RhythmEngineSettings,
};
pub use events::{RhythmEvent, RhythmEvents};
pub use player::RhythmPlayer;
pub use process::{process_commands, process_player, TickOutcome};
pub use progression::{command_power, get_next_command};
pub use world::RhythmWorld;
