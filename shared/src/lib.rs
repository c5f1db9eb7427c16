//! # Cadence Shared
//! Rhythm command engine shared between cadence-server & cadence-client
//! crates: input timing, command matching, command scheduling, and the
//! snapshot codec used to synchronize command bindings.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

pub use cadence_serde::{
    BitCounter, BitReader, BitWrite, BitWriter, ConstBitLength, Serde, SerdeErr,
    SerdeIntegerConversion, SignedInteger, SignedVariableInteger, UnsignedInteger,
    UnsignedVariableInteger,
};

mod command;
mod config;
mod engine;
mod input;
mod snapshot;
mod timing;
mod types;
mod wrapping_number;

pub use command::{
    get_command, CommandAction, CommandDefinition, CommandId, CommandLibrary, LibraryError,
    MatchMode, DEFAULT_COMMAND_DURATION, MAX_IDENTIFIER_LENGTH,
};
pub use config::{MercyProfile, RhythmConfig};
pub use engine::{
    apply_command, command_power, get_next_command, process_commands, process_player,
    try_apply_command, ApplyOutcome, CommandPhase, ExecutingCommandState, GameCommandState,
    ResetReason, RhythmEngineLocalState, RhythmEngineSettings, RhythmEvent, RhythmEvents,
    RhythmPlayer, RhythmWorld, SchedulingError, TickOutcome,
};
pub use input::PressureInput;
pub use snapshot::{
    truncate_name, CommandIdentifierSnapshot, CommandResourceSnapshot, RhythmCommandIdentifier,
    RhythmCommandResource, SnapshotData, SnapshotError, SnapshotReceiver, SnapshotSender,
    SyncWithComponent,
};
pub use timing::{
    activation_beat, flow_beat, is_valid, unlerp, window_score, Beat, FlowPressure,
    PressureRelease, DEFAULT_SCORE_LIMIT,
};
pub use types::{HostType, PlayerKey, RhythmKey, Tick, TimeMs};
pub use wrapping_number::{sequence_greater_than, sequence_less_than, wrapping_diff};
