//! # Cadence Server
//! The authoritative host of the rhythm engine. Runs every player's command
//! stages with the authoritative mercy profile, and keeps connected users in
//! sync with baseline-diffed snapshots of the commands players are bound to.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use cadence_shared::{
        BitReader, BitWrite, BitWriter, CommandAction, CommandDefinition, CommandId,
        CommandLibrary, FlowPressure, PlayerKey, PressureInput, RhythmEngineSettings, RhythmEvent,
        RhythmEvents, Serde, SerdeErr, Tick, TimeMs,
    };
}

mod error;
mod server;
mod user;

pub use error::CadenceServerError;
pub use server::{Server, ServerConfig};
pub use user::{User, UserKey};
