//! # Cadence Client
//! A peer of the rhythm engine. Predicts the commands of its own players with
//! the predictive mercy profile and follows the command bindings the server
//! sends as snapshots.

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

mod client;
mod client_config;
mod error;

pub use client::Client;
pub use client_config::ClientConfig;
pub use error::CadenceClientError;
