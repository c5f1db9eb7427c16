use std::default::Default;

use cadence_shared::{HostType, RhythmConfig, RhythmEngineSettings};

/// Contains Config properties which will be used by the Server
#[derive(Clone)]
pub struct ServerConfig {
    /// Tuning of the command stages, with the authoritative mercy profile
    pub rhythm: RhythmConfig,
    /// Settings given to newly spawned players
    pub engine: RhythmEngineSettings,
    /// Number of unacknowledged snapshot frames kept per user
    pub snapshot_history: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rhythm: RhythmConfig::for_host(HostType::Server),
            engine: RhythmEngineSettings::default(),
            snapshot_history: 64,
        }
    }
}
