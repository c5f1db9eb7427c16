use std::default::Default;

use cadence_shared::{HostType, RhythmConfig, RhythmEngineSettings};

/// Contains Config properties which will be used by a Client
#[derive(Clone)]
pub struct ClientConfig {
    /// Tuning of the command stages, with the predictive mercy profile
    pub rhythm: RhythmConfig,
    /// Settings of the locally simulated player
    pub engine: RhythmEngineSettings,
    /// Number of decoded snapshot frames kept as possible baselines
    pub snapshot_history: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rhythm: RhythmConfig::for_host(HostType::Client),
            engine: RhythmEngineSettings::default(),
            snapshot_history: 64,
        }
    }
}
