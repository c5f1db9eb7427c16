use crate::{timing::FlowPressure, HostType};

/// Slack, in beats, granted before a running command is abandoned.
///
/// The authoritative side sees inputs late and out of step with the acting
/// player, so it runs with wider margins than the predictive side. Both roles
/// execute the same application stage with their own profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MercyProfile {
    /// Beats the last scored input may trail the current beat
    pub input_mercy: i32,
    /// Beats the command window may have ended before the current beat
    pub command_mercy: i32,
}

impl MercyProfile {
    pub const fn predictive() -> Self {
        Self {
            input_mercy: 1,
            command_mercy: 0,
        }
    }

    pub const fn authoritative() -> Self {
        Self {
            input_mercy: 2,
            command_mercy: 3,
        }
    }

    pub fn for_host(host_type: HostType) -> Self {
        match host_type {
            HostType::Server => Self::authoritative(),
            HostType::Client => Self::predictive(),
        }
    }
}

impl Default for MercyProfile {
    fn default() -> Self {
        Self::predictive()
    }
}

/// Tuning of the command progression and application stages
#[derive(Clone, Debug, PartialEq)]
pub struct RhythmConfig {
    /// Beats between the last input of a sequence and the start of the
    /// command it triggers. Absorbs beat-boundary disagreement between peers.
    pub activation_delay_beats: i32,
    /// Beats after a command ends during which a follow-up still chains
    pub chain_grace_beats: i32,
    /// Largest absolute deviation still scored as perfect
    pub perfect_threshold: f32,
    /// Power credited for a perfect input
    pub perfect_power: f32,
    /// Power credited for an accepted but imprecise input
    pub partial_power: f32,
    pub mercy: MercyProfile,
}

impl RhythmConfig {
    pub fn for_host(host_type: HostType) -> Self {
        Self {
            mercy: MercyProfile::for_host(host_type),
            ..Self::default()
        }
    }
}

impl Default for RhythmConfig {
    fn default() -> Self {
        Self {
            activation_delay_beats: 1,
            chain_grace_beats: 4,
            perfect_threshold: FlowPressure::PERFECT,
            perfect_power: 1.0,
            partial_power: 0.33,
            mercy: MercyProfile::default(),
        }
    }
}
