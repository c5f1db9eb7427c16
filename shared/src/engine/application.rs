use log::{debug, info};
use thiserror::Error;

use crate::{
    command::CommandLibrary,
    config::RhythmConfig,
    engine::RhythmPlayer,
    timing::flow_beat,
    Tick,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    #[error("application stage ran at tick {tick} before the progression stage (last progression tick: {last_progression_tick:?})")]
    StageOutOfOrder {
        tick: Tick,
        last_progression_tick: Option<Tick>,
    },
}

/// Why the application stage dropped the current command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetReason {
    /// The engine cannot run commands
    Disabled,
    /// The engine is inside its recovery window
    Recovery,
    /// Neither new inputs nor the running command kept the chain alive
    Expired,
    /// No target and no candidate
    NoTarget,
    /// The last inputs broke every candidate
    NoPrediction,
}

/// What the application stage did for one player during a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Nothing selected, nothing to drop
    Idle,
    Reset(ResetReason),
    /// A command is selected but its first beat has not started
    Waiting,
    /// The selected command was committed during this tick
    Applied,
    /// A previously applied command is still in effect
    Running,
}

/// Runs the application stage for one player.
///
/// # Panics
///
/// If [`get_next_command`](crate::engine::get_next_command) has not run for
/// `tick`. See [`try_apply_command`].
pub fn apply_command(
    player: &mut RhythmPlayer,
    library: &CommandLibrary,
    config: &RhythmConfig,
    tick: Tick,
) -> ApplyOutcome {
    match try_apply_command(player, library, config, tick) {
        Ok(outcome) => outcome,
        Err(err) => panic!("{}", err),
    }
}

/// Runs the application stage for one player, committing the selected
/// command once its first activation beat is reached.
pub fn try_apply_command(
    player: &mut RhythmPlayer,
    library: &CommandLibrary,
    config: &RhythmConfig,
    tick: Tick,
) -> Result<ApplyOutcome, SchedulingError> {
    let last_progression_tick = player.progression_tick();
    if last_progression_tick != Some(tick) {
        return Err(SchedulingError::StageOutOfOrder {
            tick,
            last_progression_tick,
        });
    }

    if !player.state.can_run_commands {
        player.command_state.reset();
        return Ok(ApplyOutcome::Reset(ResetReason::Disabled));
    }

    if let Some(reason) = reset_reason(player, config) {
        let had_target = player.executing.command_target.is_some();
        player.command_state.reset();
        player.executing.clear_target();

        if had_target {
            debug!("command dropped: {:?}", reason);
            return Ok(ApplyOutcome::Reset(reason));
        }
        return Ok(ApplyOutcome::Idle);
    }

    let Some(target) = player.executing.command_target else {
        return Ok(ApplyOutcome::Idle);
    };

    if !player.executing.waiting_for_apply {
        return Ok(ApplyOutcome::Running);
    }

    let activation_beat = player.activation_beat();
    if activation_beat < player.executing.activation_beat_start {
        return Ok(ApplyOutcome::Waiting);
    }

    let duration = library
        .get(target)
        .map_or(0, |definition| definition.duration());
    let beat_interval = player.beat_interval();
    let start = player.executing.activation_beat_start;

    player.command_state.start_time_ms = start as i64 * beat_interval;
    player.command_state.end_time_ms = player.executing.activation_beat_end as i64 * beat_interval;
    player.command_state.chain_end_time_ms =
        (start + duration + config.chain_grace_beats) as i64 * beat_interval;
    player.executing.waiting_for_apply = false;

    info!(
        "applied '{}' over {}..{}ms",
        library.name_of(target).unwrap_or_default(),
        player.command_state.start_time_ms,
        player.command_state.end_time_ms
    );

    Ok(ApplyOutcome::Applied)
}

fn reset_reason(player: &RhythmPlayer, config: &RhythmConfig) -> Option<ResetReason> {
    let flow_beat_now = player.flow_beat();
    if player.state.is_recovery(flow_beat_now) {
        return Some(ResetReason::Recovery);
    }

    if player.executing.command_target.is_some() {
        let check_stop_beat = i32::max(
            player.state.last_pressure.flow_beat + config.mercy.input_mercy,
            flow_beat(player.command_state.end_time_ms, player.beat_interval()) + config.mercy.command_mercy,
        );
        if player.executing.activation_beat_start < flow_beat_now
            && check_stop_beat < player.activation_beat()
        {
            return Some(ResetReason::Expired);
        }
    } else if player.predicted.is_empty() {
        return Some(ResetReason::NoTarget);
    }

    if player.predicted.is_empty() {
        return Some(ResetReason::NoPrediction);
    }

    None
}
