use log::{debug, info};

use crate::{
    command::{get_command, CommandId, CommandLibrary, MatchMode},
    config::RhythmConfig,
    engine::RhythmPlayer,
    timing::FlowPressure,
    Tick,
};

/// Runs the progression stage for one player.
///
/// Returns the command selected during this tick, if the progression buffer
/// completed one. Partial sequences only refresh the predicted buffer.
pub fn get_next_command(
    player: &mut RhythmPlayer,
    library: &CommandLibrary,
    config: &RhythmConfig,
    tick: Tick,
) -> Option<CommandId> {
    player.stamp_progression_tick(tick);

    if !player.state.can_run_commands || player.progression.is_empty() {
        return None;
    }

    let beat_interval = player.beat_interval();

    player.predicted.clear();
    get_command(
        library,
        &player.progression,
        beat_interval,
        MatchMode::Exact,
        &mut player.predicted,
    );

    if player.predicted.is_empty() {
        get_command(
            library,
            &player.progression,
            beat_interval,
            MatchMode::Predicted,
            &mut player.predicted,
        );
        if player.predicted.is_empty() {
            debug!("no command starts with the last {} input(s), dropping them", player.progression.len());
            player.progression.clear();
        } else {
            // older inputs can't be part of any later exact match
            let keep = library.longest_sequence().saturating_sub(1);
            let stale = player.progression.len().saturating_sub(keep);
            player.progression.drain(..stale);
            debug!(
                "{} candidate(s) pending after {} input(s)",
                player.predicted.len(),
                player.progression.len()
            );
        }
        return None;
    }

    let target = player.predicted[0];
    let definition = library.get(target)?;

    // `progression` is not empty here
    let last_flow_beat = player.progression[player.progression.len() - 1].flow_beat;
    let activation_beat_start = last_flow_beat + config.activation_delay_beats;
    let activation_beat_end = activation_beat_start + definition.duration();
    let consumed = definition.actions().len().min(player.progression.len());
    let power = command_power(&player.progression[player.progression.len() - consumed..], config);

    player
        .executing
        .select(target, activation_beat_start, activation_beat_end, power);
    player.progression.clear();

    info!(
        "selected '{}' for beats {}..{} (power {:.3})",
        definition.identifier(),
        activation_beat_start,
        activation_beat_end,
        power
    );

    Some(target)
}

/// Mean input quality over `progression`
pub fn command_power(progression: &[FlowPressure], config: &RhythmConfig) -> f32 {
    if progression.is_empty() {
        return 0.0;
    }

    let total: f32 = progression
        .iter()
        .map(|pressure| {
            if pressure.absolute_score() <= config.perfect_threshold {
                config.perfect_power
            } else {
                config.partial_power
            }
        })
        .sum();

    total / progression.len() as f32
}
