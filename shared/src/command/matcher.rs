use crate::{
    command::{CommandAction, CommandDefinition, CommandId, CommandLibrary},
    timing::{flow_beat, FlowPressure},
    TimeMs,
};

/// How strictly inputs are checked against a definition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Every action of the definition has been played and validated
    Exact,
    /// The inputs so far form a valid beginning of the definition
    Predicted,
}

/// Appends every definition matching the progression buffer to `output`, in
/// library declaration order. Callers act on `output[0]`.
pub fn get_command(
    library: &CommandLibrary,
    progression: &[FlowPressure],
    beat_interval: TimeMs,
    mode: MatchMode,
    output: &mut Vec<CommandId>,
) {
    if progression.is_empty() {
        return;
    }

    for (id, definition) in library.iter() {
        let matched = match mode {
            MatchMode::Exact => matches_exact(definition, progression, beat_interval),
            MatchMode::Predicted => matches_prediction(definition, progression, beat_interval),
        };
        if matched {
            output.push(id);
        }
    }
}

// The last N inputs must play the N actions, in order.
fn matches_exact(definition: &CommandDefinition, progression: &[FlowPressure], beat_interval: TimeMs) -> bool {
    let actions = definition.actions();
    if actions.is_empty() || progression.len() < actions.len() {
        return false;
    }

    let tail = &progression[progression.len() - actions.len()..];
    aligns(actions, tail, beat_interval, MatchMode::Exact)
}

// The longest tail of the inputs that plays the first actions of the definition,
// leaving at least one action unplayed.
fn matches_prediction(
    definition: &CommandDefinition,
    progression: &[FlowPressure],
    beat_interval: TimeMs,
) -> bool {
    let actions = definition.actions();
    let longest = progression.len().min(actions.len().saturating_sub(1));

    (1..=longest).rev().any(|played| {
        let tail = &progression[progression.len() - played..];
        aligns(&actions[..played], tail, beat_interval, MatchMode::Predicted)
    })
}

fn aligns(actions: &[CommandAction], pressures: &[FlowPressure], beat_interval: TimeMs, mode: MatchMode) -> bool {
    let (Some(first_action), Some(first)) = (actions.first(), pressures.first()) else {
        return false;
    };
    let command_start = command_start(first_action, first, beat_interval);

    actions.iter().zip(pressures).all(|(action, pressure)| {
        if action.key() != pressure.key {
            return false;
        }
        match mode {
            MatchMode::Exact => action.beat().is_valid(pressure, command_start, beat_interval),
            MatchMode::Predicted => {
                action
                    .beat()
                    .is_prediction_valid(pressure, command_start, beat_interval)
            }
        }
    })
}

// Beat 0 of the command, taken from where the first input landed relative to
// the first action's own target and offset.
fn command_start(first_action: &CommandAction, first: &FlowPressure, beat_interval: TimeMs) -> TimeMs {
    let start_beat = flow_beat(first.time - first_action.beat().target_time(beat_interval), beat_interval);
    start_beat as TimeMs * beat_interval
}
