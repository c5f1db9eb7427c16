use crate::{
    command::{CommandId, CommandLibrary},
    config::RhythmConfig,
    engine::{apply_command, get_next_command, ApplyOutcome, RhythmPlayer},
    Tick,
};

/// Result of one tick for one player
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Command selected by the progression stage during this tick
    pub selected: Option<CommandId>,
    pub applied: ApplyOutcome,
}

/// Runs the progression stage then the application stage for one player
pub fn process_player(
    player: &mut RhythmPlayer,
    library: &CommandLibrary,
    config: &RhythmConfig,
    tick: Tick,
) -> TickOutcome {
    let selected = get_next_command(player, library, config, tick);
    let applied = apply_command(player, library, config, tick);
    TickOutcome { selected, applied }
}

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        /// Runs one tick for every player. Outcomes are in `players` order.
        pub fn process_commands(
            players: &mut [RhythmPlayer],
            library: &CommandLibrary,
            config: &RhythmConfig,
            tick: Tick,
        ) -> Vec<TickOutcome> {
            players
                .iter_mut()
                .map(|player| process_player(player, library, config, tick))
                .collect()
        }
    } else {
        use rayon::prelude::*;

        /// Runs one tick for every player, spread over the rayon pool.
        /// Outcomes are in `players` order.
        pub fn process_commands(
            players: &mut [RhythmPlayer],
            library: &CommandLibrary,
            config: &RhythmConfig,
            tick: Tick,
        ) -> Vec<TickOutcome> {
            players
                .par_iter_mut()
                .map(|player| process_player(player, library, config, tick))
                .collect()
        }
    }
}
