use crate::{
    command::CommandLibrary,
    config::RhythmConfig,
    engine::{process_commands, RhythmEngineSettings, RhythmEvents, RhythmPlayer, TickOutcome},
    PlayerKey, Tick, TimeMs,
};

/// Players of one host, stored as parallel tables indexed together
#[derive(Default)]
pub struct RhythmWorld {
    keys: Vec<PlayerKey>,
    players: Vec<RhythmPlayer>,
    next_key: u16,
}

impl RhythmWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_player(&mut self, settings: RhythmEngineSettings) -> PlayerKey {
        let key = PlayerKey::new(self.next_key);
        self.next_key = self.next_key.wrapping_add(1);
        self.insert_player(key, RhythmPlayer::new(settings));
        key
    }

    /// Adds `player` under a key chosen elsewhere, replacing any existing one
    pub fn insert_player(&mut self, key: PlayerKey, player: RhythmPlayer) {
        match self.index_of(&key) {
            Some(index) => self.players[index] = player,
            None => {
                self.keys.push(key);
                self.players.push(player);
            }
        }
    }

    pub fn despawn_player(&mut self, key: &PlayerKey) -> Option<RhythmPlayer> {
        let index = self.index_of(key)?;
        self.keys.swap_remove(index);
        Some(self.players.swap_remove(index))
    }

    pub fn has_player(&self, key: &PlayerKey) -> bool {
        self.index_of(key).is_some()
    }

    pub fn player(&self, key: &PlayerKey) -> Option<&RhythmPlayer> {
        self.index_of(key).map(|index| &self.players[index])
    }

    pub fn player_mut(&mut self, key: &PlayerKey) -> Option<&mut RhythmPlayer> {
        let index = self.index_of(key)?;
        Some(&mut self.players[index])
    }

    pub fn keys(&self) -> &[PlayerKey] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerKey, &RhythmPlayer)> {
        self.keys.iter().zip(self.players.iter())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Moves every player's clock to `elapsed`
    pub fn set_elapsed(&mut self, elapsed: TimeMs) {
        for player in self.players.iter_mut() {
            player.set_elapsed(elapsed);
        }
    }

    /// Runs both stages of one tick for every player
    pub fn process(
        &mut self,
        library: &CommandLibrary,
        config: &RhythmConfig,
        tick: Tick,
    ) -> Vec<(PlayerKey, TickOutcome)> {
        let outcomes = process_commands(&mut self.players, library, config, tick);
        self.keys.iter().copied().zip(outcomes).collect()
    }

    /// Like [`RhythmWorld::process`], reported as events
    pub fn process_events(
        &mut self,
        library: &CommandLibrary,
        config: &RhythmConfig,
        tick: Tick,
    ) -> RhythmEvents {
        let outcomes = self.process(library, config, tick);
        RhythmEvents::from_outcomes(tick, outcomes, |key| {
            self.player(key).and_then(|player| player.executing.command_target)
        })
    }

    fn index_of(&self, key: &PlayerKey) -> Option<usize> {
        self.keys.iter().position(|other| other == key)
    }
}
