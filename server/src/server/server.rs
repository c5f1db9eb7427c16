use std::{collections::HashMap, sync::Arc};

use log::info;

use cadence_shared::{
    BitWriter, CommandLibrary, CommandResourceSnapshot, FlowPressure, PlayerKey, PressureInput,
    RhythmEvents, RhythmPlayer, RhythmWorld, SyncWithComponent, Tick, TimeMs,
};

use crate::{CadenceServerError, ServerConfig, User, UserKey};

/// Authoritative host: runs every player's rhythm engine and writes the
/// command bindings to connected users as baseline-diffed snapshots
pub struct Server {
    config: ServerConfig,
    library: Arc<CommandLibrary>,
    world: RhythmWorld,
    users: HashMap<UserKey, User>,
    next_user_key: u64,
    current_tick: Tick,
}

impl Server {
    /// Create a new Server
    pub fn new(config: ServerConfig, library: Arc<CommandLibrary>) -> Self {
        Self {
            config,
            library,
            world: RhythmWorld::new(),
            users: HashMap::new(),
            next_user_key: 0,
            current_tick: 0,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn library(&self) -> &CommandLibrary {
        &self.library
    }

    /// Tick of the last processed step
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    // Users

    pub fn connect_user(&mut self) -> UserKey {
        let user_key = UserKey::new(self.next_user_key);
        self.next_user_key += 1;
        self.users
            .insert(user_key, User::new(self.config.snapshot_history));
        info!("user {:?} connected", user_key);
        user_key
    }

    pub fn disconnect_user(&mut self, user_key: &UserKey) -> Result<(), CadenceServerError> {
        if self.users.remove(user_key).is_none() {
            return Err(CadenceServerError::UnknownUser(*user_key));
        }
        info!("user {:?} disconnected", user_key);
        Ok(())
    }

    pub fn user_exists(&self, user_key: &UserKey) -> bool {
        self.users.contains_key(user_key)
    }

    pub fn user(&self, user_key: &UserKey) -> Option<&User> {
        self.users.get(user_key)
    }

    pub fn user_keys(&self) -> Vec<UserKey> {
        self.users.keys().copied().collect()
    }

    pub fn users_count(&self) -> usize {
        self.users.len()
    }

    // Players

    /// Spawns a player controlled by `user_key`
    pub fn spawn_player(&mut self, user_key: &UserKey) -> Result<PlayerKey, CadenceServerError> {
        let user = self
            .users
            .get_mut(user_key)
            .ok_or(CadenceServerError::UnknownUser(*user_key))?;
        let player_key = self.world.spawn_player(self.config.engine);
        user.set_player(Some(player_key));
        Ok(player_key)
    }

    pub fn despawn_player(&mut self, player_key: &PlayerKey) -> Result<RhythmPlayer, CadenceServerError> {
        let player = self
            .world
            .despawn_player(player_key)
            .ok_or(CadenceServerError::UnknownPlayer(*player_key))?;
        for user in self.users.values_mut() {
            if user.player() == Some(*player_key) {
                user.set_player(None);
            }
        }
        Ok(player)
    }

    pub fn player(&self, player_key: &PlayerKey) -> Option<&RhythmPlayer> {
        self.world.player(player_key)
    }

    pub fn player_mut(&mut self, player_key: &PlayerKey) -> Option<&mut RhythmPlayer> {
        self.world.player_mut(player_key)
    }

    /// Queues an input sent by the player's owner. The input is scored
    /// against the authoritative tempo.
    pub fn receive_input(
        &mut self,
        player_key: &PlayerKey,
        input: &PressureInput,
    ) -> Result<FlowPressure, CadenceServerError> {
        let player = self
            .world
            .player_mut(player_key)
            .ok_or(CadenceServerError::UnknownPlayer(*player_key))?;
        let pressure = input.to_pressure(player.beat_interval());
        player.push_pressure(pressure);
        Ok(pressure)
    }

    // Ticks

    /// Advances every player's engine to `elapsed` and runs one tick
    pub fn tick(&mut self, elapsed: TimeMs) -> RhythmEvents {
        self.current_tick = self.current_tick.wrapping_add(1);
        self.world.set_elapsed(elapsed);
        self.world
            .process_events(&self.library, &self.config.rhythm, self.current_tick)
    }

    // Snapshots

    /// Writes the command bindings of every player, for `user_key`, at the
    /// current tick
    pub fn write_snapshot(&mut self, user_key: &UserKey) -> Result<Vec<u8>, CadenceServerError> {
        let values: Vec<(PlayerKey, CommandResourceSnapshot)> = self
            .world
            .iter()
            .map(|(key, player)| {
                (
                    *key,
                    CommandResourceSnapshot::from_component(&player.command_resource(), &self.library),
                )
            })
            .collect();

        let user = self
            .users
            .get_mut(user_key)
            .ok_or(CadenceServerError::UnknownUser(*user_key))?;
        let mut writer = BitWriter::new();
        user.sender_mut()
            .write(self.current_tick, &mut writer, &values);
        Ok(writer.to_bytes())
    }

    /// Records that `user_key` received the snapshot of `tick`
    pub fn ack_snapshot(&mut self, user_key: &UserKey, tick: Tick) -> Result<(), CadenceServerError> {
        let user = self
            .users
            .get_mut(user_key)
            .ok_or(CadenceServerError::UnknownUser(*user_key))?;
        user.sender_mut().ack(tick);
        Ok(())
    }
}
