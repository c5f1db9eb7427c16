use std::{collections::HashMap, sync::Arc};

use log::{debug, info};

use cadence_shared::{
    BitReader, CommandId, CommandLibrary, CommandResourceSnapshot, PlayerKey, PressureInput,
    RhythmCommandResource, RhythmEvents, RhythmKey, RhythmPlayer, RhythmWorld, SnapshotReceiver,
    SyncWithComponent, Tick, TimeMs,
};

use crate::{CadenceClientError, ClientConfig};

/// Acting and observing peer. Predicts its own players' commands locally and
/// follows the commands the server binds to every player.
pub struct Client {
    config: ClientConfig,
    library: Arc<CommandLibrary>,
    world: RhythmWorld,
    receiver: SnapshotReceiver<PlayerKey, CommandResourceSnapshot>,
    remote_commands: HashMap<PlayerKey, RhythmCommandResource>,
    last_snapshot_tick: Option<Tick>,
    pending_acks: Vec<Tick>,
    current_tick: Tick,
}

impl Client {
    /// Create a new Client
    pub fn new(config: ClientConfig, library: Arc<CommandLibrary>) -> Self {
        let receiver = SnapshotReceiver::new(config.snapshot_history);
        Self {
            config,
            library,
            world: RhythmWorld::new(),
            receiver,
            remote_commands: HashMap::new(),
            last_snapshot_tick: None,
            pending_acks: Vec::new(),
            current_tick: 0,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn library(&self) -> &CommandLibrary {
        &self.library
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    // Local players

    /// Starts predicting `player_key`, a player the server spawned for us
    pub fn add_local_player(&mut self, player_key: PlayerKey) {
        self.world
            .insert_player(player_key, RhythmPlayer::new(self.config.engine));
    }

    pub fn remove_local_player(&mut self, player_key: &PlayerKey) -> Option<RhythmPlayer> {
        self.world.despawn_player(player_key)
    }

    pub fn local_player(&self, player_key: &PlayerKey) -> Option<&RhythmPlayer> {
        self.world.player(player_key)
    }

    pub fn local_player_mut(&mut self, player_key: &PlayerKey) -> Option<&mut RhythmPlayer> {
        self.world.player_mut(player_key)
    }

    /// Scores a press locally and returns the input to forward to the server
    pub fn press(
        &mut self,
        player_key: &PlayerKey,
        key: RhythmKey,
        time: TimeMs,
    ) -> Result<PressureInput, CadenceClientError> {
        self.push_input(player_key, PressureInput::new(key, time))
    }

    /// Like [`Client::press`], for an input held until `release_time`
    pub fn hold(
        &mut self,
        player_key: &PlayerKey,
        key: RhythmKey,
        time: TimeMs,
        release_time: TimeMs,
    ) -> Result<PressureInput, CadenceClientError> {
        self.push_input(player_key, PressureInput::new(key, time).with_release(release_time))
    }

    fn push_input(
        &mut self,
        player_key: &PlayerKey,
        input: PressureInput,
    ) -> Result<PressureInput, CadenceClientError> {
        let player = self
            .world
            .player_mut(player_key)
            .ok_or(CadenceClientError::UnknownPlayer(*player_key))?;
        player.push_pressure(input.to_pressure(player.beat_interval()));
        Ok(input)
    }

    /// Advances the local players to `elapsed` and runs one predicted tick
    pub fn tick(&mut self, elapsed: TimeMs) -> RhythmEvents {
        self.current_tick = self.current_tick.wrapping_add(1);
        self.world.set_elapsed(elapsed);
        self.world
            .process_events(&self.library, &self.config.rhythm, self.current_tick)
    }

    // Snapshots

    /// Reads a snapshot frame from the server and queues its acknowledgement
    pub fn receive_snapshot(&mut self, bytes: &[u8]) -> Result<Tick, CadenceClientError> {
        let mut reader = BitReader::new(bytes);
        let (tick, values) = self.receiver.read(&mut reader)?;

        // every frame carries the full player set
        let mut remote_commands = HashMap::with_capacity(values.len());
        for (player_key, snapshot) in values {
            let resource = snapshot.to_component(&self.library);
            if self.remote_commands.get(&player_key) != Some(&resource) {
                debug!(
                    "player {:?} bound to {}",
                    player_key,
                    resource
                        .id()
                        .and_then(|id| self.library.name_of(id))
                        .unwrap_or("nothing")
                );
            }
            remote_commands.insert(player_key, resource);
        }
        for player_key in self.remote_commands.keys() {
            if !remote_commands.contains_key(player_key) {
                debug!("player {:?} left the snapshot", player_key);
            }
        }
        self.remote_commands = remote_commands;

        if self.last_snapshot_tick.is_none() {
            info!("first snapshot received at tick {}", tick);
        }
        self.last_snapshot_tick = Some(tick);
        self.pending_acks.push(tick);
        Ok(tick)
    }

    /// Ticks of received snapshots not yet acknowledged to the server
    pub fn take_acks(&mut self) -> Vec<Tick> {
        std::mem::take(&mut self.pending_acks)
    }

    pub fn last_snapshot_tick(&self) -> Option<Tick> {
        self.last_snapshot_tick
    }

    /// Command the server last bound to `player_key`
    pub fn remote_command(&self, player_key: &PlayerKey) -> Option<CommandId> {
        self.remote_commands
            .get(player_key)
            .and_then(|resource| resource.id())
    }

    pub fn remote_players(&self) -> impl Iterator<Item = &PlayerKey> {
        self.remote_commands.keys()
    }
}
