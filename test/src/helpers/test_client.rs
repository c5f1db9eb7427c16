use std::ops::{Deref, DerefMut};

use cadence_client::{Client, ClientConfig};
use cadence_shared::{PlayerKey, PressureInput, RhythmKey, TimeMs};

use super::test_library;

/// Client over the test library, predicting a single local player
pub struct TestClient {
    client: Client,
    player: PlayerKey,
    sent: Vec<PressureInput>,
}

impl TestClient {
    pub fn new(player: PlayerKey) -> Self {
        Self::with_config(player, ClientConfig::default())
    }

    pub fn with_config(player: PlayerKey, config: ClientConfig) -> Self {
        let mut client = Client::new(config, test_library());
        client.add_local_player(player);
        Self {
            client,
            player,
            sent: Vec::new(),
        }
    }

    pub fn player_key(&self) -> PlayerKey {
        self.player
    }

    /// Presses `key` at beat `beat`, `offset` beats off the beat
    pub fn press_at(&mut self, key: RhythmKey, beat: i32, offset: f64) {
        let beat_interval = self.config().engine.beat_interval;
        let time = beat as TimeMs * beat_interval + (offset * beat_interval as f64) as TimeMs;
        let player = self.player;
        let input = self
            .client
            .press(&player, key, time)
            .expect("local player exists");
        self.sent.push(input);
    }

    /// Inputs pressed since the last call
    pub fn take_inputs(&mut self) -> Vec<PressureInput> {
        std::mem::take(&mut self.sent)
    }
}

impl Deref for TestClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for TestClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}
