use cadence_shared::{CommandResourceSnapshot, PlayerKey, SnapshotSender, Tick};

// UserKey
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct UserKey(u64);

impl UserKey {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

// User

/// A connected observer, and the snapshot stream written for it
pub struct User {
    player: Option<PlayerKey>,
    sender: SnapshotSender<PlayerKey, CommandResourceSnapshot>,
}

impl User {
    pub(crate) fn new(snapshot_history: usize) -> Self {
        Self {
            player: None,
            sender: SnapshotSender::new(snapshot_history),
        }
    }

    /// Player this user controls, if any
    pub fn player(&self) -> Option<PlayerKey> {
        self.player
    }

    pub(crate) fn set_player(&mut self, player: Option<PlayerKey>) {
        self.player = player;
    }

    pub fn last_acked_tick(&self) -> Option<Tick> {
        self.sender.baseline_tick()
    }

    pub(crate) fn sender_mut(&mut self) -> &mut SnapshotSender<PlayerKey, CommandResourceSnapshot> {
        &mut self.sender
    }
}
