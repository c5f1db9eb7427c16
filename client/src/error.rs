use thiserror::Error;

use cadence_shared::{PlayerKey, SnapshotError};

#[derive(Debug, Error)]
pub enum CadenceClientError {
    #[error("no local player with key {0:?}")]
    UnknownPlayer(PlayerKey),
    #[error("could not read snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}
