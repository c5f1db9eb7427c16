use thiserror::Error;

use cadence_shared::PlayerKey;

use crate::UserKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CadenceServerError {
    #[error("no user with key {0:?}")]
    UnknownUser(UserKey),
    #[error("no player with key {0:?}")]
    UnknownPlayer(PlayerKey),
}
