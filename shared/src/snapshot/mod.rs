mod data;
mod resource;
mod sync;

pub use data::{SnapshotData, SyncWithComponent};
pub use resource::{
    truncate_name, CommandIdentifierSnapshot, CommandResourceSnapshot, RhythmCommandIdentifier,
    RhythmCommandResource,
};
pub use sync::{SnapshotError, SnapshotReceiver, SnapshotSender};
