use cadence_serde::{BitReader, BitWrite, SerdeErr};

use crate::command::CommandLibrary;

/// A value synchronized as a delta against the last acknowledged baseline
pub trait SnapshotData: Sized + Clone + PartialEq + Default {
    /// Writes `self` relative to `baseline`
    fn serialize(&self, writer: &mut dyn BitWrite, baseline: &Self);

    /// Reads a value written by [`SnapshotData::serialize`] against the same
    /// `baseline`
    fn deserialize(reader: &mut BitReader, baseline: &Self) -> Result<Self, SerdeErr>;
}

/// Conversion between a snapshot and the local value it stands for. Local
/// handles are resolved through the command library.
pub trait SyncWithComponent<C> {
    fn from_component(component: &C, library: &CommandLibrary) -> Self;

    fn to_component(&self, library: &CommandLibrary) -> C;
}
