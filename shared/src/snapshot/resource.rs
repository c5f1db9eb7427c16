use cadence_serde::{BitReader, BitWrite, Serde, SerdeErr};
use log::warn;

use crate::{
    command::{CommandId, CommandLibrary},
    snapshot::{SnapshotData, SyncWithComponent},
};

/// The command definition a player is bound to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_support", derive(bevy_ecs::component::Component))]
pub struct RhythmCommandResource {
    id: Option<CommandId>,
}

impl RhythmCommandResource {
    pub fn new(id: Option<CommandId>) -> Self {
        Self { id }
    }

    pub fn none() -> Self {
        Self { id: None }
    }

    pub fn id(&self) -> Option<CommandId> {
        self.id
    }
}

/// A raw command identifier, not tied to any library entry
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_support", derive(bevy_ecs::component::Component))]
pub struct RhythmCommandIdentifier {
    pub value: String,
}

impl RhythmCommandIdentifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Keeps at most `capacity` bytes of `name`, cutting on a char boundary
pub fn truncate_name(name: &str, capacity: usize) -> String {
    if name.len() <= capacity {
        return name.to_string();
    }
    let mut end = capacity;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}

fn write_name(writer: &mut dyn BitWrite, current: &str, baseline: &str) {
    if current == baseline {
        false.ser(writer);
        return;
    }
    true.ser(writer);
    current.to_string().ser(writer);
}

fn read_name(reader: &mut BitReader, baseline: &str, capacity: usize) -> Result<String, SerdeErr> {
    if !bool::de(reader)? {
        return Ok(baseline.to_string());
    }
    let name = String::de(reader)?;
    Ok(truncate_name(&name, capacity))
}

/// Library command referenced by name. An empty name stands for no command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResourceSnapshot {
    name: String,
}

impl CommandResourceSnapshot {
    pub const CAPACITY: usize = 128;

    pub fn new(name: &str) -> Self {
        Self {
            name: truncate_name(name, Self::CAPACITY),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl SnapshotData for CommandResourceSnapshot {
    fn serialize(&self, writer: &mut dyn BitWrite, baseline: &Self) {
        write_name(writer, &self.name, &baseline.name);
    }

    fn deserialize(reader: &mut BitReader, baseline: &Self) -> Result<Self, SerdeErr> {
        let name = read_name(reader, &baseline.name, Self::CAPACITY)?;
        Ok(Self { name })
    }
}

impl SyncWithComponent<RhythmCommandResource> for CommandResourceSnapshot {
    fn from_component(component: &RhythmCommandResource, library: &CommandLibrary) -> Self {
        let name = component
            .id()
            .and_then(|id| library.name_of(id))
            .unwrap_or_default();
        Self::new(name)
    }

    fn to_component(&self, library: &CommandLibrary) -> RhythmCommandResource {
        if self.name.is_empty() {
            return RhythmCommandResource::none();
        }
        let id = library.find_by_name(&self.name);
        if id.is_none() {
            warn!("unknown command '{}' in snapshot, resolving to none", self.name);
        }
        RhythmCommandResource::new(id)
    }
}

/// Identifier string carried as is
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandIdentifierSnapshot {
    value: String,
}

impl CommandIdentifierSnapshot {
    pub const CAPACITY: usize = 64;

    pub fn new(value: &str) -> Self {
        Self {
            value: truncate_name(value, Self::CAPACITY),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl SnapshotData for CommandIdentifierSnapshot {
    fn serialize(&self, writer: &mut dyn BitWrite, baseline: &Self) {
        write_name(writer, &self.value, &baseline.value);
    }

    fn deserialize(reader: &mut BitReader, baseline: &Self) -> Result<Self, SerdeErr> {
        let value = read_name(reader, &baseline.value, Self::CAPACITY)?;
        Ok(Self { value })
    }
}

impl SyncWithComponent<RhythmCommandIdentifier> for CommandIdentifierSnapshot {
    fn from_component(component: &RhythmCommandIdentifier, _library: &CommandLibrary) -> Self {
        Self::new(&component.value)
    }

    fn to_component(&self, _library: &CommandLibrary) -> RhythmCommandIdentifier {
        RhythmCommandIdentifier::new(self.value.clone())
    }
}
