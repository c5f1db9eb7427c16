use cadence_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

pub type Tick = u16;

/// Milliseconds since a rhythm engine started. Signed so that offsets
/// before a command start stay representable.
pub type TimeMs = i64;

/// Opaque identifier of the control a command action requires
pub type RhythmKey = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    /// Authoritative simulation, observes inputs through the network
    Server,
    /// Acting player, predicts its own commands locally
    Client,
}

impl HostType {
    pub fn is_authoritative(self) -> bool {
        matches!(self, HostType::Server)
    }
}

/// Stable key of a player record inside a [`crate::RhythmWorld`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerKey(u16);

impl PlayerKey {
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl Serde for PlayerKey {
    fn ser(&self, writer: &mut dyn BitWrite) {
        UnsignedVariableInteger::<7>::new(self.0).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let value: u16 = UnsignedVariableInteger::<7>::de(reader)?.try_to()?;
        Ok(Self(value))
    }

    fn bit_length(&self) -> u32 {
        UnsignedVariableInteger::<7>::new(self.0).bit_length()
    }
}
