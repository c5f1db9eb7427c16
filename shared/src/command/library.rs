use log::info;
use thiserror::Error;

use crate::command::CommandDefinition;

/// Longest identifier, in bytes, that survives snapshot synchronization
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Errors that can occur while loading command definitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// A definition with the same identifier is already registered
    #[error("Command '{identifier}' cannot be registered more than once")]
    DuplicateIdentifier { identifier: String },

    /// A definition without any action could never be matched
    #[error("Command '{identifier}' must contain at least one action")]
    EmptyActions { identifier: String },

    /// The identifier would be truncated when synchronized
    #[error("Command identifier '{identifier}' is longer than {max_length} bytes")]
    IdentifierTooLong {
        identifier: String,
        max_length: usize,
    },

    /// No more ids can be handed out
    #[error("CommandLibrary cannot hold more than {max_commands} commands")]
    LibraryFull { max_commands: usize },
}

/// Stable index of a definition inside a [`CommandLibrary`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(u16);

impl CommandId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Arena of every loaded command definition.
///
/// Definitions keep their declaration order, which also decides which
/// definition wins when several match the same input.
#[derive(Clone, Debug, Default)]
pub struct CommandLibrary {
    definitions: Vec<CommandDefinition>,
}

impl CommandLibrary {
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// Registers a definition
    ///
    /// # Panics
    ///
    /// Panics if the definition is rejected, see [`CommandLibrary::try_add_command`].
    pub fn add_command(&mut self, definition: CommandDefinition) -> CommandId {
        match self.try_add_command(definition) {
            Ok(id) => id,
            Err(error) => panic!("CommandLibrary: {}", error),
        }
    }

    pub fn try_add_command(&mut self, definition: CommandDefinition) -> Result<CommandId, LibraryError> {
        let identifier = definition.identifier();

        if self.find_by_name(identifier).is_some() {
            return Err(LibraryError::DuplicateIdentifier {
                identifier: identifier.to_string(),
            });
        }
        if definition.actions().is_empty() {
            return Err(LibraryError::EmptyActions {
                identifier: identifier.to_string(),
            });
        }
        if identifier.len() > MAX_IDENTIFIER_LENGTH {
            return Err(LibraryError::IdentifierTooLong {
                identifier: identifier.to_string(),
                max_length: MAX_IDENTIFIER_LENGTH,
            });
        }
        let Ok(index) = u16::try_from(self.definitions.len()) else {
            return Err(LibraryError::LibraryFull {
                max_commands: u16::MAX as usize,
            });
        };

        let id = CommandId(index);
        info!("CommandLibrary: Registering {} as {:?}", definition, id);
        self.definitions.push(definition);
        Ok(id)
    }

    pub fn get(&self, id: CommandId) -> Option<&CommandDefinition> {
        self.definitions.get(id.index())
    }

    /// Registered name of `id`
    pub fn name_of(&self, id: CommandId) -> Option<&str> {
        self.get(id).map(CommandDefinition::identifier)
    }

    /// First definition whose identifier is byte-for-byte equal to `name`
    pub fn find_by_name(&self, name: &str) -> Option<CommandId> {
        self.definitions
            .iter()
            .position(|definition| definition.identifier() == name)
            .map(|index| CommandId(index as u16))
    }

    /// Definitions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (CommandId, &CommandDefinition)> {
        self.definitions
            .iter()
            .enumerate()
            .map(|(index, definition)| (CommandId(index as u16), definition))
    }

    /// Action count of the longest definition
    pub fn longest_sequence(&self) -> usize {
        self.definitions
            .iter()
            .map(|definition| definition.actions().len())
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
