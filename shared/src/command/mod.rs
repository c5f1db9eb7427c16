mod action;
mod definition;
mod library;
mod matcher;

pub use action::CommandAction;
pub use definition::{CommandDefinition, DEFAULT_COMMAND_DURATION};
pub use library::{CommandId, CommandLibrary, LibraryError, MAX_IDENTIFIER_LENGTH};
pub use matcher::{get_command, MatchMode};
