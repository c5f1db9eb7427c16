use std::{fmt, sync::Arc};

use crate::command::CommandAction;

/// Beats a command occupies when no duration is given
pub const DEFAULT_COMMAND_DURATION: i32 = 4;

/// A named, ordered sequence of timed key presses.
///
/// Definitions are built once when content loads and never change afterwards.
/// Variants are derived through [`CommandDefinition::with_identifier`] and
/// [`CommandDefinition::with_duration`], which share the action list.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandDefinition {
    identifier: String,
    actions: Arc<[CommandAction]>,
    duration: i32,
}

impl CommandDefinition {
    pub fn new(identifier: impl Into<String>, actions: &[CommandAction]) -> Self {
        Self::with_actions(identifier, actions, DEFAULT_COMMAND_DURATION)
    }

    pub fn with_actions(identifier: impl Into<String>, actions: &[CommandAction], duration: i32) -> Self {
        Self {
            identifier: identifier.into(),
            actions: Arc::from(actions),
            duration: duration.max(0),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Actions in the order they must be pressed
    pub fn actions(&self) -> &[CommandAction] {
        &self.actions
    }

    /// Beats the command stays active once triggered
    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn with_identifier(&self, identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            actions: Arc::clone(&self.actions),
            duration: self.duration,
        }
    }

    pub fn with_duration(&self, duration: i32) -> Self {
        Self {
            identifier: self.identifier.clone(),
            actions: Arc::clone(&self.actions),
            duration: duration.max(0),
        }
    }
}

impl fmt::Display for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command: {} {{", self.identifier)?;
        for (index, action) in self.actions.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", action)?;
        }
        f.write_str("}")
    }
}
