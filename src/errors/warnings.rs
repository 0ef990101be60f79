use thiserror::Error;

use crate::Position;

/// Non-fatal diagnostics. Parsing carries on after each one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("Uninitialized identifier {name} on line {}, character {}.", .position.line, .position.column)]
    UninitializedIdentifier { name: String, position: Position },
    #[error("Declared but unused identifier {name} on line {}, character {}.", .position.line, .position.column)]
    UnusedVariable { name: String, position: Position },
}

impl Warning {
    pub fn get_position(&self) -> &Position {
        match self {
            Warning::UninitializedIdentifier { position, .. } => position,
            Warning::UnusedVariable { position, .. } => position,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Warning::UninitializedIdentifier { name, .. } => name,
            Warning::UnusedVariable { name, .. } => name,
        }
    }
}
