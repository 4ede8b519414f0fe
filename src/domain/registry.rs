use super::models::CommandDescriptor;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command at position {position} is missing required field `{field}`")]
    MissingField { position: usize, field: &'static str },
}

/// Immutable snapshot of every command the palette knows about.
///
/// Ids are unique within a snapshot. When the input repeats an id the first
/// descriptor wins and the later ones are reported through [`Registry::duplicates`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: Vec<Arc<CommandDescriptor>>,
    duplicates: Vec<String>,
}

impl Registry {
    pub fn new(commands: Vec<CommandDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(commands.len());
        let mut duplicates = Vec::new();

        for (position, cmd) in commands.into_iter().enumerate() {
            if cmd.id.trim().is_empty() {
                return Err(RegistryError::MissingField {
                    position,
                    field: "id",
                });
            }
            if cmd.name.trim().is_empty() {
                return Err(RegistryError::MissingField {
                    position,
                    field: "name",
                });
            }

            if !seen.insert(cmd.id.clone()) {
                tracing::warn!(id = %cmd.id, position, "duplicate command id, keeping first registration");
                duplicates.push(cmd.id);
                continue;
            }
            kept.push(Arc::new(cmd));
        }

        tracing::debug!(count = kept.len(), "command registry loaded");
        Ok(Self {
            commands: kept,
            duplicates,
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Arc<CommandDescriptor>] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CommandDescriptor>> {
        self.commands.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<CommandDescriptor>> {
        self.commands.iter().find(|cmd| cmd.id == id)
    }

    /// Ids that appeared more than once in the input, in input order.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
