//! Registry of option definitions

use super::types::OptionDefinition;
use anyhow::Result;
use std::collections::HashMap;

/// Collection of option definitions, keyed by destination name
///
/// Constructed once at startup and handed to the command builder and the
/// resolver. Iteration follows registration order so help output stays
/// deterministic; resolution does not depend on it.
pub struct OptionsRegistry {
    definitions: HashMap<String, OptionDefinition>,
    order: Vec<String>,
}

impl OptionsRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a new option definition
    ///
    /// Returns an error if an option with the same destination is already registered
    pub fn register(&mut self, def: OptionDefinition) -> Result<()> {
        if self.definitions.contains_key(&def.dest) {
            anyhow::bail!("Option '{}' is already registered", def.dest);
        }
        log::debug!("Registered option: {}", def.dest);
        self.order.push(def.dest.clone());
        self.definitions.insert(def.dest.clone(), def);
        Ok(())
    }

    /// Get option definition by destination name
    pub fn get(&self, dest: &str) -> Option<&OptionDefinition> {
        self.definitions.get(dest)
    }

    /// Check if an option is registered
    pub fn contains(&self, dest: &str) -> bool {
        self.definitions.contains_key(dest)
    }

    /// Definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.order.iter().filter_map(|dest| self.definitions.get(dest))
    }

    /// Get total number of registered options
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for OptionsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
