//! Resolved option values with typed accessors

use super::registry::OptionsRegistry;
use super::types::OptionValue;
use anyhow::Result;
use std::collections::HashMap;

/// Read-only mapping from destination name to resolved value
///
/// Command-line values take priority over configuration-file values, which
/// take priority over registered defaults. Created once per load.
#[derive(Debug)]
pub struct ParsedOptions {
    values: HashMap<String, OptionValue>,
}

impl ParsedOptions {
    /// Resolve every registered option from the supplied layers
    pub fn resolve(
        registry: &OptionsRegistry,
        cli_values: HashMap<String, OptionValue>,
        file_values: HashMap<String, OptionValue>,
    ) -> Result<Self> {
        let mut values = HashMap::new();
        for def in registry.iter() {
            let value = cli_values
                .get(&def.dest)
                .or_else(|| file_values.get(&def.dest))
                .cloned()
                .unwrap_or_else(|| def.default.clone());

            def.validate(&value)?;
            log::debug!("Resolved option: {} = {:?}", def.dest, value);
            values.insert(def.dest.clone(), value);
        }
        Ok(Self { values })
    }

    /// Get the resolved value for a destination name
    pub fn get(&self, dest: &str) -> Result<&OptionValue> {
        self.values
            .get(dest)
            .ok_or_else(|| anyhow::anyhow!("Option '{}' is not registered", dest))
    }

    /// Get bool value
    pub fn get_bool(&self, dest: &str) -> Result<bool> {
        self.get(dest)?.as_bool()
    }

    /// Get string value
    pub fn get_str(&self, dest: &str) -> Result<&str> {
        self.get(dest)?.as_str()
    }
}
