//! Core types for the option schema

use anyhow::Result;

/// A resolved option value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl OptionValue {
    /// Get as bool, returning error if wrong type
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            OptionValue::Bool(v) => Ok(*v),
            _ => anyhow::bail!("Expected Bool, got {:?}", self),
        }
    }

    /// Get as string slice, returning error if wrong type
    pub fn as_str(&self) -> Result<&str> {
        match self {
            OptionValue::Str(v) => Ok(v),
            _ => anyhow::bail!("Expected Str, got {:?}", self),
        }
    }
}

/// Value shape an option accepts
#[derive(Debug, Clone)]
pub enum OptionType {
    /// Presence-only switch
    Bool,
    /// Free-form string
    String,
    /// String restricted to a fixed set of spellings
    Enum { variants: Vec<String> },
}

impl OptionType {
    /// Check if a value matches this type
    pub fn matches(&self, value: &OptionValue) -> bool {
        match (self, value) {
            (OptionType::Bool, OptionValue::Bool(_)) => true,
            (OptionType::String, OptionValue::Str(_)) => true,
            (OptionType::Enum { .. }, OptionValue::Str(_)) => true,
            _ => false,
        }
    }

    /// Validate that a value meets the constraints for this type
    pub fn validate(&self, value: &OptionValue) -> Result<()> {
        if !self.matches(value) {
            anyhow::bail!("Type mismatch: expected {:?}, got {:?}", self, value);
        }

        match (self, value) {
            (OptionType::Enum { variants }, OptionValue::Str(v)) => {
                if !variants.contains(v) {
                    anyhow::bail!(
                        "Value '{}' is not a valid variant. Valid values: {:?}",
                        v,
                        variants
                    );
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Parse a raw configuration-file value according to this type
    ///
    /// Switches accept the usual INI spellings: true/false, yes/no, on/off, 1/0.
    pub fn parse_raw(&self, raw: &str) -> Result<OptionValue> {
        match self {
            OptionType::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(OptionValue::Bool(true)),
                "false" | "no" | "off" | "0" => Ok(OptionValue::Bool(false)),
                other => anyhow::bail!("'{}' is not a boolean value", other),
            },
            OptionType::String => Ok(OptionValue::Str(raw.to_string())),
            OptionType::Enum { .. } => {
                let value = OptionValue::Str(raw.to_string());
                self.validate(&value)?;
                Ok(value)
            }
        }
    }
}

/// Where an option's value may come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    /// Command line only
    CommandLine,
    /// Command line, with overridable defaults from the configuration file
    CommandLineAndFile,
}

/// Complete definition of a named option
#[derive(Debug, Clone)]
pub struct OptionDefinition {
    /// Destination name the resolved value is stored under, unique across the registry
    pub dest: String,

    /// Short flag spelling (e.g. 'c')
    pub short: Option<char>,

    /// Long flag spelling (e.g. "loguru_level")
    pub long: Option<String>,

    /// Placeholder shown for the value in help output
    pub value_name: Option<String>,

    /// Help text
    pub help: String,

    /// Value shape
    pub ty: OptionType,

    /// Default value used when neither the command line nor the file supplies one
    pub default: OptionValue,

    /// Whether the option must be supplied
    pub required: bool,

    /// Accepted sources for this option
    pub source: OptionSource,

    /// Whether this option selects the configuration file itself
    pub is_config_file: bool,
}

impl OptionDefinition {
    /// Validate that a value is valid for this option
    pub fn validate(&self, value: &OptionValue) -> Result<()> {
        self.ty.validate(value)
    }
}
