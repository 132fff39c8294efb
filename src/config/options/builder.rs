//! Fluent builder API for creating option definitions

use super::types::{OptionDefinition, OptionSource, OptionType, OptionValue};
use anyhow::Result;

/// Builder for creating option definitions with a fluent API
pub struct OptionDefBuilder {
    dest: String,
    short: Option<char>,
    long: Option<String>,
    value_name: Option<String>,
    help: Option<String>,
    ty: Option<OptionType>,
    default: Option<OptionValue>,
    required: bool,
    source: OptionSource,
    is_config_file: bool,
}

impl OptionDefBuilder {
    /// Create a new builder for an option stored under a destination name
    pub fn new(dest: &str) -> Self {
        Self {
            dest: dest.to_string(),
            short: None,
            long: None,
            value_name: None,
            help: None,
            ty: None,
            default: None,
            required: false,
            source: OptionSource::CommandLineAndFile,
            is_config_file: false,
        }
    }

    /// Set the short flag spelling
    pub fn short(mut self, flag: char) -> Self {
        self.short = Some(flag);
        self
    }

    /// Set the long flag spelling
    pub fn long(mut self, flag: &str) -> Self {
        self.long = Some(flag.to_string());
        self
    }

    /// Set the placeholder shown for the value in help output
    pub fn value_name(mut self, name: &str) -> Self {
        self.value_name = Some(name.to_string());
        self
    }

    /// Set the help text
    pub fn help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    /// Define as a presence-only switch with a default value
    pub fn flag_type(mut self, default: bool) -> Self {
        self.ty = Some(OptionType::Bool);
        self.default = Some(OptionValue::Bool(default));
        self
    }

    /// Define as a free-form string with a default value
    pub fn string_type(mut self, default: &str) -> Self {
        self.ty = Some(OptionType::String);
        self.default = Some(OptionValue::Str(default.to_string()));
        self
    }

    /// Define as an enum type with allowed variants and default value
    pub fn enum_type(mut self, variants: Vec<&str>, default: &str) -> Self {
        self.ty = Some(OptionType::Enum {
            variants: variants.iter().map(|s| s.to_string()).collect(),
        });
        self.default = Some(OptionValue::Str(default.to_string()));
        self
    }

    /// Mark the option as required
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Restrict the option to the command line
    pub fn cli_only(mut self) -> Self {
        self.source = OptionSource::CommandLine;
        self
    }

    /// Mark this option as the configuration-file pointer
    ///
    /// The pointer selects the file itself, so it can never be supplied from it.
    pub fn config_file_pointer(mut self) -> Self {
        self.source = OptionSource::CommandLine;
        self.is_config_file = true;
        self
    }

    /// Build the option definition
    ///
    /// Returns an error if required fields are missing or the default value
    /// does not satisfy the declared type.
    pub fn build(self) -> Result<OptionDefinition> {
        let help = self
            .help
            .ok_or_else(|| anyhow::anyhow!("help is required"))?;
        let ty = self
            .ty
            .ok_or_else(|| anyhow::anyhow!("type is required (use flag_type, string_type or enum_type)"))?;
        let default = self
            .default
            .ok_or_else(|| anyhow::anyhow!("default value is required"))?;

        if self.short.is_none() && self.long.is_none() {
            anyhow::bail!("Option '{}' needs a short or long flag spelling", self.dest);
        }

        ty.validate(&default)?;

        Ok(OptionDefinition {
            dest: self.dest,
            short: self.short,
            long: self.long,
            value_name: self.value_name,
            help,
            ty,
            default,
            required: self.required,
            source: self.source,
            is_config_file: self.is_config_file,
        })
    }
}
