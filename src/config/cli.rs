//! Command-line assembly from registered option definitions

use crate::config::options::{OptionDefinition, OptionType, OptionValue, OptionsRegistry};
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::collections::HashMap;

/// Build a clap command exposing every registered option
pub fn build_command(registry: &OptionsRegistry) -> Command {
    let mut command = Command::new("logcfg")
        .about("Merge command-line flags with an INI configuration file")
        .version(env!("CARGO_PKG_VERSION"));

    for def in registry.iter() {
        command = command.arg(build_arg(def));
    }
    command
}

fn build_arg(def: &OptionDefinition) -> Arg {
    let mut arg = Arg::new(def.dest.clone())
        .help(def.help.clone())
        .required(def.required);

    if let Some(short) = def.short {
        arg = arg.short(short);
    }
    if let Some(long) = &def.long {
        arg = arg.long(long.clone());
    }
    if let Some(value_name) = &def.value_name {
        arg = arg.value_name(value_name.clone());
    }

    match &def.ty {
        OptionType::Bool => {
            arg = arg.action(ArgAction::SetTrue);
        }
        OptionType::String => {
            if let OptionValue::Str(default) = &def.default {
                arg = arg.default_value(default.clone());
            }
        }
        OptionType::Enum { variants } => {
            arg = arg.value_parser(PossibleValuesParser::new(variants.clone()));
            if let OptionValue::Str(default) = &def.default {
                arg = arg.default_value(default.clone());
            }
        }
    }
    arg
}

/// Values the command line actually provided
///
/// clap-level defaults are excluded so they never shadow configuration-file
/// values during resolution.
pub fn cli_values(
    matches: &ArgMatches,
    registry: &OptionsRegistry,
) -> Result<HashMap<String, OptionValue>> {
    let mut values = HashMap::new();
    for def in registry.iter() {
        if matches.value_source(&def.dest) != Some(ValueSource::CommandLine) {
            continue;
        }

        let value = match &def.ty {
            OptionType::Bool => OptionValue::Bool(matches.get_flag(&def.dest)),
            OptionType::String | OptionType::Enum { .. } => {
                let raw: &String = matches
                    .get_one(&def.dest)
                    .ok_or_else(|| anyhow::anyhow!("Missing value for '{}'", def.dest))?;
                OptionValue::Str(raw.clone())
            }
        };
        values.insert(def.dest.clone(), value);
    }
    Ok(values)
}
