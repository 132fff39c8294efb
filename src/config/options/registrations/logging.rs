//! Logging-related options registration

use crate::config::LogLevel;
use crate::config::options::{OptionDefBuilder, OptionsRegistry};
use anyhow::Result;

/// Register all logging-related options
///
/// Short-spelled options are command line only; long-spelled options may also
/// be supplied from the configuration file under their destination name.
pub fn register(registry: &mut OptionsRegistry) -> Result<()> {
    registry.register(
        OptionDefBuilder::new("configuration")
            .short('c')
            .value_name("path")
            .help("path to configuration file")
            .enum_type(vec!["loguru.ini"], "loguru.ini")
            .config_file_pointer()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("loguru_level")
            .long("loguru_level")
            .help("minimum logging level")
            .enum_type(LogLevel::variants().to_vec(), "DEBUG")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("loguru_stdout")
            .long("loguru_stdout")
            .help("whether to log to stdout")
            .flag_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("loguru_file")
            .long("loguru_file")
            .help("whether to log to file")
            .flag_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("loguru_backtrace")
            .long("loguru_backtrace")
            .help("whether to show full stacktrace")
            .flag_type(false)
            .build()?,
    )?;

    log::debug!("Registered {} logging options", 5);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_full_schema() {
        let mut registry = OptionsRegistry::new();
        register(&mut registry).unwrap();

        assert_eq!(registry.len(), 5);
        for dest in [
            "configuration",
            "loguru_level",
            "loguru_stdout",
            "loguru_file",
            "loguru_backtrace",
        ] {
            assert!(registry.contains(dest), "'{}' should be registered", dest);
        }
    }

    #[test]
    fn test_level_choices_match_log_levels() {
        let mut registry = OptionsRegistry::new();
        register(&mut registry).unwrap();

        let def = registry.get("loguru_level").unwrap();
        match &def.ty {
            crate::config::options::OptionType::Enum { variants } => {
                assert_eq!(variants.len(), 7);
                assert!(variants.contains(&"SUCCESS".to_string()));
            }
            other => panic!("Expected Enum type, got {:?}", other),
        }
    }
}
