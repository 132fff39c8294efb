//! Configuration-file loading
//!
//! The file is INI-formatted; keys match option destination names and may
//! appear in the sectionless prelude or under any section header.

use crate::config::options::{OptionSource, OptionValue, OptionsRegistry};
use anyhow::{Context, Result};
use ini::Ini;
use std::collections::HashMap;
use std::path::Path;

/// Load option values from an INI configuration file
///
/// Every key must name a registered option that accepts configuration-file
/// values; raw values are parsed according to the registered option type.
pub fn load_config_file(
    path: &Path,
    registry: &OptionsRegistry,
) -> Result<HashMap<String, OptionValue>> {
    let ini = Ini::load_from_file(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

    let mut values = HashMap::new();
    for (_section, properties) in ini.iter() {
        for (key, raw) in properties.iter() {
            let def = registry.get(key).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown configuration key '{}' in {}",
                    key,
                    path.display()
                )
            })?;

            if def.source != OptionSource::CommandLineAndFile {
                anyhow::bail!(
                    "Option '{}' cannot be set from the configuration file",
                    key
                );
            }

            let value = def
                .ty
                .parse_raw(raw)
                .with_context(|| format!("Invalid value for '{}' in {}", key, path.display()))?;
            values.insert(key.to_string(), value);
        }
    }

    log::debug!("Loaded {} options from {}", values.len(), path.display());
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::registrations::register_all;
    use std::fs;
    use tempfile::TempDir;

    fn registry() -> OptionsRegistry {
        let mut registry = OptionsRegistry::new();
        register_all(&mut registry).unwrap();
        registry
    }

    fn write_ini(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("loguru.ini");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_values_from_prelude_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_ini(&dir, "loguru_level = INFO\nloguru_stdout = true\n");

        let values = load_config_file(&path, &registry()).unwrap();

        assert_eq!(
            values.get("loguru_level"),
            Some(&OptionValue::Str("INFO".to_string()))
        );
        assert_eq!(values.get("loguru_stdout"), Some(&OptionValue::Bool(true)));
        assert_eq!(values.get("loguru_file"), None);
    }

    #[test]
    fn test_loads_values_from_sections() {
        let dir = TempDir::new().unwrap();
        let path = write_ini(&dir, "[logging]\nloguru_file = yes\nloguru_level = ERROR\n");

        let values = load_config_file(&path, &registry()).unwrap();

        assert_eq!(values.get("loguru_file"), Some(&OptionValue::Bool(true)));
        assert_eq!(
            values.get("loguru_level"),
            Some(&OptionValue::Str("ERROR".to_string()))
        );
    }

    #[test]
    fn test_rejects_unknown_key() {
        let dir = TempDir::new().unwrap();
        let path = write_ini(&dir, "loguru_color = true\n");

        let err = load_config_file(&path, &registry()).unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
    }

    #[test]
    fn test_rejects_cli_only_key() {
        let dir = TempDir::new().unwrap();
        let path = write_ini(&dir, "configuration = loguru.ini\n");

        let err = load_config_file(&path, &registry()).unwrap_err();
        assert!(
            err.to_string()
                .contains("cannot be set from the configuration file")
        );
    }

    #[test]
    fn test_rejects_invalid_level() {
        let dir = TempDir::new().unwrap();
        let path = write_ini(&dir, "loguru_level = VERBOSE\n");

        assert!(load_config_file(&path, &registry()).is_err());
    }

    #[test]
    fn test_rejects_non_boolean_switch_value() {
        let dir = TempDir::new().unwrap();
        let path = write_ini(&dir, "loguru_stdout = maybe\n");

        assert!(load_config_file(&path, &registry()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.ini");

        assert!(load_config_file(&path, &registry()).is_err());
    }
}
