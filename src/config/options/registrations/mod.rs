//! Registration of all recognized options

pub mod logging;

use super::OptionsRegistry;
use anyhow::Result;

/// Register all options from all modules
pub fn register_all(registry: &mut OptionsRegistry) -> Result<()> {
    logging::register(registry)?;
    Ok(())
}
