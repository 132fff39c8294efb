use anyhow::Result;
use log::{debug, info};

use logcfg::config::Config;
use logcfg::logging;

fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init(&config)?;

    info!("Starting logcfg");
    debug!("Effective configuration: {:?}", config);

    Ok(())
}
