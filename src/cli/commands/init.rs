use std::{fs, path::Path};

use anyhow::Result;

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration to the working directory unless a config
/// file is already there.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(config_path, default_config_json()? + "\n")?;
        true
    };

    Ok(finish(
        CommandSummary::Init(InitSummary { created }),
        Vec::new(),
        0,
        false,
    ))
}
