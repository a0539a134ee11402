//! Configuration initialization command.
//!
//! Interactive setup wizard for first-time use: prompts for the task
//! server URL and the page size used by task list requests.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

/// Executes the initialization command.
pub fn cmd() -> Result<()> {
    // Run interactive configuration wizard, pre-filled from any existing file
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
