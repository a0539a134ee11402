//! Logout command: clears the persisted session.

use crate::libs::{messages::Message, session::Session};
use crate::msg_success;
use anyhow::Result;

/// Executes the logout command.
pub fn cmd() -> Result<()> {
    Session::clear()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
