//! Profile command: shows the current user, with an edit mode.
//!
//! The profile is always fetched fresh from the server rather than read
//! from the local cache, so a stale token is caught here instead of
//! surfacing later. After an update the cached user object is replaced.

use crate::api::auth::{AuthApi, ProfileUpdate};
use crate::libs::{config::Config, messages::Message, session::Session, view::View};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Update name and email instead of just displaying them
    #[arg(short, long)]
    edit: bool,
}

/// Executes the profile command.
pub async fn cmd(args: ProfileArgs) -> Result<()> {
    if !Session::is_active() {
        msg_error!(Message::NotLoggedIn);
        return Ok(());
    }

    let server = Config::read()?.server()?;
    let api = AuthApi::new(&server.api_url);
    let user = api.profile().await?;

    if !args.edit {
        View::user(&user)?;
        return Ok(());
    }

    let update = ProfileUpdate {
        name: Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptName.to_string())
            .default(user.name)
            .interact_text()?,
        email: Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .default(user.email)
            .interact_text()?,
    };

    let updated = api.update_profile(&update).await?;
    Session::save_user(&updated)?;
    msg_success!(Message::ProfileUpdated);
    View::user(&updated)?;
    Ok(())
}
