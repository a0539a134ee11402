//! Password change command.
//!
//! The new password is confirmed locally before any request; a mismatch
//! never reaches the server.

use crate::api::auth::{AuthApi, PasswordChange};
use crate::libs::{config::Config, messages::Message, session::Session};
use crate::{msg_bail_anyhow, msg_error, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};

/// Executes the password change command.
pub async fn cmd() -> Result<()> {
    if !Session::is_active() {
        msg_error!(Message::NotLoggedIn);
        return Ok(());
    }

    let server = Config::read()?.server()?;

    let current_password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCurrentPassword.to_string())
        .interact()?;
    let new_password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewPassword.to_string())
        .interact()?;
    let confirmation = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptConfirmPassword.to_string())
        .interact()?;

    if new_password != confirmation {
        msg_bail_anyhow!(Message::PasswordsDoNotMatch);
    }

    let change = PasswordChange {
        current_password,
        new_password,
    };
    AuthApi::new(&server.api_url).change_password(&change).await?;

    msg_success!(Message::PasswordChanged);
    Ok(())
}
