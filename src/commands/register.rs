//! Account registration command.
//!
//! Prompts for name, email, and password, creates the account, and stores
//! the returned session so the user is immediately logged in.

use crate::api::auth::{AuthApi, RegisterPayload};
use crate::libs::{config::Config, messages::Message, session::Session};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};

/// Executes the registration command.
pub async fn cmd() -> Result<()> {
    let server = Config::read()?.server()?;

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptName.to_string())
        .interact_text()?;
    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEmail.to_string())
        .interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;
    let confirmation = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptConfirmPassword.to_string())
        .interact()?;

    if password != confirmation {
        msg_bail_anyhow!(Message::PasswordsDoNotMatch);
    }

    let payload = RegisterPayload { name, email, password };
    let auth = AuthApi::new(&server.api_url).register(&payload).await?;

    Session::save(&auth.token, &auth.user)?;
    msg_success!(Message::RegistrationSuccessful(auth.user.name));
    Ok(())
}
