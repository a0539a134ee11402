//! Login command: authenticates and persists the session.

use crate::api::auth::{AuthApi, Credentials};
use crate::libs::{config::Config, messages::Message, session::Session};
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};

/// Executes the login command.
pub async fn cmd() -> Result<()> {
    let server = Config::read()?.server()?;

    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEmail.to_string())
        .interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    let credentials = Credentials { email, password };
    let auth = AuthApi::new(&server.api_url).login(&credentials).await?;

    Session::save(&auth.token, &auth.user)?;
    msg_success!(Message::LoginSuccessful(auth.user.name));
    Ok(())
}
