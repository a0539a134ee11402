//! Configuration management for the taskdash application.
//!
//! Settings are stored as JSON in the platform application data directory
//! and cover the one external collaborator this client has: the task server.
//! An interactive wizard (`taskdash init`) fills in the server URL and the
//! client-side page size used for every task list request.
//!
//! The page size configured here is authoritative on the client: list
//! responses never override it, whatever pagination metadata the server
//! reports.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default number of tasks requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// Task server connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task management REST API.
    pub api_url: String,
    /// Fixed client-side page size for task list requests.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ServerConfig {
    /// Runs the interactive setup prompts, pre-filled from an existing
    /// configuration when one is present.
    pub fn init(current: &Option<ServerConfig>) -> Result<Self> {
        let current = current.clone().unwrap_or_default();
        msg_print!(Message::ServerSettingsHeader);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(current.api_url)
                .interact_text()?,
            page_size: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPageSize.to_string())
                .default(current.page_size)
                .interact_text()?,
        })
    }
}

/// Top-level application configuration.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Loads the configuration file, or defaults when none exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration to disk as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard against the stored config.
    pub fn init() -> Result<Self> {
        let current = Config::read().unwrap_or_default();
        let server = ServerConfig::init(&current.server)?;
        Ok(Config { server: Some(server) })
    }

    /// Returns the server settings, or an error telling the user to run
    /// `taskdash init` when the server has not been configured.
    pub fn server(&self) -> Result<ServerConfig> {
        self.server.clone().ok_or_else(|| msg_error_anyhow!(Message::ConfigNotFound))
    }
}
