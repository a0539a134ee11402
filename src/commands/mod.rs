//! Command-line interface definition and dispatch.
//!
//! Each subcommand lives in its own module with an optional `Args` struct
//! and a `cmd()` entry point; `Cli::menu()` parses the command line and
//! routes to the right one.

pub mod dashboard;
pub mod init;
pub mod login;
pub mod logout;
pub mod password;
pub mod profile;
pub mod register;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Create an account on the task server")]
    Register,
    #[command(about = "Log in and store the session")]
    Login,
    #[command(about = "Clear the stored session")]
    Logout,
    #[command(about = "Show or update your profile")]
    Profile(profile::ProfileArgs),
    #[command(about = "Change your password")]
    Password,
    #[command(about = "Manage tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Interactive task dashboard")]
    Dashboard,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Register => register::cmd().await,
            Commands::Login => login::cmd().await,
            Commands::Logout => logout::cmd(),
            Commands::Profile(args) => profile::cmd(args).await,
            Commands::Password => password::cmd().await,
            Commands::Task(args) => task::cmd(args).await,
            Commands::Dashboard => dashboard::cmd().await,
        }
    }
}
