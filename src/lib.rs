//! # Taskdash - command-line client for a task management service
//!
//! A command-line client for a task management REST service: accounts,
//! task CRUD with server-side pagination and search, and an interactive
//! dashboard.
//!
//! ## Features
//!
//! - **Accounts**: registration, login, profile management, password change
//! - **Persistent Sessions**: bearer token stored across runs, cleared on
//!   logout or when the server rejects it
//! - **Task Management**: create, edit, and delete tasks with local
//!   validation before anything goes on the wire
//! - **Paginated Lists**: server-side pagination with a client-fixed page
//!   size, status filtering, and debounced live search
//! - **Dashboard**: interactive loop over the task list controller
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdash::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
