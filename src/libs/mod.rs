//! Core library modules for the taskdash application.
//!
//! Centralized access point to the client's building blocks: configuration
//! and data storage, the persisted session, the task model, the task list
//! controller with its search debouncer, console rendering, and the
//! message system.

pub mod config;
pub mod controller;
pub mod data_storage;
pub mod debounce;
pub mod messages;
pub mod session;
pub mod task;
pub mod view;
