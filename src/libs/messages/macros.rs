//! Convenience macros for application messaging and logging.
//!
//! The macros route every user-facing message through one of two outputs:
//! plain console text in normal operation, or the `tracing` subscriber when
//! debug mode is active. Debug mode is detected once from the environment
//! (`TASKDASH_DEBUG` or `RUST_LOG`) and cached for the process lifetime.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: general message display
//! - **`msg_success!`** / **`msg_info!`** / **`msg_warning!`**: prefixed notifications
//! - **`msg_error!`**: error display on stderr
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: error construction for propagation
//! - **`msg_debug!`**: debug-only output

use std::sync::OnceLock;

/// Cached debug mode flag so environment variables are checked only once.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Application-specific flag or standard Rust logging configuration
        std::env::var("TASKDASH_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message, optionally wrapped in blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success notification with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️  {}", $msg);
        } else {
            println!("⚠️  {}", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️  {}", $msg);
        } else {
            println!("ℹ️  {}", $msg);
        }
    };
}

/// Prints a debug-only message; silent unless debug mode is active.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message for propagation with `?`.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early from the enclosing function with a message error.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
