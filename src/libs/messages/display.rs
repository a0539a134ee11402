//! Display implementation for taskdash application messages.
//!
//! Converts structured `Message` variants into human-readable text for
//! terminal output. All user-facing wording lives here, in one place,
//! so notifications stay consistent across commands and the dashboard.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === AUTHENTICATION MESSAGES ===
            Message::RegistrationSuccessful(name) => format!("Welcome, {}! Your account has been created.", name),
            Message::LoginSuccessful(name) => format!("Logged in as {}.", name),
            Message::LoggedOut => "Logged out successfully.".to_string(),
            Message::NotLoggedIn => "You are not logged in. Run 'taskdash login' first.".to_string(),
            Message::SessionExpired => "Your session has expired. Please log in again.".to_string(),
            Message::PasswordChanged => "Password changed successfully.".to_string(),
            Message::PasswordsDoNotMatch => "The passwords do not match.".to_string(),
            Message::ProfileUpdated => "Profile updated.".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created successfully.".to_string(),
            Message::TaskUpdated => "Task updated successfully.".to_string(),
            Message::TaskDeleted => "Task deleted successfully.".to_string(),
            Message::TaskAlreadyDeleted => "Task not found. It may have already been deleted.".to_string(),
            Message::TaskInvalidId => "Invalid task identifier.".to_string(),
            Message::TasksLoadFailed => "Failed to load tasks.".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoTaskSelected => "Cannot delete: no task identifier given or selected.".to_string(),
            Message::OperationFailed => "Operation failed.".to_string(),
            Message::OperationCancelled => "Operation cancelled.".to_string(),

            // === VALIDATION MESSAGES ===
            Message::ValidationRequiredFields => "Please fill all required fields: title, description and deadline.".to_string(),
            Message::ValidationDeadlineInvalid(input) => {
                format!("'{}' is not a valid deadline. Use a format like 2026-09-01 17:30.", input)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully.".to_string(),
            Message::ConfigNotFound => "Server is not configured. Run 'taskdash init' first.".to_string(),
            Message::ServerSettingsHeader => "Task server settings".to_string(),

            // === DASHBOARD MESSAGES ===
            Message::SearchResults(total) => format!("{} task(s) match", total),
            Message::SearchHint => "Type to search; Enter applies, Esc keeps the current filter.".to_string(),

            // === PROMPTS ===
            Message::PromptName => "Your name".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptConfirmPassword => "Confirm password".to_string(),
            Message::PromptCurrentPassword => "Current password".to_string(),
            Message::PromptNewPassword => "New password".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskDeadline => "Deadline (e.g. 2026-09-01 17:30)".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptApiUrl => "Task server API URL".to_string(),
            Message::PromptPageSize => "Tasks per page".to_string(),
            Message::PromptPage => "Go to page".to_string(),
            Message::PromptConfirmDelete => "Are you sure you want to delete this task?".to_string(),
        };

        write!(f, "{}", message)
    }
}
