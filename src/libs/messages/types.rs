/// All user-facing messages produced by the application.
///
/// Centralizing message text behind this enum keeps wording consistent and
/// makes every notification testable without string duplication at call
/// sites. Variants carry the dynamic parts of their message as payload.
#[derive(Debug, Clone)]
pub enum Message {
    // === AUTHENTICATION MESSAGES ===
    RegistrationSuccessful(String), // user name
    LoginSuccessful(String),        // user name
    LoggedOut,
    NotLoggedIn,
    SessionExpired,
    PasswordChanged,
    PasswordsDoNotMatch,
    ProfileUpdated,

    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    TaskAlreadyDeleted,
    TaskInvalidId,
    TasksLoadFailed,
    NoTasksFound,
    NoTaskSelected,
    OperationFailed,
    OperationCancelled,

    // === VALIDATION MESSAGES ===
    ValidationRequiredFields,
    ValidationDeadlineInvalid(String), // raw input

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigNotFound,
    ServerSettingsHeader,

    // === DASHBOARD MESSAGES ===
    SearchResults(u64), // total matches
    SearchHint,

    // === PROMPTS ===
    PromptName,
    PromptEmail,
    PromptPassword,
    PromptConfirmPassword,
    PromptCurrentPassword,
    PromptNewPassword,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDeadline,
    PromptTaskStatus,
    PromptApiUrl,
    PromptPageSize,
    PromptPage,
    PromptConfirmDelete,
}
