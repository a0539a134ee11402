#[cfg(test)]
mod tests {
    use taskdash::api::auth::User;
    use taskdash::libs::session::Session;

    // Kept as the only test in this binary: it rewrites HOME and the
    // persisted session files, which must not race with other tests.
    #[test]
    fn test_session_lifecycle() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());
        std::env::set_var("LOCALAPPDATA", temp_dir.path());

        assert!(!Session::is_active());
        assert!(Session::token().is_none());
        assert!(Session::user().is_none());

        let user = User {
            id: Some("u1".to_string()),
            name: "Eve".to_string(),
            email: "eve@example.com".to_string(),
        };
        Session::save("abc123", &user).unwrap();

        assert!(Session::is_active());
        assert_eq!(Session::token().as_deref(), Some("abc123"));
        assert_eq!(Session::user().unwrap().email, "eve@example.com");

        // Updating the cached user keeps the token
        let renamed = User {
            name: "Eva".to_string(),
            ..user
        };
        Session::save_user(&renamed).unwrap();
        assert_eq!(Session::user().unwrap().name, "Eva");
        assert_eq!(Session::token().as_deref(), Some("abc123"));

        Session::clear().unwrap();
        assert!(!Session::is_active());
        assert!(Session::user().is_none());

        // Clearing an already-empty session is fine
        Session::clear().unwrap();
    }
}
