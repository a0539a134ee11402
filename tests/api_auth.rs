#[cfg(test)]
mod tests {
    use serde_json::json;
    use taskdash::api::auth::{AuthApi, Credentials};
    use taskdash::api::ApiError;
    use taskdash::libs::session::Session;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Kept as the only test in this binary: it rewrites HOME and the
    // persisted session files, which must not race with other tests.
    #[tokio::test]
    async fn test_login_and_profile_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());
        std::env::set_var("LOCALAPPDATA", temp_dir.path());

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({ "email": "eve@example.com", "password": "hunter2" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "token": "fresh-token",
                    "user": { "_id": "u1", "name": "Eve", "email": "eve@example.com" }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/auth/profile"))
            .and(header("Authorization", "Bearer fresh-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "user": { "_id": "u1", "name": "Eve", "email": "eve@example.com" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = AuthApi::new(&server.uri());
        let credentials = Credentials {
            email: "eve@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let auth = api.login(&credentials).await.unwrap();
        assert_eq!(auth.token, "fresh-token");
        assert_eq!(auth.user.id.as_deref(), Some("u1"));

        Session::save(&auth.token, &auth.user).unwrap();
        assert!(Session::is_active());

        // Subsequent calls pick the stored token up automatically
        let profile = api.profile().await.unwrap();
        assert_eq!(profile.email, "eve@example.com");

        // The server's own words surface on rejected credentials
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Invalid credentials" })))
            .mount(&server)
            .await;
        let wrong = Credentials {
            email: "eve@example.com".to_string(),
            password: "wrong".to_string(),
        };
        let err = api.login(&wrong).await.unwrap_err();
        match err {
            ApiError::BadRequest { message } => assert_eq!(message.as_deref(), Some("Invalid credentials")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
