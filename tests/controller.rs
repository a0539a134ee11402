#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use taskdash::api::todos::TodoApi;
    use taskdash::libs::controller::TaskController;
    use taskdash::libs::task::{StatusFilter, TaskDraft, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct ControllerTestContext {
        _temp_dir: TempDir,
    }

    impl AsyncTestContext for ControllerTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ControllerTestContext { _temp_dir: temp_dir }
        }
    }

    fn task_json(id: &str, title: &str) -> Value {
        json!({
            "id": id,
            "title": title,
            "description": "details",
            "deadline": "2026-12-31T12:00:00Z",
            "status": "pending",
            "createdAt": "2026-08-01T08:00:00Z"
        })
    }

    fn tasks_json(count: usize) -> Vec<Value> {
        (0..count).map(|i| task_json(&format!("t{}", i), &format!("Task {}", i))).collect()
    }

    fn page_body(tasks: Vec<Value>, page: u32, total: u64, total_pages: u32) -> Value {
        json!({
            "data": tasks,
            "pagination": { "page": page, "total": total, "totalPages": total_pages }
        })
    }

    fn controller(server: &MockServer, page_size: u32) -> TaskController {
        TaskController::new(TodoApi::new(&server.uri()), page_size)
    }

    async fn last_request_query(server: &MockServer) -> Vec<(String, String)> {
        let requests = server.received_requests().await.unwrap();
        let last = requests.last().unwrap();
        last.url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_load_preserves_client_page_size(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        // The server reports its own limit; the client must keep its own
        Mock::given(method("GET"))
            .and(path("/todos"))
            .and(query_param("page", "1"))
            .and(query_param("limit", "8"))
            .and(query_param("sortBy", "createdAt"))
            .and(query_param("order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": tasks_json(8),
                "pagination": { "page": 1, "total": 20, "totalPages": 3, "limit": 25 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = controller(&server, 8);
        controller.load().await.unwrap();

        assert_eq!(controller.tasks().len(), 8);
        let pagination = controller.pagination();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 8);
        assert_eq!(pagination.total, 20);
        assert_eq!(pagination.total_pages, 3);

        // Inactive status and empty search are omitted from the query
        let query = last_request_query(&server).await;
        assert!(!query.iter().any(|(k, _)| k == "status"));
        assert!(!query.iter().any(|(k, _)| k == "search"));
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_filter_change_resets_page_to_one(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(tasks_json(3), 1, 20, 3)))
            .mount(&server)
            .await;

        let mut controller = controller(&server, 8);
        controller.load().await.unwrap();
        assert!(controller.change_page(2).await.unwrap());

        controller.set_status_filter(StatusFilter::Only(TaskStatus::Completed)).await.unwrap();

        let query = last_request_query(&server).await;
        assert!(query.contains(&("page".to_string(), "1".to_string())));
        assert!(query.contains(&("status".to_string(), "completed".to_string())));
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_search_commit_resets_page_to_one(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(tasks_json(3), 1, 20, 3)))
            .mount(&server)
            .await;

        let mut controller = controller(&server, 8);
        controller.load().await.unwrap();
        assert!(controller.change_page(3).await.unwrap());

        controller.commit_search("report".to_string()).await.unwrap();

        let query = last_request_query(&server).await;
        assert!(query.contains(&("page".to_string(), "1".to_string())));
        assert!(query.contains(&("search".to_string(), "report".to_string())));

        // Re-committing the already-active value issues no new request
        let requests_before = server.received_requests().await.unwrap().len();
        controller.commit_search("report".to_string()).await.unwrap();
        assert_eq!(server.received_requests().await.unwrap().len(), requests_before);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_out_of_range_navigation_is_silently_ignored(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(tasks_json(3), 1, 20, 3)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(tasks_json(3), 3, 20, 3)))
            .mount(&server)
            .await;

        let mut controller = controller(&server, 8);
        controller.load().await.unwrap();
        let requests_after_load = server.received_requests().await.unwrap().len();

        assert!(!controller.change_page(0).await.unwrap());
        assert!(!controller.change_page(4).await.unwrap());
        assert_eq!(server.received_requests().await.unwrap().len(), requests_after_load);

        // At the last page the "next" intent is a no-op as well
        assert!(controller.change_page(3).await.unwrap());
        assert!(!controller.pagination().has_next());
        let requests_at_last = server.received_requests().await.unwrap().len();
        assert!(!controller.next_page().await.unwrap());
        assert_eq!(server.received_requests().await.unwrap().len(), requests_at_last);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_single_page_has_no_pagination_controls(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(tasks_json(4), 1, 4, 1)))
            .mount(&server)
            .await;

        let mut controller = controller(&server, 8);
        controller.load().await.unwrap();
        assert!(!controller.pagination().has_pages());
        assert!(!controller.pagination().has_next());
        assert!(!controller.pagination().has_prev());
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_single_object_response_is_normalized(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": task_json("only", "Single task"),
                "pagination": { "page": 1, "total": 1, "totalPages": 1 }
            })))
            .mount(&server)
            .await;

        let mut controller = controller(&server, 8);
        controller.load().await.unwrap();
        assert_eq!(controller.tasks().len(), 1);
        assert_eq!(controller.tasks()[0].id, "only");
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_load_failure_keeps_previous_tasks(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(tasks_json(8), 1, 20, 3)))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut controller = controller(&server, 8);
        controller.load().await.unwrap();
        assert_eq!(controller.tasks().len(), 8);

        let err = controller.load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to load tasks"));
        // The last known-good page stays in place
        assert_eq!(controller.tasks().len(), 8);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_create_with_empty_title_sends_nothing(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("POST")).and(path("/todos")).respond_with(ResponseTemplate::new(201)).expect(0).mount(&server).await;

        let mut controller = controller(&server, 8);
        let draft = TaskDraft {
            title: String::new(),
            description: "details".to_string(),
            deadline: "2026-09-01 10:00".to_string(),
            status: TaskStatus::Pending,
        };
        let err = controller.create(&draft).await.unwrap_err();
        assert!(err.to_string().contains("required fields"));
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_delete_without_id_or_selection_sends_nothing(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("DELETE")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let mut controller = controller(&server, 8);
        let err = controller.delete(None).await.unwrap_err();
        assert!(err.to_string().contains("no task identifier"));
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_delete_error_mapping_by_status(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/todos/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Todo not found" })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/todos/bogus"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Invalid ObjectId" })))
            .mount(&server)
            .await;

        let mut controller = controller(&server, 8);

        let err = controller.delete(Some("missing")).await.unwrap_err();
        assert!(err.to_string().contains("already been deleted"));

        let err = controller.delete(Some("bogus")).await.unwrap_err();
        assert!(err.to_string().contains("Invalid task identifier"));
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_delete_closes_detail_view_and_reloads(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(tasks_json(1), 1, 1, 1)))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("DELETE")).and(path("/todos/t0")).respond_with(ResponseTemplate::new(200)).expect(1).mount(&server).await;

        let mut controller = controller(&server, 8);
        controller.load().await.unwrap();
        let task = controller.tasks()[0].clone();
        controller.select(task);

        controller.delete(None).await.unwrap();
        assert!(controller.selected().is_none());
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_update_reloads_instead_of_patching_in_place(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        let before = json!({
            "data": [task_json("t1", "Original")],
            "pagination": { "page": 1, "total": 1, "totalPages": 1 }
        });
        let mut after_task = task_json("t1", "Renamed");
        // A server-side change that was never part of the patch
        after_task["createdAt"] = json!("2026-08-15T09:30:00Z");
        let after = json!({
            "data": [after_task],
            "pagination": { "page": 1, "total": 1, "totalPages": 1 }
        });

        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(before))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(after))
            .mount(&server)
            .await;
        Mock::given(method("PUT")).and(path("/todos/t1")).respond_with(ResponseTemplate::new(200)).expect(1).mount(&server).await;

        let mut controller = controller(&server, 8);
        controller.load().await.unwrap();
        let original_created = controller.tasks()[0].created_at;

        let draft = TaskDraft {
            title: "Renamed".to_string(),
            description: "details".to_string(),
            deadline: "2026-12-31T12:00:00Z".to_string(),
            status: TaskStatus::Pending,
        };
        controller.update("t1", &draft).await.unwrap();

        let reloaded = &controller.tasks()[0];
        assert_eq!(reloaded.title, "Renamed");
        assert_ne!(reloaded.created_at, original_created);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_create_reloads_current_page(_ctx: &mut ControllerTestContext) {
        let server = MockServer::start().await;
        Mock::given(method("POST")).and(path("/todos")).respond_with(ResponseTemplate::new(201)).expect(1).mount(&server).await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(tasks_json(2), 1, 2, 1)))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = controller(&server, 8);
        let draft = TaskDraft {
            title: "New task".to_string(),
            description: "details".to_string(),
            deadline: "2026-12-31T12:00:00Z".to_string(),
            status: TaskStatus::Pending,
        };
        controller.create(&draft).await.unwrap();
        assert_eq!(controller.tasks().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typed_search_debounces_to_one_commit() {
        // No request is issued while typing; only the debounced commit acts
        let mut controller = TaskController::new(TodoApi::new("http://127.0.0.1:9"), 8);

        for i in 0..10 {
            controller.type_search(&format!("repor{}", i));
            tokio::time::advance(std::time::Duration::from_millis(20)).await;
        }
        let committed = controller.next_commit().await.unwrap();
        assert_eq!(committed, "repor9");
        assert_eq!(controller.search_input(), "repor9");
    }
}
