#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use taskdash::libs::task::{parse_deadline, Task, TaskDraft, TaskStatus};

    fn task_with(deadline: DateTime<Utc>, status: TaskStatus) -> Task {
        Task {
            id: "t1".to_string(),
            title: "Write report".to_string(),
            description: "Quarterly summary".to_string(),
            deadline,
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_overdue_requires_past_deadline_and_open_status() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

        let past_pending = task_with(now - Duration::hours(1), TaskStatus::Pending);
        assert!(past_pending.is_overdue_at(now));

        let past_in_progress = task_with(now - Duration::hours(1), TaskStatus::InProgress);
        assert!(past_in_progress.is_overdue_at(now));

        // A completed task is never overdue, regardless of deadline
        let past_completed = task_with(now - Duration::days(30), TaskStatus::Completed);
        assert!(!past_completed.is_overdue_at(now));

        let future_pending = task_with(now + Duration::hours(1), TaskStatus::Pending);
        assert!(!future_pending.is_overdue_at(now));
    }

    #[test]
    fn test_deadline_exactly_now_is_not_overdue() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let task = task_with(now, TaskStatus::Pending);
        // Overdue means strictly before the current time
        assert!(!task.is_overdue_at(now));
    }

    #[test]
    fn test_draft_requires_title_description_and_deadline() {
        let missing_title = TaskDraft {
            title: "   ".to_string(),
            description: "Something".to_string(),
            deadline: "2026-09-01 10:00".to_string(),
            status: TaskStatus::Pending,
        };
        let err = missing_title.validate().unwrap_err();
        assert!(err.to_string().contains("required fields"));

        let missing_description = TaskDraft {
            title: "Title".to_string(),
            description: String::new(),
            deadline: "2026-09-01 10:00".to_string(),
            status: TaskStatus::Pending,
        };
        assert!(missing_description.validate().is_err());

        let missing_deadline = TaskDraft {
            title: "Title".to_string(),
            description: "Something".to_string(),
            deadline: String::new(),
            status: TaskStatus::Pending,
        };
        assert!(missing_deadline.validate().is_err());
    }

    #[test]
    fn test_draft_rejects_unparseable_deadline() {
        let draft = TaskDraft {
            title: "Title".to_string(),
            description: "Something".to_string(),
            deadline: "next tuesday".to_string(),
            status: TaskStatus::Pending,
        };
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("not a valid deadline"));
    }

    #[test]
    fn test_draft_trims_fields_and_normalizes_deadline() {
        let draft = TaskDraft {
            title: "  Title  ".to_string(),
            description: "  Something  ".to_string(),
            deadline: "2026-09-01T10:00:00Z".to_string(),
            status: TaskStatus::InProgress,
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.title, "Title");
        assert_eq!(payload.description, "Something");
        assert_eq!(payload.deadline, Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap());
        assert_eq!(payload.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_parse_deadline_accepts_rfc3339_with_offset() {
        let parsed = parse_deadline("2026-09-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_task_accepts_underscore_id_on_the_wire() {
        let raw = r#"{
            "_id": "abc123",
            "title": "Imported",
            "description": "",
            "deadline": "2026-09-01T10:00:00Z",
            "status": "in-progress",
            "createdAt": "2026-08-01T08:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.id, "abc123");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(task.created_at.is_some());
    }
}
