//! Task collection endpoints: paginated listing and CRUD.
//!
//! The list endpoint returns `{data: [Task], pagination: {page, total,
//! totalPages}}`. All pagination metadata is optional on the wire; whatever
//! the server omits keeps its previous client value. A server that returns
//! a single object instead of a collection is normalized into a one-element
//! collection.

use super::{ApiClient, ApiError};
use crate::libs::messages::Message;
use crate::libs::task::{StatusFilter, Task, TaskPayload};
use crate::msg_error_anyhow;
use reqwest::Method;
use serde::Deserialize;

const TODOS_URL: &str = "todos";

/// Default sort: newest first, so freshly created tasks surface on page 1.
const SORT_BY: &str = "createdAt";
const ORDER: &str = "desc";

/// Parameters for one task list request.
#[derive(Debug, Clone)]
pub struct TaskQuery {
    pub page: u32,
    pub limit: u32,
    pub status: StatusFilter,
    pub search: String,
}

impl TaskQuery {
    /// Builds the query pairs, omitting empty status/search the way the
    /// server expects absent parameters rather than empty strings.
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", SORT_BY.to_string()),
            ("order", ORDER.to_string()),
        ];
        if let Some(status) = self.status.as_param() {
            params.push(("status", status.to_string()));
        }
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        params
    }
}

/// Server-reported pagination metadata. Every field is optional; the
/// client never takes a page size from here.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Task>),
    One(Box<Task>),
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    data: Option<OneOrMany>,
    #[serde(default)]
    pagination: Option<PageMeta>,
}

/// One page of tasks plus the metadata that came with it.
#[derive(Debug)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub meta: PageMeta,
}

pub struct TodoApi {
    client: ApiClient,
}

impl TodoApi {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: ApiClient::new(api_url),
        }
    }

    pub async fn list(&self, query: &TaskQuery) -> Result<TaskPage, ApiError> {
        let request = self.client.request(Method::GET, TODOS_URL).query(&query.params());
        let response = self.client.execute(request).await?;
        let body: ListResponse = response.json().await?;

        let tasks = match body.data {
            Some(OneOrMany::Many(tasks)) => tasks,
            Some(OneOrMany::One(task)) => vec![*task],
            None => Vec::new(),
        };

        Ok(TaskPage {
            tasks,
            meta: body.pagination.unwrap_or_default(),
        })
    }

    pub async fn get(&self, id: &str) -> Result<Task, ApiError> {
        self.client
            .fetch(self.client.request(Method::GET, &format!("{}/{}", TODOS_URL, id)))
            .await
    }

    /// Creates a task. Callers reload the current page afterwards instead of
    /// inserting locally, so the new item's position is the server's call.
    pub async fn create(&self, payload: &TaskPayload) -> Result<(), ApiError> {
        self.client
            .execute(self.client.json_request(Method::POST, TODOS_URL, payload))
            .await?;
        Ok(())
    }

    /// Updates a task. Callers reload rather than patching in place, which
    /// keeps server-computed fields from drifting.
    pub async fn update(&self, id: &str, payload: &TaskPayload) -> Result<(), ApiError> {
        self.client
            .execute(self.client.json_request(Method::PUT, &format!("{}/{}", TODOS_URL, id), payload))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .execute(self.client.request(Method::DELETE, &format!("{}/{}", TODOS_URL, id)))
            .await?;
        Ok(())
    }
}

/// Maps a delete failure onto user-facing messages: a missing task was
/// already deleted, a 400 means the identifier itself was rejected, and
/// anything else surfaces the server's own words when it has any.
pub fn delete_failure(err: ApiError) -> anyhow::Error {
    match err {
        ApiError::Unauthorized => msg_error_anyhow!(Message::SessionExpired),
        ApiError::NotFound { .. } => msg_error_anyhow!(Message::TaskAlreadyDeleted),
        ApiError::BadRequest { .. } => msg_error_anyhow!(Message::TaskInvalidId),
        other => match other.message() {
            Some(message) => anyhow::anyhow!("❌ {}", message),
            None => msg_error_anyhow!(Message::OperationFailed),
        },
    }
}

/// Maps create/update failures: the server's validation message verbatim
/// when present, otherwise a generic failure.
pub fn operation_failure(err: ApiError) -> anyhow::Error {
    match err {
        ApiError::Unauthorized => msg_error_anyhow!(Message::SessionExpired),
        other => match other.message() {
            Some(message) => anyhow::anyhow!("❌ {}", message),
            None => msg_error_anyhow!(Message::OperationFailed),
        },
    }
}
