//! Task list controller: pagination, filtering, search, and CRUD
//! orchestration against the task collection endpoint.
//!
//! The controller owns the in-memory page of tasks and the parameters that
//! produced it. Every successful load replaces the held collection
//! wholesale; there is no incremental merging and no optimistic mutation.
//! After a create, update, or delete the controller reloads the current
//! page instead of patching local state, so server-computed fields
//! (creation timestamps, ordering) can never drift from what is displayed.
//!
//! ## Pagination policy
//!
//! The client's page size is authoritative: it is sent with every request
//! and never replaced by the server's reported page size. Changing the
//! status filter or committing a search resets the page to 1. Navigation
//! outside `[1, total_pages]` is silently ignored, and while a page change
//! is in flight further page-change intents are gated until it resolves.
//!
//! ## Busy flags
//!
//! Loading, mutation, deletion, and page-changing states are tracked
//! independently so one in-flight action never blocks the indicators of
//! another.
//!
//! Note: rapid successive loads have no stale-response guard; the last
//! response to arrive wins. The controller is driven sequentially by the
//! CLI loop, which keeps that window closed in practice.

use crate::api::todos::{delete_failure, operation_failure, TaskQuery, TodoApi};
use crate::api::ApiError;
use crate::libs::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::libs::messages::Message;
use crate::libs::task::{StatusFilter, Task, TaskDraft};
use crate::msg_error_anyhow;
use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

/// Client-owned page state.
///
/// `limit` is fixed by the client; `page`, `total`, and `total_pages`
/// track what the server last reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total: 0,
            total_pages: 1,
        }
    }

    /// Pagination controls only exist when there is more than one page.
    pub fn has_pages(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Active filter state: a status filter and the committed search text.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub status: StatusFilter,
    pub search: String,
}

pub struct TaskController {
    api: TodoApi,
    tasks: Vec<Task>,
    pagination: Pagination,
    filters: Filters,
    search_input: String,
    selected: Option<Task>,
    loading: bool,
    mutating: bool,
    deleting: bool,
    page_changing: bool,
    debouncer: Debouncer,
    commits: UnboundedReceiver<String>,
}

impl TaskController {
    pub fn new(api: TodoApi, page_size: u32) -> Self {
        let (debouncer, commits) = Debouncer::new(SEARCH_DEBOUNCE);
        Self {
            api,
            tasks: Vec::new(),
            pagination: Pagination::new(page_size),
            filters: Filters::default(),
            search_input: String::new(),
            selected: None,
            loading: false,
            mutating: false,
            deleting: false,
            page_changing: false,
            debouncer,
            commits,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Raw search text as typed, before the debounce commits it.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn selected(&self) -> Option<&Task> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, task: Task) {
        self.selected = Some(task);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn is_page_changing(&self) -> bool {
        self.page_changing
    }

    /// Loads the current page with the active filters.
    ///
    /// On success the held collection is replaced and `page`, `total`, and
    /// `total_pages` are taken from the response; the page size stays the
    /// client's own. On failure the previous collection stays untouched and
    /// transport and server errors are reported identically.
    pub async fn load(&mut self) -> Result<()> {
        let query = TaskQuery {
            page: self.pagination.page,
            limit: self.pagination.limit,
            status: self.filters.status,
            search: self.filters.search.clone(),
        };

        self.loading = true;
        let result = self.api.list(&query).await;
        self.loading = false;
        self.page_changing = false;

        let page = result.map_err(Self::load_failure)?;
        self.tasks = page.tasks;
        self.pagination.page = page.meta.page.unwrap_or(self.pagination.page);
        self.pagination.total = page.meta.total.unwrap_or(self.pagination.total);
        self.pagination.total_pages = page.meta.total_pages.unwrap_or(self.pagination.total_pages);
        Ok(())
    }

    /// Navigates to a page. Out-of-range targets and requests made while a
    /// page change is already in flight are silently ignored; the return
    /// value reports whether a request was issued.
    pub async fn change_page(&mut self, page: u32) -> Result<bool> {
        if self.page_changing {
            return Ok(false);
        }
        if page < 1 || page > self.pagination.total_pages {
            return Ok(false);
        }
        self.page_changing = true;
        self.pagination.page = page;
        self.load().await?;
        Ok(true)
    }

    pub async fn next_page(&mut self) -> Result<bool> {
        self.change_page(self.pagination.page + 1).await
    }

    pub async fn prev_page(&mut self) -> Result<bool> {
        // Saturating: page 1 minus one must not wrap into a huge page number.
        self.change_page(self.pagination.page.saturating_sub(1)).await
    }

    /// Applies a status filter, resetting to page 1 before reloading.
    pub async fn set_status_filter(&mut self, status: StatusFilter) -> Result<()> {
        self.filters.status = status;
        self.page_changing = true;
        self.pagination.page = 1;
        self.load().await
    }

    /// Records raw search input; the commit fires through the debouncer
    /// after the quiet period.
    pub fn type_search(&mut self, value: &str) {
        self.search_input = value.to_string();
        self.debouncer.input(value.to_string());
    }

    /// Waits for the next debounced commit. Cancel-safe, for use in
    /// `select!` alongside terminal input.
    pub async fn next_commit(&mut self) -> Option<String> {
        self.commits.recv().await
    }

    /// Commits a search value: page resets to 1 and the list reloads.
    /// Committing the value that is already active is a no-op.
    pub async fn commit_search(&mut self, value: String) -> Result<()> {
        self.search_input = value.clone();
        if self.filters.search == value {
            return Ok(());
        }
        self.filters.search = value;
        self.pagination.page = 1;
        self.load().await
    }

    /// Cancels any pending debounced commit without applying it.
    pub fn cancel_search(&mut self) {
        self.debouncer.cancel();
        self.search_input = self.filters.search.clone();
    }

    /// Creates a task from a draft. Validation failures reject locally
    /// before any request; success reloads the current page so the new
    /// item's position is decided by the server's sort order.
    pub async fn create(&mut self, draft: &TaskDraft) -> Result<()> {
        let payload = draft.validate()?;

        self.mutating = true;
        let result = self.api.create(&payload).await;
        self.mutating = false;

        result.map_err(operation_failure)?;
        self.load().await
    }

    /// Updates a task, then reloads the page rather than patching the item
    /// in place.
    pub async fn update(&mut self, id: &str, draft: &TaskDraft) -> Result<()> {
        let payload = draft.validate()?;

        self.mutating = true;
        let result = self.api.update(id, &payload).await;
        self.mutating = false;

        result.map_err(operation_failure)?;
        self.load().await
    }

    /// Deletes a task by explicit id or the current selection. With
    /// neither, the operation is rejected locally and nothing is sent.
    /// Confirmation is the caller's responsibility and happens before this
    /// method is reached.
    pub async fn delete(&mut self, id: Option<&str>) -> Result<()> {
        let id = match id.map(str::to_owned).or_else(|| self.selected.as_ref().map(|task| task.id.clone())) {
            Some(id) => id,
            None => return Err(msg_error_anyhow!(Message::NoTaskSelected)),
        };

        self.deleting = true;
        let result = self.api.delete(&id).await;
        self.deleting = false;

        result.map_err(delete_failure)?;

        // Close any detail view referencing the deleted task.
        if self.selected.as_ref().is_some_and(|task| task.id == id) {
            self.selected = None;
        }
        self.load().await
    }

    fn load_failure(err: ApiError) -> anyhow::Error {
        match err {
            ApiError::Unauthorized => msg_error_anyhow!(Message::SessionExpired),
            _ => msg_error_anyhow!(Message::TasksLoadFailed),
        }
    }
}
