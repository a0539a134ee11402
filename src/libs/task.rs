//! Task model, status taxonomy, and draft validation.
//!
//! Tasks are server-owned: the client only caches the page it last loaded
//! and never computes fields the server owns. The one derived property is
//! `overdue`, recomputed against the current wall clock at every render
//! rather than stored.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

    /// Wire representation, matching the server's status values.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Human-readable label for tables and menus.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Status filter applied to task list requests.
///
/// `All` sends no status parameter at all; the server treats an absent
/// parameter as "no filtering".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(TaskStatus::Pending),
        StatusFilter::Only(TaskStatus::InProgress),
        StatusFilter::Only(TaskStatus::Completed),
    ];

    /// Query parameter value, or `None` when no filter is active.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(status.as_str()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

/// A task as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier; some backends report it as `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// A task is overdue when its deadline has passed and it is not
    /// completed. Derived at evaluation time, never stored.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.deadline < now && self.status != TaskStatus::Completed
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }
}

/// User-entered task fields prior to validation.
///
/// The deadline is kept as the raw input string until `validate` turns the
/// draft into a wire payload.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub status: TaskStatus,
}

/// Validated task fields in wire form, ready to POST or PUT.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: TaskStatus,
}

impl TaskDraft {
    /// Validates the draft locally and normalizes the deadline to an
    /// absolute UTC timestamp. Rejection here means no request is sent.
    pub fn validate(&self) -> Result<TaskPayload> {
        let title = self.title.trim();
        let description = self.description.trim();
        let deadline = self.deadline.trim();
        if title.is_empty() || description.is_empty() || deadline.is_empty() {
            return Err(msg_error_anyhow!(Message::ValidationRequiredFields));
        }

        let deadline = parse_deadline(deadline).ok_or_else(|| msg_error_anyhow!(Message::ValidationDeadlineInvalid(deadline.to_string())))?;

        Ok(TaskPayload {
            title: title.to_string(),
            description: description.to_string(),
            deadline,
            status: self.status,
        })
    }
}

/// Parses a deadline from the formats users actually type.
///
/// Accepts RFC 3339 as-is; date-time inputs without an offset are taken as
/// local time, and a bare date means local midnight.
pub fn parse_deadline(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(absolute) = DateTime::parse_from_rfc3339(input) {
        return Some(absolute.with_timezone(&Utc));
    }

    let naive = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })?;

    Local.from_local_datetime(&naive).earliest().map(|local| local.with_timezone(&Utc))
}
