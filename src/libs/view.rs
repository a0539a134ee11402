//! Console rendering for tasks, task details, and pagination state.

use crate::api::auth::User;
use crate::libs::controller::Pagination;
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    /// Renders the current page of tasks. Overdue tasks are flagged in the
    /// status column, derived against the wall clock at render time.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "TITLE", "STATUS", "DEADLINE", "CREATED"]);
        for (index, task) in tasks.iter().enumerate() {
            table.add_row(row![
                index + 1,
                task.id,
                task.title,
                Self::status_label(task),
                task.deadline.format(DEADLINE_FORMAT),
                task.created_at.map(|at| at.format("%Y-%m-%d").to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders one task in full.
    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description]);
        table.add_row(row!["Status", Self::status_label(task)]);
        table.add_row(row!["Deadline", task.deadline.format(DEADLINE_FORMAT)]);
        if let Some(created_at) = task.created_at {
            table.add_row(row!["Created", created_at.format(DEADLINE_FORMAT)]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the pagination footer. Nothing is shown for a single page;
    /// there are no controls to describe in that case.
    pub fn pager(pagination: &Pagination) -> Result<()> {
        if !pagination.has_pages() {
            return Ok(());
        }
        println!(
            "Page {} of {} • {} total tasks",
            pagination.page, pagination.total_pages, pagination.total
        );

        Ok(())
    }

    pub fn user(user: &User) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Name", user.name]);
        table.add_row(row!["Email", user.email]);
        table.printstd();

        Ok(())
    }

    fn status_label(task: &Task) -> String {
        if task.is_overdue() {
            format!("{} (OVERDUE)", task.status.label())
        } else {
            task.status.label().to_string()
        }
    }
}
