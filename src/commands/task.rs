//! One-shot task CRUD subcommands.
//!
//! Covers scripted and quick interactive use without entering the
//! dashboard: list a page, show one task, create, edit, and delete.
//! Missing fields are prompted for interactively; edit prompts come
//! pre-filled with the task's current values.

use crate::api::todos::{delete_failure, operation_failure, TaskQuery, TodoApi};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::task::{StatusFilter, Task, TaskDraft, TaskStatus};
use crate::libs::view::View;
use crate::{msg_error, msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

const DEADLINE_PROMPT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommands,
}

#[derive(Debug, Subcommand)]
enum TaskCommands {
    #[command(about = "List tasks for one page")]
    List(ListArgs),
    #[command(about = "Show a single task")]
    Show { id: String },
    #[command(about = "Create a task")]
    New(DraftArgs),
    #[command(about = "Edit an existing task")]
    Edit(EditArgs),
    #[command(about = "Delete a task")]
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Page to fetch
    #[arg(short, long, default_value_t = 1)]
    page: u32,
    /// Filter by status: pending, in-progress or completed
    #[arg(short, long)]
    status: Option<TaskStatus>,
    /// Search text matched by the server against title and description
    #[arg(long)]
    search: Option<String>,
}

#[derive(Debug, Args, Default)]
struct DraftArgs {
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    /// Deadline, e.g. "2026-09-01 17:30"
    #[arg(long)]
    deadline: Option<String>,
    #[arg(short, long)]
    status: Option<TaskStatus>,
}

#[derive(Debug, Args)]
struct EditArgs {
    id: String,
    #[command(flatten)]
    draft: DraftArgs,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

impl clap::ValueEnum for TaskStatus {
    fn value_variants<'a>() -> &'a [Self] {
        &TaskStatus::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// Executes a task subcommand.
pub async fn cmd(args: TaskArgs) -> Result<()> {
    if !Session::is_active() {
        msg_error!(Message::NotLoggedIn);
        return Ok(());
    }

    let server = Config::read()?.server()?;
    let api = TodoApi::new(&server.api_url);

    match args.command {
        TaskCommands::List(list) => {
            let query = TaskQuery {
                page: list.page.max(1),
                limit: server.page_size,
                status: list.status.map(StatusFilter::Only).unwrap_or_default(),
                search: list.search.unwrap_or_default(),
            };
            let page = api.list(&query).await.map_err(|_| msg_error_anyhow!(Message::TasksLoadFailed))?;
            if page.tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
                return Ok(());
            }
            View::tasks(&page.tasks)?;
            println!(
                "Page {} of {} • {} total tasks",
                page.meta.page.unwrap_or(query.page),
                page.meta.total_pages.unwrap_or(1),
                page.meta.total.unwrap_or(page.tasks.len() as u64)
            );
        }
        TaskCommands::Show { id } => {
            let task = api.get(&id).await?;
            View::task(&task)?;
        }
        TaskCommands::New(draft) => {
            let draft = fill_draft(draft, None)?;
            let payload = draft.validate()?;
            api.create(&payload).await.map_err(operation_failure)?;
            msg_success!(Message::TaskCreated);
        }
        TaskCommands::Edit(edit) => {
            let current = api.get(&edit.id).await?;
            let draft = fill_draft(edit.draft, Some(&current))?;
            let payload = draft.validate()?;
            api.update(&edit.id, &payload).await.map_err(operation_failure)?;
            msg_success!(Message::TaskUpdated);
        }
        TaskCommands::Delete(delete) => {
            if !delete.yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptConfirmDelete.to_string())
                    .default(false)
                    .interact()?;
                if !confirmed {
                    msg_info!(Message::OperationCancelled);
                    return Ok(());
                }
            }
            api.delete(&delete.id).await.map_err(delete_failure)?;
            msg_success!(Message::TaskDeleted);
        }
    }

    Ok(())
}

/// Prompts for every draft field, defaulting to the task's current values
/// when editing.
pub(crate) fn prompt_draft(current: Option<&Task>) -> Result<TaskDraft> {
    fill_draft(DraftArgs::default(), current)
}

/// Completes a draft from flags, prompting for anything missing. When
/// editing, prompts default to the task's current values.
fn fill_draft(args: DraftArgs, current: Option<&Task>) -> Result<TaskDraft> {
    let theme = ColorfulTheme::default();

    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskTitle.to_string())
            .default(current.map(|task| task.title.clone()).unwrap_or_default())
            .show_default(current.is_some())
            .interact_text()?,
    };
    let description = match args.description {
        Some(description) => description,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskDescription.to_string())
            .default(current.map(|task| task.description.clone()).unwrap_or_default())
            .show_default(current.is_some())
            .interact_text()?,
    };
    let deadline = match args.deadline {
        Some(deadline) => deadline,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskDeadline.to_string())
            .default(
                current
                    .map(|task| task.deadline.format(DEADLINE_PROMPT_FORMAT).to_string())
                    .unwrap_or_default(),
            )
            .show_default(current.is_some())
            .interact_text()?,
    };
    let status = match args.status {
        Some(status) => status,
        None => {
            let initial = current.map(|task| task.status).unwrap_or_default();
            let position = TaskStatus::ALL.iter().position(|status| *status == initial).unwrap_or(0);
            let labels: Vec<&str> = TaskStatus::ALL.iter().map(|status| status.label()).collect();
            let selection = Select::with_theme(&theme)
                .with_prompt(Message::PromptTaskStatus.to_string())
                .items(&labels)
                .default(position)
                .interact()?;
            TaskStatus::ALL[selection]
        }
    };

    Ok(TaskDraft {
        title,
        description,
        deadline,
        status,
    })
}
