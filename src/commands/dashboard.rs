//! Interactive task dashboard.
//!
//! A menu loop over the task list controller: page navigation, status
//! filtering, live debounced search, and create/edit/delete with
//! confirmation. Failed operations print their message and leave the last
//! known-good page on screen; the loop never exits on a server error.

use super::task::prompt_draft;
use crate::api::todos::TodoApi;
use crate::libs::config::Config;
use crate::libs::controller::TaskController;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::task::StatusFilter;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use console::{Key, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::io;
use tokio::task::JoinHandle;

#[derive(Clone, Copy, PartialEq)]
enum MenuAction {
    NewTask,
    OpenTask,
    FilterStatus,
    Search,
    NextPage,
    PrevPage,
    GoToPage,
    Refresh,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::NewTask => "New task",
            MenuAction::OpenTask => "Open task",
            MenuAction::FilterStatus => "Filter by status",
            MenuAction::Search => "Search",
            MenuAction::NextPage => "Next page",
            MenuAction::PrevPage => "Previous page",
            MenuAction::GoToPage => "Go to page",
            MenuAction::Refresh => "Refresh",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Executes the dashboard command.
pub async fn cmd() -> Result<()> {
    if !Session::is_active() {
        msg_error!(Message::NotLoggedIn);
        return Ok(());
    }

    let server = Config::read()?.server()?;
    let mut controller = TaskController::new(TodoApi::new(&server.api_url), server.page_size);

    if let Err(err) = controller.load().await {
        eprintln!("{}", err);
    }

    loop {
        render(&controller)?;

        let actions = menu_actions(&controller);
        let labels: Vec<&str> = actions.iter().map(MenuAction::label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default()).items(&labels).default(0).interact()?;

        let outcome = match actions[selection] {
            MenuAction::NewTask => create_task(&mut controller).await,
            MenuAction::OpenTask => open_task(&mut controller).await,
            MenuAction::FilterStatus => filter_status(&mut controller).await,
            MenuAction::Search => live_search(&mut controller).await,
            MenuAction::NextPage => controller.next_page().await.map(|_| ()),
            MenuAction::PrevPage => controller.prev_page().await.map(|_| ()),
            MenuAction::GoToPage => go_to_page(&mut controller).await,
            MenuAction::Refresh => controller.load().await,
            MenuAction::Quit => break,
        };

        if let Err(err) = outcome {
            eprintln!("{}", err);
        }
    }

    Ok(())
}

/// Renders the current page and its pagination footer, or the empty state.
fn render(controller: &TaskController) -> Result<()> {
    println!();
    let filters = controller.filters();
    if filters.status != StatusFilter::All || !filters.search.is_empty() {
        let mut context = format!("Filter: {}", filters.status.label());
        if !filters.search.is_empty() {
            context.push_str(&format!(" • Search: \"{}\"", filters.search));
        }
        println!("{}", context);
    }

    if controller.tasks().is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(controller.tasks())?;
    View::pager(controller.pagination())?;
    Ok(())
}

/// Builds the menu for the current state. Navigation entries only appear
/// when there are multiple pages, and only in directions that stay within
/// range; nothing is offered while a page change is in flight.
fn menu_actions(controller: &TaskController) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::NewTask];
    if !controller.tasks().is_empty() {
        actions.push(MenuAction::OpenTask);
    }
    actions.push(MenuAction::FilterStatus);
    actions.push(MenuAction::Search);

    let pagination = controller.pagination();
    if pagination.has_pages() && !controller.is_page_changing() {
        if pagination.has_next() {
            actions.push(MenuAction::NextPage);
        }
        if pagination.has_prev() {
            actions.push(MenuAction::PrevPage);
        }
        actions.push(MenuAction::GoToPage);
    }

    actions.push(MenuAction::Refresh);
    actions.push(MenuAction::Quit);
    actions
}

async fn create_task(controller: &mut TaskController) -> Result<()> {
    let draft = prompt_draft(None)?;
    controller.create(&draft).await?;
    msg_success!(Message::TaskCreated);
    Ok(())
}

/// Detail view for one task: edit or delete, then back to the list.
async fn open_task(controller: &mut TaskController) -> Result<()> {
    let titles: Vec<String> = controller
        .tasks()
        .iter()
        .map(|task| format!("{} [{}]", task.title, task.status.label()))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Open task")
        .items(&titles)
        .default(0)
        .interact()?;
    let task = controller.tasks()[selection].clone();
    controller.select(task);

    loop {
        let task = match controller.selected() {
            Some(task) => task.clone(),
            None => break,
        };
        View::task(&task)?;

        let options = ["Edit", "Delete", "Back"];
        let choice = Select::with_theme(&ColorfulTheme::default()).items(&options).default(2).interact()?;

        let outcome = match options[choice] {
            "Edit" => {
                let draft = prompt_draft(Some(&task))?;
                match controller.update(&task.id, &draft).await {
                    Ok(()) => {
                        msg_success!(Message::TaskUpdated);
                        // Refresh the selection from the reloaded page
                        match controller.tasks().iter().find(|fresh| fresh.id == task.id).cloned() {
                            Some(fresh) => controller.select(fresh),
                            None => controller.clear_selection(),
                        }
                        Ok(())
                    }
                    Err(err) => Err(err),
                }
            }
            "Delete" => {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptConfirmDelete.to_string())
                    .default(false)
                    .interact()?;
                if !confirmed {
                    msg_info!(Message::OperationCancelled);
                    continue;
                }
                match controller.delete(None).await {
                    Ok(()) => {
                        msg_success!(Message::TaskDeleted);
                        break;
                    }
                    Err(err) => Err(err),
                }
            }
            _ => {
                controller.clear_selection();
                break;
            }
        };

        if let Err(err) = outcome {
            eprintln!("{}", err);
        }
    }

    Ok(())
}

async fn filter_status(controller: &mut TaskController) -> Result<()> {
    let current = controller.filters().status;
    let position = StatusFilter::ALL.iter().position(|filter| *filter == current).unwrap_or(0);
    let labels: Vec<&str> = StatusFilter::ALL.iter().map(|filter| filter.label()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Filter by status")
        .items(&labels)
        .default(position)
        .interact()?;
    controller.set_status_filter(StatusFilter::ALL[selection]).await
}

async fn go_to_page(controller: &mut TaskController) -> Result<()> {
    let page: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPage.to_string())
        .interact_text()?;
    // Out-of-range targets are silently ignored
    controller.change_page(page).await.map(|_| ())
}

enum SearchEvent {
    Key(Key),
    Commit(String),
}

/// Keystroke-level search. Each edit feeds the debouncer; the committed
/// value reloads the list mid-typing. Enter applies the current text
/// immediately, Esc cancels any pending commit and keeps the active filter.
async fn live_search(controller: &mut TaskController) -> Result<()> {
    let term = Term::stdout();
    msg_info!(Message::SearchHint);

    let mut input = controller.filters().search.to_string();
    term.write_str(&format!("Search: {}", input))?;
    let mut key_task = read_key(&term);

    loop {
        let event = tokio::select! {
            key = &mut key_task => SearchEvent::Key(key??),
            Some(value) = controller.next_commit() => SearchEvent::Commit(value),
        };

        match event {
            SearchEvent::Key(key) => {
                match key {
                    Key::Char(c) => {
                        input.push(c);
                        controller.type_search(&input);
                    }
                    Key::Backspace => {
                        input.pop();
                        controller.type_search(&input);
                    }
                    Key::Enter => {
                        controller.cancel_search();
                        controller.commit_search(input.clone()).await?;
                        term.write_line("")?;
                        break;
                    }
                    Key::Escape => {
                        controller.cancel_search();
                        term.write_line("")?;
                        break;
                    }
                    _ => {}
                }
                key_task = read_key(&term);
                term.clear_line()?;
                term.write_str(&format!("Search: {}", input))?;
            }
            SearchEvent::Commit(value) => {
                controller.commit_search(value).await?;
                term.write_line("")?;
                msg_info!(Message::SearchResults(controller.pagination().total));
                term.write_str(&format!("Search: {}", input))?;
            }
        }
    }

    Ok(())
}

fn read_key(term: &Term) -> JoinHandle<io::Result<Key>> {
    let term = term.clone();
    tokio::task::spawn_blocking(move || term.read_key())
}
