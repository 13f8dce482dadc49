//! Task Board
//!
//! State and flows behind the tasks view: cached lists, dashboard
//! counters, the two creation modals and status changes.
//!
//! The server is the only source of truth. Lists are replaced wholesale on
//! every fetch and every successful mutation is followed by a refetch.
//! Failures here are logged and otherwise ignored.

use chrono::NaiveDateTime;
use taskboard_api::{Category, NewCategory, NewTask, Task, TaskApi, TaskStatus, TaskUpdate};

use crate::state::StateCell;

pub const CATEGORY_NAME_MAX_CHARS: usize = 100;
pub const CATEGORY_DESCRIPTION_MAX_CHARS: usize = 255;

/// New category modal fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

/// New task modal fields, raw as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub text: String,
    /// Selected `<option>` value; empty until a category is picked
    pub category_id: String,
    /// `datetime-local` value, empty when unset
    pub due_at: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
    pub category_modal_open: bool,
    pub task_modal_open: bool,
    pub category_form: CategoryForm,
    pub task_form: TaskForm,
    /// Bumped when rendered rows must be rebuilt without the task list
    /// changing, e.g. a status `<select>` left on a rejected value
    pub row_revision: u32,
}

impl BoardState {
    pub fn counts(&self) -> DashboardCounts {
        DashboardCounts::from_tasks(&self.tasks)
    }

    pub fn category_name(&self, category_id: Option<u32>) -> Option<&str> {
        let id = category_id?;
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl DashboardCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();
        Self {
            total: tasks.len(),
            in_progress: count(TaskStatus::Started),
            completed: count(TaskStatus::Finished),
        }
    }
}

/// Whitespace only counts as blank; the value itself is sent as typed
fn none_if_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl TaskForm {
    /// `None` when no valid category is selected or the text is blank
    pub fn to_new_task(&self) -> Option<NewTask> {
        let text = none_if_blank(&self.text)?;
        let category_id = self.category_id.trim().parse::<u32>().ok()?;
        Some(NewTask {
            text,
            status: TaskStatus::NotStarted,
            category_id,
            due_at: none_if_blank(&self.due_at),
        })
    }
}

impl CategoryForm {
    /// `None` when the name is blank
    pub fn to_new_category(&self) -> Option<NewCategory> {
        let name = none_if_blank(&self.name)?;
        Some(NewCategory {
            name,
            description: none_if_blank(&self.description),
        })
    }
}

// ========================
// Flows
// ========================

pub async fn refresh_tasks(api: &dyn TaskApi, token: &str, board: &impl StateCell<BoardState>) {
    match api.list_tasks(token).await {
        Ok(tasks) => board.write(|b| b.tasks = tasks),
        Err(e) => log::error!("failed to fetch tasks: {}", e),
    }
}

pub async fn refresh_categories(api: &dyn TaskApi, board: &impl StateCell<BoardState>) {
    match api.list_categories().await {
        Ok(categories) => board.write(|b| b.categories = categories),
        Err(e) => log::error!("failed to fetch categories: {}", e),
    }
}

pub async fn create_task(api: &dyn TaskApi, token: &str, board: &impl StateCell<BoardState>) {
    let Some(new_task) = board.read(|b| b.task_form.to_new_task()) else {
        log::warn!("task form incomplete, not submitted");
        return;
    };

    if let Err(e) = api.create_task(token, &new_task).await {
        log::error!("failed to create task: {}", e);
        return;
    }

    board.write(|b| {
        b.task_modal_open = false;
        b.task_form = TaskForm::default();
    });
    refresh_tasks(api, token, board).await;
}

pub async fn create_category(api: &dyn TaskApi, token: &str, board: &impl StateCell<BoardState>) {
    let Some(new_category) = board.read(|b| b.category_form.to_new_category()) else {
        log::warn!("category form incomplete, not submitted");
        return;
    };

    if let Err(e) = api.create_category(token, &new_category).await {
        log::error!("failed to create category: {}", e);
        return;
    }

    board.write(|b| {
        b.category_modal_open = false;
        b.category_form = CategoryForm::default();
    });
    refresh_categories(api, board).await;
}

/// Issues a full-resource update: the task's due date and category are
/// cleared server-side along with the status change.
pub async fn change_status(
    api: &dyn TaskApi,
    token: &str,
    board: &impl StateCell<BoardState>,
    task_id: u32,
    status: TaskStatus,
) {
    let update = TaskUpdate::status_only(status);
    match api.update_task(token, task_id, &update).await {
        Ok(()) => refresh_tasks(api, token, board).await,
        Err(e) => {
            log::error!("failed to update status of task {}: {}", task_id, e);
            board.write(|b| b.row_revision = b.row_revision.wrapping_add(1));
        }
    }
}

// ========================
// Display
// ========================

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Backend timestamp as `dd/mm/YYYY HH:MM`, or the raw value when unparseable
pub fn format_timestamp(raw: &str) -> String {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}
