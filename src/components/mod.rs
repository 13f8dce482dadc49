//! UI Components
//!
//! Leptos components for the header, auth forms, task board and toast.

mod header;
mod auth_forms;
mod tasks_view;
mod dashboard;
mod task_row;
mod category_modal;
mod task_modal;
mod toast_view;

pub use header::AppHeader;
pub use auth_forms::AuthForms;
pub use tasks_view::TasksView;
pub use dashboard::Dashboard;
pub use task_row::TaskRow;
pub use category_modal::CategoryModal;
pub use task_modal::TaskModal;
pub use toast_view::ToastView;
