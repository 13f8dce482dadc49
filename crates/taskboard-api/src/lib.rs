//! Taskboard API
//!
//! Wire models and HTTP bindings for the task board backend.
//! The UI talks to the backend only through the [`TaskApi`] trait.

mod config;
mod error;
mod models;
mod client;

pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use models::{
    AccessToken, Category, NewCategory, NewTask, NewUser, Task, TaskStatus, TaskUpdate, User,
};
pub use client::{HttpTaskApi, TaskApi};
