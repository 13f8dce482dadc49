//! Backend Client
//!
//! `TaskApi` is the seam between the UI and the backend.
//! `HttpTaskApi` implements it over `reqwest`, organized by domain.

mod auth;
mod category;
mod task;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{AccessToken, Category, NewCategory, NewTask, NewUser, Task, TaskUpdate};

/// One method per backend endpoint.
///
/// Futures are `?Send`: in the browser every request runs on the
/// single event loop.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `POST /auth/login` (form-urlencoded)
    async fn login(&self, username: &str, password: &str) -> ApiResult<AccessToken>;

    /// `POST /auth/register`
    async fn register(&self, user: &NewUser) -> ApiResult<()>;

    /// `GET /tasks/` (bearer)
    async fn list_tasks(&self, token: &str) -> ApiResult<Vec<Task>>;

    /// `POST /tasks/` (bearer)
    async fn create_task(&self, token: &str, task: &NewTask) -> ApiResult<()>;

    /// `PUT /tasks/{id}` (bearer)
    async fn update_task(&self, token: &str, id: u32, update: &TaskUpdate) -> ApiResult<()>;

    /// `GET /categories/`
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;

    /// `POST /categories/` (bearer)
    async fn create_category(&self, token: &str, category: &NewCategory) -> ApiResult<()>;
}

/// `TaskApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn login(&self, username: &str, password: &str) -> ApiResult<AccessToken> {
        auth::login(&self.client, &self.config, username, password).await
    }

    async fn register(&self, user: &NewUser) -> ApiResult<()> {
        auth::register(&self.client, &self.config, user).await
    }

    async fn list_tasks(&self, token: &str) -> ApiResult<Vec<Task>> {
        task::list_tasks(&self.client, &self.config, token).await
    }

    async fn create_task(&self, token: &str, new_task: &NewTask) -> ApiResult<()> {
        task::create_task(&self.client, &self.config, token, new_task).await
    }

    async fn update_task(&self, token: &str, id: u32, update: &TaskUpdate) -> ApiResult<()> {
        task::update_task(&self.client, &self.config, token, id, update).await
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        category::list_categories(&self.client, &self.config).await
    }

    async fn create_category(&self, token: &str, new_category: &NewCategory) -> ApiResult<()> {
        category::create_category(&self.client, &self.config, token, new_category).await
    }
}

/// Treat any non-2xx response as a failure
fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}
