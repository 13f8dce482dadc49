//! Task endpoints.

use reqwest::Client;

use super::ensure_success;
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::models::{NewTask, Task, TaskUpdate};

pub(super) async fn list_tasks(client: &Client, config: &ApiConfig, token: &str) -> ApiResult<Vec<Task>> {
    let response = client
        .get(config.url("tasks/"))
        .bearer_auth(token)
        .send()
        .await?;
    let tasks = ensure_success(response)?.json::<Vec<Task>>().await?;
    log::debug!("fetched {} tasks", tasks.len());
    Ok(tasks)
}

pub(super) async fn create_task(
    client: &Client,
    config: &ApiConfig,
    token: &str,
    task: &NewTask,
) -> ApiResult<()> {
    let response = client
        .post(config.url("tasks/"))
        .bearer_auth(token)
        .json(task)
        .send()
        .await?;
    ensure_success(response)?;
    Ok(())
}

pub(super) async fn update_task(
    client: &Client,
    config: &ApiConfig,
    token: &str,
    id: u32,
    update: &TaskUpdate,
) -> ApiResult<()> {
    let response = client
        .put(config.url(&format!("tasks/{}", id)))
        .bearer_auth(token)
        .json(update)
        .send()
        .await?;
    ensure_success(response)?;
    Ok(())
}
