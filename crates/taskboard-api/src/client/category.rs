//! Category endpoints.

use reqwest::Client;

use super::ensure_success;
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::models::{Category, NewCategory};

/// Categories are public: no bearer token
pub(super) async fn list_categories(client: &Client, config: &ApiConfig) -> ApiResult<Vec<Category>> {
    let response = client.get(config.url("categories/")).send().await?;
    let categories = ensure_success(response)?.json::<Vec<Category>>().await?;
    log::debug!("fetched {} categories", categories.len());
    Ok(categories)
}

pub(super) async fn create_category(
    client: &Client,
    config: &ApiConfig,
    token: &str,
    category: &NewCategory,
) -> ApiResult<()> {
    let response = client
        .post(config.url("categories/"))
        .bearer_auth(token)
        .json(category)
        .send()
        .await?;
    ensure_success(response)?;
    Ok(())
}
