//! Auth endpoints.

use reqwest::Client;

use super::ensure_success;
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::models::{AccessToken, NewUser};

pub(super) async fn login(
    client: &Client,
    config: &ApiConfig,
    username: &str,
    password: &str,
) -> ApiResult<AccessToken> {
    let response = client
        .post(config.url("auth/login"))
        .form(&[("username", username), ("password", password)])
        .send()
        .await?;
    let token = ensure_success(response)?.json::<AccessToken>().await?;
    Ok(token)
}

/// The response body is not read.
pub(super) async fn register(client: &Client, config: &ApiConfig, user: &NewUser) -> ApiResult<()> {
    let response = client
        .post(config.url("auth/register"))
        .json(user)
        .send()
        .await?;
    ensure_success(response)?;
    Ok(())
}
