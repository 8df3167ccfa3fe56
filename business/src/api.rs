//! User listing API client.
//!
//! Performs the `POST` against the listing endpoint with the CSRF header taken from the
//! cookie store, and maps every failure into [`UserListError`].

use std::future::Future;

use log::{debug, info};

use crate::config::BusinessConfig;
use crate::cookie::CookieStore;
use crate::error::{UserListError, UserListResult};
use crate::http::Client;
use crate::users::{BackendErrorBody, UserListResponse, UserRecord};

/// Anything that can produce the user list.
///
/// The renderer depends on this instead of the HTTP client so hosts and tests can
/// supply users from elsewhere.
pub trait UsersApi {
    fn list_users(&self) -> impl Future<Output = UserListResult<Vec<UserRecord>>>;
}

/// [`UsersApi`] backed by the HTTP endpoint described in [`BusinessConfig`].
#[derive(Debug, Clone)]
pub struct HttpUsersApi<C> {
    config: BusinessConfig,
    cookies: C,
}

impl<C: CookieStore> HttpUsersApi<C> {
    pub fn new(config: BusinessConfig, cookies: C) -> Self {
        Self { config, cookies }
    }
}

impl<C: CookieStore> UsersApi for HttpUsersApi<C> {
    async fn list_users(&self) -> UserListResult<Vec<UserRecord>> {
        list_users(&self.config, &self.cookies).await
    }
}

/// POST `{api_base_url}{users_path}`
pub async fn list_users(
    config: &BusinessConfig,
    cookies: &impl CookieStore,
) -> UserListResult<Vec<UserRecord>> {
    let url = config.users_url();
    let csrf_token = cookies.get(&config.csrf_cookie_name);

    if csrf_token.is_none() {
        debug!(
            "list_users: cookie `{}` not set, sending without {}",
            config.csrf_cookie_name, config.csrf_header_name
        );
    }

    let response = Client::post(&url)
        .header_opt(config.csrf_header_name.as_str(), csrf_token)
        .send()
        .await?;

    if !response.is_success() {
        match response.json::<BackendErrorBody>() {
            Ok(body) => debug!(
                "list_users: status {} from {url}: {}",
                response.status, body.error
            ),
            Err(_) => debug!("list_users: status {} from {url}", response.status),
        }
        return Err(UserListError::HttpStatus {
            status: response.status,
        });
    }

    let list: UserListResponse = response.json()?;
    info!("list_users: fetched {} users", list.users.len());

    Ok(list.users)
}
