//! Presentation layer of the HRMS user list.
//!
//! [`run_user_list`] is the single entry point: it wires the HTTP-backed API, the cookie
//! store, and a [`dom::Document`] into a [`UserListRenderer`] and runs it once. Browsers
//! reach it through `web::start`; the native `hrms-user-list` binary renders into a
//! [`dom::MemoryDocument`] and prints the HTML.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod dates;
pub mod dom;
pub mod renderer;
pub mod table;
#[cfg(target_arch = "wasm32")]
pub mod web;

use hrms_business::{CookieStore, HttpUsersApi, UserListResult};

pub use config::{HostConfig, UiConfig};
pub use renderer::{RenderState, UserListRenderer};

/// Fetches users and renders them into the configured container, once.
///
/// Returns the final state, or a configuration error when the container is missing.
pub async fn run_user_list<C, D>(
    config: &UiConfig,
    cookies: C,
    document: &mut D,
) -> UserListResult<RenderState>
where
    C: CookieStore,
    D: dom::Document,
{
    let api = HttpUsersApi::new(config.business.clone(), cookies);
    let mut renderer = UserListRenderer::new(
        api,
        config.container_id.as_str(),
        config.date_formatter(),
    );
    renderer.run(document).await.cloned()
}
