//! Fetches the user list and swaps it into the page.
//!
//! ## Flow
//! 1) Check that the container exists. A missing container is a configuration error and is
//!    returned to the host before any request is made.
//! 2) Fetch users through [`UsersApi`].
//! 3) Build the whole table, then clear the container and append it.
//! 4) On any failure in 2) or 3), replace the container content with
//!    `<p>Error loading users: ...</p>` and log the error.
//!
//! Each run fully replaces the container content, so running twice never stacks output.

use hrms_business::{UserListError, UserListResult, UsersApi};
use log::{error, info};

use crate::dates::DateFormatter;
use crate::dom::{Container, Document, Element, Node};
use crate::table::user_table;

pub const ERROR_PREFIX: &str = "Error loading users:";

/// Where the last run ended up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderState {
    /// Not run yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// The table is on screen with this many body rows.
    Rendered { rows: usize },
    /// The error paragraph is on screen with this message.
    ErrorDisplayed(String),
}

impl RenderState {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::ErrorDisplayed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// `<p>Error loading users: {err}</p>`
pub fn error_paragraph(err: &UserListError) -> Node {
    Element::new("p")
        .with_text(format!("{ERROR_PREFIX} {err}"))
        .into()
}

#[derive(Debug)]
pub struct UserListRenderer<A> {
    api: A,
    container_id: String,
    dates: DateFormatter,
    state: RenderState,
}

impl<A: UsersApi> UserListRenderer<A> {
    pub fn new(api: A, container_id: impl Into<String>, dates: DateFormatter) -> Self {
        Self {
            api,
            container_id: container_id.into(),
            dates,
            state: RenderState::Idle,
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Loads and renders once.
    ///
    /// Only configuration errors are returned; fetch, parse, and render failures end up in
    /// the page as the error paragraph and in [`RenderState::ErrorDisplayed`].
    pub async fn run<D: Document>(&mut self, document: &mut D) -> UserListResult<&RenderState> {
        if document.container_by_id(&self.container_id).is_none() {
            let err = self.missing_container();
            error!("Error fetching users: {err}");
            return Err(err);
        }

        info!("Loading users into #{}", self.container_id);
        self.state = RenderState::Loading;

        match self.load(document).await {
            Ok(rows) => {
                info!("Rendered {rows} users");
                self.state = RenderState::Rendered { rows };
            }
            Err(err) if err.is_configuration() => {
                error!("Error fetching users: {err}");
                return Err(err);
            }
            Err(err) => {
                error!("Error fetching users: {err}");
                self.show_error(document, &err)?;
                self.state = RenderState::ErrorDisplayed(err.to_string());
            }
        }

        Ok(&self.state)
    }

    async fn load<D: Document>(&self, document: &mut D) -> UserListResult<usize> {
        let users = self.api.list_users().await?;
        let table = user_table(&users, &self.dates);

        let mut container = document
            .container_by_id(&self.container_id)
            .ok_or_else(|| self.missing_container())?;

        if let Err(err) = container.replace_with(&table) {
            // Never leave a partially attached table behind.
            container.clear();
            return Err(err);
        }

        Ok(users.len())
    }

    fn show_error<D: Document>(&self, document: &mut D, err: &UserListError) -> UserListResult<()> {
        let mut container = document
            .container_by_id(&self.container_id)
            .ok_or_else(|| self.missing_container())?;

        container.replace_with(&error_paragraph(err)).inspect_err(|render_err| {
            error!("Could not display error in #{}: {render_err}", self.container_id);
        })
    }

    fn missing_container(&self) -> UserListError {
        UserListError::MissingContainer {
            id: self.container_id.clone(),
        }
    }
}
