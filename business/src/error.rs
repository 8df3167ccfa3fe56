use thiserror::Error;

/// Everything that can go wrong while loading and showing the user list.
///
/// The `Display` output of each variant is the text shown to the user after
/// `Error loading users: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserListError {
    /// The request could not complete at all.
    #[error("{0}")]
    Network(String),

    /// A response arrived with a non-2xx status.
    #[error("Failed to fetch users")]
    HttpStatus { status: u16 },

    /// The body was not JSON or did not have the `{"users": [...]}` shape.
    #[error("{0}")]
    Parse(String),

    /// Building or attaching the table failed.
    #[error("{0}")]
    Render(String),

    /// The host page has no element to render into.
    #[error("container element `{id}` not found")]
    MissingContainer { id: String },
}

impl UserListError {
    /// Configuration errors are returned to the host instead of being shown in the page.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingContainer { .. })
    }
}

impl From<crate::http::HttpError> for UserListError {
    fn from(err: crate::http::HttpError) -> Self {
        Self::Network(err.message)
    }
}

impl From<serde_json::Error> for UserListError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

pub type UserListResult<T> = Result<T, UserListError>;
