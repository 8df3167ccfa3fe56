//! Business layer of the HRMS user list: configuration, cookies, and the listing API.
//!
//! Nothing here touches the DOM; presentation lives in `hrms-ui`.

pub mod api;
pub mod config;
pub mod cookie;
pub mod error;
pub mod http;
pub mod users;

pub use api::{HttpUsersApi, UsersApi, list_users};
pub use config::BusinessConfig;
pub use cookie::{CookieStore, StaticCookieStore, read_cookie};
pub use error::{UserListError, UserListResult};
pub use users::{UserListResponse, UserRecord};
