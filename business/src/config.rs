use log::info;
use serde::Deserialize;

pub const DEFAULT_USERS_PATH: &str = "/accounts/api/proxy-supabase/";
pub const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER_NAME: &str = "X-CSRFToken";
pub const DEFAULT_NATIVE_BASE_URL: &str = "http://127.0.0.1:8000";

/// Where the user list lives and how requests to it are authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Scheme and host of the backend, without a trailing slash.
    ///
    /// In the browser this is the page origin, since the endpoint is same-origin.
    pub api_base_url: String,
    pub users_path: String,
    /// Cookie holding the CSRF token.
    pub csrf_cookie_name: String,
    /// Header the CSRF token is echoed in.
    pub csrf_header_name: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    /// Full URL of the user listing endpoint.
    pub fn users_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.users_path)
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, serde_env::Error> {
        Self::from_vars(std::env::vars())
    }

    /// Reads overrides from `(KEY, value)` pairs:
    /// `API_BASE_URL`, `USERS_PATH`, `CSRF_COOKIE_NAME`, `CSRF_HEADER_NAME`.
    pub fn from_vars<I, S>(vars: I) -> Result<Self, serde_env::Error>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawBusinessConfig = serde_env::from_iter(vars)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawBusinessConfig) -> Self {
        let RawBusinessConfig {
            api_base_url,
            users_path,
            csrf_cookie_name,
            csrf_header_name,
        } = raw;

        let api_base_url = match api_base_url {
            Some(url) => url,
            None => {
                info!("API_BASE_URL not set, defaulting to {DEFAULT_NATIVE_BASE_URL}");
                DEFAULT_NATIVE_BASE_URL.to_owned()
            }
        };

        Self {
            api_base_url: normalize_base_url(api_base_url),
            users_path: users_path.unwrap_or_else(|| DEFAULT_USERS_PATH.to_owned()),
            csrf_cookie_name: csrf_cookie_name
                .unwrap_or_else(|| DEFAULT_CSRF_COOKIE_NAME.to_owned()),
            csrf_header_name: csrf_header_name
                .unwrap_or_else(|| DEFAULT_CSRF_HEADER_NAME.to_owned()),
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                DEFAULT_NATIVE_BASE_URL.to_owned()
            },
            users_path: DEFAULT_USERS_PATH.to_owned(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE_NAME.to_owned(),
            csrf_header_name: DEFAULT_CSRF_HEADER_NAME.to_owned(),
        }
    }
}

/// Environment shape before defaults are applied.
#[derive(Debug, Deserialize)]
struct RawBusinessConfig {
    api_base_url: Option<String>,
    users_path: Option<String>,
    csrf_cookie_name: Option<String>,
    csrf_header_name: Option<String>,
}

fn normalize_base_url(url: String) -> String {
    match url.strip_suffix('/') {
        Some(trimmed) => trimmed.to_owned(),
        None => url,
    }
}
