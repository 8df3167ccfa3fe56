use chrono::Locale;
use hrms_business::{BusinessConfig, StaticCookieStore};
use log::info;
use serde::Deserialize;

use crate::dates::{DateFormatter, parse_locale};

pub const DEFAULT_CONTAINER_ID: &str = "user-list";
pub const DEFAULT_DATE_LOCALE: &str = "en_US";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("unknown DATE_LOCALE `{0}`")]
    UnknownLocale(String),
}

/// Everything the renderer needs to know about the page it runs in.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub business: BusinessConfig,
    /// Id of the element the table is rendered into.
    pub container_id: String,
    pub date_locale: Locale,
}

impl UiConfig {
    pub fn new(business: BusinessConfig) -> Self {
        Self {
            business,
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
            date_locale: Locale::en_US,
        }
    }

    /// Dates in the host's local time zone.
    pub fn date_formatter(&self) -> DateFormatter {
        DateFormatter::local(self.date_locale)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

/// Configuration of the native host binary.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub ui: UiConfig,
    /// Value sent as the CSRF cookie; there is no browser cookie jar natively.
    pub csrf_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHostConfig {
    container_id: Option<String>,
    date_locale: Option<String>,
    csrf_token: Option<String>,
}

impl HostConfig {
    /// Reads `API_BASE_URL`, `USERS_PATH`, `CSRF_COOKIE_NAME`, `CSRF_HEADER_NAME`,
    /// `CSRF_TOKEN`, `CONTAINER_ID` and `DATE_LOCALE` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");
        let vars: Vec<(String, String)> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    pub fn from_vars<S: AsRef<str>>(vars: &[(S, S)]) -> Result<Self, ConfigError> {
        let pairs: Vec<(&str, &str)> = vars
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_ref()))
            .collect();
        let business = BusinessConfig::from_vars(pairs.iter().copied())?;
        let raw: RawHostConfig = serde_env::from_iter(pairs)?;

        let locale_name = raw
            .date_locale
            .unwrap_or_else(|| DEFAULT_DATE_LOCALE.to_owned());
        let date_locale =
            parse_locale(&locale_name).ok_or(ConfigError::UnknownLocale(locale_name))?;

        Ok(Self {
            ui: UiConfig {
                business,
                container_id: raw
                    .container_id
                    .unwrap_or_else(|| DEFAULT_CONTAINER_ID.to_owned()),
                date_locale,
            },
            csrf_token: raw.csrf_token,
        })
    }

    /// Cookie jar holding only the CSRF cookie, when a token was configured.
    pub fn cookie_store(&self) -> StaticCookieStore {
        match &self.csrf_token {
            Some(token) => StaticCookieStore::single(&self.ui.business.csrf_cookie_name, token),
            None => StaticCookieStore::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use hrms_business::CookieStore;

    use super::*;

    #[test]
    fn defaults_without_env() {
        let host = HostConfig::from_vars::<&str>(&[]).unwrap();
        assert_eq!(host.ui.container_id, "user-list");
        assert_eq!(host.ui.date_locale, Locale::en_US);
        assert_eq!(host.csrf_token, None);
        assert_eq!(host.cookie_store().get("csrftoken"), None);
    }

    #[test]
    fn reads_all_overrides() {
        let host = HostConfig::from_vars(&[
            ("API_BASE_URL", "https://hr.example.com"),
            ("CSRF_COOKIE_NAME", "xsrf"),
            ("CSRF_TOKEN", "tok 1"),
            ("CONTAINER_ID", "accounts"),
            ("DATE_LOCALE", "de_DE"),
        ])
        .unwrap();

        assert_eq!(
            host.ui.business.users_url(),
            "https://hr.example.com/accounts/api/proxy-supabase/"
        );
        assert_eq!(host.ui.container_id, "accounts");
        assert_eq!(host.ui.date_locale, Locale::de_DE);
        assert_eq!(host.cookie_store().get("xsrf"), Some("tok 1".to_owned()));
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let err = HostConfig::from_vars(&[("DATE_LOCALE", "xx_NOPE")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLocale(ref name) if name == "xx_NOPE"));
    }
}
