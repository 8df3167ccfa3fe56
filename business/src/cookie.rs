//! Cookie lookup.
//!
//! The raw cookie string (`a=1; b=2`) comes from a [`CookieStore`] so the lookup
//! can run against `document.cookie` in a browser or a fixed string anywhere else.

/// Source of the raw `Cookie`-style string.
pub trait CookieStore {
    /// The whole cookie string, or `None` when the store is unavailable.
    fn cookie_string(&self) -> Option<String>;

    /// Decoded value of the first cookie called `name`.
    fn get(&self, name: &str) -> Option<String> {
        let raw = self.cookie_string()?;
        read_cookie(&raw, name)
    }
}

/// Returns the URL-decoded value of the first cookie named `name` in `raw`.
///
/// Entries are split on `;` and trimmed. A value that does not decode to valid
/// UTF-8 is returned as-is.
pub fn read_cookie(raw: &str, name: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let prefix = format!("{name}=");
    raw.split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(|value| match urlencoding::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value.to_owned(),
        })
}

/// A cookie string fixed at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCookieStore {
    raw: Option<String>,
}

impl StaticCookieStore {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// A store holding a single cookie, value percent-encoded.
    pub fn single(name: &str, value: &str) -> Self {
        Self::new(format!("{name}={}", urlencoding::encode(value)))
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl CookieStore for StaticCookieStore {
    fn cookie_string(&self) -> Option<String> {
        self.raw.clone()
    }
}

impl<T: CookieStore + ?Sized> CookieStore for &T {
    fn cookie_string(&self) -> Option<String> {
        (**self).cookie_string()
    }
}
