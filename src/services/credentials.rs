//! Local key-value credential lookup.

use std::collections::HashMap;

use axum_extra::extract::CookieJar;

/// Key under which the bearer token is stored.
pub const TOKEN_KEY: &str = "token";

/// A local key-value store the bearer credential is read from.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;

    /// The stored bearer token, ignoring blank values.
    fn bearer_token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

/// In-process store, used by tools and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let mut store = Self::new();
        store.set(TOKEN_KEY, token);
        store
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// The browser's cookies for the current request.
impl CredentialStore for CookieJar {
    fn get(&self, key: &str) -> Option<String> {
        CookieJar::get(self, key).map(|c| c.value().to_string())
    }
}
