use crate::error::{Result, SiteError};

const URL_VAR: &str = "PRAYAS_SUPABASE_URL";
const KEY_VAR: &str = "PRAYAS_SUPABASE_ANON_KEY";

/// Connection settings for the site's Supabase project.
///
/// The anon key is safe to embed client-side; row-level security on the
/// content tables only permits reads.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    base_url: String,
    api_key: String,
}

impl SiteConfig {
    /// Create a config from an explicit project URL and anon key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Read the project URL and anon key from `PRAYAS_SUPABASE_URL` and
    /// `PRAYAS_SUPABASE_ANON_KEY`.
    pub fn from_env() -> Result<Self> {
        let base_url = require_var(URL_VAR)?;
        let api_key = require_var(KEY_VAR)?;
        Ok(Self::new(base_url, api_key))
    }

    pub(crate) fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{path}", self.base_url)
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

fn require_var(var: &'static str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SiteError::MissingConfig { var }),
    }
}
