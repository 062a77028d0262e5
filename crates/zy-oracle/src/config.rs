//! Client configuration (credential, model, endpoint).

/// Default interpretation model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Canonical Gemini API base URL.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the interpretation client.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// API key. `None` means the client degrades to a notice fragment
    /// without making a request.
    pub api_key: Option<String>,
    /// Model name used in the request path.
    pub model: String,
    /// API base URL. Overridable so tests can point at a local server.
    pub api_base: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: GEMINI_API_BASE_URL.to_string(),
        }
    }
}

impl OracleConfig {
    /// Read configuration from the environment: `GEMINI_API_KEY` for the
    /// credential, `ZHOUYI_MODEL` to override the model.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("GEMINI_API_KEY")
            && !key.trim().is_empty()
        {
            config.api_key = Some(key);
        }
        if let Ok(model) = std::env::var("ZHOUYI_MODEL")
            && !model.trim().is_empty()
        {
            config.model = model;
        }
        config
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }
}
