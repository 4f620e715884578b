use crate::consts::cli_consts::DEFAULT_BACKEND_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the kitchen backend is reached.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The backend running on this machine.
    #[default]
    Local,
    /// Any other backend, addressed by its base URL.
    Custom { backend_url: String },
}

impl Environment {
    /// Returns the backend base URL associated with the environment.
    pub fn backend_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_BACKEND_URL.to_string(),
            Environment::Custom { backend_url } => backend_url.clone(),
        }
    }

    /// Picks the environment from, in order: an explicit URL, the
    /// `KITCHEN_ENVIRONMENT` value, the configured URL, then [`Environment::Local`].
    pub fn resolve(
        explicit_url: Option<&str>,
        env_value: Option<&str>,
        configured_url: Option<&str>,
    ) -> Result<Self, String> {
        if let Some(url) = explicit_url {
            return url.parse();
        }
        if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
            return value.parse();
        }
        match configured_url {
            Some(url) => url.parse(),
            None => Ok(Environment::Local),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                backend_url: trimmed.trim_end_matches('/').to_string(),
            });
        }
        Err(format!(
            "Invalid backend '{}'. Expected 'local' or an http(s):// URL.",
            s
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { backend_url } => write!(f, "Custom ({})", backend_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.backend_url())
    }
}
