use std::env;
use std::net::{IpAddr, SocketAddr};

pub const CLOUD_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const CLOUD_MODEL: &str = "llama-3.1-8b-instant";
pub const LOCAL_BASE_URL: &str = "http://localhost:11434/v1";
pub const LOCAL_MODEL: &str = "gemma3";
/// Ollama ignores the key but OpenAI-compatible clients must send one.
pub const LOCAL_API_KEY: &str = "ollama";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;

/// Which completion backend the service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Local,
    Cloud,
}

impl Backend {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Local => "local",
            Backend::Cloud => "cloud",
        }
    }

    /// Name of the variable an operator should set when the credential is missing.
    #[must_use]
    pub fn credential_var(self) -> &'static str {
        match self {
            Backend::Local => "LLM_API_KEY",
            Backend::Cloud => "GROQ_API_KEY",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: Backend,
    pub llm_base_url: String,
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let backend = match var("USE_CLOUD") {
            Some(v) if v.trim().eq_ignore_ascii_case("true") => Backend::Cloud,
            _ => Backend::Local,
        };

        let (default_base_url, default_model) = match backend {
            Backend::Cloud => (CLOUD_BASE_URL, CLOUD_MODEL),
            Backend::Local => (LOCAL_BASE_URL, LOCAL_MODEL),
        };

        let llm_api_key = match backend {
            Backend::Cloud => var("LLM_API_KEY").or_else(|| var("GROQ_API_KEY")),
            Backend::Local => Some(var("LLM_API_KEY").unwrap_or_else(|| LOCAL_API_KEY.to_string())),
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("PORT: {e}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            backend,
            llm_base_url: var("LLM_BASE_URL").unwrap_or_else(|| default_base_url.to_string()),
            llm_api_key,
            llm_model: var("LLM_MODEL").unwrap_or_else(|| default_model.to_string()),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| format!("HOST: {e}"))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
