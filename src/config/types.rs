use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API settings. Timeouts are transport policy; the store itself
/// never times out an outstanding call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the posts/users collections (e.g., "http://127.0.0.1:5173/fakeApi").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Which collaborator the session talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Http,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub source: SourceKind,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5173/fakeApi".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}
