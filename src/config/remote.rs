//! Remote storage endpoint configuration

use serde::{Deserialize, Serialize};

/// Default environment variable holding the remote bearer token
pub const DEFAULT_TOKEN_ENV: &str = "QUICKSAVE_REMOTE_TOKEN";

/// Remote storage endpoint (the `remote:` section of quicksave.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL snapshots are uploaded under
    pub endpoint: String,

    /// Environment variable holding the bearer token; never the token itself
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}
