//! Remote snapshot uploads
//!
//! Snapshots are pushed to an HTTP object-storage endpoint with
//! `PUT {endpoint}/{game_slug}/{file_name}` and a bearer token read from the
//! environment. No credentials are ever stored in the configuration file.

use std::fs;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::RemoteConfig;
use crate::error::{QuicksaveError, Result};
use crate::snapshot::Snapshot;

/// Per-upload request timeout
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client bound to a configured remote endpoint
pub struct RemoteClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl RemoteClient {
    /// Build a client from the configuration, reading the bearer token from
    /// the configured environment variable
    pub fn from_config(remote: &RemoteConfig) -> Result<Self> {
        let token = std::env::var(&remote.token_env)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| QuicksaveError::RemoteTokenMissing {
                env: remote.token_env.clone(),
            })?;

        let client = Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .user_agent(concat!("quicksave/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: remote.endpoint.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// The endpoint uploads go to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload one snapshot archive
    pub fn upload_snapshot(&self, game: &str, snapshot: &Snapshot) -> Result<()> {
        let url = format!(
            "{}/{}/{}",
            self.endpoint,
            remote_slug(game),
            snapshot.file_name
        );

        let bytes = fs::read(&snapshot.path).map_err(|e| QuicksaveError::FileReadFailed {
            path: snapshot.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/zip")
            .body(bytes)
            .send()
            .map_err(|e| QuicksaveError::RemoteUploadFailed {
                name: snapshot.file_name.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(QuicksaveError::RemoteAuthRejected {
                endpoint: self.endpoint.clone(),
            });
        }

        response
            .error_for_status()
            .map_err(|e| QuicksaveError::RemoteUploadFailed {
                name: snapshot.file_name.clone(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

/// URL path segment for a game name
///
/// Lowercased; anything outside `[a-z0-9._-]` becomes a dash.
pub fn remote_slug(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();

    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        "game".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_slug() {
        assert_eq!(remote_slug("Skyrim"), "skyrim");
        assert_eq!(remote_slug("Fallout 4"), "fallout-4");
        assert_eq!(remote_slug("Stardew Valley"), "stardew-valley");
        assert_eq!(remote_slug("dark_souls.remastered"), "dark_souls.remastered");
    }

    #[test]
    fn test_remote_slug_never_empty() {
        assert_eq!(remote_slug("???"), "game");
        assert_eq!(remote_slug(""), "game");
    }

    #[test]
    fn test_from_config_missing_token() {
        let remote = RemoteConfig {
            endpoint: "https://storage.example.com".to_string(),
            token_env: "QUICKSAVE_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
        };

        let result = RemoteClient::from_config(&remote);
        assert!(matches!(
            result,
            Err(QuicksaveError::RemoteTokenMissing { .. })
        ));
    }
}
