use std::path::PathBuf;

use chrono::Utc;

use crate::{Res, config, error::Error, spotify, types::Token};

pub struct TokenManager {
    token: Token,
    path: PathBuf,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager {
            token,
            path: config::token_path(),
        }
    }

    pub async fn load() -> Res<Self> {
        let path = config::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| Error::Auth(format!("cannot read {}: {}", path.display(), e)))?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token, path })
    }

    pub async fn persist(&self) -> Res<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Returns an access token, refreshing it first when it is about to expire.
    pub async fn get_valid_token(&mut self) -> Res<String> {
        if self.is_expired() {
            let mut new_token = spotify::auth::refresh_token(&self.token.refresh_token).await?;
            // Spotify may omit the refresh token when it does not rotate it
            if new_token.refresh_token.is_empty() {
                new_token.refresh_token = self.token.refresh_token.clone();
            }
            self.token = new_token;
            self.persist().await?;
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + 240 >= self.token.obtained_at + self.token.expires_in
    }
}
