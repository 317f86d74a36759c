use std::env;

static ACCESS_TOKEN_VAR: &str = "TRIVIA_ACCESS_TOKEN";

#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error("No access token found in credential store")]
    Missing,
}

/// Bearer token for the wrapped-history API, read once at startup from the
/// process environment (populated from `.env`).
#[derive(Debug)]
pub struct TokenStore {
    access_token: String,
}

impl TokenStore {
    pub fn load() -> Result<Self, TokenStoreError> {
        let access_token = env::var(ACCESS_TOKEN_VAR).map_err(|_| TokenStoreError::Missing)?;
        if access_token.trim().is_empty() {
            return Err(TokenStoreError::Missing);
        }

        Ok(Self { access_token })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}
