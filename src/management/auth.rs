use crate::{config, spotify, types::Token};

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn obtain() -> Result<Self, String> {
        let refresh_token = config::spotify_refresh_token()
            .ok_or_else(|| String::from("No refresh token configured"))?;
        let token = spotify::auth::refresh_access_token(&refresh_token).await?;
        Ok(Self { token })
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
