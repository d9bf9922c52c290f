use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{TokenReaderError, TokenReaderResult};
use crate::params::parse_key_value_pairs;
use crate::secrets::Token;
use crate::{OAUTH_TOKEN_KEY, OAUTH_TOKEN_SECRET_KEY};

/// Represents response of token acquisition.
#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    /// OAuth Token
    pub oauth_token: String,
    /// OAuth Token Secret
    pub oauth_token_secret: String,
    /// Other contents
    #[serde(flatten)]
    pub remain: HashMap<String, String>,
}

impl TokenResponse {
    /// The credential for the next step of the handshake.
    pub fn into_token(self) -> Token<'static> {
        Token::new(self.oauth_token, self.oauth_token_secret)
    }
}

impl From<TokenResponse> for Token<'static> {
    fn from(response: TokenResponse) -> Self {
        response.into_token()
    }
}

/// Extract the token credential from a provider's response body.
///
/// The body is an `&`-joined `key=value` set; `oauth_token` and
/// `oauth_token_secret` are required, every other pair is preserved in
/// [`TokenResponse::remain`]. A segment without `=` fails with
/// [`TokenReaderError::Malformed`], a missing required key with
/// [`TokenReaderError::TokenKeyNotFound`] naming it.
pub fn read_oauth_token(text: &str) -> TokenReaderResult<TokenResponse> {
    let parsed = parse_key_value_pairs(text)?;
    let mut oauth_token = None;
    let mut oauth_token_secret = None;
    let mut remain = HashMap::new();
    for (key, value) in parsed.iter() {
        match key.as_str() {
            OAUTH_TOKEN_KEY => oauth_token = Some(value.clone()),
            OAUTH_TOKEN_SECRET_KEY => oauth_token_secret = Some(value.clone()),
            _ => {
                remain.insert(key.clone(), value.clone());
            }
        }
    }
    match (oauth_token, oauth_token_secret) {
        (Some(token), Some(secret)) => Ok(TokenResponse {
            oauth_token: token,
            oauth_token_secret: secret,
            remain,
        }),
        (None, _) => Err(TokenReaderError::TokenKeyNotFound(
            OAUTH_TOKEN_KEY,
            text.to_string(),
        )),
        (_, _) => Err(TokenReaderError::TokenKeyNotFound(
            OAUTH_TOKEN_SECRET_KEY,
            text.to_string(),
        )),
    }
}
