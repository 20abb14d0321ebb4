/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v3::errors::ImgurError;
use crate::v3::transport::{ReqwestTransport, Transport};
use crate::v3::{API_ORIGIN, AccountApi, AlbumApi, ApiClient, CommentApi, Creds, ImageApi, ResponseEnvelope};
use log::debug;
use serde::Serialize;
use std::sync::Arc;

/// Entry point of the library.
///
/// A `Client` is an immutable value: authenticating produces a new client
/// carrying the access token instead of modifying this one.
///
/// ```rust,no_run
/// use imgurapi::v3::{Client, Creds};
///
/// # async fn run() -> Result<(), imgurapi::v3::ImgurError> {
/// let client = Client::new(Creds::from_tokens("client-id", Some("secret"), Some("refresh"), None));
/// let (client, _token) = client.authenticate().await?;
/// let image = client.image().get("3MvMVho").await?;
/// println!("{}", image.get("data")?.get("link")?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    /// Creates a client talking to the public Imgur API through reqwest
    pub fn new(creds: Creds) -> Self {
        Self::with_transport(creds, ReqwestTransport::new())
    }

    /// Creates a client using the given transport for all requests
    pub fn with_transport(creds: Creds, transport: impl Transport + 'static) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(creds, API_ORIGIN, Arc::new(transport))),
        }
    }

    /// Copy of this client sending requests to another origin (e.g. a mock server)
    pub fn with_base_url(&self, base_url: &str) -> Result<Self, ImgurError> {
        Ok(Self {
            api_client: Arc::new(self.api_client.with_base_url(base_url)?),
        })
    }

    /// Copy of this client authorizing with the given access token
    pub fn with_access_token(&self, access_token: &str) -> Self {
        let creds = self.api_client.creds().with_access_token(access_token);
        Self {
            api_client: Arc::new(self.api_client.with_creds(creds)),
        }
    }

    pub fn creds(&self) -> &Creds {
        self.api_client.creds()
    }

    /// Lower level access to the request dispatcher
    pub fn api(&self) -> &ApiClient {
        &self.api_client
    }

    /// Exchanges the refresh token for an access token.
    ///
    /// Returns a client authorized with the new token along with the raw token
    /// response.
    pub async fn authenticate(&self) -> Result<(Client, ResponseEnvelope), ImgurError> {
        let creds = self.creds();
        let (client_id, client_secret) = match creds.client_secret() {
            Some(secret) if !creds.client_id().is_empty() => (Some(creds.client_id()), Some(secret)),
            _ => (None, None),
        };
        let req = TokenRequest {
            refresh_token: creds.refresh_token(),
            client_id,
            client_secret,
            grant_type: "refresh_token",
        };

        let resp = self
            .api_client
            .post_json_unauthorized("/oauth2/token", serde_json::to_value(&req)?)
            .await?;

        let access_token = resp
            .get("access_token")
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .ok_or_else(|| ImgurError::ResponseMissing("access_token".into()))?;
        debug!("Obtained access token for client");

        Ok((self.with_access_token(&access_token), resp))
    }

    pub fn account(&self) -> AccountApi {
        AccountApi::new(self.clone())
    }

    pub fn album(&self) -> AlbumApi {
        AlbumApi::new(self.clone())
    }

    pub fn comment(&self) -> CommentApi {
        CommentApi::new(self.clone())
    }

    pub fn image(&self) -> ImageApi {
        ImageApi::new(self.clone())
    }
}

// Body of the OAuth2 token refresh request
#[derive(Serialize, Debug)]
struct TokenRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    client_secret: Option<&'a str>,

    grant_type: &'static str,
}
