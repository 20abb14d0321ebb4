/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::envelope::ResponseEnvelope;
use crate::v3::errors::{ApiFailure, ImgurError};
use crate::v3::multipart::MultipartForm;
use crate::v3::transport::{Headers, HttpRequest, HttpResponse, Method, Transport};
use bytes::Bytes;
use log::{debug, error, warn};
use num_enum::TryFromPrimitive;
use serde_json::Value;
use std::sync::Arc;

// Root Imgur API
pub const API_ORIGIN: &str = "https://api.imgur.com/";

// Version prefix of the resource endpoints
pub const API_VERSION: &str = "3";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Credentials used to authorize requests.
///
/// The client id is always required. The access token is normally obtained
/// through [`crate::v3::Client::authenticate`] using the refresh token and
/// client secret.
#[derive(Default, Clone)]
pub struct Creds {
    client_id: String,
    client_secret: Option<String>,
    refresh_token: Option<String>,
    access_token: Option<String>,
}

impl Creds {
    pub fn from_tokens(
        client_id: &str,
        client_secret: Option<&str>,
        refresh_token: Option<&str>,
        access_token: Option<&str>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.map(str::to_string),
            refresh_token: refresh_token.map(str::to_string),
            access_token: access_token.map(str::to_string),
        }
    }

    /// Copy of these credentials carrying the given access token
    pub fn with_access_token(&self, access_token: &str) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..self.clone()
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }

    /// `Bearer <token>` when authenticated, `Client-ID <id>` otherwise
    pub fn authorization(&self) -> String {
        match self.access_token() {
            Some(token) => format!("Bearer {token}"),
            None => format!("Client-ID {}", self.client_id),
        }
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("client_id", &"xxx")
            .field("client_secret", &"xxx")
            .field("refresh_token", &"xxx")
            .field("access_token", &"xxx")
            .finish()
    }
}

/// Body of a request prior to serialization
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// A JSON object, serialized as UTF-8 bytes
    Json(Value),
    /// Already encoded bytes (e.g. a multipart form), sent as is
    Raw(Bytes),
}

impl RequestBody {
    fn into_bytes(self) -> Result<Bytes, ImgurError> {
        match self {
            RequestBody::Json(value @ Value::Object(_)) => Ok(serde_json::to_vec(&value)?.into()),
            RequestBody::Json(other) => {
                error!("Invalid data passed: {other}");
                Err(ImgurError::InvalidBody(format!(
                    "expected a JSON object or raw bytes, got: {other}"
                )))
            }
            RequestBody::Raw(bytes) => Ok(bytes),
        }
    }
}

/// Failure statuses that map onto a dedicated error variant
#[derive(Debug, TryFromPrimitive)]
#[repr(u16)]
pub enum ApiStatus {
    Forbidden = 403,
    NotFound = 404,
}

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    creds: Creds,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(creds: Creds, base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            creds,
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn creds(&self) -> &Creds {
        &self.creds
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn with_creds(&self, creds: Creds) -> Self {
        Self {
            creds,
            ..self.clone()
        }
    }

    pub(crate) fn with_base_url(&self, base_url: &str) -> Result<Self, ImgurError> {
        url::Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.into(),
            ..self.clone()
        })
    }

    /// Performs a single request against the API and wraps the decoded JSON.
    ///
    /// The `Authorization` header is computed from the credentials and any
    /// caller supplied `headers` are applied on top of it.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<ResponseEnvelope, ImgurError> {
        let auth: Headers = vec![("Authorization".into(), self.creds.authorization())];
        self.dispatch(method, path, body, auth, headers.unwrap_or_default())
            .await
    }

    /// Posts a JSON object without an `Authorization` header.
    ///
    /// Used for the token exchange, where a held token may already be stale.
    pub async fn post_json_unauthorized(
        &self,
        path: &str,
        data: Value,
    ) -> Result<ResponseEnvelope, ImgurError> {
        let headers = [("Content-Type", JSON_CONTENT_TYPE)];
        self.dispatch(
            Method::Post,
            path,
            Some(RequestBody::Json(data)),
            Vec::new(),
            &headers,
        )
        .await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        mut req_headers: Headers,
        headers: &[(&str, &str)],
    ) -> Result<ResponseEnvelope, ImgurError> {
        // Validate the body before anything is sent
        let body = body.map(RequestBody::into_bytes).transpose()?;
        let url = url::Url::parse(&self.base_url)?.join(path)?;

        for (name, value) in headers {
            merge_header(&mut req_headers, name, value);
        }

        debug!("{method} {url}");
        let resp = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers: req_headers,
                body,
            })
            .await?;
        debug!("{method} {path} -> {} {}", resp.status, resp.reason);

        check_status(&resp)?;
        let value = serde_json::from_slice::<Value>(&resp.body)?;
        Ok(ResponseEnvelope::new(value))
    }

    /// Performs a request without a body
    pub async fn get(&self, path: &str) -> Result<ResponseEnvelope, ImgurError> {
        self.send_json(Method::Get, path, None).await
    }

    pub async fn delete(&self, path: &str) -> Result<ResponseEnvelope, ImgurError> {
        self.send_json(Method::Delete, path, None).await
    }

    pub async fn post(&self, path: &str) -> Result<ResponseEnvelope, ImgurError> {
        self.send_json(Method::Post, path, None).await
    }

    pub async fn post_json(&self, path: &str, data: Value) -> Result<ResponseEnvelope, ImgurError> {
        self.send_json(Method::Post, path, Some(RequestBody::Json(data)))
            .await
    }

    /// Posts a multipart form. An empty form is sent without a body.
    pub async fn post_form(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> Result<ResponseEnvelope, ImgurError> {
        if form.is_empty() {
            return self.post(path).await;
        }
        let content_type = form.content_type();
        let headers = [("Content-Type", content_type.as_str())];
        self.request(
            Method::Post,
            path,
            Some(RequestBody::Raw(form.to_bytes())),
            Some(headers.as_slice()),
        )
        .await
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<ResponseEnvelope, ImgurError> {
        let headers = [("Content-Type", JSON_CONTENT_TYPE)];
        self.request(method, path, body, Some(headers.as_slice())).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

// Replaces a header of the same name or appends it
fn merge_header(headers: &mut Headers, name: &str, value: &str) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        Some(existing) => existing.1 = value.to_string(),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

/// Maps a failure status onto the matching error
fn check_status(resp: &HttpResponse) -> Result<(), ImgurError> {
    if (200..300).contains(&resp.status) {
        return Ok(());
    }

    let body = String::from_utf8_lossy(&resp.body).into_owned();
    let failure = ApiFailure {
        status: resp.status,
        reason: resp.reason.clone(),
        body: (!body.is_empty()).then_some(body),
        headers: Some(resp.headers.clone()),
    };
    warn!("API request failed. {failure}");

    use ApiStatus as S;
    match ApiStatus::try_from(resp.status) {
        Ok(S::NotFound) => Err(ImgurError::NotFound(failure)),
        Ok(S::Forbidden) => Err(ImgurError::Unauthorized(failure)),
        _ => Err(ImgurError::Api(failure)),
    }
}
