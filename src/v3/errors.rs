/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v3::envelope::EnvelopeError;
use crate::v3::transport::Headers;
use std::fmt;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum ImgurError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Resource not found. {0}")]
    NotFound(ApiFailure),

    #[error("Unauthorized. {0}")]
    Unauthorized(ApiFailure),

    #[error("API Response was error. {0}")]
    Api(ApiFailure),

    #[error("Inappropriate value for `{param}`: '{value}', currently supported: {allowed:?}")]
    Validation {
        param: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Expected response field missing: {0}")]
    ResponseMissing(String),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

impl ImgurError {
    /// Returns the failure details for any of the API status errors
    /// ([`ImgurError::NotFound`], [`ImgurError::Unauthorized`] and [`ImgurError::Api`]).
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            ImgurError::NotFound(failure)
            | ImgurError::Unauthorized(failure)
            | ImgurError::Api(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Diagnostic context captured from a failed API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub status: u16,
    pub reason: String,
    pub body: Option<String>,
    pub headers: Option<Headers>,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status: {}, reason: {}", self.status, self.reason)?;
        if let Some(body) = self.body.as_deref().filter(|b| !b.is_empty()) {
            write!(f, ", body: {body}")?;
        }
        Ok(())
    }
}
