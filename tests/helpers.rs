/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use async_trait::async_trait;
use bytes::Bytes;
use imgurapi::v3::{Client, Creds, HttpRequest, HttpResponse, ImgurError, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport returning canned responses and recording every request sent
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub(crate) fn respond(&self, status: u16, reason: &str, body: &str) -> &Self {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            reason: reason.into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: Bytes::from(body.to_string()),
        });
        self
    }

    pub(crate) fn respond_ok(&self, body: &str) -> &Self {
        self.respond(200, "OK", body)
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.sent().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ImgurError> {
        self.sent.lock().unwrap().push(request);
        let resp = self.responses.lock().unwrap().pop_front();
        Ok(resp.unwrap_or(HttpResponse {
            status: 200,
            reason: "OK".into(),
            headers: Vec::new(),
            body: Bytes::from_static(br#"{"data":true,"success":true,"status":200}"#),
        }))
    }
}

/// Client authorized with an access token, backed by a recording transport
#[allow(dead_code)]
pub(crate) fn stub_client() -> (Client, RecordingTransport) {
    let transport = RecordingTransport::default();
    let creds = Creds::from_tokens("test-client-id", Some("test-secret"), Some("test-refresh"), Some("test-token"));
    (Client::with_transport(creds, transport.clone()), transport)
}

/// Anonymous client, backed by a recording transport
#[allow(dead_code)]
pub(crate) fn anon_client() -> (Client, RecordingTransport) {
    let transport = RecordingTransport::default();
    let creds = Creds::from_tokens("test-client-id", None, None, None);
    (Client::with_transport(creds, transport.clone()), transport)
}

#[allow(dead_code)]
pub(crate) fn body_text(request: &HttpRequest) -> String {
    request
        .body
        .as_ref()
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .unwrap_or_default()
}

#[allow(dead_code)]
pub(crate) fn get_live_creds() -> anyhow::Result<Creds> {
    let client_id = std::env::var("IMGUR_CLIENT_ID")?;
    let client_secret = std::env::var("IMGUR_CLIENT_SECRET")?;
    let refresh_token = std::env::var("IMGUR_REFRESH_TOKEN")?;

    Ok(Creds::from_tokens(
        &client_id,
        Some(&client_secret),
        Some(&refresh_token),
        None,
    ))
}

#[allow(dead_code)]
pub(crate) fn get_read_only_creds() -> anyhow::Result<Creds> {
    let client_id = std::env::var("IMGUR_CLIENT_ID")?;

    Ok(Creds::from_tokens(&client_id, None, None, None))
}

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
