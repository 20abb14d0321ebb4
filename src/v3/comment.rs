/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::forms::{comment_form, comment_report_form};
use crate::v3::macros::api_path;
use crate::v3::{Client, ReportReason, ResponseEnvelope, Vote};

/// Comment endpoints.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#fba2b4a0-a0b9-47e0-80ae-f2f41201f2c3)
#[derive(Debug, Clone)]
pub struct CommentApi {
    client: Client,
}

impl CommentApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns information for the specified comment id
    pub async fn get(&self, comment_id: u64) -> Result<ResponseEnvelope, ImgurError> {
        self.client.api().get(&api_path!("comment", comment_id)).await
    }

    /// Creates a comment on an image.
    ///
    /// Use [`CommentApi::create_reply`] to reply to an existing comment.
    pub async fn create(&self, image_id: &str, comment: &str) -> Result<ResponseEnvelope, ImgurError> {
        self.client
            .api()
            .post_form(&api_path!("comment"), comment_form(image_id, comment))
            .await
    }

    pub async fn delete(&self, comment_id: u64) -> Result<ResponseEnvelope, ImgurError> {
        self.client.api().delete(&api_path!("comment", comment_id)).await
    }

    /// Returns the replies to the comment
    pub async fn replies(&self, comment_id: u64) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("comment", comment_id, "replies");
        self.client.api().get(&path).await
    }

    /// Creates a reply to the comment
    pub async fn create_reply(
        &self,
        image_id: &str,
        comment_id: u64,
        comment: &str,
    ) -> Result<ResponseEnvelope, ImgurError> {
        self.client
            .api()
            .post_form(&api_path!("comment", comment_id), comment_form(image_id, comment))
            .await
    }

    pub async fn vote(&self, comment_id: u64, vote: Vote) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("comment", comment_id, "vote", vote);
        self.client.api().post(&path).await
    }

    /// Reports the comment, optionally giving a reason
    pub async fn report(
        &self,
        comment_id: u64,
        reason: Option<ReportReason>,
    ) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("comment", comment_id, "report");
        self.client
            .api()
            .post_form(&path, comment_report_form(reason))
            .await
    }
}
