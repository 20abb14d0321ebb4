/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::forms::image_form;
use crate::v3::macros::api_path;
use crate::v3::{Client, ImageProps, ResponseEnvelope};
use bytes::Bytes;

/// Image endpoints.
///
/// `image_hash` arguments accept either the image id or, for anonymous
/// uploads, its deletehash.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#2078c7e0-c2b8-4bc8-a646-6e544b087d0f)
#[derive(Debug, Clone)]
pub struct ImageApi {
    client: Client,
}

impl ImageApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns information for the specified image
    pub async fn get(&self, image_hash: &str) -> Result<ResponseEnvelope, ImgurError> {
        self.client.api().get(&api_path!("image", image_hash)).await
    }

    /// Uploads an image along with optional metadata
    pub async fn upload(
        &self,
        data: impl Into<Bytes>,
        file_name: &str,
        props: &ImageProps,
    ) -> Result<ResponseEnvelope, ImgurError> {
        let form = image_form(Some((data.into(), file_name)), props);
        self.client.api().post_form(&api_path!("upload"), form).await
    }

    pub async fn delete(&self, image_hash: &str) -> Result<ResponseEnvelope, ImgurError> {
        self.client.api().delete(&api_path!("image", image_hash)).await
    }

    /// Updates the title, description or album of the image
    pub async fn update(
        &self,
        image_hash: &str,
        props: &ImageProps,
    ) -> Result<ResponseEnvelope, ImgurError> {
        self.client
            .api()
            .post_form(&api_path!("image", image_hash), image_form(None, props))
            .await
    }

    /// Toggles the image as a favorite of the authenticated user
    pub async fn favorite(&self, image_hash: &str) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("image", image_hash, "favorite");
        self.client.api().post(&path).await
    }
}
