/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::forms::album_form;
use crate::v3::macros::api_path;
use crate::v3::{AlbumProps, Client, ResponseEnvelope};

/// Album endpoints.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#5369b915-ad8f-47b0-8fe6-e6b3a3b1ac8c) for more
/// details on the individual fields.
#[derive(Debug, Clone)]
pub struct AlbumApi {
    client: Client,
}

impl AlbumApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns information for the specified album hash
    pub async fn get(&self, album_hash: &str) -> Result<ResponseEnvelope, ImgurError> {
        self.client.api().get(&api_path!("album", album_hash)).await
    }

    /// Returns the images contained in the album
    pub async fn images(&self, album_hash: &str) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("album", album_hash, "images");
        self.client.api().get(&path).await
    }

    /// Returns information for a single image of the album
    pub async fn image(
        &self,
        album_hash: &str,
        image_hash: &str,
    ) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("album", album_hash, "image", image_hash);
        self.client.api().get(&path).await
    }

    /// Creates a new album
    pub async fn create(&self, props: &AlbumProps) -> Result<ResponseEnvelope, ImgurError> {
        self.client
            .api()
            .post_form(&api_path!("album"), album_form(props))
            .await
    }

    /// Updates the album. `album_hash` may be the album id or its deletehash.
    pub async fn update(
        &self,
        album_hash: &str,
        props: &AlbumProps,
    ) -> Result<ResponseEnvelope, ImgurError> {
        self.client
            .api()
            .post_form(&api_path!("album", album_hash), album_form(props))
            .await
    }

    pub async fn delete(&self, album_hash: &str) -> Result<ResponseEnvelope, ImgurError> {
        self.client.api().delete(&api_path!("album", album_hash)).await
    }

    /// Toggles the album as a favorite of the authenticated user
    pub async fn favorite(&self, album_hash: &str) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("album", album_hash, "favorite");
        self.client.api().post(&path).await
    }
}
