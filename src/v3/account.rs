/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::macros::{api_path, with_opt_segments};
use crate::v3::{Client, FavoriteSort, ResponseEnvelope};

/// Username referring to the authenticated account
pub const CURRENT_USER: &str = "me";

/// Account endpoints.
///
/// Every operation targets the authenticated account (`"me"`) unless a
/// username is given with [`AccountApi::for_user`].
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#c94c8719-fe68-4854-b96d-70735dd8b2bc)
#[derive(Debug, Clone)]
pub struct AccountApi {
    client: Client,
    username: String,
}

impl AccountApi {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            username: CURRENT_USER.into(),
        }
    }

    /// Targets another account
    pub fn for_user(mut self, username: &str) -> Self {
        self.username = username.into();
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns base information about the account
    pub async fn base(&self) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("account", self.username);
        self.client.api().get(&path).await
    }

    /// Returns the gallery favorites of the account
    pub async fn gallery_favorites(
        &self,
        page: Option<u32>,
        sort: Option<FavoriteSort>,
    ) -> Result<ResponseEnvelope, ImgurError> {
        let path = with_opt_segments!(
            api_path!("account", self.username, "gallery_favorites"),
            page,
            sort
        );
        self.client.api().get(&path).await
    }

    /// Returns all the favorites of the account
    pub async fn favorites(
        &self,
        page: Option<u32>,
        sort: Option<FavoriteSort>,
    ) -> Result<ResponseEnvelope, ImgurError> {
        let path = with_opt_segments!(api_path!("account", self.username, "favorites"), page, sort);
        self.client.api().get(&path).await
    }

    pub async fn images(&self, page: Option<u32>) -> Result<ResponseEnvelope, ImgurError> {
        let path = with_opt_segments!(api_path!("account", self.username, "images"), page);
        self.client.api().get(&path).await
    }

    pub async fn image(&self, image_hash: &str) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("account", self.username, "image", image_hash);
        self.client.api().get(&path).await
    }

    /// Returns the ids of the images of the account
    pub async fn image_ids(&self, page: Option<u32>) -> Result<ResponseEnvelope, ImgurError> {
        let path = with_opt_segments!(api_path!("account", self.username, "images", "ids"), page);
        self.client.api().get(&path).await
    }

    pub async fn image_count(&self) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("account", self.username, "images", "count");
        self.client.api().get(&path).await
    }

    /// Deletes an image of the account using its delete hash
    pub async fn image_delete(&self, delete_hash: &str) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("account", self.username, "image", delete_hash);
        self.client.api().delete(&path).await
    }

    /// Returns the reply notifications of the account
    pub async fn replies(&self) -> Result<ResponseEnvelope, ImgurError> {
        let path = api_path!("account", self.username, "notifications", "replies");
        self.client.api().get(&path).await
    }
}
