/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Imgur API
//!
//! This library was created for working with the Imgur APIv3 interface.
//!
//! For further details on the Rest API refer to the [Imgur API Docs](https://apidocs.imgur.com/)
//!
//! ## Features
//!
//! - OAuth2 access token generation from a refresh token
//! - Account information
//!     - Favorites, images, image ids/count and reply notifications
//!     - Can delete account images
//! - Album information
//!     - Can create, update, delete and favorite an Album
//!     - Can list the images contained in an Album
//! - Comments
//!     - Can create, reply to, vote on, report and delete comments
//! - Image information
//!     - Can upload, update, delete and favorite an Image
//! - Lower level interface for handling the raw communication
//!
//! *Responses are not mapped into fixed structs. Each call returns a
//! [`v3::ResponseEnvelope`] that is navigated field by field.*
//!
//! *If you want to use this library for more than is currently implemented, the
//! [`v3::ApiClient`] is a way to make request/responses in a more direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! imgurapi = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to register an application with Imgur to get a client id/secret**
//!
//! ```rust,no_run
//! use imgurapi::v3::{Client, Creds, ImageProps};
//!
//!async fn upload_cat(
//!    client_id: &str,
//!    client_secret: &str,
//!    refresh_token: &str,
//!    image: Vec<u8>,
//!) -> anyhow::Result<String> {
//!    let client = Client::new(Creds::from_tokens(
//!        client_id,
//!        Some(client_secret),
//!        Some(refresh_token),
//!        None,
//!    ));
//!
//!    // Exchange the refresh token for an access token
//!    let (client, _token_info) = client.authenticate().await?;
//!
//!    let props = ImageProps {
//!        title: Some("cat_image".into()),
//!        ..Default::default()
//!    };
//!    let resp = client.image().upload(image, "cat.jpg", &props).await?;
//!
//!    // Navigate the response
//!    let link = resp.get("data")?.get("link")?;
//!    Ok(link.as_str().unwrap_or_default().to_string())
//!}
//! ```
//!
pub mod v3;
