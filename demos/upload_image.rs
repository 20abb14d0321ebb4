/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate imgurapi;

use anyhow::Result;
use dotenvy::dotenv;
use imgurapi::v3::{AlbumProps, Client, Creds, ImageProps, Privacy};
use std::path::PathBuf;

// Uploads every file given on the command line and collects them in a new hidden album.
//
// Usage: cargo run --example upload_image -- <title> <file>...
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let client_id = std::env::var("IMGUR_CLIENT_ID")?;
    let client_secret = std::env::var("IMGUR_CLIENT_SECRET")?;
    let refresh_token = std::env::var("IMGUR_REFRESH_TOKEN")?;

    let mut args = std::env::args().skip(1);
    let title = args.next().unwrap_or_else(|| "Uploads".to_string());
    let files: Vec<PathBuf> = args.map(PathBuf::from).collect();
    if files.is_empty() {
        anyhow::bail!("No files given to upload");
    }

    let client = Client::new(Creds::from_tokens(
        &client_id,
        Some(&client_secret),
        Some(&refresh_token),
        None,
    ));
    let (client, token_info) = client.authenticate().await?;
    println!("Authenticated as: {}", token_info.get("account_username")?);

    let mut image_ids = Vec::new();
    for path in &files {
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin");
        let props = ImageProps {
            title: Some(file_name.to_string()),
            ..Default::default()
        };

        let resp = client.image().upload(data, file_name, &props).await?;
        let image = resp.get("data")?;
        println!("Uploaded {} -> {}", path.display(), image.get("link")?);
        if let Some(id) = image.get("id")?.as_str() {
            image_ids.push(id.to_string());
        }
    }

    let album = client
        .album()
        .create(&AlbumProps {
            image_ids,
            title: Some(title),
            privacy: Some(Privacy::Hidden),
            ..Default::default()
        })
        .await?;
    println!("Created album:\n{}", album);
    Ok(())
}
