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
use imgurapi::v3::{Client, Creds, Navigated, ResponseEnvelope};

// Walks a comment and its replies, printing them as an indented tree.
//
// Usage: cargo run --example comment_thread -- <comment id>
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let client_id = std::env::var("IMGUR_CLIENT_ID")?;
    let comment_id: u64 = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Missing comment id"))?
        .parse()?;

    // Reading comments only needs the client id
    let client = Client::new(Creds::from_tokens(&client_id, None, None, None));
    let resp = client.comment().replies(comment_id).await?;

    if let Navigated::Object(comment) = resp.get("data")? {
        print_comment(&comment, 0)?;
    }
    Ok(())
}

fn print_comment(comment: &ResponseEnvelope, depth: usize) -> Result<()> {
    println!(
        "{:indent$}{} ({} points): {}",
        "",
        comment.get("author")?,
        comment.get("points")?,
        comment.get("comment")?,
        indent = depth * 2
    );

    let children = comment.get("children")?;
    if let Some(children) = children.envelope() {
        for idx in 0..children.len() {
            if let Navigated::Object(child) = children.at(idx)? {
                print_comment(&child, depth + 1)?;
            }
        }
    }
    Ok(())
}
