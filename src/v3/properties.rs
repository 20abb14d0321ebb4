/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Album visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Privacy {
    Public,
    Hidden,
    Secret,
}

/// Album layout when viewed on imgur.com
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlbumLayout {
    Blog,
    Grid,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
    Veto,
}

/// Sort order of an account's favorites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum FavoriteSort {
    Oldest,
    Newest,
}

/// Reason codes accepted when reporting a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ReportReason {
    DoesNotBelong = 1,
    Spam = 2,
    Abusive = 3,
    MatureNotMarked = 4,
    Pornography = 5,
}

impl ReportReason {
    pub const CODES: [&'static str; 5] = ["1", "2", "3", "4", "5"];

    pub fn code(self) -> u8 {
        self.into()
    }
}

/// Properties used when creating or updating an Album
#[derive(Debug, Clone, Default)]
pub struct AlbumProps {
    pub image_ids: Vec<String>,
    pub delete_hashes: Vec<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub privacy: Option<Privacy>,
    pub layout: Option<AlbumLayout>,
    /// Image id to use as the album cover
    pub cover: Option<String>,
}

/// Properties used when uploading or updating an Image
#[derive(Debug, Clone, Default)]
pub struct ImageProps {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Album id (or deletehash for anonymous albums) to add the image to
    pub album: Option<String>,
}
