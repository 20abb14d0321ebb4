/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Builders for the multipart forms sent by the endpoint groups.

use crate::v3::multipart::{Field, FileAttachment, MultipartForm};
use crate::v3::{AlbumProps, ImageProps, ReportReason};
use bytes::Bytes;

/// Form used to create or update an album
pub fn album_form(props: &AlbumProps) -> MultipartForm {
    let mut fields: Vec<Field> = props
        .image_ids
        .iter()
        .map(|id| Field::new("ids[]", id))
        .chain(
            props
                .delete_hashes
                .iter()
                .map(|hash| Field::new("deletehashes[]", hash)),
        )
        .collect();

    push_opt(&mut fields, "title", props.title.as_deref());
    push_opt(&mut fields, "description", props.description.as_deref());
    push_opt(&mut fields, "privacy", props.privacy.map(Into::into));
    push_opt(&mut fields, "layout", props.layout.map(Into::into));
    push_opt(&mut fields, "cover", props.cover.as_deref());

    MultipartForm::new(fields, Vec::new())
}

/// Form used to upload or update an image.
///
/// The file, when given, is attached under the `image` field.
pub fn image_form(file: Option<(Bytes, &str)>, props: &ImageProps) -> MultipartForm {
    let mut fields = Vec::new();
    push_opt(&mut fields, "title", props.title.as_deref());
    push_opt(&mut fields, "description", props.description.as_deref());
    push_opt(&mut fields, "album", props.album.as_deref());

    let files = file
        .map(|(data, file_name)| vec![FileAttachment::new(file_name, data, "image")])
        .unwrap_or_default();

    MultipartForm::new(fields, files)
}

pub fn comment_form(image_id: &str, comment: &str) -> MultipartForm {
    MultipartForm::new(
        vec![Field::new("image_id", image_id), Field::new("comment", comment)],
        Vec::new(),
    )
}

pub fn comment_report_form(reason: Option<ReportReason>) -> MultipartForm {
    let fields = reason
        .map(|r| vec![Field::new("reason", r.code().to_string())])
        .unwrap_or_default();
    MultipartForm::new(fields, Vec::new())
}

fn push_opt(fields: &mut Vec<Field>, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        fields.push(Field::new(name, value));
    }
}
