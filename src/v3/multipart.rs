/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! `multipart/form-data` encoding for uploads and form submissions.
//!
//! The framing matches what the Imgur API has been observed to accept: every
//! file part is followed by another opening boundary line and the closing
//! `--<boundary>--` terminator is never written. Boundaries are not escaped
//! inside field values or file contents.

use bytes::{BufMut, Bytes, BytesMut};
use mime::Mime;

const EOL: &[u8] = b"\r\n";

/// Named text value of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// File attached to a form under `field_name`
#[derive(Debug, Clone, PartialEq)]
pub struct FileAttachment {
    /// File name sent in the `Content-Disposition` header
    pub name: String,
    pub data: Bytes,
    pub field_name: String,
    pub mime_type: Mime,
}

impl FileAttachment {
    pub fn new(
        name: impl Into<String>,
        data: impl Into<Bytes>,
        field_name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let mime_type = guess_mime_type(&name);
        Self {
            name,
            data: data.into(),
            field_name: field_name.into(),
            mime_type,
        }
    }
}

// Guesses from the file extension, falling back to application/octet-stream
fn guess_mime_type(file_name: &str) -> Mime {
    mime_guess::from_path(file_name).first_or_octet_stream()
}

/// Output of [`MultipartForm::encode`]
#[derive(Debug, Clone)]
pub struct EncodedForm {
    pub body: Bytes,
    pub boundary: String,
    pub content_type: String,
}

/// Ordered fields and files sharing a single boundary token.
#[derive(Debug, Clone)]
pub struct MultipartForm {
    fields: Vec<Field>,
    files: Vec<FileAttachment>,
    boundary: String,
}

impl MultipartForm {
    /// Creates a form with a freshly generated boundary
    pub fn new(fields: Vec<Field>, files: Vec<FileAttachment>) -> Self {
        Self::with_boundary(fields, files, generate_boundary())
    }

    /// Creates a form with a caller provided boundary
    pub fn with_boundary(
        fields: Vec<Field>,
        files: Vec<FileAttachment>,
        boundary: impl Into<String>,
    ) -> Self {
        Self {
            fields,
            files,
            boundary: boundary.into(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn files(&self) -> &[FileAttachment] {
        &self.files
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.files.is_empty()
    }

    /// Value for the `Content-Type` header
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Serializes fields (in order) then files (in order).
    ///
    /// An empty form serializes to an empty byte sequence.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::new();

        let mut delimiter = Vec::with_capacity(self.boundary.len() + 4);
        delimiter.extend_from_slice(b"--");
        delimiter.extend_from_slice(self.boundary.as_bytes());
        delimiter.extend_from_slice(EOL);

        for field in &self.fields {
            buf.put_slice(&delimiter);
            buf.put_slice(b"Content-Disposition: form-data; ");
            buf.put_slice(format!("name=\"{}\"", field.name).as_bytes());
            buf.put_slice(EOL);
            buf.put_slice(EOL);
            buf.put_slice(field.value.as_bytes());
            buf.put_slice(EOL);
        }

        for file in &self.files {
            buf.put_slice(&delimiter);
            buf.put_slice(b"Content-Disposition: form-data; ");
            buf.put_slice(format!("name=\"{}\"; ", file.field_name).as_bytes());
            buf.put_slice(format!("filename=\"{}\"", file.name).as_bytes());
            buf.put_slice(EOL);
            buf.put_slice(EOL);
            buf.put_slice(&file.data);
            buf.put_slice(EOL);
            buf.put_slice(&delimiter);
        }

        buf.freeze()
    }

    /// Serializes the form and hands back the body with its boundary and content type
    pub fn encode(self) -> EncodedForm {
        EncodedForm {
            body: self.to_bytes(),
            content_type: self.content_type(),
            boundary: self.boundary,
        }
    }
}

/// Encodes the given fields and files with a fresh boundary
pub fn encode(fields: Vec<Field>, files: Vec<FileAttachment>) -> EncodedForm {
    MultipartForm::new(fields, files).encode()
}

// 128 random bits as 32 lowercase hex characters
fn generate_boundary() -> String {
    format!("{:032x}", rand::random::<u128>())
}
