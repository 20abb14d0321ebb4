/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

mod macros;
pub mod api;
pub mod transport;
pub mod client;
pub mod multipart;
pub mod envelope;
pub mod forms;
pub mod parsers;
pub mod account;
pub mod album;
pub mod comment;
pub mod image;
pub mod properties;
pub mod errors;

pub use account::*;
pub use album::*;
pub use api::*;
pub use client::*;
pub use envelope::{EnvelopeError, Key, Navigated, ResponseEnvelope};
pub use errors::*;
pub use image::*;
pub use comment::*;
pub use multipart::{EncodedForm, Field, FileAttachment, MultipartForm};
pub use properties::*;
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
