/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Builds a versioned resource path, percent-encoding every segment.
// api_path!("album", hash, "images") -> "/3/album/<hash>/images"
macro_rules! api_path {
    ( $( $seg:expr ),+ $(,)? ) => {{
        let mut path = format!("/{}", $crate::v3::API_VERSION);
        $(
            path.push('/');
            path.push_str(&urlencoding::encode(&$seg.to_string()));
        )+
        path
    }};
}

// Appends optional trailing segments (page, sort, ...) to a path
macro_rules! with_opt_segments {
    ( $path:expr, $( $seg:expr ),+ $(,)? ) => {{
        let mut path: String = $path;
        $(
            if let Some(seg) = $seg {
                path.push('/');
                path.push_str(&urlencoding::encode(&seg.to_string()));
            }
        )+
        path
    }};
}

pub(crate) use {api_path, with_opt_segments};
