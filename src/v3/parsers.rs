/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::ReportReason;
use crate::v3::errors::ImgurError;
use std::str::FromStr;
use strum::IntoEnumIterator;

// Parses an enumerated request parameter, listing the supported values on failure
pub fn parse_param<T>(param: &'static str, value: &str) -> Result<T, ImgurError>
where
    T: FromStr + IntoEnumIterator + Into<&'static str>,
{
    T::from_str(value).map_err(|_| ImgurError::Validation {
        param,
        value: value.to_string(),
        allowed: T::iter().map(Into::into).collect(),
    })
}

// Parses a comment report reason code
pub fn report_reason_from_code(code: u8) -> Result<ReportReason, ImgurError> {
    ReportReason::try_from(code).map_err(|_| ImgurError::Validation {
        param: "reason",
        value: code.to_string(),
        allowed: ReportReason::CODES.to_vec(),
    })
}

// Parses a report reason given as text ("1" through "5")
pub fn report_reason_from_str(value: &str) -> Result<ReportReason, ImgurError> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|code| ReportReason::try_from(code).ok())
        .ok_or_else(|| ImgurError::Validation {
            param: "reason",
            value: value.to_string(),
            allowed: ReportReason::CODES.to_vec(),
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::v3::{AlbumLayout, Privacy, Vote};

    #[test]
    fn known_values_parse() {
        assert_eq!(parse_param::<Privacy>("privacy", "hidden").unwrap(), Privacy::Hidden);
        assert_eq!(parse_param::<AlbumLayout>("layout", "grid").unwrap(), AlbumLayout::Grid);
        assert_eq!(parse_param::<Vote>("vote", "veto").unwrap(), Vote::Veto);
    }

    #[test]
    fn unknown_value_lists_allowed_values() {
        let err = parse_param::<Privacy>("privacy", "unlisted").unwrap_err();
        match &err {
            ImgurError::Validation {
                param,
                value,
                allowed,
            } => {
                assert_eq!(*param, "privacy");
                assert_eq!(value, "unlisted");
                assert_eq!(allowed, &vec!["public", "hidden", "secret"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("unlisted"));
    }

    #[test]
    fn report_reasons() {
        assert_eq!(report_reason_from_code(2).unwrap(), ReportReason::Spam);
        assert_eq!(report_reason_from_str("5").unwrap(), ReportReason::Pornography);
        assert_eq!(ReportReason::Abusive.code(), 3);
        assert!(matches!(
            report_reason_from_code(0),
            Err(ImgurError::Validation { param: "reason", .. })
        ));
        assert!(report_reason_from_str("6").is_err());
        assert!(report_reason_from_str("spam").is_err());
    }
}
