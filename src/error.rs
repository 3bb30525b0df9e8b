// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type covering network, decoding, and local I/O failures.
///
/// Variants carry plain strings so the error stays `Clone` and can travel
/// through Iced messages.
#[derive(Debug, Clone)]
pub enum Error {
    /// HTTP transport failure (connection refused, timeout, non-2xx status).
    Http(String),
    /// Response body could not be decoded as the expected JSON shape.
    Json(String),
    /// Fetched bytes could not be decoded as an image.
    Image(String),
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Json(e) => write!(f, "JSON Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Json(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{}", err), "HTTP Error: connection refused");
    }

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_error = toml::from_str::<toml::Value>("not = valid = toml").unwrap_err();
        let err: Error = toml_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn error_is_cloneable_for_messages() {
        let err = Error::Image("truncated png".to_string());
        let copy = err.clone();
        assert_eq!(format!("{}", err), format!("{}", copy));
    }
}
