// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Content(ContentError),
}

/// Failures of the single best-effort content store query.
///
/// None of these ever reach the user: the portfolio swaps in its sample
/// photos instead. Failures are logged with their [`i18n_key`](Self::i18n_key)
/// as a stable `reason` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// No project id configured, so no request was made.
    NotConfigured,

    /// Transport failure (DNS, TLS, connection reset, ...)
    Http(String),

    /// The content store answered with a non-success status code.
    Status(u16),

    /// The response body was not the expected JSON shape.
    Decode(String),
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::NotConfigured => "content-error-not-configured",
            ContentError::Http(_) => "content-error-http",
            ContentError::Status(_) => "content-error-status",
            ContentError::Decode(_) => "content-error-decode",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::NotConfigured => write!(f, "Content store is not configured"),
            ContentError::Http(msg) => write!(f, "Request failed: {}", msg),
            ContentError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ContentError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
        }
    }
}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<reqwest::Error> for ContentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ContentError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ContentError::Status(status.as_u16())
        } else {
            ContentError::Http(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
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
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn content_error_wraps_into_error() {
        let err: Error = ContentError::Status(503).into();
        assert_eq!(
            format!("{}", err),
            "Content Error: Unexpected HTTP status: 503"
        );
    }

    #[test]
    fn content_error_i18n_keys() {
        assert_eq!(
            ContentError::NotConfigured.i18n_key(),
            "content-error-not-configured"
        );
        assert_eq!(
            ContentError::Http("reset".into()).i18n_key(),
            "content-error-http"
        );
        assert_eq!(ContentError::Status(404).i18n_key(), "content-error-status");
        assert_eq!(
            ContentError::Decode("eof".into()).i18n_key(),
            "content-error-decode"
        );
    }

    #[test]
    fn invalid_image_bytes_map_to_image_error() {
        let err: Error = image_rs::load_from_memory(b"not an image")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Image(_)));
    }
}
