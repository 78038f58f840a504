use serde_json::error::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {url} returned {status}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error in {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema error: {0}")]
    Schema(String),
}

impl Error {
    /// Sorts a `serde_json` failure into malformed text (`Decode`) or a
    /// well-formed document of the wrong shape (`Schema`).
    pub fn from_json(context: &'static str, source: serde_json::Error) -> Self {
        match source.classify() {
            Category::Data => Error::Schema(format!("{}: {}", context, source)),
            Category::Io | Category::Syntax | Category::Eof => Error::Decode { context, source },
        }
    }

    /// Process exit code for this error, following sysexits.h.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidUrl(_) => 64,
            Error::Decode { .. } | Error::Schema(_) => 65,
            Error::Http { .. } | Error::Transport(_) => 69,
            Error::Config(_) => 78,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses `text` as `T`, tagging any failure with `context`.
pub fn parse_json<T: serde::de::DeserializeOwned>(context: &'static str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| Error::from_json(context, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Titled {
        #[allow(dead_code)]
        title: String,
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = parse_json::<Titled>("fetch response", "{not json").unwrap_err();
        assert!(matches!(err, Error::Decode { context: "fetch response", .. }));
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_missing_field_is_schema_error() {
        let err = parse_json::<Titled>("fetch response", r#"{"text":"X"}"#).unwrap_err();
        match err {
            Error::Schema(message) => {
                assert!(message.starts_with("fetch response"));
                assert!(message.contains("title"));
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::Config("OPENAI_MODEL".to_string()).exit_code(), 78);
        assert_eq!(Error::InvalidUrl(String::new()).exit_code(), 64);
        let http = Error::Http {
            status: 502,
            url: "http://save".to_string(),
            body: String::new(),
        };
        assert_eq!(http.exit_code(), 69);
        assert_eq!(http.to_string(), "HTTP error: http://save returned 502: ");
    }
}
