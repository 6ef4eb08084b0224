use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse format configuration")]
    #[diagnostic(code(poet::config::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid date format '{format}'")]
    #[diagnostic(
        code(poet::config::date_format),
        help("use chrono strftime specifiers, e.g. '%-m/%-d/%y' or '%Y-%m-%d'")
    )]
    DateFormat {
        #[source_code]
        src: NamedSource<String>,
        format: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an invalid date format error with source context
    pub fn date_format(format: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::DateFormat {
            src: NamedSource::new(filename, src.to_string()),
            format: format.into(),
        })
    }
}
