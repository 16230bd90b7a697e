//! Error type for dictionary access and color resolution.
//!
//! Every fatal condition is a tagged variant; callers decide whether to
//! propagate or handle. Non-fatal conditions (malformed dictionary lines,
//! rounding advisories) are not errors at all -- they are logged through
//! the `log` crate and the operation continues.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::dictfile::{DICT_PATH_ENV, DICT_SEARCH_PATH};

/// Failure of a dictionary or resolution operation.
#[derive(Debug)]
pub enum ColorNameError {
    /// An explicitly named dictionary file could not be opened.
    FileOpen { path: PathBuf, source: io::Error },
    /// The file named by the dictionary path environment variable could
    /// not be opened.
    EnvFileOpen { path: PathBuf, source: io::Error },
    /// No explicit path, no environment variable, and nothing on the
    /// built-in search path could be opened.
    NoDictionary,
    /// An I/O error while reading an open dictionary file.
    Read(io::Error),
    /// No dictionary entry matched the (canonicalized) query name.
    UnknownColor(String),
    /// Reverse lookup was attempted against a dictionary with no entries
    /// and the caller did not permit a hex fallback.
    EmptyDictionary,
    /// An HSV hue outside `[0, 360)` was passed to a conversion.
    InvalidHue(f64),
}

impl fmt::Display for ColorNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileOpen { path, source } => write!(
                f,
                "can't open the color names dictionary file '{}': {source}",
                path.display()
            ),
            Self::EnvFileOpen { path, source } => write!(
                f,
                "can't open the color names dictionary file named '{}', \
                 per the {DICT_PATH_ENV} environment variable: {source}",
                path.display()
            ),
            Self::NoDictionary => write!(
                f,
                "can't open a color names dictionary file from the search \
                 path '{DICT_SEARCH_PATH}' and environment variable \
                 {DICT_PATH_ENV} not set; set {DICT_PATH_ENV} to the pathname \
                 of your rgb.txt file or don't use color names"
            ),
            Self::Read(source) => {
                write!(f, "error reading color names dictionary file: {source}")
            }
            Self::UnknownColor(name) => write!(f, "unknown color '{name}'"),
            Self::EmptyDictionary => {
                write!(f, "color names dictionary contains no colors at all")
            }
            Self::InvalidHue(hue) => {
                write!(f, "invalid hue passed to HSV conversion: {hue}")
            }
        }
    }
}

impl std::error::Error for ColorNameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileOpen { source, .. } | Self::EnvFileOpen { source, .. } => Some(source),
            Self::Read(source) => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ColorNameError {
    fn from(source: io::Error) -> Self {
        Self::Read(source)
    }
}
