// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the locale subsystem.
///
/// None of these are fatal: a rejected or failed switch leaves the previous
/// locale fully functional, and missing translation keys are recovered
/// through the fallback bundle without ever reaching this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The requested locale code is not in the registry. Rejected before
    /// any state change.
    UnknownLocale(String),

    /// The resource bundle for the target locale could not be loaded or
    /// parsed. The prior locale is retained.
    ResourceResolution(String),

    /// Reading or writing the persisted preference failed.
    Config(String),

    Io(String),
}

impl Error {
    /// Returns the translation key for this error, used to render a
    /// localized notice in the UI.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::UnknownLocale(_) => "error.unknown-locale",
            Error::ResourceResolution(_) => "error.resource-resolution",
            Error::Config(_) => "error.config",
            Error::Io(_) => "error.io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownLocale(code) => write!(f, "Unknown locale: {}", code),
            Error::ResourceResolution(msg) => write!(f, "Resource resolution failed: {}", msg),
            Error::Config(msg) => write!(f, "Config Error: {}", msg),
            Error::Io(msg) => write!(f, "I/O Error: {}", msg),
        }
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
