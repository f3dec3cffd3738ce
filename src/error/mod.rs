// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ModlistError (~24 bytes)
//!                     |
//!     +--------+------+------+--------+
//!     |        |      |      |        |
//!     v        v      v      v        v
//!   Bail     Path   Scan    Cfg     Emit   Io/Other
//!            Box    Box     Box     Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Path    NotFound, DiscoveryFailed        fatal
//!   Scan    Metadata, NameNotFound           per-entry, skipped
//!   Config  ReadError, ParseError, ...       fatal
//!   Emit    Write                            fatal
//!
//! All variants boxed => ModlistError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModlistError`].
pub type ModlistResult<T> = std::result::Result<T, ModlistError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ModlistError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Path resolution failed.
    #[error("path error: {0}")]
    Path(#[from] Box<PathError>),

    /// Mod metadata could not be extracted.
    #[error("scan error: {0}")]
    Scan(#[from] Box<ScanError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Output file emission failed.
    #[error("emit error: {0}")]
    Emit(#[from] Box<EmitError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`ModlistError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> ModlistError {
    ModlistError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModlistError {
                fn from(err: $error) -> Self {
                    ModlistError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    PathError => Path,
    ScanError => Scan,
    ConfigError => Config,
    EmitError => Emit,
    std::io::Error => Io,
}

// --- Path Errors ---

/// Path resolution errors.
///
/// These are fatal: without a mods directory nothing can be generated.
#[derive(Debug, Error)]
pub enum PathError {
    /// A required path does not exist or cannot be listed.
    #[error("path not found: {path}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// No discovery strategy located an installation.
    #[error("automatic discovery failed: no supported strategy found an installation (use --dst-path)")]
    DiscoveryFailed,
}

// --- Scan Errors ---

/// Per-entry mod metadata errors.
///
/// These are recoverable: the enumerator logs them and skips the entry.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The metadata file could not be read.
    #[error("could not read mod metadata file '{path}': {source}")]
    Metadata {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The metadata file has no `name = ` line.
    #[error("could not find the name of the mod in file '{path}'")]
    NameNotFound { path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Emit Errors ---

/// Output file emission errors.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Failed to write an output file.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
