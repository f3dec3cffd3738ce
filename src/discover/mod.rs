// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Installation discovery.
//!
//! ```text
//! discover_install_root()
//!        |
//!        v
//!   [strategy 1] --supported?--> locate() --exists?--> PathBuf
//!   [strategy 2]      ...
//!        |
//!        v
//!   PathError::DiscoveryFailed
//! ```
//!
//! Each platform guess is one [`DiscoverStrategy`]; adding a platform means
//! adding a strategy, not another branch at the call site.

use std::path::PathBuf;

use tracing::debug;

use crate::error::PathError;

/// A best-effort guess at where the game is installed.
///
/// Strategies have no side effects: they construct a candidate path from the
/// environment and report whether it exists.
pub trait DiscoverStrategy {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Whether this strategy applies to the current platform.
    fn is_supported(&self) -> bool;

    /// The candidate installation root, if it exists on disk.
    fn locate(&self) -> Option<PathBuf>;
}

/// Machine-wide Steam library on Windows.
pub struct WindowsSteamStrategy;

impl DiscoverStrategy for WindowsSteamStrategy {
    fn name(&self) -> &'static str {
        "windows-steam"
    }

    fn is_supported(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn locate(&self) -> Option<PathBuf> {
        let candidate = PathBuf::from(
            r"C:\Program Files (x86)\Steam\steamapps\common\Don't Starve Together",
        );
        candidate.is_dir().then_some(candidate)
    }
}

/// Per-user Steam library on Windows, constructed from the current username.
pub struct WindowsUserProfileStrategy;

impl DiscoverStrategy for WindowsUserProfileStrategy {
    fn name(&self) -> &'static str {
        "windows-user-profile"
    }

    fn is_supported(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn locate(&self) -> Option<PathBuf> {
        let user = std::env::var("USERNAME").ok()?;
        let candidate = PathBuf::from(format!(
            r"C:\Users\{user}\Steam\steamapps\common\Don't Starve Together"
        ));
        candidate.is_dir().then_some(candidate)
    }
}

/// The strategies shipped with the tool, in probe order.
#[must_use]
pub fn default_strategies() -> Vec<Box<dyn DiscoverStrategy>> {
    vec![
        Box::new(WindowsSteamStrategy),
        Box::new(WindowsUserProfileStrategy),
    ]
}

/// Runs the given strategies in order and returns the first hit.
///
/// # Errors
///
/// Returns [`PathError::DiscoveryFailed`] when no supported strategy locates
/// an existing installation.
pub fn discover_with(
    strategies: &[Box<dyn DiscoverStrategy>],
) -> std::result::Result<PathBuf, PathError> {
    for strategy in strategies {
        if !strategy.is_supported() {
            debug!(strategy = strategy.name(), "strategy not supported here");
            continue;
        }
        match strategy.locate() {
            Some(root) => {
                debug!(strategy = strategy.name(), root = %root.display(), "installation found");
                return Ok(root);
            }
            None => {
                debug!(strategy = strategy.name(), "no installation at guessed path");
            }
        }
    }
    Err(PathError::DiscoveryFailed)
}

/// Attempts automatic discovery of the installation root.
///
/// # Errors
///
/// Returns [`PathError::DiscoveryFailed`] when no shipped strategy applies.
pub fn discover_install_root() -> std::result::Result<PathBuf, PathError> {
    discover_with(&default_strategies())
}

#[cfg(test)]
mod tests;
