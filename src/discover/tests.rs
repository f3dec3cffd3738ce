// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{DiscoverStrategy, discover_with};
use crate::error::PathError;
use std::path::PathBuf;

/// Fixed-outcome strategy for exercising the probe loop.
struct StubStrategy {
    name: &'static str,
    supported: bool,
    found: Option<PathBuf>,
}

impl DiscoverStrategy for StubStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_supported(&self) -> bool {
        self.supported
    }

    fn locate(&self) -> Option<PathBuf> {
        self.found.clone()
    }
}

fn boxed(name: &'static str, supported: bool, found: Option<&str>) -> Box<dyn DiscoverStrategy> {
    Box::new(StubStrategy {
        name,
        supported,
        found: found.map(PathBuf::from),
    })
}

#[test]
fn test_first_hit_wins() {
    let strategies = vec![
        boxed("first", true, Some("/games/first")),
        boxed("second", true, Some("/games/second")),
    ];
    let root = discover_with(&strategies).unwrap();
    assert_eq!(root, PathBuf::from("/games/first"));
}

#[test]
fn test_unsupported_strategies_are_skipped() {
    let strategies = vec![
        boxed("wrong-os", false, Some("/games/wrong")),
        boxed("right-os", true, Some("/games/right")),
    ];
    let root = discover_with(&strategies).unwrap();
    assert_eq!(root, PathBuf::from("/games/right"));
}

#[test]
fn test_miss_falls_through_to_next() {
    let strategies = vec![
        boxed("empty", true, None),
        boxed("hit", true, Some("/games/hit")),
    ];
    let root = discover_with(&strategies).unwrap();
    assert_eq!(root, PathBuf::from("/games/hit"));
}

#[test]
fn test_all_misses_fail_discovery() {
    let strategies = vec![boxed("unsupported", false, None), boxed("empty", true, None)];
    let err = discover_with(&strategies).unwrap_err();
    assert!(matches!(err, PathError::DiscoveryFailed));
}

#[test]
fn test_no_strategies_fail_discovery() {
    let err = discover_with(&[]).unwrap_err();
    assert!(matches!(err, PathError::DiscoveryFailed));
}
