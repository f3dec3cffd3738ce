// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, ModlistError, ModlistResult, PathError, ScanError, bail_out};

#[test]
fn test_path_error_display() {
    let err = PathError::DiscoveryFailed;
    insta::assert_snapshot!(
        err.to_string(),
        @"automatic discovery failed: no supported strategy found an installation (use --dst-path)"
    );
}

#[test]
fn test_scan_error_display() {
    let err = ScanError::NameNotFound {
        path: "mods/workshop-111/modinfo.lua".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"could not find the name of the mod in file 'mods/workshop-111/modinfo.lua'"
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "dst_root".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'dst_root' in section '[paths]'"
    );
}

#[test]
fn test_scan_error_boxes_into_top_level() {
    let err: ModlistError = ScanError::NameNotFound {
        path: "x".to_string(),
    }
    .into();
    assert!(matches!(err, ModlistError::Scan(_)));
    assert!(err.to_string().starts_with("scan error: "));
}

#[test]
fn test_bail_out_message() {
    let err = bail_out("nothing to do");
    assert_eq!(err.to_string(), "fatal error: nothing to do");
}

#[test]
fn test_modlist_error_size() {
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<ModlistError>();
    assert!(size <= 24, "ModlistError is {size} bytes, expected <= 24");
}

#[test]
fn test_modlist_result_size() {
    let size = std::mem::size_of::<ModlistResult<()>>();
    assert!(size <= 24, "ModlistResult<()> is {size} bytes, expected <= 24");
}
