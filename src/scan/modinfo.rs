// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Minimal `modinfo.lua` field extraction.
//!
//! A modinfo file is treated as line-oriented text; only `key = value`
//! assignments at the start of a line are recognized. This is deliberately
//! not a Lua parser.

/// Extracts the value of the first line starting with `<key> = `.
///
/// The value has one pair of surrounding double quotes removed when both are
/// present; anything else (single quotes, unquoted values) is returned
/// verbatim with trailing whitespace trimmed.
#[must_use]
pub fn extract_field(content: &str, key: &str) -> Option<String> {
    let prefix = format!("{key} = ");
    content
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .map(|raw| unquote(raw).to_string())
}

fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim_end();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
}
