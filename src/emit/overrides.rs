// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod-override list emitter (`modoverrides.lua`).

use std::path::Path;

use tracing::info;

use crate::error::EmitError;
use crate::scan::ModRecord;

use super::base_name;

/// Renders the override list as one Lua table literal.
///
/// Every entry line but the last carries a trailing comma; the empty input
/// renders `return {\n}\n`.
#[must_use]
pub fn render_mod_overrides(records: &[ModRecord]) -> String {
    let mut out = String::from("return {\n");
    for (i, record) in records.iter().enumerate() {
        out.push_str("--#");
        out.push_str(record.name());
        out.push('\n');
        out.push_str("[\"workshop-");
        out.push_str(record.workshop_id());
        out.push_str("\"] = { enabled = true }");
        if i + 1 != records.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

/// Writes the override list to `path`, always overwriting.
///
/// # Errors
///
/// Returns [`EmitError::Write`] if the file cannot be created or written.
pub fn write_mod_overrides(
    records: &[ModRecord],
    path: &Path,
) -> std::result::Result<(), EmitError> {
    let rendered = render_mod_overrides(records);

    std::fs::write(path, rendered.as_bytes()).map_err(|source| EmitError::Write {
        path: path.display().to_string(),
        source,
    })?;

    info!("File '{}' created successfully!", base_name(path));
    Ok(())
}
