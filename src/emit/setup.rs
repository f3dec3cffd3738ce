// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server mod-setup script emitter (`dedicated_server_mods_setup.lua`).

use std::io::Write as _;
use std::path::Path;

use tracing::info;

use crate::error::EmitError;
use crate::scan::ModRecord;

use super::base_name;

/// How the setup file is opened.
///
/// `Overwrite` is canonical; `Append` preserves the legacy behavior of adding
/// blocks to an existing file on re-runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupMode {
    #[default]
    Overwrite,
    Append,
}

/// Renders the setup script: per mod a comment line with the display name,
/// then the `ServerModSetup` call with the workshop id.
#[must_use]
pub fn render_server_mods_setup(records: &[ModRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str("--#");
        out.push_str(record.name());
        out.push('\n');
        out.push_str("ServerModSetup(\"");
        out.push_str(record.workshop_id());
        out.push_str("\")\n");
    }
    out
}

/// Writes the setup script to `path` in the given mode.
///
/// # Errors
///
/// Returns [`EmitError::Write`] if the file cannot be created or written.
pub fn write_server_mods_setup(
    records: &[ModRecord],
    path: &Path,
    mode: SetupMode,
) -> std::result::Result<(), EmitError> {
    let rendered = render_server_mods_setup(records);

    let result = match mode {
        SetupMode::Overwrite => std::fs::write(path, rendered.as_bytes()),
        SetupMode::Append => std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(rendered.as_bytes())),
    };

    result.map_err(|source| EmitError::Write {
        path: path.display().to_string(),
        source,
    })?;

    info!("File '{}' created successfully!", base_name(path));
    Ok(())
}
