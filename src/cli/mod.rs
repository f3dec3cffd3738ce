// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modlist-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modlist [global options] <command>
//! generate (--dst-path DIR | --auto) [--output-dir DIR] [--append]
//! options
//! configs
//! version
//! ```

pub mod generate;
pub mod global;


use crate::cli::generate::GenerateArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Don't Starve Together Mod List Generator - Rust Port
///
/// Generates the dedicated server mod configuration files from an
/// installation's mods directory.
#[derive(Debug, Parser)]
#[command(
    name = "modlist",
    author,
    version,
    about = "Don't Starve Together Mod List Generator",
    long_about = "modlist-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Scans a Don't Starve Together installation's mods directory and\n\
                  generates `dedicated_server_mods_setup.lua` and `modoverrides.lua`\n\
                  for a dedicated server. Point it at an installation with\n\
                  `modlist generate --dst-path <DIR>`, or let it guess with\n\
                  `modlist generate --auto`. See `modlist <command> --help` for\n\
                  more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, modlist will look for a `modlist.toml` in the current\n\
                  directory and load it if present. Additional TOML files can be\n\
                  specified with --config; those are loaded after the default and\n\
                  override it. MODLIST_* environment variables and command-line\n\
                  flags override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by modlist.
    Configs,

    /// Generates the server mod-setup script and the mod-override list.
    Generate(GenerateArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
