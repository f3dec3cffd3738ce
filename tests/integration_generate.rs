// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the generate pipeline.
//!
//! Builds realistic installation trees in a temp directory and runs the
//! full resolve → scan → sort → emit pipeline against them.

use modlist_rs::cli::generate::GenerateArgs;
use modlist_rs::cmd::generate::run_generate_command;
use modlist_rs::config::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Creates `<root>/mods/<dir_name>/modinfo.lua` with the given content.
fn add_mod(install_root: &Path, dir_name: &str, modinfo: &str) {
    let mod_dir = install_root.join("mods").join(dir_name);
    std::fs::create_dir_all(&mod_dir).unwrap();
    std::fs::write(mod_dir.join("modinfo.lua"), modinfo).unwrap();
}

fn generate_args(install_root: &Path, output_dir: &Path) -> GenerateArgs {
    GenerateArgs {
        dst_path: Some(install_root.to_path_buf()),
        output_dir: Some(output_dir.to_path_buf()),
        ..GenerateArgs::default()
    }
}

#[test]
fn generate_worked_example() {
    let install = temp_dir();
    let out = temp_dir();
    add_mod(
        install.path(),
        "workshop-111",
        "name = \"Geometric Placement\"\n",
    );
    add_mod(install.path(), "other-222", "name = \"Ignored\"\n");

    let args = generate_args(install.path(), out.path());
    run_generate_command(&args, &Config::default()).unwrap();

    let setup =
        std::fs::read_to_string(out.path().join("dedicated_server_mods_setup.lua")).unwrap();
    assert_eq!(setup, "--#Geometric Placement\nServerModSetup(\"111\")\n");

    let overrides = std::fs::read_to_string(out.path().join("modoverrides.lua")).unwrap();
    assert_eq!(
        overrides,
        "return {\n--#Geometric Placement\n[\"workshop-111\"] = { enabled = true }\n}\n"
    );
}

#[test]
fn generate_sorts_and_separates_entries() {
    let install = temp_dir();
    let out = temp_dir();
    // created out of order; output must be sorted by directory path
    add_mod(install.path(), "workshop-20", "name = \"Second\"\n");
    add_mod(install.path(), "workshop-10", "name = \"First\"\n");

    let args = generate_args(install.path(), out.path());
    run_generate_command(&args, &Config::default()).unwrap();

    let setup =
        std::fs::read_to_string(out.path().join("dedicated_server_mods_setup.lua")).unwrap();
    assert_eq!(
        setup,
        "--#First\nServerModSetup(\"10\")\n--#Second\nServerModSetup(\"20\")\n"
    );

    let overrides = std::fs::read_to_string(out.path().join("modoverrides.lua")).unwrap();
    assert_eq!(
        overrides,
        "return {\n\
         --#First\n\
         [\"workshop-10\"] = { enabled = true },\n\
         --#Second\n\
         [\"workshop-20\"] = { enabled = true }\n\
         }\n"
    );
}

#[test]
fn generate_empty_mods_directory() {
    let install = temp_dir();
    let out = temp_dir();
    std::fs::create_dir(install.path().join("mods")).unwrap();

    let args = generate_args(install.path(), out.path());
    run_generate_command(&args, &Config::default()).unwrap();

    let setup =
        std::fs::read_to_string(out.path().join("dedicated_server_mods_setup.lua")).unwrap();
    assert_eq!(setup, "");

    let overrides = std::fs::read_to_string(out.path().join("modoverrides.lua")).unwrap();
    assert_eq!(overrides, "return {\n}\n");
}

#[test]
fn generate_bad_entry_does_not_abort() {
    let install = temp_dir();
    let out = temp_dir();
    add_mod(install.path(), "workshop-1", "name = \"Kept\"\n");
    add_mod(install.path(), "workshop-2", "description = \"no name here\"\n");

    let args = generate_args(install.path(), out.path());
    run_generate_command(&args, &Config::default()).unwrap();

    let setup =
        std::fs::read_to_string(out.path().join("dedicated_server_mods_setup.lua")).unwrap();
    assert_eq!(setup, "--#Kept\nServerModSetup(\"1\")\n");
}

#[test]
fn generate_missing_mods_directory_is_fatal() {
    let install = temp_dir();
    let out = temp_dir();

    let args = generate_args(install.path(), out.path());
    let err = run_generate_command(&args, &Config::default()).unwrap_err();
    assert!(err.to_string().starts_with("path not found"));
}

#[test]
fn generate_append_mode_accumulates() {
    let install = temp_dir();
    let out = temp_dir();
    add_mod(install.path(), "workshop-1", "name = \"A\"\n");

    let mut args = generate_args(install.path(), out.path());
    args.append = true;

    run_generate_command(&args, &Config::default()).unwrap();
    run_generate_command(&args, &Config::default()).unwrap();

    let setup =
        std::fs::read_to_string(out.path().join("dedicated_server_mods_setup.lua")).unwrap();
    assert_eq!(
        setup,
        "--#A\nServerModSetup(\"1\")\n--#A\nServerModSetup(\"1\")\n"
    );

    // the override list never appends
    let overrides = std::fs::read_to_string(out.path().join("modoverrides.lua")).unwrap();
    assert_eq!(
        overrides,
        "return {\n--#A\n[\"workshop-1\"] = { enabled = true }\n}\n"
    );
}

#[test]
fn generate_honors_configured_names() {
    let install = temp_dir();
    let out = temp_dir();
    add_mod(install.path(), "workshop-1", "name = \"A\"\n");

    let mut config = Config::default();
    config.output.setup_file = "setup.lua".to_string();
    config.output.overrides_file = "over.lua".to_string();

    let args = generate_args(install.path(), out.path());
    run_generate_command(&args, &config).unwrap();

    assert!(out.path().join("setup.lua").exists());
    assert!(out.path().join("over.lua").exists());
}

#[test]
fn generate_cli_names_override_config() {
    let install = temp_dir();
    let out = temp_dir();
    add_mod(install.path(), "workshop-1", "name = \"A\"\n");

    let mut args = generate_args(install.path(), out.path());
    args.setup_file = Some("cli_setup.lua".to_string());

    run_generate_command(&args, &Config::default()).unwrap();

    assert!(out.path().join("cli_setup.lua").exists());
    assert!(!out.path().join("dedicated_server_mods_setup.lua").exists());
}

#[test]
fn generate_auto_uses_configured_root() {
    let install = temp_dir();
    let out = temp_dir();
    add_mod(install.path(), "workshop-7", "name = \"Via Config\"\n");

    let mut config = Config::default();
    config.paths.dst_root = Some(install.path().to_path_buf());

    let args = GenerateArgs {
        auto: true,
        output_dir: Some(out.path().to_path_buf()),
        ..GenerateArgs::default()
    };
    run_generate_command(&args, &config).unwrap();

    let setup =
        std::fs::read_to_string(out.path().join("dedicated_server_mods_setup.lua")).unwrap();
    assert_eq!(setup, "--#Via Config\nServerModSetup(\"7\")\n");
}

#[test]
fn generate_custom_mods_subdir() {
    let install = temp_dir();
    let out = temp_dir();
    let mod_dir = install.path().join("addons").join("workshop-9");
    std::fs::create_dir_all(&mod_dir).unwrap();
    std::fs::write(mod_dir.join("modinfo.lua"), "name = \"Elsewhere\"\n").unwrap();

    let mut config = Config::default();
    config.paths.mods_subdir = "addons".to_string();

    let args = generate_args(install.path(), out.path());
    run_generate_command(&args, &config).unwrap();

    let setup =
        std::fs::read_to_string(out.path().join("dedicated_server_mods_setup.lua")).unwrap();
    assert_eq!(setup, "--#Elsewhere\nServerModSetup(\"9\")\n");
}

#[test]
fn generate_output_dir_from_config() {
    let install = temp_dir();
    let out = temp_dir();
    add_mod(install.path(), "workshop-1", "name = \"A\"\n");

    let mut config = Config::default();
    config.paths.output_dir = PathBuf::from(out.path());

    let args = GenerateArgs {
        dst_path: Some(install.path().to_path_buf()),
        ..GenerateArgs::default()
    };
    run_generate_command(&args, &config).unwrap();

    assert!(out.path().join("dedicated_server_mods_setup.lua").exists());
}
