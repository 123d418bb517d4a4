//! `sapp sym resources` integration tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn sapp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sapp").unwrap();
    cmd.env_remove("SAPP_ROOT")
        .env_remove("SAPP_VENDOR")
        .env_remove("SAPP_APP_NAME");
    cmd
}

#[test]
fn test_sym_requires_existing_bundle() {
    let workspace = common::TestWorkspace::new();
    workspace.create_dir("Sources/Resources");

    sapp_cmd()
        .current_dir(&workspace.path)
        .args(["sym", "resources", "--name", "Foo"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Foo.app does not exist"));
}

#[test]
fn test_sym_without_source_is_noop() {
    let workspace = common::TestWorkspace::new();
    workspace.create_dir("Foo.app/Contents");

    sapp_cmd()
        .current_dir(&workspace.path)
        .args(["sym", "resources", "--name", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resources not found"));

    assert!(!workspace.entry_exists("Foo.app/Contents/Resources"));
}

#[test]
fn test_sym_refuses_non_empty_resources() {
    let workspace = common::TestWorkspace::new();
    workspace.create_dir("Sources/Resources");
    workspace.write_file("Foo.app/Contents/Resources/a.txt", "keep");

    sapp_cmd()
        .current_dir(&workspace.path)
        .args(["sym", "resources", "--name", "Foo"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("is not empty"));

    assert!(!workspace.is_symlink("Foo.app/Contents/Resources"));
    assert_eq!(workspace.read_file("Foo.app/Contents/Resources/a.txt"), "keep");
}

#[cfg(unix)]
#[test]
fn test_sym_replaces_empty_resources_dir() {
    let workspace = common::TestWorkspace::new();
    let source = workspace.create_dir("Sources/Resources");
    workspace.write_file("Sources/Resources/strings.json", "{}");
    workspace.create_dir("Foo.app/Contents/Resources");

    sapp_cmd()
        .current_dir(&workspace.path)
        .args(["sym", "resources", "--name", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created symlink"));

    assert!(workspace.is_symlink("Foo.app/Contents/Resources"));
    assert_eq!(workspace.read_link("Foo.app/Contents/Resources"), source);
    assert!(workspace
        .path
        .join("Foo.app/Contents/Resources/strings.json")
        .is_file());
}

#[cfg(unix)]
#[test]
fn test_legacy_sym_flag_prefers_build_bundle() {
    let workspace = common::TestWorkspace::new();
    let built = workspace.create_dir(".build/release/Foo_Foo.bundle");
    workspace.create_dir("Sources/Foo/Resources");
    workspace.create_dir("Foo.app/Contents");

    sapp_cmd()
        .current_dir(&workspace.path)
        .args(["-sym", "resources", "--name", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("build resource bundle"));

    assert_eq!(workspace.read_link("Foo.app/Contents/Resources"), built);
}

#[cfg(unix)]
#[test]
fn test_sym_name_from_environment() {
    let workspace = common::TestWorkspace::new();
    let source = workspace.create_dir("Sources/Bar/Resources");
    workspace.create_dir("Bar.app/Contents");

    sapp_cmd()
        .current_dir(&workspace.path)
        .env("SAPP_APP_NAME", "Bar")
        .args(["sym", "resources"])
        .assert()
        .success();

    assert_eq!(workspace.read_link("Bar.app/Contents/Resources"), source);
}
