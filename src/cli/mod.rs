//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - init: Skeleton generation arguments (also used when no subcommand is given)
//! - sym: Resource relink arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

pub mod completions;
pub mod init;
pub mod sym;

pub use completions::CompletionsArgs;
pub use init::InitArgs;
pub use sym::{SymArgs, SymTarget};

/// sapp - scaffold a macOS app bundle
///
/// Creates `<Name>.app` with info.plist and symlinks to the release build output.
#[derive(Parser, Debug)]
#[command(
    name = "sapp",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold a macOS-style .app bundle around a release build",
    long_about = "sapp creates <Name>.app/Contents with an info.plist, links \
                  .build/release/<Name> into Contents/MacOS and links the first resource \
                  directory it finds into Contents/Resources.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  sapp                          \x1b[90m# Prompt for the app name and generate the bundle\x1b[0m\n   \
                  sapp --name MyApp             \x1b[90m# Generate MyApp.app without prompting\x1b[0m\n   \
                  sapp sym resources -n MyApp   \x1b[90m# Re-link Contents/Resources only\x1b[0m\n"
)]
pub struct Cli {
    /// Project root containing .build/ and Sources/ (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "SAPP_ROOT")]
    pub root: Option<PathBuf>,

    /// Vendor segment of the bundle identifier (com.<vendor>.<app>)
    #[arg(long, global = true, env = "SAPP_VENDOR")]
    pub vendor: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub init: InitArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the app bundle skeleton (default)
    Init(InitArgs),

    /// Re-create symlinks inside an existing bundle
    Sym(SymArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Rewrite the historical `-sym resources` spelling to the `sym` subcommand
///
/// Only the first argument after the program name is considered.
pub fn normalize_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 1 && arg == "-sym" {
                OsString::from("sym")
            } else {
                arg
            }
        })
        .collect()
}
