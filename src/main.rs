//! sapp - scaffold a macOS-style application bundle
//!
//! Creates `<Name>.app/Contents/{MacOS,Resources}`, writes `info.plist` and
//! symlinks the release build output and resource directory into place.

use clap::Parser;
use miette::Diagnostic;

mod bundle;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod ui;

use cli::{Cli, Commands};
use commands::helpers::CommandContext;
use error::Result;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "sapp=debug" } else { "sapp=warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
        // A --name given before the subcommand still counts
        Some(Commands::Sym(mut args)) => {
            args.name = args.name.or(cli.init.name);
            let ctx = CommandContext::new(cli.root, cli.vendor)?;
            commands::sym::run(&ctx, args)
        }
        Some(Commands::Init(mut args)) => {
            args.name = args.name.or(cli.init.name);
            let ctx = CommandContext::new(cli.root, cli.vendor)?;
            commands::init::run(&ctx, args)
        }
        None => {
            let ctx = CommandContext::new(cli.root, cli.vendor)?;
            commands::init::run(&ctx, cli.init)
        }
    }
}

fn main() {
    let cli = Cli::parse_from(cli::normalize_legacy_args(std::env::args_os()));
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(e.exit_code());
    }
}
