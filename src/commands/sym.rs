//! Sym command implementation

use crate::bundle::{Step, linker};
use crate::cli::{SymArgs, SymTarget};
use crate::error::Result;
use crate::ui;

use super::helpers::{CommandContext, resolve_app_name};

pub fn run(ctx: &CommandContext, args: SymArgs) -> Result<()> {
    let name = resolve_app_name(args.name)?;
    let layout = ctx.layout(name);

    match args.target {
        SymTarget::Resources => {
            let status = linker::relink_bundle_resources(&layout)?;
            ui::print_status(Step::Resources, &status);
        }
    }

    Ok(())
}
