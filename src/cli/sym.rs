use clap::{Parser, ValueEnum};

/// What `sapp sym` re-links
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymTarget {
    /// Contents/Resources -> resolved resource source
    Resources,
}

/// Arguments for the sym command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Re-link resources, prompting for the app name:\n    sapp sym resources\n\n\
                  Re-link resources for MyApp:\n    sapp sym resources --name MyApp\n\n\
                  Resource sources are probed in this order:\n    \
                  .build/release/<Name>_<Name>.bundle\n    \
                  Sources/<Name>/Resources\n    \
                  Sources/Resources")]
pub struct SymArgs {
    /// Link to re-create
    #[arg(value_enum)]
    pub target: SymTarget,

    /// App name (if omitted, prompts interactively)
    #[arg(long, short = 'n', env = "SAPP_APP_NAME")]
    pub name: Option<String>,
}
