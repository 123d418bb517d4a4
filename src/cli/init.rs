use clap::Args;

/// Arguments for the init command
///
/// Also flattened into the top-level command, so `sapp --name MyApp` works
/// without spelling out `init`.
#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    /// App name (if omitted, prompts interactively)
    #[arg(long, short = 'n', env = "SAPP_APP_NAME")]
    pub name: Option<String>,
}
