use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    sapp completions bash > ~/.bash_completion.d/sapp\n\n\
                  Generate zsh completions:\n    sapp completions zsh > ~/.zfunc/_sapp\n\n\
                  Generate fish completions:\n    sapp completions fish > ~/.config/fish/completions/sapp.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
