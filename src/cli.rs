use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Maps 6-digit hex colors to the nearest 256-color palette index", long_about = None)]
pub struct CliArgs {
    /// Hex color tokens, e.g. 1A2B3C (no leading '#')
    pub colors: Vec<String>,

    /// Print a colored swatch block instead of the plain index
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub swatch: bool,

    /// Scan a character stream from stdin even when tokens were given
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub interactive: bool,

    /// Log debug detail to stderr
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
