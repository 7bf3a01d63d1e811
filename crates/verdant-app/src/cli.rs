use clap::Parser;

/// Verdant — an interactive 3D sphere you can spin and repaint.
#[derive(Parser, Debug)]
#[command(name = "verdant", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Skip the entrance animation.
    #[arg(long)]
    pub no_intro: bool,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
