use clap::Parser;

/// A GPU-rendered single-page developer portfolio.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// tracing filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Initial playground scene (text, spheres, geometry).
    #[arg(long)]
    pub scene: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
