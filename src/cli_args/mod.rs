use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Region the downstream tool operates in
    #[arg(long, short('r'))]
    pub region: Option<String>,

    /// Enable debug logging
    #[arg(long, short('v'))]
    pub verbose: bool,

    /// Mark inactive resources
    #[arg(long)]
    pub mark_inactive: bool,

    /// AWS profile to use
    #[arg(long, short('p'))]
    pub profile: Option<String>,

    /// Path to a settings file, defaults to ./settings.*
    #[arg(long, short('c'))]
    pub config: Option<String>,
}
