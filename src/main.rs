mod app_err;
mod aws_authentication;
mod cli_args;
mod configuration;
mod logging;
mod settings;

use app_err::ApplicationError;
use aws_authentication::get_config;
use clap::Parser;
use cli_args::Args;
use config::Map;
use configuration::Configuration;
use tracing::{error, info};

/// Resolves the configuration. `env` replaces the process environment when given.
fn run(args: &Args, env: Option<Map<String, String>>) -> Result<Configuration, ApplicationError> {
    let raw = settings::load_input(args, env)?;
    let configuration = Configuration::build(raw)?;

    info!(
        region = configuration.region(),
        verbose = ?configuration.verbose(),
        mark_inactive = configuration.mark_inactive(),
        "configuration loaded"
    );

    Ok(configuration)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let configuration = match run(&args, None) {
        Ok(configuration) => configuration,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    let sdk_config = get_config(&configuration, args.profile.as_deref()).await;
    info!(region = ?sdk_config.region(), "AWS session ready");
}
