use crate::app_err::ApplicationError;
use crate::cli_args::Args;
use crate::configuration::RawConfig;
use config::{Config, Environment, File, Map, Value};
use serde::Deserialize;
use tracing::debug;

const ENV_PREFIX: &str = "INACTIVE_MARKER";
const REGION_VAR: &str = "INACTIVE_MARKER_REGION";
const DEFAULT_SETTINGS: &str = "settings";

// Settings files may spell the flag `mark-inactive`; environment variables
// and overrides can only produce `mark_inactive`, which wins.
#[derive(Debug, Deserialize)]
struct Layered {
    region: Option<String>,
    verbose: Option<bool>,
    mark_inactive: Option<Value>,
    #[serde(rename = "mark-inactive")]
    mark_inactive_kebab: Option<Value>,
}

impl From<Layered> for RawConfig {
    fn from(layered: Layered) -> Self {
        RawConfig {
            region: layered.region,
            verbose: layered.verbose,
            mark_inactive: layered.mark_inactive.or(layered.mark_inactive_kebab),
        }
    }
}

/// Layers the settings file, environment and command line into raw input.
///
/// `env` replaces the process environment when given.
pub fn load_input(
    args: &Args,
    env: Option<Map<String, String>>,
) -> Result<RawConfig, ApplicationError> {
    let file = match &args.config {
        Some(path) => File::with_name(path).required(true),
        None => File::with_name(DEFAULT_SETTINGS).required(false),
    };

    // The region is copied verbatim, so it stays out of the parsed layer.
    let mut env = env.unwrap_or_else(|| std::env::vars().collect());
    let env_region = take_var(&mut env, REGION_VAR);

    let environment = Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .source(Some(env));

    let layered = Config::builder()
        .add_source(file)
        .add_source(environment)
        .set_override_option("region", args.region.clone().or(env_region))?
        .set_override_option("verbose", args.verbose.then_some(true))?
        .set_override_option("mark_inactive", args.mark_inactive.then_some(true))?
        .build()?
        .try_deserialize::<Layered>()?;
    let raw = RawConfig::from(layered);

    debug!(?raw, "settings layered");

    Ok(raw)
}

// Environment keys are matched case-insensitively, like the `config` crate does.
fn take_var(env: &mut Map<String, String>, name: &str) -> Option<String> {
    let keys: Vec<String> = env
        .keys()
        .filter(|key| key.eq_ignore_ascii_case(name))
        .cloned()
        .collect();

    keys.into_iter().filter_map(|key| env.remove(&key)).last()
}
