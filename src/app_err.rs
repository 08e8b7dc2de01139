use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("You must supply a {0} configuration value")]
    MissingRequiredField(&'static str),

    #[error("settings error: {0}")]
    Settings(#[from] config::ConfigError),
}
