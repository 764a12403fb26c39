use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Startup aborts when this happens; the service cannot run without its
    /// MongoDB connection string. See `.env.example` for the expected variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
