use core_config::FromEnv;

// Import the X.509 config from the database library
use database::mongodb::X509Config;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: X509Config,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = X509Config::from_env()?;

        Ok(Self {
            mongodb,
            environment,
        })
    }
}
