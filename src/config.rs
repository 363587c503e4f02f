use serde_derive::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Config {
    pub(crate) listener_address: SocketAddr,
    pub(crate) metrics_listener_address: SocketAddr,
    pub(crate) credentials_file: PathBuf,
    pub(crate) static_dir: PathBuf,
}

pub(crate) fn load() -> Result<Config, config::ConfigError> {
    let mut parser = config::Config::default();
    parser.merge(config::File::with_name("roster"))?;
    parser.merge(config::Environment::with_prefix("APP").separator("__"))?;
    parser.try_deserialize::<Config>()
}
