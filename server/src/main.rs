use anyhow::{anyhow, Context};

use ludoteca_server::config::{self, Config};
use ludoteca_server::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("sqlx", log::LevelFilter::Error)
        .init();
    let args: Vec<String> = std::env::args().collect();
    let Some(config_path) = args.get(1) else {
        return Err(anyhow::Error::msg(
            "config file must be specified as the first arg",
        ));
    };
    let config = tokio::fs::read_to_string(config_path)
        .await
        .context(format!("Failed to read config file {config_path}"))?;
    let config: Config = toml::from_str(&config).context("Failed to parse config")?;
    config::validate(&config).map_err(|e| anyhow!("Config validation failed: {e}"))?;
    server::run(config).await
}
