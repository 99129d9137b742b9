use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    pub port: u16,
    // Prefix prepended to every generated URL; empty for serving at the root.
    #[serde(default)]
    pub site_base_url_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server_config: ServerConfig,
    pub db_path: String,
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if cfg.db_path.is_empty() {
        return Err("db_path must not be empty".to_owned());
    }
    if cfg.server_config.site_base_url_path.ends_with('/') {
        return Err("site_base_url_path must not end with '/'".to_owned());
    }
    Ok(())
}
