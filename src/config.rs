use std::{env, path::Path};

use anyhow::Result;
use config::{Config as config_config, File as config_file};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const CONFIG_PATH: &str = "app.json";

pub static SETTINGS: Lazy<App> = Lazy::new(|| App::get().expect("Config error"));

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct App {
    #[serde(default)]
    pub coingecko: CoinGecko,
}

const COINGECKO_BASE_URL: &str = "COINGECKO_BASE_URL";
const COINGECKO_COIN_ID: &str = "COINGECKO_COIN_ID";

/// CoinGecko query settings. The defaults reproduce the fixed production
/// endpoint and asset; overriding them matters only for tests and mirrors.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CoinGecko {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_coin_id")]
    pub coin_id: String,
}

impl Default for CoinGecko {
    fn default() -> Self {
        CoinGecko {
            base_url: default_base_url(),
            coin_id: default_coin_id(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.coingecko.com/api/v3".to_string()
}

fn default_coin_id() -> String {
    "bitcoin".to_string()
}

impl App {
    fn get() -> Result<Self> {
        let config_path = Path::new(CONFIG_PATH);
        if config_path.exists() {
            let config: App = config_config::builder()
                .add_source(config_file::from(config_path))
                .build()?
                .try_deserialize()?;
            return Ok(config.override_with_env());
        }

        Ok(App::default().override_with_env())
    }

    /// env の設定値で json 上の設定値を上書きする
    fn override_with_env(mut self) -> Self {
        if let Ok(base_url) = env::var(COINGECKO_BASE_URL) {
            self.coingecko.base_url = base_url;
        }

        if let Ok(coin_id) = env::var(COINGECKO_COIN_ID) {
            self.coingecko.coin_id = coin_id;
        }

        self
    }
}
