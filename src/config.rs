use std::{env, path::PathBuf};

pub const DEFAULT_STORAGE_KEY: &str = "adamstravel_cart_v1";

#[derive(Debug, Clone)]
pub struct CartConfig {
    pub storage_key: String,
    pub storage_dir: PathBuf,
    pub storage_quota: Option<usize>,
}

impl CartConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let storage_key = env::var("CART_STORAGE_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        let storage_dir = env::var("CART_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".cart-storage"));
        let storage_quota = match env::var("CART_STORAGE_QUOTA") {
            Ok(raw) => Some(raw.trim().parse::<usize>().map_err(|e| {
                anyhow::anyhow!("CART_STORAGE_QUOTA must be a byte count: {e}")
            })?),
            Err(_) => None,
        };
        Ok(Self {
            storage_key,
            storage_dir,
            storage_quota,
        })
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: PathBuf::from(".cart-storage"),
            storage_quota: None,
        }
    }
}
