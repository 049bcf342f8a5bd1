use std::{env, path::PathBuf};

use miao_config::Config;

pub const HOME_ENV: &str = "MIAO_LEDGER_HOME";

/// Base directory holding `config/` and `data/`, defaulting to `~/.miao_ledger`.
pub fn app_home_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    Config::default_base_dir()
}
