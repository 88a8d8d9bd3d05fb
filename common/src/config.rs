//! 設定ファイル（CLIとデスクトップで共有）
//!
//! `~/.config/term-lookup/config.json` の例:
//!
//! ```json
//! {
//!   "data_path": "input.csv",
//!   "has_header": true,
//!   "source_vocabulary": "HuBMAP",
//!   "target_vocabulary": "HCA",
//!   "palette": { "positive": { "background": [232, 245, 233], "foreground": [46, 125, 50] } }
//! }
//! ```

use crate::error::{Error, Result};
use crate::presenter::Labels;
use crate::theme::Palette;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データセットパスを上書きする環境変数
pub const DATA_ENV_VAR: &str = "TERM_LOOKUP_DATA";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    /// 先頭行をヘッダーとして読み飛ばす
    pub has_header: bool,
    /// 語彙名はトップレベルのキー
    #[serde(flatten)]
    pub labels: Labels,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            has_header: true,
            labels: Labels::default(),
            palette: Palette::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("term-lookup").join("config.json"))
    }

    /// データセットパスを解決（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_data_path(&self, cli_value: Option<&Path>) -> Result<PathBuf> {
        let env_value = std::env::var_os(DATA_ENV_VAR).map(PathBuf::from);
        self.resolve_data_path_with(cli_value, env_value)
    }

    fn resolve_data_path_with(
        &self,
        cli_value: Option<&Path>,
        env_value: Option<PathBuf>,
    ) -> Result<PathBuf> {
        if let Some(path) = cli_value {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = env_value.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(path);
        }
        self.data_path.clone().ok_or(Error::MissingDataPath)
    }

    pub fn set_data_path(&mut self, path: PathBuf) -> Result<()> {
        self.data_path = Some(path);
        self.save()
    }
}
