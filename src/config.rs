use crate::error::{AboutUsError, Result};
use crate::source::RosterLocation;
use about_us_common::DepartmentFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 名簿の取得元を上書きする環境変数
pub const ROSTER_ENV_VAR: &str = "ABOUT_US_ROSTER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 名簿JSONのパスまたはURL
    pub roster_source: String,
    pub default_department: DepartmentFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
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
            Ok(Self::default_config())
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
            .ok_or_else(|| AboutUsError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("about-us").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            roster_source: "data/teamData.json".into(),
            default_department: DepartmentFilter::All,
        }
    }

    /// 名簿の取得元を決定（優先順: --roster > 環境変数 > 設定ファイル）
    pub fn roster_location(&self, cli_override: Option<&str>) -> Result<RosterLocation> {
        let env_value = std::env::var(ROSTER_ENV_VAR).ok();
        let raw = cli_override
            .or(env_value.as_deref())
            .unwrap_or(&self.roster_source);
        RosterLocation::parse(raw)
    }

    pub fn set_roster_source(&mut self, source: String) -> Result<()> {
        RosterLocation::parse(&source)?;
        self.roster_source = source;
        self.save()
    }
}
