//! 名簿の取得元（ローカルファイル / HTTP）

use crate::error::{AboutUsError, Result};
use about_us_common::{
    DepartmentFilter, Error as CommonError, LoadPhase, RosterSource, TeamDirectoryStore,
    TeamRoster,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// 名簿JSONの場所
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterLocation {
    File(PathBuf),
    Url(String),
}

impl RosterLocation {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AboutUsError::Config("名簿の取得元が空です".into()));
        }
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(RosterLocation::Url(raw.to_string()))
        } else {
            Ok(RosterLocation::File(PathBuf::from(raw)))
        }
    }
}

impl fmt::Display for RosterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterLocation::File(path) => write!(f, "{}", path.display()),
            RosterLocation::Url(url) => write!(f, "{}", url),
        }
    }
}

impl RosterSource for RosterLocation {
    fn describe(&self) -> String {
        self.to_string()
    }

    async fn fetch_roster(&self) -> about_us_common::Result<TeamRoster> {
        match self {
            RosterLocation::File(path) => {
                let content = tokio::fs::read_to_string(path).await?;
                TeamRoster::from_json(&content)
            }
            RosterLocation::Url(url) => {
                let response = reqwest::get(url)
                    .await
                    .map_err(|e| CommonError::Fetch(e.to_string()))?;
                let status = response.status();
                if !status.is_success() {
                    return Err(CommonError::Status(status.as_u16()));
                }
                let body = response
                    .text()
                    .await
                    .map_err(|e| CommonError::Fetch(e.to_string()))?;
                TeamRoster::from_json(&body)
            }
        }
    }
}

/// 名簿を読み込んだストアを返す（失敗時はエラー）
pub async fn load_store(
    location: &RosterLocation,
    department: DepartmentFilter,
) -> Result<TeamDirectoryStore> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("名簿を読み込み中... ({})", location));
    spinner.enable_steady_tick(Duration::from_millis(100));

    tracing::debug!(%location, %department, "loading roster");
    let mut store = TeamDirectoryStore::new();
    store.set_department(department);
    let phase = store.load(location).await;
    spinner.finish_and_clear();

    match phase {
        LoadPhase::Loaded => {
            let members = store.roster().map(|r| r.member_count()).unwrap_or(0);
            tracing::info!(%location, members, "roster loaded");
            Ok(store)
        }
        _ => {
            tracing::warn!(%location, phase = phase.as_str(), "roster load failed");
            Err(AboutUsError::RosterLoad(location.to_string()))
        }
    }
}
