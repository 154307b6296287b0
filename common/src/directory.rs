//! チーム名簿ストア
//!
//! 名簿ドキュメントの読み込みライフサイクル（Loading → Loaded / Failed）と
//! 開発チームの部署フィルタを管理する。
//!
//! 取得処理は `RosterSource` で抽象化しており、
//! Web(fetch)・CLI(ファイル/HTTP)・テストで同じストアを使う。

use crate::error::Result;
use crate::types::{DepartmentFilter, TeamMember, TeamRoster};

/// Webアプリが読み込む名簿ドキュメントのパス
pub const DEFAULT_ROSTER_PATH: &str = "/data/teamData.json";

/// 名簿の取得元
#[allow(async_fn_in_trait)]
pub trait RosterSource {
    /// ログ表示用の取得元
    fn describe(&self) -> String;

    /// 名簿を1回取得する
    async fn fetch_roster(&self) -> Result<TeamRoster>;
}

/// 読み込みフェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl LoadPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPhase::Loading => "loading",
            LoadPhase::Loaded => "loaded",
            LoadPhase::Failed => "failed",
        }
    }
}

/// 名簿ストア
///
/// フェーズは Loading から Loaded / Failed のどちらかへ一度だけ遷移する。
/// 失敗時は再試行しない（再マウントのみが復旧手段）。
#[derive(Debug, Clone, Default)]
pub struct TeamDirectoryStore {
    phase: LoadPhase,
    roster: Option<TeamRoster>,
    active_department: DepartmentFilter,
}

impl TeamDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Loaded のときのみ名簿を返す
    pub fn roster(&self) -> Option<&TeamRoster> {
        self.roster.as_ref()
    }

    pub fn active_department(&self) -> DepartmentFilter {
        self.active_department
    }

    /// 取得元から名簿を読み込む
    ///
    /// 取得・パースの失敗は Failed に変換してログに出すだけで、呼び出し元には返さない。
    pub async fn load<S: RosterSource>(&mut self, source: &S) -> LoadPhase {
        if !self.is_loading() {
            log::warn!(
                "roster already resolved ({}), skipping fetch from {}",
                self.phase.as_str(),
                source.describe()
            );
            return self.phase;
        }

        log::debug!("fetching team roster from {}", source.describe());
        let result = source.fetch_roster().await;
        self.resolve(result)
    }

    /// 取得結果を反映する
    ///
    /// 2回目以降の呼び出しは無視される。
    pub fn resolve(&mut self, result: Result<TeamRoster>) -> LoadPhase {
        if !self.is_loading() {
            log::warn!("ignoring roster resolution after phase {}", self.phase.as_str());
            return self.phase;
        }

        match result {
            Ok(roster) => {
                log::debug!(
                    "team roster loaded: {} founders, {} development members",
                    roster.founders.len(),
                    roster.development_team.slices(DepartmentFilter::All).iter().map(|s| s.len()).sum::<usize>()
                );
                self.roster = Some(roster);
                self.phase = LoadPhase::Loaded;
            }
            Err(e) => {
                log::error!("Error fetching team data: {}", e);
                self.phase = LoadPhase::Failed;
            }
        }
        self.phase
    }

    /// 部署フィルタを設定
    pub fn set_department(&mut self, department: DepartmentFilter) {
        self.active_department = department;
    }

    /// 現在のフィルタに一致する開発チームメンバー
    ///
    /// all の場合は frontend, backend, ui の順に連結する。
    /// Loaded 以外では空。呼び出しのたびに再計算する。
    pub fn filtered_members(&self) -> impl Iterator<Item = &TeamMember> + '_ {
        let filter = self.active_department;
        self.roster
            .iter()
            .flat_map(move |roster| roster.development_team.slices(filter))
            .flatten()
    }
}
