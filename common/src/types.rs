//! チーム名簿の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - TeamMember: 名簿の1エントリ
//! - DevelopmentTeam: 開発チーム（frontend / backend / ui）
//! - TeamRoster: 名簿ドキュメント全体（/data/teamData.json）

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// メンバーの所属部署（表示用、フィルタには使わない）
///
/// 知らない値は読み込みを失敗させず `Unknown` になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Frontend,
    Backend,
    Ui,
    Hr,
    Marketing,
    #[serde(other)]
    Unknown,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Frontend => "frontend",
            Department::Backend => "backend",
            Department::Ui => "ui",
            Department::Hr => "hr",
            Department::Marketing => "marketing",
            Department::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 開発チームのフィルタ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentFilter {
    #[default]
    All,
    Frontend,
    Backend,
    Ui,
}

impl DepartmentFilter {
    /// フィルタボタンの表示順
    pub const ALL: [DepartmentFilter; 4] = [
        DepartmentFilter::All,
        DepartmentFilter::Frontend,
        DepartmentFilter::Backend,
        DepartmentFilter::Ui,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DepartmentFilter::All => "all",
            DepartmentFilter::Frontend => "frontend",
            DepartmentFilter::Backend => "backend",
            DepartmentFilter::Ui => "ui",
        }
    }

    /// ボタン表示名（先頭のみ大文字）
    pub fn label(&self) -> &'static str {
        match self {
            DepartmentFilter::All => "All",
            DepartmentFilter::Frontend => "Frontend",
            DepartmentFilter::Backend => "Backend",
            DepartmentFilter::Ui => "Ui",
        }
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DepartmentFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DepartmentFilter::All),
            "frontend" => Ok(DepartmentFilter::Frontend),
            "backend" => Ok(DepartmentFilter::Backend),
            "ui" => Ok(DepartmentFilter::Ui),
            _ => Err(format!("Unknown department: {}. Use all, frontend, backend, or ui", s)),
        }
    }
}

/// 名簿のセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Founders,
    Hr,
    Marketing,
    Development,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Founders,
        Section::Hr,
        Section::Marketing,
        Section::Development,
    ];

    /// セクション見出し
    pub fn title(&self) -> &'static str {
        match self {
            Section::Founders => "Founder & Co-founder",
            Section::Hr => "HR Team",
            Section::Marketing => "Marketing Team",
            Section::Development => "Team Members",
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "founders" | "founder" => Ok(Section::Founders),
            "hr" => Ok(Section::Hr),
            "marketing" => Ok(Section::Marketing),
            "development" | "dev" => Ok(Section::Development),
            _ => Err(format!(
                "Unknown section: {}. Use founders, hr, marketing, or development",
                s
            )),
        }
    }
}

/// 名簿の1エントリ
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// 一覧内で一意なキー
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl TeamMember {
    /// 表示できる部署（未知の値は None）
    pub fn known_department(&self) -> Option<Department> {
        self.department.filter(|d| *d != Department::Unknown)
    }

    /// 設定済みのSNSリンク（表示順: LinkedIn, Twitter, GitHub）
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("LinkedIn", self.linkedin.as_deref()),
            ("Twitter", self.twitter.as_deref()),
            ("GitHub", self.github.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.filter(|u| !u.is_empty()).map(|u| (label, u)))
        .collect()
    }
}

/// 開発チーム
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DevelopmentTeam {
    pub frontend: Vec<TeamMember>,
    pub backend: Vec<TeamMember>,
    pub ui: Vec<TeamMember>,
}

impl DevelopmentTeam {
    /// フィルタに一致するサブコレクションを固定順（frontend, backend, ui）で返す
    ///
    /// 一致しないものは空スライスになる。
    pub fn slices<'a>(&'a self, filter: DepartmentFilter) -> [&'a [TeamMember]; 3] {
        let pick = |wanted: DepartmentFilter, members: &'a [TeamMember]| -> &'a [TeamMember] {
            if filter == DepartmentFilter::All || filter == wanted {
                members
            } else {
                &[]
            }
        };
        [
            pick(DepartmentFilter::Frontend, &self.frontend),
            pick(DepartmentFilter::Backend, &self.backend),
            pick(DepartmentFilter::Ui, &self.ui),
        ]
    }

    /// サブコレクションと配置先の部署のペア
    pub fn placements(&self) -> [(Department, &[TeamMember]); 3] {
        [
            (Department::Frontend, &self.frontend),
            (Department::Backend, &self.backend),
            (Department::Ui, &self.ui),
        ]
    }
}

/// 名簿ドキュメント全体
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoster {
    pub founders: Vec<TeamMember>,

    #[serde(default)]
    pub hr_team: Vec<TeamMember>,

    #[serde(default)]
    pub marketing_team: Vec<TeamMember>,

    pub development_team: DevelopmentTeam,
}

impl TeamRoster {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let roster: Self = serde_json::from_str(json)?;
        Ok(roster)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// セクションのメンバー（開発チームは frontend, backend, ui の順）
    pub fn section_members(&self, section: Section) -> Vec<&TeamMember> {
        match section {
            Section::Founders => self.founders.iter().collect(),
            Section::Hr => self.hr_team.iter().collect(),
            Section::Marketing => self.marketing_team.iter().collect(),
            Section::Development => self
                .development_team
                .slices(DepartmentFilter::All)
                .into_iter()
                .flatten()
                .collect(),
        }
    }

    /// 名前で検索（全セクション、最初の一致）
    pub fn find_by_name(&self, name: &str) -> Option<(Section, &TeamMember)> {
        Section::ALL.into_iter().find_map(|section| {
            self.section_members(section)
                .into_iter()
                .find(|m| m.name.eq_ignore_ascii_case(name))
                .map(|m| (section, m))
        })
    }

    /// 全メンバー数
    pub fn member_count(&self) -> usize {
        Section::ALL
            .iter()
            .map(|s| self.section_members(*s).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> TeamMember {
        TeamMember {
            name: name.to_string(),
            role: "Dev".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_member_deserialize_minimal() {
        let json = r#"{"name": "A", "role": "Dev"}"#;
        let m: TeamMember = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(m.name, "A");
        assert_eq!(m.role, "Dev");
        assert_eq!(m.image, "");
        assert!(m.department.is_none());
        assert!(m.bio.is_none());
    }

    #[test]
    fn test_member_deserialize_full() {
        let json = r#"{
            "name": "Riya",
            "role": "Frontend Engineer",
            "image": "https://res.cloudinary.com/demo/riya.jpg",
            "department": "frontend",
            "linkedin": "https://linkedin.com/in/riya",
            "github": "https://github.com/riya",
            "bio": "Builds the storefront."
        }"#;
        let m: TeamMember = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(m.department, Some(Department::Frontend));
        assert_eq!(m.twitter, None);
        assert_eq!(m.bio.as_deref(), Some("Builds the storefront."));
    }

    #[test]
    fn test_member_unknown_department_is_lenient() {
        let json = r#"{"name": "A", "role": "Dev", "department": "sales"}"#;
        let m: TeamMember = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(m.department, Some(Department::Unknown));
        assert_eq!(m.known_department(), None);
    }

    #[test]
    fn test_member_serialize_skips_none() {
        let json = serde_json::to_string(&member("A")).expect("シリアライズ失敗");
        assert!(!json.contains("linkedin"));
        assert!(!json.contains("department"));
    }

    #[test]
    fn test_social_links_order_and_presence() {
        let m = TeamMember {
            twitter: Some("https://x.com/a".into()),
            linkedin: Some("https://linkedin.com/in/a".into()),
            github: Some(String::new()),
            ..member("A")
        };
        let links = m.social_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].0, "LinkedIn");
        assert_eq!(links[1].0, "Twitter");
    }

    #[test]
    fn test_roster_without_hr_and_marketing() {
        let json = r#"{
            "founders": [{"name": "F", "role": "CEO"}],
            "developmentTeam": {"frontend": [], "backend": [], "ui": []}
        }"#;
        let roster = TeamRoster::from_json(json).expect("読み込み失敗");
        assert!(roster.hr_team.is_empty());
        assert!(roster.marketing_team.is_empty());
        assert_eq!(roster.founders.len(), 1);
    }

    #[test]
    fn test_roster_missing_development_team_rejected() {
        let json = r#"{"founders": [], "hrTeam": [], "marketingTeam": []}"#;
        assert!(TeamRoster::from_json(json).is_err());
    }

    #[test]
    fn test_slices_filter() {
        let dev = DevelopmentTeam {
            frontend: vec![member("F1")],
            backend: vec![member("B1"), member("B2")],
            ui: vec![],
        };
        let [f, b, u] = dev.slices(DepartmentFilter::Backend);
        assert!(f.is_empty());
        assert_eq!(b.len(), 2);
        assert!(u.is_empty());

        let [f, b, _] = dev.slices(DepartmentFilter::All);
        assert_eq!(f.len(), 1);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_find_by_name_across_sections() {
        let roster = TeamRoster {
            founders: vec![member("Asha")],
            hr_team: vec![member("Meera")],
            development_team: DevelopmentTeam {
                ui: vec![member("Kabir")],
                ..Default::default()
            },
            ..Default::default()
        };
        let (section, m) = roster.find_by_name("kabir").expect("見つからない");
        assert_eq!(section, Section::Development);
        assert_eq!(m.name, "Kabir");
        assert_eq!(roster.find_by_name("Meera").map(|(s, _)| s), Some(Section::Hr));
        assert!(roster.find_by_name("nobody").is_none());
        assert_eq!(roster.member_count(), 3);
    }

    #[test]
    fn test_department_filter_from_str() {
        assert_eq!("Backend".parse::<DepartmentFilter>(), Ok(DepartmentFilter::Backend));
        assert_eq!("all".parse::<DepartmentFilter>(), Ok(DepartmentFilter::All));
        assert!("hr".parse::<DepartmentFilter>().is_err());
    }
}
