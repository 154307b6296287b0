//! 名簿の検査
//!
//! - 一覧内の名前の重複（表示キーが衝突する）
//! - 空の名前
//! - 未知の department 値
//! - department フィールドと配置先サブコレクションの不一致
//!
//! department は表示用でフィルタには使われないため、不一致は警告扱い。

use about_us_common::{Department, TeamMember, TeamRoster};
use std::collections::HashSet;
use std::fmt;

/// 深刻度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// 検出された問題
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditIssue {
    DuplicateName { listing: &'static str, name: String },
    EmptyName { listing: &'static str, index: usize },
    UnknownDepartment { listing: &'static str, name: String },
    DepartmentMismatch {
        listing: &'static str,
        name: String,
        declared: Department,
        placed: Department,
    },
}

impl AuditIssue {
    pub fn severity(&self) -> Severity {
        match self {
            AuditIssue::DuplicateName { .. } | AuditIssue::EmptyName { .. } => Severity::Error,
            AuditIssue::UnknownDepartment { .. } | AuditIssue::DepartmentMismatch { .. } => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditIssue::DuplicateName { listing, name } => {
                write!(f, "{}: 名前が重複しています: {}", listing, name)
            }
            AuditIssue::EmptyName { listing, index } => {
                write!(f, "{}[{}]: 名前が空です", listing, index)
            }
            AuditIssue::UnknownDepartment { listing, name } => {
                write!(f, "{}: {} の department が未知の値です", listing, name)
            }
            AuditIssue::DepartmentMismatch { listing, name, declared, placed } => write!(
                f,
                "{}: {} の department が \"{}\" ですが \"{}\" に配置されています",
                listing, name, declared, placed
            ),
        }
    }
}

/// 各一覧（JSON上のパス, メンバー, 期待する部署）
fn listings(roster: &TeamRoster) -> Vec<(&'static str, &[TeamMember], Option<Department>)> {
    let dev = &roster.development_team;
    vec![
        ("founders", roster.founders.as_slice(), None),
        ("hrTeam", roster.hr_team.as_slice(), Some(Department::Hr)),
        ("marketingTeam", roster.marketing_team.as_slice(), Some(Department::Marketing)),
        ("developmentTeam.frontend", dev.frontend.as_slice(), Some(Department::Frontend)),
        ("developmentTeam.backend", dev.backend.as_slice(), Some(Department::Backend)),
        ("developmentTeam.ui", dev.ui.as_slice(), Some(Department::Ui)),
    ]
}

/// 名簿を検査して問題の一覧を返す
pub fn audit_roster(roster: &TeamRoster) -> Vec<AuditIssue> {
    let mut issues = Vec::new();

    for (listing, members, expected) in listings(roster) {
        let mut seen = HashSet::new();
        for (index, member) in members.iter().enumerate() {
            if member.name.trim().is_empty() {
                issues.push(AuditIssue::EmptyName { listing, index });
                continue;
            }
            if !seen.insert(member.name.as_str()) {
                issues.push(AuditIssue::DuplicateName {
                    listing,
                    name: member.name.clone(),
                });
            }
            if member.department == Some(Department::Unknown) {
                issues.push(AuditIssue::UnknownDepartment {
                    listing,
                    name: member.name.clone(),
                });
            } else if let (Some(declared), Some(placed)) = (member.department, expected) {
                if declared != placed {
                    issues.push(AuditIssue::DepartmentMismatch {
                        listing,
                        name: member.name.clone(),
                        declared,
                        placed,
                    });
                }
            }
        }
    }

    issues
}

/// 深刻度ごとの件数（警告, エラー）
pub fn count_by_severity(issues: &[AuditIssue]) -> (usize, usize) {
    let errors = issues.iter().filter(|i| i.severity() == Severity::Error).count();
    (issues.len() - errors, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use about_us_common::DevelopmentTeam;

    fn member(name: &str, department: Option<Department>) -> TeamMember {
        TeamMember {
            name: name.to_string(),
            role: "Dev".to_string(),
            department,
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_roster_has_no_issues() {
        let roster = TeamRoster {
            founders: vec![member("Asha", None)],
            hr_team: vec![member("Meera", Some(Department::Hr))],
            development_team: DevelopmentTeam {
                frontend: vec![member("Riya", Some(Department::Frontend))],
                backend: vec![member("Dev", None)],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(audit_roster(&roster).is_empty());
    }

    #[test]
    fn test_duplicate_within_listing() {
        let roster = TeamRoster {
            development_team: DevelopmentTeam {
                ui: vec![member("Kabir", None), member("Kabir", None)],
                ..Default::default()
            },
            ..Default::default()
        };
        let issues = audit_roster(&roster);
        assert_eq!(
            issues,
            vec![AuditIssue::DuplicateName {
                listing: "developmentTeam.ui",
                name: "Kabir".to_string()
            }]
        );
        assert_eq!(issues[0].severity(), Severity::Error);
    }

    #[test]
    fn test_same_name_across_listings_allowed() {
        let roster = TeamRoster {
            founders: vec![member("Asha", None)],
            development_team: DevelopmentTeam {
                backend: vec![member("Asha", None)],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(audit_roster(&roster).is_empty());
    }

    #[test]
    fn test_department_mismatch_is_warning() {
        let roster = TeamRoster {
            development_team: DevelopmentTeam {
                frontend: vec![member("Riya", Some(Department::Backend))],
                ..Default::default()
            },
            ..Default::default()
        };
        let issues = audit_roster(&roster);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity(), Severity::Warning);
        assert!(issues[0].to_string().contains("Riya"));
        assert_eq!(count_by_severity(&issues), (1, 0));
    }

    #[test]
    fn test_unknown_department_is_warning() {
        let json = r#"{
            "founders": [],
            "developmentTeam": {
                "frontend": [{"name": "A", "role": "Dev", "department": "design"}],
                "backend": [],
                "ui": []
            }
        }"#;
        let roster = TeamRoster::from_json(json).expect("読み込み失敗");
        let issues = audit_roster(&roster);
        assert_eq!(
            issues,
            vec![AuditIssue::UnknownDepartment {
                listing: "developmentTeam.frontend",
                name: "A".to_string()
            }]
        );
        assert_eq!(count_by_severity(&issues), (1, 0));
    }

    #[test]
    fn test_empty_name() {
        let roster = TeamRoster {
            marketing_team: vec![member("  ", None)],
            ..Default::default()
        };
        assert_eq!(
            audit_roster(&roster),
            vec![AuditIssue::EmptyName { listing: "marketingTeam", index: 0 }]
        );
    }
}
