//! 対話式の名簿ブラウズ
//!
//! 開発チームを部署フィルタ付きで一覧し、選んだメンバーの詳細を開く。
//! 詳細は常に1人分だけ開く（別のメンバーを選ぶと置き換わる）。

use crate::error::Result;
use crate::render;
use about_us_common::{DepartmentFilter, Section, SelectionController, TeamDirectoryStore, TeamMember};
use dialoguer::Select;

/// メニュー選択の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// メンバー詳細を開く
    Open(TeamMember),
    /// 部署フィルタを切り替える
    ChangeDepartment,
    /// 終了
    Quit,
}

/// 一覧メニューの項目（メンバー + 操作）
pub fn menu_items(members: &[TeamMember]) -> Vec<String> {
    let mut items: Vec<String> = members
        .iter()
        .map(|m| render::member_line(m).trim_start_matches(['-', ' ']).to_string())
        .collect();
    items.push("[部署を切り替える]".to_string());
    items.push("[終了]".to_string());
    items
}

/// メニューの選択番号をアクションに変換（Esc は None）
pub fn resolve_choice(members: &[TeamMember], choice: Option<usize>) -> BrowseAction {
    match choice {
        Some(i) if i < members.len() => BrowseAction::Open(members[i].clone()),
        Some(i) if i == members.len() => BrowseAction::ChangeDepartment,
        _ => BrowseAction::Quit,
    }
}

/// 対話式でブラウズ
pub fn run_interactive_browse(store: &mut TeamDirectoryStore) -> Result<()> {
    let mut selection = SelectionController::new();

    loop {
        let members: Vec<TeamMember> = store.filtered_members().cloned().collect();
        println!(
            "\n👥 {} / {} ({}名)",
            Section::Development.title(),
            store.active_department().label(),
            members.len()
        );

        let items = menu_items(&members);
        let choice = Select::new()
            .with_prompt("メンバーを選択 (Escで終了)")
            .items(&items)
            .default(0)
            .interact_opt()?;

        match resolve_choice(&members, choice) {
            BrowseAction::Open(member) => {
                selection.select(member);
                if let Some(member) = selection.selected() {
                    println!("\n{}", render::member_detail(Some(Section::Development), member));
                }

                let next = Select::new()
                    .with_prompt("詳細")
                    .items(&["閉じる", "終了"])
                    .default(0)
                    .interact_opt()?;
                selection.clear();
                if next != Some(0) {
                    break;
                }
            }
            BrowseAction::ChangeDepartment => {
                let labels: Vec<&str> = DepartmentFilter::ALL.iter().map(|d| d.label()).collect();
                let current = DepartmentFilter::ALL
                    .iter()
                    .position(|d| *d == store.active_department())
                    .unwrap_or(0);
                if let Some(i) = Select::new()
                    .with_prompt("部署")
                    .items(&labels)
                    .default(current)
                    .interact_opt()?
                {
                    store.set_department(DepartmentFilter::ALL[i]);
                }
            }
            BrowseAction::Quit => break,
        }
    }

    println!("✔ 終了しました");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members() -> Vec<TeamMember> {
        vec![
            TeamMember {
                name: "A".to_string(),
                role: "Dev".to_string(),
                ..Default::default()
            },
            TeamMember {
                name: "B".to_string(),
                role: "Designer".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_menu_items() {
        let items = menu_items(&members());
        assert_eq!(items, vec!["A (Dev)", "B (Designer)", "[部署を切り替える]", "[終了]"]);
    }

    #[test]
    fn test_resolve_choice() {
        let members = members();
        assert_eq!(resolve_choice(&members, Some(1)), BrowseAction::Open(members[1].clone()));
        assert_eq!(resolve_choice(&members, Some(2)), BrowseAction::ChangeDepartment);
        assert_eq!(resolve_choice(&members, Some(3)), BrowseAction::Quit);
        assert_eq!(resolve_choice(&members, None), BrowseAction::Quit);
    }

    #[test]
    fn test_menu_items_empty_department() {
        assert_eq!(menu_items(&[]).len(), 2);
        assert_eq!(resolve_choice(&[], Some(0)), BrowseAction::ChangeDepartment);
    }
}
