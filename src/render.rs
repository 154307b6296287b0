//! 名簿のテキスト表示

use about_us_common::{Section, TeamMember};
use std::fmt::Write as _;

/// 一覧の1行
pub fn member_line(member: &TeamMember) -> String {
    let mut line = format!("  - {} ({})", member.name, member.role);
    if let Some(department) = member.known_department() {
        let _ = write!(line, " [{}]", department);
    }
    line
}

/// セクション見出し + メンバー一覧
pub fn section_block<'a>(title: &str, members: impl IntoIterator<Item = &'a TeamMember>) -> String {
    let mut out = format!("■ {}\n", title);
    let mut count = 0;
    for member in members {
        out.push_str(&member_line(member));
        out.push('\n');
        count += 1;
    }
    if count == 0 {
        out.push_str("  (メンバーなし)\n");
    }
    out
}

/// 詳細表示（モーダル相当）
pub fn member_detail(section: Option<Section>, member: &TeamMember) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", member.name);
    let _ = writeln!(out, "  役職: {}", member.role);
    if let Some(section) = section {
        let _ = writeln!(out, "  所属: {}", section.title());
    }
    if let Some(department) = member.known_department() {
        let _ = writeln!(out, "  部署: {}", department);
    }
    if !member.image.is_empty() {
        let _ = writeln!(out, "  画像: {}", member.image);
    }
    for (label, url) in member.social_links() {
        let _ = writeln!(out, "  {}: {}", label, url);
    }
    if let Some(bio) = &member.bio {
        let _ = writeln!(out, "\n  {}", bio);
    }
    out
}
