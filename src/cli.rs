use about_us_common::{DepartmentFilter, Section};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "about-us")]
#[command(about = "About Us チーム名簿ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 名簿JSONのパスまたはURL（環境変数 ABOUT_US_ROSTER・設定より優先）
    #[arg(long, global = true)]
    pub roster: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 名簿を一覧表示
    List {
        /// 開発チームの部署フィルタ (all/frontend/backend/ui)
        #[arg(short, long)]
        department: Option<DepartmentFilter>,

        /// 表示するセクション (founders/hr/marketing/development)、省略時は全セクション
        #[arg(short, long)]
        section: Option<Section>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// メンバーの詳細を表示
    Show {
        /// メンバー名（大文字小文字は区別しない）
        #[arg(required = true)]
        name: String,
    },

    /// 対話的に開発チームをブラウズ
    Browse {
        /// 初期の部署フィルタ
        #[arg(short, long)]
        department: Option<DepartmentFilter>,
    },

    /// 名簿を検査（名前の重複・部署の不一致）
    Audit {
        /// 警告もエラーとして扱う
        #[arg(long)]
        strict: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 名簿の取得元を設定
        #[arg(long)]
        set_roster: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_filter() {
        let cli = Cli::try_parse_from(["about-us", "list", "--department", "backend", "--section", "development"])
            .expect("パース失敗");
        match cli.command {
            Commands::List { department, section, json } => {
                assert_eq!(department, Some(DepartmentFilter::Backend));
                assert_eq!(section, Some(Section::Development));
                assert!(!json);
            }
            _ => panic!("list が期待される"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_department() {
        assert!(Cli::try_parse_from(["about-us", "list", "--department", "sales"]).is_err());
    }

    #[test]
    fn test_global_roster_flag() {
        let cli = Cli::try_parse_from(["about-us", "audit", "--roster", "https://example.com/teamData.json"])
            .expect("パース失敗");
        assert_eq!(cli.roster.as_deref(), Some("https://example.com/teamData.json"));
        assert!(matches!(cli.command, Commands::Audit { strict: false }));
    }
}
