use about_us::{audit, browse, cli, config, error, logging, render, source};
use about_us_common::{Section, SelectionController, TeamMember};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{AboutUsError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;
    tracing::debug!(command = ?cli.command, "dispatching command");

    match cli.command {
        Commands::List { department, section, json } => {
            let location = config.roster_location(cli.roster.as_deref())?;
            let department = department.unwrap_or(config.default_department);
            let store = source::load_store(&location, department).await?;
            let Some(roster) = store.roster() else {
                return Err(AboutUsError::RosterLoad(location.to_string()));
            };

            let sections: Vec<Section> = match section {
                Some(s) => vec![s],
                None => Section::ALL.to_vec(),
            };

            if json {
                let mut out = serde_json::Map::new();
                for s in &sections {
                    let members: Vec<&TeamMember> = match s {
                        Section::Development => store.filtered_members().collect(),
                        other => roster.section_members(*other),
                    };
                    out.insert(format!("{:?}", s).to_lowercase(), serde_json::to_value(members)?);
                }
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }

            println!("📋 about-us - 名簿一覧 ({})\n", location);
            for s in &sections {
                match s {
                    Section::Development => {
                        let title = format!("{} [{}]", s.title(), store.active_department().label());
                        print!("{}", render::section_block(&title, store.filtered_members()));
                    }
                    other => print!("{}", render::section_block(other.title(), roster.section_members(*other))),
                }
                println!();
            }
            println!("✔ 合計 {}名", roster.member_count());
        }

        Commands::Show { name } => {
            let location = config.roster_location(cli.roster.as_deref())?;
            let store = source::load_store(&location, config.default_department).await?;
            let found = store.roster().and_then(|r| r.find_by_name(&name));

            let Some((section, member)) = found else {
                return Err(AboutUsError::MemberNotFound(name));
            };

            let mut selection = SelectionController::new();
            selection.select(member.clone());
            if let Some(member) = selection.selected() {
                print!("{}", render::member_detail(Some(section), member));
            }
        }

        Commands::Browse { department } => {
            let location = config.roster_location(cli.roster.as_deref())?;
            let department = department.unwrap_or(config.default_department);
            let mut store = source::load_store(&location, department).await?;
            browse::run_interactive_browse(&mut store)?;
        }

        Commands::Audit { strict } => {
            println!("🔍 about-us - 名簿検査\n");
            let location = config.roster_location(cli.roster.as_deref())?;
            let store = source::load_store(&location, config.default_department).await?;
            let Some(roster) = store.roster() else {
                return Err(AboutUsError::RosterLoad(location.to_string()));
            };

            let issues = audit::audit_roster(roster);
            tracing::info!(issues = issues.len(), strict, "roster audited");
            for issue in &issues {
                let mark = match issue.severity() {
                    audit::Severity::Error => "✘",
                    audit::Severity::Warning => "⚠",
                };
                println!("{} {}", mark, issue);
            }

            let (warnings, errors) = audit::count_by_severity(&issues);
            println!("\n警告: {}件 / エラー: {}件 ({}名を検査)", warnings, errors, roster.member_count());

            let failing = if strict { warnings + errors } else { errors };
            if failing > 0 {
                return Err(AboutUsError::AuditFailed(failing));
            }
            println!("✅ 検査完了");
        }

        Commands::Config { set_roster, show } => {
            let mut config = config;

            if let Some(roster) = set_roster {
                config.set_roster_source(roster)?;
                tracing::info!(roster = %config.roster_source, "roster source saved");
                println!("✔ 名簿の取得元を設定しました");
            }

            if show {
                println!("設定:");
                println!("  名簿: {}", config.roster_source);
                println!("  部署フィルタ: {}", config.default_department);
                if let Ok(value) = std::env::var(config::ROSTER_ENV_VAR) {
                    println!("  {}: {} (優先)", config::ROSTER_ENV_VAR, value);
                }
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
