//! 名簿取得元テスト
//!
//! ファイルからの読み込みとストアのフェーズ遷移を検証

use about_us::error::AboutUsError;
use about_us::source::{load_store, RosterLocation};
use about_us_common::{DepartmentFilter, LoadPhase, RosterSource, TeamDirectoryStore};
use tempfile::tempdir;

const ROSTER_JSON: &str = r#"{
    "founders": [{"name": "Asha", "role": "Founder", "image": "/team/asha.jpg"}],
    "hrTeam": [{"name": "Meera", "role": "HR Lead", "image": "/team/meera.jpg", "department": "hr"}],
    "marketingTeam": [],
    "developmentTeam": {
        "frontend": [{"name": "Riya", "role": "Frontend Engineer", "image": "/team/riya.jpg", "department": "frontend"}],
        "backend": [
            {"name": "Dev", "role": "Backend Engineer", "image": "/team/dev.jpg"},
            {"name": "Ira", "role": "Backend Engineer", "image": "/team/ira.jpg"}
        ],
        "ui": [{"name": "Kabir", "role": "Designer", "image": "/team/kabir.jpg", "bio": "Draws things."}]
    }
}"#;

/// 取得元の判別
#[test]
fn test_location_parse() {
    assert_eq!(
        RosterLocation::parse("https://example.com/data/teamData.json").unwrap(),
        RosterLocation::Url("https://example.com/data/teamData.json".to_string())
    );
    assert!(matches!(
        RosterLocation::parse("public/data/teamData.json").unwrap(),
        RosterLocation::File(_)
    ));
    assert!(matches!(RosterLocation::parse("  "), Err(AboutUsError::Config(_))));
}

/// ファイルから読み込んでフィルタ
#[tokio::test]
async fn test_load_store_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("teamData.json");
    std::fs::write(&path, ROSTER_JSON).unwrap();

    let location = RosterLocation::File(path);
    let store = load_store(&location, DepartmentFilter::Backend)
        .await
        .expect("読み込み失敗");

    assert_eq!(store.phase(), LoadPhase::Loaded);
    let names: Vec<&str> = store.filtered_members().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Dev", "Ira"]);
    assert_eq!(store.roster().unwrap().member_count(), 6);
}

/// 存在しないファイルは Failed → RosterLoad エラー
#[tokio::test]
async fn test_load_store_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let location = RosterLocation::File(dir.path().join("missing.json"));

    let result = load_store(&location, DepartmentFilter::All).await;
    assert!(matches!(result, Err(AboutUsError::RosterLoad(_))));
}

/// 不正なJSONも同じく Failed
#[tokio::test]
async fn test_malformed_file_fails_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("teamData.json");
    std::fs::write(&path, r#"{"founders": []"#).unwrap();

    let location = RosterLocation::File(path);
    assert!(location.fetch_roster().await.is_err());

    let mut store = TeamDirectoryStore::new();
    assert_eq!(store.load(&location).await, LoadPhase::Failed);
    assert_eq!(store.filtered_members().count(), 0);
}

/// 取得できないURLも Failed（パニックしない）
#[tokio::test]
async fn test_unreachable_url_fails_store() {
    let location = RosterLocation::Url("http://127.0.0.1:9/teamData.json".to_string());
    let mut store = TeamDirectoryStore::new();
    assert_eq!(store.load(&location).await, LoadPhase::Failed);
}
