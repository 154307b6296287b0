use thiserror::Error;

#[derive(Error, Debug)]
pub enum AboutUsError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("名簿の読み込みに失敗しました: {0}")]
    RosterLoad(String),

    #[error("メンバーが見つかりません: {0}")]
    MemberNotFound(String),

    #[error("名簿の検査で{0}件の問題が見つかりました")]
    AuditFailed(usize),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Common(#[from] about_us_common::Error),
}

pub type Result<T> = std::result::Result<T, AboutUsError>;
