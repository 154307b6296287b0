//! 名簿ドキュメントの取得（window.fetch）

use about_us_common::{Error, Result, RosterSource, TeamRoster, DEFAULT_ROSTER_PATH};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 静的JSONを fetch で読み込む取得元
#[derive(Debug, Clone)]
pub struct FetchRosterSource {
    path: String,
}

impl FetchRosterSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FetchRosterSource {
    fn default() -> Self {
        Self::new(DEFAULT_ROSTER_PATH)
    }
}

impl RosterSource for FetchRosterSource {
    fn describe(&self) -> String {
        self.path.clone()
    }

    async fn fetch_roster(&self) -> Result<TeamRoster> {
        let resp = fetch(&self.path)
            .await
            .map_err(|e| Error::Fetch(js_error_message(&e)))?;

        if !resp.ok() {
            return Err(Error::Status(resp.status()));
        }

        let json = resp
            .json()
            .map_err(|e| Error::Fetch(js_error_message(&e)))?;
        let json = JsFuture::from(json)
            .await
            .map_err(|e| Error::Fetch(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Fetch(e.to_string()))
    }
}

/// GETリクエスト（共通処理）
async fn fetch(path: &str) -> std::result::Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(path, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
