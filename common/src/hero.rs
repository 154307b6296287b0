//! ヒーローセクションの表示モデル
//!
//! - PhraseRotator: キャッチコピーのローテーション
//! - CounterCycle: 統計カウンタのリセット周期
//! - StatCounter: カウントアップ表示（ease-out-expo、2.5秒）
//!
//! タイマー自体はWeb側（leptos の set_interval_with_handle）が持ち、ここでは状態遷移だけを扱う。

/// 見出し
pub const HERO_HEADLINE: &str = "Empower. Shop. Sustain.";

/// 本文
pub const HERO_BODY: &str = "Empowering local vendors, enhancing shopping experiences, and promoting \
sustainable fashion create a more ethical and vibrant marketplace. Supporting small businesses brings \
unique products to consumers, while seamless shopping experiences make fashion more accessible. \
Promoting sustainability encourages mindful choices, reducing environmental impact and fostering a \
responsible shopping culture.";

pub const HERO_CTA_LABEL: &str = "Learn More";

pub const HERO_IMAGE: &str = "/homeimage.png";

/// ローテーション表示するフレーズ
pub const HERO_PHRASES: [&str; 3] = [
    "Empowering local vendors",
    "Enhancing shopping experiences",
    "Promoting sustainable fashion",
];

/// フレーズ切り替え間隔
pub const PHRASE_INTERVAL_MS: u32 = 3_000;

/// カウンタのリセット間隔
pub const COUNTER_RESET_MS: u32 = 5_000;

/// カウントアップの所要時間
pub const COUNT_UP_DURATION_MS: u32 = 2_500;

/// 統計カウンタ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCounter {
    pub end: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [StatCounter; 4] = [
    StatCounter { end: 1_000, suffix: "+", label: "Vendors Listed" },
    StatCounter { end: 124_222, suffix: "+", label: "Orders Daily" },
    StatCounter { end: 50, suffix: "+", label: "Big Brands" },
    StatCounter { end: 99, suffix: "%", label: "User Satisfied" },
];

impl StatCounter {
    /// 経過時間に対するカウンタ値（0 から end まで）
    pub fn value_at(&self, elapsed_ms: u32) -> u64 {
        if elapsed_ms >= COUNT_UP_DURATION_MS {
            return self.end;
        }
        let t = elapsed_ms as f64 / COUNT_UP_DURATION_MS as f64;
        let eased = ((1.0 - 2f64.powf(-10.0 * t)) * 1024.0 / 1023.0).clamp(0.0, 1.0);
        ((self.end as f64) * eased).round().min(self.end as f64) as u64
    }

    /// 区切り文字と接尾辞付きの表示文字列
    pub fn display_at(&self, elapsed_ms: u32) -> String {
        format!("{}{}", format_thousands(self.value_at(elapsed_ms)), self.suffix)
    }
}

/// 3桁区切り（","）
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// フレーズのローテーション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRotator {
    phrases: Vec<String>,
    index: usize,
}

impl PhraseRotator {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        self.phrases.get(self.index).map(String::as_str).unwrap_or("")
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 次のフレーズへ（末尾の次は先頭）
    pub fn advance(&mut self) -> &str {
        if !self.phrases.is_empty() {
            self.index = (self.index + 1) % self.phrases.len();
        }
        self.current()
    }
}

impl Default for PhraseRotator {
    fn default() -> Self {
        Self::new(HERO_PHRASES)
    }
}

/// カウンタのリセット周期
///
/// key が変わるたびに全カウンタが 0 から再スタートする。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterCycle {
    key: u64,
    elapsed_ms: u32,
}

impl CounterCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    /// 現サイクル開始からの経過時間
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// 経過時間を進める（所要時間で頭打ち）
    pub fn tick(&mut self, delta_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms).min(COUNT_UP_DURATION_MS);
    }

    /// 新しいサイクルを開始
    pub fn bump(&mut self) {
        self.key = self.key.wrapping_add(1);
        self.elapsed_ms = 0;
    }

    /// アニメーション中か
    pub fn is_counting(&self) -> bool {
        self.elapsed_ms < COUNT_UP_DURATION_MS
    }
}
