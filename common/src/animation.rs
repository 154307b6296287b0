//! 宣言的アニメーション定義
//!
//! ヒーローセクションの浮遊シェイプ（ループ）とスクロール連動の表示アニメーションを
//! 記述子のリストとして持つ。ブラウザ側ではCSSアニメーションに変換して再生する。

use std::collections::HashSet;
use std::fmt::Write as _;

/// アニメーション対象のプロパティ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// px
    TranslateX,
    /// px
    TranslateY,
    /// deg
    Rotate,
    Scale,
    Opacity,
}

impl AnimatedProperty {
    fn slug(&self) -> &'static str {
        match self {
            AnimatedProperty::TranslateX => "tx",
            AnimatedProperty::TranslateY => "ty",
            AnimatedProperty::Rotate => "rot",
            AnimatedProperty::Scale => "scale",
            AnimatedProperty::Opacity => "fade",
        }
    }

    /// CSS宣言（個別トランスフォームプロパティを使うので同一要素で重ねがけできる）
    pub fn css_declaration(&self, value: f64) -> String {
        match self {
            AnimatedProperty::TranslateX => format!("translate: {}px 0;", trim_float(value)),
            AnimatedProperty::TranslateY => format!("translate: 0 {}px;", trim_float(value)),
            AnimatedProperty::Rotate => format!("rotate: {}deg;", trim_float(value)),
            AnimatedProperty::Scale => format!("scale: {};", trim_float(value)),
            AnimatedProperty::Opacity => format!("opacity: {};", trim_float(value)),
        }
    }
}

/// イージング
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
    EaseOut,
}

impl Easing {
    pub fn css_name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseOut => "ease-out",
        }
    }

    /// 0.0..=1.0 の進捗に適用（sine系）
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
            Easing::EaseOut => ((t * std::f64::consts::PI) / 2.0).sin(),
        }
    }
}

/// 繰り返し回数（Count(n) は初回に加えて n 回）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    Count(u32),
    Infinite,
}

impl Repeat {
    fn iterations(&self) -> Option<u64> {
        match self {
            Repeat::Once => Some(1),
            Repeat::Count(n) => Some(*n as u64 + 1),
            Repeat::Infinite => None,
        }
    }

    fn css_iteration_count(&self) -> String {
        match self.iterations() {
            Some(n) => n.to_string(),
            None => "infinite".to_string(),
        }
    }
}

/// スクロール連動の発火範囲（ビューポート高さに対する割合）
///
/// 要素の上端が `start` の位置に来たら進捗 0、`end` の位置で進捗 1。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    pub start: f64,
    pub end: f64,
}

impl ScrollTrigger {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// スクロール進捗（0.0..=1.0）
    ///
    /// ブラウザでは `is_triggered` だけを使い、補間はCSSアニメーションが行う。
    /// こちらはネイティブ側で発火範囲を検証するためのモデル計算。
    pub fn progress(&self, element_top: f64, viewport_height: f64) -> f64 {
        if viewport_height <= 0.0 {
            return 0.0;
        }
        let start_px = self.start * viewport_height;
        let end_px = self.end * viewport_height;
        let span = start_px - end_px;
        if span <= 0.0 {
            return if element_top <= start_px { 1.0 } else { 0.0 };
        }
        ((start_px - element_top) / span).clamp(0.0, 1.0)
    }

    pub fn is_triggered(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top <= self.start * viewport_height && viewport_height > 0.0
    }
}

/// 一度だけ発火する表示ラッチ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReveal {
    trigger: ScrollTrigger,
    revealed: bool,
}

impl ScrollReveal {
    pub fn new(trigger: ScrollTrigger) -> Self {
        Self { trigger, revealed: false }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// スクロール位置を反映し、表示済みかを返す（一度表示したら戻らない）
    pub fn update(&mut self, element_top: f64, viewport_height: f64) -> bool {
        if !self.revealed && self.trigger.is_triggered(element_top, viewport_height) {
            self.revealed = true;
        }
        self.revealed
    }
}

/// アニメーション記述子
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSpec {
    /// 対象要素のid
    pub target: String,
    pub property: AnimatedProperty,
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub repeat: Repeat,
    /// 往復再生
    pub yoyo: bool,
    pub scroll_trigger: Option<ScrollTrigger>,
}

impl AnimationSpec {
    pub fn new(target: impl Into<String>, property: AnimatedProperty, from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            target: target.into(),
            property,
            from,
            to,
            duration_ms,
            delay_ms: 0,
            easing: Easing::default(),
            repeat: Repeat::Once,
            yoyo: false,
            scroll_trigger: None,
        }
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// 無限ループ + 往復
    pub fn looping(mut self) -> Self {
        self.repeat = Repeat::Infinite;
        self.yoyo = true;
        self
    }

    pub fn repeat(mut self, repeat: Repeat, yoyo: bool) -> Self {
        self.repeat = repeat;
        self.yoyo = yoyo;
        self
    }

    pub fn on_scroll(mut self, trigger: ScrollTrigger) -> Self {
        self.scroll_trigger = Some(trigger);
        self
    }

    /// 経過時間における値
    ///
    /// `to_css_animation` が出力するCSSと同じ補間をRust側で再現するモデル計算。
    /// ブラウザ描画では使わず、記述子のタイミング検証に使う。
    pub fn sample(&self, elapsed_ms: u64) -> f64 {
        if elapsed_ms < self.delay_ms as u64 {
            return self.from;
        }
        let local = elapsed_ms - self.delay_ms as u64;
        let duration = self.duration_ms as u64;
        if duration == 0 {
            return self.end_value();
        }

        let iteration = local / duration;
        if let Some(total) = self.repeat.iterations() {
            if iteration >= total {
                return self.end_value();
            }
        }

        let frac = (local % duration) as f64 / duration as f64;
        let progress = if self.yoyo && iteration % 2 == 1 {
            self.easing.apply(1.0 - frac)
        } else {
            self.easing.apply(frac)
        };
        self.from + (self.to - self.from) * progress
    }

    /// 再生終了後の値（往復で偶数回なら from に戻る）
    pub fn end_value(&self) -> f64 {
        match self.repeat.iterations() {
            Some(total) if self.yoyo && total % 2 == 0 => self.from,
            _ => self.to,
        }
    }

    /// @keyframes 名
    pub fn keyframes_name(&self) -> String {
        format!("{}-{}", self.target, self.property.slug())
    }

    pub fn to_css_keyframes(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
            self.keyframes_name(),
            self.property.css_declaration(self.from),
            self.property.css_declaration(self.to),
        )
    }

    /// animation ショートハンドの値
    pub fn to_css_animation(&self) -> String {
        format!(
            "{} {}ms {} {}ms {} {} both",
            self.keyframes_name(),
            self.duration_ms,
            self.easing.css_name(),
            self.delay_ms,
            self.repeat.css_iteration_count(),
            if self.yoyo { "alternate" } else { "normal" },
        )
    }
}

/// 記述子群を1つのスタイルシートに（同名の @keyframes は1回だけ）
pub fn stylesheet(specs: &[AnimationSpec]) -> String {
    let mut seen = HashSet::new();
    let mut css = String::new();
    for spec in specs {
        if seen.insert(spec.keyframes_name()) {
            let _ = writeln!(css, "{}", spec.to_css_keyframes());
        }
    }
    css
}

/// 要素の style 属性用（複数アニメーションはカンマ区切り）
pub fn animation_style<'a>(specs: impl IntoIterator<Item = &'a AnimationSpec>) -> String {
    let values: Vec<String> = specs.into_iter().map(AnimationSpec::to_css_animation).collect();
    if values.is_empty() {
        String::new()
    } else {
        format!("animation: {};", values.join(", "))
    }
}

/// シェイプの形状
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Ring,
}

impl ShapeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "shape-circle",
            ShapeKind::Square => "shape-square",
            ShapeKind::Triangle => "shape-triangle",
            ShapeKind::Ring => "shape-ring",
        }
    }
}

/// 浮遊シェイプ
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingShape {
    pub id: String,
    pub kind: ShapeKind,
    pub size_px: u32,
    pub left_pct: f64,
    pub top_pct: f64,
    pub animations: Vec<AnimationSpec>,
}

impl FloatingShape {
    pub fn position_style(&self) -> String {
        format!(
            "left: {}%; top: {}%; width: {}px; height: {}px;",
            trim_float(self.left_pct),
            trim_float(self.top_pct),
            self.size_px,
            self.size_px,
        )
    }
}

pub const FLOATING_SHAPE_COUNT: usize = 10;

/// ヒーロー背景の浮遊シェイプ（各シェイプは独立にループする）
pub fn floating_shapes() -> Vec<FloatingShape> {
    const KINDS: [ShapeKind; 4] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Ring];

    (0..FLOATING_SHAPE_COUNT)
        .map(|i| {
            let id = format!("hero-shape-{}", i + 1);
            let n = i as f64;
            let drift = 12.0 + (i % 4) as f64 * 6.0;
            let float_ms = 4_000 + (i as u32 % 5) * 700;

            let mut animations = vec![AnimationSpec::new(&id, AnimatedProperty::TranslateY, -drift, drift, float_ms)
                .delay((i as u32 * 350) % 2_000)
                .looping()];
            if i % 2 == 0 {
                animations.push(
                    AnimationSpec::new(&id, AnimatedProperty::Rotate, 0.0, if i % 4 == 0 { 360.0 } else { -360.0 }, 12_000 + i as u32 * 1_000)
                        .easing(Easing::Linear)
                        .repeat(Repeat::Infinite, false),
                );
            } else {
                animations.push(
                    AnimationSpec::new(&id, AnimatedProperty::Scale, 0.85, 1.15, 3_000 + i as u32 * 200)
                        .looping(),
                );
            }

            FloatingShape {
                id,
                kind: KINDS[i % KINDS.len()],
                size_px: 24 + (i as u32 % 3) * 16,
                left_pct: (7.0 + n * 9.3) % 95.0,
                top_pct: (11.0 + n * 23.0) % 90.0,
                animations,
            }
        })
        .collect()
}

/// スクロール連動の表示対象
pub const REVEAL_TARGETS: [&str; 4] = ["hero-copy", "hero-image", "hero-stats", "team-heading"];

/// 一度だけ再生される表示アニメーション（フェードイン + 下から持ち上げ）
pub fn reveal_specs(target: &str) -> Vec<AnimationSpec> {
    let trigger = ScrollTrigger::new(0.85, 0.6);
    vec![
        AnimationSpec::new(target, AnimatedProperty::Opacity, 0.0, 1.0, 800)
            .easing(Easing::EaseOut)
            .on_scroll(trigger),
        AnimationSpec::new(target, AnimatedProperty::TranslateY, 40.0, 0.0, 800)
            .easing(Easing::EaseOut)
            .on_scroll(trigger),
    ]
}

/// 全アニメーション記述子（スタイルシート生成用）
pub fn all_specs() -> Vec<AnimationSpec> {
    floating_shapes()
        .into_iter()
        .flat_map(|s| s.animations)
        .chain(REVEAL_TARGETS.iter().flat_map(|t| reveal_specs(t)))
        .collect()
}

fn trim_float(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_sample_respects_delay() {
        let spec = AnimationSpec::new("s", AnimatedProperty::Opacity, 0.0, 1.0, 1_000).delay(500);
        assert!(approx(spec.sample(0), 0.0));
        assert!(approx(spec.sample(499), 0.0));
    }

    #[test]
    fn test_sample_once_holds_end_value() {
        let spec = AnimationSpec::new("s", AnimatedProperty::Scale, 1.0, 2.0, 1_000).easing(Easing::Linear);
        assert!(approx(spec.sample(500), 1.5));
        assert!(approx(spec.sample(1_000), 2.0));
        assert!(approx(spec.sample(10_000), 2.0));
    }

    #[test]
    fn test_sample_yoyo_reverses() {
        let spec = AnimationSpec::new("s", AnimatedProperty::TranslateY, 0.0, 10.0, 1_000)
            .easing(Easing::Linear)
            .looping();
        assert!(approx(spec.sample(250), 2.5));
        assert!(approx(spec.sample(1_250), 7.5));
        assert!(approx(spec.sample(2_250), 2.5));
    }

    #[test]
    fn test_repeat_count_yoyo_end_value() {
        let even = AnimationSpec::new("s", AnimatedProperty::Opacity, 0.0, 1.0, 100).repeat(Repeat::Count(1), true);
        assert!(approx(even.sample(1_000), 0.0));
        let odd = AnimationSpec::new("s", AnimatedProperty::Opacity, 0.0, 1.0, 100).repeat(Repeat::Count(2), true);
        assert!(approx(odd.sample(1_000), 1.0));
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut, Easing::EaseOut] {
            assert!(approx(easing.apply(0.0), 0.0));
            assert!(approx(easing.apply(1.0), 1.0));
        }
    }

    #[test]
    fn test_css_output() {
        let spec = AnimationSpec::new("hero-shape-1", AnimatedProperty::TranslateY, -12.0, 12.0, 4_000).looping();
        assert_eq!(
            spec.to_css_keyframes(),
            "@keyframes hero-shape-1-ty { from { translate: 0 -12px; } to { translate: 0 12px; } }"
        );
        assert_eq!(
            spec.to_css_animation(),
            "hero-shape-1-ty 4000ms ease-in-out 0ms infinite alternate both"
        );
    }

    #[test]
    fn test_stylesheet_deduplicates() {
        let spec = AnimationSpec::new("a", AnimatedProperty::Rotate, 0.0, 360.0, 1_000);
        let css = stylesheet(&[spec.clone(), spec]);
        assert_eq!(css.matches("@keyframes").count(), 1);
    }

    #[test]
    fn test_animation_style_joins() {
        let shapes = floating_shapes();
        let style = animation_style(&shapes[0].animations);
        assert!(style.starts_with("animation: hero-shape-1-ty"));
        assert!(style.contains(", hero-shape-1-rot"));
        assert_eq!(animation_style(&[]), "");
    }

    #[test]
    fn test_floating_shapes_are_independent_loops() {
        let shapes = floating_shapes();
        assert_eq!(shapes.len(), FLOATING_SHAPE_COUNT);
        for shape in &shapes {
            assert!(shape.animations.iter().all(|a| a.repeat == Repeat::Infinite));
            assert!(shape.animations.iter().all(|a| a.scroll_trigger.is_none()));
            assert!(shape.animations.iter().all(|a| a.target == shape.id));
        }
        let ids: HashSet<&str> = shapes.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), FLOATING_SHAPE_COUNT);
    }

    #[test]
    fn test_scroll_trigger_progress() {
        let trigger = ScrollTrigger::new(0.8, 0.4);
        assert!(approx(trigger.progress(900.0, 1_000.0), 0.0));
        assert!(approx(trigger.progress(600.0, 1_000.0), 0.5));
        assert!(approx(trigger.progress(100.0, 1_000.0), 1.0));
        assert!(approx(trigger.progress(100.0, 0.0), 0.0));
    }

    #[test]
    fn test_scroll_reveal_is_one_shot() {
        let mut reveal = ScrollReveal::new(ScrollTrigger::new(0.85, 0.6));
        assert!(!reveal.update(1_200.0, 1_000.0));
        assert!(reveal.update(800.0, 1_000.0));
        // スクロールで戻っても表示のまま
        assert!(reveal.update(2_000.0, 1_000.0));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_reveal_specs_are_scroll_triggered() {
        let specs = reveal_specs("hero-copy");
        assert!(specs.iter().all(|s| s.scroll_trigger.is_some() && s.repeat == Repeat::Once));
        assert!(approx(specs[0].end_value(), 1.0));
    }
}
