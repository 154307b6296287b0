//! スクロール連動の表示コンポーネント

use about_us_common::animation::{animation_style, reveal_specs, ScrollReveal};
use about_us_common::ScrollTrigger;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

/// 画面内に入ったら一度だけフェードインする
#[component]
pub fn Reveal(
    /// 要素id（アニメーション記述子のターゲット）
    target: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let specs = reveal_specs(target);
    let trigger = specs
        .iter()
        .find_map(|s| s.scroll_trigger)
        .unwrap_or(ScrollTrigger::new(0.85, 0.6));
    let reveal = RwSignal::new(ScrollReveal::new(trigger));
    let node = NodeRef::<Div>::new();

    let check = move || {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let top = el.get_bounding_client_rect().top();
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        if !reveal.with_untracked(|r| r.is_revealed()) {
            reveal.try_update(|r| r.update(top, viewport));
        }
    };

    // 初期表示時点で画面内にある場合
    Effect::new(move |_| {
        if node.get().is_some() {
            check();
        }
    });

    let handle = window_event_listener(ev::scroll, move |_| check());
    on_cleanup(move || handle.remove());

    let style = move || {
        if reveal.with(|r| r.is_revealed()) {
            animation_style(&specs)
        } else {
            "opacity: 0;".to_string()
        }
    };

    view! {
        <div node_ref=node id=target class=class style=style>
            {children()}
        </div>
    }
}
