//! 背景の浮遊シェイプ

use about_us_common::animation::{all_specs, animation_style, floating_shapes, stylesheet};
use leptos::prelude::*;

/// アニメーション記述子から生成した @keyframes
#[component]
pub fn AnimationStyles() -> impl IntoView {
    let css = stylesheet(&all_specs());
    view! { <style>{css}</style> }
}

#[component]
pub fn FloatingShapes() -> impl IntoView {
    view! {
        <div class="hero-shapes" aria-hidden="true">
            {floating_shapes()
                .into_iter()
                .map(|shape| {
                    let style = format!("{} {}", shape.position_style(), animation_style(&shape.animations));
                    view! {
                        <div
                            id=shape.id.clone()
                            class=format!("hero-shape {}", shape.kind.css_class())
                            style=style
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
