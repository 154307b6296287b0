//! ヒーローセクション

use super::floating_shapes::{AnimationStyles, FloatingShapes};
use super::reveal::Reveal;
use super::stats_counter::StatsCounter;
use about_us_common::hero::{
    PhraseRotator, HERO_BODY, HERO_CTA_LABEL, HERO_HEADLINE, HERO_IMAGE, PHRASE_INTERVAL_MS,
};
use leptos::prelude::*;
use std::time::Duration;

#[component]
pub fn HeroSection() -> impl IntoView {
    let rotator = RwSignal::new(PhraseRotator::default());

    let rotation = set_interval_with_handle(
        move || {
            rotator.try_update(|r| {
                r.advance();
            });
        },
        Duration::from_millis(PHRASE_INTERVAL_MS as u64),
    );
    match rotation {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("phrase rotation timer failed: {:?}", e),
    }

    view! {
        <section class="hero">
            <AnimationStyles />
            <FloatingShapes />

            <div class="hero-inner">
                <div class="hero-grid">
                    <Reveal target="hero-copy" class="hero-copy">
                        <h1 class="hero-headline">{HERO_HEADLINE}</h1>
                        <p class="hero-phrase">
                            {move || rotator.with(|r| r.current().to_string())}
                        </p>
                        <p class="hero-body">{HERO_BODY}</p>
                        <div class="hero-cta">
                            <button type="button" class="btn btn-outline">
                                {HERO_CTA_LABEL}
                                <span class="hero-cta-arrow">"→"</span>
                            </button>
                        </div>
                    </Reveal>

                    <Reveal target="hero-image" class="hero-image">
                        <img src=HERO_IMAGE alt="Team collaboration" />
                    </Reveal>
                </div>

                <Reveal target="hero-stats" class="hero-stats">
                    <StatsCounter />
                </Reveal>
            </div>
        </section>
    }
}
