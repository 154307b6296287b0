//! 統計カウンタ（5秒ごとに0からカウントし直す）

use about_us_common::hero::{CounterCycle, COUNTER_RESET_MS, HERO_STATS};
use leptos::prelude::*;
use std::time::Duration;

const TICK_MS: u32 = 50;

#[component]
pub fn StatsCounter() -> impl IntoView {
    let cycle = RwSignal::new(CounterCycle::new());

    let tick = set_interval_with_handle(
        move || {
            if cycle.with_untracked(|c| c.is_counting()) {
                cycle.try_update(|c| c.tick(TICK_MS));
            }
        },
        Duration::from_millis(TICK_MS as u64),
    );
    let reset = set_interval_with_handle(
        move || {
            cycle.try_update(|c| c.bump());
        },
        Duration::from_millis(COUNTER_RESET_MS as u64),
    );
    if let Err(e) = &tick {
        log::error!("counter tick timer failed: {:?}", e);
    }
    if let Err(e) = &reset {
        log::error!("counter reset timer failed: {:?}", e);
    }

    // アンマウント時にタイマーを明示的に止める
    let handles = [tick.ok(), reset.ok()];
    on_cleanup(move || {
        for handle in handles.into_iter().flatten() {
            handle.clear();
        }
    });

    view! {
        <div class="hero-stats-grid">
            {HERO_STATS
                .iter()
                .copied()
                .map(|stat| {
                    view! {
                        <div class="hero-stat">
                            <div class="hero-stat-value">
                                {move || stat.display_at(cycle.with(|c| c.elapsed_ms()))}
                            </div>
                            <div class="hero-stat-label">{stat.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
