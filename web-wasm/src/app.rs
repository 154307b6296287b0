//! メインアプリケーションコンポーネント

use crate::components::{hero::HeroSection, team_directory::TeamDirectory};
use leptos::prelude::*;

/// About Us ページ（ヒーロー + チーム名簿）
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="about-us">
            <HeroSection />
            <TeamDirectory />
        </main>
    }
}
