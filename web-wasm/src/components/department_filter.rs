//! 部署フィルタボタン

use about_us_common::{DepartmentFilter, TeamDirectoryStore};
use leptos::prelude::*;

#[component]
pub fn DepartmentFilterBar(store: RwSignal<TeamDirectoryStore>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <div class="filter-pill">
                {DepartmentFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        let is_active = move || store.with(|s| s.active_department() == filter);
                        view! {
                            <button
                                type="button"
                                class="filter-button"
                                class:active=is_active
                                on:click=move |_| store.update(|s| s.set_department(filter))
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
