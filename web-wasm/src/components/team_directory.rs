//! チーム名簿コンポーネント
//!
//! マウント時に名簿を1回だけ取得し、フェーズに応じて
//! スピナー / エラーメッセージ / 各セクションを表示する。

use super::department_filter::DepartmentFilterBar;
use super::member_card::{MemberCard, SelectableMemberCard};
use super::member_modal::MemberModal;
use super::reveal::Reveal;
use crate::api::FetchRosterSource;
use about_us_common::{
    LoadPhase, MountGuard, RosterSource, Section, SelectionController, TeamDirectoryStore,
    TeamMember,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TeamDirectory() -> impl IntoView {
    let store = RwSignal::new(TeamDirectoryStore::new());
    let selection = RwSignal::new(SelectionController::new());
    let guard = MountGuard::new();

    // 取得完了時にアンマウント済みなら何もしない
    {
        let guard = guard.clone();
        spawn_local(async move {
            let source = FetchRosterSource::default();
            log::debug!("loading team roster from {}", source.describe());
            let result = source.fetch_roster().await;
            guard.run_if_mounted(move || store.try_update(|s| s.resolve(result)));
        });
    }
    on_cleanup(move || guard.unmount());

    let phase = Memo::new(move |_| store.with(|s| s.phase()));

    view! {
        {move || match phase.get() {
            LoadPhase::Loading => view! { <LoadingSpinner /> }.into_any(),
            LoadPhase::Failed => {
                view! {
                    <div class="directory-status">
                        <p class="directory-error">"Failed to load team data"</p>
                    </div>
                }
                    .into_any()
            }
            LoadPhase::Loaded => view! { <TeamSections store=store selection=selection /> }.into_any(),
        }}
        <MemberModal selection=selection />
    }
}

#[component]
fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="directory-status">
            <div class="spinner" />
        </div>
    }
}

#[component]
fn TeamSections(
    store: RwSignal<TeamDirectoryStore>,
    selection: RwSignal<SelectionController>,
) -> impl IntoView {
    let roster = store
        .with_untracked(|s| s.roster().cloned())
        .unwrap_or_default();

    let filtered = move || {
        store.with(|s| {
            s.filtered_members()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };
    let on_select = move |member: TeamMember| selection.update(|s| s.select(member));

    view! {
        <div class="team-page">
            <Reveal target="team-heading" class="team-heading">
                <h1>"Our Team"</h1>
                <p>"Meet the amazing people behind our success"</p>
            </Reveal>

            <RosterSection section=Section::Founders members=roster.founders />
            <div class="connector-line" />
            <RosterSection section=Section::Hr members=roster.hr_team hide_when_empty=true />
            <RosterSection
                section=Section::Marketing
                members=roster.marketing_team
                hide_when_empty=true
            />

            <div class="roster-section">
                <div class="section-header">
                    <h2>{Section::Development.title()}</h2>
                </div>
                <DepartmentFilterBar store=store />
                <div class="member-grid">
                    <For
                        each=filtered
                        key=|(index, member)| (*index, member.name.clone())
                        children=move |(_, member)| {
                            view! { <SelectableMemberCard member=member on_select=on_select /> }
                        }
                    />
                </div>
            </div>
        </div>
    }
}

/// 固定表示のセクション（フィルタ・選択の対象外）
#[component]
fn RosterSection(
    section: Section,
    members: Vec<TeamMember>,
    #[prop(optional)] hide_when_empty: bool,
) -> impl IntoView {
    if hide_when_empty && members.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="roster-section">
            <div class="section-header">
                <h2>{section.title()}</h2>
            </div>
            <div class="member-row">
                {members
                    .into_iter()
                    .map(|member| view! { <MemberCard member=member /> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
