//! メンバーカード

use about_us_common::TeamMember;
use leptos::prelude::*;

/// SNSリンクのCSSクラス
fn social_class(label: &str) -> String {
    format!("social-link social-{}", label.to_lowercase())
}

#[component]
pub fn SocialLinks(member: TeamMember) -> impl IntoView {
    let links: Vec<(&'static str, String)> = member
        .social_links()
        .into_iter()
        .map(|(label, url)| (label, url.to_string()))
        .collect();

    view! {
        <div class="social-links">
            {links
                .into_iter()
                .map(|(label, url)| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            title=label
                            class=social_class(label)
                            on:click=|ev| ev.stop_propagation()
                        >
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn MemberCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="member-card">
            <div class="member-photo">
                <img src=member.image.clone() alt=member.name.clone() />
            </div>
            <h3 class="member-name">{member.name.clone()}</h3>
            <p class="member-role">{member.role.clone()}</p>
            <SocialLinks member=member />
        </div>
    }
}

/// クリックで詳細モーダルを開くカード
#[component]
pub fn SelectableMemberCard<F>(member: TeamMember, on_select: F) -> impl IntoView
where
    F: Fn(TeamMember) + 'static + Clone + Send,
{
    let selected = member.clone();
    view! {
        <div
            class="member-card-button"
            role="button"
            tabindex="0"
            on:click=move |_| on_select(selected.clone())
        >
            <MemberCard member=member />
        </div>
    }
}
