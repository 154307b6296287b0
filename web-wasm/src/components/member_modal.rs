//! メンバー詳細モーダル

use super::member_card::SocialLinks;
use about_us_common::SelectionController;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn MemberModal(selection: RwSignal<SelectionController>) -> impl IntoView {
    let close = move || selection.update(|s| s.clear());

    // Escキーで閉じる
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && selection.with_untracked(|s| s.is_open()) {
            selection.try_update(|s| s.clear());
        }
    });
    on_cleanup(move || handle.remove());

    move || {
        selection.with(|s| s.selected().cloned()).map(|member| {
            view! {
                <div class="modal-overlay" on:click=move |_| close()>
                    <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                        <button type="button" class="modal-close" title="Close" on:click=move |_| close()>
                            "×"
                        </button>
                        <div class="modal-photo">
                            <img src=member.image.clone() alt=member.name.clone() />
                        </div>
                        <h3 class="modal-name">{member.name.clone()}</h3>
                        <p class="modal-role">{member.role.clone()}</p>
                        {member
                            .known_department()
                            .map(|d| view! { <span class="modal-department">{d.to_string()}</span> })}
                        {member.bio.clone().map(|bio| view! { <p class="modal-bio">{bio}</p> })}
                        <SocialLinks member=member.clone() />
                    </div>
                </div>
            }
        })
    }
}
