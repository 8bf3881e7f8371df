//! Left navigation sidebar with the signed-in user in the footer.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::session::SessionUser;
use crate::state::ui::{Page, UiState};

/// Sidebar listing every dashboard page, highlighting the active one.
#[component]
pub fn Sidebar() -> impl IntoView {
    let user = expect_context::<RwSignal<SessionUser>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let active = move || Page::from_path(&location.pathname.get());

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"✓"</span>
                <span class="sidebar__title">"Smart Task"</span>
            </div>
            <ul class="sidebar__menu">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li>
                                <A href=page.path() attr:class=move || {
                                    if active() == page { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
                                }>{page.title()}</A>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <button class="btn sidebar__assistant-toggle" on:click=move |_| ui.update(UiState::toggle_assistant)>
                {move || if ui.with(|u| u.assistant_hidden) { "Show TaskBot" } else { "Hide TaskBot" }}
            </button>
            <footer class="sidebar__footer">
                <span class="sidebar__avatar">{move || user.with(SessionUser::initials)}</span>
                <div class="sidebar__user">
                    <span class="sidebar__user-name">{move || user.with(|u| u.name.clone())}</span>
                    <span class="sidebar__user-role">{move || user.with(|u| u.role.as_str())}</span>
                </div>
            </footer>
        </nav>
    }
}
