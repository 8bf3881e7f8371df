//! Placeholder bodies for the dashboard pages.
//!
//! The task, project and profile screens are out of scope for this shell;
//! each route renders a titled stub so navigation and the assistant's page
//! awareness can be exercised.

use leptos::prelude::*;

use crate::state::session::SessionUser;
use crate::state::ui::{Page, UiState};

#[component]
pub fn PageContent(page: Page) -> impl IntoView {
    let user = expect_context::<RwSignal<SessionUser>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let subtitle = move || match page {
        Page::Dashboard => format!("Welcome back, {}!", user.with(|u| u.first_name().unwrap_or("there").to_owned())),
        Page::Projects => "All projects you can access.".to_owned(),
        Page::MyTasks => "Tasks assigned to you.".to_owned(),
        Page::Profile => user.with(|u| u.email.clone()),
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{page.title()}</h1>
                <p class="page__subtitle">{subtitle}</p>
                <button class="btn btn--primary" on:click=move |_| ui.update(UiState::request_create_task)>
                    "New Task"
                </button>
            </header>
            <Show when=move || { ui.with(|u| u.create_task_seq) > 0 }>
                <p class="page__notice">
                    {move || format!("Task form requested ({})", ui.with(|u| u.create_task_seq))}
                </p>
            </Show>
        </section>
    }
}
