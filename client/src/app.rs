//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::components::page_content::PageContent;
use crate::components::sidebar::Sidebar;
use crate::components::task_bot::TaskBot;
use crate::state::session::{self, SessionUser};
use crate::state::ui::{Page, UiState};

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let user: RwSignal<SessionUser> = RwSignal::new(session::load_or_seed());
    provide_context(ui);
    provide_context(user);

    view! {
        <Title text="Smart Task"/>
        <Router>
            <Shell/>
        </Router>
    }
}

/// Everything that needs router context: sidebar, routes, the assistant, and
/// the effect that carries out its navigation requests.
#[component]
fn Shell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if ui.with(|u| u.pending_navigation.is_none()) {
            return;
        }
        if let Some(Some(page)) = ui.try_update(UiState::take_pending_navigation) {
            navigate(page.path(), NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let seq = ui.with(|u| u.create_task_seq);
        if seq > 0 {
            log::info!("shell: create task requested (#{seq})");
        }
    });

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="app-shell__main">
                <Routes fallback=|| view! { <PageContent page=Page::Dashboard/> }>
                    <Route path=path!("/") view=|| view! { <PageContent page=Page::Dashboard/> }/>
                    <Route path=path!("/projects") view=|| view! { <PageContent page=Page::Projects/> }/>
                    <Route path=path!("/my-tasks") view=|| view! { <PageContent page=Page::MyTasks/> }/>
                    <Route path=path!("/profile") view=|| view! { <PageContent page=Page::Profile/> }/>
                </Routes>
            </main>
            <TaskBot hidden=Signal::derive(move || ui.with(|u| u.assistant_hidden))/>
        </div>
    }
}
