//! Floating TaskBot assistant: mascot, tooltip, context menu and chat window.
//!
//! SYSTEM CONTEXT
//! ==============
//! All widget behavior lives in `taskbot::WidgetController`. This component
//! owns one controller in a local signal and feeds it the router page, the
//! session user's name, pointer moves and gloo timer callbacks. The two host
//! triggers write to `UiState`; the shell performs the actual navigation.

#[cfg(test)]
#[path = "task_bot_test.rs"]
mod task_bot_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use taskbot::actions::QUICK_ACTIONS;
use taskbot::controller::TOOLTIP_TEXT;
use taskbot::mood::Expression;
use taskbot::{ChatMessage, HostActions, Mood, SeededRandom, Vector2, Visibility, WidgetController};

use crate::state::session::SessionUser;
use crate::state::ui::{Page, UiState};
use crate::util::timers::BrowserScheduler;
use crate::util::ui_persistence;

type Bot = WidgetController<BrowserScheduler, SeededRandom, HostCallbacks>;

/// Host triggers handed to the controller.
pub struct HostCallbacks {
    pub on_create_task: Callback<()>,
    pub on_navigate: Callback<String>,
}

impl HostActions for HostCallbacks {
    fn create_task(&self) {
        self.on_create_task.run(());
    }

    fn navigate_to(&self, page: &str) {
        self.on_navigate.run(page.to_owned());
    }
}

/// Inline transform for the eyes: gaze offset plus the mood's squint.
pub fn eye_transform(gaze: Vector2, expression: &Expression) -> String {
    format!("translate({:.2}px, {:.2}px) scaleY({})", gaze.x, gaze.y, expression.eye_scale_y)
}

/// Inline animation for the idle bounce.
pub fn bounce_style(expression: &Expression) -> String {
    let name = if expression.sways { "taskbot-bounce-sway" } else { "taskbot-bounce" };
    format!("--taskbot-bounce: -{}px; animation: {name} {}s ease-in-out infinite", expression.bounce_px, expression.bounce_secs)
}

/// Header status line under the TaskBot title.
pub fn status_line(composing: bool) -> &'static str {
    if composing { "Typing..." } else { "Online • Ready to help" }
}

fn clock_seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = js_sys::Date::now() as u64;
        seed
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// The assistant widget. Must render inside the router.
///
/// `hidden` masks the whole widget while true. `mood` overrides the mascot's
/// mood whenever it changes; the controller's own mood changes still apply
/// between overrides.
#[component]
pub fn TaskBot(
    #[prop(optional, into)] hidden: Option<Signal<bool>>,
    #[prop(optional, into)] mood: Option<Signal<Mood>>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let user = expect_context::<RwSignal<SessionUser>>();
    let location = use_location();

    let host = HostCallbacks {
        on_create_task: Callback::new(move |()| ui.update(UiState::request_create_task)),
        on_navigate: Callback::new(move |tag: String| {
            ui.update(|u| {
                u.request_navigation(&tag);
            });
        }),
    };
    let page = Page::from_path(&location.pathname.get_untracked());
    let user_name = user.with_untracked(|u| u.name.clone());
    let controller = WidgetController::new(
        ui_persistence::load_taskbot_config(),
        BrowserScheduler::new(),
        SeededRandom::from_seed(clock_seed()),
        host,
        page.tag(),
        Some(&user_name),
    );
    let bot: RwSignal<Bot, LocalStorage> = RwSignal::new_local(controller);
    bot.with_untracked(|c| c.scheduler().bind(Rc::new(move |id, event| bot.update(|c| c.fire(id, event)))));

    Effect::new(move || {
        let page = Page::from_path(&location.pathname.get());
        bot.update(|c| c.set_page(page.tag()));
    });

    if let Some(hidden) = hidden {
        Effect::new(move || {
            let hidden = hidden.get();
            bot.update(|c| c.set_hidden(hidden));
        });
    }
    if let Some(mood) = mood {
        Effect::new(move || {
            let mood = mood.get();
            bot.update(|c| c.set_mood(mood));
        });
    }

    let mascot_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let Some(el) = mascot_ref.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let anchor = Vector2::new(rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0);
            let pointer = Vector2::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            // Only wake subscribers when the eyes actually move.
            let moved = bot.try_update_untracked(|c| {
                let before = c.gaze_offset();
                c.track_pointer(anchor, pointer);
                c.gaze_offset() != before
            });
            if moved == Some(true) {
                bot.notify();
            }
        });
        on_cleanup(move || handle.remove());
    }

    on_cleanup(move || {
        bot.try_update(WidgetController::shutdown);
    });

    let current_mood = move || bot.with(WidgetController::mood);
    let visibility = move || bot.with(WidgetController::visibility);
    let composing = move || bot.with(WidgetController::is_composing);

    view! {
        <div class="taskbot" class:taskbot--hidden=move || visibility().is_hidden()>
            <Show when=move || visibility() == Visibility::Expanded>
                <ChatWindow bot=bot/>
            </Show>

            <Show when=move || visibility() == Visibility::Minimized>
                <button class="taskbot__pill" on:click=move |_| bot.update(WidgetController::restore)>
                    <span class="taskbot__pill-icon">"🤖"</span>
                    <span class="taskbot__pill-label">"TaskBot"</span>
                    <Show when=composing>
                        <span class="taskbot__pill-typing">"..."</span>
                    </Show>
                </button>
            </Show>

            <Show when=move || bot.with(WidgetController::shows_tooltip)>
                <div class="taskbot__tooltip" role="tooltip">{TOOLTIP_TEXT}</div>
            </Show>

            <Show when=move || bot.with(WidgetController::context_menu_open)>
                <ul class="taskbot__menu" role="menu">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|quick| {
                            let action_id = quick.action_id;
                            view! {
                                <li>
                                    <button
                                        class="taskbot__menu-item"
                                        role="menuitem"
                                        on:click=move |_| bot.update(|c| c.invoke_quick_action(action_id))
                                    >
                                        {quick.label}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>

            <div
                class=move || format!("taskbot__mascot taskbot__mascot--{}", current_mood())
                node_ref=mascot_ref
                style=move || bounce_style(&current_mood().expression())
                on:click=move |_| bot.update(WidgetController::toggle)
                on:contextmenu=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    bot.update(WidgetController::toggle_context_menu);
                }
                on:mouseenter=move |_| bot.update(|c| c.set_hovered(true))
                on:mouseleave=move |_| bot.update(|c| c.set_hovered(false))
            >
                <Mascot bot=bot/>
            </div>
        </div>
    }
}

/// Mascot face: glow, eyes that follow the pointer, mouth and mood extras.
#[component]
fn Mascot(bot: RwSignal<Bot, LocalStorage>) -> impl IntoView {
    let mood = move || bot.with(WidgetController::mood);
    let expression = move || mood().expression();

    view! {
        <div class=move || format!("taskbot__glow bg-gradient-to-r {}", expression().glow)></div>
        <div class="taskbot__face">
            <span
                class="taskbot__eyes"
                style:transform=move || eye_transform(bot.with(WidgetController::gaze_offset), &expression())
            >
                {move || expression().eyes}
            </span>
            <span class="taskbot__mouth" style:transform=move || format!("scaleY({})", expression().mouth_scale_y)>
                {move || expression().mouth}
            </span>
        </div>
        <Show when=move || mood().shows_thinking_dots()>
            <div class="taskbot__thinking" aria-hidden="true">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </Show>
        <Show when=move || mood().shows_particles()>
            <div class="taskbot__particles" aria-hidden="true">"✨🎉✨"</div>
        </Show>
        <Show when=move || mood() == Mood::Concerned>
            <div class="taskbot__alert" aria-hidden="true">"!"</div>
        </Show>
    }
}

/// Expanded chat window with header, transcript and input row.
#[component]
fn ChatWindow(bot: RwSignal<Bot, LocalStorage>) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let composing = move || bot.with(WidgetController::is_composing);

    Effect::new(move || {
        let _ = bot.with(|c| c.transcript().len());
        let _ = composing();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        bot.update(|c| c.submit_user_message(&text));
        input.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="taskbot__window" role="dialog" aria-label="TaskBot chat">
            <header class="taskbot__header">
                <span class="taskbot__avatar">"🤖"</span>
                <div class="taskbot__title">
                    <strong>"TaskBot"</strong>
                    <span class="taskbot__status">{move || status_line(composing())}</span>
                </div>
                <button class="btn btn--icon" title="Minimize" on:click=move |_| bot.update(WidgetController::minimize)>
                    "–"
                </button>
                <button class="btn btn--icon" title="Close" on:click=move |_| bot.update(WidgetController::close)>
                    "×"
                </button>
            </header>

            <div class="taskbot__messages" node_ref=messages_ref>
                <For
                    each=move || bot.with(|c| c.transcript().messages().to_vec())
                    key=|msg| msg.id.clone()
                    children=move |msg| view! { <MessageBubble msg=msg bot=bot/> }
                />
                <Show when=composing>
                    <div class="taskbot__bubble taskbot__bubble--assistant taskbot__typing" aria-label="TaskBot is typing">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Show>
            </div>

            <div class="taskbot__input-row">
                <input
                    class="taskbot__input"
                    type="text"
                    placeholder="Ask me anything..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=move |_| do_send() disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(msg: ChatMessage, bot: RwSignal<Bot, LocalStorage>) -> impl IntoView {
    let side = if msg.is_user() { "taskbot__bubble--user" } else { "taskbot__bubble--assistant" };
    let actions = msg
        .suggested_actions
        .into_iter()
        .map(|action| {
            let action_id = action.action_id;
            view! {
                <button
                    class="taskbot__suggestion"
                    on:click=move |_| bot.update(|c| c.invoke_suggested_action(&action_id))
                >
                    {action.label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=format!("taskbot__bubble {side}")>
            <p class="taskbot__content">{msg.content}</p>
            <div class="taskbot__suggestions">{actions}</div>
        </div>
    }
}
