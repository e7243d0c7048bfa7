//! Mergington High School activity signup board.
//!
//! Trunk + Yew CSR app: fetches the activity list from the same-origin
//! API, renders it as cards plus a signup form, and re-fetches after
//! every successful mutation. All display decisions live in [`board`];
//! this file is the wasm-only glue (hooks, callbacks, html!).

mod api;
mod board;
mod model;

use board::{Notice, RosterState, NOTICE_HIDE_MS};
use gloo_console::error;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[function_component(App)]
fn app() -> Html {
    let roster = use_state(RosterState::default);
    let email = use_state(String::new);
    let activity = use_state(String::new);
    let notice = use_state(|| None::<Notice>);

    // Full clear-then-rebuild: every reload replaces the roster state
    // wholesale and the next render derives cards, select options and
    // delete buttons from it. Overlapping reloads are not sequenced;
    // the last response to resolve wins.
    let reload = {
        let roster = roster.clone();
        Callback::from(move |_: ()| {
            let roster = roster.clone();
            spawn_local(async move {
                let result = api::fetch_activities().await;
                if let Err(e) = &result {
                    error!(format!("Failed to load activities: {e}"));
                }
                roster.set(RosterState::after_fetch(result));
            });
        })
    };

    // First fetch on mount.
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    // Show the signup notice and arm its 5-second auto-hide.
    let show_notice = {
        let notice = notice.clone();
        Callback::from(move |n: Notice| {
            notice.set(Some(n));
            let notice = notice.clone();
            Timeout::new(NOTICE_HIDE_MS, move || {
                notice.set(board::hide_notice((*notice).clone()));
            })
            .forget();
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity_change = {
        let activity = activity.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            activity.set(select.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let activity = activity.clone();
        let show_notice = show_notice.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_value = (*email).clone();
            let activity_name = (*activity).clone();
            let email = email.clone();
            let activity = activity.clone();
            let show_notice = show_notice.clone();
            let reload = reload.clone();

            spawn_local(async move {
                let result = api::signup(&activity_name, &email_value).await;
                if let Err(e) = &result {
                    if e.is_transport() {
                        error!(format!("Signup request failed: {e}"));
                    }
                }
                let fx = board::after_signup(result);
                show_notice.emit(fx.notice);
                if fx.clear_form {
                    email.set(String::new());
                    activity.set(String::new());
                }
                if fx.reload {
                    reload.emit(());
                }
            });
        })
    };

    // One callback per rendered row, rebuilt on every render pass, so a
    // delete button is always wired to the (activity, email) pair it was
    // rendered with.
    let on_delete = {
        let reload = reload.clone();
        Callback::from(move |(activity_name, email_value): (String, String)| {
            let reload = reload.clone();
            spawn_local(async move {
                let result = api::unregister(&activity_name, &email_value).await;
                if let Err(e) = &result {
                    if e.is_transport() {
                        error!(format!("Unregister request failed: {e}"));
                    }
                }
                let fx = board::after_unregister(result);
                if let Some(message) = fx.alert {
                    alert(&message);
                }
                if fx.reload {
                    reload.emit(());
                }
            });
        })
    };

    let cards = match &*roster {
        RosterState::Loaded(activities) => Some(board::cards(activities)),
        _ => None,
    };

    let activities_section = match &*roster {
        RosterState::Loading => html! { <p>{ "Loading activities..." }</p> },
        RosterState::Failed => {
            html! { <p>{ "Failed to load activities. Please try again later." }</p> }
        }
        RosterState::Loaded(_) => html! {
            <>
                { for cards.iter().flatten().map(|card| {
                    let participants = if card.participants.is_empty() {
                        html! { <p class="no-participants">{ "No participants yet" }</p> }
                    } else {
                        html! {
                            <ul class="participants-list">
                                { for card.participants.iter().map(|participant| {
                                    let on_delete = on_delete.clone();
                                    let pair = (card.name.clone(), participant.clone());
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        on_delete.emit(pair.clone());
                                    });
                                    html! {
                                        <li>
                                            <span class="participant-email">{ participant.clone() }</span>
                                            <button class="delete-btn" title="Unregister" {onclick}>
                                                { "✖" }
                                            </button>
                                        </li>
                                    }
                                }) }
                            </ul>
                        }
                    };

                    html! {
                        <div class="activity-card">
                            <h4>{ card.name.clone() }</h4>
                            <p>{ card.description.clone() }</p>
                            <p><strong>{ "Schedule: " }</strong>{ card.schedule.clone() }</p>
                            <p><strong>{ "Availability: " }</strong>{ format!("{} spots left", card.spots_left) }</p>
                            <div class="participants-section">
                                <h5>{ "Participants:" }</h5>
                                { participants }
                            </div>
                        </div>
                    }
                }) }
            </>
        },
    };

    let notice_block = if let Some(n) = (*notice).clone() {
        html! { <div class={classes!("message", n.kind.css_class())}>{ n.text }</div> }
    } else {
        html! {}
    };

    html! {
        <>
            <header>
                <h1>{ "Mergington High School" }</h1>
                <h2>{ "Extracurricular Activities" }</h2>
            </header>

            <main>
                <section id="activities-container">
                    <h3>{ "Upcoming Activities" }</h3>
                    <div id="activities-list">
                        { activities_section }
                    </div>
                </section>

                <section id="signup-container">
                    <h3>{ "Sign Up for an Activity" }</h3>
                    <form id="signup-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="email">{ "Student Email:" }</label>
                            <input
                                type="email"
                                id="email"
                                required=true
                                placeholder="your-email@mergington.edu"
                                value={(*email).clone()}
                                oninput={on_email_input}
                            />
                        </div>
                        <div class="form-group">
                            <label for="activity">{ "Select Activity:" }</label>
                            <select id="activity" required=true onchange={on_activity_change}>
                                <option value="" selected={activity.is_empty()}>
                                    { "-- Select an activity --" }
                                </option>
                                { for cards.iter().flatten().map(|card| {
                                    html! {
                                        <option
                                            value={card.name.clone()}
                                            selected={*activity == card.name}
                                        >
                                            { card.name.clone() }
                                        </option>
                                    }
                                }) }
                            </select>
                        </div>
                        <button type="submit">{ "Sign Up" }</button>
                    </form>
                    { notice_block }
                </section>
            </main>

            <footer>
                <p>{ "© 2025 Mergington High School" }</p>
            </footer>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
