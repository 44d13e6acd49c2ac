//! Global navigation bar.
//!
//! Renders role-aware links once the session probe resolves; until then only
//! the brand and the public browse link are shown so nothing flashes.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::default_landing;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let dashboard_href = move || auth.get().user.map(|user| default_landing(user.role));
    let user_name = move || auth.get().user.map(|user| user.name);
    let is_tourist = move || auth.get().user.is_some_and(|user| user.role == Role::Tourist);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::state::auth::logout(auth).await;
            });
        }
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "Roamly"
            </a>
            <nav class="navbar__links">
                <a class="navbar__link" href="/">
                    "Browse tours"
                </a>
                <Show when=move || is_tourist()>
                    <a class="navbar__link" href="/dashboard/tourist/my-trips">
                        "My trips"
                    </a>
                </Show>
                <Show when=move || dashboard_href().is_some()>
                    <a class="navbar__link" href=move || dashboard_href().unwrap_or("/")>
                        "Dashboard"
                    </a>
                    <a class="navbar__link" href="/profile">
                        "Profile"
                    </a>
                </Show>
            </nav>

            <span class="navbar__spacer"></span>

            <button
                class="btn navbar__dark-toggle"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show
                when=move || auth.get().is_authenticated()
                fallback=move || {
                    view! {
                        <Show when=move || !auth.get().loading>
                            <a class="btn navbar__login" href="/login">
                                "Log in"
                            </a>
                            <a class="btn btn--primary navbar__register" href="/register">
                                "Sign up"
                            </a>
                        </Show>
                    }
                }
            >
                <span class="navbar__self">{move || user_name().unwrap_or_default()}</span>
                <button class="btn navbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
