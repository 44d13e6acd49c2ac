//! Login page with email + password credentials.
//!
//! Carries an optional `?redirect=` deep link: after a successful login the
//! user lands back where the guard interrupted them, otherwise on their
//! role's dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthState;
use crate::util::auth::post_login_destination;

/// Validate the login form before any network call.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let redirect = move || query.with(|q| q.get("redirect"));

    // Already signed in (e.g. back-button to /login): skip the form.
    let navigate_settled = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading {
            if let Some(user) = state.user {
                let target = post_login_destination(redirect().as_deref(), user.role);
                navigate_settled(&target, NavigateOptions::default());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Err(message) => info.set(message.to_owned()),
            Ok((clean_email, clean_password)) => {
                busy.set(true);
                info.set("Signing in...".to_owned());

                #[cfg(feature = "hydrate")]
                {
                    let navigate_done = navigate.clone();
                    leptos::task::spawn_local(async move {
                        let ok = crate::state::auth::login(auth, &clean_email, &clean_password).await;
                        if ok {
                            let role = auth.get_untracked().user.map(|user| user.role).unwrap_or_default();
                            let target = post_login_destination(redirect().as_deref(), role);
                            navigate_done(&target, NavigateOptions::default());
                        } else {
                            info.set("Invalid email or password.".to_owned());
                            busy.set(false);
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (clean_email, clean_password);
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <p class="login-card__subtitle">"Sign in to book and manage tours"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New here? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
