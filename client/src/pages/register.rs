//! Account registration page (tourist or guide).

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::auth::default_landing;

/// Validate the registration form before any network call.
pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Map the account-type radio value to a role; only tourist and guide
/// accounts can self-register.
pub(crate) fn account_role(value: &str) -> Role {
    if value == "guide" { Role::Guide } else { Role::Tourist }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let account_type = RwSignal::new("tourist".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_register_input(&name.get(), &email.get(), &password.get()) {
            Err(message) => info.set(message.to_owned()),
            Ok((clean_name, clean_email, clean_password)) => {
                busy.set(true);
                info.set("Creating account...".to_owned());
                let role = account_role(&account_type.get());

                #[cfg(feature = "hydrate")]
                {
                    let navigate_done = navigate.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::api::register(&clean_name, &clean_email, &clean_password, role).await {
                            Ok(_) => {
                                // Registration sets the session cookie; log in
                                // through the probe so holder state is the
                                // server's view, then land on the dashboard.
                                let user = crate::state::auth::check_auth(auth).await;
                                let target = user.map(|u| default_landing(u.role)).unwrap_or("/login");
                                navigate_done(target, NavigateOptions::default());
                            }
                            Err(error) => {
                                info.set(error.user_message());
                                busy.set(false);
                            }
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (clean_name, clean_email, clean_password, role, auth, &navigate);
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <div class="login-roles">
                        <label class="login-roles__option">
                            <input
                                type="radio"
                                name="account-type"
                                value="tourist"
                                checked=move || account_type.get() == "tourist"
                                on:change=move |_| account_type.set("tourist".to_owned())
                            />
                            "I want to book tours"
                        </label>
                        <label class="login-roles__option">
                            <input
                                type="radio"
                                name="account-type"
                                value="guide"
                                checked=move || account_type.get() == "guide"
                                on:change=move |_| account_type.set("guide".to_owned())
                            />
                            "I want to guide tours"
                        </label>
                    </div>
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
