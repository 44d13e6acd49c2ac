//! Role-based access wrapper for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The edge middleware only checks cookie presence before a protected page is
//! served; this wrapper enforces the resolved role once the session probe
//! answers. It is a UX layer (no protected content flashes, wrong roles land
//! on their own dashboard) — the backend remains the security boundary for
//! every API call the page makes.

#[cfg(test)]
#[path = "role_guard_test.rs"]
mod role_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{default_landing, login_redirect};

/// Access decision for a guarded page. After the probe resolves, the only
/// reachable states are redirecting and authorized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Access {
    /// Probe not resolved yet; render only a loading indicator.
    Pending,
    /// Unauthenticated; go to login carrying the interrupted path.
    LoginRedirect(String),
    /// Authenticated but not allowed here; go to the role's own landing.
    RoleRedirect(&'static str),
    Granted,
}

pub(crate) fn evaluate(state: &AuthState, allow: &[Role], current_path: &str) -> Access {
    if state.loading {
        return Access::Pending;
    }
    match &state.user {
        None => Access::LoginRedirect(login_redirect(current_path)),
        Some(user) if allow.contains(&user.role) => Access::Granted,
        Some(user) => Access::RoleRedirect(default_landing(user.role)),
    }
}

/// Wrap a page's content and only render it for the allowed roles.
#[component]
pub fn RequireRole(
    /// Roles that may view the wrapped content.
    allow: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let current_path = move || {
        let path = location.pathname.get();
        let search = location.search.get();
        if search.is_empty() { path } else { format!("{path}?{search}") }
    };

    let allow_for_effect = allow.clone();
    let path_for_effect = current_path.clone();
    Effect::new(move || {
        match evaluate(&auth.get(), &allow_for_effect, &path_for_effect()) {
            Access::LoginRedirect(target) => navigate(&target, NavigateOptions::default()),
            Access::RoleRedirect(target) => navigate(target, NavigateOptions::default()),
            Access::Pending | Access::Granted => {}
        }
    });

    view! {
        <Show
            when=move || matches!(evaluate(&auth.get(), &allow, &current_path()), Access::Granted)
            fallback=move || {
                view! {
                    <div class="guard-panel">
                        <p class="guard-panel__status">
                            {move || if auth.get().loading { "Loading..." } else { "Redirecting..." }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
