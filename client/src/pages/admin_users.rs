//! Admin dashboard: user moderation.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::role_guard::RequireRole;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::types::{AdminUser, Role};
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <RequireRole allow=vec![Role::Admin]>
            <AdminUsersContent/>
        </RequireRole>
    }
}

#[component]
fn AdminUsersContent() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let role_filter = RwSignal::new(None::<Role>);
    let delete_target = RwSignal::new(None::<String>);
    let reload_seq = RwSignal::new(0_u32);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        Effect::new(move || {
            reload_seq.track();
            let filter = role_filter.get();
            loading.set(true);
            load_error.set(None);
            let alive = alive_task.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_users(filter).await;
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    match result {
                        Ok(items) => users.set(items),
                        Err(error) => load_error.set(Some(error.user_message())),
                    }
                    loading.set(false);
                }
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_toggle_ban = move |id: String, banned: bool| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::set_user_banned(&id, banned).await {
                    Ok(updated) => {
                        users.update(|items| {
                            if let Some(slot) = items.iter_mut().find(|user| user.id == updated.id) {
                                *slot = updated;
                            }
                        });
                        show_toast(
                            ui,
                            ToastKind::Success,
                            if banned { "User banned." } else { "User reinstated." },
                        );
                    }
                    Err(error) => show_toast(ui, ToastKind::Error, error.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, banned, ui);
        }
    };

    let on_delete_confirmed = Callback::new(move |()| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        let _ = (&id, &ui);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_user(&id).await {
                    Ok(()) => {
                        users.update(|items| items.retain(|user| user.id != id));
                        show_toast(ui, ToastKind::Success, "User deleted.");
                    }
                    Err(error) => show_toast(ui, ToastKind::Error, error.user_message()),
                }
            });
        }
    });
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    let set_filter = move |value: String| {
        role_filter.set(match value.as_str() {
            "TOURIST" => Some(Role::Tourist),
            "GUIDE" => Some(Role::Guide),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        });
    };

    view! {
        <div class="dashboard-page admin-users-page">
            <header class="dashboard-page__header">
                <h1>"Users"</h1>
                <select
                    class="dashboard-page__filter"
                    on:change=move |ev| set_filter(event_target_value(&ev))
                >
                    <option value="">"All roles"</option>
                    <option value="TOURIST">"Tourists"</option>
                    <option value="GUIDE">"Guides"</option>
                    <option value="ADMIN">"Admins"</option>
                </select>
            </header>

            <Show when=move || load_error.get().is_some()>
                <div class="dashboard-page__error">
                    <p>{move || load_error.get().unwrap_or_default()}</p>
                    <button class="btn" on:click=move |_| reload_seq.update(|n| *n += 1)>
                        "Retry"
                    </button>
                </div>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading users..."</p> }>
                <Show
                    when=move || !users.get().is_empty()
                    fallback=move || {
                        view! { <p class="dashboard-page__empty">"No users match this filter."</p> }
                    }
                >
                    <ul class="user-table">
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let ban_id = user.id.clone();
                                    let delete_id = user.id.clone();
                                    let banned = user.banned;
                                    view! {
                                        <li class="user-table__row" class:user-table__row--banned=banned>
                                            <span class="user-table__name">{user.name.clone()}</span>
                                            <span class="user-table__email">{user.email.clone()}</span>
                                            <span class="user-table__role">{user.role.as_str()}</span>
                                            <button
                                                class="btn user-table__ban"
                                                on:click=move |_| on_toggle_ban(ban_id.clone(), !banned)
                                            >
                                                {if banned { "Unban" } else { "Ban" }}
                                            </button>
                                            <button
                                                class="btn btn--danger user-table__delete"
                                                on:click=move |_| delete_target.set(Some(delete_id.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Delete user"
                    message="This removes the account, its listings, and its bookings."
                    confirm_label="Delete"
                    danger=true
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirmed
                />
            </Show>
        </div>
    }
}
