//! Admin dashboard: listing moderation.

use leptos::prelude::*;

use crate::components::role_guard::RequireRole;
use crate::components::status_badge::ListingBadge;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::types::{Listing, ListingStatus, Role};
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;
use crate::util::format::format_usd;

#[component]
pub fn AdminListingsPage() -> impl IntoView {
    view! {
        <RequireRole allow=vec![Role::Admin]>
            <AdminListingsContent/>
        </RequireRole>
    }
}

#[component]
fn AdminListingsContent() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let listings = RwSignal::new(Vec::<Listing>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let status_filter = RwSignal::new(None::<ListingStatus>);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        Effect::new(move || {
            let filter = status_filter.get();
            loading.set(true);
            load_error.set(None);
            let alive = alive_task.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_all_listings(filter).await;
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    match result {
                        Ok(items) => listings.set(items),
                        Err(error) => load_error.set(Some(error.user_message())),
                    }
                    loading.set(false);
                }
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_moderate = move |id: String, status: ListingStatus| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::set_listing_status(&id, status).await {
                    Ok(updated) => {
                        listings.update(|items| {
                            if let Some(slot) = items.iter_mut().find(|listing| listing.id == updated.id) {
                                *slot = updated;
                            }
                        });
                        show_toast(
                            ui,
                            ToastKind::Success,
                            if status == ListingStatus::Suspended {
                                "Listing suspended."
                            } else {
                                "Listing restored."
                            },
                        );
                    }
                    Err(error) => show_toast(ui, ToastKind::Error, error.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status, ui);
        }
    };

    let set_filter = move |value: String| {
        status_filter.set(match value.as_str() {
            "ACTIVE" => Some(ListingStatus::Active),
            "INACTIVE" => Some(ListingStatus::Inactive),
            "SUSPENDED" => Some(ListingStatus::Suspended),
            _ => None,
        });
    };

    view! {
        <div class="dashboard-page admin-listings-page">
            <header class="dashboard-page__header">
                <h1>"Listings"</h1>
                <select
                    class="dashboard-page__filter"
                    on:change=move |ev| set_filter(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    <option value="ACTIVE">"Active"</option>
                    <option value="INACTIVE">"Inactive"</option>
                    <option value="SUSPENDED">"Suspended"</option>
                </select>
            </header>

            <Show when=move || load_error.get().is_some()>
                <p class="dashboard-page__error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading listings..."</p> }>
                <Show
                    when=move || !listings.get().is_empty()
                    fallback=move || {
                        view! { <p class="dashboard-page__empty">"No listings match this filter."</p> }
                    }
                >
                    <ul class="listing-table">
                        {move || {
                            listings
                                .get()
                                .into_iter()
                                .map(|listing| {
                                    let id = listing.id.clone();
                                    let suspended = listing.status == ListingStatus::Suspended;
                                    let guide = listing
                                        .guide
                                        .as_ref()
                                        .map(|g| g.name.clone())
                                        .unwrap_or_default();
                                    view! {
                                        <li class="listing-table__row">
                                            <a
                                                class="listing-table__title"
                                                href=format!("/listing/{}", listing.id)
                                            >
                                                {listing.title.clone()}
                                            </a>
                                            <span class="listing-table__guide">{guide}</span>
                                            <span class="listing-table__destination">
                                                {listing.destination.clone()}
                                            </span>
                                            <span class="listing-table__rate">
                                                {format!("{} / day", format_usd(listing.daily_rate))}
                                            </span>
                                            <ListingBadge status=listing.status/>
                                            <button
                                                class="btn listing-table__moderate"
                                                class:btn--danger={!suspended}
                                                on:click=move |_| {
                                                    let next = if suspended {
                                                        ListingStatus::Active
                                                    } else {
                                                        ListingStatus::Suspended
                                                    };
                                                    on_moderate(id.clone(), next);
                                                }
                                            >
                                                {if suspended { "Restore" } else { "Suspend" }}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
