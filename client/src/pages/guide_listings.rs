//! Guide dashboard: manage own listings.

#[cfg(test)]
#[path = "guide_listings_test.rs"]
mod guide_listings_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::role_guard::RequireRole;
use crate::components::status_badge::ListingBadge;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::types::{Listing, ListingInput, ListingStatus, Role};
use crate::state::listings::MyListingsState;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;
use crate::util::format::format_usd;

/// Split a comma-separated tag field into cleaned entries.
pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Validate the listing form and assemble the request body.
pub(crate) fn validate_listing_input(
    title: &str,
    destination: &str,
    description: &str,
    rate_raw: &str,
    languages_raw: &str,
    expertise_raw: &str,
) -> Result<ListingInput, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Give the tour a title.");
    }
    let destination = destination.trim();
    if destination.is_empty() {
        return Err("Name the destination.");
    }
    let Ok(daily_rate) = rate_raw.trim().parse::<f64>() else {
        return Err("Daily rate must be a number.");
    };
    if daily_rate <= 0.0 {
        return Err("Daily rate must be positive.");
    }
    Ok(ListingInput {
        title: title.to_owned(),
        destination: destination.to_owned(),
        description: description.trim().to_owned(),
        daily_rate,
        languages: split_tags(languages_raw),
        expertise: split_tags(expertise_raw),
    })
}

/// The status an activate/deactivate toggle moves a listing to. Suspended
/// listings stay suspended — only an admin can lift that.
pub(crate) fn toggled_status(current: ListingStatus) -> Option<ListingStatus> {
    match current {
        ListingStatus::Active => Some(ListingStatus::Inactive),
        ListingStatus::Inactive => Some(ListingStatus::Active),
        ListingStatus::Suspended | ListingStatus::Unknown => None,
    }
}

#[component]
pub fn GuideListingsPage() -> impl IntoView {
    view! {
        <RequireRole allow=vec![Role::Guide]>
            <GuideListingsContent/>
        </RequireRole>
    }
}

#[component]
fn GuideListingsContent() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let listings = RwSignal::new(MyListingsState { loading: true, ..MyListingsState::default() });
    // `Some(None)` = create dialog, `Some(Some(listing))` = edit dialog.
    let editing = RwSignal::new(None::<Option<Listing>>);
    let delete_target = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        Effect::new(move || {
            let alive = alive_task.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_my_listings().await;
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    listings.update(|state| match result {
                        Ok(items) => state.replace(items),
                        Err(error) => {
                            state.loading = false;
                            state.error = Some(error.user_message());
                        }
                    });
                }
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_toggle_status = move |id: String, current: ListingStatus| {
        let Some(next) = toggled_status(current) else {
            return;
        };
        // Flip optimistically; roll back if the backend rejects it.
        let mut previous = None;
        listings.update(|state| previous = state.set_status(&id, next));
        let Some(previous) = previous else {
            return;
        };
        let _ = (&previous, &ui);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::set_listing_status(&id, next).await {
                    Ok(updated) => listings.update(|state| state.upsert(updated)),
                    Err(error) => {
                        listings.update(|state| {
                            let _ = state.set_status(&id, previous);
                        });
                        show_toast(ui, ToastKind::Error, error.user_message());
                    }
                }
            });
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
                match crate::net::api::delete_listing(&id).await {
                    Ok(()) => {
                        listings.update(|state| state.remove(&id));
                        show_toast(ui, ToastKind::Success, "Listing deleted.");
                    }
                    Err(error) => show_toast(ui, ToastKind::Error, error.user_message()),
                }
            });
        }
    });
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_dialog_close = Callback::new(move |()| editing.set(None));

    view! {
        <div class="dashboard-page guide-listings-page">
            <header class="dashboard-page__header">
                <h1>"My listings"</h1>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>
                    "+ New listing"
                </button>
            </header>

            <Show when=move || listings.get().error.is_some()>
                <p class="dashboard-page__error">{move || listings.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !listings.get().loading
                fallback=move || view! { <p>"Loading your listings..."</p> }
            >
                <Show
                    when=move || !listings.get().items.is_empty()
                    fallback=move || {
                        view! {
                            <p class="dashboard-page__empty">
                                "No listings yet. Create one to start hosting."
                            </p>
                        }
                    }
                >
                    <ul class="listing-table">
                        {move || {
                            listings
                                .get()
                                .items
                                .into_iter()
                                .map(|listing| {
                                    let toggle_id = listing.id.clone();
                                    let edit_listing = listing.clone();
                                    let delete_id = listing.id.clone();
                                    let status = listing.status;
                                    let toggle_label = match toggled_status(status) {
                                        Some(ListingStatus::Active) => Some("Activate"),
                                        Some(_) => Some("Deactivate"),
                                        None => None,
                                    };
                                    view! {
                                        <li class="listing-table__row">
                                            <a
                                                class="listing-table__title"
                                                href=format!("/listing/{}", listing.id)
                                            >
                                                {listing.title.clone()}
                                            </a>
                                            <span class="listing-table__destination">
                                                {listing.destination.clone()}
                                            </span>
                                            <span class="listing-table__rate">
                                                {format!("{} / day", format_usd(listing.daily_rate))}
                                            </span>
                                            <ListingBadge status=status/>
                                            {toggle_label
                                                .map(|label| {
                                                    let id = toggle_id.clone();
                                                    view! {
                                                        <button
                                                            class="btn listing-table__toggle"
                                                            on:click=move |_| {
                                                                on_toggle_status(id.clone(), status);
                                                            }
                                                        >
                                                            {label}
                                                        </button>
                                                    }
                                                })}
                                            <button
                                                class="btn listing-table__edit"
                                                on:click=move |_| {
                                                    editing.set(Some(Some(edit_listing.clone())));
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--danger listing-table__delete"
                                                on:click=move |_| {
                                                    delete_target.set(Some(delete_id.clone()));
                                                }
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

            <Show when=move || editing.get().is_some()>
                <ListingDialog
                    existing=editing.get().flatten()
                    listings=listings
                    on_close=on_dialog_close
                />
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Delete listing"
                    message="This permanently removes the listing and hides it from tourists."
                    confirm_label="Delete"
                    danger=true
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirmed
                />
            </Show>
        </div>
    }
}

/// Modal dialog for creating or editing a listing.
#[component]
fn ListingDialog(
    existing: Option<Listing>,
    listings: RwSignal<MyListingsState>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let editing_id = existing.as_ref().map(|listing| listing.id.clone());
    let heading = if existing.is_some() { "Edit listing" } else { "Create listing" };

    let title = RwSignal::new(existing.as_ref().map(|l| l.title.clone()).unwrap_or_default());
    let destination = RwSignal::new(existing.as_ref().map(|l| l.destination.clone()).unwrap_or_default());
    let description = RwSignal::new(existing.as_ref().map(|l| l.description.clone()).unwrap_or_default());
    let rate = RwSignal::new(
        existing.as_ref().map(|l| l.daily_rate.to_string()).unwrap_or_default(),
    );
    let languages = RwSignal::new(existing.as_ref().map(|l| l.languages.join(", ")).unwrap_or_default());
    let expertise = RwSignal::new(existing.as_ref().map(|l| l.expertise.join(", ")).unwrap_or_default());
    let form_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        match validate_listing_input(
            &title.get_untracked(),
            &destination.get_untracked(),
            &description.get_untracked(),
            &rate.get_untracked(),
            &languages.get_untracked(),
            &expertise.get_untracked(),
        ) {
            Err(message) => form_error.set(Some(message)),
            Ok(input) => {
                form_error.set(None);
                busy.set(true);
                let editing_id = editing_id.clone();
                let _ = (&editing_id, &input, &ui, &listings, &on_close);

                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        let result = match &editing_id {
                            Some(id) => crate::net::api::update_listing(id, &input).await,
                            None => crate::net::api::create_listing(&input).await,
                        };
                        match result {
                            Ok(saved) => {
                                let created = editing_id.is_none();
                                listings.update(|state| {
                                    if created {
                                        state.prepend(saved);
                                    } else {
                                        state.upsert(saved);
                                    }
                                });
                                show_toast(
                                    ui,
                                    ToastKind::Success,
                                    if created { "Listing created." } else { "Listing updated." },
                                );
                                on_close.run(());
                            }
                            Err(error) => {
                                show_toast(ui, ToastKind::Error, error.user_message());
                                busy.set(false);
                            }
                        }
                    });
                }
            }
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Destination"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || destination.get()
                        on:input=move |ev| destination.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Daily rate (USD)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=move || rate.get()
                        on:input=move |ev| rate.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Languages (comma-separated)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="English, Spanish"
                        prop:value=move || languages.get()
                        on:input=move |ev| languages.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Specialties (comma-separated)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Food, History"
                        prop:value=move || expertise.get()
                        on:input=move |ev| expertise.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || form_error.get().is_some()>
                    <p class="dialog__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
