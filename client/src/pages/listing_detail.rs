//! Listing detail page with booking request and wishlist actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The listing itself is server-rendered via the data loader; booking and
//! wishlist actions are browser-only and require a session. Price math stays
//! on the backend — this page only displays what the API returns.

#[cfg(test)]
#[path = "listing_detail_test.rs"]
mod listing_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::api;
use crate::net::types::{BookingInput, Role};
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;
use crate::util::auth::login_redirect;
use crate::util::format::format_usd;

/// Validate the booking form. Returns the cleaned date and party size, or a
/// message for the inline error line.
pub(crate) fn validate_booking_input(date: &str, party_size_raw: &str) -> Result<(String, u32), &'static str> {
    let date = date.trim();
    let shape_ok = date.len() == 10
        && date.as_bytes()[4] == b'-'
        && date.as_bytes()[7] == b'-'
        && date.chars().enumerate().all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit());
    if !shape_ok {
        return Err("Pick a tour date.");
    }
    let Ok(party_size) = party_size_raw.trim().parse::<u32>() else {
        return Err("Party size must be a number.");
    };
    if !(1..=20).contains(&party_size) {
        return Err("Party size must be between 1 and 20.");
    }
    Ok((date.to_owned(), party_size))
}

#[component]
pub fn ListingPage() -> impl IntoView {
    let params = use_params_map();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();

    let listing_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let listing = Resource::new(listing_id, |id| async move { api::fetch_listing(&id).await });

    // Booking form state.
    let date = RwSignal::new(String::new());
    let party_size = RwSignal::new("2".to_owned());
    let note = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    // Wishlist membership: `None` until known, then the entry id when saved.
    let wishlist_entry = RwSignal::new(None::<String>);

    let is_tourist = move || auth.get().user.is_some_and(|user| user.role == Role::Tourist);

    #[cfg(feature = "hydrate")]
    {
        // Resolve whether this listing is already saved. The alive flag keeps
        // a late response from touching state after navigation away.
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let id_for_wishlist = listing_id;
        Effect::new(move || {
            if !is_tourist() {
                return;
            }
            let alive = alive_task.clone();
            let listing_id = id_for_wishlist();
            leptos::task::spawn_local(async move {
                // A failed lookup just means the heart starts unfilled.
                let items = api::fetch_wishlist().await.unwrap_or_default();
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                let entry = items.into_iter().find(|item| item.listing.id == listing_id);
                wishlist_entry.set(entry.map(|item| item.id));
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let current_path = move || {
        let path = location.pathname.get();
        let search = location.search.get();
        if search.is_empty() { path } else { format!("{path}?{search}") }
    };

    let navigate_book = navigate.clone();
    let on_book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if !auth.get().is_authenticated() {
            navigate_book(&login_redirect(&current_path()), NavigateOptions::default());
            return;
        }
        match validate_booking_input(&date.get(), &party_size.get()) {
            Err(message) => form_error.set(Some(message)),
            Ok((clean_date, clean_party)) => {
                form_error.set(None);
                busy.set(true);
                let input = BookingInput {
                    listing_id: listing_id(),
                    date: clean_date,
                    party_size: clean_party,
                    note: {
                        let trimmed = note.get().trim().to_owned();
                        (!trimmed.is_empty()).then_some(trimmed)
                    },
                };
                #[cfg(feature = "hydrate")]
                {
                    let navigate_done = navigate_book.clone();
                    leptos::task::spawn_local(async move {
                        match api::create_booking(&input).await {
                            Ok(_) => {
                                show_toast(ui, ToastKind::Success, "Booking requested. The guide will confirm.");
                                navigate_done("/dashboard/tourist/my-trips", NavigateOptions::default());
                            }
                            Err(error) => {
                                show_toast(ui, ToastKind::Error, error.user_message());
                                busy.set(false);
                            }
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (input, ui);
                }
            }
        }
    };

    let on_wishlist_toggle = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let listing_id = listing_id();
            match wishlist_entry.get() {
                // Optimistic remove; restore the entry id if the call fails.
                Some(entry_id) => {
                    wishlist_entry.set(None);
                    leptos::task::spawn_local(async move {
                        if let Err(error) = api::remove_from_wishlist(&entry_id).await {
                            wishlist_entry.set(Some(entry_id));
                            show_toast(ui, ToastKind::Error, error.user_message());
                        }
                    });
                }
                None => {
                    leptos::task::spawn_local(async move {
                        match api::add_to_wishlist(&listing_id).await {
                            Ok(item) => wishlist_entry.set(Some(item.id)),
                            Err(error) => show_toast(ui, ToastKind::Error, error.user_message()),
                        }
                    });
                }
            }
        }
    };

    view! {
        <div class="listing-page">
            <Suspense fallback=move || view! { <p class="listing-page__loading">"Loading tour..."</p> }>
                {move || {
                    listing
                        .get()
                        .map(|maybe_listing| match maybe_listing {
                            None => {
                                view! {
                                    <div class="listing-page__missing">
                                        <h1>"Tour not found"</h1>
                                        <p>
                                            "This tour may have been removed. "
                                            <a href="/">"Back to browse."</a>
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                            Some(listing) => {
                                let rate = format!("{} / day", format_usd(listing.daily_rate));
                                let languages = listing.languages.join(" · ");
                                let expertise = listing.expertise.join(" · ");
                                view! {
                                    <article class="listing-page__detail">
                                        <header class="listing-page__header">
                                            <h1>{listing.title.clone()}</h1>
                                            <Show when=move || is_tourist()>
                                                <button
                                                    class="btn listing-page__wishlist"
                                                    class:listing-page__wishlist--saved=move || {
                                                        wishlist_entry.get().is_some()
                                                    }
                                                    on:click=on_wishlist_toggle
                                                >
                                                    {move || {
                                                        if wishlist_entry.get().is_some() {
                                                            "♥ Saved"
                                                        } else {
                                                            "♡ Save"
                                                        }
                                                    }}
                                                </button>
                                            </Show>
                                        </header>
                                        <p class="listing-page__destination">{listing.destination.clone()}</p>
                                        <p class="listing-page__rate">{rate}</p>
                                        {listing
                                            .guide
                                            .clone()
                                            .map(|guide| {
                                                view! {
                                                    <p class="listing-page__guide">
                                                        "Hosted by " {guide.name}
                                                    </p>
                                                }
                                            })}
                                        <Show when={
                                            let has = !languages.is_empty();
                                            move || has
                                        }>
                                            <p class="listing-page__languages">{languages.clone()}</p>
                                        </Show>
                                        <Show when={
                                            let has = !expertise.is_empty();
                                            move || has
                                        }>
                                            <p class="listing-page__expertise">{expertise.clone()}</p>
                                        </Show>
                                        <p class="listing-page__description">{listing.description.clone()}</p>
                                    </article>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <section class="booking-form">
                <h2>"Request this tour"</h2>
                <form on:submit=on_book>
                    <label class="booking-form__label">
                        "Date"
                        <input
                            class="booking-form__input"
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="booking-form__label">
                        "Party size"
                        <input
                            class="booking-form__input"
                            type="number"
                            min="1"
                            max="20"
                            prop:value=move || party_size.get()
                            on:input=move |ev| party_size.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="booking-form__label">
                        "Note to the guide"
                        <input
                            class="booking-form__input"
                            type="text"
                            placeholder="Anything the guide should know?"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || form_error.get().is_some()>
                        <p class="booking-form__error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Requesting..." } else { "Request booking" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
