//! Guide dashboard: incoming booking requests.

use leptos::prelude::*;

use crate::components::role_guard::RequireRole;
use crate::components::status_badge::BookingBadge;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::types::{BookingStatus, Role};
use crate::state::bookings::{BookingsState, awaiting_decision};
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;
use crate::util::format::{format_date, format_usd};

#[component]
pub fn GuideBookingsPage() -> impl IntoView {
    view! {
        <RequireRole allow=vec![Role::Guide]>
            <GuideBookingsContent/>
        </RequireRole>
    }
}

#[component]
fn GuideBookingsContent() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let bookings = RwSignal::new(BookingsState { loading: true, ..BookingsState::default() });

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        Effect::new(move || {
            let alive = alive_task.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_guide_bookings().await;
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    bookings.update(|state| match result {
                        Ok(items) => state.replace(items),
                        Err(error) => state.fail(error.user_message()),
                    });
                }
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Optimistic decision: the row flips immediately, and flips back with a
    // toast if the backend rejects the transition.
    let on_decide = move |id: String, status: BookingStatus| {
        let mut previous = None;
        bookings.update(|state| previous = state.set_status(&id, status));
        let Some(previous) = previous else {
            return;
        };
        let _ = (&previous, &ui);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_booking_status(&id, status).await {
                    Ok(updated) => bookings.update(|state| state.reconcile(updated)),
                    Err(error) => {
                        bookings.update(|state| {
                            let _ = state.set_status(&id, previous);
                        });
                        show_toast(ui, ToastKind::Error, error.user_message());
                    }
                }
            });
        }
    };

    view! {
        <div class="dashboard-page guide-bookings-page">
            <header class="dashboard-page__header">
                <h1>"Booking requests"</h1>
            </header>

            <Show when=move || bookings.get().error.is_some()>
                <p class="dashboard-page__error">{move || bookings.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !bookings.get().loading
                fallback=move || view! { <p>"Loading requests..."</p> }
            >
                <Show
                    when=move || !bookings.get().items.is_empty()
                    fallback=move || {
                        view! { <p class="dashboard-page__empty">"No booking requests yet."</p> }
                    }
                >
                    <ul class="booking-list">
                        {move || {
                            bookings
                                .get()
                                .items
                                .into_iter()
                                .map(|booking| {
                                    let confirm_id = booking.id.clone();
                                    let decline_id = booking.id.clone();
                                    let undecided = awaiting_decision(booking.status);
                                    view! {
                                        <li class="booking-list__row">
                                            <span class="booking-list__title">
                                                {booking.listing_title.clone()}
                                            </span>
                                            <span class="booking-list__tourist">
                                                {booking.tourist_name.clone().unwrap_or_default()}
                                            </span>
                                            <span class="booking-list__date">
                                                {format_date(&booking.date)}
                                            </span>
                                            <span class="booking-list__party">
                                                {format!("{} people", booking.party_size)}
                                            </span>
                                            <span class="booking-list__price">
                                                {format_usd(booking.total_price)}
                                            </span>
                                            {booking
                                                .note
                                                .clone()
                                                .map(|note| {
                                                    view! {
                                                        <span class="booking-list__note">{note}</span>
                                                    }
                                                })}
                                            <BookingBadge status=booking.status/>
                                            <Show when=move || undecided>
                                                <button
                                                    class="btn btn--primary booking-list__confirm"
                                                    on:click={
                                                        let id = confirm_id.clone();
                                                        move |_| on_decide(id.clone(), BookingStatus::Confirmed)
                                                    }
                                                >
                                                    "Confirm"
                                                </button>
                                                <button
                                                    class="btn btn--danger booking-list__decline"
                                                    on:click={
                                                        let id = decline_id.clone();
                                                        move |_| on_decide(id.clone(), BookingStatus::Declined)
                                                    }
                                                >
                                                    "Decline"
                                                </button>
                                            </Show>
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
