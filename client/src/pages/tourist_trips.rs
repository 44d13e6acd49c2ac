//! Tourist dashboard: upcoming and past bookings.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::role_guard::RequireRole;
use crate::components::status_badge::BookingBadge;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::types::Role;
use crate::state::bookings::{BookingsState, can_cancel};
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;
use crate::util::format::{format_date, format_usd};

#[component]
pub fn TouristTripsPage() -> impl IntoView {
    view! {
        <RequireRole allow=vec![Role::Tourist]>
            <TripsContent/>
        </RequireRole>
    }
}

#[component]
fn TripsContent() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let bookings = RwSignal::new(BookingsState { loading: true, ..BookingsState::default() });
    let cancel_target = RwSignal::new(None::<String>);
    let reload_seq = RwSignal::new(0_u32);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        Effect::new(move || {
            reload_seq.track();
            bookings.update(|state| state.loading = true);
            let alive = alive_task.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_my_bookings().await;
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

    let on_cancel_confirmed = Callback::new(move |()| {
        let Some(id) = cancel_target.get_untracked() else {
            return;
        };
        cancel_target.set(None);
        let _ = (&id, &ui);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::cancel_booking(&id).await {
                    Ok(updated) => {
                        bookings.update(|state| state.reconcile(updated));
                        show_toast(ui, ToastKind::Success, "Booking cancelled.");
                    }
                    Err(error) => show_toast(ui, ToastKind::Error, error.user_message()),
                }
            });
        }
    });
    let on_dialog_cancel = Callback::new(move |()| cancel_target.set(None));

    view! {
        <div class="dashboard-page trips-page">
            <header class="dashboard-page__header">
                <h1>"My trips"</h1>
            </header>

            <Show when=move || bookings.get().error.is_some()>
                <div class="dashboard-page__error">
                    <p>{move || bookings.get().error.unwrap_or_default()}</p>
                    <button class="btn" on:click=move |_| reload_seq.update(|n| *n += 1)>
                        "Retry"
                    </button>
                </div>
            </Show>

            <Show
                when=move || !bookings.get().loading
                fallback=move || view! { <p>"Loading your trips..."</p> }
            >
                <Show
                    when=move || !bookings.get().items.is_empty()
                    fallback=move || {
                        view! {
                            <p class="dashboard-page__empty">
                                "No trips yet. " <a href="/">"Find a tour to book."</a>
                            </p>
                        }
                    }
                >
                    <ul class="booking-list">
                        {move || {
                            bookings
                                .get()
                                .items
                                .into_iter()
                                .map(|booking| {
                                    let id = booking.id.clone();
                                    let cancellable = can_cancel(booking.status);
                                    view! {
                                        <li class="booking-list__row">
                                            <a
                                                class="booking-list__title"
                                                href=format!("/listing/{}", booking.listing_id)
                                            >
                                                {booking.listing_title.clone()}
                                            </a>
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
                                                .guide_name
                                                .clone()
                                                .map(|name| {
                                                    view! {
                                                        <span class="booking-list__guide">
                                                            {format!("with {name}")}
                                                        </span>
                                                    }
                                                })}
                                            <BookingBadge status=booking.status/>
                                            <Show when=move || cancellable>
                                                <button
                                                    class="btn btn--danger booking-list__cancel"
                                                    on:click={
                                                        let id = id.clone();
                                                        move |_| cancel_target.set(Some(id.clone()))
                                                    }
                                                >
                                                    "Cancel"
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

            <Show when=move || cancel_target.get().is_some()>
                <ConfirmDialog
                    title="Cancel booking"
                    message="This tells the guide you are no longer coming. This cannot be undone."
                    confirm_label="Cancel booking"
                    danger=true
                    on_cancel=on_dialog_cancel
                    on_confirm=on_cancel_confirmed
                />
            </Show>
        </div>
    }
}
