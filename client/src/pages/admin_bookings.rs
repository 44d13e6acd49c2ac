//! Admin dashboard: all bookings with status filter.

use leptos::prelude::*;

use crate::components::role_guard::RequireRole;
use crate::components::status_badge::BookingBadge;
use crate::net::types::{Booking, BookingStatus, Role};
use crate::util::format::{format_date, format_usd};

#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    view! {
        <RequireRole allow=vec![Role::Admin]>
            <AdminBookingsContent/>
        </RequireRole>
    }
}

#[component]
fn AdminBookingsContent() -> impl IntoView {
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let status_filter = RwSignal::new(None::<BookingStatus>);

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
                let result = crate::net::api::fetch_all_bookings(filter).await;
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    match result {
                        Ok(items) => bookings.set(items),
                        Err(error) => load_error.set(Some(error.user_message())),
                    }
                    loading.set(false);
                }
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let set_filter = move |value: String| {
        status_filter.set(match value.as_str() {
            "PENDING" => Some(BookingStatus::Pending),
            "CONFIRMED" => Some(BookingStatus::Confirmed),
            "DECLINED" => Some(BookingStatus::Declined),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            "COMPLETED" => Some(BookingStatus::Completed),
            _ => None,
        });
    };

    view! {
        <div class="dashboard-page admin-bookings-page">
            <header class="dashboard-page__header">
                <h1>"Bookings"</h1>
                <select
                    class="dashboard-page__filter"
                    on:change=move |ev| set_filter(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    <option value="PENDING">"Pending"</option>
                    <option value="CONFIRMED">"Confirmed"</option>
                    <option value="DECLINED">"Declined"</option>
                    <option value="CANCELLED">"Cancelled"</option>
                    <option value="COMPLETED">"Completed"</option>
                </select>
            </header>

            <Show when=move || load_error.get().is_some()>
                <p class="dashboard-page__error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading bookings..."</p> }>
                <Show
                    when=move || !bookings.get().is_empty()
                    fallback=move || {
                        view! { <p class="dashboard-page__empty">"No bookings match this filter."</p> }
                    }
                >
                    <ul class="booking-list">
                        {move || {
                            bookings
                                .get()
                                .into_iter()
                                .map(|booking| {
                                    view! {
                                        <li class="booking-list__row">
                                            <span class="booking-list__title">
                                                {booking.listing_title.clone()}
                                            </span>
                                            <span class="booking-list__tourist">
                                                {booking.tourist_name.clone().unwrap_or_default()}
                                            </span>
                                            <span class="booking-list__guide">
                                                {booking.guide_name.clone().unwrap_or_default()}
                                            </span>
                                            <span class="booking-list__date">
                                                {format_date(&booking.date)}
                                            </span>
                                            <span class="booking-list__price">
                                                {format_usd(booking.total_price)}
                                            </span>
                                            <BookingBadge status=booking.status/>
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
