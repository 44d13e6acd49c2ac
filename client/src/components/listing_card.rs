//! Reusable card for listing search results and wishlist rows.

use leptos::prelude::*;

use crate::net::types::ListingSummary;
use crate::util::format::format_usd;

/// A clickable card representing a tour listing.
#[component]
pub fn ListingCard(
    listing: ListingSummary,
    /// Optional trailing action (wishlist remove, etc.) rendered in the
    /// card's corner.
    #[prop(optional)]
    on_remove: Option<Callback<String>>,
) -> impl IntoView {
    let href = format!("/listing/{}", listing.id);
    let id = listing.id.clone();
    let rate = format!("{} / day", format_usd(listing.daily_rate));
    let languages = listing.languages.join(" · ");
    let rating = listing.rating.map(|value| format!("★ {value:.1}"));
    let photo = listing.photo.clone();

    let on_remove_click = Callback::new(move |()| {
        if let Some(on_remove) = on_remove.as_ref() {
            on_remove.run(id.clone());
        }
    });

    view! {
        <a class="listing-card" href=href>
            <span class="listing-card__photo">
                {photo.map(|url| view! { <img class="listing-card__img" src=url alt=""/> })}
            </span>
            <span class="listing-card__title">{listing.title}</span>
            <span class="listing-card__destination">{listing.destination}</span>
            <span class="listing-card__rate">{rate}</span>
            <Show when={
                let languages = languages.clone();
                move || !languages.is_empty()
            }>
                <span class="listing-card__languages">{languages.clone()}</span>
            </Show>
            {rating.map(|text| view! { <span class="listing-card__rating">{text}</span> })}
            {listing
                .guide_name
                .map(|name| view! { <span class="listing-card__guide">{format!("with {name}")}</span> })}
            <Show when=move || on_remove.is_some()>
                <button
                    class="listing-card__remove"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_remove_click.run(());
                    }
                    title="Remove from wishlist"
                    aria-label="Remove from wishlist"
                >
                    "✕"
                </button>
            </Show>
        </a>
    }
}
