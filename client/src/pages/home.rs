//! Public browse page: filterable, paginated tour search.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is server-rendered: its resources resolve through the
//! request-scoped data loader during SSR and through `gloo-net` after
//! hydration, so first paint already carries listings.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::components::pagination::Pager;
use crate::net::api;
use crate::net::types::ListingQuery;

/// Parse the free-text max-rate filter; junk and non-positive values mean
/// "no limit" rather than an error.
pub(crate) fn parse_max_rate(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value > 0.0).then_some(value)
}

/// Assemble a fresh query from the filter inputs, resetting to page one.
pub(crate) fn build_query(destination: &str, language: &str, expertise: &str, max_rate_raw: &str) -> ListingQuery {
    let optional = |raw: &str| {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    };
    ListingQuery {
        destination: destination.trim().to_owned(),
        language: optional(language),
        expertise: optional(expertise),
        max_rate: parse_max_rate(max_rate_raw),
        page: 1,
    }
}

#[component]
pub fn BrowsePage() -> impl IntoView {
    let destination = RwSignal::new(String::new());
    let language = RwSignal::new(String::new());
    let expertise = RwSignal::new(String::new());
    let max_rate = RwSignal::new(String::new());
    let query = RwSignal::new(ListingQuery::default());

    let languages = Resource::new(|| (), |()| async move { api::fetch_meta_languages().await });
    let expertise_options = Resource::new(|| (), |()| async move { api::fetch_meta_expertise().await });
    let results = Resource::new(move || query.get(), |q| async move { api::fetch_listings(&q).await });

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        query.set(build_query(&destination.get(), &language.get(), &expertise.get(), &max_rate.get()));
    };

    let on_page = Callback::new(move |page: u32| {
        query.update(|q| q.page = page);
    });

    let current_page = Signal::derive(move || query.get().page.max(1));
    let total_pages = Signal::derive(move || {
        results.get().map(|page| page.total_pages).unwrap_or_default()
    });

    view! {
        <div class="browse-page">
            <section class="browse-page__hero">
                <h1>"Find a local guide"</h1>
                <p class="browse-page__tagline">"Day tours led by people who live there."</p>
            </section>

            <form class="filter-bar" on:submit=on_apply>
                <input
                    class="filter-bar__input"
                    type="text"
                    placeholder="Where to?"
                    prop:value=move || destination.get()
                    on:input=move |ev| destination.set(event_target_value(&ev))
                />
                <select
                    class="filter-bar__select"
                    on:change=move |ev| language.set(event_target_value(&ev))
                >
                    <option value="">"Any language"</option>
                    {move || {
                        languages
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|option| view! { <option value=option.clone()>{option.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <select
                    class="filter-bar__select"
                    on:change=move |ev| expertise.set(event_target_value(&ev))
                >
                    <option value="">"Any specialty"</option>
                    {move || {
                        expertise_options
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|option| view! { <option value=option.clone()>{option.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <input
                    class="filter-bar__input filter-bar__input--rate"
                    type="number"
                    min="1"
                    placeholder="Max $/day"
                    prop:value=move || max_rate.get()
                    on:input=move |ev| max_rate.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Search"
                </button>
            </form>

            <Suspense fallback=move || {
                view! { <p class="browse-page__loading">"Loading tours..."</p> }
            }>
                {move || {
                    results
                        .get()
                        .map(|page| {
                            let count = page.total_items;
                            view! {
                                <p class="browse-page__count">
                                    {if count == 1 { "1 tour".to_owned() } else { format!("{count} tours") }}
                                </p>
                                <Show
                                    when={
                                        let empty = page.items.is_empty();
                                        move || !empty
                                    }
                                    fallback=move || {
                                        view! {
                                            <p class="browse-page__empty">
                                                "No tours match your filters."
                                            </p>
                                        }
                                    }
                                >
                                    <div class="browse-page__grid">
                                        {page
                                            .items
                                            .clone()
                                            .into_iter()
                                            .map(|listing| view! { <ListingCard listing=listing/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </Show>
                            }
                        })
                }}
            </Suspense>

            <Pager page=current_page total_pages=total_pages on_page=on_page/>
        </div>
    }
}
