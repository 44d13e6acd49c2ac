//! Tourist dashboard: saved listings.

use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::components::role_guard::RequireRole;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::types::Role;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;
use crate::state::wishlist::WishlistState;

#[component]
pub fn TouristWishlistPage() -> impl IntoView {
    view! {
        <RequireRole allow=vec![Role::Tourist]>
            <WishlistContent/>
        </RequireRole>
    }
}

#[component]
fn WishlistContent() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wishlist = RwSignal::new(WishlistState { loading: true, ..WishlistState::default() });

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        Effect::new(move || {
            let alive = alive_task.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_wishlist().await;
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    wishlist.update(|state| match result {
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

    // Optimistic remove: the card disappears immediately and is restored in
    // place if the backend says no. The card reports its listing id; resolve
    // the wishlist entry holding it.
    let on_remove = Callback::new(move |listing_id: String| {
        let mut removed = None;
        wishlist.update(|state| {
            if let Some(entry_id) = state
                .items
                .iter()
                .find(|entry| entry.listing.id == listing_id)
                .map(|entry| entry.id.clone())
            {
                removed = state.remove(&entry_id);
            }
        });
        let Some((index, item)) = removed else {
            return;
        };
        let _ = (&index, &item, &ui);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(error) = crate::net::api::remove_from_wishlist(&item.id).await {
                    wishlist.update(|state| state.restore(index, item));
                    show_toast(ui, ToastKind::Error, error.user_message());
                }
            });
        }
    });

    view! {
        <div class="dashboard-page wishlist-page">
            <header class="dashboard-page__header">
                <h1>"Wishlist"</h1>
            </header>

            <Show when=move || wishlist.get().error.is_some()>
                <p class="dashboard-page__error">{move || wishlist.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !wishlist.get().loading
                fallback=move || view! { <p>"Loading your wishlist..."</p> }
            >
                <Show
                    when=move || !wishlist.get().items.is_empty()
                    fallback=move || {
                        view! {
                            <p class="dashboard-page__empty">
                                "Nothing saved yet. " <a href="/">"Browse tours"</a>
                                " and tap the heart to keep them here."
                            </p>
                        }
                    }
                >
                    <div class="wishlist-page__grid">
                        {move || {
                            wishlist
                                .get()
                                .items
                                .into_iter()
                                .map(|item| {
                                    view! { <ListingCard listing=item.listing on_remove=on_remove/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
