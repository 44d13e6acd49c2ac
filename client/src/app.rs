//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toast::ToastShelf;
use crate::pages::{
    admin_bookings::AdminBookingsPage, admin_listings::AdminListingsPage, admin_users::AdminUsersPage,
    guide_bookings::GuideBookingsPage, guide_listings::GuideListingsPage, home::BrowsePage,
    listing_detail::ListingPage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
    tourist_trips::TouristTripsPage, tourist_wishlist::TouristWishlistPage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, kicks off the mount-time session probe,
/// and sets up routing. During SSR it also builds the request-scoped data
/// loader from the inbound request so public pages render with data.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState { dark_mode: crate::util::dark_mode::initial(), ..UiState::default() });

    provide_context(auth);
    provide_context(ui);

    // One loader per inbound request: cookie header forwarded verbatim,
    // results memoized for the lifetime of this render.
    #[cfg(feature = "ssr")]
    {
        if let Some(parts) = use_context::<http::request::Parts>() {
            provide_context(crate::net::loader::DataLoader::from_parts(&parts));
        }
    }

    // Mount-time session probe establishing initial auth state.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let _ = crate::state::auth::check_auth(auth).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/roamly.css"/>
        <Title text="Roamly"/>

        <Router>
            <div class="app-shell" class:app-shell--dark=move || ui.get().dark_mode>
                <Navbar/>
                <main class="app-shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=BrowsePage/>
                        <Route path=(StaticSegment("listing"), ParamSegment("id")) view=ListingPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route
                            path=(StaticSegment("dashboard"), StaticSegment("tourist"), StaticSegment("my-trips"))
                            view=TouristTripsPage
                        />
                        <Route
                            path=(StaticSegment("dashboard"), StaticSegment("tourist"), StaticSegment("wishlist"))
                            view=TouristWishlistPage
                        />
                        <Route
                            path=(StaticSegment("dashboard"), StaticSegment("guide"), StaticSegment("my-listings"))
                            view=GuideListingsPage
                        />
                        <Route
                            path=(StaticSegment("dashboard"), StaticSegment("guide"), StaticSegment("bookings"))
                            view=GuideBookingsPage
                        />
                        <Route
                            path=(StaticSegment("dashboard"), StaticSegment("admin"), StaticSegment("users"))
                            view=AdminUsersPage
                        />
                        <Route
                            path=(StaticSegment("dashboard"), StaticSegment("admin"), StaticSegment("listings"))
                            view=AdminListingsPage
                        />
                        <Route
                            path=(StaticSegment("dashboard"), StaticSegment("admin"), StaticSegment("bookings"))
                            view=AdminBookingsPage
                        />
                    </Routes>
                </main>
                <ToastShelf/>
            </div>
        </Router>
    }
}
