//! Profile page: view and edit the signed-in user's details.
//!
//! Any authenticated role may view this page; the editable fields differ by
//! role (day rate and expertise for guides, travel preferences for tourists).

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::role_guard::RequireRole;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::types::Role;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;

use super::guide_listings::split_tags;

/// Assemble the PATCH body from the form fields. Only fields meaningful for
/// the role are included, so a tourist cannot submit a day rate.
pub(crate) fn profile_patch(
    bio: &str,
    picture_url: &str,
    languages_raw: &str,
    expertise_raw: &str,
    preferences_raw: &str,
    rate_raw: &str,
    role: Role,
) -> Result<serde_json::Value, &'static str> {
    let mut fields = serde_json::Map::new();
    fields.insert("bio".to_owned(), serde_json::json!(bio.trim()));
    fields.insert("languages".to_owned(), serde_json::json!(split_tags(languages_raw)));

    let picture = picture_url.trim();
    fields.insert(
        "profilePicture".to_owned(),
        if picture.is_empty() { serde_json::Value::Null } else { serde_json::Value::from(picture) },
    );

    match role {
        Role::Guide => {
            fields.insert("expertise".to_owned(), serde_json::json!(split_tags(expertise_raw)));
            let rate_raw = rate_raw.trim();
            if !rate_raw.is_empty() {
                let Ok(rate) = rate_raw.parse::<f64>() else {
                    return Err("Daily rate must be a number.");
                };
                if rate <= 0.0 {
                    return Err("Daily rate must be positive.");
                }
                fields.insert("dailyRate".to_owned(), serde_json::json!(rate));
            }
        }
        Role::Tourist => {
            fields.insert(
                "travelPreferences".to_owned(),
                serde_json::json!(split_tags(preferences_raw)),
            );
        }
        Role::Admin | Role::Unknown => {}
    }

    Ok(serde_json::Value::Object(fields))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireRole allow=vec![Role::Tourist, Role::Guide, Role::Admin]>
            <ProfileContent/>
        </RequireRole>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let bio = RwSignal::new(String::new());
    let picture_url = RwSignal::new(String::new());
    let languages = RwSignal::new(String::new());
    let expertise = RwSignal::new(String::new());
    let preferences = RwSignal::new(String::new());
    let rate = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);
    let seeded = RwSignal::new(false);

    // Known language/specialty vocabulary, fetched concurrently and shown as
    // datalist suggestions under the free-text fields.
    let known_options = RwSignal::new((Vec::<String>::new(), Vec::<String>::new()));
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        Effect::new(move || {
            let alive = alive_task.clone();
            leptos::task::spawn_local(async move {
                let (languages, expertise) = futures::join!(
                    crate::net::api::fetch_meta_languages(),
                    crate::net::api::fetch_meta_expertise(),
                );
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    known_options.set((languages, expertise));
                }
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Seed the form once from the resolved session user.
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        let Some(user) = auth.get().user else {
            return;
        };
        bio.set(user.bio.unwrap_or_default());
        picture_url.set(user.profile_picture.unwrap_or_default());
        languages.set(user.languages.unwrap_or_default().join(", "));
        expertise.set(user.expertise.unwrap_or_default().join(", "));
        preferences.set(user.travel_preferences.unwrap_or_default().join(", "));
        rate.set(user.daily_rate.map(|value| value.to_string()).unwrap_or_default());
        seeded.set(true);
    });

    let role = move || auth.get().user.map(|user| user.role).unwrap_or_default();
    let is_guide = move || role() == Role::Guide;
    let is_tourist = move || role() == Role::Tourist;

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match profile_patch(
            &bio.get(),
            &picture_url.get(),
            &languages.get(),
            &expertise.get(),
            &preferences.get(),
            &rate.get(),
            role(),
        ) {
            Err(message) => form_error.set(Some(message)),
            Ok(patch) => {
                form_error.set(None);
                busy.set(true);
                let _ = (&patch, &ui, &auth);

                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        match crate::net::api::update_profile(&patch).await {
                            Ok(_) => {
                                // Re-probe rather than trusting the PATCH
                                // response; the holder must mirror the server.
                                let _ = crate::state::auth::check_auth(auth).await;
                                show_toast(ui, ToastKind::Success, "Profile saved.");
                            }
                            Err(error) => show_toast(ui, ToastKind::Error, error.user_message()),
                        }
                        busy.set(false);
                    });
                }
            }
        }
    };

    view! {
        <div class="dashboard-page profile-page">
            <header class="dashboard-page__header">
                <h1>"Profile"</h1>
            </header>

            <section class="profile-page__identity">
                <p class="profile-page__name">
                    {move || auth.get().user.map(|user| user.name).unwrap_or_default()}
                </p>
                <p class="profile-page__email">
                    {move || auth.get().user.map(|user| user.email).unwrap_or_default()}
                </p>
                <p class="profile-page__role">{move || role().as_str()}</p>
            </section>

            <form class="profile-form" on:submit=on_save>
                <label class="profile-form__label">
                    "Bio"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Photo URL"
                    <input
                        class="profile-form__input"
                        type="url"
                        prop:value=move || picture_url.get()
                        on:input=move |ev| picture_url.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Languages (comma-separated)"
                    <input
                        class="profile-form__input"
                        type="text"
                        list="known-languages"
                        prop:value=move || languages.get()
                        on:input=move |ev| languages.set(event_target_value(&ev))
                    />
                </label>
                <datalist id="known-languages">
                    {move || {
                        known_options
                            .get()
                            .0
                            .into_iter()
                            .map(|option| view! { <option value=option></option> })
                            .collect::<Vec<_>>()
                    }}
                </datalist>
                <Show when=move || is_guide()>
                    <label class="profile-form__label">
                        "Specialties (comma-separated)"
                        <input
                            class="profile-form__input"
                            type="text"
                            list="known-expertise"
                            prop:value=move || expertise.get()
                            on:input=move |ev| expertise.set(event_target_value(&ev))
                        />
                    </label>
                    <datalist id="known-expertise">
                        {move || {
                            known_options
                                .get()
                                .1
                                .into_iter()
                                .map(|option| view! { <option value=option></option> })
                                .collect::<Vec<_>>()
                        }}
                    </datalist>
                    <label class="profile-form__label">
                        "Daily rate (USD)"
                        <input
                            class="profile-form__input"
                            type="number"
                            min="1"
                            prop:value=move || rate.get()
                            on:input=move |ev| rate.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <Show when=move || is_tourist()>
                    <label class="profile-form__label">
                        "Travel preferences (comma-separated)"
                        <input
                            class="profile-form__input"
                            type="text"
                            placeholder="Food, Hiking, Museums"
                            prop:value=move || preferences.get()
                            on:input=move |ev| preferences.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <Show when=move || form_error.get().is_some()>
                    <p class="profile-form__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save profile" }}
                </button>
            </form>
        </div>
    }
}
