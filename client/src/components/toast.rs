//! Transient toast notifications.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// How long a toast stays up before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_MILLIS: u32 = 4000;

/// Queue a toast and schedule its dismissal.
pub fn show_toast(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let id = {
        let mut pushed = None;
        ui.update(|state| pushed = Some(state.push_toast(kind, message)));
        pushed
    };
    let _ = id;

    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            ui.update(|state| state.dismiss_toast(id));
        });
    }
}

/// Fixed-position shelf rendering the queued toasts.
#[component]
pub fn ToastShelf() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-shelf" role="status">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast toast--{}", toast.kind.class_suffix())>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| ui.update(|state| state.dismiss_toast(id))
                                    aria-label="Dismiss"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
