//! Numbered pagination control for browse results.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Page numbers to offer around the current page, clamped to `[1, total]`.
/// `width` is the maximum count of numbered buttons.
pub(crate) fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    if total == 0 || width == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let half = width / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + width - 1).min(total);
    start = end.saturating_sub(width - 1).max(1);
    (start..=end).collect()
}

/// Prev/next + numbered page buttons.
#[component]
pub fn Pager(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pager" aria-label="Pagination">
                <button
                    class="btn pager__prev"
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_page.run(page.get().saturating_sub(1).max(1))
                >
                    "‹ Prev"
                </button>
                {move || {
                    page_window(page.get(), total_pages.get(), 5)
                        .into_iter()
                        .map(|number| {
                            let current = number == page.get();
                            view! {
                                <button
                                    class="btn pager__page"
                                    class:pager__page--current=current
                                    disabled=current
                                    on:click=move |_| on_page.run(number)
                                >
                                    {number.to_string()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="btn pager__next"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| on_page.run((page.get() + 1).min(total_pages.get()))
                >
                    "Next ›"
                </button>
            </nav>
        </Show>
    }
}
