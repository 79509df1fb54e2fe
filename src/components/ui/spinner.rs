use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-6 w-6 animate-spin rounded-full border-[3px] border-gray-200 border-t-gray-600 dark:border-gray-700 dark:border-t-gray-300"
            role="status"
            aria-live="polite"
            aria-label="Chargement"
        ></div>
    }
}
