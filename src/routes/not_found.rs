//! Minimal 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[40vh] text-center space-y-4">
                <h1 class="text-6xl font-black text-gray-200 dark:text-gray-800 select-none">
                    "404"
                </h1>
                <p class="text-gray-500 dark:text-gray-400">"Page introuvable."</p>
                <A
                    href="/"
                    {..}
                    class="text-sm font-medium text-gray-700 dark:text-gray-200 underline hover:text-gray-900 dark:hover:text-white transition-colors"
                >
                    "Retour au tableau de bord"
                </A>
            </div>
        </AppShell>
    }
}
