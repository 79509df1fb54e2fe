//! Shared layout wrapper with the dashboard header and content container.
//! Routes focus on content; access control lives entirely on the backend.

use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-950">
            <header class="border-b border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900">
                <div class="max-w-screen-md flex items-center justify-between mx-auto px-4 py-3">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-2"
                    >
                        <span class="material-symbols-outlined text-gray-700 dark:text-gray-200">
                            "cabin"
                        </span>
                        <span class="font-semibold whitespace-nowrap text-gray-900 dark:text-white">
                            "Camp Dashboard"
                        </span>
                    </A>
                    <nav class="flex items-center space-x-4 text-sm text-gray-500 dark:text-gray-400">
                        <A
                            href="/health"
                            {..}
                            class="hover:text-gray-900 dark:hover:text-white transition-colors"
                        >
                            "Version"
                        </A>
                    </nav>
                </div>
            </header>
            <main class="flex-1 w-full max-w-screen-md mx-auto px-4 py-8">{children()}</main>
        </div>
    }
}
