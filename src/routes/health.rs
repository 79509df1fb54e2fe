use crate::app_lib::{built_info, GIT_COMMIT_HASH};
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block w-full max-w-[28rem] rounded-lg border border-gray-200 bg-white dark:border-gray-700 dark:bg-gray-900">
                    <div class="border-b border-gray-200 dark:border-gray-700 px-6 py-3 text-gray-700 dark:text-gray-200 font-semibold">
                        "Build"
                    </div>
                    <div class="p-6 text-sm text-gray-900 dark:text-gray-100 space-y-1">
                        <p>{format!("{} {}", built_info::PKG_NAME, built_info::PKG_VERSION)}</p>
                        <pre>{GIT_COMMIT_HASH}</pre>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
