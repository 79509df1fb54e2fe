//! Status banners for the dashboard actions. Messages must be safe to render
//! and should never include credential material.

use leptos::prelude::*;

/// Supported banner styles.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled status banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-md border border-red-300 bg-red-50 px-4 py-2.5 text-sm text-red-800 dark:border-red-500 dark:bg-red-950/40 dark:text-red-200"
        }
        AlertKind::Success => {
            "rounded-md border border-green-300 bg-green-50 px-4 py-2.5 text-sm text-green-800 dark:border-green-500 dark:bg-green-950/40 dark:text-green-200"
        }
        AlertKind::Info => {
            "rounded-md border border-sky-300 bg-sky-50 px-4 py-2.5 text-sm text-sky-800 dark:border-sky-500 dark:bg-sky-950/40 dark:text-sky-200"
        }
    };

    view! { <div class=class role="status">{message}</div> }
}
