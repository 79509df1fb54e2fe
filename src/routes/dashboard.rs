//! Admin section of the dashboard: passkey registration and sign-in.
//!
//! Each action is a strict sequence: set an in-progress status, run the
//! ceremony flow, set the final status. Errors never leave this component;
//! they are logged to the console and rendered in the status banner. A
//! per-action pending flag rejects re-triggers while a ceremony is running.

use crate::{
    app_lib::{config::AppConfig, log_error, theme::Theme},
    components::{Alert, AlertKind, AppShell, Spinner},
    features::passkeys::{ceremony::BrowserAuthenticator, client::HttpBackend, flow},
};
use js_sys::Reflect;
use leptos::{prelude::*, task::spawn_local};
use wasm_bindgen::JsValue;

fn webauthn_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::has(window.as_ref(), &JsValue::from_str("PublicKeyCredential"))
        .ok()
        .unwrap_or(false)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = AppConfig::load();
    let backend = StoredValue::new(HttpBackend::new(&config));
    let supported = webauthn_supported();

    let (admin_id, set_admin_id) = signal(config.admin_id.clone());
    let (status, set_status) = signal::<Option<(AlertKind, String)>>(None);
    let (register_pending, set_register_pending) = signal(false);
    let (login_pending, set_login_pending) = signal(false);
    let (session_pending, set_session_pending) = signal(false);

    let any_pending = Signal::derive(move || {
        register_pending.get() || login_pending.get() || session_pending.get()
    });

    let on_register = move |_| {
        if !supported {
            set_status.set(Some((
                AlertKind::Info,
                "Les passkeys ne sont pas prises en charge par ce navigateur.".to_string(),
            )));
            return;
        }
        if register_pending.get_untracked() {
            return;
        }
        set_register_pending.set(true);
        set_status.set(Some((
            AlertKind::Info,
            "Préparation de l'enregistrement…".to_string(),
        )));
        let admin = admin_id.get_untracked();
        let backend = backend.get_value();
        spawn_local(async move {
            match flow::register(&backend, &BrowserAuthenticator, &admin).await {
                Ok(()) => {
                    set_status.set(Some((
                        AlertKind::Success,
                        "Passkey enregistrée ✅".to_string(),
                    )));
                }
                Err(err) => {
                    log_error("passkey registration", &err);
                    set_status.set(Some((
                        AlertKind::Error,
                        format!("Erreur enregistrement: {err}"),
                    )));
                }
            }
            set_register_pending.set(false);
        });
    };

    let on_login = move |_| {
        if !supported {
            set_status.set(Some((
                AlertKind::Info,
                "Les passkeys ne sont pas prises en charge par ce navigateur.".to_string(),
            )));
            return;
        }
        if login_pending.get_untracked() {
            return;
        }
        set_login_pending.set(true);
        set_status.set(Some((
            AlertKind::Info,
            "Demande d'authentification…".to_string(),
        )));
        let admin = admin_id.get_untracked();
        let backend = backend.get_value();
        spawn_local(async move {
            match flow::login(&backend, &BrowserAuthenticator, &admin).await {
                Ok(true) => {
                    set_status.set(Some((
                        AlertKind::Success,
                        "Connexion admin réussie ✅".to_string(),
                    )));
                }
                Ok(false) => {
                    set_status.set(Some((
                        AlertKind::Error,
                        "Échec de la connexion ❌".to_string(),
                    )));
                }
                Err(err) => {
                    log_error("passkey sign-in", &err);
                    set_status.set(Some((AlertKind::Error, format!("Erreur connexion: {err}"))));
                }
            }
            set_login_pending.set(false);
        });
    };

    let on_refresh_session = move |_| {
        if session_pending.get_untracked() {
            return;
        }
        set_session_pending.set(true);
        let backend = backend.get_value();
        spawn_local(async move {
            match flow::admin_session(&backend).await {
                Ok(session) if session.authenticated => {
                    set_status.set(Some((
                        AlertKind::Success,
                        "Admin connecté ✅".to_string(),
                    )));
                }
                Ok(_) => {
                    set_status.set(Some((AlertKind::Info, "Admin non connecté.".to_string())));
                }
                Err(err) => {
                    log_error("admin session probe", &err);
                    set_status.set(Some((AlertKind::Info, "Admin non connecté.".to_string())));
                }
            }
            set_session_pending.set(false);
        });
    };

    view! {
        <AppShell>
            <div class="rounded-lg border border-gray-200 bg-white dark:border-gray-700 dark:bg-gray-900">
                <div class="border-b border-gray-200 dark:border-gray-700 px-6 py-4">
                    <h1 class="text-base font-semibold text-gray-900 dark:text-white">
                        "Connexion admin via biométrie (WebAuthn)"
                    </h1>
                    <p class="text-xs text-gray-500 dark:text-gray-400 mt-1">
                        {move || {
                            if supported {
                                "La passkey est liée à l'authentificateur de cet appareil."
                            } else {
                                "Les passkeys ne sont pas prises en charge par ce navigateur."
                            }
                        }}
                    </p>
                </div>

                <div class=Theme::ROW>
                    <label
                        class="block mb-1 text-xs font-medium text-gray-700 dark:text-gray-300"
                        for="admin-id"
                    >
                        "Identifiant admin"
                    </label>
                    <input
                        id="admin-id"
                        type="email"
                        class="bg-white border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2 dark:bg-gray-800 dark:border-gray-600 dark:text-white"
                        prop:value=admin_id
                        on:input=move |event| set_admin_id.set(event_target_value(&event))
                    />
                </div>

                <div class=Theme::ROW>
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-3">
                            <span class=Theme::ICON>"fingerprint"</span>
                            <p class="text-sm font-medium text-gray-900 dark:text-white">
                                "Passkey admin"
                            </p>
                        </div>
                        <div class="flex items-center space-x-2">
                            <button
                                on:click=on_register
                                class=Theme::ROW_BUTTON
                                class:cursor-not-allowed=move || register_pending.get()
                                class:opacity-70=move || register_pending.get()
                                disabled=move || register_pending.get()
                            >
                                "Enregistrer une passkey"
                            </button>
                            <button
                                on:click=on_login
                                class=Theme::ROW_BUTTON
                                class:cursor-not-allowed=move || login_pending.get()
                                class:opacity-70=move || login_pending.get()
                                disabled=move || login_pending.get()
                            >
                                "Se connecter via passkey"
                            </button>
                        </div>
                    </div>
                </div>

                <div class=Theme::ROW>
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-3">
                            <span class=Theme::ICON>"how_to_reg"</span>
                            <p class="text-sm text-gray-700 dark:text-gray-200">"Session admin"</p>
                        </div>
                        <button
                            on:click=on_refresh_session
                            class=Theme::ROW_BUTTON
                            class:cursor-not-allowed=move || session_pending.get()
                            class:opacity-70=move || session_pending.get()
                            disabled=move || session_pending.get()
                        >
                            "Rafraîchir l'état admin"
                        </button>
                    </div>
                </div>

                {move || {
                    status
                        .get()
                        .map(|(kind, message)| {
                            view! {
                                <div class="px-6 py-2">
                                    <Alert kind=kind message=message />
                                </div>
                            }
                        })
                }}
                {move || {
                    any_pending
                        .get()
                        .then_some(view! { <div class="px-6 py-2"><Spinner /></div> })
                }}
                <div class="h-2"></div>
            </div>
        </AppShell>
    }
}
