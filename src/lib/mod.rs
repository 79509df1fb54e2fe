//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Admin Passkey Flows
//!
//! ### Registration
//!
//! 1. **Options:** The client POSTs `{adminId}` to `/webauthn/register/options`
//!    and decodes the base64url challenge and user id into binary buffers.
//! 2. **Ceremony:** The browser creates the credential with the platform
//!    authenticator (biometric prompt).
//! 3. **Verify:** The attestation is re-encoded to base64url and POSTed to
//!    `/webauthn/register/verify`.
//!
//! ### Sign-in
//!
//! Same shape against `/webauthn/login/options` and `/webauthn/login/verify`;
//! only the HTTP status of the verify call decides success.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Credential material only transits
//! through these helpers; nothing is persisted on the client.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json, post_json, post_json_response};
pub(crate) use errors::AppError;

/// Logs an error to the browser console for developer inspection. Status
/// banners only carry the error description; the console keeps the context.
#[cfg(target_arch = "wasm32")]
pub(crate) fn log_error(context: &str, err: &AppError) {
    web_sys::console::error_1(&format!("{context}: {err}").into());
}
