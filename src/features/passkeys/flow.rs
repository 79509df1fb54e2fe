//! Ceremony orchestration for admin passkey registration and sign-in.
//!
//! Each operation is a single linear decode, platform call, encode, network
//! sequence. Failures surface as [`AppError`] and are never retried; the
//! dashboard decides what to show the admin.

use super::ceremony::Authenticator;
use super::client::Backend;
use super::options::{decode_creation_options, decode_request_options};
use super::types::{AdminSessionStatus, AssertionPayload, CeremonyOptions};
use crate::app_lib::AppError;

/// Fetches and decodes registration options for the admin account.
pub async fn build_registration_options<B: Backend>(
    backend: &B,
    admin_id: &str,
) -> Result<CeremonyOptions, AppError> {
    let raw = backend.registration_options(admin_id).await?;
    decode_creation_options(&raw)
}

/// Runs the creation ceremony and submits the attestation for verification.
/// The verify endpoint is only reached when the ceremony succeeded.
pub async fn perform_registration<B: Backend, A: Authenticator>(
    backend: &B,
    authenticator: &A,
    options: &CeremonyOptions,
    admin_id: &str,
) -> Result<(), AppError> {
    let attestation = authenticator.create_credential(options).await?;
    backend.register_verify(admin_id, &attestation).await
}

/// Fetches and decodes authentication options for the admin account.
pub async fn build_assertion_options<B: Backend>(
    backend: &B,
    admin_id: &str,
) -> Result<CeremonyOptions, AppError> {
    let raw = backend.assertion_options(admin_id).await?;
    decode_request_options(&raw)
}

/// Runs the retrieval ceremony and returns the encoded assertion.
pub async fn perform_assertion<A: Authenticator>(
    authenticator: &A,
    options: &CeremonyOptions,
) -> Result<AssertionPayload, AppError> {
    authenticator.get_credential(options).await
}

/// Submits the assertion for verification. `Ok(true)` iff the backend
/// answered with a success status, `Ok(false)` on any other status; only
/// transport-level failures become errors.
pub async fn verify_assertion<B: Backend>(
    backend: &B,
    admin_id: &str,
    assertion: &AssertionPayload,
) -> Result<bool, AppError> {
    match backend.login_verify(admin_id, assertion).await {
        Ok(()) => Ok(true),
        Err(AppError::Http { .. }) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Full registration sequence as triggered by the dashboard.
pub async fn register<B: Backend, A: Authenticator>(
    backend: &B,
    authenticator: &A,
    admin_id: &str,
) -> Result<(), AppError> {
    let options = build_registration_options(backend, admin_id).await?;
    perform_registration(backend, authenticator, &options, admin_id).await
}

/// Full sign-in sequence as triggered by the dashboard.
pub async fn login<B: Backend, A: Authenticator>(
    backend: &B,
    authenticator: &A,
    admin_id: &str,
) -> Result<bool, AppError> {
    let options = build_assertion_options(backend, admin_id).await?;
    let assertion = perform_assertion(authenticator, &options).await?;
    verify_assertion(backend, admin_id, &assertion).await
}

/// Probes the backend for the current admin session state.
pub async fn admin_session<B: Backend>(backend: &B) -> Result<AdminSessionStatus, AppError> {
    backend.admin_session().await
}
