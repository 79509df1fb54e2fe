//! Client for the admin WebAuthn backend endpoints.
//!
//! Flows reach the backend through the [`Backend`] trait so tests can swap in
//! a canned implementation. The HTTP implementation posts JSON to the four
//! ceremony endpoints and probes the admin session state.

use super::types::{AdminSessionStatus, AssertionPayload, AttestationPayload};
use crate::app_lib::AppError;
use serde_json::Value;

/// Backend operations consumed by the ceremony flows. Verification calls
/// resolve to `Err(AppError::Http { .. })` on a non-success status so callers
/// can distinguish "rejected" from "unreachable".
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `POST /webauthn/register/options`
    async fn registration_options(&self, admin_id: &str) -> Result<Value, AppError>;

    /// `POST /webauthn/register/verify`
    async fn register_verify(
        &self,
        admin_id: &str,
        attestation: &AttestationPayload,
    ) -> Result<(), AppError>;

    /// `POST /webauthn/login/options`
    async fn assertion_options(&self, admin_id: &str) -> Result<Value, AppError>;

    /// `POST /webauthn/login/verify`
    async fn login_verify(
        &self,
        admin_id: &str,
        assertion: &AssertionPayload,
    ) -> Result<(), AppError>;

    /// `GET /session/admin`
    async fn admin_session(&self) -> Result<AdminSessionStatus, AppError>;
}

#[cfg(target_arch = "wasm32")]
pub use http::HttpBackend;

#[cfg(target_arch = "wasm32")]
mod http {
    use super::Backend;
    use crate::app_lib::config::AppConfig;
    use crate::app_lib::{get_json, post_json, post_json_response, AppError};
    use crate::features::passkeys::types::{
        AdminSessionStatus, AssertionPayload, AttestationPayload, LoginVerifyRequest,
        OptionsRequest, RegisterVerifyRequest,
    };
    use serde_json::Value;

    /// [`Backend`] implementation over the configured backend base URL.
    #[derive(Clone, Debug)]
    pub struct HttpBackend {
        base_url: String,
    }

    impl HttpBackend {
        /// Builds a backend client from the loaded configuration.
        pub fn new(config: &AppConfig) -> Self {
            Self {
                base_url: config.backend_url.clone(),
            }
        }
    }

    impl Backend for HttpBackend {
        async fn registration_options(&self, admin_id: &str) -> Result<Value, AppError> {
            let request = OptionsRequest {
                admin_id: admin_id.to_string(),
            };
            post_json_response(&self.base_url, "/webauthn/register/options", &request).await
        }

        async fn register_verify(
            &self,
            admin_id: &str,
            attestation: &AttestationPayload,
        ) -> Result<(), AppError> {
            let request = RegisterVerifyRequest {
                admin_id: admin_id.to_string(),
                attestation: attestation.clone(),
            };
            post_json(&self.base_url, "/webauthn/register/verify", &request).await
        }

        async fn assertion_options(&self, admin_id: &str) -> Result<Value, AppError> {
            let request = OptionsRequest {
                admin_id: admin_id.to_string(),
            };
            post_json_response(&self.base_url, "/webauthn/login/options", &request).await
        }

        async fn login_verify(
            &self,
            admin_id: &str,
            assertion: &AssertionPayload,
        ) -> Result<(), AppError> {
            let request = LoginVerifyRequest {
                admin_id: admin_id.to_string(),
                assertion: assertion.clone(),
            };
            post_json(&self.base_url, "/webauthn/login/verify", &request).await
        }

        async fn admin_session(&self) -> Result<AdminSessionStatus, AppError> {
            get_json(&self.base_url, "/session/admin").await
        }
    }
}
