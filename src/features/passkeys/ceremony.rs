//! Platform ceremony driver.
//!
//! The dashboard flows talk to the authenticator through the [`Authenticator`]
//! trait so tests can substitute a deterministic fake. The browser
//! implementation wraps `navigator.credentials` via `web_sys`: it rebuilds the
//! JSON options as JS objects with binary buffers (`Uint8Array`), triggers the
//! platform prompt, and hands the binary response back encoded for transport.

use super::types::{AssertionPayload, AttestationPayload, CeremonyOptions};
use crate::app_lib::AppError;

/// Capability to run the two platform credential ceremonies. The prompt may
/// block on user presence or biometrics for a platform-controlled duration;
/// no timeout is imposed here.
#[allow(async_fn_in_trait)]
pub trait Authenticator {
    /// Runs the credential-creation ceremony (registration).
    async fn create_credential(
        &self,
        options: &CeremonyOptions,
    ) -> Result<AttestationPayload, AppError>;

    /// Runs the credential-retrieval ceremony (sign-in).
    async fn get_credential(&self, options: &CeremonyOptions)
        -> Result<AssertionPayload, AppError>;
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserAuthenticator;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::Authenticator;
    use crate::app_lib::AppError;
    use crate::features::passkeys::types::{
        AssertionPayload, AttestationPayload, CeremonyOptions,
    };
    use js_sys::{Array, Object, Reflect, Uint8Array};
    use serde::Serialize;
    use serde_json::Value;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        AuthenticatorAssertionResponse, AuthenticatorAttestationResponse,
        CredentialCreationOptions, CredentialRequestOptions, PublicKeyCredential,
    };

    /// `navigator.credentials`-backed [`Authenticator`].
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserAuthenticator;

    impl Authenticator for BrowserAuthenticator {
        async fn create_credential(
            &self,
            options: &CeremonyOptions,
        ) -> Result<AttestationPayload, AppError> {
            let credentials = browser_credentials()?;

            let js_options = build_creation_options(options)?;
            let wrapper = Object::new();
            Reflect::set(&wrapper, &"publicKey".into(), &js_options)
                .map_err(|_| AppError::Ceremony("Failed to set publicKey".into()))?;
            let wrapper = wrapper.unchecked_into::<CredentialCreationOptions>();

            let promise = credentials
                .create_with_options(&wrapper)
                .map_err(|err| AppError::Ceremony(format!("WebAuthn create failed: {err:?}")))?;

            let result = JsFuture::from(promise).await.map_err(|err| {
                let message = format!("{err:?}");
                if message.contains("InvalidStateError") {
                    AppError::Ceremony("This passkey is already registered on this device.".into())
                } else if message.contains("NotAllowedError") {
                    AppError::Ceremony("The prompt timed out or was cancelled.".into())
                } else {
                    AppError::Ceremony(format!("Passkey registration failed: {err:?}"))
                }
            })?;

            let credential = result
                .dyn_into::<PublicKeyCredential>()
                .map_err(|_| AppError::Ceremony("Invalid credential type".into()))?;
            let raw_id = buffer_bytes(credential.raw_id());
            let response = credential
                .response()
                .dyn_into::<AuthenticatorAttestationResponse>()
                .map_err(|_| AppError::Ceremony("Invalid response type".into()))?;

            Ok(AttestationPayload::from_parts(
                credential.id(),
                &raw_id,
                credential.type_(),
                &buffer_bytes(response.client_data_json()),
                &buffer_bytes(response.attestation_object()),
            ))
        }

        async fn get_credential(
            &self,
            options: &CeremonyOptions,
        ) -> Result<AssertionPayload, AppError> {
            let credentials = browser_credentials()?;

            let js_options = build_request_options(options)?;
            let wrapper = Object::new();
            Reflect::set(&wrapper, &"publicKey".into(), &js_options)
                .map_err(|_| AppError::Ceremony("Failed to set publicKey".into()))?;
            let wrapper = wrapper.unchecked_into::<CredentialRequestOptions>();

            let promise = credentials
                .get_with_options(&wrapper)
                .map_err(|err| AppError::Ceremony(format!("WebAuthn get failed: {err:?}")))?;

            let result = JsFuture::from(promise).await.map_err(|err| {
                let message = format!("{err:?}");
                if message.contains("NotAllowedError") {
                    AppError::Ceremony("The prompt timed out or was cancelled.".into())
                } else {
                    AppError::Ceremony(format!("Passkey sign-in failed: {err:?}"))
                }
            })?;

            let credential = result
                .dyn_into::<PublicKeyCredential>()
                .map_err(|_| AppError::Ceremony("Invalid credential type".into()))?;
            let raw_id = buffer_bytes(credential.raw_id());
            let response = credential
                .response()
                .dyn_into::<AuthenticatorAssertionResponse>()
                .map_err(|_| AppError::Ceremony("Invalid response type".into()))?;
            let user_handle = response.user_handle().map(buffer_bytes);

            Ok(AssertionPayload::from_parts(
                credential.id(),
                &raw_id,
                credential.type_(),
                &buffer_bytes(response.client_data_json()),
                &buffer_bytes(response.authenticator_data()),
                &buffer_bytes(response.signature()),
                user_handle.as_deref(),
            ))
        }
    }

    fn browser_credentials() -> Result<web_sys::CredentialsContainer, AppError> {
        let window =
            web_sys::window().ok_or_else(|| AppError::Ceremony("Window not found".into()))?;
        Ok(window.navigator().credentials())
    }

    fn buffer_bytes(buffer: js_sys::ArrayBuffer) -> Vec<u8> {
        Uint8Array::new(&buffer).to_vec()
    }

    /// Builds `PublicKeyCredentialCreationOptions` as a JS object, swapping
    /// the base64url strings for the decoded buffers.
    fn build_creation_options(options: &CeremonyOptions) -> Result<Object, AppError> {
        let pk_options = &options.public_key;
        let js_options = Object::new();

        set_buffer(&js_options, "challenge", &options.challenge)?;

        if let Some(user) = pk_options.get("user") {
            let js_user = Object::new();
            if let Some(name) = user["name"].as_str() {
                Reflect::set(&js_user, &"name".into(), &name.into()).ok();
            }
            if let Some(display_name) = user["displayName"].as_str() {
                Reflect::set(&js_user, &"displayName".into(), &display_name.into()).ok();
            }
            if let Some(id) = &options.user_id {
                set_buffer(&js_user, "id", id)?;
            }
            Reflect::set(&js_options, &"user".into(), &js_user).ok();
        }

        if let Some(rp) = pk_options.get("rp") {
            let js_rp = Object::new();
            if let Some(name) = rp["name"].as_str() {
                Reflect::set(&js_rp, &"name".into(), &name.into()).ok();
            }
            if let Some(id) = rp["id"].as_str() {
                Reflect::set(&js_rp, &"id".into(), &id.into()).ok();
            }
            Reflect::set(&js_options, &"rp".into(), &js_rp).ok();
        }

        if let Some(params) = pk_options["pubKeyCredParams"].as_array() {
            let js_params = Array::new();
            for param in params {
                let js_param = Object::new();
                if let Some(alg) = param["alg"].as_i64() {
                    Reflect::set(&js_param, &"alg".into(), &(alg as f64).into()).ok();
                }
                if let Some(credential_type) = param["type"].as_str() {
                    Reflect::set(&js_param, &"type".into(), &credential_type.into()).ok();
                }
                js_params.push(&js_param);
            }
            Reflect::set(&js_options, &"pubKeyCredParams".into(), &js_params).ok();
        }

        if let Some(timeout) = pk_options["timeout"].as_u64() {
            Reflect::set(&js_options, &"timeout".into(), &(timeout as f64).into()).ok();
        }

        if let Some(attestation) = pk_options["attestation"].as_str() {
            Reflect::set(&js_options, &"attestation".into(), &attestation.into()).ok();
        }

        if let Some(selection) = pk_options.get("authenticatorSelection") {
            let js_selection = Object::new();
            if let Some(attachment) = selection["authenticatorAttachment"].as_str() {
                Reflect::set(
                    &js_selection,
                    &"authenticatorAttachment".into(),
                    &attachment.into(),
                )
                .ok();
            }
            if let Some(require_resident_key) = selection["requireResidentKey"].as_bool() {
                Reflect::set(
                    &js_selection,
                    &"requireResidentKey".into(),
                    &require_resident_key.into(),
                )
                .ok();
            }
            if let Some(resident_key) = selection["residentKey"].as_str() {
                Reflect::set(&js_selection, &"residentKey".into(), &resident_key.into()).ok();
            }
            if let Some(user_verification) = selection["userVerification"].as_str() {
                Reflect::set(
                    &js_selection,
                    &"userVerification".into(),
                    &user_verification.into(),
                )
                .ok();
            }
            Reflect::set(&js_options, &"authenticatorSelection".into(), &js_selection).ok();
        }

        if let Some(extensions) = pk_options.get("extensions") {
            copy_extensions(&js_options, extensions);
        }

        Ok(js_options)
    }

    /// Builds `PublicKeyCredentialRequestOptions` as a JS object with decoded
    /// challenge and allow-list ids.
    fn build_request_options(options: &CeremonyOptions) -> Result<Object, AppError> {
        let pk_options = &options.public_key;
        let js_options = Object::new();

        set_buffer(&js_options, "challenge", &options.challenge)?;

        if let Some(timeout) = pk_options["timeout"].as_u64() {
            Reflect::set(&js_options, &"timeout".into(), &(timeout as f64).into()).ok();
        }

        if let Some(rp_id) = pk_options["rpId"].as_str() {
            Reflect::set(&js_options, &"rpId".into(), &rp_id.into()).ok();
        }

        if let Some(allowed) = pk_options["allowCredentials"].as_array() {
            let js_allowed = Array::new();
            for (credential, id) in allowed.iter().zip(&options.allow_credentials) {
                let js_credential = Object::new();
                if let Some(credential_type) = credential["type"].as_str() {
                    Reflect::set(&js_credential, &"type".into(), &credential_type.into()).ok();
                }
                set_buffer(&js_credential, "id", id)?;
                if let Some(transports) = credential["transports"].as_array() {
                    let js_transports = Array::new();
                    for transport in transports {
                        if let Some(value) = transport.as_str() {
                            js_transports.push(&value.into());
                        }
                    }
                    Reflect::set(&js_credential, &"transports".into(), &js_transports).ok();
                }
                js_allowed.push(&js_credential);
            }
            Reflect::set(&js_options, &"allowCredentials".into(), &js_allowed).ok();
        }

        if let Some(user_verification) = pk_options["userVerification"].as_str() {
            Reflect::set(
                &js_options,
                &"userVerification".into(),
                &user_verification.into(),
            )
            .ok();
        }

        if let Some(extensions) = pk_options.get("extensions") {
            copy_extensions(&js_options, extensions);
        }

        Ok(js_options)
    }

    fn set_buffer(target: &Object, key: &str, bytes: &[u8]) -> Result<(), AppError> {
        let buffer = Uint8Array::from(bytes);
        Reflect::set(target, &JsValue::from_str(key), &buffer)
            .map_err(|_| AppError::Ceremony(format!("Failed to set {key}")))
    }

    /// Naive copy for simple extensions.
    fn copy_extensions(target: &Object, extensions: &Value) {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        if let Ok(js_extensions) = extensions.serialize(&serializer) {
            Reflect::set(target, &"extensions".into(), &js_extensions).ok();
        }
    }
}
