//! Wire types for the admin passkey endpoints. These payloads carry
//! attestation and assertion material, so they must never be logged.
//!
//! Binary fields are base64url strings on the wire (`rawId`, `clientDataJSON`,
//! `attestationObject`, `authenticatorData`, `signature`, `userHandle`); the
//! `from_parts` constructors are the single place where ceremony buffers are
//! encoded back into wire form.

use super::codec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for both options endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct OptionsRequest {
    #[serde(rename = "adminId")]
    pub admin_id: String,
}

/// Body for `/webauthn/register/verify`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterVerifyRequest {
    #[serde(rename = "adminId")]
    pub admin_id: String,
    pub attestation: AttestationPayload,
}

/// Body for `/webauthn/login/verify`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginVerifyRequest {
    #[serde(rename = "adminId")]
    pub admin_id: String,
    pub assertion: AssertionPayload,
}

/// Ceremony options with the binary fields decoded and the normalized
/// wire-form JSON kept for the ceremony driver.
///
/// `user_id` is present for creation options only; `allow_credentials` holds
/// the decoded ids of the request options allow-list (empty when the backend
/// sent none). Options live for exactly one ceremony call.
#[derive(Clone, Debug)]
pub struct CeremonyOptions {
    pub challenge: Vec<u8>,
    pub user_id: Option<Vec<u8>>,
    pub allow_credentials: Vec<Vec<u8>>,
    pub public_key: Value,
}

/// Credential-creation ceremony result, encoded for transport.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttestationPayload {
    pub id: String,
    #[serde(rename = "rawId")]
    pub raw_id: String,
    #[serde(rename = "type")]
    pub credential_type: String,
    pub response: AttestationResponse,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttestationResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    #[serde(rename = "attestationObject")]
    pub attestation_object: String,
}

impl AttestationPayload {
    /// Encodes raw ceremony buffers into the wire representation.
    pub fn from_parts(
        id: String,
        raw_id: &[u8],
        credential_type: String,
        client_data_json: &[u8],
        attestation_object: &[u8],
    ) -> Self {
        Self {
            id,
            raw_id: codec::encode(raw_id),
            credential_type,
            response: AttestationResponse {
                client_data_json: codec::encode(client_data_json),
                attestation_object: codec::encode(attestation_object),
            },
        }
    }
}

/// Credential-retrieval ceremony result, encoded for transport.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionPayload {
    pub id: String,
    #[serde(rename = "rawId")]
    pub raw_id: String,
    #[serde(rename = "type")]
    pub credential_type: String,
    pub response: AssertionResponse,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    #[serde(rename = "authenticatorData")]
    pub authenticator_data: String,
    pub signature: String,
    /// `None` serializes to JSON `null`: "no user handle returned" must stay
    /// distinguishable from an empty-but-present handle.
    #[serde(rename = "userHandle")]
    pub user_handle: Option<String>,
}

impl AssertionPayload {
    /// Encodes raw ceremony buffers into the wire representation. An absent
    /// user handle stays absent.
    pub fn from_parts(
        id: String,
        raw_id: &[u8],
        credential_type: String,
        client_data_json: &[u8],
        authenticator_data: &[u8],
        signature: &[u8],
        user_handle: Option<&[u8]>,
    ) -> Self {
        Self {
            id,
            raw_id: codec::encode(raw_id),
            credential_type,
            response: AssertionResponse {
                client_data_json: codec::encode(client_data_json),
                authenticator_data: codec::encode(authenticator_data),
                signature: codec::encode(signature),
                user_handle: user_handle.map(codec::encode),
            },
        }
    }
}

/// Admin session state reported by `GET /session/admin`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AdminSessionStatus {
    pub authenticated: bool,
    #[serde(rename = "adminId", default)]
    pub admin_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attestation_from_parts_encodes_buffers() {
        let payload = AttestationPayload::from_parts(
            "cred-1".to_string(),
            &[0x00, 0x01],
            "public-key".to_string(),
            &[0x02],
            &[0x03],
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["rawId"], "AAE");
        assert_eq!(json["type"], "public-key");
        assert_eq!(json["response"]["clientDataJSON"], "Ag");
        assert_eq!(json["response"]["attestationObject"], "Aw");
    }

    #[test]
    fn absent_user_handle_serializes_to_null() {
        let payload = AssertionPayload::from_parts(
            "cred-1".to_string(),
            &[0x00],
            "public-key".to_string(),
            &[0x01],
            &[0x02],
            &[0x03],
            None,
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["response"]["userHandle"].is_null());
        assert_ne!(json["response"]["userHandle"], "");
    }

    #[test]
    fn empty_user_handle_stays_an_empty_string() {
        let payload = AssertionPayload::from_parts(
            "cred-1".to_string(),
            &[0x00],
            "public-key".to_string(),
            &[0x01],
            &[0x02],
            &[0x03],
            Some(&[]),
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["response"]["userHandle"], "");
    }

    #[test]
    fn session_status_tolerates_missing_admin_id() {
        let status: AdminSessionStatus =
            serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
        assert!(!status.authenticated);
        assert_eq!(status.admin_id, None);

        let status: AdminSessionStatus =
            serde_json::from_str(r#"{"authenticated": true, "adminId": "admin@example.com"}"#)
                .unwrap();
        assert!(status.authenticated);
        assert_eq!(status.admin_id.as_deref(), Some("admin@example.com"));
    }

    #[test]
    fn verify_request_bodies_use_wire_field_names() {
        let request = OptionsRequest {
            admin_id: "admin@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"adminId":"admin@example.com"}"#
        );
    }
}
