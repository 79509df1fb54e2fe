//! Decoding and normalization of backend-issued ceremony options.
//!
//! The backend replies with `PublicKeyCredentialCreationOptions` /
//! `PublicKeyCredentialRequestOptions` JSON, sometimes wrapped in a
//! `publicKey` envelope. Binary fields are validated and decoded here, and
//! the admin ceremony preferences are forced onto the options: the admin
//! account always uses the platform authenticator with user verification,
//! whatever the backend suggested.

use super::codec;
use super::types::CeremonyOptions;
use crate::app_lib::AppError;
use serde_json::{json, Value};

/// Unwraps an optional `publicKey` envelope around the options.
fn public_key_options(raw: &Value) -> &Value {
    raw.get("publicKey").unwrap_or(raw)
}

/// Decodes a required base64url field addressed by `name` for error context.
fn required_binary(value: Option<&Value>, name: &str) -> Result<Vec<u8>, AppError> {
    let encoded = value
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::MalformedOptions(format!("missing {name}")))?;
    codec::decode(encoded)
        .map_err(|_| AppError::MalformedOptions(format!("{name} is not valid base64url")))
}

/// Decodes registration (credential-creation) options.
///
/// Forces `authenticatorSelection.authenticatorAttachment = "platform"` and
/// `authenticatorSelection.userVerification = "required"`, overwriting any
/// backend-supplied values. All other fields pass through untouched.
pub fn decode_creation_options(raw: &Value) -> Result<CeremonyOptions, AppError> {
    let mut options = public_key_options(raw).clone();

    let challenge = required_binary(options.get("challenge"), "challenge")?;
    let user_id = required_binary(
        options.get("user").and_then(|user| user.get("id")),
        "user.id",
    )?;

    let object = options
        .as_object_mut()
        .ok_or_else(|| AppError::MalformedOptions("options are not a JSON object".to_string()))?;
    let selection = object
        .entry("authenticatorSelection")
        .or_insert_with(|| json!({}));
    let selection = selection
        .as_object_mut()
        .ok_or_else(|| AppError::MalformedOptions("authenticatorSelection is not a JSON object".to_string()))?;
    selection.insert(
        "authenticatorAttachment".to_string(),
        Value::from("platform"),
    );
    selection.insert("userVerification".to_string(), Value::from("required"));

    Ok(CeremonyOptions {
        challenge,
        user_id: Some(user_id),
        allow_credentials: Vec::new(),
        public_key: options,
    })
}

/// Decodes authentication (credential-request) options, including each entry
/// of the optional allow-list. Forces `userVerification = "required"`.
pub fn decode_request_options(raw: &Value) -> Result<CeremonyOptions, AppError> {
    let mut options = public_key_options(raw).clone();

    let challenge = required_binary(options.get("challenge"), "challenge")?;

    let mut allow_credentials = Vec::new();
    if let Some(allowed) = options.get("allowCredentials").and_then(Value::as_array) {
        for credential in allowed {
            allow_credentials.push(required_binary(
                credential.get("id"),
                "allowCredentials[].id",
            )?);
        }
    }

    let object = options
        .as_object_mut()
        .ok_or_else(|| AppError::MalformedOptions("options are not a JSON object".to_string()))?;
    object.insert("userVerification".to_string(), Value::from("required"));

    Ok(CeremonyOptions {
        challenge,
        user_id: None,
        allow_credentials,
        public_key: options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creation_options() -> Value {
        json!({
            "challenge": "AA",
            "rp": {"id": "localhost", "name": "Camp Dashboard"},
            "user": {"id": "AQ", "name": "admin@example.com", "displayName": "admin@example.com"},
            "pubKeyCredParams": [{"alg": -7, "type": "public-key"}],
            "timeout": 60000
        })
    }

    #[test]
    fn creation_options_decode_binary_fields() {
        let decoded = decode_creation_options(&creation_options()).unwrap();
        assert_eq!(decoded.challenge, vec![0x00]);
        assert_eq!(decoded.user_id, Some(vec![0x01]));
        assert!(decoded.allow_credentials.is_empty());
        // Non-binary fields pass through untouched.
        assert_eq!(decoded.public_key["timeout"], 60000);
        assert_eq!(decoded.public_key["user"]["name"], "admin@example.com");
    }

    #[test]
    fn creation_options_force_platform_attachment_and_user_verification() {
        let mut raw = creation_options();
        raw["authenticatorSelection"] = json!({
            "authenticatorAttachment": "cross-platform",
            "userVerification": "discouraged",
            "residentKey": "preferred"
        });

        let decoded = decode_creation_options(&raw).unwrap();
        let selection = &decoded.public_key["authenticatorSelection"];
        assert_eq!(selection["authenticatorAttachment"], "platform");
        assert_eq!(selection["userVerification"], "required");
        // Other selection criteria survive.
        assert_eq!(selection["residentKey"], "preferred");
    }

    #[test]
    fn creation_options_unwrap_public_key_envelope() {
        let wrapped = json!({"publicKey": creation_options()});
        let decoded = decode_creation_options(&wrapped).unwrap();
        assert_eq!(decoded.challenge, vec![0x00]);
        assert_eq!(
            decoded.public_key["authenticatorSelection"]["authenticatorAttachment"],
            "platform"
        );
    }

    #[test]
    fn creation_options_require_binary_fields() {
        let mut missing_challenge = creation_options();
        missing_challenge.as_object_mut().unwrap().remove("challenge");
        assert!(matches!(
            decode_creation_options(&missing_challenge),
            Err(AppError::MalformedOptions(message)) if message.contains("challenge")
        ));

        let mut missing_user_id = creation_options();
        missing_user_id["user"].as_object_mut().unwrap().remove("id");
        assert!(matches!(
            decode_creation_options(&missing_user_id),
            Err(AppError::MalformedOptions(message)) if message.contains("user.id")
        ));

        let mut invalid_challenge = creation_options();
        invalid_challenge["challenge"] = json!("!!!");
        assert!(matches!(
            decode_creation_options(&invalid_challenge),
            Err(AppError::MalformedOptions(message)) if message.contains("base64url")
        ));
    }

    #[test]
    fn request_options_decode_allow_list() {
        let raw = json!({
            "challenge": "AA",
            "rpId": "localhost",
            "allowCredentials": [
                {"id": "AQ", "type": "public-key"},
                {"id": "AAE", "type": "public-key"}
            ]
        });

        let decoded = decode_request_options(&raw).unwrap();
        assert_eq!(decoded.challenge, vec![0x00]);
        assert_eq!(decoded.user_id, None);
        assert_eq!(
            decoded.allow_credentials,
            vec![vec![0x01], vec![0x00, 0x01]]
        );
        assert_eq!(decoded.public_key["userVerification"], "required");
    }

    #[test]
    fn request_options_tolerate_missing_allow_list() {
        let raw = json!({"challenge": "AA"});
        let decoded = decode_request_options(&raw).unwrap();
        assert!(decoded.allow_credentials.is_empty());
    }

    #[test]
    fn request_options_reject_undecodable_allow_list_entries() {
        let raw = json!({
            "challenge": "AA",
            "allowCredentials": [{"type": "public-key"}]
        });
        assert!(matches!(
            decode_request_options(&raw),
            Err(AppError::MalformedOptions(message)) if message.contains("allowCredentials")
        ));
    }
}
