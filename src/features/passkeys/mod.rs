//! Passkey (WebAuthn) feature for the single administrator account.
//!
//! This module is the only place where the backend's base64url wire encoding
//! and the browser's binary ceremony buffers meet. It must stay aligned with
//! the backend protocol: options arrive JSON-encoded with base64url binary
//! fields, ceremony results leave the same way.
//!
//! Flow Overview: Registration fetches creation options, runs the platform
//! create ceremony, and submits the attestation for verification. Sign-in
//! fetches request options, runs the get ceremony, and submits the assertion;
//! only the verify call's HTTP status decides whether the admin is signed in.
//! Nothing is cached or retained across ceremonies.

pub(crate) mod ceremony;
pub(crate) mod client;
pub(crate) mod codec;
pub(crate) mod flow;
pub(crate) mod options;
pub(crate) mod types;
