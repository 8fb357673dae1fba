// =============================================================================
// GS-IT Web - Contact API
// =============================================================================
// Table of Contents:
// 1. Request/Response Types
// 2. Response Interpretation
// 3. Contact API Functions
// =============================================================================

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError, RawResponse};

/// Endpoint that receives contact form submissions.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

// -----------------------------------------------------------------------------
// 1. Request/Response Types
// -----------------------------------------------------------------------------

/// Contact form payload. Consent is checked client-side and not sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Optional acknowledgement body. Servers may also reply with an empty body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// -----------------------------------------------------------------------------
// 2. Response Interpretation
// -----------------------------------------------------------------------------

impl ContactResponse {
    /// Map a raw response onto success or failure.
    ///
    /// Any 2xx counts as delivered unless the body explicitly says
    /// `"ok": false`. Bodies that are empty or not the acknowledgement
    /// shape are ignored.
    pub fn interpret(raw: &RawResponse) -> Result<(), ApiError> {
        if !raw.is_success() {
            return Err(ApiError::Server {
                status: raw.status,
                message: raw.body.clone(),
            });
        }

        match serde_json::from_str::<ContactResponse>(&raw.body) {
            Ok(ContactResponse { ok: false, message }) => Err(ApiError::Rejected(
                message.unwrap_or_else(|| "submission rejected".to_string()),
            )),
            _ => Ok(()),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Contact API Functions
// -----------------------------------------------------------------------------

/// Send a contact submission. No retry.
pub async fn submit_contact(client: &ApiClient, request: &ContactRequest) -> Result<(), ApiError> {
    let raw = client.post_json(CONTACT_ENDPOINT, request).await?;
    ContactResponse::interpret(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_payload_uses_camel_case_keys() {
        let request = ContactRequest {
            first_name: "Amira".into(),
            last_name: "Haddad".into(),
            company: String::new(),
            email: "amira@example.com".into(),
            phone: "0501234567".into(),
            message: "Boardroom upgrade".into(),
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            ["company", "email", "firstName", "lastName", "message", "phone"]
        );
        assert_eq!(value["firstName"], "Amira");
    }

    #[test]
    fn test_empty_success_body_is_success() {
        assert_eq!(ContactResponse::interpret(&raw(200, "")), Ok(()));
        assert_eq!(ContactResponse::interpret(&raw(204, "")), Ok(()));
        assert_eq!(ContactResponse::interpret(&raw(200, "thanks")), Ok(()));
    }

    #[test]
    fn test_ack_body() {
        assert_eq!(
            ContactResponse::interpret(&raw(200, r#"{"ok":true}"#)),
            Ok(())
        );
        assert_eq!(
            ContactResponse::interpret(&raw(200, r#"{"ok":false,"message":"spam"}"#)),
            Err(ApiError::Rejected("spam".into()))
        );
    }

    #[test]
    fn test_error_status_is_failure() {
        let err = ContactResponse::interpret(&raw(500, "boom")).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "boom".into()
            }
        );
        assert!(ContactResponse::interpret(&raw(404, "")).is_err());
    }
}
