use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::state::{RsvpEcho, RsvpStatus};

pub const LOOKUP_FALLBACK: &str = "Unable to verify code. Please try again.";
pub const SUBMIT_FALLBACK: &str = "Unable to submit RSVP. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server rejected request (HTTP {status})")]
    Rejected { status: u16, message: Option<String> },

    #[error("Code lookup succeeded but did not return a guest name.")]
    MissingName,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl ApiError {
    /// Text shown to the guest. Server-provided messages win over `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(m), ..
            } => m.clone(),
            ApiError::MissingName => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CodeLookupRequest<'a> {
    code: &'a str,
}

#[derive(Debug, Serialize)]
struct RsvpRequest<'a> {
    code: &'a str,
    status: RsvpStatus,
}

/// Malformed or non-object bodies count as "no payload". Fields are read one
/// by one so a mistyped neighbour never hides `message` or `name`.
fn parse_payload(body: &str) -> Option<Value> {
    serde_json::from_str::<Value>(body)
        .ok()
        .filter(Value::is_object)
}

fn str_field(payload: Option<&Value>, key: &str) -> Option<String> {
    payload?
        .get(key)
        .and_then(Value::as_str)
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

pub fn read_lookup_reply(ok: bool, status: u16, body: &str) -> Result<String, ApiError> {
    let payload = parse_payload(body);
    if !ok {
        return Err(ApiError::Rejected {
            status,
            message: str_field(payload.as_ref(), "message"),
        });
    }
    str_field(payload.as_ref(), "name").ok_or(ApiError::MissingName)
}

pub fn read_rsvp_reply(ok: bool, status: u16, body: &str) -> Result<RsvpEcho, ApiError> {
    let payload = parse_payload(body);
    if !ok {
        return Err(ApiError::Rejected {
            status,
            message: str_field(payload.as_ref(), "message"),
        });
    }
    Ok(RsvpEcho {
        name: str_field(payload.as_ref(), "name"),
        status: str_field(payload.as_ref(), "status")
            .as_deref()
            .and_then(RsvpStatus::from_label),
    })
}

/// POST {base}/codes/validate; resolves the guest's name.
pub async fn validate_code(config: &ApiConfig, code: &str) -> Result<String, ApiError> {
    let resp = Request::post(&config.validate_url())
        .json(&CodeLookupRequest { code })?
        .send()
        .await?;
    let body = resp.text().await.unwrap_or_default();
    read_lookup_reply(resp.ok(), resp.status(), &body)
}

/// POST {base}/rsvp
pub async fn submit_rsvp(
    config: &ApiConfig,
    code: &str,
    status: RsvpStatus,
) -> Result<RsvpEcho, ApiError> {
    let resp = Request::post(&config.rsvp_url())
        .json(&RsvpRequest { code, status })?
        .send()
        .await?;
    let body = resp.text().await.unwrap_or_default();
    read_rsvp_reply(resp.ok(), resp.status(), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_success_returns_name() {
        let name = read_lookup_reply(true, 200, r#"{"name":"Alice"}"#).unwrap();
        assert_eq!(name, "Alice");
    }

    #[test]
    fn lookup_rejection_surfaces_server_message() {
        let err = read_lookup_reply(false, 404, r#"{"message":"Invalid code"}"#).unwrap_err();
        assert_eq!(err.user_message(LOOKUP_FALLBACK), "Invalid code");
        assert_eq!(err.to_string(), "server rejected request (HTTP 404)");
    }

    #[test]
    fn lookup_rejection_without_message_uses_fallback() {
        for body in ["", "not json", "null", r#"{"message":"   "}"#, r#"{}"#] {
            let err = read_lookup_reply(false, 500, body).unwrap_err();
            assert_eq!(err.user_message(LOOKUP_FALLBACK), LOOKUP_FALLBACK, "body: {body}");
        }
    }

    #[test]
    fn lookup_ok_without_name_is_an_error() {
        for body in ["", "{", r#"{}"#, r#"{"name":""}"#, r#"{"name":null}"#] {
            let err = read_lookup_reply(true, 200, body).unwrap_err();
            assert!(matches!(err, ApiError::MissingName), "body: {body}");
            assert_eq!(
                err.user_message(LOOKUP_FALLBACK),
                "Code lookup succeeded but did not return a guest name."
            );
        }
    }

    #[test]
    fn lookup_name_survives_a_mistyped_message() {
        let name = read_lookup_reply(true, 200, r#"{"name":"Alice","message":{"k":1}}"#).unwrap();
        assert_eq!(name, "Alice");
    }

    #[test]
    fn lookup_rejection_message_survives_extra_fields() {
        let err = read_lookup_reply(false, 400, r#"{"message":"Invalid code","code":400}"#)
            .unwrap_err();
        assert_eq!(err.user_message(LOOKUP_FALLBACK), "Invalid code");
    }

    #[test]
    fn transport_errors_show_fallback() {
        let err = ApiError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(SUBMIT_FALLBACK), SUBMIT_FALLBACK);
        assert_eq!(err.to_string(), "request failed: TypeError: Failed to fetch");
    }

    #[test]
    fn rsvp_echo_is_read_from_success_body() {
        let echo = read_rsvp_reply(
            true,
            200,
            r#"{"name":"Alice Cruz","status":"Regretfully declines"}"#,
        )
        .unwrap();
        assert_eq!(echo.name.as_deref(), Some("Alice Cruz"));
        assert_eq!(echo.status, Some(RsvpStatus::Declining));
    }

    #[test]
    fn rsvp_echo_ignores_unknown_status_and_bad_bodies() {
        let echo = read_rsvp_reply(true, 200, r#"{"status":"Maybe"}"#).unwrap();
        assert_eq!(echo, RsvpEcho::default());

        let echo = read_rsvp_reply(true, 200, r#"{"name":"Alice","status":1}"#).unwrap();
        assert_eq!(echo.name.as_deref(), Some("Alice"));
        assert_eq!(echo.status, None);

        let echo = read_rsvp_reply(true, 204, "").unwrap();
        assert_eq!(echo, RsvpEcho::default());
    }

    #[test]
    fn rsvp_rejection_messages() {
        let err = read_rsvp_reply(false, 409, r#"{"message":"RSVP closed"}"#).unwrap_err();
        assert_eq!(err.user_message(SUBMIT_FALLBACK), "RSVP closed");

        let err = read_rsvp_reply(false, 409, r#"{"message":"RSVP closed","status":409}"#)
            .unwrap_err();
        assert_eq!(err.user_message(SUBMIT_FALLBACK), "RSVP closed");

        let err = read_rsvp_reply(false, 502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.user_message(SUBMIT_FALLBACK), SUBMIT_FALLBACK);
    }

    #[test]
    fn request_bodies_match_the_wire_format() {
        let body = serde_json::to_value(CodeLookupRequest { code: "ABC123" }).unwrap();
        assert_eq!(body, serde_json::json!({ "code": "ABC123" }));

        let body = serde_json::to_value(RsvpRequest {
            code: "ABC123",
            status: RsvpStatus::Attending,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "code": "ABC123", "status": "Happily attending" })
        );
    }
}
