// Response classification and decoding
//
// Torn reports failures two ways: a non-2xx status, or HTTP 200 with
// `{"error": {"code": N, "error": "..."}}` as the body. Status is checked
// first and, when it fails, the body is never read.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::error_code::ApiErrorCode;
use crate::models::ErrorEnvelope;

/// Literal prefix of the application error envelope.
pub const ERROR_ENVELOPE_PREFIX: &str = "{\"error\":";

/// Reject non-2xx responses as transport errors.
pub fn check_status(status: StatusCode) -> Result<(), Error> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::HttpStatus {
            status: status.as_u16(),
        })
    }
}

/// Classify a 2xx body as an application error, if it is one.
///
/// Only bodies starting with [`ERROR_ENVELOPE_PREFIX`] are inspected; an
/// envelope whose `error` member is `null` counts as success.
pub fn check_envelope(body: &str) -> Result<(), Error> {
    if body.trim().is_empty() || !body.trim_start().starts_with(ERROR_ENVELOPE_PREFIX) {
        return Ok(());
    }

    let envelope: ErrorEnvelope = parse(body)?;
    match envelope.error {
        Some(err) => Err(Error::Api {
            code: ApiErrorCode::try_from(err.code)?,
            server_message: err.error,
        }),
        None => Ok(()),
    }
}

/// Check for the error envelope, then decode the endpoint record.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    check_envelope(body)?;
    parse(body)
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.to_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ids::MemberId;
    use crate::models::{FactionProfile, TimestampResponse, UserProfile};

    #[test]
    fn non_success_status_is_transport_error() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(matches!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(Error::HttpStatus { status: 500 })
        ));
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND),
            Err(Error::HttpStatus { status: 404 })
        ));
    }

    #[test]
    fn envelope_becomes_application_error() {
        let result = decode::<TimestampResponse>(r#"{"error":{"code":2,"error":"Incorrect Key"}}"#);
        match result {
            Err(Error::Api {
                code,
                server_message,
            }) => {
                assert_eq!(code, ApiErrorCode::IncorrectKey);
                assert_eq!(server_message, "Incorrect Key");
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }

    #[test]
    fn unknown_envelope_code_is_unmapped() {
        let result = check_envelope(r#"{"error":{"code":17,"error":"Brand new"}}"#);
        assert!(matches!(result, Err(Error::UnmappedErrorCode { code: 17 })));
    }

    #[test]
    fn null_error_member_is_success() {
        assert!(check_envelope(r#"{"error":null}"#).is_ok());
    }

    #[test]
    fn success_body_decodes() {
        let ts: TimestampResponse = decode(r#"{"timestamp":1700000000}"#).expect("decodes");
        assert_eq!(ts.timestamp, 1_700_000_000);
    }

    #[test]
    fn error_key_elsewhere_is_not_an_envelope() {
        // Only the literal prefix marks an envelope.
        let body = r#"{"timestamp":5,"error":{"code":2,"error":"x"}}"#;
        let ts: TimestampResponse = decode(body).expect("decodes");
        assert_eq!(ts.timestamp, 5);
    }

    #[test]
    fn garbage_is_deserialization_error() {
        assert!(matches!(
            decode::<TimestampResponse>("<html>"),
            Err(Error::Deserialization { .. })
        ));
        assert!(matches!(
            decode::<TimestampResponse>(""),
            Err(Error::Deserialization { .. })
        ));
    }

    #[test]
    fn null_member_fields_read_as_defaults() {
        let body = r#"{"ID":1,"members":{"7":{"name":"A","position":null,
            "status":{"details":null,"state":"Hospital","until":5}}}}"#;
        let faction: FactionProfile = decode(body).expect("decodes");
        let member = &faction.members[&MemberId::new(7).expect("non-zero")];
        assert_eq!(member.name, "A");
        assert_eq!(member.status.details, "");
        assert_eq!(member.status.until, 5);
        assert!(member.status.is_hospitalized());
    }

    #[test]
    fn null_user_fields_read_as_defaults() {
        let body = r#"{"player_id":42,"job":null,"married":{"spouse_name":null},
            "faction":{"faction_id":10820,"faction_name":"Night Shift","faction_tag":null}}"#;
        let user: UserProfile = decode(body).expect("decodes");
        assert_eq!(user.faction.faction_id, 10_820);
        assert_eq!(user.faction.faction_name, "Night Shift");
        assert_eq!(user.faction.faction_tag, "");
        assert_eq!(user.job.company_id, 0);
    }
}
