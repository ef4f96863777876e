//! Job intake - payload parsing and admission outcome
//!
//! Two encodings are accepted, chosen by the request content type:
//! - JSON objects, e.g. `{"name":"Alice","origin":"Berlin","countryCode":"DE"}`
//! - url-encoded forms, e.g. `name=Alice&origin=Berlin&countryCode=DE`
//!
//! Besides the canonical keys, `country` is accepted for the origin and
//! `country_code`/`flag` for the country code. Unknown keys are ignored.

use core::fmt;

use heapless::String;
use serde::{
    Deserialize,
    Deserializer,
    de::{self, Visitor},
};

use crate::{
    form,
    job::{
        COUNTRY_CODE_CAPACITY,
        JobData,
        NAME_CAPACITY,
        ORIGIN_CAPACITY,
        truncated,
    },
};

/// Largest decoded form value considered before truncation
const FORM_VALUE_CAPACITY: usize = 256;

/// Scratch space for unescaping one JSON string, sized to the HTTP body limit
const JSON_UNESCAPE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    Form,
}

impl PayloadFormat {
    /// Pick the payload format from a `Content-Type` header value
    ///
    /// Anything that is not a url-encoded form is parsed as JSON.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(value)
                if value
                    .trim_start()
                    .get(..33)
                    .is_some_and(|essence| {
                        essence.eq_ignore_ascii_case(
                            "application/x-www-form-urlencoded",
                        )
                    }) =>
            {
                Self::Form
            }
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeError {
    /// A sequence is running, the request is refused
    Busy,
    /// Payload is empty or cannot be parsed
    Malformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    Accepted,
    Rejected(IntakeError),
}

impl IntakeOutcome {
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

/// Unescaped JSON string, trimmed and cut to `N` bytes at a char boundary
struct Field<const N: usize>(String<N>);

impl<const N: usize> Field<N> {
    fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl<'de, const N: usize> Deserialize<'de> for Field<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor<const N: usize>;

        impl<'de, const N: usize> Visitor<'de> for FieldVisitor<N> {
            type Value = Field<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Field(truncated(value.trim())))
            }
        }

        deserializer.deserialize_str(FieldVisitor)
    }
}

#[derive(Deserialize)]
struct JobRequest {
    #[serde(default)]
    name: Option<Field<NAME_CAPACITY>>,
    #[serde(default, alias = "country")]
    origin: Option<Field<ORIGIN_CAPACITY>>,
    #[serde(
        default,
        rename = "countryCode",
        alias = "country_code",
        alias = "flag"
    )]
    country_code: Option<Field<COUNTRY_CODE_CAPACITY>>,
}

/// Parse a raw request body into job data
pub fn parse_job_payload(
    body: &[u8],
    format: PayloadFormat,
) -> Result<JobData, IntakeError> {
    let body = body.trim_ascii();
    if body.is_empty() {
        return Err(IntakeError::Malformed);
    }

    match format {
        PayloadFormat::Json => parse_json(body),
        PayloadFormat::Form => parse_form(body),
    }
}

fn parse_json(body: &[u8]) -> Result<JobData, IntakeError> {
    let mut unescape = [0u8; JSON_UNESCAPE_CAPACITY];
    let (request, _) =
        serde_json_core::from_slice_escaped::<JobRequest>(body, &mut unescape)
            .map_err(|e| {
                log::debug!("intake: invalid json payload: {:?}", e);
                IntakeError::Malformed
            })?;

    Ok(JobData::from_fields(
        request.name.as_ref().map(Field::as_str),
        request.origin.as_ref().map(Field::as_str),
        request.country_code.as_ref().map(Field::as_str),
    ))
}

fn parse_form(body: &[u8]) -> Result<JobData, IntakeError> {
    let encoded =
        core::str::from_utf8(body).map_err(|_| IntakeError::Malformed)?;

    let name = form_field(encoded, &["name"])?;
    let origin = form_field(encoded, &["origin", "country"])?;
    let country_code =
        form_field(encoded, &["countryCode", "country_code", "flag"])?;

    Ok(JobData::from_fields(
        name.as_deref(),
        origin.as_deref(),
        country_code.as_deref(),
    ))
}

fn form_field(
    encoded: &str,
    keys: &[&str],
) -> Result<Option<String<FORM_VALUE_CAPACITY>>, IntakeError> {
    for key in keys {
        let Some(raw) = form::find_raw_field(encoded, key) else {
            continue;
        };
        return form::decode_truncating(raw).map(Some).map_err(|e| {
            log::debug!("intake: invalid form field {}: {:?}", key, e);
            IntakeError::Malformed
        });
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_selects_form() {
        assert_eq!(
            PayloadFormat::from_content_type(Some(
                "application/x-www-form-urlencoded; charset=UTF-8"
            )),
            PayloadFormat::Form
        );
        assert_eq!(
            PayloadFormat::from_content_type(Some("application/json")),
            PayloadFormat::Json
        );
        assert_eq!(PayloadFormat::from_content_type(None), PayloadFormat::Json);
    }

    #[test]
    fn aliases_are_accepted() {
        let job = parse_job_payload(
            br#"{"name":"Bo","country":"Oslo","flag":"no"}"#,
            PayloadFormat::Json,
        )
        .unwrap();

        assert_eq!(job.origin.as_str(), "Oslo");
        assert_eq!(job.country_code.as_str(), "NO");
    }

    #[test]
    fn json_country_code_is_trimmed_before_truncation() {
        let job = parse_job_payload(
            br#"{"countryCode":"  fr  "}"#,
            PayloadFormat::Json,
        )
        .unwrap();

        assert_eq!(job.country_code.as_str(), "FR");
    }

    #[test]
    fn non_string_json_field_is_malformed() {
        assert_eq!(
            parse_job_payload(br#"{"name":42}"#, PayloadFormat::Json),
            Err(IntakeError::Malformed)
        );
    }

    #[test]
    fn non_object_json_is_malformed() {
        assert_eq!(
            parse_job_payload(b"[1,2]", PayloadFormat::Json),
            Err(IntakeError::Malformed)
        );
        assert_eq!(
            parse_job_payload(b"  \r\n", PayloadFormat::Json),
            Err(IntakeError::Malformed)
        );
    }
}
