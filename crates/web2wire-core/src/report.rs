//! Completion report payload
//!
//! Sent to the remote endpoint once a job sequence has finished:
//!
//! ```json
//! {"status":"completed","name":"Alice","origin":"Berlin","countryCode":"DE","device":"web2wire"}
//! ```

use serde::Serialize;

use crate::job::JobData;

pub const STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// Output buffer cannot hold the encoded report
    BufferTooSmall,
}

#[derive(Debug, Serialize)]
pub struct CompletionReport<'a> {
    pub status: &'a str,
    pub name: &'a str,
    pub origin: &'a str,
    #[serde(rename = "countryCode")]
    pub country_code: &'a str,
    pub device: &'a str,
}

impl<'a> CompletionReport<'a> {
    pub fn completed(job: &'a JobData, device: &'a str) -> Self {
        Self {
            status: STATUS_COMPLETED,
            name: job.name.as_str(),
            origin: job.origin.as_str(),
            country_code: job.country_code.as_str(),
            device,
        }
    }
}

/// Serialize a report into `buffer`, returning the encoded length
pub fn encode_report(
    report: &CompletionReport<'_>,
    buffer: &mut [u8],
) -> Result<usize, ReportError> {
    serde_json_core::to_slice(report, buffer)
        .map_err(|_| ReportError::BufferTooSmall)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_encoded_as_json() {
        let job = JobData::new("Alice", "Berlin", "DE");
        let mut buffer = [0u8; 160];

        let len =
            encode_report(&CompletionReport::completed(&job, "beacon"), &mut buffer)
                .unwrap();

        assert_eq!(
            &buffer[..len],
            br#"{"status":"completed","name":"Alice","origin":"Berlin","countryCode":"DE","device":"beacon"}"#
        );
    }

    #[test]
    fn quotes_in_names_are_escaped() {
        let job = JobData::new("Al \"Ace\"", "x", "US");
        let mut buffer = [0u8; 160];

        let len =
            encode_report(&CompletionReport::completed(&job, "d"), &mut buffer)
                .unwrap();
        let encoded = core::str::from_utf8(&buffer[..len]).unwrap();

        assert!(encoded.contains(r#""name":"Al \"Ace\"""#));
    }

    #[test]
    fn small_buffer_is_an_error() {
        let job = JobData::awaiting();
        let mut buffer = [0u8; 8];

        assert_eq!(
            encode_report(&CompletionReport::completed(&job, "d"), &mut buffer),
            Err(ReportError::BufferTooSmall)
        );
    }
}
