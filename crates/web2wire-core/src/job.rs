//! Job data as shown on screen and reported on completion

use heapless::String;

pub const NAME_CAPACITY: usize = 64;
pub const ORIGIN_CAPACITY: usize = 64;
pub const COUNTRY_CODE_CAPACITY: usize = 2;

/// Placeholder for a job that did not carry a name
pub const DEFAULT_NAME: &str = "Anonymous";
/// Placeholder for a job that did not carry an origin
pub const DEFAULT_ORIGIN: &str = "Unknown";
/// Placeholder for a job that did not carry a country code
pub const DEFAULT_COUNTRY_CODE: &str = "??";

const AWAITING_NAME: &str = "Awaiting job";
const AWAITING_ORIGIN: &str = "-";
const AWAITING_COUNTRY_CODE: &str = "--";

/// Descriptive payload of the job currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobData {
    pub name: String<NAME_CAPACITY>,
    pub origin: String<ORIGIN_CAPACITY>,
    /// Upper-case, two characters at most
    pub country_code: String<COUNTRY_CODE_CAPACITY>,
}

impl Default for JobData {
    fn default() -> Self {
        Self::awaiting()
    }
}

impl JobData {
    /// Build job data, truncating every field at a character boundary
    pub fn new(name: &str, origin: &str, country_code: &str) -> Self {
        Self {
            name: truncated(name),
            origin: truncated(origin),
            country_code: upper_truncated(country_code),
        }
    }

    /// Job shown before the first accepted request
    pub fn awaiting() -> Self {
        Self::new(AWAITING_NAME, AWAITING_ORIGIN, AWAITING_COUNTRY_CODE)
    }

    /// Build job data from optional fields
    ///
    /// Missing and blank fields fall back to their placeholders.
    pub fn from_fields(
        name: Option<&str>,
        origin: Option<&str>,
        country_code: Option<&str>,
    ) -> Self {
        Self::new(
            present(name).unwrap_or(DEFAULT_NAME),
            present(origin).unwrap_or(DEFAULT_ORIGIN),
            present(country_code).unwrap_or(DEFAULT_COUNTRY_CODE),
        )
    }

    pub fn is_awaiting(&self) -> bool {
        *self == Self::awaiting()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub(crate) fn truncated<const N: usize>(value: &str) -> String<N> {
    let mut out = String::new();
    for c in value.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

fn upper_truncated<const N: usize>(value: &str) -> String<N> {
    let mut out = String::new();
    for c in value.chars() {
        if out.push(c.to_ascii_uppercase()).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_values_are_cut_at_char_boundary() {
        let name = "é".repeat(40);
        let job = JobData::new(&name, "x", "de");

        assert_eq!(job.name.len(), 64);
        assert_eq!(job.name.chars().count(), 32);
        assert_eq!(job.country_code.as_str(), "DE");
    }

    #[test]
    fn blank_fields_use_placeholders() {
        let job = JobData::from_fields(Some("  "), None, Some(""));

        assert_eq!(job.name.as_str(), DEFAULT_NAME);
        assert_eq!(job.origin.as_str(), DEFAULT_ORIGIN);
        assert_eq!(job.country_code.as_str(), DEFAULT_COUNTRY_CODE);
    }

    #[test]
    fn country_code_keeps_two_characters() {
        let job = JobData::new("a", "b", "usa");
        assert_eq!(job.country_code.as_str(), "US");
    }
}
