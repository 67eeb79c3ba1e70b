//! Header recovery: month, year and location code from the leading tokens.

use std::sync::LazyLock;

use regex::Regex;

use crate::schedule::ParseDiagnostic;
use crate::vocabulary::{MONTH_NAMES, month_index};

/// `<MonthName>-<LOCATIONCODE>[<YYYY>]`, month names matched case-insensitively.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let months = MONTH_NAMES.join("|");
    Regex::new(&format!(r"(?i)^({months})-([a-z]+)(\d{{4}})?$"))
        .expect("static regex must compile")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("static regex must compile"));

/// Header fields recovered from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Zero-based month.
    pub month: u32,
    pub location_code: String,
    /// `None` when neither the header token nor the token after it holds a year.
    pub year: Option<i32>,
}

/// Read the header from token 0 (and token 1 for a detached year).
///
/// Fails with [`ParseDiagnostic::UnparseableHeader`] when token 0 does not
/// have the month-location shape, or [`ParseDiagnostic::UnknownMonth`] when
/// the month name is not recognised.
pub fn parse_header(tokens: &[&str]) -> Result<Header, ParseDiagnostic> {
    let first = tokens.first().copied().unwrap_or_default();

    let caps = HEADER_RE
        .captures(first)
        .ok_or_else(|| ParseDiagnostic::UnparseableHeader(first.to_string()))?;

    let month = resolve_month(&caps[1])?;
    let location_code = caps[2].to_string();

    let year = match caps.get(3) {
        Some(embedded) => embedded.as_str().parse().ok(),
        None => tokens
            .get(1)
            .filter(|t| YEAR_RE.is_match(t))
            .and_then(|t| t.parse().ok()),
    };

    Ok(Header {
        month,
        location_code,
        year,
    })
}

/// Zero-based index for a month name.
pub fn resolve_month(name: &str) -> Result<u32, ParseDiagnostic> {
    month_index(name).ok_or_else(|| ParseDiagnostic::UnknownMonth(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_year() {
        let header = parse_header(&["January-RAL2026", "Sunday"]).unwrap();
        assert_eq!(
            header,
            Header {
                month: 0,
                location_code: "RAL".into(),
                year: Some(2026),
            }
        );
    }

    #[test]
    fn detached_year_in_next_token() {
        let header = parse_header(&["march-DUR", "2025", "Sunday"]).unwrap();
        assert_eq!(header.month, 2);
        assert_eq!(header.location_code, "DUR");
        assert_eq!(header.year, Some(2025));
    }

    #[test]
    fn missing_year_keeps_month_and_location() {
        let header = parse_header(&["October-CHX", "Sunday"]).unwrap();
        assert_eq!(header.month, 9);
        assert_eq!(header.location_code, "CHX");
        assert_eq!(header.year, None);

        let header = parse_header(&["October-CHX", "20261"]).unwrap();
        assert_eq!(header.year, None);
    }

    #[test]
    fn misspelled_month_is_unparseable() {
        assert_eq!(
            parse_header(&["Marchx-RAL", "2026"]),
            Err(ParseDiagnostic::UnparseableHeader("Marchx-RAL".into()))
        );
        assert_eq!(
            parse_header(&["Schedule", "2026"]),
            Err(ParseDiagnostic::UnparseableHeader("Schedule".into()))
        );
    }

    #[test]
    fn resolve_month_reports_unknown_names() {
        assert_eq!(resolve_month("AUGUST"), Ok(7));
        assert_eq!(
            resolve_month("Smarch"),
            Err(ParseDiagnostic::UnknownMonth("Smarch".into()))
        );
    }
}
