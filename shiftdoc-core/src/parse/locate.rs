//! Finding where the calendar body starts.

use crate::vocabulary::DAYS_IN_WEEK;

/// Index of the first calendar body token.
///
/// The body starts right after the day-of-week header row, which is found as
/// the first adjacent `sunday` `monday` pair (any case). Returns `None` when
/// no such pair exists.
pub fn find_calendar_body(tokens: &[&str]) -> Option<usize> {
    tokens
        .windows(2)
        .position(|pair| {
            pair[0].eq_ignore_ascii_case("sunday") && pair[1].eq_ignore_ascii_case("monday")
        })
        .map(|start| (start + DAYS_IN_WEEK).min(tokens.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEKDAYS: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];

    #[test]
    fn body_starts_after_weekday_row() {
        let mut tokens = vec!["January-RAL2026", "Clinic"];
        tokens.extend(WEEKDAYS);
        tokens.extend(["1", "CLOSED"]);
        assert_eq!(find_calendar_body(&tokens), Some(9));
        assert_eq!(tokens[9], "1");
    }

    #[test]
    fn pair_match_ignores_case() {
        let tokens = ["x", "SUNDAY", "monday", "t", "w", "t", "f", "s", "4"];
        assert_eq!(find_calendar_body(&tokens), Some(8));
    }

    #[test]
    fn lone_sunday_is_not_a_header() {
        let tokens = ["Sunday", "Tuesday", "Monday", "Sunday"];
        assert_eq!(find_calendar_body(&tokens), None);
    }

    #[test]
    fn truncated_header_row_yields_empty_body() {
        let tokens = ["April-RAL2026", "Sunday", "Monday", "Tuesday"];
        assert_eq!(find_calendar_body(&tokens), Some(tokens.len()));
    }
}
