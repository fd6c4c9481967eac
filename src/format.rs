use chrono::NaiveDate;

/// Format a runtime in minutes as "2h 15m" or "45m". Missing or zero
/// runtimes render as "N/A".
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        None | Some(0) => String::from("N/A"),
        Some(m) => {
            let hours = m / 60;
            let mins = m % 60;
            if hours > 0 {
                format!("{hours}h {mins}m")
            } else {
                format!("{mins}m")
            }
        }
    }
}

/// Format an ISO release date as "July 16, 2010". Strings that do not parse
/// as a date are returned verbatim.
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date.filter(|d| !d.is_empty()) else {
        return String::from("N/A");
    };
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Four-digit year slice of a release date, for card captions.
pub fn release_year(date: Option<&str>) -> Option<&str> {
    date.and_then(|d| d.get(..4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_with_hours() {
        assert_eq!(format_runtime(Some(135)), "2h 15m");
        assert_eq!(format_runtime(Some(148)), "2h 28m");
    }

    #[test]
    fn runtime_under_an_hour() {
        assert_eq!(format_runtime(Some(45)), "45m");
    }

    #[test]
    fn runtime_missing() {
        assert_eq!(format_runtime(None), "N/A");
        assert_eq!(format_runtime(Some(0)), "N/A");
    }

    #[test]
    fn date_formatting() {
        assert_eq!(format_date(Some("2010-07-16")), "July 16, 2010");
        assert_eq!(format_date(Some("1999-03-05")), "March 05, 1999");
    }

    #[test]
    fn date_missing_or_unparseable() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
        assert_eq!(format_date(Some("coming soon")), "coming soon");
    }

    #[test]
    fn year_extraction() {
        assert_eq!(release_year(Some("2010-07-16")), Some("2010"));
        assert_eq!(release_year(Some("20")), None);
        assert_eq!(release_year(None), None);
    }
}
