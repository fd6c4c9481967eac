use chrono::{Datelike, Utc};

pub const MIN_YEAR: i32 = 1900;
pub const MIN_RATING: f32 = 0.0;
pub const MAX_RATING: f32 = 10.0;
pub const RATING_STEP: f32 = 0.5;

/// Language choices offered by the filter panel, as (code, display name).
pub const LANGUAGES: [(&str, &str); 10] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("hi", "Hindi"),
    ("ru", "Russian"),
];

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Criteria for a discover query. Genre and language are optional filters
/// and are omitted from the query when unset; the year and rating ranges
/// always carry a value and are always sent.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub genre_id: Option<u64>,
    pub year_range: (i32, i32),
    pub rating_range: (f32, f32),
    pub language: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            genre_id: None,
            year_range: (MIN_YEAR, current_year()),
            rating_range: (MIN_RATING, MAX_RATING),
            language: None,
        }
    }
}

impl FilterCriteria {
    pub fn with_genre(mut self, genre_id: u64) -> Self {
        self.genre_id = Some(genre_id);
        self
    }

    /// Set the inclusive release-year range, swapping the bounds if they are
    /// given in reverse.
    pub fn with_year_range(mut self, from: i32, to: i32) -> Self {
        self.year_range = if from <= to { (from, to) } else { (to, from) };
        self
    }

    /// Set the inclusive rating range, snapped to half-point steps and
    /// clamped to the 0-10 scale.
    pub fn with_rating_range(mut self, from: f32, to: f32) -> Self {
        let (from, to) = (snap_rating(from), snap_rating(to));
        self.rating_range = if from <= to { (from, to) } else { (to, from) };
        self
    }

    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Discover query parameters in TMDB field names. Year bounds expand to
    /// the first and last day of the year; rating bounds keep one decimal.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(6);
        if let Some(genre) = self.genre_id {
            params.push((String::from("with_genres"), genre.to_string()));
        }
        params.push((
            String::from("primary_release_date.gte"),
            format!("{}-01-01", self.year_range.0),
        ));
        params.push((
            String::from("primary_release_date.lte"),
            format!("{}-12-31", self.year_range.1),
        ));
        params.push((
            String::from("vote_average.gte"),
            format!("{:.1}", self.rating_range.0),
        ));
        params.push((
            String::from("vote_average.lte"),
            format!("{:.1}", self.rating_range.1),
        ));
        if let Some(lang) = &self.language {
            params.push((String::from("with_original_language"), lang.clone()));
        }
        params
    }
}

fn snap_rating(value: f32) -> f32 {
    let snapped = (value / RATING_STEP).round() * RATING_STEP;
    snapped.clamp(MIN_RATING, MAX_RATING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_filters_are_omitted() {
        let query = FilterCriteria::default()
            .with_year_range(1990, 2000)
            .with_rating_range(5.0, 10.0)
            .to_query();

        let expected: Vec<(String, String)> = vec![
            ("primary_release_date.gte".into(), "1990-01-01".into()),
            ("primary_release_date.lte".into(), "2000-12-31".into()),
            ("vote_average.gte".into(), "5.0".into()),
            ("vote_average.lte".into(), "10.0".into()),
        ];
        assert_eq!(query, expected);
    }

    #[test]
    fn genre_and_language_included_when_set() {
        let query = FilterCriteria::default()
            .with_genre(28)
            .with_language("ja")
            .to_query();

        assert!(query.contains(&("with_genres".into(), "28".into())));
        assert!(query.contains(&("with_original_language".into(), "ja".into())));
        assert_eq!(query.len(), 6);
    }

    #[test]
    fn defaults_span_full_ranges() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.year_range.0, MIN_YEAR);
        assert_eq!(criteria.year_range.1, current_year());
        assert_eq!(criteria.rating_range, (MIN_RATING, MAX_RATING));
        assert!(criteria.genre_id.is_none());
        assert!(criteria.language.is_none());
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let criteria = FilterCriteria::default()
            .with_year_range(2000, 1990)
            .with_rating_range(8.0, 4.0);
        assert_eq!(criteria.year_range, (1990, 2000));
        assert_eq!(criteria.rating_range, (4.0, 8.0));
    }

    #[test]
    fn ratings_snap_to_half_points() {
        let criteria = FilterCriteria::default().with_rating_range(3.3, 12.0);
        assert_eq!(criteria.rating_range, (3.5, 10.0));
    }
}
