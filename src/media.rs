use serde::Deserialize;

use crate::video::VideoList;

pub type MovieId = u64;

/// TMDB rejects page numbers above 500 regardless of `total_pages`.
pub const MAX_PAGE: u32 = 500;

#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub overview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// Paginated list envelope shared by the trending, search, and discover
/// endpoints, and by the lists embedded in a detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListPage {
    #[serde(default = "one")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default = "one")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn one() -> u32 {
    1
}

impl MovieListPage {
    /// Last page reachable through pagination controls.
    pub fn last_page(&self) -> u32 {
        self.total_pages.clamp(1, MAX_PAGE)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

/// Full record for the detail view. Fetched per id with credits, videos,
/// recommendations, and similar titles appended in the same response; a
/// summary is never promoted into one of these.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetail {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub overview: String,
    pub runtime: Option<u32>,
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub credits: Credits,
    #[serde(default)]
    pub videos: VideoList,
    pub recommendations: Option<MovieListPage>,
    pub similar: Option<MovieListPage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_page_caps_at_500() {
        let page = MovieListPage {
            page: 1,
            results: Vec::new(),
            total_pages: 32141,
            total_results: 642820,
        };
        assert_eq!(page.last_page(), 500);
    }

    #[test]
    fn list_page_is_at_least_one() {
        let page = MovieListPage {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        };
        assert_eq!(page.last_page(), 1);
    }

    #[test]
    fn detail_parses_with_missing_sections() {
        let detail: MovieDetail = serde_json::from_str(
            r#"{"id": 27205, "title": "Inception", "runtime": 148, "status": "Released"}"#,
        )
        .unwrap();
        assert_eq!(detail.runtime, Some(148));
        assert!(detail.credits.cast.is_empty());
        assert!(detail.videos.results.is_empty());
        assert!(detail.similar.is_none());
    }
}
