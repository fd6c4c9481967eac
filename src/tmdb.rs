use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::filters::FilterCriteria;
use crate::media::{Genre, GenreList, MovieDetail, MovieId, MovieListPage};
use crate::settings::AppSettings;

const BASE_URL: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";
const DETAIL_APPENDS: &str = "credits,videos,recommendations,similar";

const NO_PARAMS: [(&str, &str); 0] = [];

/// Stand-in art for movies and people without an image path.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/500x750?text=No+Image";
pub const PLACEHOLDER_PROFILE: &str = "https://via.placeholder.com/150x225?text=No+Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ImageSize {
    Poster,
    Backdrop,
    Profile,
}

impl ImageSize {
    fn token(self) -> &'static str {
        match self {
            ImageSize::Poster => "w500",
            ImageSize::Backdrop => "original",
            ImageSize::Profile => "w185",
        }
    }
}

// Internal only. Every public operation collapses these to an absent result,
// so callers never branch on a failure subtype.
#[derive(Debug, Error)]
enum TmdbError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin client over the TMDB v3 API. Each operation issues a single GET
/// carrying the API key and locale, with no retries and no timeout beyond
/// the transport default. Failures are logged once and surface as `None`.
#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    api_key: String,
    language: String,
    base_url: String,
    image_base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String, language: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            language,
            base_url: String::from(BASE_URL),
            image_base_url: String::from(IMAGE_BASE_URL),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.api_key.clone(), settings.language.clone())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn trending(&self, window: TimeWindow, page: u32) -> Option<MovieListPage> {
        let path = format!("/trending/movie/{}", window.as_str());
        self.fetch(&path, &[("page", page.to_string())]).await
    }

    pub async fn search(&self, query: &str, page: u32) -> Option<MovieListPage> {
        self.fetch(
            "/search/movie",
            &[
                ("query", query.to_string()),
                ("page", page.to_string()),
                ("include_adult", String::from("false")),
            ],
        )
        .await
    }

    pub async fn discover(&self, filters: &FilterCriteria, page: u32) -> Option<MovieListPage> {
        let mut params = filters.to_query();
        params.push((String::from("page"), page.to_string()));
        self.fetch("/discover/movie", &params).await
    }

    /// Fetch the full record for one movie, with cast, videos,
    /// recommendations, and similar titles embedded in the same response.
    pub async fn details(&self, id: MovieId) -> Option<MovieDetail> {
        let path = format!("/movie/{id}");
        self.fetch(&path, &[("append_to_response", DETAIL_APPENDS)])
            .await
    }

    pub async fn genres(&self) -> Option<Vec<Genre>> {
        self.fetch::<GenreList, _>("/genre/movie/list", &NO_PARAMS)
            .await
            .map(|list| list.genres)
    }

    /// Resolve an image path fragment against the media base URL. Absent or
    /// empty paths stay absent; callers substitute a placeholder.
    pub fn image_url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        let path = path.filter(|p| !p.is_empty())?;
        Some(format!("{}{}{}", self.image_base_url, size.token(), path))
    }

    pub fn poster_url(&self, path: Option<&str>) -> Option<String> {
        self.image_url(path, ImageSize::Poster)
    }

    pub fn backdrop_url(&self, path: Option<&str>) -> Option<String> {
        self.image_url(path, ImageSize::Backdrop)
    }

    pub fn profile_url(&self, path: Option<&str>) -> Option<String> {
        self.image_url(path, ImageSize::Profile)
    }

    async fn fetch<T, P>(&self, path: &str, params: &P) -> Option<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        match self.try_fetch(path, params).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(path, error = %err, "tmdb request failed");
                None
            }
        }
    }

    async fn try_fetch<T, P>(&self, path: &str, params: &P) -> Result<T, TmdbError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "tmdb request");
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TmdbError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
