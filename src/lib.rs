mod app;
mod filters;
mod format;
mod media;
mod session;
mod settings;
mod tmdb;
mod video;

pub use app::{App, Screen, SearchOutcome};
pub use filters::{
    current_year, FilterCriteria, LANGUAGES, MAX_RATING, MIN_RATING, MIN_YEAR, RATING_STEP,
};
pub use format::{format_date, format_runtime, release_year};
pub use media::{
    CastMember, Credits, Genre, MovieDetail, MovieId, MovieListPage, MovieSummary, MAX_PAGE,
};
pub use session::{SessionState, HISTORY_LIMIT};
pub use settings::AppSettings;
pub use tmdb::{ImageSize, TimeWindow, TmdbClient, PLACEHOLDER_POSTER, PLACEHOLDER_PROFILE};
pub use video::{select_trailer, youtube_embed_url, Video, VideoList};
