use tracing::debug;

use crate::filters::FilterCriteria;
use crate::media::{MovieDetail, MovieId, MovieListPage, MovieSummary};
use crate::session::SessionState;
use crate::tmdb::{TimeWindow, TmdbClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Search,
    Favorites,
}

/// What the search screen has to show. `NoCriteria` means no request was
/// issued at all: nothing was typed and no filters are applied.
#[derive(Debug)]
pub enum SearchOutcome {
    Results(MovieListPage),
    Unavailable,
    NoCriteria,
}

/// Drives the three screens: which query each one issues, when the page
/// counter resets, and how a selection is resolved into a detail record.
/// Holds the per-session state; one `App` per user session.
pub struct App {
    client: TmdbClient,
    pub session: SessionState,
    screen: Screen,
    time_window: TimeWindow,
    search_query: String,
    filters: Option<FilterCriteria>,
}

impl App {
    pub fn new(client: TmdbClient) -> Self {
        Self {
            client,
            session: SessionState::new(),
            screen: Screen::default(),
            time_window: TimeWindow::default(),
            search_query: String::new(),
            filters: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn navigate(&mut self, screen: Screen) {
        if screen != self.screen {
            self.screen = screen;
            self.session.reset_page();
        }
    }

    pub fn time_window(&self) -> TimeWindow {
        self.time_window
    }

    pub fn set_time_window(&mut self, window: TimeWindow) {
        if window != self.time_window {
            self.time_window = window;
            self.session.reset_page();
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.search_query {
            self.search_query = query;
            self.session.reset_page();
        }
    }

    pub fn filters(&self) -> Option<&FilterCriteria> {
        self.filters.as_ref()
    }

    /// Apply filter criteria. Applying untouched defaults still counts as
    /// "filters active" and makes the search screen fall back to discover.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) {
        self.filters = Some(criteria);
        self.session.reset_page();
    }

    pub fn clear_filters(&mut self) {
        self.filters = None;
        self.session.reset_page();
    }

    /// The home screen always shows trending titles for the selected window.
    pub async fn load_home(&mut self) -> Option<MovieListPage> {
        let page = self
            .client
            .trending(self.time_window, self.session.current_page())
            .await?;
        self.clamp_to(&page);
        Some(page)
    }

    /// The search screen prefers a typed query over active filters; with
    /// neither, no request is made.
    pub async fn load_search(&mut self) -> SearchOutcome {
        let query = self.search_query.trim().to_string();
        if !query.is_empty() {
            self.session.record_search(&query);
            return match self
                .client
                .search(&query, self.session.current_page())
                .await
            {
                Some(page) => {
                    self.clamp_to(&page);
                    SearchOutcome::Results(page)
                }
                None => SearchOutcome::Unavailable,
            };
        }

        if let Some(filters) = &self.filters {
            return match self
                .client
                .discover(filters, self.session.current_page())
                .await
            {
                Some(page) => {
                    self.clamp_to(&page);
                    SearchOutcome::Results(page)
                }
                None => SearchOutcome::Unavailable,
            };
        }

        debug!("search screen idle, no query or filters");
        SearchOutcome::NoCriteria
    }

    /// The favorites screen reads session state only.
    pub fn favorites(&self) -> &[MovieSummary] {
        self.session.favorites()
    }

    /// Select a movie and resolve it through the details endpoint. The
    /// selection is recorded before the fetch and survives a failed one, so
    /// the view can retry the same id.
    pub async fn open_details(&mut self, id: MovieId) -> Option<MovieDetail> {
        self.session.select_movie(id);
        self.client.details(id).await
    }

    pub fn close_details(&mut self) {
        self.session.clear_selection();
    }

    pub fn client(&self) -> &TmdbClient {
        &self.client
    }

    // Once a response reports its page count, pull the session page back
    // inside it.
    fn clamp_to(&mut self, page: &MovieListPage) {
        self.session
            .set_page(self.session.current_page(), page.total_pages);
    }
}
