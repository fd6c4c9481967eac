use crate::media::{MovieId, MovieSummary, MAX_PAGE};

pub const HISTORY_LIMIT: usize = 5;

/// Per-session mutable state: favorites, recent searches, the current list
/// page, and the movie selected for the detail view. One instance per user
/// session, mutated only by the action currently being handled, and
/// discarded when the session ends.
#[derive(Debug)]
pub struct SessionState {
    favorites: Vec<MovieSummary>,
    search_history: Vec<String>,
    current_page: u32,
    selected_movie: Option<MovieId>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            favorites: Vec::new(),
            search_history: Vec::new(),
            current_page: 1,
            selected_movie: None,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie to the favorites list. Favorites are keyed strictly by
    /// id, so re-adding an already-present id is a no-op. Returns whether
    /// the movie was added.
    pub fn add_favorite(&mut self, movie: MovieSummary) -> bool {
        if self.is_favorite(movie.id) {
            return false;
        }
        self.favorites.push(movie);
        true
    }

    pub fn remove_favorite(&mut self, id: MovieId) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|m| m.id != id);
        self.favorites.len() != before
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.favorites.iter().any(|m| m.id == id)
    }

    pub fn favorites(&self) -> &[MovieSummary] {
        &self.favorites
    }

    /// Record a search query, most recent first. A query already in the
    /// history is left where it is; a new one pushes the oldest entry out
    /// once the history holds `HISTORY_LIMIT` entries.
    pub fn record_search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.search_history.iter().any(|q| q == query) {
            return;
        }
        self.search_history.insert(0, query.to_string());
        self.search_history.truncate(HISTORY_LIMIT);
    }

    pub fn search_history(&self) -> &[String] {
        &self.search_history
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Move to `page`, clamped to `[1, min(total_pages, 500)]`.
    pub fn set_page(&mut self, page: u32, total_pages: u32) {
        self.current_page = page.clamp(1, total_pages.clamp(1, MAX_PAGE));
    }

    pub fn next_page(&mut self, total_pages: u32) {
        self.set_page(self.current_page + 1, total_pages);
    }

    pub fn previous_page(&mut self, total_pages: u32) {
        self.set_page(self.current_page.saturating_sub(1), total_pages);
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    pub fn select_movie(&mut self, id: MovieId) {
        self.selected_movie = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected_movie = None;
    }

    pub fn selected_movie(&self) -> Option<MovieId> {
        self.selected_movie
    }
}
