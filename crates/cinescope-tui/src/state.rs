//! Landing page state management.

use std::collections::HashSet;

use cinescope_api::{FALLBACK_ARTWORK_URL, Movie};

use crate::loader::LandingData;

/// Header navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    /// Landing page.
    Home,
    /// Movies.
    Movies,
    /// TV series.
    Series,
    /// Ratings.
    Ratings,
    /// Curated collections.
    Collections,
    /// News.
    News,
    /// User profile.
    Profile,
}

impl NavItem {
    /// All entries in header order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Movies,
        Self::Series,
        Self::Ratings,
        Self::Collections,
        Self::News,
        Self::Profile,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Movies => "Movies",
            Self::Series => "Series",
            Self::Ratings => "Ratings",
            Self::Collections => "Collections",
            Self::News => "News",
            Self::Profile => "Profile",
        }
    }

    /// Next entry, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL
            .iter()
            .cycle()
            .skip_while(|&&item| item != self)
            .nth(1)
            .copied()
            .unwrap_or(self)
    }

    /// Previous entry, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL
            .iter()
            .rev()
            .cycle()
            .skip_while(|&&item| item != self)
            .nth(1)
            .copied()
            .unwrap_or(self)
    }
}

/// Input mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode.
    Normal,
    /// Search text input mode.
    Search,
}

/// State of the landing page.
///
/// Owned by `LandingController`; every field changes on the event loop only.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ViewState {
    /// Current search box text.
    pub search_query: String,
    /// Highlighted navigation entry.
    pub active_section: NavItem,
    /// Trending titles (at most 10).
    pub trending_movies: Vec<Movie>,
    /// Top rated titles (at most 5).
    pub top_rated_movies: Vec<Movie>,
    /// Featured title for the hero banner.
    pub hero_movie: Option<Movie>,
    /// Initial load in progress.
    pub loading: bool,
    /// Results of the last applied search.
    pub search_results: Vec<Movie>,
    /// Whether search results replace the trending grid.
    pub is_searching: bool,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Selected tile in the visible grid.
    tile_cursor: usize,
    /// Spinner animation frame counter.
    spinner_tick: usize,
    /// Ticket of the most recently issued search.
    search_ticket: u64,
    /// Artwork URLs that failed to load.
    broken_artwork: HashSet<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates the initial state (loading, nothing fetched yet).
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_query: String::new(),
            active_section: NavItem::Home,
            trending_movies: Vec::new(),
            top_rated_movies: Vec::new(),
            hero_movie: None,
            loading: true,
            search_results: Vec::new(),
            is_searching: false,
            input_mode: InputMode::Normal,
            tile_cursor: 0,
            spinner_tick: 0,
            search_ticket: 0,
            broken_artwork: HashSet::new(),
        }
    }

    /// Movies shown in the grid: search results while a non-blank search
    /// is active, trending otherwise.
    #[must_use]
    pub fn display_movies(&self) -> &[Movie] {
        if self.is_searching && !self.search_query.trim().is_empty() {
            &self.search_results
        } else {
            &self.trending_movies
        }
    }

    /// Applies the initial load result and leaves the loading state.
    pub fn finish_loading(&mut self, data: LandingData) {
        self.trending_movies = data.trending;
        self.top_rated_movies = data.top_rated;
        self.hero_movie = data.hero;
        self.loading = false;
        self.clamp_cursor();
    }

    /// Drops search results and invalidates in-flight searches.
    pub fn clear_search(&mut self) {
        self.search_results.clear();
        self.is_searching = false;
        self.search_ticket = self.search_ticket.wrapping_add(1);
        self.tile_cursor = 0;
    }

    /// Reserves a ticket for a new search, superseding older ones.
    pub const fn issue_search(&mut self) -> u64 {
        self.search_ticket = self.search_ticket.wrapping_add(1);
        self.search_ticket
    }

    /// Applies search results if `ticket` is still the latest search.
    ///
    /// Returns `false` when the results were superseded and dropped.
    pub fn complete_search(&mut self, ticket: u64, results: Vec<Movie>) -> bool {
        if ticket != self.search_ticket {
            return false;
        }
        self.search_results = results;
        self.is_searching = true;
        self.tile_cursor = 0;
        true
    }

    /// Records an artwork URL that failed to load.
    ///
    /// Returns `true` if the URL was not known to be broken yet.
    pub fn mark_artwork_broken(&mut self, url: impl Into<String>) -> bool {
        self.broken_artwork.insert(url.into())
    }

    /// Whether an artwork URL is known to fail.
    #[must_use]
    pub fn is_artwork_broken(&self, url: &str) -> bool {
        self.broken_artwork.contains(url)
    }

    /// Resolves an artwork path to the URL to display.
    #[must_use]
    pub fn artwork_or_fallback<'a>(&self, path: Option<&'a str>) -> &'a str {
        match path {
            Some(url) if !url.is_empty() && !self.is_artwork_broken(url) => url,
            _ => FALLBACK_ARTWORK_URL,
        }
    }

    /// Returns the tile cursor position.
    #[must_use]
    pub const fn tile_cursor(&self) -> usize {
        self.tile_cursor
    }

    /// Returns the selected grid movie.
    #[must_use]
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.display_movies().get(self.tile_cursor)
    }

    /// Moves the tile cursor left.
    pub const fn move_left(&mut self) {
        self.tile_cursor = self.tile_cursor.saturating_sub(1);
    }

    /// Moves the tile cursor right.
    pub fn move_right(&mut self) {
        let next = self.tile_cursor.saturating_add(1);
        if next < self.display_movies().len() {
            self.tile_cursor = next;
        }
    }

    /// Keeps the tile cursor inside the visible grid.
    fn clamp_cursor(&mut self) {
        let len = self.display_movies().len();
        if self.tile_cursor >= len {
            self.tile_cursor = len.saturating_sub(1);
        }
    }

    /// Highlights the next navigation entry.
    pub fn next_section(&mut self) {
        self.active_section = self.active_section.next();
    }

    /// Highlights the previous navigation entry.
    pub fn prev_section(&mut self) {
        self.active_section = self.active_section.prev();
    }

    /// Returns the spinner frame counter.
    #[must_use]
    pub const fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    /// Advances the spinner animation.
    pub const fn tick_spinner(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    fn movies(ids: std::ops::Range<u64>) -> Vec<Movie> {
        ids.map(|id| Movie::new(id, format!("Movie {id}"))).collect()
    }

    fn loaded_state() -> ViewState {
        let mut state = ViewState::new();
        state.finish_loading(LandingData::from_lists(movies(1..4), movies(10..12)));
        state
    }

    #[test]
    fn test_new_state_is_loading() {
        // Arrange & Act
        let state = ViewState::new();

        // Assert
        assert!(state.loading);
        assert!(!state.is_searching);
        assert_eq!(state.active_section, NavItem::Home);
        assert!(state.display_movies().is_empty());
    }

    #[test]
    fn test_display_movies_follows_search_flag() {
        // Arrange
        let mut state = loaded_state();
        let ticket = state.issue_search();
        state.search_query = String::from("dune");

        // Act
        assert!(state.complete_search(ticket, movies(100..101)));

        // Assert
        assert_eq!(state.display_movies().len(), 1);
        assert_eq!(state.display_movies()[0].id, 100);
    }

    #[test]
    fn test_display_movies_ignores_results_for_blank_query() {
        // Arrange
        let mut state = loaded_state();
        let ticket = state.issue_search();
        assert!(state.complete_search(ticket, movies(100..101)));

        // Act
        state.search_query = String::from("   ");

        // Assert
        assert_eq!(state.display_movies().len(), 3);
        assert_eq!(state.display_movies()[0].id, 1);
    }

    #[test]
    fn test_superseded_search_is_dropped() {
        // Arrange
        let mut state = loaded_state();
        state.search_query = String::from("dune");
        let stale = state.issue_search();
        let latest = state.issue_search();

        // Act
        let applied_stale = state.complete_search(stale, movies(100..105));
        let applied_latest = state.complete_search(latest, movies(200..201));

        // Assert
        assert!(!applied_stale);
        assert!(applied_latest);
        assert_eq!(state.search_results.len(), 1);
        assert_eq!(state.search_results[0].id, 200);
    }

    #[test]
    fn test_clear_search_invalidates_in_flight_ticket() {
        // Arrange
        let mut state = loaded_state();
        state.search_query = String::from("dune");
        let ticket = state.issue_search();

        // Act
        state.search_query.clear();
        state.clear_search();
        let applied = state.complete_search(ticket, movies(100..101));

        // Assert
        assert!(!applied);
        assert!(!state.is_searching);
        assert!(state.search_results.is_empty());
    }

    #[test]
    fn test_artwork_fallback() {
        // Arrange
        let mut state = loaded_state();
        let url = "https://image.tmdb.org/t/p/w500/gone.jpg";

        // Act & Assert
        assert_eq!(state.artwork_or_fallback(None), FALLBACK_ARTWORK_URL);
        assert_eq!(state.artwork_or_fallback(Some("")), FALLBACK_ARTWORK_URL);
        assert_eq!(state.artwork_or_fallback(Some(url)), url);
        assert!(state.mark_artwork_broken(url));
        assert!(!state.mark_artwork_broken(url));
        assert_eq!(state.artwork_or_fallback(Some(url)), FALLBACK_ARTWORK_URL);
    }

    #[test]
    fn test_tile_cursor_stays_in_grid() {
        // Arrange
        let mut state = loaded_state();

        // Act
        state.move_left();
        let after_left = state.tile_cursor();
        for _ in 0..10 {
            state.move_right();
        }

        // Assert
        assert_eq!(after_left, 0);
        assert_eq!(state.tile_cursor(), 2);
        assert_eq!(state.selected_movie().unwrap().id, 3);
    }

    #[test]
    fn test_nav_cycles_in_both_directions() {
        // Arrange
        let mut state = ViewState::new();

        // Act
        state.prev_section();
        let wrapped = state.active_section;
        state.next_section();
        state.next_section();

        // Assert
        assert_eq!(wrapped, NavItem::Profile);
        assert_eq!(state.active_section, NavItem::Movies);
        assert_eq!(NavItem::Collections.next(), NavItem::News);
        assert_eq!(NavItem::Home.label(), "Home");
    }
}
