//! Landing page controller.
//!
//! Owns the `ViewState` and turns user input and background results into
//! state changes. Network work runs in spawned tasks that report back as
//! `PageEvent`s on an unbounded channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use cinescope_api::Movie;
use cinescope_api::feed::FeedApi;

use crate::debounce::{DEFAULT_SEARCH_DEBOUNCE, Debouncer};
use crate::loader::{LandingData, load_landing};
use crate::state::ViewState;

/// Result of background work, delivered to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Initial load finished.
    Loaded(LandingData),
    /// The search box has been quiet for the debounce interval.
    SearchDue(String),
    /// A search request returned.
    SearchCompleted {
        /// Ticket issued when the search started.
        ticket: u64,
        /// Query the results belong to.
        query: String,
        /// Returned titles.
        results: Vec<Movie>,
    },
    /// An artwork URL failed to load.
    ArtworkFailed(String),
}

/// Tunables of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// Quiet period before a search runs.
    pub search_debounce: Duration,
    /// Probe artwork URLs and swap broken ones for the fallback.
    pub probe_artwork: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            probe_artwork: true,
        }
    }
}

/// Drives the landing page state.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct LandingController<F> {
    feed: Arc<F>,
    state: ViewState,
    debouncer: Debouncer<PageEvent>,
    tx: UnboundedSender<PageEvent>,
    probe_artwork: bool,
    started: bool,
}

impl<F> LandingController<F>
where
    F: FeedApi + Send + Sync + 'static,
{
    /// Creates a controller and the receiver for its background events.
    #[must_use]
    pub fn new(feed: Arc<F>, options: PageOptions) -> (Self, UnboundedReceiver<PageEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            feed,
            state: ViewState::new(),
            debouncer: Debouncer::new(options.search_debounce, tx.clone()),
            tx,
            probe_artwork: options.probe_artwork,
            started: false,
        };
        (controller, rx)
    }

    /// Returns the page state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the page state for navigation changes.
    pub const fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Starts the initial load. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.state.loading = true;

        let feed = Arc::clone(&self.feed);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let data = load_landing(feed.as_ref()).await;
            if tx.send(PageEvent::Loaded(data)).is_err() {
                tracing::debug!("page closed before initial load finished");
            }
        });
    }

    /// Replaces the search query.
    ///
    /// A blank query clears the search immediately. Anything else restarts
    /// the debounce timer.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.state.search_query {
            return;
        }
        self.state.search_query = query;

        if self.state.search_query.trim().is_empty() {
            self.debouncer.cancel();
            self.state.clear_search();
            tracing::debug!("search cleared");
            return;
        }
        self.debouncer
            .call(PageEvent::SearchDue(self.state.search_query.clone()));
    }

    /// Appends a character to the search query.
    pub fn push_char(&mut self, c: char) {
        let mut query = self.state.search_query.clone();
        query.push(c);
        self.set_query(query);
    }

    /// Removes the last character of the search query.
    pub fn pop_char(&mut self) {
        let mut query = self.state.search_query.clone();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    /// Applies a background event.
    pub fn handle_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::Loaded(data) => {
                self.state.finish_loading(data);
                self.probe_visible_artwork();
            }
            PageEvent::SearchDue(query) => self.run_search(query),
            PageEvent::SearchCompleted {
                ticket,
                query,
                results,
            } => {
                let count = results.len();
                if self.state.complete_search(ticket, results) {
                    tracing::debug!(%query, count, "search results applied");
                    self.probe_visible_artwork();
                } else {
                    tracing::debug!(%query, ticket, "discarding superseded search results");
                }
            }
            PageEvent::ArtworkFailed(url) => {
                if self.state.mark_artwork_broken(url.as_str()) {
                    tracing::debug!(%url, "artwork replaced with fallback");
                }
            }
        }
    }

    /// Issues the search for a query whose debounce elapsed.
    fn run_search(&mut self, query: String) {
        if query != self.state.search_query || query.trim().is_empty() {
            tracing::debug!(%query, "ignoring outdated search");
            return;
        }
        let ticket = self.state.issue_search();
        tracing::debug!(%query, ticket, "search issued");

        let feed = Arc::clone(&self.feed);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let results = feed.search_movies(&query).await;
            let event = PageEvent::SearchCompleted {
                ticket,
                query,
                results,
            };
            if tx.send(event).is_err() {
                tracing::debug!("page closed before search finished");
            }
        });
    }

    /// Probes artwork URLs currently on screen.
    fn probe_visible_artwork(&self) {
        if !self.probe_artwork {
            return;
        }

        let hero = self
            .state
            .hero_movie
            .as_ref()
            .filter(|_| !self.state.is_searching)
            .and_then(|m| m.backdrop_path.as_deref());
        let tiles = self
            .state
            .display_movies()
            .iter()
            .chain(self.state.top_rated_movies.iter())
            .filter_map(|m| m.poster_path.as_deref());

        let mut urls: Vec<String> = hero
            .into_iter()
            .chain(tiles)
            .filter(|url| !url.is_empty() && !self.state.is_artwork_broken(url))
            .map(String::from)
            .collect();
        urls.sort_unstable();
        urls.dedup();

        for url in urls {
            let feed = Arc::clone(&self.feed);
            let tx = self.tx.clone();
            tokio::spawn(async move {
                if !feed.probe_artwork(&url).await {
                    let _ = tx.send(PageEvent::ArtworkFailed(url));
                }
            });
        }
    }
}
