//! View model of the landing page.
//!
//! `build_page` is a pure function of `ViewState`; `ui` only draws what it
//! returns.

use cinescope_api::Movie;
use cinescope_api::genres::genre_names;

use crate::state::{InputMode, NavItem, ViewState};

/// Product name shown in the header and footer.
pub const BRAND: &str = "cinescope";

const TAGLINE: &str = "The best movies and series";
const SOCIAL_LINKS: [&str; 3] = ["Facebook", "Twitter", "Instagram"];
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const NOTHING_FOUND: &str = "Nothing found";

/// Whole page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Initial load in progress.
    Loading(LoadingView),
    /// Loaded landing page.
    Landing(LandingView),
}

/// Spinner shown during the initial load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingView {
    /// Current spinner frame.
    pub spinner: char,
    /// Status text.
    pub status: &'static str,
}

/// Sections of the loaded page, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingView {
    /// Brand, navigation and search box.
    pub header: HeaderView,
    /// Featured title; absent while searching.
    pub hero: Option<HeroView>,
    /// Trending or search result tiles.
    pub grid: GridView,
    /// Top rated list; absent while searching or when empty.
    pub top_rated: Option<TopRatedView>,
    /// Brand, tagline and links.
    pub footer: FooterView,
}

/// Page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Brand name.
    pub brand: &'static str,
    /// Navigation entries.
    pub nav: Vec<NavEntry>,
    /// Search box text.
    pub search_query: String,
    /// Search box has focus.
    pub search_focused: bool,
}

/// One navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Label.
    pub label: &'static str,
    /// Currently highlighted.
    pub active: bool,
}

/// Hero banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    /// Title.
    pub title: String,
    /// Rating badge text.
    pub rating: String,
    /// Release year.
    pub year: String,
    /// Genre badges.
    pub genres: Vec<&'static str>,
    /// Overview text.
    pub overview: String,
    /// Backdrop URL (fallback applied).
    pub artwork_url: String,
    /// Action labels.
    pub actions: [&'static str; 2],
}

/// Movie grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    /// Section heading.
    pub heading: String,
    /// Link label next to the heading; absent for search results.
    pub action: Option<&'static str>,
    /// Tiles in display order.
    pub tiles: Vec<TileView>,
    /// Placeholder when there are no tiles.
    pub placeholder: Option<&'static str>,
}

/// One grid tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    /// Title.
    pub title: String,
    /// Rating text.
    pub rating: String,
    /// Release year.
    pub year: String,
    /// Poster URL (fallback applied).
    pub artwork_url: String,
    /// Under the tile cursor.
    pub selected: bool,
}

/// Top rated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopRatedView {
    /// Section heading.
    pub heading: &'static str,
    /// Link label next to the heading.
    pub action: &'static str,
    /// Rows, best first.
    pub rows: Vec<TopRatedRow>,
}

/// One top rated row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopRatedRow {
    /// 1-based rank.
    pub rank: usize,
    /// Title.
    pub title: String,
    /// Rating text.
    pub rating: String,
    /// Release year.
    pub year: String,
}

/// Page footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    /// Brand name.
    pub brand: &'static str,
    /// Tagline.
    pub tagline: &'static str,
    /// Social links.
    pub links: [&'static str; 3],
    /// Key hints for the current input mode.
    pub key_hints: &'static str,
}

/// Builds the page for the given state.
#[must_use]
pub fn build_page(state: &ViewState) -> PageView {
    if state.loading {
        return PageView::Loading(LoadingView {
            spinner: spinner_frame(state.spinner_tick()),
            status: "Loading movies...",
        });
    }

    let hero = if state.is_searching {
        None
    } else {
        state.hero_movie.as_ref().map(|movie| build_hero(state, movie))
    };

    let top_rated = if state.is_searching || state.top_rated_movies.is_empty() {
        None
    } else {
        Some(build_top_rated(&state.top_rated_movies))
    };

    PageView::Landing(LandingView {
        header: build_header(state),
        hero,
        grid: build_grid(state),
        top_rated,
        footer: FooterView {
            brand: BRAND,
            tagline: TAGLINE,
            links: SOCIAL_LINKS,
            key_hints: key_hints(state.input_mode),
        },
    })
}

fn build_header(state: &ViewState) -> HeaderView {
    HeaderView {
        brand: BRAND,
        nav: NavItem::ALL
            .iter()
            .map(|&item| NavEntry {
                label: item.label(),
                active: item == state.active_section,
            })
            .collect(),
        search_query: state.search_query.clone(),
        search_focused: state.input_mode == InputMode::Search,
    }
}

fn build_hero(state: &ViewState, movie: &Movie) -> HeroView {
    HeroView {
        title: movie.title.clone(),
        rating: format_rating(movie.rating),
        year: movie.year.clone(),
        genres: genre_names(&movie.genre_ids),
        overview: movie.overview.clone().unwrap_or_default(),
        artwork_url: String::from(state.artwork_or_fallback(movie.backdrop_path.as_deref())),
        actions: ["Watch", "Details"],
    }
}

fn build_grid(state: &ViewState) -> GridView {
    let searching = state.is_searching && !state.search_query.trim().is_empty();
    let (heading, action) = if searching {
        (format!("Search results: \"{}\"", state.search_query), None)
    } else {
        (String::from("Currently trending"), Some("All movies"))
    };

    let tiles: Vec<TileView> = state
        .display_movies()
        .iter()
        .enumerate()
        .map(|(idx, movie)| TileView {
            title: movie.title.clone(),
            rating: format_rating(movie.rating),
            year: movie.year.clone(),
            artwork_url: String::from(state.artwork_or_fallback(movie.poster_path.as_deref())),
            selected: idx == state.tile_cursor(),
        })
        .collect();

    let placeholder = tiles.is_empty().then_some(NOTHING_FOUND);

    GridView {
        heading,
        action,
        tiles,
        placeholder,
    }
}

fn build_top_rated(movies: &[Movie]) -> TopRatedView {
    TopRatedView {
        heading: "Top rated",
        action: "Full ranking",
        rows: movies
            .iter()
            .enumerate()
            .map(|(idx, movie)| TopRatedRow {
                rank: idx.saturating_add(1),
                title: movie.title.clone(),
                rating: format_rating(movie.rating),
                year: movie.year.clone(),
            })
            .collect(),
    }
}

/// Formats a vote average like the feed sends it (`8.2`, `9`).
fn format_rating(rating: f64) -> String {
    format!("{rating}")
}

fn spinner_frame(tick: usize) -> char {
    tick.checked_rem(SPINNER_FRAMES.len())
        .and_then(|idx| SPINNER_FRAMES.get(idx))
        .copied()
        .unwrap_or('*')
}

const fn key_hints(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Search => "Type to search | Backspace: delete | Esc/Enter: done",
        InputMode::Normal => {
            "/: search  Tab/S-Tab: section  \u{2190}\u{2192}: move  Enter/o: open on TMDB  p: artwork  q: quit"
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use cinescope_api::FALLBACK_ARTWORK_URL;

    use super::*;
    use crate::loader::LandingData;

    fn movie(id: u64, title: &str, rating: f64) -> Movie {
        let mut movie = Movie::new(id, title);
        movie.rating = rating;
        movie.year = String::from("2024");
        movie
    }

    fn loaded(trending: Vec<Movie>, top_rated: Vec<Movie>) -> ViewState {
        let mut state = ViewState::new();
        state.finish_loading(LandingData::from_lists(trending, top_rated));
        state
    }

    fn landing(state: &ViewState) -> LandingView {
        match build_page(state) {
            PageView::Landing(view) => view,
            PageView::Loading(_) => panic!("expected landing page"),
        }
    }

    fn search(state: &mut ViewState, query: &str, results: Vec<Movie>) {
        state.search_query = String::from(query);
        let ticket = state.issue_search();
        assert!(state.complete_search(ticket, results));
    }

    #[test]
    fn test_loading_shows_only_spinner() {
        // Arrange
        let mut state = ViewState::new();
        state.tick_spinner();

        // Act
        let page = build_page(&state);

        // Assert
        assert_eq!(
            page,
            PageView::Loading(LoadingView {
                spinner: '⠙',
                status: "Loading movies...",
            })
        );
    }

    #[test]
    fn test_landing_sections() {
        // Arrange
        let mut hero = movie(1, "Dune: Part Two", 8.2);
        hero.genre_ids = vec![878, 12];
        hero.overview = Some(String::from("Paul Atreides unites with the Fremen."));
        hero.backdrop_path = Some(String::from("https://image.tmdb.org/t/p/original/b.jpg"));
        let state = loaded(
            vec![hero, movie(2, "Shogun", 8.6)],
            vec![movie(278, "The Shawshank Redemption", 8.7)],
        );

        // Act
        let page = landing(&state);

        // Assert
        let hero = page.hero.unwrap();
        assert_eq!(hero.title, "Dune: Part Two");
        assert_eq!(hero.rating, "8.2");
        assert_eq!(hero.genres, vec!["Science Fiction", "Adventure"]);
        assert_eq!(hero.artwork_url, "https://image.tmdb.org/t/p/original/b.jpg");
        assert_eq!(page.grid.heading, "Currently trending");
        assert_eq!(page.grid.tiles.len(), 2);
        assert!(page.grid.tiles[0].selected);
        assert!(page.grid.placeholder.is_none());
        let top = page.top_rated.unwrap();
        assert_eq!(top.rows[0].rank, 1);
        assert_eq!(top.rows[0].title, "The Shawshank Redemption");
        assert!(page.header.nav[0].active);
        assert_eq!(page.header.nav.len(), 7);
    }

    #[test]
    fn test_search_hides_hero_and_top_rated() {
        // Arrange
        let mut state = loaded(vec![movie(1, "Dune", 8.0)], vec![movie(2, "Heat", 8.3)]);

        // Act
        search(&mut state, "blade", vec![movie(78, "Blade Runner", 7.9)]);
        let page = landing(&state);

        // Assert
        assert!(page.hero.is_none());
        assert!(page.top_rated.is_none());
        assert_eq!(page.grid.heading, "Search results: \"blade\"");
        assert!(page.grid.action.is_none());
        assert_eq!(page.grid.tiles[0].title, "Blade Runner");
    }

    #[test]
    fn test_empty_search_shows_placeholder() {
        // Arrange
        let mut state = loaded(vec![movie(1, "Dune", 8.0)], Vec::new());

        // Act
        search(&mut state, "zzzz", Vec::new());
        let page = landing(&state);

        // Assert
        assert!(page.grid.tiles.is_empty());
        assert_eq!(page.grid.placeholder, Some("Nothing found"));
    }

    #[test]
    fn test_missing_poster_uses_fallback() {
        // Arrange
        let state = loaded(vec![movie(1, "No Poster", 6.5)], Vec::new());

        // Act
        let page = landing(&state);

        // Assert
        assert_eq!(page.grid.tiles[0].artwork_url, FALLBACK_ARTWORK_URL);
        assert_eq!(page.hero.unwrap().artwork_url, FALLBACK_ARTWORK_URL);
        assert!(page.top_rated.is_none());
    }

    #[test]
    fn test_rating_format() {
        // Arrange & Act & Assert
        assert_eq!(format_rating(8.2), "8.2");
        assert_eq!(format_rating(9.0), "9");
        assert_eq!(format_rating(0.0), "0");
    }

    #[test]
    fn test_search_focus_changes_hints() {
        // Arrange
        let mut state = loaded(Vec::new(), Vec::new());
        state.input_mode = InputMode::Search;

        // Act
        let page = landing(&state);

        // Assert
        assert!(page.header.search_focused);
        assert!(page.footer.key_hints.starts_with("Type to search"));
        assert!(page.hero.is_none());
    }
}
