//! Initial landing page data.

use cinescope_api::feed::FeedApi;
use cinescope_api::{Category, Movie};

/// Maximum number of trending tiles.
pub const TRENDING_LIMIT: usize = 10;
/// Maximum number of top rated rows.
pub const TOP_RATED_LIMIT: usize = 5;

/// Result of the initial load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandingData {
    /// Trending titles, truncated.
    pub trending: Vec<Movie>,
    /// Top rated titles, truncated.
    pub top_rated: Vec<Movie>,
    /// First trending title.
    pub hero: Option<Movie>,
}

impl LandingData {
    /// Truncates both lists and picks the hero.
    #[must_use]
    pub fn from_lists(mut trending: Vec<Movie>, mut top_rated: Vec<Movie>) -> Self {
        trending.truncate(TRENDING_LIMIT);
        top_rated.truncate(TOP_RATED_LIMIT);
        let hero = trending.first().cloned();
        Self {
            trending,
            top_rated,
            hero,
        }
    }
}

/// Fetches trending and top rated concurrently.
///
/// Never fails: the feed resolves errors to empty lists.
pub async fn load_landing<F>(feed: &F) -> LandingData
where
    F: FeedApi + Sync,
{
    let (trending, top_rated) = futures::join!(
        feed.fetch_category(Category::Trending),
        feed.fetch_category(Category::TopRated),
    );
    tracing::info!(
        trending = trending.len(),
        top_rated = top_rated.len(),
        "landing page data loaded"
    );
    LandingData::from_lists(trending, top_rated)
}
