//! Movie discovery landing page for the terminal.
//!
//! Uses `ratatui` + `crossterm` for rendering. Page data comes from the
//! movie feed through a `FeedApi` implementation.

mod app;
/// Page controller and background events.
pub mod controller;
/// Search debouncing.
pub mod debounce;
mod input;
/// Initial landing page data.
pub mod loader;
/// Landing page view state.
pub mod state;
mod ui;
/// Pure view model built from the page state.
pub mod view;

pub use app::run_landing_page;
pub use controller::{LandingController, PageEvent, PageOptions};
