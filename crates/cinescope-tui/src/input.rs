//! Key handling for the landing page.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use cinescope_api::feed::FeedApi;

use crate::controller::LandingController;
use crate::state::{InputMode, ViewState};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Leave the page.
    Quit,
}

/// Applies a key press to the page.
pub fn handle_key<F>(controller: &mut LandingController<F>, key: KeyEvent) -> KeyOutcome
where
    F: FeedApi + Send + Sync + 'static,
{
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }
    let mode = controller.state().input_mode;
    match mode {
        InputMode::Search => {
            handle_search_input(controller, key.code);
            KeyOutcome::Continue
        }
        InputMode::Normal => handle_normal_input(controller.state_mut(), key.code),
    }
}

/// Handles key input while the search box has focus.
fn handle_search_input<F>(controller: &mut LandingController<F>, key: KeyCode)
where
    F: FeedApi + Send + Sync + 'static,
{
    match key {
        KeyCode::Esc | KeyCode::Enter => controller.state_mut().input_mode = InputMode::Normal,
        KeyCode::Backspace => controller.pop_char(),
        KeyCode::Char(c) => controller.push_char(c),
        _ => {}
    }
}

/// Handles key input in normal mode.
fn handle_normal_input(state: &mut ViewState, key: KeyCode) -> KeyOutcome {
    match key {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Char('/') => state.input_mode = InputMode::Search,
        KeyCode::Tab => state.next_section(),
        KeyCode::BackTab => state.prev_section(),
        KeyCode::Left | KeyCode::Char('h') => state.move_left(),
        KeyCode::Right | KeyCode::Char('l') => state.move_right(),
        KeyCode::Enter | KeyCode::Char('o') => open_url(selected_title_url(state)),
        KeyCode::Char('p') => open_url(selected_artwork_url(state)),
        _ => {}
    }
    KeyOutcome::Continue
}

/// TMDB page of the selected tile.
fn selected_title_url(state: &ViewState) -> Option<String> {
    state.selected_movie().map(cinescope_api::Movie::tmdb_url)
}

/// Artwork shown on the selected tile.
fn selected_artwork_url(state: &ViewState) -> Option<String> {
    state
        .selected_movie()
        .map(|movie| String::from(state.artwork_or_fallback(movie.poster_path.as_deref())))
}

fn open_url(url: Option<String>) {
    let Some(url) = url else {
        return;
    };
    match open::that(&url) {
        Ok(()) => tracing::debug!(%url, "opened in browser"),
        Err(e) => tracing::warn!(%url, error = %e, "failed to open browser"),
    }
}
