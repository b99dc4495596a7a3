//! Landing page main loop.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::UnboundedReceiver;

use cinescope_api::feed::FeedApi;

use crate::controller::{LandingController, PageEvent, PageOptions};
use crate::input::{KeyOutcome, handle_key};
use crate::ui;
use crate::view::build_page;

/// Spinner frame interval.
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the landing page until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails.
pub async fn run_landing_page<F>(feed: Arc<F>, options: PageOptions) -> Result<()>
where
    F: FeedApi + Send + Sync + 'static,
{
    let (mut controller, mut events) = LandingController::new(feed, options);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut controller, &mut events).await;

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to restore cursor")?;

    result
}

/// Main event loop.
async fn run_event_loop<F>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut LandingController<F>,
    events: &mut UnboundedReceiver<PageEvent>,
) -> Result<()>
where
    F: FeedApi + Send + Sync + 'static,
{
    let mut input = EventStream::new();
    let mut spinner = tokio::time::interval(SPINNER_INTERVAL);

    controller.start();

    loop {
        terminal
            .draw(|frame| ui::draw(frame, &build_page(controller.state())))
            .context("failed to draw TUI")?;

        tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if handle_key(controller, key) == KeyOutcome::Quit {
                        tracing::info!("landing page closed");
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("failed to read terminal event"),
                None => return Ok(()),
            },
            Some(event) = events.recv() => controller.handle_event(event),
            _ = spinner.tick(), if controller.state().loading => {
                controller.state_mut().tick_spinner();
            }
        }
    }
}
