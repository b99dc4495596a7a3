//! TUI rendering logic for the landing page.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use crate::view::{
    FooterView, GridView, HeaderView, HeroView, LandingView, LoadingView, PageView, TileView,
    TopRatedView,
};

/// Width of one grid tile, borders included.
const TILE_WIDTH: u16 = 24;
/// Height of the hero banner.
const HERO_HEIGHT: u16 = 9;
/// Height of the tile grid.
const GRID_HEIGHT: u16 = 8;

/// Draws the page.
pub fn draw(frame: &mut Frame, page: &PageView) {
    match page {
        PageView::Loading(view) => draw_loading(frame, frame.area(), view),
        PageView::Landing(view) => draw_landing(frame, frame.area(), view),
    }
}

fn draw_loading(frame: &mut Frame, area: Rect, view: &LoadingView) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    let text = format!("{} {}", view.spinner, view.status);
    let spinner = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" cinescope "));
    frame.render_widget(spinner, middle);
}

fn draw_landing(frame: &mut Frame, area: Rect, view: &LandingView) {
    let mut constraints = vec![Constraint::Length(3)];
    if view.hero.is_some() {
        constraints.push(Constraint::Length(HERO_HEIGHT));
    }
    constraints.push(Constraint::Length(GRID_HEIGHT));
    if let Some(top) = &view.top_rated {
        let rows = u16::try_from(top.rows.len()).unwrap_or(u16::MAX);
        constraints.push(Constraint::Length(rows.saturating_add(2)));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut areas = chunks.iter().copied();

    if let Some(header) = areas.next() {
        draw_header(frame, header, &view.header);
    }
    if let Some(hero) = &view.hero
        && let Some(hero_area) = areas.next()
    {
        draw_hero(frame, hero_area, hero);
    }
    if let Some(grid) = areas.next() {
        draw_grid(frame, grid, &view.grid);
    }
    if let Some(top) = &view.top_rated
        && let Some(top_area) = areas.next()
    {
        draw_top_rated(frame, top_area, top);
    }
    // filler
    let _ = areas.next();
    if let Some(footer) = areas.next() {
        draw_footer(frame, footer, &view.footer);
    }
}

/// Draws brand, navigation, search box and profile glyph.
fn draw_header(frame: &mut Frame, area: Rect, header: &HeaderView) {
    let brand_width = u16::try_from(header.brand.len())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let [brand_area, nav_area, search_area, profile_area] = Layout::horizontal([
        Constraint::Length(brand_width),
        Constraint::Min(10),
        Constraint::Length(32),
        Constraint::Length(5),
    ])
    .areas(area);

    let brand = Paragraph::new(Span::styled(
        header.brand,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(brand, brand_area);

    let mut spans = Vec::with_capacity(header.nav.len().saturating_mul(2));
    for entry in &header.nav {
        let style = if entry.active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(entry.label, style));
        spans.push(Span::raw("  "));
    }
    let nav = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(nav, nav_area);

    let search_style = if header.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search_text = if header.search_query.is_empty() && !header.search_focused {
        Span::styled("Search movies...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(header.search_query.as_str())
    };
    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title(" Search: / "),
    );
    frame.render_widget(search, search_area);

    let profile = Paragraph::new("@")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(profile, profile_area);
}

fn draw_hero(frame: &mut Frame, area: Rect, hero: &HeroView) {
    let mut badges = vec![
        Span::styled(
            format!(" \u{2605} {} ", hero.rating),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(hero.year.as_str(), Style::default().fg(Color::Gray)),
    ];
    for genre in &hero.genres {
        badges.push(Span::raw("  "));
        badges.push(Span::styled(
            format!("[{genre}]"),
            Style::default().fg(Color::Magenta),
        ));
    }

    let actions: Vec<Span> = hero
        .actions
        .iter()
        .flat_map(|label| {
            [
                Span::styled(
                    format!("[ {label} ]"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
            ]
        })
        .collect();

    let lines = vec![
        Line::from(badges),
        Line::from(Span::styled(
            hero.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(hero.overview.as_str()),
        Line::from(actions),
        Line::from(Span::styled(
            hero.artwork_url.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Featured "));
    frame.render_widget(paragraph, area);
}

#[allow(clippy::arithmetic_side_effects)]
fn draw_grid(frame: &mut Frame, area: Rect, grid: &GridView) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", grid.heading));
    if let Some(action) = grid.action {
        block = block.title(Line::from(format!(" {action} \u{2192} ")).right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(placeholder) = grid.placeholder {
        let paragraph = Paragraph::new(placeholder)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, inner);
        return;
    }

    let visible = usize::from((inner.width / TILE_WIDTH).max(1));
    let selected = grid.tiles.iter().position(|t| t.selected).unwrap_or(0);
    let start = tile_window_start(selected, visible);

    let columns = Layout::horizontal(vec![Constraint::Length(TILE_WIDTH); visible]).split(inner);
    for (tile, column) in grid.tiles.iter().skip(start).zip(columns.iter()) {
        draw_tile(frame, *column, tile);
    }
}

/// First tile index of the window that keeps `selected` visible.
#[allow(clippy::arithmetic_side_effects)]
const fn tile_window_start(selected: usize, visible: usize) -> usize {
    if visible == 0 || selected < visible {
        0
    } else {
        selected + 1 - visible
    }
}

fn draw_tile(frame: &mut Frame, area: Rect, tile: &TileView) {
    let border_style = if tile.selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let title_style = if tile.selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(tile.title.as_str(), title_style)),
        Line::from(Span::styled(
            tile.year.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            tile.artwork_url.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" \u{2605} {} ", tile.rating),
                Style::default().fg(Color::Yellow),
            )),
    );
    frame.render_widget(paragraph, area);
}

fn draw_top_rated(frame: &mut Frame, area: Rect, top: &TopRatedView) {
    let items: Vec<ListItem> = top
        .rows
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:>2} ", row.rank),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    row.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  \u{2605} {}", row.rating),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("  {}", row.year),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", top.heading))
            .title(Line::from(format!(" {} \u{2192} ", top.action)).right_aligned()),
    );
    frame.render_widget(list, area);
}

/// Draws the footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect, footer: &FooterView) {
    let mut spans = vec![
        Span::styled(
            footer.brand,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(footer.tagline, Style::default().fg(Color::Gray)),
        Span::raw("    "),
    ];
    for link in footer.links {
        spans.push(Span::styled(link, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title_bottom(footer.key_hints),
    );
    frame.render_widget(paragraph, area);
}
