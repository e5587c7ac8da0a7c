//! Interactive TUI mode.
//!
//! Rendering is a pure function of [`App`]: every frame is drawn from the
//! store's visible entries and selection, and nothing in `ui` mutates state.

mod app;
mod events;
mod terminal;

use std::time::Duration;

use anyhow::Result;
use arcade_core::catalog::{CatalogStatus, ParsedCatalog, View};
use arcade_core::models::GameEntry;
use arcade_core::source::{CatalogSource, load_catalog};
use crossterm::event::{Event, KeyEventKind, poll, read};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tokio::sync::mpsc;

use crate::shared::launch::open_game;

use app::{App, Effect, Notice};
use events::{Focus, map_key};
use terminal::TerminalSession;

type LoadResult = arcade_core::Result<ParsedCatalog>;

/// Run the TUI application.
pub async fn run(source: CatalogSource) -> Result<()> {
    let mut terminal = TerminalSession::start(&source)?;
    let mut app = App::new(source);
    run_app(&mut terminal, &mut app).await
}

/// Fetches the catalog on a background task and reports back over `tx`.
fn spawn_load(source: &CatalogSource, tx: mpsc::UnboundedSender<LoadResult>) {
    let fetcher = source.fetcher();
    tracing::info!(source = %source, "Loading catalog");
    tokio::spawn(async move {
        let result = load_catalog(fetcher.as_ref()).await;
        // A closed channel means the UI has already quit.
        let _ = tx.send(result);
    });
}

/// Main application loop.
async fn run_app(terminal: &mut TerminalSession, app: &mut App) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_load(&app.source, tx.clone());

    loop {
        while let Ok(result) = rx.try_recv() {
            app.on_catalog_loaded(result);
        }

        terminal.draw(|frame| ui(frame, app))?;

        if poll(Duration::from_millis(100))?
            && let Event::Key(key) = read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = map_key(app.focus(), key)
        {
            match app.apply(action) {
                Some(Effect::Launch(entry)) => launch(app, &entry),
                Some(Effect::Reload) => spawn_load(&app.source, tx.clone()),
                None => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn launch(app: &mut App, entry: &GameEntry) {
    app.notice = Some(match open_game(entry) {
        Ok(()) => Notice::Info(format!("Opened {} in your browser", entry.title)),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to open game");
            Notice::Error(e.to_string())
        }
    });
}

/// Render the UI.
fn ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.fullscreen
        && !app.show_help
        && let View::Viewing(entry) = app.store.view()
    {
        render_player(frame, area, entry, true);
        return;
    }

    let layout = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(1),    // Content
        Constraint::Length(3), // Footer
    ])
    .split(area);

    render_header(frame, layout[0], app);

    if app.show_help {
        render_help(frame, layout[1]);
    } else {
        match app.store.view() {
            View::Browsing => render_catalog(frame, layout[1], app),
            View::Viewing(entry) => render_player(frame, layout[1], entry, false),
        }
    }

    render_footer(frame, layout[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let query = app.store.query();
    let search_style = if app.searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(
            " arcade ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Search: ", search_style),
    ];

    if query.is_empty() && !app.searching {
        spans.push(Span::styled("press / to search", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::raw(query.to_string()));
    }
    if app.searching {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }

    // A failed reload keeps the previous games, so count from the state.
    let total = app.store.state().len();
    if matches!(app.store.status(), CatalogStatus::Ready { .. }) || total > 0 {
        spans.push(Span::styled(
            format!("   {} of {} games", app.store.visible_entries().len(), total),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = match app.focus() {
        Focus::Help => &[("Esc", "close help")],
        Focus::Search => &[("Enter", "done"), ("↑/↓", "move"), ("Esc", "close search")],
        Focus::Grid => &[
            ("q", "quit"),
            ("/", "search"),
            ("Enter", "play"),
            ("r", "reload"),
            ("?", "help"),
        ],
        Focus::Player => &[
            ("o", "open in browser"),
            ("f", "fullscreen"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {} ", key), Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!("{}  ", label)));
    }

    match &app.notice {
        Some(Notice::Info(message)) => {
            spans.push(Span::styled(message.clone(), Style::default().fg(Color::Green)));
        }
        Some(Notice::Error(message)) => {
            spans.push(Span::styled(message.clone(), Style::default().fg(Color::Red)));
        }
        None => {}
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

/// Render the catalog list, or whichever empty state applies.
fn render_catalog(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Games ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let visible = app.store.visible_entries();

    if visible.is_empty() {
        let message = match app.store.status() {
            CatalogStatus::Loading => vec![Line::from(Span::styled(
                format!("Loading catalog from {}...", app.source),
                Style::default().fg(Color::DarkGray),
            ))],
            CatalogStatus::Unavailable { reason } if app.store.state().is_empty() => vec![
                Line::from(Span::styled(
                    "Catalog unavailable",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(reason.clone()),
                Line::from(""),
                Line::from(Span::styled(
                    "Press r to try again.",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            _ if !app.store.query().is_empty() => vec![Line::from(
                Span::styled(
                    format!("No games found matching '{}'.", app.store.query()),
                    Style::default().fg(Color::DarkGray),
                ),
            )],
            _ => vec![Line::from(Span::styled(
                "The catalog is empty.",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let paragraph = Paragraph::new(message).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|game| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    game.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(game.description.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the player pane for the selected game.
fn render_player(frame: &mut Frame, area: Rect, game: &GameEntry, fullscreen: bool) {
    let label = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            game.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if !game.description.is_empty() {
        lines.push(Line::from(game.description.clone()));
    }
    lines.extend([
        Line::from(""),
        Line::from(vec![
            Span::styled("URL:       ", label),
            Span::styled(game.url.clone(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Thumbnail: ", label),
            Span::raw(game.thumbnail.clone()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press o to play in your browser.",
            Style::default().fg(Color::Yellow),
        )),
    ]);
    if fullscreen {
        lines.push(Line::from(Span::styled(
            "f exit fullscreen · Esc back to games",
            label,
        )));
    }

    let player = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" Playing: {} ", game.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(player, area);
}

/// Render the help overlay.
fn render_help(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let section = Style::default().add_modifier(Modifier::BOLD);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("Browsing", section)),
        Line::from(""),
        Line::from(vec![Span::styled("  / s   ", key), Span::raw("Search titles and descriptions")]),
        Line::from(vec![Span::styled("  j/k   ", key), Span::raw("Move down/up")]),
        Line::from(vec![Span::styled("  Enter ", key), Span::raw("Open the highlighted game")]),
        Line::from(vec![Span::styled("  Esc   ", key), Span::raw("Clear the search")]),
        Line::from(vec![Span::styled("  r     ", key), Span::raw("Reload the catalog")]),
        Line::from(""),
        Line::from(Span::styled("Playing", section)),
        Line::from(""),
        Line::from(vec![Span::styled("  o     ", key), Span::raw("Open the game in your browser")]),
        Line::from(vec![Span::styled("  f     ", key), Span::raw("Toggle fullscreen")]),
        Line::from(vec![Span::styled("  Esc h ", key), Span::raw("Back to the game list")]),
        Line::from(""),
        Line::from(vec![Span::styled("  ?     ", key), Span::raw("Toggle this help")]),
        Line::from(vec![Span::styled("  q     ", key), Span::raw("Quit")]),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(help, area);
}
