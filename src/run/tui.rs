use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::api::HttpSource;
use crate::config::Config;
use crate::loader::{spawn_load, LoadHandle, LoadStatus};
use crate::ui::app::App;
use crate::ui::charts::charts_per_page;
use crate::ui::render::{render, CHROME_HEIGHT};

/// How long to wait for input before checking on the load again.
const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    None,
    Reload,
}

pub(crate) fn as_tui(config: &Config) -> Result<()> {
    let source = Arc::new(HttpSource::new(config)?);
    let mut app = App::new(config.api_url.as_str());
    log::info!("Starting TUI against {}", config.api_url);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, source);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("TUI exited with error: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source: Arc<HttpSource>,
) -> Result<()> {
    let mut load: Option<LoadHandle> = Some(start_load(app, &source));

    while app.running {
        if let Some(handle) = load.as_mut() {
            match handle.poll() {
                LoadStatus::Pending => {}
                LoadStatus::Ready(outcome) => {
                    app.apply_load(outcome);
                    load = None;
                }
                LoadStatus::Abandoned => {
                    log::warn!("Load task ended without a result");
                    app.abandon_load();
                    load = None;
                }
            }
        }

        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(CHROME_HEIGHT);
            app.visible_charts = charts_per_page(content_height);
            render(f, app);
        })?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if handle_key(key, app) == Action::Reload {
                // Replacing the handle drops the previous one, cancelling it.
                load = Some(start_load(app, &source));
            }
        }
    }

    // Any load still in flight is cancelled as `load` drops here.
    Ok(())
}

fn start_load(app: &mut App, source: &Arc<HttpSource>) -> LoadHandle {
    app.begin_load();
    spawn_load(Arc::clone(source))
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if app.show_help {
        app.show_help = false;
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.running = false,
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to_bottom(),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => page_down(app),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => page_up(app),
        KeyCode::PageDown => page_down(app),
        KeyCode::PageUp => page_up(app),
        KeyCode::Char('r') => return Action::Reload,
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
    Action::None
}

fn page_down(app: &mut App) {
    for _ in 0..app.visible_charts {
        app.scroll_down();
    }
}

fn page_up(app: &mut App) {
    for _ in 0..app.visible_charts {
        app.scroll_up();
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
