//! Interactive KOM profile editor.
//!
//! The terminal loop is a thin shell around [`app::EditorApp`], which owns
//! every state transition and is tested without a terminal.

mod app;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use legiscope_editor::EditorSession;
use ratatui::{backend::CrosstermBackend, Terminal};

pub use app::ProfileStore;
use app::EditorApp;

pub fn run_editor(session: EditorSession, store: &mut dyn ProfileStore) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, session, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: EditorSession,
    store: &mut dyn ProfileStore,
) -> Result<()> {
    let mut app = EditorApp::new(session);
    let tick_rate = Duration::from_millis(250);

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key, store);
            }
        }
    }

    Ok(())
}
