//! Terminal user interface for agidash

pub mod event;

use crate::app::{Actions, App};
use crate::ui;
use anyhow::Result;
use event::{Command, Event, Handler};
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup, rendering, or event polling fails
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = Handler::from_config(&app.config);
    let actions = Actions::new();

    let result = run_loop(&mut terminal, &mut app, &events, &actions);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &Handler,
    actions: &Actions,
) -> Result<()> {
    loop {
        let mut frame_area = Rect::default();
        terminal.draw(|frame| {
            frame_area = frame.area();
            ui::render(frame, app);
        })?;

        match events.next()? {
            Event::Tick | Event::Resize(_, _) => {}
            Event::Command(command) => handle_command(app, actions, command)?,
            Event::Click { column, row } => handle_click(app, actions, column, row, frame_area)?,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_command(app: &mut App, actions: &Actions, command: Command) -> Result<()> {
    match command {
        Command::Quit => app.should_quit = true,
        Command::MoveUp => {
            app.clear_messages();
            app.select_prev();
        }
        Command::MoveDown => {
            app.clear_messages();
            app.select_next();
        }
        Command::Activate => actions.activate_cursor(app)?,
    }
    Ok(())
}

/// Click-to-activate: a left click on a sidebar row moves the cursor there
/// and activates the entry, matching what Enter would do.
fn handle_click(
    app: &mut App,
    actions: &Actions,
    column: u16,
    row: u16,
    frame_area: Rect,
) -> Result<()> {
    let (sidebar_area, _, _) = ui::panes(frame_area);
    if let Some(index) = ui::components::row_at(sidebar_area, column, row) {
        if index < app.nav_len() {
            app.clear_messages();
            app.cursor = index;
            actions.activate_cursor(app)?;
        }
    }

    Ok(())
}
