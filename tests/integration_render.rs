//! Integration tests for TUI rendering
//!
//! Uses ratatui's `TestBackend` to verify rendering without a real terminal.

use agidash::app::App;
use agidash::config::{Config, NavEntry};
use agidash::ui;
use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Cell;

fn render_to_text(app: &App) -> Result<String> {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| ui::render(frame, app))?;

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.cell((x, y)).map_or(" ", Cell::symbol));
        }
        text.push('\n');
    }
    Ok(text)
}

#[test]
fn default_dashboard_renders_enabled_entries_only() -> Result<()> {
    let app = App::new(Config::default());
    let text = render_to_text(&app)?;

    assert!(text.contains("Agents"), "missing Agents row:\n{text}");
    assert!(text.contains("Tools"), "missing Tools row:\n{text}");
    assert!(text.contains("Twitter"), "missing Twitter row:\n{text}");

    // Disabled entries stay in config but never render.
    assert!(!text.contains("APM"), "disabled APM rendered:\n{text}");
    assert!(
        !text.contains("Embeddings"),
        "disabled Embeddings rendered:\n{text}"
    );
    Ok(())
}

#[test]
fn unselected_dashboard_shows_hint_and_key_help() -> Result<()> {
    let app = App::new(Config::default());
    let text = render_to_text(&app)?;

    assert!(text.contains("Select a section from the sidebar."));
    assert!(text.contains("[q]uit"));
    Ok(())
}

#[test]
fn active_section_is_echoed_in_content_pane() -> Result<()> {
    let mut app = App::new(Config::default());
    app.sidebar.select("agents");

    let text = render_to_text(&app)?;
    assert!(text.contains("Section \"agents\" is active."));
    assert!(text.contains("\u{25b8}"), "missing selected marker:\n{text}");
    Ok(())
}

#[test]
fn deselecting_returns_to_hint() -> Result<()> {
    let mut app = App::new(Config::default());
    app.sidebar.select("tools");
    app.sidebar.select("tools");

    let text = render_to_text(&app)?;
    assert!(text.contains("Select a section from the sidebar."));
    Ok(())
}

#[test]
fn error_message_takes_over_the_status_line() -> Result<()> {
    let mut app = App::new(Config::default());
    app.set_error("oauth client_id is not configured");

    let text = render_to_text(&app)?;
    assert!(text.contains("Error: oauth client_id is not configured"));
    assert!(!text.contains("[q]uit"));
    Ok(())
}

#[test]
fn status_message_renders_without_error_prefix() -> Result<()> {
    let mut app = App::new(Config::default());
    app.set_status("Opening twitter.com in browser");

    let text = render_to_text(&app)?;
    assert!(text.contains("Opening twitter.com in browser"));
    assert!(!text.contains("Error:"));
    Ok(())
}

#[test]
fn custom_nav_entries_render_in_order() -> Result<()> {
    let mut config = Config::default();
    config.nav = vec![
        NavEntry::toggle("runs", "Runs", "#"),
        NavEntry::toggle("models", "Models", "*"),
    ];

    let app = App::new(config);
    let text = render_to_text(&app)?;

    let runs = text.find("Runs").unwrap_or(usize::MAX);
    let models = text.find("Models").unwrap_or(usize::MAX);
    assert!(runs < models, "rows out of order:\n{text}");
    Ok(())
}
