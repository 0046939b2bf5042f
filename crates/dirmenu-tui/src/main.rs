//! dm: keyed directory menus in the terminal, built with ratatui.
//!
//! This binary initialises the terminal, runs the main event loop,
//! and restores the terminal on exit or panic.

mod app;
mod input;
mod render;
mod ui;

use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dirmenu_core::config::settings::Config;
use dirmenu_core::event::Outcome;
use dirmenu_core::nav::controller::Navigator;
use dirmenu_core::nav::session::BrowseRequest;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::input::handle_key;
use crate::render::{page_listing, render};

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs go to a file so they never interfere with the terminal.
fn init_logging() -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join("dirmenu.log"))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    match Config::default_path().filter(|p| p.exists()) {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            Ok(Config::load(&path)?)
        }
        None => Ok(Config::default()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = load_config()?;
    let start_dir = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => std::env::current_dir()?,
    };

    // Fail before touching the terminal if the start directory is unusable.
    let navigator = match Navigator::start(&config, BrowseRequest::new(start_dir)) {
        Ok(navigator) => navigator,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, App::new(navigator));

    restore_terminal(&mut terminal)?;

    match result {
        Ok(app) => {
            if app.outcome() == Some(Outcome::QuitKeepWindow) {
                print!("{}", page_listing(&app));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> anyhow::Result<App> {
    while !app.should_quit() {
        terminal.draw(|f| render(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let action = handle_key(key, app.mode(), app.navigator().side_keymap());
            app.apply(action);
        }
    }
    Ok(app)
}
