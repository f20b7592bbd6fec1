use anyhow::Context;
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
            MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod capabilities;
mod cli;
mod command_id;
mod dispatcher;
mod domain_models;
mod export;
mod icons;
mod keybindings;
mod keymap;
mod layout;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use lab_report_config::AppConfig;
use lab_report_document::PdfRenderer;
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting lab-report, logging to {}", log_file.display());

    let mut app_config = AppConfig::load(args.config.as_deref());
    if let Some(dir) = args.export_dir {
        app_config.export_dir = dir;
    }
    icons::install(app_config.icon_style);
    log::info!("Exports go to {}", app_config.export_path().display());

    let mut store = Store::new(AppState::new(app_config));
    for middleware in middleware::default_chain(Arc::new(PdfRenderer::default()))? {
        store.add_middleware(middleware);
    }

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore the terminal before reporting anything
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    if let Some(err) = &store.state().fatal_error {
        log::error!("Exiting after fatal error: {}", err);
        anyhow::bail!("{}", err);
    }

    log::info!("Exiting lab-report");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    loop {
        // Clicks are hit-tested against the area that was just drawn
        let screen = terminal
            .draw(|frame| {
                views::render(store.state(), frame.area(), frame);
            })?
            .area;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    store.dispatch(Action::Global(GlobalAction::MouseClicked {
                        column: mouse.column,
                        row: mouse.row,
                        screen,
                    }));
                }
                _ => {}
            }
        }

        // Results of background work (PDF export) arrive here
        store.process_pending();
    }

    Ok(())
}
