use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

/// Doctor directory browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial location, e.g. "/?specialty=Dentist&sort=fees" or "/doctor/12"
    #[arg(short, long, default_value = "/")]
    location: String,

    /// Directory endpoint URL (overrides the config file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Enable debug logging to <temp dir>/docfinder-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

mod app;
mod config;
mod handlers;
mod ui;
mod utils;

use config::Config;
use docfinder::api::DirectoryClient;
use docfinder::services::{self, ApiRequest, ApiResponse};
use docfinder::model;

pub struct App {
    pub model: model::Model,

    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    endpoint_url: String,
}

impl App {
    fn new(config: &Config, location: &str) -> Self {
        let client = DirectoryClient::new(config.endpoint_url.clone());
        let (api_tx, api_rx) = services::spawn_api_service(client);

        let mut model = model::Model::new(location, config.vim_mode);
        model.ui.suggestion_limit = config.suggestion_limit;

        let mut app = Self {
            model,
            api_tx,
            api_rx,
            endpoint_url: config.endpoint_url.clone(),
        };

        let view_id = app.model.begin_view();
        app.request_directory(view_id);
        app
    }

    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    fn handle_key(&mut self, key: event::KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        let log_path = utils::init_debug_logging()?;
        tracing::info!(path = %log_path.display(), "debug logging enabled");
    }

    let (mut config, config_path) = Config::load(args.config)?;
    match &config_path {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file found, using defaults"),
    }

    // Override config with CLI flags
    if let Some(endpoint) = args.endpoint {
        config.endpoint_url = endpoint;
    }
    if args.vim {
        config.vim_mode = true;
    }

    let mut app = App::new(&config, &args.location);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        // Process fetch results (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Short poll so fetch results show up promptly; yield to the worker between polls
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        } else {
            tokio::task::yield_now().await;
        }
    }

    Ok(())
}
