use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use showfinder::fetch::spawn_worker;
use showfinder::{App, ConfigResult, OutputMode, load_config};

/// How long to wait for terminal input before checking for suggestions
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Terminal form with server-backed autocomplete
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file (default: <config dir>/showfinder/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suggestion server base URL, overriding the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let ConfigResult {
        mut config,
        warning,
    } = load_config(args.config.as_deref());
    if let Some(base_url) = args.base_url {
        config.server.base_url = base_url;
    }

    if args.print_config {
        if let Some(warning) = &warning {
            eprintln!("{}", warning);
        }
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut app = App::new(&config);
    if let Some(warning) = warning {
        app.set_status(warning);
    }

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    spawn_worker(&config.server, request_rx, response_tx);
    app.set_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result?;

    if app.output_mode() == Some(OutputMode::Submit) {
        println!("{}", serde_json::to_string_pretty(&app.form_json())?);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.poll_responses();

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Log to a file so output never lands on the TUI
///
/// Path comes from `SHOWFINDER_LOG`, defaulting to the temp directory.
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::var_os("SHOWFINDER_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("showfinder.log"));

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
