use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use rating_control::app::App;
use rating_control::config::Config;
use rating_control::events::{Action, EventHandler};
use rating_control::{log, tui};

const USAGE: &str = "\
Usage: rating-control [OPTIONS]

Options:
  -t, --title <TEXT>      Heading shown above the segments
  -d, --domain <A,B,...>  Comma-separated labels to rate over
  -i, --initial <LABEL>   Label selected at startup
  -h, --help              Print this help";

/// Command-line overrides for the config file
#[derive(Debug, Default)]
struct CliArgs {
    title: Option<String>,
    domain: Option<Vec<String>>,
    initial: Option<String>,
}

fn parse_args() -> Option<CliArgs> {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).cloned();
        match args[i].as_str() {
            "--help" | "-h" => return None,
            "--title" | "-t" if value.is_some() => {
                cli.title = value;
                i += 1;
            }
            "--domain" | "-d" if value.is_some() => {
                cli.domain = value.map(|list| list.split(',').map(str::to_string).collect());
                i += 1;
            }
            "--initial" | "-i" if value.is_some() => {
                cli.initial = value;
                i += 1;
            }
            flag => {
                eprintln!("Warning: ignoring unrecognized argument '{}'", flag);
            }
        }
        i += 1;
    }

    Some(cli)
}

#[tokio::main]
async fn main() -> Result<()> {
    let Some(cli) = parse_args() else {
        println!("{}", USAGE);
        return Ok(());
    };

    let config = Config::load().with_overrides(cli.title, cli.domain, cli.initial);

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init(&config.log_dir()) {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    log::log(&format!("Final selection: {}", app.selection));
    println!("{}", app.selection);
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    while !app.should_quit {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        if action != Action::None {
                            log::log_event(&format!("{:?}", action));
                        }
                        app.apply(action);
                    }
                    Some(Err(e)) => {
                        log::log(&format!("Terminal event error: {}", e));
                        return Err(e.into());
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                app.apply(Action::Quit);
            }
        }
    }

    Ok(())
}
