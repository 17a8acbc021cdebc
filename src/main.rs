mod input;
mod ui;

use betsim::app::App;
use betsim::build_info;
use betsim::config::{parse_args, usage, AppConfig, CliCommand};
use betsim::constants::INPUT_POLL_MS;
use betsim::graph_store::GraphStore;
use betsim::logging;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{handle_key, InputResult, UiState};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;
use ui::draw_ui;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(CliCommand::Run { dir, verbose }) => {
            let mut config = match dir {
                Some(dir) => AppConfig::with_dir(dir),
                None => AppConfig::from_home()?,
            };
            config.verbose = verbose;
            config
        }
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_string("betsim"));
            std::process::exit(0);
        }
        Ok(CliCommand::Help) => {
            println!("{}", usage());
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'betsim --help' for usage.");
            std::process::exit(1);
        }
    };

    logging::init_file_logging(&config.log_file, config.verbose)?;
    info!(version = %build_info::version_string("betsim"), "starting");

    let store = GraphStore::open(&config.graphs_dir).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Could not open {}: {}", config.graphs_dir.display(), e),
        )
    })?;
    let mut app = App::new(store, rand::thread_rng());
    let mut ui_state = UiState::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &mut ui_state);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn run_loop<R: rand::Rng>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<R>,
    ui_state: &mut UiState,
) -> io::Result<()> {
    loop {
        let names_len = app.store.list_graph_names().len();
        ui_state.graph_list.clamp(names_len);

        terminal.draw(|f| draw_ui(f, app, ui_state))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                // Windows reports releases too
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if let InputResult::Quit = handle_key(key_event, app, ui_state) {
                    return Ok(());
                }
            }
        }
    }
}
