use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use fireflap::app::App;
use fireflap::core::{Config, HighScoreStore, CONFIG_FILE, LOG_FILE, STORAGE_FILE};
use fireflap::input::map_event;
use fireflap::leaderboard::view::format_table;
use fireflap::leaderboard::{HttpLeaderboard, LeaderboardBackend};
use fireflap::ui::draw_ui;
use fireflap::utils::logging::init_file_logger;
use fireflap::utils::persistence::data_path;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

enum Command {
    Play,
    Leaderboard,
}

fn print_help() {
    println!("Fireflap - terminal side-scroller\n");
    println!("Usage: fireflap [--server URL] [command]\n");
    println!("Commands:");
    println!("  leaderboard    Print the top scores and exit");
    println!("  --server URL   Leaderboard server (default from config.json)");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let mut args = std::env::args().skip(1);
    let mut server_override: Option<String> = None;
    let mut command = Command::Play;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("fireflap {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--server" => match args.next() {
                Some(url) => server_override = Some(url),
                None => {
                    eprintln!("--server needs a URL");
                    std::process::exit(1);
                }
            },
            "leaderboard" => command = Command::Leaderboard,
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'fireflap --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut config = Config::load(&data_path(CONFIG_FILE)?);
    if let Some(url) = server_override {
        config = config.with_server_url(&url);
    }

    if let Err(e) = init_file_logger(&data_path(LOG_FILE)?) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!(
        "fireflap {} starting, server {}",
        env!("CARGO_PKG_VERSION"),
        config.server_url
    );

    let backend = Arc::new(HttpLeaderboard::new(&config.server_url));

    match command {
        Command::Leaderboard => print_leaderboard(&backend, config.leaderboard_rows),
        Command::Play => run_game(&config, backend),
    }
}

fn print_leaderboard(backend: &HttpLeaderboard, rows: usize) -> io::Result<()> {
    match backend.fetch() {
        Ok(entries) => {
            println!("Top scores from {}\n", backend.base_url());
            if entries.is_empty() {
                println!("No scores yet. Be the first!");
            } else {
                for line in format_table(&entries, rows) {
                    println!("{}", line);
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error loading leaderboard: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_game(config: &Config, backend: Arc<HttpLeaderboard>) -> io::Result<()> {
    let store = HighScoreStore::new(data_path(STORAGE_FILE)?);
    let mut app = App::new(config, backend, store);
    app.refresh_leaderboard();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = game_loop(&mut terminal, &mut app, config.frame_interval_ms);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    log::info!("fireflap exiting");
    result
}

fn game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    frame_interval_ms: u64,
) -> io::Result<()> {
    let frame_interval = Duration::from_millis(frame_interval_ms);
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    while !app.should_quit {
        terminal.draw(|f| draw_ui(f, app))?;

        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            let ev = event::read()?;
            if let Some(input) = map_event(&ev, app.session.screen) {
                app.handle_input(input);
            }
        }

        if last_frame.elapsed() >= frame_interval {
            app.update(&mut rng);
            last_frame = Instant::now();
        }
    }

    Ok(())
}
