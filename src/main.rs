use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tierforge::app::App;
use tierforge::build_info;
use tierforge::core::constants::INPUT_POLL_MS;
use tierforge::input::map_key;
use tierforge::ui::draw_ui;
use tierforge::EconomyConfig;

struct CliOptions {
    config_path: Option<PathBuf>,
    debug: bool,
    log_file: Option<PathBuf>,
}

fn print_help() {
    println!("Tierforge - Tiered Idle Economy\n");
    println!("Usage: tierforge [options]\n");
    println!("Options:");
    println!("  --config PATH    Load economy settings from a JSON file");
    println!("  --debug          Enable the testing panel (toggle with `)");
    println!("  --log-file PATH  Write diagnostic logs to PATH");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        config_path: None,
        debug: false,
        log_file: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--debug" => options.debug = true,
            "--config" | "--log-file" if i + 1 < args.len() => {
                let path = Some(PathBuf::from(&args[i + 1]));
                if args[i] == "--config" {
                    options.config_path = path;
                } else {
                    options.log_file = path;
                }
                i += 1;
            }
            other => {
                eprintln!("Unknown or incomplete option: {}", other);
                eprintln!("Run 'tierforge --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    options
}

/// Diagnostics go to a file only; the terminal belongs to the UI.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    if let Some(path) = &options.log_file {
        init_logging(path)?;
    }

    let config = match &options.config_path {
        Some(path) => match EconomyConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Could not load {}: {}", path.display(), err);
                std::process::exit(1);
            }
        },
        None => EconomyConfig::default(),
    };
    tracing::info!(
        tiers = config.tiers.len(),
        rarities = config.runes.len(),
        debug = options.debug,
        "starting tierforge"
    );

    let mut app = App::new(config, options.debug);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!("Goodbye!");
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| draw_ui(frame, app))?;

        // Wake up in time for the next tick
        let now = Instant::now();
        let timeout = if app.clock.is_running() {
            app.clock
                .time_until_tick(now)
                .min(Duration::from_millis(INPUT_POLL_MS))
        } else {
            Duration::from_millis(INPUT_POLL_MS)
        };

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    let action = map_key(app.screen, app.overlay, app.debug_enabled, key_event);
                    app.handle_action(action, Instant::now());
                }
            }
        }

        app.on_frame(Instant::now());
    }
    Ok(())
}
