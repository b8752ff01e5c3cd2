use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use sky_hopper::core::FixedStep;
use sky_hopper::input::{map_key, map_mouse};
use sky_hopper::utils::{build_info, logging};
use sky_hopper::{App, AppEvent, GameConfig, ProfileStore};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

struct CliOptions {
    seed: Option<u64>,
    profile: Option<PathBuf>,
}

fn print_help() {
    println!("Sky Hopper - Terminal Arcade Game\n");
    println!("Usage: sky-hopper [options]\n");
    println!("Options:");
    println!("  --seed <n>        Use a fixed random seed");
    println!("  --profile <path>  Use an alternate profile file");
    println!("  --version         Show version information");
    println!("  --help            Show this help message");
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'sky-hopper --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> CliOptions {
    let mut options = CliOptions {
        seed: None,
        profile: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match args.next().and_then(|v| v.parse::<u64>().ok()) {
                Some(seed) => options.seed = Some(seed),
                None => usage_error("--seed needs a non-negative integer"),
            },
            "--profile" => match args.next() {
                Some(path) => options.profile = Some(PathBuf::from(path)),
                None => usage_error("--profile needs a path"),
            },
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
    }

    options
}

fn main() -> io::Result<()> {
    let options = parse_args();

    let log_path = logging::init();

    let store = match options.profile {
        Some(path) => Some(ProfileStore::new(path)),
        None => match ProfileStore::default_location() {
            Ok(store) => Some(store),
            Err(e) => {
                // Still playable; nothing is saved.
                warn!(error = %e, "No profile location, running without persistence");
                None
            }
        },
    };

    let config = GameConfig::default();
    let profile = store.as_ref().map(|s| s.load()).unwrap_or_default();
    let mut app = App::new(config.clone(), profile, store)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        version = %build_info::version_line(),
        seed = ?options.seed,
        log = ?log_path,
        "Starting"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &mut rng, &config);

    // Flush on every exit path, including terminal errors.
    if !app.should_quit() {
        app.quit();
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rng: &mut StdRng,
    config: &GameConfig,
) -> io::Result<()> {
    let mut clock = FixedStep::new(config.tick_ms);
    let mut last_frame = Instant::now();

    terminal.draw(|frame| sky_hopper::ui::draw(frame, app))?;

    while !app.should_quit() {
        // Poll input until the next tick is due
        if event::poll(clock.until_next())? {
            let command = match event::read()? {
                Event::Key(key) => map_key(app.screen(), key),
                Event::Mouse(mouse) => map_mouse(app.screen(), mouse),
                _ => None,
            };
            if let Some(command) = command {
                app.handle(command);
            }
        }

        let now = Instant::now();
        let due = clock.advance(now - last_frame);
        last_frame = now;
        if due == 0 {
            continue;
        }

        for _ in 0..due {
            app.tick(rng);
        }

        for event in app.drain_events() {
            if let AppEvent::RunEnded {
                score, new_record, ..
            } = event
            {
                info!(score, new_record, "Run finished");
            }
        }

        terminal.draw(|frame| sky_hopper::ui::draw(frame, app))?;
    }

    Ok(())
}
