mod audio;
mod input;
mod ui;

use anyhow::{Context, Result};
use audio::SoundSink;
use chrono::Utc;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{map_key, InputResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use trash_toss::core::persistence::data_path;
use trash_toss::game::history::ScoreHistory;
use trash_toss::game::{process_frame, TrashGame};
use trash_toss::{GameConfig, LOG_FILE, MAX_FRAME_DELTA_SECONDS, TICK_INTERVAL_MS};

struct Options {
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    init_logging();

    let config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut sink = audio::sink_for(&config.audio);
    let mut history = ScoreHistory::load();
    let mut game = TrashGame::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = run(
        &mut terminal,
        &mut game,
        &mut rng,
        sink.as_mut(),
        &mut history,
    );

    // Cleanup terminal, even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    outcome?;
    if let Some(best) = history.best_score {
        println!("Best score: {}", best);
    }
    println!("Thanks for sorting!");
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut TrashGame,
    rng: &mut StdRng,
    sink: &mut dyn SoundSink,
    history: &mut ScoreHistory,
) -> Result<()> {
    let mut last_frame = Instant::now();
    let mut new_best = false;

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, game, history.best_score, new_best))?;

        // Held until after the tick so the countdown is checked first
        let mut pressed = None;
        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event) {
                    InputResult::Quit => return Ok(()),
                    InputResult::Game(input) => pressed = Some(input),
                    InputResult::Ignore => {}
                }
            }
        }

        // Clamp so a stalled terminal doesn't eat the whole countdown in one frame
        let now = Instant::now();
        let dt = now
            .duration_since(last_frame)
            .as_secs_f64()
            .min(MAX_FRAME_DELTA_SECONDS);
        last_frame = now;

        let tick = process_frame(game, dt, pressed, rng);
        for sound in &tick.sounds {
            sink.play(*sound);
        }

        if let Some(result) = tick.round_ended {
            new_best = history.record(game.score, result, Utc::now());
            if new_best {
                tracing::info!(score = game.score, "new best score");
            }
            if let Err(e) = history.save() {
                tracing::warn!(error = %e, "failed to save score history");
            }
        }
    }
}

/// Log to ~/.trash_toss/trash_toss.log; stderr belongs to the TUI.
fn init_logging() {
    let file = data_path(LOG_FILE).and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
    });
    let file = match file.context("opening log file") {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: {:#}", e);
            return;
        }
    };

    let filter =
        EnvFilter::try_from_env("TRASH_TOSS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options { seed: None };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    options.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--version" | "-v" => {
                println!("trash_toss {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Trash Toss - sort the trash before time runs out\n");
                println!("Usage: trash_toss [options]\n");
                println!("Options:");
                println!("  -s, --seed <N>  Fixed random seed for item spawns");
                println!("  -v, --version   Show version information");
                println!("  -h, --help      Show this help message");
                println!();
                println!("Controls: Left = recycle bin, Right = trash bin, Enter = start/restart, q = quit");
                println!("Config:   ~/.trash_toss/config.json");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'trash_toss --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}
